use crate::base;

/// Sales per period, one row per period in the chart bounds. Bars measure
/// revenue, or the sale count if no sale carries an amount.
pub struct Barchart {
    charset: base::Charset,
    rows: Vec<Row>,
    max_measure: i64,
    max_barlen: usize,
}

struct Row {
    label: String,
    measure: i64,
    value: String,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Config {
    pub charset: base::Charset,
    pub bounds: base::Interval,
    pub period: base::Period,
    pub term_width: usize,
    pub sl: base::Salelist,
}

impl Config {
    pub fn to_barchart(&self) -> Barchart {
        let bounds = self.sl.spanned_interval().intersection(self.bounds);
        let sales = base::Criteria::new().with_interval(bounds).apply(self.sl.as_slice());
        let stats = base::SaleStats::new(sales, self.period);

        let fmt = self.period.label_format();
        let rows = bounds
            .iter(self.period)
            .map(|interval| {
                let key = interval.start.first_of(self.period);
                let count = stats.by_period.get(&key).unwrap_or_default();
                let label = key.format(fmt).unwrap_or_else(|_| key.to_string());
                match &stats.revenue {
                    Some(rev) => {
                        let amount = rev.by_period.get(&key).unwrap_or_default();
                        Row {
                            label,
                            measure: amount.0,
                            value: format!("{} / {}", count, amount),
                        }
                    }
                    None => Row {
                        label,
                        measure: count as i64,
                        value: count.to_string(),
                    },
                }
            })
            .collect::<Vec<_>>();

        let label_charlen = rows.iter().map(|r| r.label.chars().count()).max().unwrap_or_default();
        let value_charlen = rows.iter().map(|r| r.value.chars().count()).max().unwrap_or_default();
        let max_barlen = self
            .term_width
            .max(base::util::MIN_TERM_WIDTH)
            .saturating_sub(
                label_charlen
                    + base::util::BOUNDING_SPACES_COUNT
                    + 1 // vertical divider just before bar
                    + value_charlen,
            );

        Barchart {
            charset: self.charset.clone(),
            max_measure: rows.iter().map(|r| r.measure).max().unwrap_or_default(),
            rows,
            max_barlen,
        }
    }
}

impl Barchart {
    fn barlen(&self, measure: i64) -> usize {
        if self.max_measure <= 0 || measure <= 0 {
            return 0;
        }
        let x = (measure as f64) / (self.max_measure as f64) * (self.max_barlen as f64);
        self.max_barlen.min(x.round() as usize)
    }

    fn draw(&self, w: &mut impl std::fmt::Write, row: &Row) -> std::fmt::Result {
        write!(w, "{} {}", row.label, self.charset.chart_axis)?;
        let barlen = self.barlen(row.measure);
        if barlen > 0 {
            let mut bars = self.charset.chart_bar.to_string().repeat(barlen);
            if self.charset.color {
                bars = colored::Colorize::green(bars.as_str()).to_string();
            }
            w.write_str(&bars)?;
            w.write_char(' ')?;
        }
        writeln!(w, "{}", row.value)
    }
}

impl std::fmt::Display for Barchart {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.rows.iter().try_for_each(|row| self.draw(f, row))
    }
}
