use crate::base;

/// Label/value listing with dashes leading to right-aligned values, e.g.
///
/// ```text
/// Total ----- 3
/// Available - 2
/// ```
///
/// Sections are separated by a horizontal rule.
pub struct Summary {
    charset: base::Charset,
    sections: Vec<Vec<(String, String)>>,
    alignment_charlen: usize,
}

impl Summary {
    fn new(charset: base::Charset, sections: Vec<Vec<(String, String)>>) -> Self {
        let sections = sections
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>();
        let alignment_charlen = sections
            .iter()
            .flatten()
            .map(|(label, value)| {
                label.chars().count()
                    + base::util::BOUNDING_SPACES_COUNT
                    + base::util::MIN_DASHES_COUNT
                    + value.chars().count()
            })
            .max()
            .unwrap_or_default();
        Self {
            charset,
            sections,
            alignment_charlen,
        }
    }

    pub fn for_codes(charset: base::Charset, stats: &base::CodeStats) -> Self {
        let totals = vec![
            ("Total".into(), stats.total.to_string()),
            ("Available".into(), stats.available.to_string()),
            ("Used".into(), stats.used.to_string()),
        ];
        let categories = stats
            .by_category
            .iter()
            .map(|(bucket, n)| (bucket.label().to_string(), n.to_string()))
            .collect();
        Self::new(charset, vec![totals, categories])
    }

    pub fn for_sales(charset: base::Charset, stats: &base::SaleStats, currency: &str) -> Self {
        let totals = vec![("Sales".into(), stats.total.to_string())];
        let categories = stats
            .by_category
            .iter()
            .map(|(bucket, n)| (bucket.label().to_string(), n.to_string()))
            .collect();
        let mut revenue = Vec::new();
        if let Some(rev) = &stats.revenue {
            let fmt = stats.period.label_format();
            for (dt, amount) in rev.by_period.iter() {
                let label = dt.format(fmt).unwrap_or_else(|_| dt.to_string());
                revenue.push((label, amount.to_string()));
            }
            revenue.push((format!("Revenue ({})", currency), rev.total.to_string()));
        }
        Self::new(charset, vec![totals, categories, revenue])
    }

    /// Prices of every category, zero where none is set.
    pub fn for_prices(charset: base::Charset, pl: &base::Pricelist, currency: &str) -> Self {
        let prices = base::category::all_tokens()
            .map(|token| (token.display().to_string(), pl.price(token).to_string()))
            .collect();
        Self::new(charset, vec![vec![("Currency".into(), currency.into())], prices])
    }

    fn draw(&self, w: &mut impl std::fmt::Write, (label, value): &(String, String)) -> std::fmt::Result {
        let dash_count = self.alignment_charlen
            - label.chars().count()
            - base::util::BOUNDING_SPACES_COUNT
            - value.chars().count();
        w.write_str(label)?;
        w.write_char(' ')?;
        for _ in 0..dash_count {
            w.write_char(self.charset.dash)?;
        }
        w.write_char(' ')?;
        writeln!(w, "{}", value)
    }
}

impl std::fmt::Display for Summary {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use std::fmt::Write;
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                for _ in 0..self.alignment_charlen {
                    f.write_char(self.charset.rule)?;
                }
                f.write_char('\n')?;
            }
            section.iter().try_for_each(|row| self.draw(f, row))?;
        }
        Ok(())
    }
}
