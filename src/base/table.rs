use crate::base;

const COLUMN_GAP: &str = "  ";
const NONE: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

/// Column-aligned listing of records with an underlined header.
pub struct Table {
    charset: base::Charset,
    columns: Vec<(&'static str, Align)>,
    rows: Vec<Vec<String>>,
    widths: Vec<usize>,
}

impl Table {
    fn new(charset: base::Charset, columns: Vec<(&'static str, Align)>, rows: Vec<Vec<String>>) -> Self {
        let mut widths = columns.iter().map(|(h, _)| h.chars().count()).collect::<Vec<_>>();
        for row in &rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.chars().count());
            }
        }
        Self {
            charset,
            columns,
            rows,
            widths,
        }
    }

    /// Codes with all but the last few characters masked if `mask` is set.
    pub fn for_codes<'a, I>(charset: base::Charset, codes: I, mask: bool) -> Self
    where
        I: IntoIterator<Item = &'a base::UploadedCode>,
    {
        let columns = vec![
            ("ID", Align::Right),
            ("Code", Align::Left),
            ("Category", Align::Left),
            ("Status", Align::Left),
            ("Uploaded", Align::Left),
            ("Used", Align::Left),
        ];
        let day = |raw: Option<&str>, parsed: Option<base::Date>| match (raw, parsed) {
            (None, _) => NONE.to_string(),
            (Some(_), Some(dt)) => dt.to_string(),
            (Some(s), None) => s.to_string(),
        };
        let rows = codes
            .into_iter()
            .map(|c| {
                vec![
                    c.id.to_string(),
                    match mask {
                        true => base::util::mask(&c.code, base::util::VISIBLE_CODE_CHARS),
                        false => c.code.clone(),
                    },
                    c.category.label().to_string(),
                    c.status().to_string(),
                    day(c.uploaded_at.as_deref(), c.uploaded_on()),
                    day(c.used_at.as_deref(), c.used_on()),
                ]
            })
            .collect();
        Self::new(charset, columns, rows)
    }

    pub fn for_sales<'a, I>(charset: base::Charset, sales: I) -> Self
    where
        I: IntoIterator<Item = &'a base::Sale>,
    {
        let columns = vec![
            ("Date", Align::Left),
            ("Phone Number", Align::Left),
            ("Proxy Code", Align::Left),
            ("Category", Align::Left),
            ("Amount", Align::Right),
        ];
        let rows = sales
            .into_iter()
            .map(|s| {
                vec![
                    s.day().map_or_else(|| s.date.clone(), |dt| dt.to_string()),
                    s.phone_number.clone(),
                    s.proxy_code.clone(),
                    s.category.label().to_string(),
                    s.amount.map_or_else(|| NONE.to_string(), |a| a.to_string()),
                ]
            })
            .collect();
        Self::new(charset, columns, rows)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn draw<'a>(
        &self,
        w: &mut impl std::fmt::Write,
        cells: impl Iterator<Item = std::borrow::Cow<'a, str>>,
    ) -> std::fmt::Result {
        let mut line = String::new();
        for (i, cell) in cells.enumerate() {
            if i > 0 {
                line.push_str(COLUMN_GAP);
            }
            let pad = self.widths[i].saturating_sub(cell.chars().count());
            match self.columns[i].1 {
                Align::Left => {
                    line.push_str(&cell);
                    line.extend(std::iter::repeat_n(' ', pad));
                }
                Align::Right => {
                    line.extend(std::iter::repeat_n(' ', pad));
                    line.push_str(&cell);
                }
            }
        }
        writeln!(w, "{}", line.trim_end())
    }
}

impl std::fmt::Display for Table {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use std::borrow::Cow;
        self.draw(f, self.columns.iter().map(|(h, _)| Cow::from(*h)))?;
        self.draw(
            f,
            self.widths
                .iter()
                .map(|&n| Cow::from(self.charset.dash.to_string().repeat(n))),
        )?;
        for row in &self.rows {
            self.draw(f, row.iter().map(|c| Cow::from(c.as_str())))?;
        }
        Ok(())
    }
}
