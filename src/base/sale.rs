use crate::base;

/// A completed redemption. Read-only on this side of the API.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: String,
    pub date: String,
    pub phone_number: String,
    pub proxy_code: String,
    pub category: base::RecordCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<base::Cents>,
}

impl Sale {
    /// Calendar day of the sale, if its date is parseable.
    pub fn day(&self) -> Option<base::Date> {
        self.date.parse().ok()
    }
}

impl base::Filterable for Sale {
    fn haystack(&self) -> &str {
        &self.phone_number
    }

    fn category(&self) -> &base::RecordCategory {
        &self.category
    }

    /// A sale whose date cannot be parsed only passes the unbounded interval.
    fn passes_interval(&self, interval: base::Interval) -> bool {
        match self.day() {
            Some(dt) => interval.contains(dt),
            None => interval.is_max(),
        }
    }
}

/// All sales, in the order the API returned them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Salelist(Vec<Sale>);

impl Salelist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[Sale] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sale> {
        self.0.iter()
    }

    /// Smallest interval covering every parseable sale date.
    pub fn spanned_interval(&self) -> base::Interval {
        let mut days = self.0.iter().filter_map(Sale::day);
        let Some(first) = days.next() else {
            return base::Interval::EMPTY;
        };
        let (start, end) = days.fold((first, first), |(lo, hi), dt| (lo.min(dt), hi.max(dt)));
        base::Interval { start, end }
    }
}

impl FromIterator<Sale> for Salelist {
    fn from_iter<T: IntoIterator<Item = Sale>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a Sale> for Salelist {
    fn from_iter<T: IntoIterator<Item = &'a Sale>>(iter: T) -> Self {
        iter.into_iter().cloned().collect()
    }
}

impl std::fmt::Display for Salelist {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string_pretty(&self.0).map_err(|_| std::fmt::Error)?;
        writeln!(f, "{}", s)
    }
}

impl std::str::FromStr for Salelist {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Ok(Self::new());
        }
        serde_json::from_str(s).map(Self)
    }
}

impl TryFrom<&str> for Salelist {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
