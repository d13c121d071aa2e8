use crate::base;

/// A record that can be narrowed down by [`Criteria`].
pub trait Filterable {
    /// Field matched by the free-text search.
    fn haystack(&self) -> &str;

    fn category(&self) -> &base::RecordCategory;

    /// Records without a used flag pass every used criterion.
    fn passes_used(&self, _want: bool) -> bool {
        true
    }

    /// Records without a date pass every interval.
    fn passes_interval(&self, _interval: base::Interval) -> bool {
        true
    }
}

/// Filter input as typed by the user. Empty fields impose no constraint.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawCriteria<'a> {
    pub search: &'a str,
    /// Display label, e.g. `"50"`.
    pub category: &'a str,
    /// `true`/`false`, or `used`/`available`.
    pub used: &'a str,
    pub start: &'a str,
    pub end: &'a str,
}

/// Normalized filter. Every active criterion must hold for a record to pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    search: Option<String>,
    category: Option<base::CategoryToken>,
    used: Option<bool>,
    interval: base::Interval,
}

impl Criteria {
    /// Criteria that every record passes.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: &str) -> Self {
        self.search = match search {
            "" => None,
            s => Some(s.to_lowercase()),
        };
        self
    }

    pub fn with_category(mut self, category: base::CategoryToken) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_used(mut self, used: bool) -> Self {
        self.used = Some(used);
        self
    }

    pub fn with_interval(mut self, interval: base::Interval) -> Self {
        self.interval = interval;
        self
    }

    /// Builds criteria from raw user input. Fields that fail to parse are
    /// treated as absent.
    pub fn lenient(raw: &RawCriteria) -> Self {
        let mut criteria = Self::new().with_search(raw.search);

        match raw.category.trim() {
            "" => {}
            s => match base::category::to_backend(s) {
                Ok(token) => criteria.category = Some(token),
                Err(e) => tracing::warn!(category = s, error = %e, "ignoring category filter"),
            },
        }

        match raw.used.trim().to_ascii_lowercase().as_str() {
            "" => {}
            "true" | "used" => criteria.used = Some(true),
            "false" | "available" => criteria.used = Some(false),
            s => tracing::warn!(used = s, "ignoring status filter"),
        }

        fn bound(s: &str, which: &str) -> Option<base::Date> {
            match s.trim() {
                "" => None,
                s => match s.parse::<base::Date>() {
                    Ok(dt) => Some(dt),
                    Err(e) => {
                        tracing::warn!(date = s, error = %e, "ignoring {} date filter", which);
                        None
                    }
                },
            }
        }
        criteria.interval = base::Interval {
            start: bound(raw.start, "start").unwrap_or(base::Date::MIN),
            end: bound(raw.end, "end").unwrap_or(base::Date::MAX),
        };

        criteria
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::new()
    }

    pub fn matches<T>(&self, record: &T) -> bool
    where
        T: Filterable,
    {
        if let Some(needle) = &self.search {
            if !record.haystack().to_lowercase().contains(needle.as_str()) {
                return false;
            }
        }
        if let Some(token) = self.category {
            if record.category().token() != Some(token) {
                return false;
            }
        }
        if let Some(used) = self.used {
            if !record.passes_used(used) {
                return false;
            }
        }
        if !self.interval.is_max() && !record.passes_interval(self.interval) {
            return false;
        }
        true
    }

    /// Returns the records passing all criteria, in their original order.
    pub fn apply<'a, T>(&self, records: &'a [T]) -> Vec<&'a T>
    where
        T: Filterable,
    {
        records.iter().filter(|r| self.matches(*r)).collect()
    }
}
