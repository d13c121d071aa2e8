use crate::base;

/// Categories the backend currently sells, as listed by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Categoryfeed(Vec<base::RecordCategory>);

impl Categoryfeed {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &base::RecordCategory> {
        self.0.iter()
    }

    /// Categories to offer in selection lists: the feed if it lists any,
    /// otherwise the full canonical set.
    pub fn offered(&self) -> Vec<base::RecordCategory> {
        if self.0.is_empty() {
            base::category::all_tokens().map(Into::into).collect()
        } else {
            self.0.clone()
        }
    }

    /// Default category for new uploads: the first known token on offer.
    pub fn default_token(&self) -> base::CategoryToken {
        self.0
            .iter()
            .find_map(base::RecordCategory::token)
            .unwrap_or(base::CategoryToken::Fifty)
    }
}

impl std::fmt::Display for Categoryfeed {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string(&self.0).map_err(|_| std::fmt::Error)?;
        writeln!(f, "{}", s)
    }
}

impl std::str::FromStr for Categoryfeed {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(s).map(Self)
    }
}

impl TryFrom<&str> for Categoryfeed {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
