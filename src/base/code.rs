use crate::base;

/// A redeemable code as served by the admin API.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedCode {
    pub id: u64,
    pub code: String,
    pub category: base::RecordCategory,
    #[serde(default)]
    pub uploaded_at: Option<String>,
    #[serde(default)]
    pub used_at: Option<String>,
    #[serde(default)]
    pub used: bool,
}

impl UploadedCode {
    pub fn status(&self) -> &'static str {
        if self.used { "Used" } else { "Available" }
    }

    /// Calendar day of upload, if present and parseable.
    pub fn uploaded_on(&self) -> Option<base::Date> {
        self.uploaded_at.as_deref().and_then(|s| s.parse().ok())
    }

    /// Calendar day of redemption, if present and parseable.
    pub fn used_on(&self) -> Option<base::Date> {
        self.used_at.as_deref().and_then(|s| s.parse().ok())
    }
}

impl base::Filterable for UploadedCode {
    fn haystack(&self) -> &str {
        &self.code
    }

    fn category(&self) -> &base::RecordCategory {
        &self.category
    }

    fn passes_used(&self, want: bool) -> bool {
        self.used == want
    }
}

/// All uploaded codes, in the order the API returned them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Codelist(Vec<UploadedCode>);

impl Codelist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[UploadedCode] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &UploadedCode> {
        self.0.iter()
    }

    pub fn next_id(&self) -> u64 {
        self.0.iter().map(|c| c.id).max().map_or(1, |id| id + 1)
    }

    pub fn push(&mut self, code: UploadedCode) {
        self.0.push(code);
    }

    /// Removes and returns the code with the given id. Returns `None` and
    /// leaves the list unmodified if there is no such code.
    pub fn remove(&mut self, id: u64) -> Option<UploadedCode> {
        let i = self.0.iter().position(|c| c.id == id)?;
        Some(self.0.remove(i))
    }
}

impl IntoIterator for Codelist {
    type Item = UploadedCode;
    type IntoIter = std::vec::IntoIter<UploadedCode>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<UploadedCode> for Codelist {
    fn from_iter<T: IntoIterator<Item = UploadedCode>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a UploadedCode> for Codelist {
    fn from_iter<T: IntoIterator<Item = &'a UploadedCode>>(iter: T) -> Self {
        iter.into_iter().cloned().collect()
    }
}

impl std::fmt::Display for Codelist {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string_pretty(&self.0).map_err(|_| std::fmt::Error)?;
        writeln!(f, "{}", s)
    }
}

impl std::str::FromStr for Codelist {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Ok(Self::new());
        }
        serde_json::from_str(s).map(Self)
    }
}

impl TryFrom<&str> for Codelist {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
