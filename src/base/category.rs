use strum::IntoEnumIterator;

/// Backend identifier of a code tier.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::IntoStaticStr,
    strum::EnumIter,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CategoryToken {
    Fifty,
    Hundred,
    TwoHundred,
    ThreeHundred,
    FourHundred,
    SixHundred,
    EightHundred,
    Thousand,
}

/// Display labels, indexed by declaration order of [`CategoryToken`].
const TABLE: [(CategoryToken, &str); 8] = [
    (CategoryToken::Fifty, "50"),
    (CategoryToken::Hundred, "100"),
    (CategoryToken::TwoHundred, "200"),
    (CategoryToken::ThreeHundred, "300"),
    (CategoryToken::FourHundred, "400"),
    (CategoryToken::SixHundred, "600"),
    (CategoryToken::EightHundred, "800"),
    (CategoryToken::Thousand, "1000"),
];

impl CategoryToken {
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Returns the human-facing label, e.g. `"50"` for `FIFTY`.
    pub fn display(self) -> &'static str {
        TABLE[self as usize].1
    }

    pub fn from_display(display: &str) -> Result<Self, InvalidCategory> {
        TABLE
            .iter()
            .find(|(_, d)| *d == display)
            .map(|&(token, _)| token)
            .ok_or_else(|| InvalidCategory::Display(display.to_string()))
    }
}

impl std::str::FromStr for CategoryToken {
    type Err = InvalidCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::iter()
            .find(|token| token.as_str() == s)
            .ok_or_else(|| InvalidCategory::Backend(s.to_string()))
    }
}

impl TryFrom<&str> for CategoryToken {
    type Error = InvalidCategory;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidCategory {
    #[error("invalid backend category: {0}")]
    Backend(String),
    #[error("invalid display category: {0}")]
    Display(String),
}

/// Translates a backend token such as `"HUNDRED"` into its display label.
pub fn to_display(token: &str) -> Result<&'static str, InvalidCategory> {
    token.parse::<CategoryToken>().map(CategoryToken::display)
}

/// Translates a display label such as `"100"` into its backend token.
pub fn to_backend(display: &str) -> Result<CategoryToken, InvalidCategory> {
    CategoryToken::from_display(display)
}

pub fn all_tokens() -> impl Iterator<Item = CategoryToken> + Clone {
    CategoryToken::iter()
}

pub fn all_displays() -> impl Iterator<Item = &'static str> + Clone {
    TABLE.iter().map(|&(_, display)| display)
}

/// Category as stored on a record. Tokens the codec does not know are kept
/// verbatim so that loading never fails on them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RecordCategory {
    Known(CategoryToken),
    Unknown(String),
}

impl RecordCategory {
    pub fn token(&self) -> Option<CategoryToken> {
        match self {
            RecordCategory::Known(token) => Some(*token),
            RecordCategory::Unknown(_) => None,
        }
    }

    /// Display label for known tokens, the raw token otherwise.
    pub fn label(&self) -> &str {
        match self {
            RecordCategory::Known(token) => token.display(),
            RecordCategory::Unknown(s) => s,
        }
    }

    pub fn bucket(&self) -> Bucket {
        match self {
            RecordCategory::Known(token) => Bucket::Known(*token),
            RecordCategory::Unknown(_) => Bucket::Other,
        }
    }
}

impl From<CategoryToken> for RecordCategory {
    fn from(value: CategoryToken) -> Self {
        Self::Known(value)
    }
}

impl From<String> for RecordCategory {
    fn from(value: String) -> Self {
        match value.parse::<CategoryToken>() {
            Ok(token) => Self::Known(token),
            Err(_) => Self::Unknown(value),
        }
    }
}

impl From<RecordCategory> for String {
    fn from(value: RecordCategory) -> Self {
        value.to_string()
    }
}

impl std::fmt::Display for RecordCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordCategory::Known(token) => token.as_str().fmt(f),
            RecordCategory::Unknown(s) => s.fmt(f),
        }
    }
}

/// Statistics key. All unknown tokens share the `Other` bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Bucket {
    Known(CategoryToken),
    Other,
}

impl Bucket {
    pub fn label(self) -> &'static str {
        match self {
            Bucket::Known(token) => token.display(),
            Bucket::Other => "Other",
        }
    }
}

impl std::fmt::Display for Bucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Bucket::Known(token) => token.fmt(f),
            Bucket::Other => f.write_str("OTHER"),
        }
    }
}
