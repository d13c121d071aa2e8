/// Application config.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Config {
    pub use_colored_output: bool,
    pub use_unicode_symbols: bool,
    /// Hide all but the last characters of codes in tables.
    pub mask_codes: bool,
    /// Currency label printed next to prices and revenue.
    pub currency: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            use_colored_output: false,
            use_unicode_symbols: false,
            mask_codes: true,
            currency: String::from("GHS"),
        }
    }
}

impl std::fmt::Display for Config {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string_pretty(self).map_err(|_| std::fmt::Error)?;
        writeln!(f, "{}", s)
    }
}

impl std::str::FromStr for Config {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

impl TryFrom<&str> for Config {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!("{}".parse::<Config>().unwrap(), Config::default());
        assert_eq!(
            Config::default().to_string(),
            indoc! {r#"
                {
                  "useColoredOutput": false,
                  "useUnicodeSymbols": false,
                  "maskCodes": true,
                  "currency": "GHS"
                }
            "#}
        );
    }

    #[rstest]
    #[case(r#"{"maskCodes": 1}"#)]
    #[case(r#"{"apiToken": "secret"}"#)]
    #[case("[]")]
    fn test_from_str_failing(#[case] s: &str) {
        assert!(s.parse::<Config>().is_err())
    }
}
