/// Granularity of revenue buckets and chart rows.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::EnumString,
    strum::Display,
    strum::AsRefStr,
    strum::IntoStaticStr,
    strum::VariantNames,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Period {
    Day,
    Month,
}

impl Period {
    /// Format of bucket labels, e.g. `2024-03-15` or `2024 Mar`.
    pub fn label_format(self) -> &'static [time::format_description::BorrowedFormatItem<'static>] {
        match self {
            Period::Day => time::macros::format_description!("[year]-[month]-[day]"),
            Period::Month => time::macros::format_description!("[year] [month repr:short]"),
        }
    }
}
