use crate::base;

pub const CODES_HEADER: [&str; 5] = ["Code", "Category", "Status", "Uploaded At", "Used At"];
pub const SALES_HEADER: [&str; 4] = ["Date", "Phone Number", "Proxy Code", "Category"];

const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Utf8(#[from] std::string::FromUtf8Error),
}

fn writer() -> csv::Writer<Vec<u8>> {
    csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new())
}

fn finish(w: csv::Writer<Vec<u8>>) -> Result<String, ExportError> {
    let bytes = w.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

fn category_label(category: &base::RecordCategory) -> &str {
    if let base::RecordCategory::Unknown(token) = category {
        tracing::warn!(category = %token, "exporting unknown category verbatim");
    }
    category.label()
}

fn timestamp_label(raw: Option<&str>) -> String {
    match raw {
        None => NOT_AVAILABLE.to_string(),
        Some(s) => match s.parse::<base::Date>() {
            Ok(dt) => dt.to_string(),
            Err(_) => s.to_string(),
        },
    }
}

/// Renders codes as CSV text, one row per code in iteration order.
pub fn codes_csv<'a, I>(codes: I) -> Result<String, ExportError>
where
    I: IntoIterator<Item = &'a base::UploadedCode>,
{
    let mut w = writer();
    w.write_record(CODES_HEADER)?;
    for c in codes {
        w.write_record([
            c.code.as_str(),
            category_label(&c.category),
            c.status(),
            timestamp_label(c.uploaded_at.as_deref()).as_str(),
            timestamp_label(c.used_at.as_deref()).as_str(),
        ])?;
    }
    finish(w)
}

/// Renders sales as CSV text, one row per sale in iteration order. Dates are
/// written as stored.
pub fn sales_csv<'a, I>(sales: I) -> Result<String, ExportError>
where
    I: IntoIterator<Item = &'a base::Sale>,
{
    let mut w = writer();
    w.write_record(SALES_HEADER)?;
    for s in sales {
        w.write_record([
            s.date.as_str(),
            s.phone_number.as_str(),
            s.proxy_code.as_str(),
            category_label(&s.category),
        ])?;
    }
    finish(w)
}
