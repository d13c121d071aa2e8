use crate::base;

/// Largest accepted upload, in bytes.
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumString, strum::Display)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum FileKind {
    Csv,
    Txt,
}

impl FileKind {
    pub fn from_path(path: &std::path::Path) -> Result<Self, UploadError> {
        path.extension()
            .and_then(std::ffi::OsStr::to_str)
            .and_then(|ext| ext.parse::<Self>().ok())
            .ok_or_else(|| UploadError::UnsupportedType(path.display().to_string()))
    }

    /// Extracts the code from one line of input. Returns `None` for blank
    /// lines.
    fn code(self, line: &str) -> Option<&str> {
        let field = match self {
            FileKind::Txt => line,
            FileKind::Csv => line.split(',').next().unwrap_or_default(),
        };
        let code = field.trim().trim_matches('"').trim();
        if code.is_empty() { None } else { Some(code) }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("unsupported file type '{0}', expected .csv or .txt")]
    UnsupportedType(String),
    #[error("file is {0} bytes, must be less than 10MB")]
    TooLarge(u64),
}

/// Checks an upload candidate before its content is read.
pub fn check_file(path: &std::path::Path, size: u64) -> Result<FileKind, UploadError> {
    let kind = FileKind::from_path(path)?;
    if size > MAX_FILE_SIZE {
        return Err(UploadError::TooLarge(size));
    }
    Ok(kind)
}

/// Outcome of one upload batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResult {
    pub total_uploaded: usize,
    /// Codes skipped because they already existed or repeated within the
    /// batch, one entry per skipped line.
    pub duplicates: Vec<String>,
    pub blank_lines: usize,
}

impl UploadResult {
    pub fn total_processed(&self) -> usize {
        self.total_uploaded + self.duplicates.len() + self.blank_lines
    }
}

/// Appends every new code in `content` to `cl`, stamped with `uploaded_at`.
pub fn upload(
    content: &str,
    kind: FileKind,
    category: base::CategoryToken,
    uploaded_at: &str,
    cl: &mut base::Codelist,
) -> UploadResult {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut res = UploadResult::default();
    let mut known = cl.iter().map(|c| c.code.clone()).collect::<std::collections::HashSet<_>>();
    let mut next_id = cl.next_id();
    for line in content.lines() {
        let Some(code) = kind.code(line) else {
            res.blank_lines += 1;
            continue;
        };
        if !known.insert(code.to_string()) {
            res.duplicates.push(code.to_string());
            continue;
        }
        cl.push(base::UploadedCode {
            id: next_id,
            code: code.to_string(),
            category: category.into(),
            uploaded_at: Some(uploaded_at.to_string()),
            used_at: None,
            used: false,
        });
        next_id += 1;
        res.total_uploaded += 1;
    }
    res
}
