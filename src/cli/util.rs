use anyhow::Context;

use crate::base;

/// Reads `T` from the repository, naming the file on failure.
pub fn read<T>(fs: &base::Fs) -> anyhow::Result<T>
where
    T: base::fs::Io,
    <T as std::str::FromStr>::Err: std::error::Error + Send + Sync + 'static,
{
    fs.read::<T>()
        .with_context(|| format!("failed to read '{}'", fs.path::<T>().display()))
}

/// Writes `T` to the repository, naming the file on failure.
pub fn write<T>(fs: &base::Fs, obj: &T) -> anyhow::Result<()>
where
    T: base::fs::Io,
{
    fs.write(obj)
        .with_context(|| format!("failed to write '{}'", fs.path::<T>().display()))
}

/// Parses a category given on the command line by its display label.
pub fn parse_category(display: &str) -> anyhow::Result<base::CategoryToken> {
    base::category::to_backend(display.trim()).with_context(|| {
        let displays = base::category::all_displays().collect::<Vec<_>>();
        format!("expected one of {}", displays.join(", "))
    })
}

pub fn term_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0)
        .unwrap_or_default() as usize
}
