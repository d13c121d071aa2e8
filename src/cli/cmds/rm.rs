use crate::base;
use crate::cli;

/// Delete an uploaded code
#[derive(clap::Parser)]
pub struct Rm {
    /// Id of the code
    id: u64,
}

impl Rm {
    pub fn run(self, mut cl: base::Codelist, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        let Some(removed) = cl.remove(self.id) else {
            anyhow::bail!("nonexistent code");
        };
        cli::util::write(fs, &cl)?;
        tracing::info!(id = removed.id, "deleted code");
        Ok(cli::Output::Str(format!(
            "Deleted code {} ({}, {}).",
            removed.id,
            base::util::mask(&removed.code, base::util::VISIBLE_CODE_CHARS),
            removed.category.label()
        )))
    }
}
