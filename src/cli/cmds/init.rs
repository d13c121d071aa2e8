use crate::base;
use crate::cli;

/// Initialize repository in the current directory
#[derive(clap::Parser)]
pub struct Init {}

fn initial_config() -> base::Config {
    base::Config {
        use_colored_output: true,
        use_unicode_symbols: true,
        ..Default::default()
    }
}

impl Init {
    pub fn run(&self, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        if fs.is_repo() {
            anyhow::bail!("already a repository: '{}'", fs.dir().display());
        }
        cli::util::write(fs, &initial_config())?;
        Ok(cli::Output::Str(format!(
            "Repository initialized in '{}'",
            fs.dir().display()
        )))
    }
}
