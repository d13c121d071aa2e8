use crate::base;
use crate::cli;

/// List sellable categories
///
/// Lists the categories of the backend feed if one is present, otherwise the
/// full canonical set.
#[derive(clap::Parser)]
pub struct Cats {
    /// Print backend tokens (e.g. 'FIFTY') instead of display labels
    #[arg(long)]
    pub backend: bool,
}

impl Cats {
    pub fn run(&self, feed: base::Categoryfeed) -> anyhow::Result<cli::Output> {
        let lines = feed
            .offered()
            .iter()
            .map(|c| match self.backend {
                true => c.to_string(),
                false => c.label().to_string(),
            })
            .collect::<Vec<_>>();
        Ok(cli::Output::Str(lines.join("\n")))
    }
}
