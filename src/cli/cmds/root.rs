use crate::base;
use crate::cli;

/// Proxy code administration
#[derive(clap::Parser)]
#[command(color = clap::ColorChoice::Never)]
pub struct Root {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    Init(cli::cmds::init::Init),
    Cats(cli::cmds::cats::Cats),
    Codes(cli::cmds::codes::Codes),
    Sales(cli::cmds::sales::Sales),
    Plot(cli::cmds::plot::Plot),
    Rm(cli::cmds::rm::Rm),
    Upload(cli::cmds::upload::Upload),
    Prices(cli::cmds::prices::Prices),
}

impl Root {
    pub fn run(self, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        if let Commands::Init(cmd) = self.command {
            return cmd.run(fs);
        }

        if !fs.is_repo() {
            anyhow::bail!("not a repository")
        }
        let config = cli::util::read::<base::Config>(fs)?;
        tracing::debug!(dir = %fs.dir().display(), "opened repository");

        match self.command {
            Commands::Init(_) => unreachable!(),
            Commands::Cats(cmd) => cmd.run(cli::util::read(fs)?),
            Commands::Codes(cmd) => cmd.run(cli::util::read(fs)?, &config),
            Commands::Sales(cmd) => cmd.run(cli::util::read(fs)?, &config),
            Commands::Plot(cmd) => cmd.run(cli::util::read(fs)?, &config),
            Commands::Rm(cmd) => cmd.run(cli::util::read(fs)?, fs),
            Commands::Upload(cmd) => cmd.run(cli::util::read(fs)?, cli::util::read(fs)?, fs),
            Commands::Prices(cmd) => cmd.run(cli::util::read(fs)?, &config, fs),
        }
    }
}
