use crate::base;
use crate::cli;

/// Plot sales per day or month
#[derive(clap::Parser)]
pub struct Plot {
    #[arg(help = cli::sharedopts::INTERVAL_HELP, long_help = cli::sharedopts::INTERVAL_HELP_LONG)]
    interval: Option<base::Interval>,

    #[command(flatten)]
    period: cli::sharedopts::PeriodOpts,

    /// Category to plot, by display label (e.g. '50')
    #[arg(short, long, value_name = "CATEGORY")]
    category: Option<String>,
}

impl Plot {
    pub fn run(self, sl: base::Salelist, config: &base::Config) -> anyhow::Result<cli::Output> {
        let period = self.period.period();
        let interval = match self.interval {
            Some(interval) => interval,
            None => match period {
                base::Period::Day => "d-14:d",
                base::Period::Month => "m-11:M",
            }
            .parse()?,
        };
        let mut criteria = base::Criteria::new();
        if let Some(display) = &self.category {
            criteria = criteria.with_category(cli::util::parse_category(display)?);
        }
        let sl = criteria
            .apply(sl.as_slice())
            .into_iter()
            .cloned()
            .collect::<base::Salelist>();
        Ok(cli::Output::Barchart(base::barchart::Config {
            charset: base::Charset::from(config),
            bounds: interval,
            period,
            term_width: cli::util::term_width(),
            sl,
        }))
    }
}
