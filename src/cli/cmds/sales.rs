use crate::base;
use crate::cli;

/// List sales
///
/// Prints the sales passing every given filter, followed by statistics over
/// all sales. Searching matches phone numbers.
#[derive(clap::Parser)]
pub struct Sales {
    #[command(flatten)]
    filter: cli::sharedopts::FilterOpts,

    /// First day of sales to show
    #[arg(
        long,
        value_name = "DATE",
        default_value = "",
        hide_default_value = true,
        long_help = cli::sharedopts::DATE_HELP_LONG
    )]
    from: String,

    /// Last day of sales to show
    #[arg(
        long,
        value_name = "DATE",
        default_value = "",
        hide_default_value = true,
        long_help = cli::sharedopts::DATE_HELP_LONG
    )]
    to: String,

    /// Print the matching sales as CSV instead
    #[arg(long)]
    csv: bool,

    #[command(flatten)]
    period: cli::sharedopts::PeriodOpts,
}

impl Sales {
    pub fn run(self, sl: base::Salelist, config: &base::Config) -> anyhow::Result<cli::Output> {
        let criteria = base::Criteria::lenient(&base::RawCriteria {
            search: &self.filter.search,
            category: &self.filter.category,
            start: &self.from,
            end: &self.to,
            ..Default::default()
        });
        let sales = criteria.apply(sl.as_slice());
        if self.csv {
            return Ok(cli::Output::Str(base::export::sales_csv(sales)?));
        }

        let charset = base::Charset::from(config);
        let mut out = String::new();
        if sales.is_empty() {
            out.push_str("No sales.\n");
        } else {
            out.push_str(&base::Table::for_sales(charset.clone(), sales).to_string());
        }
        out.push('\n');
        let stats = base::SaleStats::new(sl.as_slice(), self.period.period());
        out.push_str(&base::Summary::for_sales(charset, &stats, &config.currency).to_string());
        Ok(cli::Output::Str(out))
    }
}
