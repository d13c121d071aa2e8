use crate::base;
use crate::cli;

/// List uploaded codes
///
/// Prints the codes passing every given filter, followed by statistics over
/// all codes.
#[derive(clap::Parser)]
pub struct Codes {
    #[command(flatten)]
    filter: cli::sharedopts::FilterOpts,

    /// Status to show: 'used' or 'available' ('true' or 'false' also work)
    #[arg(short, long, value_name = "STATUS", default_value = "", hide_default_value = true)]
    used: String,

    /// Print codes in full even if the config masks them
    #[arg(long)]
    show: bool,

    /// Print the matching codes as CSV instead
    #[arg(long)]
    csv: bool,
}

impl Codes {
    pub fn run(self, cl: base::Codelist, config: &base::Config) -> anyhow::Result<cli::Output> {
        let criteria = base::Criteria::lenient(&base::RawCriteria {
            search: &self.filter.search,
            category: &self.filter.category,
            used: &self.used,
            ..Default::default()
        });
        let codes = criteria.apply(cl.as_slice());
        if self.csv {
            return Ok(cli::Output::Str(base::export::codes_csv(codes)?));
        }

        let charset = base::Charset::from(config);
        let mut out = String::new();
        if codes.is_empty() {
            out.push_str("No codes.\n");
        } else {
            let mask = config.mask_codes && !self.show;
            out.push_str(&base::Table::for_codes(charset.clone(), codes, mask).to_string());
        }
        out.push('\n');
        let stats = base::CodeStats::new(cl.as_slice());
        out.push_str(&base::Summary::for_codes(charset, &stats).to_string());
        Ok(cli::Output::Str(out))
    }
}
