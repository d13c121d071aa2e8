use crate::base;

pub const INTERVAL_HELP: &str = "Interval of interest";
pub const INTERVAL_HELP_LONG: &str = "Interval of interest

Must be in the format 'A:B'. Each of 'A' or 'B' is either an ISO 8601 date (yyyy-mm-dd) or a relative date (see below). 'A' and 'B' are both optional, leaving that side of the interval unbounded.

A relative date is one of the following ('n' is optional and defaults to 0):
dn: n days from today
mn: first day of the nth month from today
Mn: last day of the nth month from today

The following shorthands are also available:
dn = dn:dn
mn = mn:Mn";

pub const DATE_HELP_LONG: &str = "An ISO 8601 date (yyyy-mm-dd) or a relative date ('dn', 'mn' or 'Mn', see 'plot --help'). Values that fail to parse are ignored.";

/// Criteria shared by the listing commands. Values are kept as typed, since
/// unparseable criteria are ignored rather than rejected.
#[derive(clap::Args)]
pub struct FilterOpts {
    /// Case-insensitive text to search for
    #[arg(short, long, default_value = "", hide_default_value = true)]
    pub search: String,

    /// Category to show, by display label (e.g. '50')
    #[arg(short, long, value_name = "CATEGORY", default_value = "", hide_default_value = true)]
    pub category: String,
}

#[derive(clap::Args)]
#[group(required = false, multiple = false)]
pub struct PeriodOpts {
    /// Aggregate data by day
    #[arg(short)]
    pub d: bool,

    /// Aggregate data by month [default]
    #[arg(short)]
    pub m: bool,
}

impl PeriodOpts {
    pub fn period(&self) -> base::Period {
        if self.d {
            base::Period::Day
        } else {
            base::Period::Month
        }
    }
}
