use anyhow::Context;

use crate::base;
use crate::cli;

/// Show or set category prices
#[derive(clap::Parser)]
pub struct Prices {
    /// Set the price of one category
    #[arg(long, num_args = 2, value_names = ["CATEGORY", "PRICE"], allow_negative_numbers = true)]
    set: Option<Vec<String>>,
}

impl Prices {
    pub fn run(
        self,
        mut pl: base::Pricelist,
        config: &base::Config,
        fs: &base::Fs,
    ) -> anyhow::Result<cli::Output> {
        let Some(args) = self.set else {
            let summary = base::Summary::for_prices(base::Charset::from(config), &pl, &config.currency);
            return Ok(cli::Output::Str(summary.to_string()));
        };
        let [display, price] = args.as_slice() else {
            anyhow::bail!("expected a category and a price");
        };
        let token = cli::util::parse_category(display)?;
        let price = price
            .parse::<base::Cents>()
            .with_context(|| format!("invalid price '{}'", price))?;
        let entry = pl.set(token, price)?.clone();
        cli::util::write(fs, &pl)?;
        tracing::info!(category = %token, price = %entry.price, "set price");
        Ok(cli::Output::Str(format!(
            "Price of {} set to {} {}.",
            token.display(),
            entry.price,
            config.currency
        )))
    }
}
