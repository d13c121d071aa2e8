use crate::base;

/// Selling price of one category.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PriceConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub category: base::CategoryToken,
    pub price: base::Cents,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("price must not be negative")]
pub struct NegativePrice;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pricelist(Vec<PriceConfig>);

impl Pricelist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored price, or zero if the category has none.
    pub fn price(&self, category: base::CategoryToken) -> base::Cents {
        self.0
            .iter()
            .find(|p| p.category == category)
            .map(|p| p.price)
            .unwrap_or_default()
    }

    /// Sets the price of `category`, keeping the id of an existing entry.
    pub fn set(
        &mut self,
        category: base::CategoryToken,
        price: base::Cents,
    ) -> Result<&PriceConfig, NegativePrice> {
        if price < base::Cents(0) {
            return Err(NegativePrice);
        }
        let i = match self.0.iter().position(|p| p.category == category) {
            Some(i) => {
                self.0[i].price = price;
                i
            }
            None => {
                let id = self.0.iter().filter_map(|p| p.id).max().map_or(1, |id| id + 1);
                self.0.push(PriceConfig {
                    id: Some(id),
                    category,
                    price,
                });
                self.0.len() - 1
            }
        };
        Ok(&self.0[i])
    }
}

impl std::fmt::Display for Pricelist {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string_pretty(&self.0).map_err(|_| std::fmt::Error)?;
        writeln!(f, "{}", s)
    }
}

impl std::str::FromStr for Pricelist {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Ok(Self::new());
        }
        serde_json::from_str(s).map(Self)
    }
}

impl TryFrom<&str> for Pricelist {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
