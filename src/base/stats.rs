use crate::base;

/// Counts over a full code list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CodeStats {
    pub total: usize,
    pub available: usize,
    pub used: usize,
    pub by_category: base::Aggregate<base::Bucket, usize>,
}

impl CodeStats {
    pub fn new(codes: &[base::UploadedCode]) -> Self {
        let mut stats = Self::default();
        for c in codes {
            stats.total += 1;
            if c.used {
                stats.used += 1;
            } else {
                stats.available += 1;
            }
            stats.by_category.add(c.category.bucket(), 1);
        }
        stats
    }
}

/// Revenue totals of the sales carrying an amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Revenue {
    pub total: base::Cents,
    /// Keyed by the first day of each period. Sales with unparseable dates
    /// count toward `total` only.
    pub by_period: base::Aggregate<base::Date, base::Cents>,
}

/// Counts and revenue over a full sale list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaleStats {
    pub period: base::Period,
    pub total: usize,
    pub by_category: base::Aggregate<base::Bucket, usize>,
    /// Sale counts keyed by the first day of each period.
    pub by_period: base::Aggregate<base::Date, usize>,
    /// `None` if no sale carries an amount.
    pub revenue: Option<Revenue>,
}

impl SaleStats {
    pub fn new<'a, I>(sales: I, period: base::Period) -> Self
    where
        I: IntoIterator<Item = &'a base::Sale>,
    {
        let mut total = 0;
        let mut by_category = base::Aggregate::default();
        let mut by_period = base::Aggregate::default();
        let mut revenue: Option<Revenue> = None;
        for s in sales {
            total += 1;
            by_category.add(s.category.bucket(), 1);
            let key = s.day().map(|dt| dt.first_of(period));
            if let Some(key) = key {
                by_period.add(key, 1);
            }
            if let Some(amount) = s.amount {
                let rev = revenue.get_or_insert_with(|| Revenue {
                    total: base::Cents(0),
                    by_period: base::Aggregate::default(),
                });
                rev.total += amount;
                if let Some(key) = key {
                    rev.by_period.add(key, amount);
                }
            }
        }
        Self {
            period,
            total,
            by_category,
            by_period,
            revenue,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::base::Bucket;
    use crate::base::CategoryToken;

    #[test]
    fn test_code_stats() {
        let cl = r#"[
            {"id":1,"code":"A1","category":"FIFTY","used":false},
            {"id":2,"code":"B2","category":"HUNDRED","used":true},
            {"id":3,"code":"A9","category":"FIFTY","used":false}
        ]"#
        .parse::<base::Codelist>()
        .unwrap();
        let stats = CodeStats::new(cl.as_slice());
        assert_eq!(stats.total, 3);
        assert_eq!(stats.available, 2);
        assert_eq!(stats.used, 1);
        assert_eq!(stats.by_category.get(&Bucket::Known(CategoryToken::Fifty)), Some(2));
        assert_eq!(stats.by_category.get(&Bucket::Known(CategoryToken::Hundred)), Some(1));
        assert_eq!(stats.by_category.len(), 2);
    }

    #[rstest]
    #[case("[]")]
    #[case(r#"[{"id":1,"code":"A","category":"FIFTY","used":true}]"#)]
    #[case(
        r#"[
            {"id":1,"code":"A","category":"FIFTY","used":true},
            {"id":2,"code":"B","category":"ODD","used":false},
            {"id":3,"code":"C","category":"WEIRD","used":false},
            {"id":4,"code":"D","category":"THOUSAND","used":false}
        ]"#
    )]
    fn test_code_stats_invariants(#[case] cl: base::Codelist) {
        let stats = CodeStats::new(cl.as_slice());
        assert_eq!(stats.total, cl.len());
        assert_eq!(stats.total, stats.available + stats.used);
        assert_eq!(stats.by_category.sum(), stats.total);
        assert_eq!(stats.by_category.iter().map(|(_, n)| n).sum::<usize>(), stats.total);
    }

    #[test]
    fn test_unknown_tokens_share_a_bucket() {
        let cl = r#"[
            {"id":1,"code":"A","category":"ODD"},
            {"id":2,"code":"B","category":"WEIRD"},
            {"id":3,"code":"C","category":"FIFTY"}
        ]"#
        .parse::<base::Codelist>()
        .unwrap();
        let stats = CodeStats::new(cl.as_slice());
        assert_eq!(stats.by_category.get(&Bucket::Other), Some(2));
        assert_eq!(
            stats.by_category.iter().map(|(k, _)| *k).collect::<Vec<_>>(),
            [Bucket::Known(CategoryToken::Fifty), Bucket::Other]
        );
    }

    fn sales() -> base::Salelist {
        r#"[
            {"id":"1","date":"2024-02-28","phoneNumber":"1","proxyCode":"A","category":"FIFTY","amount":50},
            {"id":"2","date":"2024-03-01T10:00:00","phoneNumber":"2","proxyCode":"B","category":"HUNDRED","amount":100.5},
            {"id":"3","date":"2024-03-01","phoneNumber":"3","proxyCode":"C","category":"FIFTY"},
            {"id":"4","date":"n/a","phoneNumber":"4","proxyCode":"D","category":"NEW","amount":10}
        ]"#
        .parse()
        .unwrap()
    }

    #[test]
    fn test_sale_stats_daily() {
        let stats = SaleStats::new(sales().as_slice(), base::Period::Day);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.by_category.get(&Bucket::Known(CategoryToken::Fifty)), Some(2));
        assert_eq!(stats.by_category.get(&Bucket::Other), Some(1));
        assert_eq!(stats.by_category.sum(), 4);

        let mar1 = base::Date::from_ymd(2024, 3, 1).unwrap();
        assert_eq!(stats.by_period.get(&mar1), Some(2));
        assert_eq!(stats.by_period.sum(), 3);

        let revenue = stats.revenue.unwrap();
        assert_eq!(revenue.total, base::Cents(16050));
        assert_eq!(revenue.by_period.get(&mar1), Some(base::Cents(10050)));
        assert_eq!(revenue.by_period.sum(), base::Cents(15050));
    }

    #[test]
    fn test_sale_stats_monthly() {
        let stats = SaleStats::new(sales().as_slice(), base::Period::Month);
        let feb = base::Date::from_ymd(2024, 2, 1).unwrap();
        let mar = base::Date::from_ymd(2024, 3, 1).unwrap();
        assert_eq!(stats.by_period.get(&feb), Some(1));
        assert_eq!(stats.by_period.get(&mar), Some(2));
        let revenue = stats.revenue.unwrap();
        assert_eq!(revenue.by_period.get(&feb), Some(base::Cents(5000)));
    }

    #[test]
    fn test_sale_stats_without_amounts() {
        let sl = r#"[{"id":"1","date":"2024-02-28","phoneNumber":"1","proxyCode":"A","category":"FIFTY"}]"#
            .parse::<base::Salelist>()
            .unwrap();
        let stats = SaleStats::new(sl.as_slice(), base::Period::Day);
        assert_eq!(stats.total, 1);
        assert!(stats.revenue.is_none());
    }
}
