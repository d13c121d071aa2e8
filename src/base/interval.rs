use crate::base;

/// Interval defined by the inclusive bound of two dates. If `start` is greater
/// than `end`, the interval is considered empty. All empty intervals are
/// equivalent.
#[derive(Debug, Clone, Copy, Eq)]
pub struct Interval {
    pub start: base::Date,
    pub end: base::Date,
}

impl PartialEq for Interval {
    fn eq(&self, other: &Self) -> bool {
        self.is_empty() && other.is_empty() || self.start == other.start && self.end == other.end
    }
}

impl Default for Interval {
    fn default() -> Self {
        Self::MAX
    }
}

impl Interval {
    /// The largest possible interval.
    pub const MAX: Self = Self {
        start: base::Date::MIN,
        end: base::Date::MAX,
    };

    pub const EMPTY: Self = Self {
        start: base::Date::MAX,
        end: base::Date::MIN,
    };

    pub fn is_empty(self) -> bool {
        self.start > self.end
    }

    pub fn is_max(self) -> bool {
        self == Self::MAX
    }

    pub fn contains(self, dt: base::Date) -> bool {
        self.start <= dt && dt <= self.end
    }

    pub fn intersection(self, other: Self) -> Self {
        Self {
            start: self.start.max(other.start),
            end: self.end.min(other.end),
        }
    }

    /// Returns an iterator over subintervals.
    ///
    /// Monthly subintervals try to span whole calendar months. For example,
    /// iterating by month over \[2024-01-15, 2024-03-10] yields \[2024-01-15,
    /// 2024-01-31], \[2024-02-01, 2024-02-29] and \[2024-03-01, 2024-03-10].
    pub fn iter(self, part: base::Period) -> impl Iterator<Item = Self> {
        struct Iter {
            bounds: Interval,
            part: base::Period,
            next: Option<Interval>,
        }

        impl Iterator for Iter {
            type Item = Interval;

            fn next(&mut self) -> Option<Self::Item> {
                let ret = self.next;
                if let Some(i) = self.next {
                    self.next = i.start.shift(self.part, 1).and_then(|dt| {
                        let start = dt.first_of(self.part);
                        let end = dt.last_of(self.part).min(self.bounds.end);
                        if start <= end {
                            Some(Interval { start, end })
                        } else {
                            None
                        }
                    })
                }
                ret
            }
        }

        Iter {
            bounds: self,
            part,
            next: match self.is_empty() {
                true => None,
                false => Some(Self {
                    start: self.start,
                    end: self.start.last_of(part).min(self.end),
                }),
            },
        }
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.start, self.end)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error(transparent)]
    Date(#[from] base::date::ParseError),
    #[error("invalid left side")]
    Left(#[source] base::date::ParseError),
    #[error("invalid right side")]
    Right(#[source] base::date::ParseError),
}

impl std::str::FromStr for Interval {
    type Err = ParseError;

    /// Parses `A:B` where either side may be empty to leave it unbounded. A
    /// single date `A` is shorthand for `A:A`, except that `mn` and `Mn`
    /// expand to the whole month.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = match s.split_once(':') {
            Some((left, right)) => (
                if left.is_empty() {
                    base::Date::MIN
                } else {
                    left.parse::<base::Date>().map_err(Self::Err::Left)?
                },
                if right.is_empty() {
                    base::Date::MAX
                } else {
                    right.parse::<base::Date>().map_err(Self::Err::Right)?
                },
            ),
            None => {
                let dt = s.parse::<base::Date>()?;
                let part = match s.as_bytes()[0] {
                    b'm' | b'M' => base::Period::Month,
                    _ => base::Period::Day,
                };
                (dt.first_of(part), dt.last_of(part))
            }
        };
        Ok(Self { start, end })
    }
}

impl TryFrom<&str> for Interval {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("2015-03-30:2015-03-30", "2015-03-30", "2015-03-30")]
    #[case("2015-03-30:2020-03-30", "2015-03-30", "2020-03-30")]
    #[case("2015-03-30", "2015-03-30", "2015-03-30")]
    #[case("m", "2024-03-01", "2024-03-31")]
    #[case("M-1", "2024-02-01", "2024-02-29")]
    #[case("d-14:d", "2024-03-01", "2024-03-15")]
    #[case(":d4", base::Date::MIN, "2024-03-19")]
    #[case("d-10:", "2024-03-05", base::Date::MAX)]
    fn test_from_str(#[case] s: &str, #[case] start: base::Date, #[case] end: base::Date) {
        assert_eq!(s.parse::<Interval>().unwrap(), Interval { start, end })
    }

    #[test]
    fn test_from_str_unbounded() {
        assert!(":".parse::<Interval>().unwrap().is_max());
    }

    #[rstest]
    #[case("")]
    #[case(":a")]
    #[case("a")]
    #[case("a:d")]
    #[case("d10000000000000000000000000000000000000000000000000000000000000")]
    fn test_from_str_failing(#[case] s: &str) {
        assert!(s.parse::<Interval>().is_err())
    }

    #[rstest]
    #[case("m-6:M-5", "m-2:M", Interval::EMPTY)]
    #[case("m-1:M+10", "m-4:M+7", "m-1:M+7")]
    #[case("d-1:d", "d:d1", "d")]
    fn test_intersection(#[case] x: Interval, #[case] y: Interval, #[case] want: Interval) {
        assert_eq!(x.intersection(y), want);
    }

    #[rstest]
    #[case("2024-03-15", true)]
    #[case("2024-03-01", true)]
    #[case("2024-03-31", true)]
    #[case("2024-04-01", false)]
    fn test_contains(#[case] dt: base::Date, #[case] want: bool) {
        let interval = "m".parse::<Interval>().unwrap();
        assert_eq!(interval.contains(dt), want);
    }

    #[rstest]
    #[case("d1:d-1", base::Period::Day, &[])]
    #[case("2024-01-30", base::Period::Month, &[
        "2024-01-30:2024-01-30".parse().unwrap(),
    ])]
    #[case("2024-01-30:2024-03-29", base::Period::Month, &[
        "2024-01-30:2024-01-31".parse().unwrap(),
        "2024-02-01:2024-02-29".parse().unwrap(),
        "2024-03-01:2024-03-29".parse().unwrap(),
    ])]
    #[case("2024-02-28:2024-03-01", base::Period::Day, &[
        "2024-02-28:2024-02-28".parse().unwrap(),
        "2024-02-29:2024-02-29".parse().unwrap(),
        "2024-03-01:2024-03-01".parse().unwrap(),
    ])]
    fn test_iter(
        #[case] bounds: Interval,
        #[case] part: base::Period,
        #[case] want: &[Interval],
    ) {
        let got = bounds.iter(part).collect::<Vec<_>>();
        assert_eq!(got.as_slice(), want)
    }
}
