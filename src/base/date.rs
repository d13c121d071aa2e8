use crate::base;

/// Calendar date without time or timezone information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Date(time::Date);

impl Date {
    pub const MIN: Self = Self(time::Date::MIN);
    pub const MAX: Self = Self(time::Date::MAX);

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> u8 {
        self.0.month().into()
    }

    pub fn day(self) -> u8 {
        self.0.day()
    }

    pub fn from_ymd(year: i32, month: u8, day: u8) -> Option<Self> {
        let month = time::Month::try_from(month).ok()?;
        time::Date::from_calendar_date(year, month, day)
            .ok()
            .map(Self)
    }

    /// Returns the local date.
    #[cfg(not(test))]
    pub fn today() -> Self {
        let now = time::OffsetDateTime::now_local().unwrap_or_else(|_| time::OffsetDateTime::now_utc());
        Self(now.date())
    }

    /// Returns the local date.
    #[cfg(test)]
    pub fn today() -> Self {
        Self::from_ymd(2024, 3, 15).expect("'today' for tests should be valid")
    }

    pub fn format(
        self,
        fmt: &(impl time::formatting::Formattable + ?Sized),
    ) -> Result<String, time::error::Format> {
        self.0.format(fmt)
    }

    pub fn first_of(self, part: base::Period) -> Self {
        match part {
            base::Period::Day => self,
            base::Period::Month => Self(self.0.replace_day(1).unwrap_or(self.0)),
        }
    }

    pub fn last_of(self, part: base::Period) -> Self {
        match part {
            base::Period::Day => self,
            base::Period::Month => {
                let last = time::util::days_in_year_month(self.0.year(), self.0.month());
                Self(self.0.replace_day(last).unwrap_or(self.0))
            }
        }
    }

    /// Offsets the date by the given period, returning `None` if the result is
    /// out of bounds. Shifting by months clamps the day to the resultant
    /// month's last day.
    pub fn shift(self, part: base::Period, offset: i32) -> Option<Self> {
        match part {
            base::Period::Day => self
                .0
                .checked_add(time::Duration::days(offset.into()))
                .map(Self),
            base::Period::Month => {
                let months = self.year() * 12 + i32::from(self.month()) - 1 + offset;
                let year = months.div_euclid(12);
                let month = time::Month::try_from((months.rem_euclid(12) + 1) as u8).ok()?;
                let day = self.day().min(time::util::days_in_year_month(year, month));
                time::Date::from_calendar_date(year, month, day).ok().map(Self)
            }
        }
    }
}

/// Returns the current instant as an RFC 3339 timestamp in UTC.
#[cfg(not(test))]
pub fn now_timestamp() -> String {
    let now = time::OffsetDateTime::now_utc();
    let now = now.replace_nanosecond(0).unwrap_or(now);
    now.format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| Date(now.date()).to_string())
}

#[cfg(test)]
pub fn now_timestamp() -> String {
    String::from("2024-03-15T09:30:00Z")
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = self
            .0
            .format(time::macros::format_description!("[year]-[month]-[day]"))
            .map_err(|_| std::fmt::Error)?;
        f.write_str(&s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("input is empty")]
    Empty,
    #[error("invalid date")]
    BadFormat,
    #[error("invalid relative date")]
    BadRelative,
}

impl std::str::FromStr for Date {
    type Err = ParseError;

    /// Parses an ISO 8601 date. Anything after the first ten characters, such
    /// as the time part of a timestamp, is ignored.
    ///
    /// Also accepts relative dates: `dn` is n days from today, `mn` the first
    /// day of the nth month from today and `Mn` the last day of that month.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let Some(&first) = s.as_bytes().first() else {
            return Err(Self::Err::Empty);
        };
        if first.is_ascii_digit() {
            let ymd = s.get(..10).ok_or(Self::Err::BadFormat)?;
            if s.len() > 10 && !matches!(s.as_bytes()[10], b'T' | b't' | b' ') {
                return Err(Self::Err::BadFormat);
            }
            return time::Date::parse(ymd, time::macros::format_description!("[year]-[month]-[day]"))
                .map(Self)
                .map_err(|_| Self::Err::BadFormat);
        }

        let offset = match s.get(1..) {
            Some("") | None => 0,
            Some(rest) => rest.parse::<i32>().map_err(|_| Self::Err::BadRelative)?,
        };
        let today = Self::today();
        match first {
            b'd' | b'D' => today.shift(base::Period::Day, offset),
            b'm' => today
                .first_of(base::Period::Month)
                .shift(base::Period::Month, offset),
            b'M' => today
                .shift(base::Period::Month, offset)
                .map(|dt| dt.last_of(base::Period::Month)),
            _ => None,
        }
        .ok_or(Self::Err::BadRelative)
    }
}

impl TryFrom<&str> for Date {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
