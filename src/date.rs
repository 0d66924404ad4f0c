use chrono::Datelike;
use std::fmt;
use std::str::FromStr;

const LONG_MONTHS: [u32; 7] = [1, 3, 5, 7, 8, 10, 12];
const LONG_MONTH_DAYS: u32 = 31;
const SHORT_MONTH_DAYS: u32 = 30;
const FEBRUARY: u32 = 2;
const FEB_DAYS: u32 = 28;
const FEB_LEAP_DAYS: u32 = 29;
const MONTHS_PER_YEAR: u32 = 12;
const QUADRENNIAL: i32 = 4;
const CENTENNIAL: i32 = 100;
const QUADRICENTENNIAL: i32 = 400;

/// A calendar date. Construction never validates; use [`Date::is_valid`]
/// as a separate query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Date {
    // Field order matters: ordering derives compare year, then month, then day.
    year: i32,
    month: u32,
    day: u32,
}

#[derive(Debug, thiserror::Error, PartialEq)]
#[error("invalid date string: {0}")]
pub struct ParseDateError(String);

impl Date {
    pub fn new(month: u32, day: u32, year: i32) -> Self {
        Self { year, month, day }
    }

    /// Wall-clock snapshot of the current local date.
    pub fn today() -> Self {
        let now = chrono::Local::now().date_naive();
        Self {
            year: now.year(),
            month: now.month(),
            day: now.day(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    fn is_leap_year(&self) -> bool {
        self.year % QUADRENNIAL == 0
            && (self.year % CENTENNIAL != 0 || self.year % QUADRICENTENNIAL == 0)
    }

    /// Checks month and day ranges, with February bounded by the leap-year
    /// rule. Negative years are rejected.
    pub fn is_valid(&self) -> bool {
        if self.year < 0 {
            return false;
        }
        if self.month < 1 || self.month > MONTHS_PER_YEAR || self.day < 1 {
            return false;
        }
        let max_day = if LONG_MONTHS.contains(&self.month) {
            LONG_MONTH_DAYS
        } else if self.month == FEBRUARY {
            if self.is_leap_year() {
                FEB_LEAP_DAYS
            } else {
                FEB_DAYS
            }
        } else {
            SHORT_MONTH_DAYS
        };
        self.day <= max_day
    }
}

impl FromStr for Date {
    type Err = ParseDateError;

    /// Parses `"M/D/Y"` with no zero padding. Range checking is left to
    /// [`Date::is_valid`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('/');
        let (month, day, year) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(m), Some(d), Some(y), None) => (m, d, y),
            _ => return Err(ParseDateError(s.to_string())),
        };
        let month = month.trim().parse().map_err(|_| ParseDateError(s.to_string()))?;
        let day = day.trim().parse().map_err(|_| ParseDateError(s.to_string()))?;
        let year = year.trim().parse().map_err(|_| ParseDateError(s.to_string()))?;
        Ok(Self { year, month, day })
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.month, self.day, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display_round_trip() {
        let date: Date = "1/15/1990".parse().unwrap();
        assert_eq!(date, Date::new(1, 15, 1990));
        assert_eq!(date.to_string(), "1/15/1990");
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert!("1-15-1990".parse::<Date>().is_err());
        assert!("1/15".parse::<Date>().is_err());
        assert!("1/15/1990/3".parse::<Date>().is_err());
        assert!("a/b/c".parse::<Date>().is_err());
    }

    #[test]
    fn test_parse_does_not_validate_ranges() {
        // Out-of-range components still parse; is_valid reports them.
        let date: Date = "13/40/2020".parse().unwrap();
        assert!(!date.is_valid());
    }

    #[test]
    fn test_month_bounds() {
        assert!(!Date::new(0, 10, 2020).is_valid());
        assert!(!Date::new(13, 10, 2020).is_valid());
        assert!(Date::new(12, 10, 2020).is_valid());
    }

    #[test]
    fn test_long_and_short_month_days() {
        assert!(Date::new(1, 31, 2020).is_valid());
        assert!(Date::new(4, 30, 2020).is_valid());
        assert!(!Date::new(4, 31, 2020).is_valid());
        assert!(!Date::new(6, 0, 2020).is_valid());
    }

    #[test]
    fn test_february_leap_year_rule() {
        assert!(Date::new(2, 29, 2020).is_valid());
        assert!(!Date::new(2, 29, 2021).is_valid());
        // Centennial years are not leap years unless divisible by 400.
        assert!(!Date::new(2, 29, 1900).is_valid());
        assert!(Date::new(2, 29, 2000).is_valid());
        assert!(Date::new(2, 28, 2021).is_valid());
    }

    #[test]
    fn test_negative_year_invalid() {
        assert!(!Date::new(1, 1, -5).is_valid());
    }

    #[test]
    fn test_chronological_ordering() {
        let earlier = Date::new(12, 31, 1999);
        let later = Date::new(1, 1, 2000);
        assert!(earlier < later);
        assert!(Date::new(3, 1, 2000) < Date::new(4, 1, 2000));
        assert!(Date::new(3, 1, 2000) < Date::new(3, 2, 2000));
        assert_eq!(Date::new(3, 1, 2000), Date::new(3, 1, 2000));
    }

    #[test]
    fn test_today_is_valid() {
        assert!(Date::today().is_valid());
    }
}
