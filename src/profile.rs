use crate::date::Date;
use std::fmt;

/// The identity of an account holder. Two profiles are equal when both
/// names match exactly (case-sensitive) and the birth dates are equal;
/// callers normalize capitalization before construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    first: String,
    last: String,
    dob: Date,
}

impl Profile {
    pub fn new(first: impl Into<String>, last: impl Into<String>, dob: Date) -> Self {
        Self {
            first: first.into(),
            last: last.into(),
            dob,
        }
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn last(&self) -> &str {
        &self.last
    }

    pub fn dob(&self) -> Date {
        self.dob
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.first, self.last, self.dob)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_is_case_sensitive() {
        let dob = Date::new(1, 1, 1990);
        let a = Profile::new("John", "Doe", dob);
        let b = Profile::new("John", "Doe", dob);
        let c = Profile::new("john", "Doe", dob);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_equality_requires_same_dob() {
        let a = Profile::new("John", "Doe", Date::new(1, 1, 1990));
        let b = Profile::new("John", "Doe", Date::new(1, 2, 1990));
        assert_ne!(a, b);
    }

    #[test]
    fn test_display() {
        let profile = Profile::new("April", "March", Date::new(1, 15, 1990));
        assert_eq!(profile.to_string(), "April March 1/15/1990");
    }
}
