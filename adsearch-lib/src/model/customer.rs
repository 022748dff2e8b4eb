//! Validated account identifier

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A validated, positive advertiser account identifier.
///
/// Parses from plain digits or from the dashed display form used in the
/// advertiser UI (`123-456-7890`). Always renders as plain digits, which is
/// what request paths expect.
///
/// # Example
///
/// ```
/// use adsearch_lib::model::CustomerId;
///
/// let id: CustomerId = "123-456-7890".parse().unwrap();
/// assert_eq!(id.to_string(), "1234567890");
/// assert!(CustomerId::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CustomerId(i64);

impl CustomerId {
    /// Creates a customer id, rejecting zero and negative values.
    pub fn new(id: i64) -> Result<Self, Error> {
        if id <= 0 {
            return Err(Error::invalid_argument(format!(
                "customer id must be a positive integer, got {}",
                id
            )));
        }
        Ok(Self(id))
    }

    /// Returns the numeric value.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for CustomerId {
    type Error = Error;

    fn try_from(id: i64) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

impl FromStr for CustomerId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(Error::invalid_argument("customer id is empty"));
        }
        // Digit groups separated by single dashes, as in 123-456-7890.
        let groups: Vec<&str> = trimmed.split('-').collect();
        if groups
            .iter()
            .any(|g| g.is_empty() || !g.bytes().all(|b| b.is_ascii_digit()))
        {
            return Err(Error::invalid_argument(format!(
                "customer id '{}' is not a number",
                trimmed
            )));
        }

        let digits = groups.concat();
        let id: i64 = digits.parse().map_err(|_| {
            Error::invalid_argument(format!("customer id '{}' is out of range", trimmed))
        })?;
        if id == 0 {
            return Err(Error::invalid_argument("customer id must be a positive integer, got 0"));
        }
        Ok(Self(id))
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_and_dashed() {
        assert_eq!("2323295773".parse::<CustomerId>().unwrap().get(), 2323295773);
        assert_eq!("232-329-5773".parse::<CustomerId>().unwrap().get(), 2323295773);
        assert_eq!(" 42 ".parse::<CustomerId>().unwrap().get(), 42);
    }

    #[test]
    fn test_rejects_malformed() {
        for input in ["", "   ", "abc", "-5", "12-", "1.5", "0", "000", "1--2", "12--3-4"] {
            let err = input.parse::<CustomerId>().unwrap_err();
            assert!(
                matches!(err, Error::InvalidArgument(_)),
                "expected InvalidArgument for {:?}",
                input
            );
        }
    }

    #[test]
    fn test_new_rejects_non_positive() {
        assert!(matches!(CustomerId::new(0), Err(Error::InvalidArgument(_))));
        assert!(matches!(CustomerId::new(-7), Err(Error::InvalidArgument(_))));
        assert_eq!(CustomerId::new(7).unwrap().to_string(), "7");
    }
}
