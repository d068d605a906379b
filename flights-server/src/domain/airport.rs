//! Airport code type.

use std::fmt;

/// Error returned when parsing an invalid IATA code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid IATA code: {reason}")]
pub struct InvalidIata {
    reason: &'static str,
}

/// A valid 3-letter IATA airport code.
///
/// IATA codes are always 3 uppercase ASCII letters. This type guarantees
/// that any `Iata` value is valid by construction. Equality is exact
/// byte-for-byte comparison.
///
/// # Examples
///
/// ```
/// use flights_server::domain::Iata;
///
/// let dub = Iata::parse("DUB").unwrap();
/// assert_eq!(dub.as_str(), "DUB");
///
/// // Lowercase is rejected
/// assert!(Iata::parse("dub").is_err());
///
/// // Wrong length is rejected
/// assert!(Iata::parse("DU").is_err());
/// assert!(Iata::parse("DUBL").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Iata([u8; 3]);

impl Iata {
    /// Parse an IATA code from a string.
    ///
    /// The input must be exactly 3 uppercase ASCII letters (A-Z).
    pub fn parse(s: &str) -> Result<Self, InvalidIata> {
        let bytes = s.as_bytes();

        if bytes.len() != 3 {
            return Err(InvalidIata {
                reason: "must be exactly 3 characters",
            });
        }

        for &b in bytes {
            if !b.is_ascii_uppercase() {
                return Err(InvalidIata {
                    reason: "must be uppercase ASCII letters A-Z",
                });
            }
        }

        Ok(Iata([bytes[0], bytes[1], bytes[2]]))
    }

    /// Parse an IATA code, uppercasing the input first.
    ///
    /// Convenience for user-supplied query parameters like "dub".
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidIata> {
        Self::parse(&s.trim().to_ascii_uppercase())
    }

    /// Returns the IATA code as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store valid ASCII uppercase letters
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Debug for Iata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Iata({})", self.as_str())
    }
}

impl fmt::Display for Iata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_iata() {
        assert!(Iata::parse("DUB").is_ok());
        assert!(Iata::parse("WRO").is_ok());
        assert!(Iata::parse("STN").is_ok());
        assert!(Iata::parse("AAA").is_ok());
        assert!(Iata::parse("ZZZ").is_ok());
    }

    #[test]
    fn reject_lowercase() {
        assert!(Iata::parse("dub").is_err());
        assert!(Iata::parse("Dub").is_err());
        assert!(Iata::parse("DUb").is_err());
    }

    #[test]
    fn reject_wrong_length() {
        assert!(Iata::parse("").is_err());
        assert!(Iata::parse("D").is_err());
        assert!(Iata::parse("DU").is_err());
        assert!(Iata::parse("DUBL").is_err());
        assert!(Iata::parse("DUBLIN").is_err());
    }

    #[test]
    fn reject_non_ascii() {
        assert!(Iata::parse("D1B").is_err());
        assert!(Iata::parse("D-B").is_err());
        assert!(Iata::parse("D B").is_err());
        assert!(Iata::parse("DÜB").is_err());
    }

    #[test]
    fn parse_normalized_uppercases() {
        assert_eq!(Iata::parse_normalized("dub").unwrap().as_str(), "DUB");
        assert_eq!(Iata::parse_normalized(" wro ").unwrap().as_str(), "WRO");
        assert!(Iata::parse_normalized("dublin").is_err());
    }

    #[test]
    fn as_str_roundtrip() {
        let iata = Iata::parse("DUB").unwrap();
        assert_eq!(iata.as_str(), "DUB");
    }

    #[test]
    fn display() {
        let iata = Iata::parse("WRO").unwrap();
        assert_eq!(format!("{}", iata), "WRO");
    }

    #[test]
    fn debug() {
        let iata = Iata::parse("STN").unwrap();
        assert_eq!(format!("{:?}", iata), "Iata(STN)");
    }

    #[test]
    fn equality() {
        let a = Iata::parse("DUB").unwrap();
        let b = Iata::parse("DUB").unwrap();
        let c = Iata::parse("WRO").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn ordering_is_lexicographic() {
        let a = Iata::parse("AAA").unwrap();
        let b = Iata::parse("DUB").unwrap();
        let c = Iata::parse("WRO").unwrap();
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn hash_consistent_with_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Iata::parse("DUB").unwrap());
        assert!(set.contains(&Iata::parse("DUB").unwrap()));
        assert!(!set.contains(&Iata::parse("WRO").unwrap()));
    }
}
