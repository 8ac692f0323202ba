//! Station identifier type.

use std::fmt;

/// Error returned when parsing an invalid station identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station id: {reason}")]
pub struct InvalidStationId {
    reason: &'static str,
}

/// A validated station identifier.
///
/// Station ids are opaque names taken from a city's network data
/// (e.g. "Rajiv Chowk"). This type guarantees that any `StationId` is
/// non-empty and carries no surrounding whitespace, so ids compare
/// reliably against graph keys.
///
/// `StationId` is `Ord`; the planner relies on that ordering for
/// deterministic tie-breaking between equal-cost candidates.
///
/// # Examples
///
/// ```
/// use metro_server::domain::StationId;
///
/// let station = StationId::parse("Kashmere Gate").unwrap();
/// assert_eq!(station.as_str(), "Kashmere Gate");
///
/// // Empty and padded inputs are rejected
/// assert!(StationId::parse("").is_err());
/// assert!(StationId::parse("  Kashmere Gate").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StationId(String);

impl StationId {
    /// Parse a station id from a string.
    ///
    /// The input must be non-empty and must not start or end with
    /// whitespace.
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        if s.is_empty() {
            return Err(InvalidStationId {
                reason: "must not be empty",
            });
        }

        if s.trim() != s {
            return Err(InvalidStationId {
                reason: "must not have surrounding whitespace",
            });
        }

        Ok(StationId(s.to_string()))
    }

    /// Parse a station id, trimming surrounding whitespace first.
    ///
    /// Useful at the web boundary where form input may carry stray spaces.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidStationId> {
        Self::parse(s.trim())
    }

    /// Returns the station id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
