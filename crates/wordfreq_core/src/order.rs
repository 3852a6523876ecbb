use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::FrequencyPair;

/// Comparator used to order a [`crate::FrequencyPairs`] report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    /// Ascending byte-wise order on the token text.
    #[default]
    Text,
    /// Descending count; equal counts fall back to ascending text.
    Count,
}

impl SortOrder {
    pub fn compare(self, a: &FrequencyPair, b: &FrequencyPair) -> Ordering {
        match self {
            SortOrder::Text => a.text().cmp(b.text()),
            SortOrder::Count => b
                .count()
                .cmp(&a.count())
                .then_with(|| a.text().cmp(b.text())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort order {0:?} (expected \"text\" or \"count\")")]
pub struct ParseSortOrderError(String);

impl FromStr for SortOrder {
    type Err = ParseSortOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(SortOrder::Text),
            "count" => Ok(SortOrder::Count),
            _ => Err(ParseSortOrderError(s.to_string())),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Text => write!(f, "text"),
            SortOrder::Count => write!(f, "count"),
        }
    }
}
