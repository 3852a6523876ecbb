//! Wordfreq core: pure frequency model, aggregation and report rendering.
mod map;
mod order;
mod pairs;

pub use map::{aggregate, try_aggregate, FrequencyMap};
pub use order::{ParseSortOrderError, SortOrder};
pub use pairs::{FrequencyPair, FrequencyPairs};
