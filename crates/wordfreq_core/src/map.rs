use std::collections::hash_map::{self, HashMap};

/// Occurrence count per distinct token.
///
/// Keys are the raw token bytes; nothing is decoded or validated. Iteration
/// order is whatever the underlying hash map yields; convert to
/// [`crate::FrequencyPairs`] and sort before presenting anything.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrequencyMap {
    counts: HashMap<Vec<u8>, u64>,
}

impl FrequencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one occurrence of `token`: inserts it at 1 or bumps it by 1.
    pub fn record(&mut self, token: impl Into<Vec<u8>>) {
        *self.counts.entry(token.into()).or_insert(0) += 1;
    }

    /// Adds `count` occurrences of `text` at once.
    pub(crate) fn add(&mut self, text: &[u8], count: u64) {
        match self.counts.get_mut(text) {
            Some(existing) => *existing += count,
            None => {
                self.counts.insert(text.to_vec(), count);
            }
        }
    }

    pub fn get(&self, text: impl AsRef<[u8]>) -> Option<u64> {
        self.counts.get(text.as_ref()).copied()
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the number of tokens recorded.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[u8], u64)> {
        self.counts
            .iter()
            .map(|(text, count)| (text.as_slice(), *count))
    }
}

impl<T: Into<Vec<u8>>> Extend<T> for FrequencyMap {
    fn extend<I: IntoIterator<Item = T>>(&mut self, tokens: I) {
        for token in tokens {
            self.record(token);
        }
    }
}

impl<T: Into<Vec<u8>>> FromIterator<T> for FrequencyMap {
    fn from_iter<I: IntoIterator<Item = T>>(tokens: I) -> Self {
        let mut map = Self::new();
        map.extend(tokens);
        map
    }
}

impl IntoIterator for FrequencyMap {
    type Item = (Vec<u8>, u64);
    type IntoIter = hash_map::IntoIter<Vec<u8>, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.into_iter()
    }
}

/// Builds a map from an infallible token sequence.
pub fn aggregate<I>(tokens: I) -> FrequencyMap
where
    I: IntoIterator,
    I::Item: Into<Vec<u8>>,
{
    tokens.into_iter().collect()
}

/// Builds a map from a fallible token sequence, stopping at the first error.
pub fn try_aggregate<I, T, E>(tokens: I) -> Result<FrequencyMap, E>
where
    I: IntoIterator<Item = Result<T, E>>,
    T: Into<Vec<u8>>,
{
    let mut map = FrequencyMap::new();
    for token in tokens {
        map.record(token?);
    }
    Ok(map)
}
