use std::borrow::Cow;
use std::fmt;
use std::io::{self, Write};
use std::slice;

use crate::{FrequencyMap, SortOrder};

/// Snapshot of one map entry. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyPair {
    text: Vec<u8>,
    count: u64,
}

impl FrequencyPair {
    pub fn new(text: impl Into<Vec<u8>>, count: u64) -> Self {
        Self {
            text: text.into(),
            count,
        }
    }

    /// The token exactly as it appeared in the input.
    pub fn text(&self) -> &[u8] {
        &self.text
    }

    pub fn text_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.text)
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Writes `<text>: <count>` and a line terminator with the text bytes untouched.
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(&self.text)?;
        writeln!(out, ": {}", self.count)
    }
}

/// Same line as [`FrequencyPair::write_to`], with invalid UTF-8 replaced.
impl fmt::Display for FrequencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {}", self.text_lossy(), self.count)
    }
}

/// Report rows, one per distinct token, in the order of the last sort.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrequencyPairs {
    pairs: Vec<FrequencyPair>,
}

impl FrequencyPairs {
    /// Unsorted conversion; the order follows the map's iteration order.
    pub fn from_map(map: FrequencyMap) -> Self {
        map.into_iter()
            .map(|(text, count)| FrequencyPair::new(text, count))
            .collect()
    }

    pub fn sorted(map: FrequencyMap, order: SortOrder) -> Self {
        let mut pairs = Self::from_map(map);
        pairs.sort(order);
        pairs
    }

    pub fn sort(&mut self, order: SortOrder) {
        self.pairs.sort_by(|a, b| order.compare(a, b));
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.pairs.iter().map(FrequencyPair::count).sum()
    }

    pub fn iter(&self) -> slice::Iter<'_, FrequencyPair> {
        self.pairs.iter()
    }

    pub fn as_slice(&self) -> &[FrequencyPair] {
        &self.pairs
    }

    /// Folds the rows back into a map, summing counts that share a text.
    pub fn to_map(&self) -> FrequencyMap {
        let mut map = FrequencyMap::new();
        for pair in &self.pairs {
            map.add(pair.text(), pair.count());
        }
        map
    }

    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        for pair in &self.pairs {
            pair.write_to(out)?;
        }
        Ok(())
    }
}

impl FromIterator<FrequencyPair> for FrequencyPairs {
    fn from_iter<I: IntoIterator<Item = FrequencyPair>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a FrequencyPairs {
    type Item = &'a FrequencyPair;
    type IntoIter = slice::Iter<'a, FrequencyPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

impl fmt::Display for FrequencyPairs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pair in &self.pairs {
            write!(f, "{pair}")?;
        }
        Ok(())
    }
}
