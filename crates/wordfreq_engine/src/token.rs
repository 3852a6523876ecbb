use std::io::{self, BufRead};
use std::vec;

/// Lazy whitespace tokenizer over a buffered reader.
///
/// Reads one line at a time and yields the maximal non-whitespace runs in file
/// order as raw bytes. Whitespace is judged on the UTF-8 decoding of the line;
/// bytes that do not decode are ordinary token bytes. The first read error is
/// yielded once and ends the sequence.
pub struct Tokens<R> {
    reader: R,
    line: Vec<u8>,
    pending: vec::IntoIter<Vec<u8>>,
    done: bool,
}

/// Tokenizes `reader`, taking ownership so the sequence can be consumed once.
pub fn tokenize<R: BufRead>(reader: R) -> Tokens<R> {
    Tokens {
        reader,
        line: Vec::new(),
        pending: Vec::new().into_iter(),
        done: false,
    }
}

impl<R: BufRead> Tokens<R> {
    /// Loads the next line's tokens. Returns `Ok(false)` at end of input.
    fn refill(&mut self) -> io::Result<bool> {
        self.line.clear();
        if self.reader.read_until(b'\n', &mut self.line)? == 0 {
            return Ok(false);
        }
        self.pending = split_whitespace(&self.line).into_iter();
        Ok(true)
    }
}

fn split_whitespace(line: &[u8]) -> Vec<Vec<u8>> {
    let mut tokens = Vec::new();
    let mut start = None;
    let mut offset = 0;

    for chunk in line.utf8_chunks() {
        for (i, c) in chunk.valid().char_indices() {
            let at = offset + i;
            if c.is_whitespace() {
                if let Some(from) = start.take() {
                    tokens.push(line[from..at].to_vec());
                }
            } else if start.is_none() {
                start = Some(at);
            }
        }
        offset += chunk.valid().len();

        if !chunk.invalid().is_empty() && start.is_none() {
            start = Some(offset);
        }
        offset += chunk.invalid().len();
    }
    if let Some(from) = start {
        tokens.push(line[from..].to_vec());
    }
    tokens
}

impl<R: BufRead> Iterator for Tokens<R> {
    type Item = io::Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.pending.next() {
                return Some(Ok(token));
            }
            if self.done {
                return None;
            }
            match self.refill() {
                Ok(true) => {}
                Ok(false) => {
                    self.done = true;
                    return None;
                }
                Err(err) => {
                    self.done = true;
                    return Some(Err(err));
                }
            }
        }
    }
}

impl<R: BufRead> std::iter::FusedIterator for Tokens<R> {}
