//! Insertion-ordered token counting.
use std::cmp::Reverse;
use std::collections::HashMap;

use itertools::Itertools;

/// Frequency counter that remembers first-seen order of distinct tokens.
///
/// A plain hash map loses insertion order, which makes frequency-ranked
/// selection depend on hash iteration order when counts are equal. Ranking
/// here is stable: [TokenCounter::most_common] sorts the first-seen sequence
/// by descending count with a stable sort, so equal counts keep their
/// first-seen order.
#[derive(Debug, Clone, Default)]
pub struct TokenCounter {
    counts: HashMap<String, usize>,
    order: Vec<String>,
}

impl TokenCounter {
    /// Count one occurrence of `token`.
    pub fn add(&mut self, token: &str) {
        match self.counts.get_mut(token) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(token.to_string(), 1);
                self.order.push(token.to_string());
            }
        }
    }

    /// Count one occurrence of each token in the sequence.
    pub fn extend<I, S>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for token in tokens {
            self.add(token.as_ref());
        }
    }

    /// Occurrences counted for `token` (0 if never seen).
    pub fn count(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Distinct tokens in first-seen order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// At most `n` most frequent tokens with their counts, ranked by
    /// descending count; ties keep first-seen order.
    pub fn most_common(&self, n: usize) -> Vec<(&str, usize)> {
        self.order
            .iter()
            .map(|token| (token.as_str(), self.counts[token.as_str()]))
            .sorted_by_key(|(_, count)| Reverse(*count))
            .take(n)
            .collect()
    }
}
