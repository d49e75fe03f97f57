//! Token dictionaries.
use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;

/// Dense token-to-index dictionary for one language.
///
/// Indices start at 0 and have no gaps; a dictionary built with a cutoff has
/// at most that many entries. Built once by [super::get_token_to_index] and
/// read-only afterward.
///
/// Serializes as a plain JSON object (`token -> index`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vocabulary {
    index: HashMap<String, u32>,
}

impl Vocabulary {
    /// Builds a dictionary from tokens in rank order: the first token gets
    /// index 0, and so on.
    pub(crate) fn from_ranked<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let index = tokens
            .into_iter()
            .enumerate()
            .map(|(idx, token)| (token.into(), idx as u32))
            .collect();
        Self { index }
    }

    /// Index assigned to `token`, if in vocabulary.
    pub fn get(&self, token: &str) -> Option<u32> {
        self.index.get(token).copied()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.index.contains_key(token)
    }

    /// Number of tokens in the dictionary.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Iterates over `(token, index)` entries, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.index.iter().map(|(token, idx)| (token.as_str(), *idx))
    }

    /// Index-to-token view, for decoding index sequences.
    pub fn invert(&self) -> HashMap<u32, &str> {
        self.index
            .iter()
            .map(|(token, idx)| (*idx, token.as_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::Vocabulary;

    #[test]
    fn dense_indices_in_rank_order() {
        let vocab = Vocabulary::from_ranked(["the", "cat", "sat"]);
        assert_eq!(vocab.len(), 3);
        assert_eq!(vocab.get("the"), Some(0));
        assert_eq!(vocab.get("cat"), Some(1));
        assert_eq!(vocab.get("sat"), Some(2));
        assert_eq!(vocab.get("dog"), None);
    }

    #[test]
    fn invert_round_trips() {
        let vocab = Vocabulary::from_ranked(["a", "b", "c"]);
        let decode = vocab.invert();
        for (token, idx) in vocab.iter() {
            assert_eq!(decode[&idx], token);
        }
    }

    #[test]
    fn serializes_as_plain_map() {
        let vocab = Vocabulary::from_ranked(["only"]);
        let json = serde_json::to_string(&vocab).unwrap();
        assert_eq!(json, r#"{"only":0}"#);

        let back: Vocabulary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vocab);
    }
}
