//! Sentence tokenization against fixed dictionaries.
use log::debug;
use serde::Deserialize;
use serde::Serialize;

use crate::corpus::SentencePair;
use crate::vocab::Vocabulary;

/// Index sequences for one sentence pair.
///
/// Only exists for pairs fully covered by both dictionaries: lengths always
/// equal the originating pair's token counts, and there is no sentinel
/// "unknown" index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizedSentencePair {
    source_tokens: Vec<u32>,
    target_tokens: Vec<u32>,
}

impl TokenizedSentencePair {
    pub fn new(source_tokens: Vec<u32>, target_tokens: Vec<u32>) -> Self {
        Self {
            source_tokens,
            target_tokens,
        }
    }

    /// Get a reference to the source index sequence.
    pub fn source_tokens(&self) -> &[u32] {
        self.source_tokens.as_ref()
    }

    /// Get a reference to the target index sequence.
    pub fn target_tokens(&self) -> &[u32] {
        self.target_tokens.as_ref()
    }
}

/// Maps each sentence pair through the dictionaries.
///
/// A pair survives only if every source token is in `source_dict` and every
/// target token is in `target_dict`; anything else is skipped silently.
/// Survivors keep their relative order, token order and sentence length.
/// Never fails.
pub fn tokenize_sents(
    sentence_pairs: &[SentencePair],
    source_dict: &Vocabulary,
    target_dict: &Vocabulary,
) -> Vec<TokenizedSentencePair> {
    tokenize_sents_indexed(sentence_pairs, source_dict, target_dict)
        .into_iter()
        .map(|(_, pair)| pair)
        .collect()
}

/// Same filtering and mapping as [tokenize_sents], tagging each survivor
/// with the index it had in `sentence_pairs`.
///
/// Alignments are not carried through tokenization, so callers that need
/// aligned, tokenized, filtered triples use these indices to look the
/// alignments back up in the extraction-order sequence.
pub fn tokenize_sents_indexed(
    sentence_pairs: &[SentencePair],
    source_dict: &Vocabulary,
    target_dict: &Vocabulary,
) -> Vec<(usize, TokenizedSentencePair)> {
    let mut tokenized = Vec::new();

    for (idx, pair) in sentence_pairs.iter().enumerate() {
        let source_tokens: Option<Vec<u32>> =
            pair.source().iter().map(|t| source_dict.get(t)).collect();
        let target_tokens: Option<Vec<u32>> =
            pair.target().iter().map(|t| target_dict.get(t)).collect();

        match (source_tokens, target_tokens) {
            (Some(source_tokens), Some(target_tokens)) => tokenized.push((
                idx,
                TokenizedSentencePair::new(source_tokens, target_tokens),
            )),
            _ => debug!("dropping pair {}: out-of-vocabulary token", idx),
        }
    }

    tokenized
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::get_token_to_index;

    fn pair(source: &[&str], target: &[&str]) -> SentencePair {
        SentencePair::new(
            source.iter().map(|s| s.to_string()).collect(),
            target.iter().map(|s| s.to_string()).collect(),
        )
    }

    #[test]
    fn fully_covered_corpus_round_trips() {
        let pairs = vec![
            pair(&["the", "cat"], &["le", "chat"]),
            pair(&["the", "dog"], &["le", "chien"]),
        ];
        let (source_dict, target_dict) = get_token_to_index(&pairs, None);
        let tokenized = tokenize_sents(&pairs, &source_dict, &target_dict);

        assert_eq!(tokenized.len(), pairs.len());
        let decode_source = source_dict.invert();
        let decode_target = target_dict.invert();
        for (orig, tok) in pairs.iter().zip(&tokenized) {
            assert_eq!(tok.source_tokens().len(), orig.source().len());
            assert_eq!(tok.target_tokens().len(), orig.target().len());
            for (token, idx) in orig.source().iter().zip(tok.source_tokens()) {
                assert_eq!(decode_source[idx], token);
            }
            for (token, idx) in orig.target().iter().zip(tok.target_tokens()) {
                assert_eq!(decode_target[idx], token);
            }
        }
    }

    #[test]
    fn uncovered_source_drops_pair() {
        // vocabulary from the first pair only; "z" is out of vocabulary
        let known = vec![pair(&["a"], &["x", "y"])];
        let (source_dict, target_dict) = get_token_to_index(&known, None);

        let pairs = vec![pair(&["a", "z"], &["x", "y"])];
        let tokenized = tokenize_sents(&pairs, &source_dict, &target_dict);
        assert!(tokenized.is_empty());
    }

    #[test]
    fn uncovered_target_drops_pair() {
        let known = vec![pair(&["a", "b"], &["x"])];
        let (source_dict, target_dict) = get_token_to_index(&known, None);

        let pairs = vec![pair(&["a", "b"], &["x", "unseen"])];
        let tokenized = tokenize_sents(&pairs, &source_dict, &target_dict);
        assert!(tokenized.is_empty());
    }

    #[test]
    fn survivors_keep_relative_order() {
        let known = vec![pair(&["a", "b"], &["x", "y"])];
        let (source_dict, target_dict) = get_token_to_index(&known, None);

        let pairs = vec![
            pair(&["a"], &["x"]),
            pair(&["oov"], &["x"]),
            pair(&["b"], &["y"]),
        ];
        let tokenized = tokenize_sents_indexed(&pairs, &source_dict, &target_dict);

        let indices: Vec<usize> = tokenized.iter().map(|(idx, _)| *idx).collect();
        assert_eq!(indices, [0, 2]);
        assert_eq!(tokenized[0].1.source_tokens(), [source_dict.get("a").unwrap()]);
        assert_eq!(tokenized[1].1.source_tokens(), [source_dict.get("b").unwrap()]);
    }

    #[test]
    fn empty_pair_is_covered_trivially() {
        let (source_dict, target_dict) = get_token_to_index(&[], None);
        let pairs = vec![pair(&[], &[])];
        let tokenized = tokenize_sents(&pairs, &source_dict, &target_dict);

        assert_eq!(tokenized.len(), 1);
        assert!(tokenized[0].source_tokens().is_empty());
        assert!(tokenized[0].target_tokens().is_empty());
    }
}
