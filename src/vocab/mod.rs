/*! Vocabulary construction

Builds one token dictionary per language from a parallel corpus. Counting
and ranking happen fully independently per side: a token occurring in both
languages gets unrelated indices.

Ranking must be reproducible, so counting goes through [TokenCounter], which
remembers first-seen order and breaks frequency ties with it.
!*/
mod counter;
mod vocabulary;

pub use counter::TokenCounter;
pub use vocabulary::Vocabulary;

use crate::corpus::SentencePair;

/// Builds the source and target dictionaries for a corpus.
///
/// Without a cutoff, every distinct token gets an index, assigned in
/// first-seen order. With `freq_cutoff` (a positive integer, caller's
/// responsibility), each language independently keeps at most that many
/// tokens, ranked by descending frequency with ties in first-seen order.
/// Indices are dense and start at 0 either way.
///
/// An empty corpus yields two empty dictionaries; a cutoff larger than the
/// number of distinct tokens yields the full dictionary.
pub fn get_token_to_index(
    sentence_pairs: &[SentencePair],
    freq_cutoff: Option<usize>,
) -> (Vocabulary, Vocabulary) {
    let mut source_counter = TokenCounter::default();
    let mut target_counter = TokenCounter::default();

    for pair in sentence_pairs {
        source_counter.extend(pair.source());
        target_counter.extend(pair.target());
    }

    (
        build(&source_counter, freq_cutoff),
        build(&target_counter, freq_cutoff),
    )
}

fn build(counter: &TokenCounter, freq_cutoff: Option<usize>) -> Vocabulary {
    match freq_cutoff {
        None => Vocabulary::from_ranked(counter.tokens()),
        Some(n) => Vocabulary::from_ranked(counter.most_common(n).into_iter().map(|(t, _)| t)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(source: &[&str], target: &[&str]) -> SentencePair {
        SentencePair::new(
            source.iter().map(|s| s.to_string()).collect(),
            target.iter().map(|s| s.to_string()).collect(),
        )
    }

    #[test]
    fn no_cutoff_assigns_first_seen_order() {
        let pairs = vec![pair(&["b", "a", "b"], &["x"]), pair(&["c"], &["y", "x"])];
        let (source_dict, target_dict) = get_token_to_index(&pairs, None);

        assert_eq!(source_dict.get("b"), Some(0));
        assert_eq!(source_dict.get("a"), Some(1));
        assert_eq!(source_dict.get("c"), Some(2));
        assert_eq!(target_dict.get("x"), Some(0));
        assert_eq!(target_dict.get("y"), Some(1));
    }

    #[test]
    fn cutoff_keeps_most_frequent() {
        // source tokens a, a, b across the corpus, cutoff 1 -> only "a"
        let pairs = vec![pair(&["a", "a"], &["x"]), pair(&["b"], &["y"])];
        let (source_dict, _) = get_token_to_index(&pairs, Some(1));

        assert_eq!(source_dict.len(), 1);
        assert_eq!(source_dict.get("a"), Some(0));
        assert_eq!(source_dict.get("b"), None);
    }

    #[test]
    fn cutoff_ties_break_by_first_seen() {
        let pairs = vec![pair(&["z", "a", "z", "a", "m"], &["x"])];
        let (source_dict, _) = get_token_to_index(&pairs, Some(2));

        // z and a both occur twice; z was seen first
        assert_eq!(source_dict.get("z"), Some(0));
        assert_eq!(source_dict.get("a"), Some(1));
        assert_eq!(source_dict.get("m"), None);
    }

    #[test]
    fn cutoff_larger_than_distinct_count() {
        let pairs = vec![pair(&["a", "b"], &["x"])];
        let (source_dict, target_dict) = get_token_to_index(&pairs, Some(100));

        assert_eq!(source_dict.len(), 2);
        assert_eq!(target_dict.len(), 1);
    }

    #[test]
    fn empty_corpus() {
        let (source_dict, target_dict) = get_token_to_index(&[], None);
        assert!(source_dict.is_empty());
        assert!(target_dict.is_empty());

        let (source_dict, target_dict) = get_token_to_index(&[], Some(10));
        assert!(source_dict.is_empty());
        assert!(target_dict.is_empty());
    }

    #[test]
    fn languages_are_independent() {
        // "w" appears on both sides with different ranks
        let pairs = vec![pair(&["a", "w"], &["w", "w", "v"])];
        let (source_dict, target_dict) = get_token_to_index(&pairs, None);

        assert_eq!(source_dict.get("w"), Some(1));
        assert_eq!(target_dict.get("w"), Some(0));
    }

    #[test]
    fn builder_is_deterministic() {
        let pairs = vec![
            pair(&["d", "c", "c", "b", "b"], &["x", "y", "z"]),
            pair(&["b", "a"], &["z", "z"]),
        ];
        let first = get_token_to_index(&pairs, Some(3));
        let second = get_token_to_index(&pairs, Some(3));
        assert_eq!(first, second);
    }

    #[test]
    fn cutoff_bounds_size() {
        let pairs = vec![pair(&["a", "b", "c", "d"], &["x", "y"])];
        for cutoff in 1..=6 {
            let (source_dict, target_dict) = get_token_to_index(&pairs, Some(cutoff));
            assert!(source_dict.len() <= cutoff.min(4));
            assert!(target_dict.len() <= cutoff.min(2));
        }
    }
}
