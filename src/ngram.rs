//! N-gram indexing: turns a sentence's lemmas into the set of distinct
//! n-gram windows it contains.

use std::collections::BTreeSet;

use crate::dictionary::Dictionary;

pub type TermId = u32;
pub type ItemId = u32;

/// Owns the term dictionary and the n-gram dictionary for one
/// `get_summary` call. Neither table is ever reset in place; a fresh
/// `Indexer` is created per call.
#[derive(Debug, Default)]
pub struct Indexer {
    terms: Dictionary<String>,
    ngrams: Dictionary<Vec<TermId>>,
}

impl Indexer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn terms(&self) -> &Dictionary<String> {
        &self.terms
    }

    pub fn ngrams(&self) -> &Dictionary<Vec<TermId>> {
        &self.ngrams
    }

    /// Indexes one sentence's lemmas into a transaction: the sorted,
    /// deduplicated array of n-gram item ids it contains.
    ///
    /// The window bound below is deliberately `s + len < n`, not
    /// `s + len <= n`, so the window ending at the sentence's last position
    /// is never emitted. Load-bearing, not a bug; must not be "fixed".
    pub fn index_sentence(&mut self, lemmas: &[String], min_n: usize, max_n: usize) -> Vec<ItemId> {
        let term_ids: Vec<TermId> = lemmas
            .iter()
            .map(|lemma| self.terms.get_or_insert(lemma.clone()))
            .collect();

        let n = term_ids.len();
        if n < min_n {
            return Vec::new();
        }

        let mut items = BTreeSet::new();
        for len in min_n..=max_n {
            for start in 0..n {
                if start + len < n {
                    let window = term_ids[start..start + len].to_vec();
                    items.insert(self.ngrams.get_or_insert(window));
                }
            }
        }
        items.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lemmas(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn two_lemmas_yield_no_bigrams() {
        let mut indexer = Indexer::new();
        let txn = indexer.index_sentence(&lemmas(&["a", "b"]), 2, 2);
        assert!(txn.is_empty());
    }

    #[test]
    fn three_lemmas_yield_exactly_one_bigram() {
        let mut indexer = Indexer::new();
        let txn = indexer.index_sentence(&lemmas(&["a", "b", "c"]), 2, 2);
        assert_eq!(txn.len(), 1);
        assert_eq!(indexer.ngrams().len(), 1);
    }

    #[test]
    fn transaction_is_sorted_and_deduplicated() {
        let mut indexer = Indexer::new();
        let txn = indexer.index_sentence(&lemmas(&["a", "b", "c", "d", "a", "b"]), 2, 3);
        let mut sorted = txn.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(txn, sorted);
    }

    #[test]
    fn identical_sentences_produce_identical_transactions() {
        let mut indexer = Indexer::new();
        let txn1 = indexer.index_sentence(&lemmas(&["a", "b", "c", "d"]), 2, 3);
        let txn2 = indexer.index_sentence(&lemmas(&["a", "b", "c", "d"]), 2, 3);
        assert_eq!(txn1, txn2);
    }

    #[test]
    fn fewer_lemmas_than_min_n_is_empty() {
        let mut indexer = Indexer::new();
        let txn = indexer.index_sentence(&lemmas(&["a"]), 2, 4);
        assert!(txn.is_empty());
    }

    #[test]
    fn window_count_matches_half_open_bound() {
        let mut indexer = Indexer::new();
        // N=5 terms, L=2: windows start at s where s+2<5 -> s in 0..3 -> 3 windows.
        let txn = indexer.index_sentence(&lemmas(&["a", "b", "c", "d", "e"]), 2, 2);
        assert_eq!(txn.len(), 3);
    }
}
