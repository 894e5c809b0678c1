//! Summary assembly: itemset text rendering, keyword derivation, and the
//! optional salience histogram.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::dictionary::Dictionary;
use crate::itemset::Itemset;
use crate::ngram::{ItemId, TermId};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RelevantItemset {
    pub text: String,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RelevantKeyword {
    pub keyword: String,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Summary {
    pub salience_scores: Vec<f64>,
    pub relevant_itemsets: Vec<RelevantItemset>,
    pub relevant_keywords: Vec<RelevantKeyword>,
}

impl Summary {
    /// Buckets `salience_scores` into `buckets` equal-width bins over
    /// `[0, 1]`, each divided by the sentence count.
    pub fn salience_distribution(&self, buckets: usize) -> Vec<f64> {
        salience_distribution(&self.salience_scores, buckets)
    }
}

pub fn salience_distribution(scores: &[f64], buckets: usize) -> Vec<f64> {
    if scores.is_empty() || buckets == 0 {
        return vec![0.0; buckets];
    }
    let mut counts = vec![0u64; buckets];
    for &score in scores {
        let raw = (score * buckets as f64).ceil() as i64 - 1;
        let index = raw.max(0) as usize;
        counts[index.min(buckets - 1)] += 1;
    }
    counts.iter().map(|&c| c as f64 / scores.len() as f64).collect()
}

/// Renders an itemset as a comma-separated list of its n-grams, each
/// n-gram as its lemmas joined by single spaces, e.g. `"cat sat, on mat"`.
pub fn render_itemset_text(
    items: &[ItemId],
    ngrams: &Dictionary<Vec<TermId>>,
    terms: &Dictionary<String>,
) -> String {
    items
        .iter()
        .map(|&item_id| {
            let term_ids = ngrams.get_by_id(item_id).expect("item id must be a valid n-gram key");
            term_ids
                .iter()
                .map(|&term_id| terms.get_by_id(term_id).map(String::as_str).unwrap_or(""))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn render_itemsets(
    itemsets: &[Itemset],
    ngrams: &Dictionary<Vec<TermId>>,
    terms: &Dictionary<String>,
) -> Vec<String> {
    itemsets.iter().map(|itemset| render_itemset_text(&itemset.items, ngrams, terms)).collect()
}

/// Keyword extraction: split each itemset's rendered text into
/// whitespace-delimited tokens (after turning commas into spaces and
/// collapsing runs of spaces), and score each distinct keyword as the
/// geometric mean of the itemset scores it appeared in.
pub fn derive_keywords(rendered_with_scores: &[(String, f64)]) -> Vec<RelevantKeyword> {
    let mut scores_by_keyword: HashMap<String, Vec<f64>> = HashMap::new();

    for (text, score) in rendered_with_scores {
        for keyword in tokenize_rendered_text(text) {
            scores_by_keyword.entry(keyword).or_default().push(*score);
        }
    }

    let mut keywords: Vec<RelevantKeyword> = scores_by_keyword
        .into_iter()
        .map(|(keyword, scores)| {
            let n = scores.len() as f64;
            let mean = scores.iter().sum::<f64>() / n;
            let score = mean.powf(1.0 / n);
            RelevantKeyword { keyword, score }
        })
        .collect();

    keywords.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.keyword.cmp(&b.keyword))
    });
    keywords
}

fn tokenize_rendered_text(text: &str) -> Vec<String> {
    text.replace(',', " ")
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}
