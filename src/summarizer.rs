//! Top-level orchestration of the summarization pipeline.

use log::{debug, info, warn};

use crate::config::SummarizerConfig;
use crate::error::{Error, Result};
use crate::itemset::mine_closed_itemsets;
use crate::lemma::extract_relevant_lemmas;
use crate::matrix::build_incidence_matrix;
use crate::morphology::Sentence;
use crate::ngram::Indexer;
use crate::summary::{derive_keywords, render_itemsets, RelevantItemset, Summary};
use crate::svd::{normalize, row_scores, select_relevant_singular_values, truncated_svd};

/// Stateless entry point. Every call allocates fresh dictionaries and
/// matrices and never shares them with another call.
#[derive(Debug, Default)]
pub struct Summarizer;

impl Summarizer {
    pub fn new() -> Self {
        Self
    }

    pub fn get_summary(&self, sentences: &[Sentence], config: &SummarizerConfig) -> Result<Summary> {
        config.validate()?;
        if sentences.is_empty() {
            return Err(Error::InvalidInput("sentences must not be empty".to_string()));
        }
        info!("summarizing {} sentences", sentences.len());

        let (min_n, max_n) = config.ngram_dim_range;
        let mut indexer = Indexer::new();

        // transaction_by_sentence[i] is None for sentences with an empty
        // transaction; non_empty holds the transactions actually handed to
        // the miner, in input order, alongside the original sentence index.
        let mut transaction_by_sentence: Vec<Option<usize>> = Vec::with_capacity(sentences.len());
        let mut non_empty_transactions: Vec<Vec<u32>> = Vec::new();

        for sentence in sentences {
            let lemmas = extract_relevant_lemmas(sentence, &config.ignore_lemmas);
            let transaction = indexer.index_sentence(&lemmas, min_n, max_n);
            if transaction.is_empty() {
                transaction_by_sentence.push(None);
            } else {
                transaction_by_sentence.push(Some(non_empty_transactions.len()));
                non_empty_transactions.push(transaction);
            }
        }

        debug!(
            "{} terms, {} distinct n-grams, {}/{} sentences produced a transaction",
            indexer.terms().len(),
            indexer.ngrams().len(),
            non_empty_transactions.len(),
            sentences.len()
        );

        let itemsets = mine_closed_itemsets(&non_empty_transactions, config.min_lcm_support);
        debug!("{} closed frequent itemsets", itemsets.len());

        let Some(matrix) = build_incidence_matrix(&itemsets, &non_empty_transactions) else {
            warn!("incidence matrix is empty, short-circuiting to zero salience");
            return Ok(Summary {
                salience_scores: vec![0.0; sentences.len()],
                relevant_itemsets: Vec::new(),
                relevant_keywords: Vec::new(),
            });
        };

        let svd = truncated_svd(&matrix)?;
        let relevant = select_relevant_singular_values(&svd.sigma);
        debug!("matrix shape {:?}, relevant singular values up to index {}", matrix.shape(), relevant);

        let itemset_relevance = normalize(&row_scores(&svd.u, &svd.sigma, relevant));
        let transaction_salience = normalize(&row_scores(&svd.v, &svd.sigma, relevant));

        let salience_scores: Vec<f64> = transaction_by_sentence
            .iter()
            .map(|slot| slot.map(|col| transaction_salience[col]).unwrap_or(0.0))
            .collect();

        let rendered = render_itemsets(&itemsets, indexer.ngrams(), indexer.terms());
        let rendered_with_scores: Vec<(String, f64)> = rendered
            .iter()
            .cloned()
            .zip(itemset_relevance.iter().copied())
            .collect();

        let relevant_itemsets: Vec<RelevantItemset> = rendered_with_scores
            .iter()
            .map(|(text, score)| RelevantItemset { text: text.clone(), score: *score })
            .collect();

        let relevant_keywords = derive_keywords(&rendered_with_scores);

        Ok(Summary { salience_scores, relevant_itemsets, relevant_keywords })
    }
}
