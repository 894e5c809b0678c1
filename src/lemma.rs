//! Lemma extraction: pulls the relevant content lemmas out of a sentence.

use std::collections::HashSet;

use crate::morphology::Sentence;

/// Returns the ordered, duplicate-preserving list of relevant lemmas for one
/// sentence: content words, minus anything on `ignore_lemmas`.
pub fn extract_relevant_lemmas(sentence: &Sentence, ignore_lemmas: &HashSet<String>) -> Vec<String> {
    sentence
        .tokens
        .iter()
        .filter_map(|token| token.first_morphology())
        .filter_map(|morphology| morphology.lemma())
        .filter(|lemma| !ignore_lemmas.contains(*lemma))
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morphology::{Morphology, Token};

    fn content(lemma: &str) -> Token {
        Token {
            form: lemma.to_string(),
            flat_morphologies: vec![Morphology::ContentWord { lemma: lemma.to_string() }],
        }
    }

    fn non_content(form: &str) -> Token {
        Token {
            form: form.to_string(),
            flat_morphologies: vec![Morphology::Other],
        }
    }

    #[test]
    fn keeps_content_words_in_order() {
        let sentence = Sentence::new(vec![content("cat"), non_content("the"), content("sat")]);
        let lemmas = extract_relevant_lemmas(&sentence, &HashSet::new());
        assert_eq!(lemmas, vec!["cat", "sat"]);
    }

    #[test]
    fn filters_ignore_list() {
        let sentence = Sentence::new(vec![content("cat"), content("sat"), content("mat")]);
        let ignore: HashSet<String> = ["sat".to_string()].into_iter().collect();
        let lemmas = extract_relevant_lemmas(&sentence, &ignore);
        assert_eq!(lemmas, vec!["cat", "mat"]);
    }

    #[test]
    fn token_without_morphology_is_dropped() {
        let sentence = Sentence::new(vec![Token { form: "??".into(), flat_morphologies: vec![] }, content("cat")]);
        let lemmas = extract_relevant_lemmas(&sentence, &HashSet::new());
        assert_eq!(lemmas, vec!["cat"]);
    }

    #[test]
    fn empty_sentence_yields_empty_list() {
        let sentence = Sentence::new(vec![]);
        assert!(extract_relevant_lemmas(&sentence, &HashSet::new()).is_empty());
    }

    #[test]
    fn duplicates_are_preserved() {
        let sentence = Sentence::new(vec![content("cat"), content("cat")]);
        let lemmas = extract_relevant_lemmas(&sentence, &HashSet::new());
        assert_eq!(lemmas, vec!["cat", "cat"]);
    }
}
