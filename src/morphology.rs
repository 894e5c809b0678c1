//! Data model for the collaborators the core reads but does not own: the
//! sentence splitter, dependency parser and morphological analyzer are all
//! out of scope here; this module only fixes the shape of what they hand
//! to [`crate::Summarizer::get_summary`].

use serde::{Deserialize, Serialize};

/// One morphological analysis of a token. The analyzer's full taxonomy is
/// external; the core only needs to know whether an analysis is a content
/// word, and if so, its lemma.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Morphology {
    ContentWord { lemma: String },
    Other,
}

impl Morphology {
    pub fn lemma(&self) -> Option<&str> {
        match self {
            Morphology::ContentWord { lemma } => Some(lemma),
            Morphology::Other => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub form: String,
    #[serde(default)]
    pub flat_morphologies: Vec<Morphology>,
}

impl Token {
    /// The core only ever consults the first analysis.
    pub fn first_morphology(&self) -> Option<&Morphology> {
        self.flat_morphologies.first()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sentence {
    pub tokens: Vec<Token>,
}

impl Sentence {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }
}
