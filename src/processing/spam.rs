//! Text normalization and spam classification.

use std::collections::HashSet;

use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};

use crate::artifacts::spam::SpamVectorizer;
use crate::inference::naive_bayes::MultinomialNb;

/// Class index the spam model assigns to spam.
const SPAM_CLASS: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpamVerdict {
    Spam,
    Ham,
}

/// The training-time normalization pipeline: lowercase, keep alphanumeric
/// tokens, drop stopwords, stem, re-join with single spaces. Running it on
/// its own output changes nothing.
pub struct TextNormalizer {
    stopwords: HashSet<String>,
    stemmer: Stemmer,
    token_pattern: Regex,
}

impl TextNormalizer {
    pub fn new(stopwords: HashSet<String>) -> Self {
        Self {
            stopwords,
            stemmer: Stemmer::create(Algorithm::English),
            token_pattern: Regex::new(r"[a-z0-9]+").unwrap(),
        }
    }

    pub fn from_vectorizer(vectorizer: &SpamVectorizer) -> Self {
        Self::new(vectorizer.stopwords.clone())
    }

    pub fn normalize(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        self.token_pattern
            .find_iter(&lowered)
            .map(|token| token.as_str())
            .filter(|token| !self.stopwords.contains(*token))
            .map(|token| self.stemmer.stem(token).into_owned())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Classify one message. Blank input is rejected with a warning before any
/// prediction runs.
pub fn classify_message(
    normalizer: &TextNormalizer,
    vectorizer: &SpamVectorizer,
    model: &MultinomialNb,
    message: &str,
) -> Option<SpamVerdict> {
    if message.trim().is_empty() {
        log::warn!("Refusing to classify an empty message");
        return None;
    }

    let normalized = normalizer.normalize(message);
    let features = vectorizer.transform(&normalized);
    let verdict = if model.predict(&features) == SPAM_CLASS {
        SpamVerdict::Spam
    } else {
        SpamVerdict::Ham
    };
    log::info!("Classified message: verdict={verdict:?}");
    Some(verdict)
}
