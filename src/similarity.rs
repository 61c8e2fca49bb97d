//! Per-call TF-IDF text similarity.
//!
//! A term-weighting model is fitted over the exact document set supplied for
//! one call; the vocabulary is never persisted across calls, so there is no
//! staleness or invalidation concern. Documents become l2-normalised weighted
//! term vectors and similarity is the cosine of the angle between them.

use std::collections::HashMap;

use displaydoc::Display;
use itertools::Itertools;
use lazy_static::lazy_static;
use ndarray::Array1;
use regex::Regex;
use thiserror::Error;

use crate::vector::{cosine_similarity, SkillVector};

/// Vocabulary cap for mentor/student profile matching.
pub const MENTOR_FEATURE_CAP: usize = 50;

/// Vocabulary cap for resume/job-description scoring.
pub const RESUME_FEATURE_CAP: usize = 100;

lazy_static! {
    // words of at least two alphanumeric characters
    static ref TOKEN: Regex = Regex::new(r"\b\w\w+\b").unwrap();
}

/// English stop words excluded from the vocabulary.
const STOP_WORDS: &[&str] = &[
    "about", "above", "across", "after", "afterwards", "again", "against", "all", "almost",
    "alone", "along", "already", "also", "although", "always", "am", "among", "amongst", "amount", "an",
    "and", "another", "any", "anyhow", "anyone", "anything", "anyway", "anywhere", "are", "around",
    "as", "at", "back", "be", "became", "because", "become", "becomes", "becoming", "been",
    "before", "beforehand", "behind", "being", "below", "beside", "besides", "between", "beyond",
    "both", "bottom", "but", "by", "call", "can", "cannot", "could", "do", "done", "down", "due",
    "during", "each", "eight", "either", "eleven", "else", "elsewhere", "empty", "enough", "etc",
    "even", "ever", "every", "everyone", "everything", "everywhere", "except", "few", "fifteen",
    "fifty", "fill", "find", "fire", "first", "five", "for", "former", "formerly", "forty",
    "found", "four", "from", "front", "full", "further", "get", "give", "go", "had", "has",
    "have", "he", "hence", "her", "here", "hereafter", "hereby", "herein", "hereupon", "hers",
    "herself", "him", "himself", "his", "how", "however", "hundred", "ie", "if", "in", "indeed",
    "interest", "into", "is", "it", "its", "itself", "keep", "last", "latter", "latterly",
    "least", "less", "made", "many", "may", "me", "meanwhile", "might", "mine", "more",
    "moreover", "most", "mostly", "move", "much", "must", "my", "myself", "name", "namely",
    "neither", "never", "nevertheless", "next", "nine", "no", "nobody", "none", "nor", "not",
    "nothing", "now", "nowhere", "of", "off", "often", "on", "once", "one", "only", "onto", "or",
    "other", "others", "otherwise", "our", "ours", "ourselves", "out", "over", "own", "part",
    "per", "perhaps", "please", "put", "rather", "re", "same", "see", "seem", "seemed",
    "seeming", "seems", "serious", "several", "she", "should", "show", "side", "since",
    "sincere", "six", "sixty", "so", "some", "somehow", "someone", "something", "sometime",
    "sometimes", "somewhere", "still", "such", "take", "ten", "than", "that", "the", "their",
    "them", "themselves", "then", "thence", "there", "thereafter", "thereby", "therefore",
    "therein", "thereupon", "these", "they", "thick", "thin", "third", "this", "those",
    "though", "three", "through", "throughout", "thru", "thus", "to", "together", "too", "top",
    "toward", "towards", "twelve", "twenty", "two", "under", "until", "up", "upon", "us",
    "very", "via", "was", "we", "well", "were", "what", "whatever", "when", "whence",
    "whenever", "where", "whereafter", "whereas", "whereby", "wherein", "whereupon",
    "wherever", "whether", "which", "while", "whither", "who", "whoever", "whole", "whom",
    "whose", "why", "will", "with", "within", "without", "would", "yet", "you", "your",
    "yours", "yourself", "yourselves",
];

/// Potential failures when fitting a term-weighting model.
#[derive(Clone, Debug, Display, Error, PartialEq)]
pub enum SimilarityError {
    /// Corpus too small to build a vocabulary, expected at least 2 non-empty documents but got {0}
    TooFewDocuments(usize),
    /// No terms survive tokenization and stop-word removal
    NoUsableTerms,
}

/// A TF-IDF model fitted over one call's corpus.
#[derive(Debug)]
pub struct TermWeighting {
    /// Vocabulary terms in a deterministic (alphabetical) order.
    vocabulary: Vec<String>,
    /// Term position lookup into [`TermWeighting::vocabulary`].
    index: HashMap<String, usize>,
    /// Smoothed inverse document frequency per vocabulary term.
    idf: Array1<f32>,
}

impl TermWeighting {
    /// Fits a term-weighting model over the given corpus.
    ///
    /// The vocabulary is capped at `feature_cap` terms, selecting the most
    /// frequent corpus terms with alphabetical tie-breaking. Stop words and
    /// single-character tokens are excluded.
    ///
    /// # Errors
    /// Fails if fewer than two documents contain usable terms or if no terms
    /// survive stop-word removal.
    pub fn fit<'a>(
        corpus: impl IntoIterator<Item = &'a str>,
        feature_cap: usize,
    ) -> Result<Self, SimilarityError> {
        let tokenized = corpus
            .into_iter()
            .map(tokenize)
            .collect::<Vec<Vec<String>>>();

        let non_empty = tokenized.iter().filter(|tokens| !tokens.is_empty()).count();
        if non_empty < 2 {
            return Err(SimilarityError::TooFewDocuments(non_empty));
        }

        let mut corpus_counts = HashMap::<&str, usize>::new();
        let mut document_counts = HashMap::<&str, usize>::new();
        for tokens in &tokenized {
            for term in tokens {
                *corpus_counts.entry(term.as_str()).or_default() += 1;
            }
            for term in tokens.iter().unique() {
                *document_counts.entry(term.as_str()).or_default() += 1;
            }
        }
        if corpus_counts.is_empty() {
            return Err(SimilarityError::NoUsableTerms);
        }

        // most frequent terms first, ties broken alphabetically, then the
        // capped selection is stored alphabetically
        let vocabulary = corpus_counts
            .iter()
            .sorted_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)))
            .take(feature_cap)
            .map(|(term, _)| term.to_string())
            .sorted()
            .collect::<Vec<_>>();

        let documents = tokenized.len() as f32;
        let idf = vocabulary
            .iter()
            .map(|term| {
                let frequency = document_counts.get(term.as_str()).copied().unwrap_or(0) as f32;
                ((1. + documents) / (1. + frequency)).ln() + 1.
            })
            .collect::<Array1<f32>>();

        let index = vocabulary
            .iter()
            .enumerate()
            .map(|(position, term)| (term.clone(), position))
            .collect();

        Ok(Self {
            vocabulary,
            index,
            idf,
        })
    }

    /// The number of vocabulary terms.
    pub fn features(&self) -> usize {
        self.vocabulary.len()
    }

    /// Transforms a document into its l2-normalised weighted term vector.
    ///
    /// A document sharing no vocabulary terms yields the all-zero vector.
    pub fn transform(&self, document: &str) -> SkillVector {
        let mut weights = Array1::<f32>::zeros(self.vocabulary.len());
        for term in tokenize(document) {
            if let Some(&position) = self.index.get(&term) {
                weights[position] += 1.;
            }
        }
        weights *= &self.idf;

        let norm = weights.dot(&weights).sqrt();
        if norm > 0. {
            weights /= norm;
        }

        SkillVector::from(weights)
    }
}

fn tokenize(document: &str) -> Vec<String> {
    TOKEN
        .find_iter(&document.to_lowercase())
        .map(|token| token.as_str().to_string())
        .filter(|token| !STOP_WORDS.contains(&token.as_str()))
        .collect()
}

/// Computes the similarity of two free-text documents.
///
/// A fresh term-weighting model is fitted over exactly these two documents.
///
/// # Errors
/// Fails with the reason if the corpus is too sparse to build a vocabulary;
/// consumers absorb this as a `0.0` contribution.
pub fn document_similarity(
    doc_a: &str,
    doc_b: &str,
    feature_cap: usize,
) -> Result<f32, SimilarityError> {
    let model = TermWeighting::fit([doc_a, doc_b], feature_cap)?;
    Ok(cosine_similarity(
        &model.transform(doc_a),
        &model.transform(doc_b),
    ))
}

/// Computes the similarity of each document against a shared reference.
///
/// All documents and the reference share one term-weighting model, fitted
/// over the reference followed by the documents.
///
/// # Errors
/// Fails with the reason if the corpus is too sparse to build a vocabulary.
pub fn similarities_to_reference<'a>(
    reference: &'a str,
    documents: impl IntoIterator<Item = &'a str> + Clone,
    feature_cap: usize,
) -> Result<Vec<f32>, SimilarityError> {
    let corpus = std::iter::once(reference).chain(documents.clone());
    let model = TermWeighting::fit(corpus, feature_cap)?;

    let reference = model.transform(reference);
    Ok(documents
        .into_iter()
        .map(|document| cosine_similarity(&reference, &model.transform(document)))
        .collect())
}
