//! TF-IDF vectorization over a course corpus

use crate::error::{AdvisorError, Result};
use log::debug;
use ndarray::{Array1, Array2, Axis};
use regex::Regex;
use std::collections::{BTreeMap, HashSet};

/// Tokenizes lower-cased text into runs of two or more word characters and
/// drops English stop words.
pub struct TfIdfVectorizer {
    token_regex: Regex,
    stop_words: HashSet<&'static str>,
}

/// A vectorizer fitted on one corpus. Immutable once built.
#[derive(Debug, Clone)]
pub struct TfIdfModel {
    vocabulary: BTreeMap<String, usize>,
    idf: Array1<f64>,
    /// One L2-normalized row per document, in corpus order.
    matrix: Array2<f64>,
    token_regex: Regex,
    stop_words: HashSet<&'static str>,
}

impl TfIdfVectorizer {
    pub fn new() -> Result<Self> {
        let token_regex = Regex::new(r"\b\w\w+\b")
            .map_err(|e| AdvisorError::Processing(format!("Invalid token regex: {}", e)))?;

        Ok(Self {
            token_regex,
            stop_words: ENGLISH_STOP_WORDS.iter().copied().collect(),
        })
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        tokenize_with(&self.token_regex, &self.stop_words, text)
    }

    /// Learn the vocabulary and idf weights from `documents` and vectorize them.
    pub fn fit(&self, documents: &[String]) -> TfIdfModel {
        let tokenized: Vec<Vec<String>> = documents.iter().map(|doc| self.tokenize(doc)).collect();

        let mut vocabulary = BTreeMap::new();
        for tokens in &tokenized {
            for token in tokens {
                vocabulary.entry(token.clone()).or_insert(0);
            }
        }
        // Column order follows the sorted terms.
        for (index, slot) in vocabulary.values_mut().enumerate() {
            *slot = index;
        }

        let n_docs = documents.len();
        let n_terms = vocabulary.len();

        let mut counts = Array2::<f64>::zeros((n_docs, n_terms));
        for (row, tokens) in tokenized.iter().enumerate() {
            for token in tokens {
                if let Some(&col) = vocabulary.get(token) {
                    counts[[row, col]] += 1.0;
                }
            }
        }

        let document_frequency = counts.map(|&c| if c > 0.0 { 1.0 } else { 0.0 }).sum_axis(Axis(0));
        let idf = document_frequency.mapv(|df| ((1.0 + n_docs as f64) / (1.0 + df)).ln() + 1.0);

        let mut matrix = counts * &idf;
        for mut row in matrix.rows_mut() {
            let norm = row.dot(&row).sqrt();
            if norm > 0.0 {
                row /= norm;
            }
        }

        debug!("Fitted TF-IDF on {} documents, {} terms", n_docs, n_terms);

        TfIdfModel {
            vocabulary,
            idf,
            matrix,
            token_regex: self.token_regex.clone(),
            stop_words: self.stop_words.clone(),
        }
    }
}

impl TfIdfModel {
    pub fn document_count(&self) -> usize {
        self.matrix.nrows()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.vocabulary.contains_key(term)
    }

    /// Vectorize a document against the fitted vocabulary. Unknown terms are ignored.
    pub fn transform(&self, text: &str) -> Array1<f64> {
        let mut vector = Array1::<f64>::zeros(self.vocabulary.len());
        for token in tokenize_with(&self.token_regex, &self.stop_words, text) {
            if let Some(&col) = self.vocabulary.get(&token) {
                vector[col] += 1.0;
            }
        }
        vector *= &self.idf;
        let norm = vector.dot(&vector).sqrt();
        if norm > 0.0 {
            vector /= norm;
        }
        vector
    }

    /// Cosine similarity between two corpus documents, in [0, 1].
    pub fn similarity(&self, i: usize, j: usize) -> f64 {
        self.matrix.row(i).dot(&self.matrix.row(j))
    }

    /// Cosine similarity of every corpus document against `row`.
    pub fn similarities_to_row(&self, row: usize) -> Array1<f64> {
        self.matrix.dot(&self.matrix.row(row))
    }

    /// Cosine similarity of every corpus document against an external vector.
    pub fn similarities_to(&self, vector: &Array1<f64>) -> Array1<f64> {
        self.matrix.dot(vector)
    }
}

fn tokenize_with(regex: &Regex, stop_words: &HashSet<&'static str>, text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    regex
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|token| !stop_words.contains(token))
        .map(str::to_string)
        .collect()
}

const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all", "almost",
    "alone", "along", "already", "also", "although", "always", "am", "among", "amongst", "amoungst",
    "amount", "an", "and", "another", "any", "anyhow", "anyone", "anything", "anyway", "anywhere",
    "are", "around", "as", "at", "back", "be", "became", "because", "become", "becomes", "becoming",
    "been", "before", "beforehand", "behind", "being", "below", "beside", "besides", "between",
    "beyond", "bill", "both", "bottom", "but", "by", "call", "can", "cannot", "cant", "co", "con",
    "could", "couldnt", "cry", "de", "describe", "detail", "do", "done", "down", "due", "during",
    "each", "eg", "eight", "either", "eleven", "else", "elsewhere", "empty", "enough", "etc", "even",
    "ever", "every", "everyone", "everything", "everywhere", "except", "few", "fifteen", "fifty",
    "fill", "find", "fire", "first", "five", "for", "former", "formerly", "forty", "found", "four",
    "from", "front", "full", "further", "get", "give", "go", "had", "has", "hasnt", "have", "he",
    "hence", "her", "here", "hereafter", "hereby", "herein", "hereupon", "hers", "herself", "him",
    "himself", "his", "how", "however", "hundred", "i", "ie", "if", "in", "inc", "indeed",
    "interest", "into", "is", "it", "its", "itself", "keep", "last", "latter", "latterly", "least",
    "less", "ltd", "made", "many", "may", "me", "meanwhile", "might", "mill", "mine", "more",
    "moreover", "most", "mostly", "move", "much", "must", "my", "myself", "name", "namely",
    "neither", "never", "nevertheless", "next", "nine", "no", "nobody", "none", "noone", "nor",
    "not", "nothing", "now", "nowhere", "of", "off", "often", "on", "once", "one", "only", "onto",
    "or", "other", "others", "otherwise", "our", "ours", "ourselves", "out", "over", "own", "part",
    "per", "perhaps", "please", "put", "rather", "re", "same", "see", "seem", "seemed", "seeming",
    "seems", "serious", "several", "she", "should", "show", "side", "since", "sincere", "six",
    "sixty", "so", "some", "somehow", "someone", "something", "sometime", "sometimes", "somewhere",
    "still", "such", "system", "take", "ten", "than", "that", "the", "their", "them", "themselves",
    "then", "thence", "there", "thereafter", "thereby", "therefore", "therein", "thereupon",
    "these", "they", "thick", "thin", "third", "this", "those", "though", "three", "through",
    "throughout", "thru", "thus", "to", "together", "too", "top", "toward", "towards", "twelve",
    "twenty", "two", "un", "under", "until", "up", "upon", "us", "very", "via", "was", "we", "well",
    "were", "what", "whatever", "when", "whence", "whenever", "where", "whereafter", "whereas",
    "whereby", "wherein", "whereupon", "wherever", "whether", "which", "while", "whither", "who",
    "whoever", "whole", "whom", "whose", "why", "will", "with", "within", "without", "would", "yet",
    "you", "your", "yours", "yourself", "yourselves",
];
