use std::collections::{BTreeMap, BTreeSet};
use crate::core::error::{MatchError, Result};
use crate::core::text::analyze;

/// Sparse feature vector as `(feature index, weight)` pairs sorted by index
pub type SparseVector = Vec<(usize, f64)>;

/// Text model that can be fitted once on a corpus and then used to project
/// arbitrary text into the fitted feature space.
pub trait TextSimilarityModel: Send + Sync {
    type Fitted: Send + Sync;

    fn fit(&self, corpus: &[String]) -> Result<Self::Fitted>;

    fn project(&self, fitted: &Self::Fitted, text: &str) -> SparseVector;
}

/// Cosine similarity between two sparse vectors, 0.0 if either has zero norm
pub fn cosine(a: &[(usize, f64)], b: &[(usize, f64)]) -> f64 {
    let norm_a = a.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    // Both sides are index-sorted, so a merge walk finds the shared features
    let (mut i, mut j) = (0, 0);
    let mut dot = 0.0;
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                dot += a[i].1 * b[j].1;
                i += 1;
                j += 1;
            }
        }
    }

    dot / (norm_a * norm_b)
}

/// TF-IDF weighting over unigrams and bigrams with English stop words removed
#[derive(Debug, Clone, Copy, Default)]
pub struct TfIdf;

/// Vocabulary and idf weights learned from a corpus
#[derive(Debug, Clone)]
pub struct TfIdfModel {
    vocabulary: BTreeMap<String, usize>,
    idf: Vec<f64>,
}

impl TfIdfModel {
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }
}

impl TextSimilarityModel for TfIdf {
    type Fitted = TfIdfModel;

    fn fit(&self, corpus: &[String]) -> Result<TfIdfModel> {
        let analyzed: Vec<Vec<String>> = corpus.iter().map(|doc| analyze(doc)).collect();

        let terms: BTreeSet<&str> = analyzed
            .iter()
            .flat_map(|doc| doc.iter().map(String::as_str))
            .collect();

        if terms.is_empty() {
            return Err(MatchError::IndexBuild(
                "empty vocabulary; corpus contains only stop words".to_string(),
            ));
        }

        // BTreeSet iteration is sorted, so indices follow lexicographic order
        let vocabulary: BTreeMap<String, usize> = terms
            .into_iter()
            .enumerate()
            .map(|(idx, term)| (term.to_string(), idx))
            .collect();

        let mut doc_freq = vec![0u32; vocabulary.len()];
        for doc in &analyzed {
            let seen: BTreeSet<usize> = doc.iter().filter_map(|t| vocabulary.get(t).copied()).collect();
            for idx in seen {
                doc_freq[idx] += 1;
            }
        }

        let n = corpus.len() as f64;
        let idf = doc_freq
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        tracing::debug!("Fitted TF-IDF model: {} documents, {} terms", corpus.len(), vocabulary.len());

        Ok(TfIdfModel { vocabulary, idf })
    }

    fn project(&self, fitted: &TfIdfModel, text: &str) -> SparseVector {
        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for term in analyze(text) {
            if let Some(idx) = fitted.term_index(&term) {
                *counts.entry(idx).or_insert(0.0) += 1.0;
            }
        }

        let mut vector: SparseVector = counts
            .into_iter()
            .map(|(idx, tf)| (idx, tf * fitted.idf[idx]))
            .collect();

        let norm = vector.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, w) in vector.iter_mut() {
                *w /= norm;
            }
        }
        vector
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(docs: &[&str]) -> Vec<String> {
        docs.iter().map(|d| d.to_string()).collect()
    }

    #[test]
    fn test_cosine_identical_and_disjoint() {
        let a = vec![(0, 1.0), (2, 1.0)];
        let b = vec![(1, 3.0)];
        assert!((cosine(&a, &a) - 1.0).abs() < 1e-12);
        assert_eq!(cosine(&a, &b), 0.0);
        assert_eq!(cosine(&a, &[]), 0.0);
    }

    #[test]
    fn test_fit_rejects_empty_vocabulary() {
        let result = TfIdf.fit(&corpus(&["the and of", "a"]));
        assert!(matches!(result, Err(MatchError::IndexBuild(_))));
    }

    #[test]
    fn test_smoothed_idf() {
        let model = TfIdf.fit(&corpus(&["leather sandals", "leather spices"])).unwrap();
        let leather = model.term_index("leather").unwrap();
        let sandals = model.term_index("sandals").unwrap();
        assert!((model.idf[leather] - 1.0).abs() < 1e-12);
        assert!((model.idf[sandals] - ((3.0f64 / 2.0).ln() + 1.0)).abs() < 1e-12);
        assert!(model.term_index("leather sandals").is_some());
    }

    #[test]
    fn test_projection_is_unit_length_and_ignores_unknown_terms() {
        let model = TfIdf.fit(&corpus(&["organic spice trading", "leather sandals"])).unwrap();
        let v = TfIdf.project(&model, "organic spice bananas");
        let norm: f64 = v.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < 1e-12);
        assert!(TfIdf.project(&model, "bananas").is_empty());
    }

    #[test]
    fn test_projection_is_deterministic() {
        let model = TfIdf.fit(&corpus(&["organic spice trading", "leather sandals"])).unwrap();
        assert_eq!(
            TfIdf.project(&model, "organic leather"),
            TfIdf.project(&model, "organic leather")
        );
    }
}
