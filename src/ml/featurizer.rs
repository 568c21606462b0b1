//! Sparse n-gram featurizer for news text.

use std::sync::Arc;

use ahash::AHashMap;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::{Analyzer, CharNgramAnalyzer, NewsAnalyzer};
use crate::config::FeaturizerConfig;
use crate::error::{ClassifierError, Result};

const WORD_PREFIX: &str = "w:";
const CHAR_PREFIX: &str = "c:";

/// A sparse feature vector with indices in ascending order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    indices: Vec<u32>,
    values: Vec<f64>,
}

impl SparseVector {
    /// Build from unordered `(index, value)` pairs. Duplicate indices are summed.
    pub fn from_pairs(mut pairs: Vec<(u32, f64)>) -> Self {
        pairs.sort_unstable_by_key(|(idx, _)| *idx);
        let mut indices: Vec<u32> = Vec::with_capacity(pairs.len());
        let mut values: Vec<f64> = Vec::with_capacity(pairs.len());
        for (idx, value) in pairs {
            if indices.last() == Some(&idx) {
                if let Some(last) = values.last_mut() {
                    *last += value;
                }
            } else {
                indices.push(idx);
                values.push(value);
            }
        }
        Self { indices, values }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.indices
            .iter()
            .zip(self.values.iter())
            .map(|(i, v)| (*i as usize, *v))
    }

    /// Dot product with a dense weight row.
    pub fn dot(&self, dense: &[f64]) -> f64 {
        self.iter()
            .filter_map(|(i, v)| dense.get(i).map(|w| w * v))
            .sum()
    }

    pub fn norm(&self) -> f64 {
        self.values.iter().map(|v| v * v).sum::<f64>().sqrt()
    }

    /// Scale to unit L2 norm. The zero vector is left unchanged.
    pub fn normalize(&mut self) {
        let norm = self.norm();
        if norm > 0.0 {
            for value in &mut self.values {
                *value /= norm;
            }
        }
    }
}

/// The persisted part of a fitted featurizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeaturizerState {
    pub config: FeaturizerConfig,
    pub vocabulary: AHashMap<String, u32>,
}

/// Converts text into L2-normalized sparse count vectors over a vocabulary
/// of word n-grams and character n-grams learned by [`TextFeaturizer::fit`].
pub struct TextFeaturizer {
    config: FeaturizerConfig,
    vocabulary: AHashMap<String, u32>,
    words: Arc<dyn Analyzer>,
    chars: Arc<dyn Analyzer>,
}

impl std::fmt::Debug for TextFeaturizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextFeaturizer")
            .field("vocabulary_size", &self.vocabulary.len())
            .field("words", &self.words.name())
            .field("chars", &self.chars.name())
            .finish()
    }
}

impl TextFeaturizer {
    /// Create an unfitted featurizer.
    pub fn new(config: FeaturizerConfig) -> Result<Self> {
        let words: Arc<dyn Analyzer> = Arc::new(NewsAnalyzer::new(&config)?);
        let chars: Arc<dyn Analyzer> = Arc::new(CharNgramAnalyzer::new(&config)?);
        Ok(Self {
            config,
            vocabulary: AHashMap::new(),
            words,
            chars,
        })
    }

    /// Rebuild a fitted featurizer from its persisted state.
    ///
    /// The vocabulary indices must be exactly `0..len`, each used once.
    pub fn from_state(state: FeaturizerState) -> Result<Self> {
        let mut featurizer = Self::new(state.config)?;
        let size = state.vocabulary.len();
        let mut owners: Vec<Option<&str>> = vec![None; size];

        for (term, &idx) in &state.vocabulary {
            let slot = owners.get_mut(idx as usize).ok_or_else(|| {
                ClassifierError::model(format!(
                    "vocabulary index {idx} for '{term}' is out of range for {size} terms"
                ))
            })?;
            if let Some(other) = slot {
                return Err(ClassifierError::model(format!(
                    "vocabulary index {idx} is shared by '{other}' and '{term}'"
                )));
            }
            *slot = Some(term.as_str());
        }

        featurizer.vocabulary = state.vocabulary;
        Ok(featurizer)
    }

    pub fn state(&self) -> FeaturizerState {
        FeaturizerState {
            config: self.config.clone(),
            vocabulary: self.vocabulary.clone(),
        }
    }

    pub fn config(&self) -> &FeaturizerConfig {
        &self.config
    }

    /// Build the vocabulary from training texts. Indices are assigned in
    /// first-seen order, so fitting is deterministic for a given input order.
    pub fn fit<'a, I>(&mut self, texts: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut vocabulary = AHashMap::new();
        let mut documents = 0usize;
        for text in texts {
            for term in self.terms(text)? {
                let next = vocabulary.len() as u32;
                vocabulary.entry(term).or_insert(next);
            }
            documents += 1;
        }

        if vocabulary.is_empty() {
            return Err(ClassifierError::training(
                "no features could be extracted from the training set",
            ));
        }

        info!(
            "Built vocabulary of {} features from {} documents",
            vocabulary.len(),
            documents
        );
        self.vocabulary = vocabulary;
        Ok(())
    }

    /// Featurize one text. Terms outside the vocabulary are ignored.
    pub fn transform(&self, text: &str) -> Result<SparseVector> {
        let pairs: Vec<(u32, f64)> = self
            .terms(text)?
            .into_iter()
            .filter_map(|term| self.vocabulary.get(&term).map(|idx| (*idx, 1.0)))
            .collect();

        let mut vector = SparseVector::from_pairs(pairs);
        vector.normalize();
        if vector.is_empty() {
            debug!("No known features in '{text}'");
        }
        Ok(vector)
    }

    /// The namespaced word and character n-grams of `text`, with repeats.
    pub fn terms(&self, text: &str) -> Result<Vec<String>> {
        let words = self
            .words
            .analyze(text)?
            .map(|token| format!("{WORD_PREFIX}{}", token.text));
        let chars = self
            .chars
            .analyze(text)?
            .map(|token| format!("{CHAR_PREFIX}{}", token.text));
        Ok(words.chain(chars).collect())
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn is_fitted(&self) -> bool {
        !self.vocabulary.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fitted() -> TextFeaturizer {
        let mut featurizer = TextFeaturizer::new(FeaturizerConfig::default()).unwrap();
        featurizer
            .fit([
                "Shares rise as bank profits grow",
                "Striker scores twice in cup final",
            ])
            .unwrap();
        featurizer
    }

    #[test]
    fn test_sparse_vector_merges_duplicates() {
        let vector = SparseVector::from_pairs(vec![(3, 1.0), (1, 2.0), (3, 1.0)]);
        let pairs: Vec<(usize, f64)> = vector.iter().collect();
        assert_eq!(pairs, vec![(1, 2.0), (3, 2.0)]);
        assert_eq!(vector.dot(&[0.0, 1.0, 0.0, 0.5]), 3.0);
    }

    #[test]
    fn test_terms_are_namespaced() {
        let featurizer = TextFeaturizer::new(FeaturizerConfig::default()).unwrap();
        let terms = featurizer.terms("Cup final").unwrap();
        assert!(terms.contains(&"w:cup".to_string()));
        assert!(terms.contains(&"w:cup final".to_string()));
        assert!(terms.contains(&"c:cup".to_string()));
        assert!(terms.contains(&"c:p f".to_string()));
    }

    #[test]
    fn test_transform_is_unit_length() {
        let featurizer = fitted();
        assert!(featurizer.is_fitted());

        let vector = featurizer.transform("Bank shares").unwrap();
        assert!(!vector.is_empty());
        assert!((vector.norm() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_text_is_empty_vector() {
        let featurizer = fitted();
        let vector = featurizer.transform("zzzz qqqq").unwrap();
        assert!(vector.is_empty());
    }

    #[test]
    fn test_fit_rejects_featureless_input() {
        let mut featurizer = TextFeaturizer::new(FeaturizerConfig::default()).unwrap();
        assert!(featurizer.fit(["", "!!"]).is_err());
    }

    #[test]
    fn test_state_round_trip() {
        let featurizer = fitted();
        let json = serde_json::to_string(&featurizer.state()).unwrap();
        let state: FeaturizerState = serde_json::from_str(&json).unwrap();
        let restored = TextFeaturizer::from_state(state).unwrap();

        assert_eq!(restored.vocabulary_size(), featurizer.vocabulary_size());
        assert_eq!(
            restored.transform("cup final").unwrap(),
            featurizer.transform("cup final").unwrap()
        );
    }

    #[test]
    fn test_state_rejects_bad_indices() {
        let config = FeaturizerConfig::default();
        let state = |pairs: &[(&str, u32)]| FeaturizerState {
            config: config.clone(),
            vocabulary: pairs.iter().map(|(t, i)| (t.to_string(), *i)).collect(),
        };

        let err = TextFeaturizer::from_state(state(&[("w:goal", 0), ("w:chip", 0)])).unwrap_err();
        assert!(matches!(err, ClassifierError::Model(_)));
        assert!(err.to_string().contains("shared by"));

        let err = TextFeaturizer::from_state(state(&[("w:goal", 0), ("w:chip", 2)])).unwrap_err();
        assert!(err.to_string().contains("out of range"));

        let restored = TextFeaturizer::from_state(state(&[("w:goal", 1), ("w:chip", 0)])).unwrap();
        assert_eq!(restored.vocabulary_size(), 2);
    }
}
