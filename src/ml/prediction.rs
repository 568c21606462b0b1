//! Per-class prediction scores.

use serde::{Deserialize, Serialize};

use crate::document::category::{Category, CategoryMap};

/// Softmax probabilities, one per class id of the model's [`CategoryMap`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub scores: Vec<f64>,
}

impl Prediction {
    /// Build a prediction from raw per-class scores.
    pub fn from_logits(logits: &[f64]) -> Self {
        Self {
            scores: softmax(logits),
        }
    }

    /// Class id with the highest score. Ties go to the lowest class id.
    pub fn top(&self) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (idx, score) in self.scores.iter().copied().enumerate() {
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((idx, score)),
            }
        }
        best.map(|(idx, _)| idx)
    }

    /// Score of one class id, 0 when out of range.
    pub fn score(&self, class_id: usize) -> f64 {
        self.scores.get(class_id).copied().unwrap_or(0.0)
    }

    /// Pair every score with its category, in class id order.
    pub fn category_scores(&self, categories: &CategoryMap) -> Vec<(Category, f64)> {
        categories
            .iter()
            .map(|(class_id, category)| (category, self.score(class_id)))
            .collect()
    }
}

/// Numerically stable softmax.
pub fn softmax(logits: &[f64]) -> Vec<f64> {
    let max = logits.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = logits.iter().map(|l| (l - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}
