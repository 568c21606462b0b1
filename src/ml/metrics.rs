//! Multi-class quality metrics.

use serde::{Deserialize, Serialize};

use crate::document::category::{Category, CategoryMap};
use crate::error::{ClassifierError, Result};
use crate::ml::prediction::Prediction;
use crate::ml::trainer::MIN_PROBABILITY;

/// Evaluation results for one dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Mean per-category recall over categories present in the dataset.
    pub accuracy_macro: f64,
    /// Fraction of rows predicted correctly.
    pub accuracy_micro: f64,
    /// Mean negative log probability of the true class.
    pub log_loss: f64,
    /// Recall per category, for categories present in the dataset.
    pub per_category_accuracy: Vec<(Category, f64)>,
    pub sample_count: usize,
}

/// Accumulates predictions and produces [`Metrics`].
#[derive(Debug, Clone)]
pub struct MetricsCalculator {
    categories: CategoryMap,
    totals: Vec<usize>,
    correct: Vec<usize>,
    log_loss_sum: f64,
    samples: usize,
}

impl MetricsCalculator {
    pub fn new(categories: &CategoryMap) -> Self {
        Self {
            categories: categories.clone(),
            totals: vec![0; categories.len()],
            correct: vec![0; categories.len()],
            log_loss_sum: 0.0,
            samples: 0,
        }
    }

    /// Record one prediction against its true class id.
    pub fn add(&mut self, class_id: usize, prediction: &Prediction) -> Result<()> {
        if class_id >= self.totals.len() {
            return Err(ClassifierError::other(format!(
                "class id {class_id} is out of range for {} classes",
                self.totals.len()
            )));
        }
        self.totals[class_id] += 1;
        if prediction.top() == Some(class_id) {
            self.correct[class_id] += 1;
        }
        self.log_loss_sum -= prediction.score(class_id).max(MIN_PROBABILITY).ln();
        self.samples += 1;
        Ok(())
    }

    pub fn finish(&self) -> Result<Metrics> {
        if self.samples == 0 {
            return Err(ClassifierError::other(
                "cannot compute metrics for an empty dataset",
            ));
        }

        let per_category_accuracy: Vec<(Category, f64)> = self
            .categories
            .iter()
            .filter(|(class_id, _)| self.totals[*class_id] > 0)
            .map(|(class_id, category)| {
                (
                    category,
                    self.correct[class_id] as f64 / self.totals[class_id] as f64,
                )
            })
            .collect();

        let accuracy_macro = per_category_accuracy.iter().map(|(_, acc)| acc).sum::<f64>()
            / per_category_accuracy.len() as f64;
        let accuracy_micro = self.correct.iter().sum::<usize>() as f64 / self.samples as f64;

        Ok(Metrics {
            accuracy_macro,
            accuracy_micro,
            log_loss: self.log_loss_sum / self.samples as f64,
            per_category_accuracy,
            sample_count: self.samples,
        })
    }
}
