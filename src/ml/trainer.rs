//! Multinomial logistic regression trained by stochastic gradient descent.
//!
//! Each step visits one example, computes softmax probabilities over the
//! classes and moves every class row along the cross-entropy gradient. L2
//! decay is applied lazily: only the coordinates present in the example are
//! shrunk. The step size for the t-th update is `lr / (1 + decay * t)`.

use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::config::TrainerConfig;
use crate::error::{ClassifierError, Result};
use crate::ml::featurizer::SparseVector;
use crate::ml::prediction::softmax;

/// Smallest probability fed to the log in the loss.
pub const MIN_PROBABILITY: f64 = 1e-15;

/// One featurized, labeled training row.
#[derive(Debug, Clone)]
pub struct TrainingExample {
    pub features: SparseVector,
    pub class_id: usize,
}

/// Fitted parameters plus the loss curve.
#[derive(Debug, Clone)]
pub struct TrainedWeights {
    /// One dense row per class.
    pub weights: Vec<Vec<f64>>,
    pub biases: Vec<f64>,
    /// Mean log-loss per epoch.
    pub losses: Vec<f64>,
}

/// Per-class logits `W x + b`.
pub fn logits(weights: &[Vec<f64>], biases: &[f64], features: &SparseVector) -> Vec<f64> {
    weights
        .iter()
        .zip(biases)
        .map(|(row, bias)| features.dot(row) + bias)
        .collect()
}

#[derive(Debug, Clone)]
pub struct SgdTrainer {
    config: TrainerConfig,
}

impl SgdTrainer {
    pub fn new(config: TrainerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }

    pub fn train(
        &self,
        examples: &[TrainingExample],
        num_features: usize,
        num_classes: usize,
    ) -> Result<TrainedWeights> {
        if examples.is_empty() {
            return Err(ClassifierError::training("training set is empty"));
        }
        if num_features == 0 {
            return Err(ClassifierError::training("feature space is empty"));
        }
        if num_classes == 0 {
            return Err(ClassifierError::training("no classes to train"));
        }
        if let Some(bad) = examples.iter().find(|e| e.class_id >= num_classes) {
            return Err(ClassifierError::training(format!(
                "class id {} is out of range for {num_classes} classes",
                bad.class_id
            )));
        }

        let mut weights = vec![vec![0.0; num_features]; num_classes];
        let mut biases = vec![0.0; num_classes];
        let mut losses = Vec::with_capacity(self.config.epochs);
        let mut order: Vec<usize> = (0..examples.len()).collect();
        let mut rng = StdRng::seed_from_u64(self.config.seed);
        let mut step = 0u64;

        info!(
            "Training on {} examples, {} features, {} classes for {} epochs",
            examples.len(),
            num_features,
            num_classes,
            self.config.epochs
        );

        for epoch in 0..self.config.epochs {
            order.shuffle(&mut rng);
            let mut total_loss = 0.0;

            for &idx in &order {
                let example = &examples[idx];
                let lr = self.config.learning_rate / (1.0 + self.config.decay * step as f64);
                let probs = softmax(&logits(&weights, &biases, &example.features));
                total_loss -= probs[example.class_id].max(MIN_PROBABILITY).ln();

                for (class_id, (row, bias)) in weights.iter_mut().zip(biases.iter_mut()).enumerate()
                {
                    let target = if class_id == example.class_id { 1.0 } else { 0.0 };
                    let gradient = probs[class_id] - target;
                    for (feature, value) in example.features.iter() {
                        let w = &mut row[feature];
                        *w -= lr * (gradient * value + self.config.l2 * *w);
                    }
                    *bias -= lr * gradient;
                }
                step += 1;
            }

            let mean_loss = total_loss / examples.len() as f64;
            if !mean_loss.is_finite() {
                return Err(ClassifierError::training(format!(
                    "loss diverged in epoch {}",
                    epoch + 1
                )));
            }
            debug!("Epoch {}/{}: loss {:.6}", epoch + 1, self.config.epochs, mean_loss);
            losses.push(mean_loss);
        }

        if let Some(last) = losses.last() {
            info!("Training finished with loss {last:.6}");
        }

        Ok(TrainedWeights {
            weights,
            biases,
            losses,
        })
    }
}
