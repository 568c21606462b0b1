//! The trained linear model and its persisted form.

use std::collections::HashMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};

use crate::config::TrainerConfig;
use crate::document::category::{Category, CategoryMap};
use crate::error::{ClassifierError, Result};
use crate::ml::featurizer::{FeaturizerState, SparseVector, TextFeaturizer};
use crate::ml::prediction::Prediction;
use crate::ml::trainer::{TrainedWeights, logits};

/// Bumped whenever the persisted layout changes.
const MODEL_FORMAT_VERSION: u32 = 1;

/// Model metadata for tracking model information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelMetadata {
    /// Unique id assigned at training time.
    pub model_id: String,
    pub name: String,
    /// Crate version that trained the model.
    pub version: String,
    pub trained_at: DateTime<Utc>,
    pub training_examples: usize,
    pub vocabulary_size: usize,
    pub hyperparameters: HashMap<String, f64>,
    /// Mean training loss per epoch.
    pub training_losses: Vec<f64>,
}

impl ModelMetadata {
    pub fn new(
        trainer: &TrainerConfig,
        training_examples: usize,
        vocabulary_size: usize,
        training_losses: Vec<f64>,
    ) -> Self {
        let hyperparameters = HashMap::from([
            ("epochs".to_string(), trainer.epochs as f64),
            ("learning_rate".to_string(), trainer.learning_rate),
            ("decay".to_string(), trainer.decay),
            ("l2".to_string(), trainer.l2),
        ]);
        Self {
            model_id: uuid::Uuid::new_v4().to_string(),
            name: "linear_news_classifier".to_string(),
            version: crate::VERSION.to_string(),
            trained_at: Utc::now(),
            training_examples,
            vocabulary_size,
            hyperparameters,
            training_losses,
        }
    }
}

/// Featurizer, class map and per-class weights. Immutable once trained.
#[derive(Debug)]
pub struct LinearModel {
    featurizer: TextFeaturizer,
    categories: CategoryMap,
    weights: Vec<Vec<f64>>,
    biases: Vec<f64>,
    metadata: ModelMetadata,
}

impl LinearModel {
    pub fn new(
        featurizer: TextFeaturizer,
        categories: CategoryMap,
        trained: TrainedWeights,
        metadata: ModelMetadata,
    ) -> Result<Self> {
        let model = Self {
            featurizer,
            categories,
            weights: trained.weights,
            biases: trained.biases,
            metadata,
        };
        model.check_dimensions()?;
        Ok(model)
    }

    fn check_dimensions(&self) -> Result<()> {
        let classes = self.categories.len();
        let features = self.featurizer.vocabulary_size();
        if self.weights.len() != classes || self.biases.len() != classes {
            return Err(ClassifierError::model(format!(
                "expected {classes} weight rows and biases, found {} and {}",
                self.weights.len(),
                self.biases.len()
            )));
        }
        if let Some(row) = self.weights.iter().find(|row| row.len() != features) {
            return Err(ClassifierError::model(format!(
                "weight row has {} entries, vocabulary has {features}",
                row.len()
            )));
        }
        Ok(())
    }

    /// Score a raw text.
    pub fn predict(&self, text: &str) -> Result<Prediction> {
        let features = self.featurizer.transform(text)?;
        Ok(self.predict_features(&features))
    }

    /// Score an already featurized vector.
    pub fn predict_features(&self, features: &SparseVector) -> Prediction {
        Prediction::from_logits(&logits(&self.weights, &self.biases, features))
    }

    pub fn categories(&self) -> &CategoryMap {
        &self.categories
    }

    pub fn featurizer(&self) -> &TextFeaturizer {
        &self.featurizer
    }

    pub fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }

    /// Write the model as pretty JSON, replacing any existing file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let model_data = SerializableLinearModel {
            format_version: MODEL_FORMAT_VERSION,
            featurizer: self.featurizer.state(),
            categories: self.categories.categories().to_vec(),
            weights: self.weights.clone(),
            biases: self.biases.clone(),
            metadata: self.metadata.clone(),
        };

        let json = serde_json::to_string_pretty(&model_data).map_err(|e| {
            ClassifierError::model(format!("cannot serialize model: {e}"))
        })?;
        std::fs::write(path, json).map_err(|e| {
            ClassifierError::model(format!("cannot write model '{}': {e}", path.display()))
        })?;

        info!(
            "Saved model {} to {}",
            self.metadata.model_id,
            path.display()
        );
        Ok(())
    }

    /// Load a model written by [`LinearModel::save`].
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ClassifierError::model(format!("cannot read model '{}': {e}", path.display()))
        })?;
        let model_data: SerializableLinearModel = serde_json::from_str(&content).map_err(|e| {
            ClassifierError::model(format!("cannot parse model '{}': {e}", path.display()))
        })?;

        if model_data.format_version != MODEL_FORMAT_VERSION {
            return Err(ClassifierError::model(format!(
                "unsupported model format version {}",
                model_data.format_version
            )));
        }

        let model = Self {
            featurizer: TextFeaturizer::from_state(model_data.featurizer)?,
            categories: CategoryMap::new(model_data.categories)?,
            weights: model_data.weights,
            biases: model_data.biases,
            metadata: model_data.metadata,
        };
        model.check_dimensions()?;

        info!(
            "Loaded model {} trained at {} from {}",
            model.metadata.model_id,
            model.metadata.trained_at,
            path.display()
        );
        Ok(model)
    }
}

/// Serializable version of [`LinearModel`] for saving/loading.
#[derive(Serialize, Deserialize)]
struct SerializableLinearModel {
    format_version: u32,
    featurizer: FeaturizerState,
    categories: Vec<Category>,
    weights: Vec<Vec<f64>>,
    biases: Vec<f64>,
    metadata: ModelMetadata,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FeaturizerConfig;

    fn tiny_model() -> LinearModel {
        let mut featurizer = TextFeaturizer::new(FeaturizerConfig::default()).unwrap();
        featurizer.fit(["goal", "chip"]).unwrap();
        let size = featurizer.vocabulary_size();
        let categories = CategoryMap::new(vec![Category::Sport, Category::Tech]).unwrap();
        let trained = TrainedWeights {
            weights: vec![vec![0.5; size], vec![-0.5; size]],
            biases: vec![0.0, 0.1],
            losses: vec![0.3],
        };
        let metadata = ModelMetadata::new(&TrainerConfig::default(), 2, size, vec![0.3]);
        LinearModel::new(featurizer, categories, trained, metadata).unwrap()
    }

    #[test]
    fn test_dimension_mismatch_rejected() {
        let mut featurizer = TextFeaturizer::new(FeaturizerConfig::default()).unwrap();
        featurizer.fit(["goal"]).unwrap();
        let trained = TrainedWeights {
            weights: vec![vec![0.0; 1]],
            biases: vec![0.0],
            losses: vec![],
        };
        let metadata = ModelMetadata::new(&TrainerConfig::default(), 1, 1, vec![]);
        let result = LinearModel::new(featurizer, CategoryMap::default(), trained, metadata);
        assert!(matches!(result, Err(ClassifierError::Model(_))));
    }

    #[test]
    fn test_predict_scores_align_with_categories() {
        let model = tiny_model();
        let prediction = model.predict("goal").unwrap();
        assert_eq!(prediction.scores.len(), 2);
        assert_eq!(prediction.top(), Some(0));
        assert_eq!(model.metadata().hyperparameters["epochs"], 20.0);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.txt");
        let model = tiny_model();
        model.save(&path).unwrap();

        let loaded = LinearModel::load(&path).unwrap();
        assert_eq!(loaded.categories(), model.categories());
        assert_eq!(loaded.metadata(), model.metadata());
        let a = model.predict("goal chip").unwrap();
        let b = loaded.predict("goal chip").unwrap();
        for (x, y) in a.scores.iter().zip(&b.scores) {
            assert!((x - y).abs() < 1e-12);
        }
    }

    #[test]
    fn test_load_garbage_is_model_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.txt");
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(
            LinearModel::load(&path),
            Err(ClassifierError::Model(_))
        ));
        assert!(LinearModel::load(&dir.path().join("missing.txt")).is_err());
    }
}
