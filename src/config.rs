//! Configuration for the classifier pipeline.
//!
//! Every path, the category list, split and training parameters live in one
//! [`ClassifierConfig`] that is passed to each component. The defaults
//! reproduce the stock layout: a `bbc/` corpus directory, `news-train.txt`,
//! `news-test.txt` and `model.txt` in the working directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::corpus::splitter::SplitRounding;
use crate::document::category::{Category, CategoryMap};
use crate::error::{ClassifierError, Result};

/// Which dataset the startup evaluation report runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EvaluationTarget {
    /// The training set the model was fitted on.
    Training,
    /// The held-out test set.
    Test,
}

/// Filesystem locations used by the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathConfig {
    /// Corpus root with one sub-directory per category.
    pub data_dir: PathBuf,
    /// Generated training dataset.
    pub training_set: PathBuf,
    /// Generated test dataset.
    pub test_set: PathBuf,
    /// Persisted model.
    pub model: PathBuf,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("bbc"),
            training_set: PathBuf::from("news-train.txt"),
            test_set: PathBuf::from("news-test.txt"),
            model: PathBuf::from("model.txt"),
        }
    }
}

/// Train/test split parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitConfig {
    /// Documents per hundred that go to training.
    pub training_percent: usize,
    /// Rounding rule for the training share.
    pub rounding: SplitRounding,
    /// Fixed shuffle seed; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            training_percent: 80,
            rounding: SplitRounding::HundredGroups,
            seed: None,
        }
    }
}

/// Text featurization parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeaturizerConfig {
    /// Longest word n-gram; all lengths from 1 up to this are emitted.
    pub word_ngram_length: usize,
    /// Character n-gram length; only this exact length is emitted.
    pub char_ngram_length: usize,
    /// Drop English stop words before building word n-grams.
    pub remove_stop_words: bool,
    /// Keep accents and other combining marks.
    pub keep_diacritics: bool,
    /// Keep punctuation and symbol characters.
    pub keep_punctuation: bool,
}

impl Default for FeaturizerConfig {
    fn default() -> Self {
        Self {
            word_ngram_length: 3,
            char_ngram_length: 3,
            remove_stop_words: true,
            keep_diacritics: false,
            keep_punctuation: false,
        }
    }
}

/// Linear trainer hyperparameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainerConfig {
    /// Passes over the training set.
    pub epochs: usize,
    /// Initial step size.
    pub learning_rate: f64,
    /// Step size decay per example seen: `lr / (1 + decay * t)`.
    pub decay: f64,
    /// L2 regularization strength.
    pub l2: f64,
    /// Seed for the per-epoch example order.
    pub seed: u64,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            epochs: 20,
            learning_rate: 0.5,
            decay: 1e-3,
            l2: 1e-6,
            seed: 42,
        }
    }
}

/// Top-level classifier configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    pub paths: PathConfig,
    /// Categories in class id order.
    pub categories: Vec<Category>,
    pub split: SplitConfig,
    pub featurizer: FeaturizerConfig,
    pub trainer: TrainerConfig,
    /// Dataset used for the startup evaluation report.
    pub evaluation_target: EvaluationTarget,
    /// Console input that ends the interactive loop.
    pub exit_sentinel: String,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            paths: PathConfig::default(),
            categories: Category::ALL.to_vec(),
            split: SplitConfig::default(),
            featurizer: FeaturizerConfig::default(),
            trainer: TrainerConfig::default(),
            evaluation_target: EvaluationTarget::Training,
            exit_sentinel: "Exit".to_string(),
        }
    }
}

impl ClassifierConfig {
    /// Load a configuration from a JSON file. Missing fields take defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ClassifierError::invalid_config(format!("cannot read '{}': {e}", path.display()))
        })?;
        let config: ClassifierConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for values the pipeline cannot run with.
    pub fn validate(&self) -> Result<()> {
        self.category_map()?;
        if self.split.training_percent > 100 {
            return Err(ClassifierError::invalid_config(format!(
                "training_percent must be <= 100, got {}",
                self.split.training_percent
            )));
        }
        if self.featurizer.word_ngram_length == 0 || self.featurizer.char_ngram_length == 0 {
            return Err(ClassifierError::invalid_config(
                "n-gram lengths must be at least 1",
            ));
        }
        if self.trainer.learning_rate <= 0.0 {
            return Err(ClassifierError::invalid_config(
                "learning_rate must be positive",
            ));
        }
        if self.exit_sentinel.is_empty() {
            return Err(ClassifierError::invalid_config(
                "exit_sentinel must not be empty",
            ));
        }
        Ok(())
    }

    /// The class id mapping for the configured categories.
    pub fn category_map(&self) -> Result<CategoryMap> {
        CategoryMap::new(self.categories.clone())
    }

    /// Path of the dataset the evaluation report should use.
    pub fn evaluation_set(&self) -> &Path {
        match self.evaluation_target {
            EvaluationTarget::Training => &self.paths.training_set,
            EvaluationTarget::Test => &self.paths.test_set,
        }
    }
}
