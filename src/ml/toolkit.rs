//! The toolkit seam between orchestration and machine learning.
//!
//! [`Toolkit`] is everything the application needs from an ML library:
//! fit, predict, save, load and evaluate. Tests can swap in a fake; the
//! application ships with [`LinearToolkit`].

use std::path::Path;

use log::info;

use crate::config::{ClassifierConfig, FeaturizerConfig, TrainerConfig};
use crate::dataset::{self, Dataset};
use crate::document::category::CategoryMap;
use crate::document::document::Document;
use crate::error::{ClassifierError, Result};
use crate::ml::featurizer::TextFeaturizer;
use crate::ml::metrics::{Metrics, MetricsCalculator};
use crate::ml::model::{LinearModel, ModelMetadata};
use crate::ml::prediction::Prediction;
use crate::ml::trainer::{SgdTrainer, TrainingExample};

/// Trait for machine learning toolkits.
pub trait Toolkit {
    /// Type of the trained model.
    type Model;

    /// Train a model on labeled documents.
    fn fit(&self, training: &[Document], categories: &CategoryMap) -> Result<Self::Model>;

    /// Score one document's text; any label is ignored. Scores are aligned
    /// with [`Toolkit::classes`].
    fn predict(&self, model: &Self::Model, document: &Document) -> Result<Prediction>;

    /// Persist a model, replacing any existing file.
    fn save(&self, model: &Self::Model, path: &Path) -> Result<()>;

    /// Load a model written by [`Toolkit::save`].
    fn load(&self, path: &Path) -> Result<Self::Model>;

    /// The class map a model was trained with.
    fn classes<'m>(&self, model: &'m Self::Model) -> &'m CategoryMap;

    /// Read a dataset file.
    fn read_dataset(&self, path: &Path) -> Result<Dataset> {
        dataset::read_dataset(path)
    }

    /// Score every labeled document and compute quality metrics.
    fn evaluate(&self, model: &Self::Model, documents: &[Document]) -> Result<Metrics> {
        let categories = self.classes(model);
        let mut calculator = MetricsCalculator::new(categories);

        for document in documents {
            let label = document
                .label
                .ok_or_else(|| ClassifierError::other("cannot evaluate an unlabeled document"))?;
            let class_id = categories.class_id(label).ok_or_else(|| {
                ClassifierError::other(format!("label '{label}' is not known to the model"))
            })?;
            let prediction = self.predict(model, document)?;
            calculator.add(class_id, &prediction)?;
        }

        calculator.finish()
    }
}

/// N-gram featurizer plus SGD logistic regression.
#[derive(Debug, Clone, Default)]
pub struct LinearToolkit {
    featurizer: FeaturizerConfig,
    trainer: TrainerConfig,
}

impl LinearToolkit {
    pub fn new(featurizer: FeaturizerConfig, trainer: TrainerConfig) -> Self {
        Self {
            featurizer,
            trainer,
        }
    }

    pub fn from_config(config: &ClassifierConfig) -> Self {
        Self::new(config.featurizer.clone(), config.trainer.clone())
    }
}

impl Toolkit for LinearToolkit {
    type Model = LinearModel;

    fn fit(&self, training: &[Document], categories: &CategoryMap) -> Result<LinearModel> {
        if training.is_empty() {
            return Err(ClassifierError::training("training set is empty"));
        }

        let class_ids = training
            .iter()
            .map(|document| {
                let label = document.label.ok_or_else(|| {
                    ClassifierError::training(format!("unlabeled training row '{}'", document.text))
                })?;
                categories.class_id(label).ok_or_else(|| {
                    ClassifierError::training(format!(
                        "label '{label}' is not a configured category"
                    ))
                })
            })
            .collect::<Result<Vec<usize>>>()?;

        let mut featurizer = TextFeaturizer::new(self.featurizer.clone())?;
        featurizer.fit(training.iter().map(|d| d.text.as_str()))?;

        let examples = training
            .iter()
            .zip(class_ids)
            .map(|(document, class_id)| {
                Ok(TrainingExample {
                    features: featurizer.transform(&document.text)?,
                    class_id,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let trained = SgdTrainer::new(self.trainer.clone()).train(
            &examples,
            featurizer.vocabulary_size(),
            categories.len(),
        )?;

        let metadata = ModelMetadata::new(
            &self.trainer,
            examples.len(),
            featurizer.vocabulary_size(),
            trained.losses.clone(),
        );
        info!(
            "Trained model {} on {} documents",
            metadata.model_id,
            examples.len()
        );

        LinearModel::new(featurizer, categories.clone(), trained, metadata)
    }

    fn predict(&self, model: &LinearModel, document: &Document) -> Result<Prediction> {
        model.predict(&document.text)
    }

    fn save(&self, model: &LinearModel, path: &Path) -> Result<()> {
        model.save(path)
    }

    fn load(&self, path: &Path) -> Result<LinearModel> {
        LinearModel::load(path)
    }

    fn classes<'m>(&self, model: &'m LinearModel) -> &'m CategoryMap {
        model.categories()
    }
}
