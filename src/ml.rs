//! The machine learning toolkit behind the classifier.
//!
//! Orchestration code only talks to the [`toolkit::Toolkit`] trait. The
//! stock implementation, [`toolkit::LinearToolkit`], featurizes text into
//! sparse word and character n-gram vectors and fits a multinomial logistic
//! regression on them.

pub mod featurizer;
pub mod metrics;
pub mod model;
pub mod prediction;
pub mod toolkit;
pub mod trainer;

pub use featurizer::{FeaturizerState, SparseVector, TextFeaturizer};
pub use metrics::{Metrics, MetricsCalculator};
pub use model::{LinearModel, ModelMetadata};
pub use prediction::Prediction;
pub use toolkit::{LinearToolkit, Toolkit};
pub use trainer::{SgdTrainer, TrainedWeights, TrainingExample};
