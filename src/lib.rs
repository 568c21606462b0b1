//! # news-classifier
//!
//! Topic classification for BBC news excerpts.
//!
//! ## Features
//!
//! - Corpus loading from per-category directories
//! - Shuffled train/test splitting with an injectable random source
//! - Tab-separated dataset files
//! - Word and character n-gram featurization built on a text analysis pipeline
//! - Multinomial logistic regression behind a swappable [`ml::Toolkit`]
//! - Evaluation report and an interactive console loop

pub mod analysis;
pub mod app;
pub mod cli;
pub mod config;
pub mod corpus;
pub mod dataset;
pub mod document;
pub mod error;
pub mod interactive;
pub mod ml;
pub mod report;

pub mod prelude {
    pub use crate::app::App;
    pub use crate::config::ClassifierConfig;
    pub use crate::document::category::{Category, CategoryMap};
    pub use crate::document::document::Document;
    pub use crate::error::{ClassifierError, Result};
    pub use crate::ml::{LinearToolkit, Prediction, Toolkit};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
