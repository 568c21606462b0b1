//! Analyzers combining char filters, a tokenizer and token filters.
//!
//! - [`pipeline::PipelineAnalyzer`] - Custom char filter + tokenizer + filter chains
//! - [`news::NewsAnalyzer`] - The word and character analyzers used for featurization

#[allow(clippy::module_inception)]
pub mod analyzer;
pub mod news;
pub mod pipeline;

pub use analyzer::Analyzer;
pub use news::{CharNgramAnalyzer, NewsAnalyzer};
pub use pipeline::PipelineAnalyzer;
