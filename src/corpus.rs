//! Corpus preparation: loading raw news files and splitting them.
//!
//! The raw corpus is a directory per category, one plain-text article per
//! file. [`loader::CorpusLoader`] turns each file into a short labeled
//! [`Document`](crate::document::document::Document) and
//! [`splitter::CorpusSplitter`] partitions every category into training and
//! test portions.

pub mod loader;
pub mod splitter;

pub use loader::{CorpusLoader, extract_excerpt};
pub use splitter::{CorpusSplitter, Split, SplitRounding, split_category, training_size};
