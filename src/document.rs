//! Document module for labeled news text.
//!
//! This module provides the data types that flow between the corpus loader,
//! the dataset files and the classifier.
//!
//! # Core Components
//!
//! - [`document::Document`] - A text with an optional category label
//! - [`category::Category`] - The fixed, ordered set of topic labels
//! - [`category::CategoryMap`] - Explicit class id to category mapping
//!
//! # Examples
//!
//! ```
//! use news_classifier::document::category::Category;
//! use news_classifier::document::document::Document;
//!
//! let doc = Document::labeled("Shares rose sharply", Category::Business);
//! assert_eq!(doc.label, Some(Category::Business));
//!
//! let query = Document::unlabeled("The team won the championship");
//! assert!(query.label.is_none());
//! ```

pub mod category;
#[allow(clippy::module_inception)]
pub mod document;
