//! Document structure used throughout the pipeline.

use serde::{Deserialize, Serialize};

use crate::document::category::Category;

/// A news text with an optional topic label.
///
/// Training and test rows always carry a label; documents built from
/// interactive input do not.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Document {
    /// Free-form text content.
    pub text: String,
    /// Category label, absent for live predictions.
    pub label: Option<Category>,
}

impl Document {
    /// Create a labeled document.
    pub fn labeled<S: Into<String>>(text: S, label: Category) -> Self {
        Document {
            text: text.into(),
            label: Some(label),
        }
    }

    /// Create a document without a label.
    pub fn unlabeled<S: Into<String>>(text: S) -> Self {
        Document {
            text: text.into(),
            label: None,
        }
    }

    /// Check if the document carries a label.
    pub fn is_labeled(&self) -> bool {
        self.label.is_some()
    }
}
