//! Per-category train/test splitter.
//!
//! Documents of one category are shuffled and the first
//! `floor(count / 100) * training_percent` become training data; the rest is
//! test data. The rounding works in whole groups of a hundred, so a category
//! of 511 documents yields 400 training and 111 test documents, and a
//! category smaller than a hundred documents goes entirely to test.
//!
//! [`SplitRounding::Exact`] switches to `floor(count * training_percent / 100)`
//! for small corpora where hundred-groups would leave nothing to train on.
//!
//! The random source is injected so tests can use a seeded generator.

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::document::category::Category;
use crate::document::document::Document;

/// Training and test portions of a split.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Split {
    pub training: Vec<Document>,
    pub test: Vec<Document>,
}

/// How the training share of a category is rounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitRounding {
    /// `floor(count / 100) * training_percent`
    #[default]
    HundredGroups,
    /// `floor(count * training_percent / 100)`
    Exact,
}

/// Number of training documents for a category of `count` documents.
pub fn training_size(count: usize, training_percent: usize, rounding: SplitRounding) -> usize {
    match rounding {
        SplitRounding::HundredGroups => (count / 100) * training_percent,
        SplitRounding::Exact => count * training_percent / 100,
    }
}

/// Shuffle one category's documents and split them.
pub fn split_category<R: Rng + ?Sized>(
    mut documents: Vec<Document>,
    training_percent: usize,
    rounding: SplitRounding,
    rng: &mut R,
) -> Split {
    documents.shuffle(rng);

    let split_at =
        training_size(documents.len(), training_percent, rounding).min(documents.len());
    let test = documents.split_off(split_at);

    Split {
        training: documents,
        test,
    }
}

/// Applies [`split_category`] to every category of a corpus.
#[derive(Debug, Clone)]
pub struct CorpusSplitter {
    training_percent: usize,
    rounding: SplitRounding,
}

impl CorpusSplitter {
    /// Create a splitter with the given training share per hundred documents.
    pub fn new(training_percent: usize) -> Self {
        CorpusSplitter {
            training_percent,
            rounding: SplitRounding::HundredGroups,
        }
    }

    /// Use a different rounding rule.
    pub fn with_rounding(mut self, rounding: SplitRounding) -> Self {
        self.rounding = rounding;
        self
    }

    /// Split a labeled corpus category by category.
    ///
    /// Results are concatenated in `categories` order; documents whose label
    /// is not in `categories` are ignored.
    pub fn split<R: Rng + ?Sized>(
        &self,
        documents: Vec<Document>,
        categories: &[Category],
        rng: &mut R,
    ) -> Split {
        let mut buckets: Vec<Vec<Document>> = vec![Vec::new(); categories.len()];
        for document in documents {
            if let Some(idx) = document
                .label
                .and_then(|label| categories.iter().position(|c| *c == label))
            {
                buckets[idx].push(document);
            }
        }

        let mut result = Split::default();
        for (category, bucket) in categories.iter().zip(buckets) {
            let split = split_category(bucket, self.training_percent, self.rounding, rng);
            debug!(
                "Category '{}': {} training, {} test",
                category,
                split.training.len(),
                split.test.len()
            );
            result.training.extend(split.training);
            result.test.extend(split.test);
        }
        result
    }
}

impl Default for CorpusSplitter {
    fn default() -> Self {
        Self::new(80)
    }
}
