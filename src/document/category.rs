//! Topic categories and the class id mapping.
//!
//! [`Category`] is the fixed set of labels. [`CategoryMap`] assigns each
//! category a class id by position; the map is stored inside a trained model
//! so that score vectors are always read back against the order the model
//! was trained with, never against a separate hard-coded list.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ClassifierError, Result};

/// A news topic category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Business,
    Entertainment,
    Politics,
    Sport,
    Tech,
}

impl Category {
    /// All categories in their canonical order.
    pub const ALL: [Category; 5] = [
        Category::Business,
        Category::Entertainment,
        Category::Politics,
        Category::Sport,
        Category::Tech,
    ];

    /// Lowercase name, also used as the corpus directory name and dataset label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Business => "business",
            Category::Entertainment => "entertainment",
            Category::Politics => "politics",
            Category::Sport => "sport",
            Category::Tech => "tech",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ClassifierError;

    fn from_str(s: &str) -> Result<Self> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ClassifierError::other(format!("Unknown category: '{s}'")))
    }
}

/// Ordered mapping from class id to category.
///
/// Class ids are dense, starting at 0, in the order the categories were
/// registered. Duplicates are rejected at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryMap {
    categories: Vec<Category>,
}

impl CategoryMap {
    /// Build a map from an ordered category list.
    pub fn new(categories: Vec<Category>) -> Result<Self> {
        if categories.is_empty() {
            return Err(ClassifierError::invalid_config(
                "at least one category is required",
            ));
        }
        for (i, category) in categories.iter().enumerate() {
            if categories[..i].contains(category) {
                return Err(ClassifierError::invalid_config(format!(
                    "category '{category}' is listed more than once"
                )));
            }
        }
        Ok(CategoryMap { categories })
    }

    /// Number of classes.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Always false; a map holds at least one category.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Class id of a category, if registered.
    pub fn class_id(&self, category: Category) -> Option<usize> {
        self.categories.iter().position(|c| *c == category)
    }

    /// Category for a class id.
    pub fn category(&self, class_id: usize) -> Option<Category> {
        self.categories.get(class_id).copied()
    }

    /// Iterate `(class_id, category)` pairs in class order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Category)> + '_ {
        self.categories.iter().copied().enumerate()
    }

    /// The categories in class order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }
}

impl Default for CategoryMap {
    fn default() -> Self {
        CategoryMap {
            categories: Category::ALL.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip_names() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
        assert!("Sport".parse::<Category>().is_err());
        assert!("weather".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_serde_lowercase() {
        let json = serde_json::to_string(&Category::Entertainment).unwrap();
        assert_eq!(json, "\"entertainment\"");
    }

    #[test]
    fn test_category_map_order() {
        let map = CategoryMap::default();
        assert_eq!(map.len(), 5);
        assert_eq!(map.class_id(Category::Business), Some(0));
        assert_eq!(map.class_id(Category::Tech), Some(4));
        assert_eq!(map.category(3), Some(Category::Sport));
        assert_eq!(map.category(5), None);

        let names: Vec<_> = map.iter().map(|(_, c)| c.as_str()).collect();
        assert_eq!(
            names,
            vec!["business", "entertainment", "politics", "sport", "tech"]
        );
    }

    #[test]
    fn test_category_map_validation() {
        assert!(CategoryMap::new(Vec::new()).is_err());
        assert!(CategoryMap::new(vec![Category::Sport, Category::Sport]).is_err());

        let map = CategoryMap::new(vec![Category::Tech, Category::Sport]).unwrap();
        assert_eq!(map.class_id(Category::Tech), Some(0));
        assert_eq!(map.class_id(Category::Business), None);
    }
}
