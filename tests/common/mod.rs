//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use news_classifier::config::ClassifierConfig;
use news_classifier::document::category::Category;

fn vocabulary(category: Category) -> [&'static str; 6] {
    match category {
        Category::Business => ["shares", "profits", "bank", "market", "economy", "firm"],
        Category::Entertainment => ["film", "actor", "award", "music", "album", "festival"],
        Category::Politics => ["minister", "election", "labour", "party", "vote", "parliament"],
        Category::Sport => ["match", "goal", "coach", "league", "striker", "cup"],
        Category::Tech => ["software", "broadband", "mobile", "chip", "internet", "gadget"],
    }
}

/// Write `files` synthetic articles for each category under `base/<category>/`.
pub fn write_corpus(base: &Path, categories: &[Category], files: usize) {
    for category in categories {
        let dir = base.join(category.as_str());
        fs::create_dir_all(&dir).unwrap();
        let words = vocabulary(*category);
        for i in 0..files {
            let a = words[i % words.len()];
            let b = words[(i + 2) % words.len()];
            let c = words[(i + 4) % words.len()];
            let content = format!(
                "{a} {b} story {i}\n\nThe {c} report says {a} and {b} matter.\nMore body text.\n"
            );
            fs::write(dir.join(format!("{i:03}.txt")), content).unwrap();
        }
    }
}

/// A configuration rooted in `dir` with a fixed split seed.
pub fn config_in(dir: &Path, categories: &[Category]) -> ClassifierConfig {
    let mut config = ClassifierConfig::default();
    config.categories = categories.to_vec();
    config.paths.data_dir = dir.join("bbc");
    config.paths.training_set = dir.join("news-train.txt");
    config.paths.test_set = dir.join("news-test.txt");
    config.paths.model = dir.join("model.txt");
    config.split.seed = Some(11);
    config
}
