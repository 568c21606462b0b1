//! Model persistence and prediction shape.

mod common;

use news_classifier::corpus::CorpusLoader;
use news_classifier::document::category::{Category, CategoryMap};
use news_classifier::document::document::Document;
use news_classifier::error::Result;
use news_classifier::ml::toolkit::{LinearToolkit, Toolkit};

#[test]
fn test_predictions_survive_save_and_load() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let base = dir.path().join("bbc");
    common::write_corpus(&base, &Category::ALL, 12);
    let documents = CorpusLoader::new(&base).load(&Category::ALL)?;
    assert_eq!(documents.len(), 60);

    let toolkit = LinearToolkit::default();
    let categories = CategoryMap::default();
    let model = toolkit.fit(&documents, &categories)?;

    let path = dir.path().join("model.txt");
    toolkit.save(&model, &path)?;
    let loaded = toolkit.load(&path)?;
    assert_eq!(toolkit.classes(&loaded), &categories);

    for text in [
        "Bank shares rise as market rallies",
        "Striker scores in cup final",
        "",
        "completely unseen vocabulary zyx",
    ] {
        let document = Document::unlabeled(text);
        let before = toolkit.predict(&model, &document)?;
        let after = toolkit.predict(&loaded, &document)?;

        assert_eq!(before.scores.len(), 5);
        assert!(before.scores.iter().all(|s| (0.0..=1.0).contains(s)));
        assert!((before.scores.iter().sum::<f64>() - 1.0).abs() < 1e-3);
        for (a, b) in before.scores.iter().zip(&after.scores) {
            assert!((a - b).abs() < 1e-6);
        }
    }

    Ok(())
}

#[test]
fn test_model_file_is_pretty_json() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let base = dir.path().join("bbc");
    common::write_corpus(&base, &[Category::Sport, Category::Tech], 5);
    let categories = CategoryMap::new(vec![Category::Sport, Category::Tech])?;
    let documents = CorpusLoader::new(&base).load(categories.categories())?;

    let toolkit = LinearToolkit::default();
    let model = toolkit.fit(&documents, &categories)?;
    let path = dir.path().join("model.txt");
    toolkit.save(&model, &path)?;

    let content = std::fs::read_to_string(&path)?;
    assert!(content.starts_with("{\n"));
    let value: serde_json::Value = serde_json::from_str(&content)?;
    assert_eq!(value["categories"], serde_json::json!(["sport", "tech"]));
    assert_eq!(value["metadata"]["training_examples"], 10);

    Ok(())
}
