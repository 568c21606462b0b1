//! Output formatting for CLI commands.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::document::category::{Category, CategoryMap};
use crate::error::Result;
use crate::ml::prediction::Prediction;
use crate::report::write_prediction_table;

/// Result structure for dataset preparation.
#[derive(Debug, Serialize, Deserialize)]
pub struct PreparationResult {
    pub training_set: String,
    pub training_documents: usize,
    pub test_set: String,
    pub test_documents: usize,
}

/// Result structure for training.
#[derive(Debug, Serialize, Deserialize)]
pub struct TrainingResult {
    pub model_path: String,
    pub model_id: String,
    pub training_examples: usize,
    pub vocabulary_size: usize,
    pub final_loss: Option<f64>,
}

/// One category's score.
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: Category,
    pub score: f64,
}

/// Result structure for a single prediction.
#[derive(Debug, Serialize, Deserialize)]
pub struct PredictionResult {
    pub text: String,
    pub predicted: Option<Category>,
    pub scores: Vec<CategoryScore>,
}

impl PredictionResult {
    pub fn new(text: &str, prediction: &Prediction, categories: &CategoryMap) -> Self {
        Self {
            text: text.to_string(),
            predicted: prediction.top().and_then(|id| categories.category(id)),
            scores: prediction
                .category_scores(categories)
                .into_iter()
                .map(|(category, score)| CategoryScore { category, score })
                .collect(),
        }
    }
}

/// Print a command result in the requested format.
pub fn output_result<W: Write, T: Serialize>(
    out: &mut W,
    message: &str,
    result: &T,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Human => {
            writeln!(out, "{message}")?;
            let value = serde_json::to_value(result)?;
            match value {
                serde_json::Value::Object(obj) => {
                    for (key, val) in &obj {
                        writeln!(out, "{key}: {}", format_value(val))?;
                    }
                }
                other => writeln!(out, "{}", format_value(&other))?,
            }
        }
        OutputFormat::Json => output_json(out, result)?,
    }
    Ok(())
}

/// Print a prediction: the console score table, or JSON.
pub fn output_prediction<W: Write>(
    out: &mut W,
    text: &str,
    prediction: &Prediction,
    categories: &CategoryMap,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Human => write_prediction_table(out, prediction, categories)?,
        OutputFormat::Json => {
            output_json(out, &PredictionResult::new(text, prediction, categories))?
        }
    }
    Ok(())
}

fn output_json<W: Write, T: Serialize>(out: &mut W, result: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    writeln!(out, "{json}")?;
    Ok(())
}

/// Format a JSON value for human output.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(_) => "[object]".to_string(),
        serde_json::Value::Null => "null".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prediction_json() {
        let categories = CategoryMap::new(vec![Category::Politics, Category::Tech]).unwrap();
        let prediction = Prediction {
            scores: vec![0.2, 0.8],
        };
        let mut out = Vec::new();
        output_prediction(&mut out, "new phone", &prediction, &categories, OutputFormat::Json)
            .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["predicted"], "tech");
        assert_eq!(value["scores"][0]["category"], "politics");
        assert_eq!(value["scores"][1]["score"], 0.8);
    }

    #[test]
    fn test_human_result() {
        let result = PreparationResult {
            training_set: "news-train.txt".to_string(),
            training_documents: 48,
            test_set: "news-test.txt".to_string(),
            test_documents: 12,
        };
        let mut out = Vec::new();
        output_result(&mut out, "Datasets written", &result, OutputFormat::Human).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Datasets written\n"));
        assert!(text.contains("training_documents: 48\n"));
        assert!(text.contains("test_set: news-test.txt\n"));
    }
}
