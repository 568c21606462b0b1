//! Console rendering of metrics and predictions.

use std::io::{self, Write};

use crate::document::category::CategoryMap;
use crate::ml::metrics::Metrics;
use crate::ml::prediction::Prediction;

pub const REPORT_TITLE: &str = "PredictionModel quality metrics evaluation";

/// Render a fraction as a percentage with two decimals, e.g. `0.9712` → `97.12%`.
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

/// Write the evaluation report, preceded by a blank line.
pub fn write_evaluation_report<W: Write + ?Sized>(out: &mut W, metrics: &Metrics) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{REPORT_TITLE}")?;
    writeln!(out, "{}", "-".repeat(REPORT_TITLE.len()))?;
    writeln!(out, "AccuracyMacro: {}", format_percent(metrics.accuracy_macro))?;
    writeln!(out, "AccuracyMicro: {}", format_percent(metrics.accuracy_micro))?;
    writeln!(out, "LogLoss: {}", format_percent(metrics.log_loss))?;
    Ok(())
}

/// Write `Prediction result:` and one `<category>: <score>` line per class.
pub fn write_prediction_table<W: Write + ?Sized>(
    out: &mut W,
    prediction: &Prediction,
    categories: &CategoryMap,
) -> io::Result<()> {
    writeln!(out, "Prediction result:")?;
    for (category, score) in prediction.category_scores(categories) {
        writeln!(out, "{category}: {}", format_percent(score))?;
    }
    Ok(())
}
