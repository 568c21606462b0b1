//! Tab-separated dataset files.
//!
//! A dataset file holds one document per line as `text<TAB>label`, with no
//! header row. Text is written verbatim: the corpus loader has already
//! replaced line breaks, and tabs inside text are not escaped.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

use log::{debug, info};

use crate::config::PathConfig;
use crate::document::category::Category;
use crate::document::document::Document;
use crate::error::{ClassifierError, Result};

/// An ordered collection of labeled documents.
pub type Dataset = Vec<Document>;

/// Write documents to `path`, replacing any existing file.
pub fn write_dataset<P: AsRef<Path>>(path: P, documents: &[Document]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .map_err(|e| ClassifierError::dataset(path, format!("cannot create: {e}")))?;
    let mut writer = BufWriter::new(file);

    for (idx, document) in documents.iter().enumerate() {
        let label = document.label.ok_or_else(|| {
            ClassifierError::dataset_line(path, idx + 1, "document has no label")
        })?;
        writeln!(writer, "{}\t{}", document.text, label)
            .map_err(|e| ClassifierError::dataset_line(path, idx + 1, e.to_string()))?;
    }
    writer
        .flush()
        .map_err(|e| ClassifierError::dataset(path, e.to_string()))?;

    info!("Wrote {} rows to {}", documents.len(), path.display());
    Ok(())
}

/// Read a dataset file written by [`write_dataset`].
///
/// Blank lines are skipped. The label is the text after the last tab.
pub fn read_dataset<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    let path = path.as_ref();
    let file =
        File::open(path).map_err(|e| ClassifierError::dataset(path, format!("cannot open: {e}")))?;
    let reader = BufReader::new(file);

    let mut dataset = Vec::new();
    for (line_num, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| ClassifierError::dataset_line(path, line_num + 1, e.to_string()))?;
        let line = line.strip_suffix('\r').unwrap_or(&line);
        if line.is_empty() {
            continue;
        }

        let (text, label) = line.rsplit_once('\t').ok_or_else(|| {
            ClassifierError::dataset_line(path, line_num + 1, "expected 'text<TAB>label'")
        })?;
        let label: Category = label.parse().map_err(|_| {
            ClassifierError::dataset_line(path, line_num + 1, format!("unknown label '{label}'"))
        })?;
        dataset.push(Document::labeled(text, label));
    }

    debug!("Read {} rows from {}", dataset.len(), path.display());
    Ok(dataset)
}

/// Delete a dataset file if it exists.
pub fn remove_dataset<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    match fs::remove_file(path) {
        Ok(()) => {
            debug!("Removed stale dataset {}", path.display());
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(ClassifierError::dataset(path, format!("cannot remove: {e}"))),
    }
}

/// Delete both generated dataset files before a fresh preparation.
pub fn remove_dataset_files(paths: &PathConfig) -> Result<()> {
    remove_dataset(&paths.training_set)?;
    remove_dataset(&paths.test_set)
}
