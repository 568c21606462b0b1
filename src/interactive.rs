//! The console prediction loop.

use std::io::{BufRead, Write};

use log::debug;

use crate::document::document::Document;
use crate::error::Result;
use crate::ml::toolkit::Toolkit;
use crate::report::write_prediction_table;

pub const PROMPT: &str = "Input text: ";

/// Reads one text per line and prints its score table until the exit
/// sentinel or end of input.
pub struct PredictionLoop<'a, T: Toolkit> {
    toolkit: &'a T,
    model: &'a T::Model,
    exit_sentinel: &'a str,
}

impl<'a, T: Toolkit> PredictionLoop<'a, T> {
    pub fn new(toolkit: &'a T, model: &'a T::Model, exit_sentinel: &'a str) -> Self {
        Self {
            toolkit,
            model,
            exit_sentinel,
        }
    }

    /// Run until the user types the exit sentinel or input ends.
    ///
    /// Read failures end the loop like EOF does. Write and prediction
    /// failures are returned.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> Result<()> {
        let mut line = String::new();
        loop {
            writeln!(output)?;
            writeln!(output, "{PROMPT}")?;
            output.flush()?;

            line.clear();
            match input.read_line(&mut line) {
                Ok(0) => {
                    debug!("End of input");
                    return Ok(());
                }
                Ok(_) => {}
                Err(e) => {
                    debug!("Stopping on read error: {e}");
                    return Ok(());
                }
            }

            let text = line.strip_suffix('\n').unwrap_or(&line);
            let text = text.strip_suffix('\r').unwrap_or(text);
            if text == self.exit_sentinel {
                return Ok(());
            }

            let document = Document::unlabeled(text);
            let prediction = self.toolkit.predict(self.model, &document)?;
            write_prediction_table(&mut output, &prediction, self.toolkit.classes(self.model))?;
        }
    }
}
