//! Command implementations for the news classifier CLI.

use std::io::{self, BufRead, Write};

use log::info;

use crate::app::App;
use crate::cli::args::{ClassifierArgs, Command, OutputFormat, PredictArgs};
use crate::cli::output::{PreparationResult, TrainingResult, output_prediction, output_result};
use crate::document::document::Document;
use crate::error::Result;
use crate::ml::toolkit::{LinearToolkit, Toolkit};

/// Execute a CLI command against the process console.
pub fn execute_command(args: ClassifierArgs) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    dispatch(args, stdin.lock(), stdout.lock())
}

/// Execute a CLI command reading console input from `input` and writing
/// results to `output`.
pub fn dispatch<R: BufRead, W: Write>(args: ClassifierArgs, input: R, mut output: W) -> Result<()> {
    let config = args.load_config()?;
    let toolkit = LinearToolkit::from_config(&config);
    let app = App::new(config, toolkit)?;
    let format = args.output_format;

    match args.command() {
        Command::Run => app.run(input, output),
        Command::Prepare => prepare(&app, &mut output, format),
        Command::Train => train(&app, &mut output, format),
        Command::Evaluate => evaluate(&app, &mut output, format),
        Command::Predict(predict_args) => predict(&app, &predict_args, &mut output, format),
    }
}

fn prepare<W: Write>(app: &App<LinearToolkit>, out: &mut W, format: OutputFormat) -> Result<()> {
    let split = app.prepare_data(&mut app.split_rng())?;
    let paths = &app.config().paths;
    let result = PreparationResult {
        training_set: paths.training_set.display().to_string(),
        training_documents: split.training.len(),
        test_set: paths.test_set.display().to_string(),
        test_documents: split.test.len(),
    };
    output_result(out, "Datasets written", &result, format)
}

fn train<W: Write>(app: &App<LinearToolkit>, out: &mut W, format: OutputFormat) -> Result<()> {
    let model = app.train(&mut app.split_rng())?;
    let metadata = model.metadata();
    let result = TrainingResult {
        model_path: app.config().paths.model.display().to_string(),
        model_id: metadata.model_id.clone(),
        training_examples: metadata.training_examples,
        vocabulary_size: metadata.vocabulary_size,
        final_loss: metadata.training_losses.last().copied(),
    };
    output_result(out, "Model trained", &result, format)
}

/// Human output is the console report; JSON output is the metrics record.
fn evaluate<W: Write>(app: &App<LinearToolkit>, out: &mut W, format: OutputFormat) -> Result<()> {
    let model = app.load_or_train(&mut app.split_rng())?;
    match format {
        OutputFormat::Human => {
            app.evaluate(&model, out)?;
        }
        OutputFormat::Json => {
            let metrics = app.evaluate(&model, &mut io::sink())?;
            output_result(out, "Evaluation", &metrics, format)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn predict<W: Write>(
    app: &App<LinearToolkit>,
    args: &PredictArgs,
    out: &mut W,
    format: OutputFormat,
) -> Result<()> {
    let model = app.load_or_train(&mut app.split_rng())?;
    let toolkit = app.toolkit();
    let prediction = toolkit.predict(&model, &Document::unlabeled(args.text.as_str()))?;
    info!("Predicted class {:?} for '{}'", prediction.top(), args.text);

    output_prediction(
        out,
        &args.text,
        &prediction,
        toolkit.classes(&model),
        format,
    )
}
