//! Command line argument parsing using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{ClassifierConfig, EvaluationTarget};
use crate::error::Result;

/// Classify BBC news excerpts into business, entertainment, politics, sport and tech
#[derive(Parser, Debug, Clone)]
#[command(name = "news-classifier")]
#[command(about = "Train and query a news topic classifier")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct ClassifierArgs {
    /// Verbosity level (-vv for progress, -vvv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// JSON configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Corpus directory with one sub-directory per category
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Model file to load or create
    #[arg(long, value_name = "FILE")]
    pub model: Option<PathBuf>,

    /// Dataset used for the evaluation report
    #[arg(long, value_enum)]
    pub evaluate_on: Option<EvaluationTarget>,

    /// Seed for the train/test shuffle
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format for `prepare`, `train`, `evaluate` and `predict`
    #[arg(short = 'f', long = "format", value_enum, global = true, default_value = "human")]
    pub output_format: OutputFormat,

    /// Subcommand to execute (defaults to `run`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl ClassifierArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }

    /// Build the configuration: file (or defaults) first, then flag overrides.
    pub fn load_config(&self) -> Result<ClassifierConfig> {
        let mut config = match &self.config {
            Some(path) => ClassifierConfig::from_file(path)?,
            None => ClassifierConfig::default(),
        };

        if let Some(data_dir) = &self.data_dir {
            config.paths.data_dir = data_dir.clone();
        }
        if let Some(model) = &self.model {
            config.paths.model = model.clone();
        }
        if let Some(target) = self.evaluate_on {
            config.evaluation_target = target;
        }
        if let Some(seed) = self.seed {
            config.split.seed = Some(seed);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Run)
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Load or train a model, print the evaluation report, then classify console input
    Run,

    /// Write the training and test datasets from the corpus
    Prepare,

    /// Prepare datasets and train a new model, replacing any saved one
    Train,

    /// Load or train a model and print the evaluation report
    Evaluate,

    /// Classify a single text
    Predict(PredictArgs),
}

/// Arguments for a single prediction
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
pub struct PredictArgs {
    /// Text to classify
    #[arg(value_name = "TEXT")]
    pub text: String,
}

/// Output format for command results
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
