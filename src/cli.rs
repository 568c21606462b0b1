//! Command line interface for the news classifier.

pub mod args;
pub mod commands;
pub mod output;
