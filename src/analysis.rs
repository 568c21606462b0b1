//! Text analysis for feature extraction.
//!
//! This module turns raw news text into the token streams the featurizer
//! counts: char filters normalize the raw string, a tokenizer splits it, and
//! token filters transform the resulting stream.
//!
//! ```text
//! Raw Text → Char Filters → Tokenizer → Token Filters → Tokens
//! ```

pub mod analyzer;
pub mod char_filter;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
