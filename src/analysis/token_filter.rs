//! Token filter implementations for token transformation.
//!
//! Filters transform token streams produced by tokenizers. They can modify,
//! remove, or add tokens.
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseFilter`] - Converts tokens to lowercase
//! - [`stop::StopFilter`] - Removes stop words
//! - [`shingle::ShingleFilter`] - Joins adjacent tokens into word n-grams
//!
//! # Examples
//!
//! ```
//! use news_classifier::analysis::token_filter::Filter;
//! use news_classifier::analysis::token_filter::lowercase::LowercaseFilter;
//! use news_classifier::analysis::token::Token;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Hello", 0), Token::new("WORLD", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "hello");
//! assert_eq!(filtered[1].text, "world");
//! ```
//!
//! # Filter Chaining
//!
//! ```text
//! Tokenizer → Lowercase → Stop Words → Shingles → Features
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
///
/// Filters receive a stream of tokens and produce a new stream.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod lowercase;
pub mod shingle;
pub mod stop;

pub use lowercase::LowercaseFilter;
pub use shingle::ShingleFilter;
pub use stop::StopFilter;
