//! Shingle filter implementation.
//!
//! Produces word n-grams by joining runs of adjacent tokens with a single
//! space. Unigrams are kept, so with `max_size = 3` the stream
//! `a b c` becomes `a, a b, a b c, b, b c, c`.

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::{ClassifierError, Result};

/// A filter that emits all word n-grams of length `1..=max_size`.
///
/// Shingles are built over the tokens that reach this filter, so words a
/// stop filter removed earlier never appear inside a shingle.
///
/// # Examples
///
/// ```
/// use news_classifier::analysis::token_filter::Filter;
/// use news_classifier::analysis::token_filter::shingle::ShingleFilter;
/// use news_classifier::analysis::token::Token;
///
/// let filter = ShingleFilter::new(2).unwrap();
/// let tokens = vec![Token::new("rate", 0), Token::new("cut", 1)];
/// let result: Vec<String> = filter.filter(Box::new(tokens.into_iter()))
///     .unwrap()
///     .map(|t| t.text)
///     .collect();
/// assert_eq!(result, vec!["rate", "rate cut", "cut"]);
/// ```
#[derive(Clone, Debug)]
pub struct ShingleFilter {
    max_size: usize,
}

impl ShingleFilter {
    pub fn new(max_size: usize) -> Result<Self> {
        if max_size == 0 {
            return Err(ClassifierError::analysis(
                "shingle size must be at least 1",
            ));
        }
        Ok(Self { max_size })
    }
}

impl Filter for ShingleFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let words: Vec<Token> = tokens.collect();
        let mut shingles = Vec::with_capacity(words.len() * self.max_size);
        let mut position = 0;

        for start in 0..words.len() {
            let mut text = String::new();
            for (offset, word) in words[start..].iter().take(self.max_size).enumerate() {
                if offset > 0 {
                    text.push(' ');
                }
                text.push_str(&word.text);
                shingles.push(Token::with_offsets(
                    text.clone(),
                    position,
                    words[start].start_offset,
                    word.end_offset,
                ));
                position += 1;
            }
        }

        Ok(Box::new(shingles.into_iter()))
    }

    fn name(&self) -> &'static str {
        "shingle"
    }
}
