//! N-gram tokenizer implementation.

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::{ClassifierError, Result};

/// A tokenizer that generates character n-grams of a fixed length.
///
/// The featurizer runs it over normalized, space-joined words so that
/// spelling fragments shared between related words ("elect" in "election"
/// and "electoral") contribute common features.
///
/// # Examples
///
/// ```
/// use news_classifier::analysis::tokenizer::ngram::NgramTokenizer;
/// use news_classifier::analysis::tokenizer::Tokenizer;
///
/// let tokenizer = NgramTokenizer::fixed(3).unwrap();
/// let tokens: Vec<_> = tokenizer.tokenize("hello").unwrap()
///     .map(|t| t.text.to_string())
///     .collect();
/// assert_eq!(tokens, vec!["hel", "ell", "llo"]);
/// ```
#[derive(Clone, Debug)]
pub struct NgramTokenizer {
    /// Characters per n-gram
    gram_size: usize,
}

impl NgramTokenizer {
    /// Create a tokenizer emitting only n-grams of exactly `n` characters.
    ///
    /// # Errors
    ///
    /// Returns an error if `n` is 0.
    pub fn fixed(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(ClassifierError::analysis("n-gram size must be at least 1"));
        }
        Ok(Self { gram_size: n })
    }
}

impl Tokenizer for NgramTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let count = (chars.len() + 1).saturating_sub(self.gram_size);

        let tokens: Vec<Token> = (0..count)
            .map(|start| {
                let start_offset = chars[start].0;
                let end_offset = chars
                    .get(start + self.gram_size)
                    .map_or(text.len(), |(offset, _)| *offset);
                Token::with_offsets(
                    &text[start_offset..end_offset],
                    start,
                    start_offset,
                    end_offset,
                )
            })
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "ngram"
    }
}
