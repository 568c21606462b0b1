//! Analyzers used to featurize news text.
//!
//! Both analyzers share the same normalization: diacritics are stripped and
//! punctuation is replaced by spaces unless the configuration keeps them,
//! and everything is lowercased.
//!
//! - [`NewsAnalyzer`] emits word n-grams of length `1..=word_ngram_length`
//!   after stop word removal.
//! - [`CharNgramAnalyzer`] emits character n-grams of exactly
//!   `char_ngram_length` over the normalized text with whitespace runs
//!   collapsed to one space.

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
use crate::analysis::char_filter::unicode_normalize::UnicodeNormalizationCharFilter;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::shingle::ShingleFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::ngram::NgramTokenizer;
use crate::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
use crate::config::FeaturizerConfig;
use crate::error::Result;

fn normalizing_pipeline(config: &FeaturizerConfig) -> Result<PipelineAnalyzer> {
    let mut pipeline = PipelineAnalyzer::new(Arc::new(UnicodeWordTokenizer::new()));
    if !config.keep_diacritics {
        pipeline =
            pipeline.add_char_filter(Arc::new(UnicodeNormalizationCharFilter::strip_diacritics()));
    }
    if !config.keep_punctuation {
        pipeline = pipeline.add_char_filter(Arc::new(PatternReplaceCharFilter::punctuation()?));
    }
    Ok(pipeline.add_filter(Arc::new(LowercaseFilter::new())))
}

/// Word n-gram analyzer.
///
/// # Examples
///
/// ```
/// use news_classifier::analysis::analyzer::{Analyzer, NewsAnalyzer};
/// use news_classifier::config::FeaturizerConfig;
///
/// let config = FeaturizerConfig { word_ngram_length: 2, ..Default::default() };
/// let analyzer = NewsAnalyzer::new(&config).unwrap();
/// let tokens: Vec<String> = analyzer.analyze("The Rate-Cut!").unwrap().map(|t| t.text).collect();
/// assert_eq!(tokens, vec!["rate", "rate cut", "cut"]);
/// ```
pub struct NewsAnalyzer {
    inner: PipelineAnalyzer,
}

impl NewsAnalyzer {
    pub fn new(config: &FeaturizerConfig) -> Result<Self> {
        let mut pipeline = normalizing_pipeline(config)?;
        if config.remove_stop_words {
            pipeline = pipeline.add_filter(Arc::new(StopFilter::new()));
        }
        let inner = pipeline
            .add_filter(Arc::new(ShingleFilter::new(config.word_ngram_length)?))
            .with_name("news_words");

        Ok(Self { inner })
    }
}

impl Analyzer for NewsAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "news_words"
    }
}

impl Debug for NewsAnalyzer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}

/// Character n-gram analyzer.
pub struct CharNgramAnalyzer {
    normalizer: PipelineAnalyzer,
    tokenizer: NgramTokenizer,
}

impl CharNgramAnalyzer {
    pub fn new(config: &FeaturizerConfig) -> Result<Self> {
        Ok(Self {
            normalizer: normalizing_pipeline(config)?,
            tokenizer: NgramTokenizer::fixed(config.char_ngram_length)?,
        })
    }

    /// The text the n-grams are cut from.
    pub fn normalized_text(&self, text: &str) -> String {
        self.normalizer
            .normalize(text)
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Analyzer for CharNgramAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.tokenizer.tokenize(&self.normalized_text(text))
    }

    fn name(&self) -> &'static str {
        "news_chars"
    }
}

impl Debug for CharNgramAnalyzer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CharNgramAnalyzer")
            .field("normalizer", &self.normalizer)
            .field("tokenizer", &self.tokenizer)
            .finish()
    }
}
