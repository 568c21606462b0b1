use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use super::CharFilter;

/// A char filter that strips diacritics through Unicode normalization.
///
/// Text is decomposed to NFD and combining marks are dropped, so "café"
/// becomes "cafe". Characters without a decomposition pass through.
#[derive(Debug, Clone, Default)]
pub struct UnicodeNormalizationCharFilter;

impl UnicodeNormalizationCharFilter {
    /// NFD decomposition followed by removal of combining marks.
    pub fn strip_diacritics() -> Self {
        UnicodeNormalizationCharFilter
    }
}

impl CharFilter for UnicodeNormalizationCharFilter {
    fn filter(&self, input: &str) -> String {
        input.nfd().filter(|c| !is_combining_mark(*c)).collect()
    }

    fn name(&self) -> &'static str {
        "unicode_normalization"
    }
}
