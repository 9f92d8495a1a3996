//! Assessments: the scoring dimensions applied to analysis output.

mod readability;
mod seo;

pub use readability::{PassiveVoice, SentenceLength};
pub use seo::{KeywordDensity, KeywordIntroduction, TextLength};

use enum_dispatch::enum_dispatch;
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use crate::pipeline::Research;
use crate::types::{AssessmentResult, Span};
use crate::utils;

/// Score given when an assessment finds no problems.
pub const SCORE_GOOD: u8 = 9;
/// Score for borderline results.
pub const SCORE_OK: u8 = 6;
/// Score signalling a problem.
pub const SCORE_BAD: u8 = 3;
/// Score for assessments which do not apply to the input.
pub const SCORE_NA: u8 = 0;

/// One scoring dimension. Pure over its inputs: the same research and keyword
/// always produce the same result.
#[enum_dispatch(Assessment)]
pub trait Assess {
    /// Stable identifier of this assessment, unique within an analyzer.
    fn id(&self) -> &'static str;

    /// Scores the research. Degenerate input yields a "not applicable"
    /// result with score [SCORE_NA], never an error.
    fn assess(&self, research: &Research, keyword: Option<&str>) -> AssessmentResult;
}

/// The closed set of assessments.
#[enum_dispatch]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Assessment {
    KeywordDensity,
    TextLength,
    KeywordIntroduction,
    PassiveVoice,
    SentenceLength,
}

/// All occurrences of the keyword in the text, as spans over runs of adjacent word tokens.
/// Both sides are normalized, so matching is case- and composition-insensitive.
pub(crate) fn keyword_occurrences(research: &Research, keyword: &str) -> Vec<Span> {
    let needle: Vec<String> = keyword.unicode_words().map(utils::normalize).collect();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut spans = Vec::new();
    for sentence in research.sentences() {
        let words: Vec<_> = sentence
            .words()
            .map(|token| (utils::normalize(token.as_str()), token))
            .collect();

        for window in words.windows(needle.len()) {
            if window.iter().zip(&needle).all(|((word, _), expected)| word == expected) {
                let first = window[0].1.span();
                let last = window[window.len() - 1].1.span();
                spans.push(Span::new(
                    first.byte().start..last.byte().end,
                    first.char().start..last.char().end,
                ));
            }
        }
    }

    spans
}
