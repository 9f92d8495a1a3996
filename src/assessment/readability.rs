//! Keyword-independent assessments.

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::{Assess, SCORE_BAD, SCORE_GOOD, SCORE_NA, SCORE_OK};
use crate::pipeline::Research;
use crate::types::{AssessmentResult, Span};

/// Share of sentences containing a passive construction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PassiveVoice;

impl PassiveVoice {
    /// Shares up to this percentage are fine.
    const OK: f64 = 10.;
    /// Shares up to this percentage are borderline, anything above is flagged.
    const HIGH: f64 = 15.;
}

impl Assess for PassiveVoice {
    fn id(&self) -> &'static str {
        "passive_voice"
    }

    fn assess(&self, research: &Research, _keyword: Option<&str>) -> AssessmentResult {
        let total = research.sentences().len();
        if total == 0 {
            return AssessmentResult::new(self.id(), SCORE_NA, "There is no text to score.");
        }

        let passive = research
            .sentences()
            .iter()
            .zip_eq(research.participles())
            .filter(|(_, found)| !found.is_empty())
            .count();

        if passive == 0 {
            return AssessmentResult::new(self.id(), SCORE_GOOD, "No passive voice was detected.");
        }

        let marks: Vec<Span> = research
            .participles()
            .iter()
            .flatten()
            .map(|participle| participle.span().clone())
            .collect();
        let share = passive as f64 * 100. / total as f64;

        let (score, text) = if share <= Self::OK {
            (
                SCORE_GOOD,
                format!("{:.1}% of the sentences use passive voice, which is fine.", share),
            )
        } else if share <= Self::HIGH {
            (
                SCORE_OK,
                format!(
                    "{:.1}% of the sentences use passive voice. Try to use more active voice.",
                    share
                ),
            )
        } else {
            (
                SCORE_BAD,
                format!(
                    "{:.1}% of the sentences use passive voice, which is more than the recommended maximum of {}%.",
                    share,
                    Self::HIGH
                ),
            )
        };

        AssessmentResult::new(self.id(), score, text).with_marks(marks)
    }
}

/// Share of sentences longer than the recommended maximum.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SentenceLength {
    max_words: usize,
}

impl Default for SentenceLength {
    fn default() -> Self {
        SentenceLength { max_words: 20 }
    }
}

impl SentenceLength {
    /// Shares up to this percentage are fine.
    const OK: f64 = 25.;
    /// Shares up to this percentage are borderline, anything above is flagged.
    const HIGH: f64 = 30.;
}

impl Assess for SentenceLength {
    fn id(&self) -> &'static str {
        "sentence_length"
    }

    fn assess(&self, research: &Research, _keyword: Option<&str>) -> AssessmentResult {
        let total = research.sentences().len();
        if total == 0 {
            return AssessmentResult::new(self.id(), SCORE_NA, "There is no text to score.");
        }

        let marks: Vec<Span> = research
            .sentences()
            .iter()
            .filter(|sentence| sentence.words().count() > self.max_words)
            .map(|sentence| sentence.span().clone())
            .collect();
        let share = marks.len() as f64 * 100. / total as f64;

        let (score, text) = if share <= Self::OK {
            (
                SCORE_GOOD,
                format!(
                    "{:.1}% of the sentences are longer than {} words, which is fine.",
                    share, self.max_words
                ),
            )
        } else if share <= Self::HIGH {
            (
                SCORE_OK,
                format!(
                    "{:.1}% of the sentences are longer than {} words. Try to shorten them.",
                    share, self.max_words
                ),
            )
        } else {
            (
                SCORE_BAD,
                format!(
                    "{:.1}% of the sentences are longer than {} words, which is more than the recommended maximum of {}%.",
                    share,
                    self.max_words,
                    Self::HIGH
                ),
            )
        };

        AssessmentResult::new(self.id(), score, text).with_marks(marks)
    }
}
