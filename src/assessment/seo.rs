//! Keyword-scoped assessments.

use serde::{Deserialize, Serialize};

use super::{keyword_occurrences, Assess, SCORE_BAD, SCORE_GOOD, SCORE_NA, SCORE_OK};
use crate::pipeline::Research;
use crate::types::AssessmentResult;
use crate::utils;

/// How often the keyword occurs per hundred words.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeywordDensity;

impl KeywordDensity {
    /// Densities below this signal underuse.
    const LOW: f64 = 0.5;
    /// Densities above this signal keyword stuffing.
    const HIGH: f64 = 2.5;
}

impl Assess for KeywordDensity {
    fn id(&self) -> &'static str {
        "keyword_density"
    }

    fn assess(&self, research: &Research, keyword: Option<&str>) -> AssessmentResult {
        let keyword = match keyword {
            Some(keyword) if !keyword.trim().is_empty() => keyword,
            _ => return AssessmentResult::new(self.id(), SCORE_NA, "No focus keyword was set."),
        };
        if research.word_count() == 0 {
            return AssessmentResult::new(self.id(), SCORE_NA, "There is no text to score.");
        }

        let occurrences = keyword_occurrences(research, keyword);
        let density = occurrences.len() as f64 * 100. / research.word_count() as f64;

        let (score, text) = if occurrences.is_empty() {
            (
                SCORE_BAD,
                format!("The keyword {:?} does not appear in the text.", keyword),
            )
        } else if density < Self::LOW {
            (
                SCORE_OK,
                format!(
                    "The keyword density is {:.1}%, which is a bit low. Use the keyword more often.",
                    density
                ),
            )
        } else if density <= Self::HIGH {
            (
                SCORE_GOOD,
                format!("The keyword density is {:.1}%, which is great.", density),
            )
        } else {
            (
                SCORE_BAD,
                format!(
                    "The keyword density is {:.1}%, which is way over the top. Reduce the keyword use.",
                    density
                ),
            )
        };

        AssessmentResult::new(self.id(), score, text).with_marks(occurrences)
    }
}

/// Whether the text is long enough to rank.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextLength;

impl TextLength {
    const GOOD: usize = 300;
    const OK: usize = 200;
}

impl Assess for TextLength {
    fn id(&self) -> &'static str {
        "text_length"
    }

    fn assess(&self, research: &Research, _keyword: Option<&str>) -> AssessmentResult {
        let words = research.word_count();

        let (score, text) = if words == 0 {
            (SCORE_NA, "There is no text to score.".to_string())
        } else if words >= Self::GOOD {
            (
                SCORE_GOOD,
                format!("The text contains {} words, which is enough.", words),
            )
        } else if words >= Self::OK {
            (
                SCORE_OK,
                format!(
                    "The text contains {} words, which is slightly below the recommended minimum of {}.",
                    words,
                    Self::GOOD
                ),
            )
        } else {
            (
                SCORE_BAD,
                format!(
                    "The text contains {} words, which is well below the recommended minimum of {}.",
                    words,
                    Self::GOOD
                ),
            )
        };

        AssessmentResult::new(self.id(), score, text)
    }
}

/// Whether the keyword shows up in the first paragraph, making the topic clear early on.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeywordIntroduction;

impl Assess for KeywordIntroduction {
    fn id(&self) -> &'static str {
        "keyword_introduction"
    }

    fn assess(&self, research: &Research, keyword: Option<&str>) -> AssessmentResult {
        let keyword = match keyword {
            Some(keyword) if !keyword.trim().is_empty() => keyword,
            _ => return AssessmentResult::new(self.id(), SCORE_NA, "No focus keyword was set."),
        };
        if research.word_count() == 0 {
            return AssessmentResult::new(self.id(), SCORE_NA, "There is no text to score.");
        }

        let occurrences = keyword_occurrences(research, keyword);
        let first_paragraph_end = utils::first_paragraph(research.text()).len();
        let introduced: Vec<_> = occurrences
            .iter()
            .filter(|span| span.byte().start < first_paragraph_end)
            .cloned()
            .collect();

        if !introduced.is_empty() {
            AssessmentResult::new(
                self.id(),
                SCORE_GOOD,
                "The keyword appears in the first paragraph.",
            )
            .with_marks(introduced)
        } else if !occurrences.is_empty() {
            AssessmentResult::new(
                self.id(),
                SCORE_BAD,
                "The keyword does not appear in the first paragraph. Make your topic clear early on.",
            )
            .with_marks(occurrences)
        } else {
            AssessmentResult::new(
                self.id(),
                SCORE_BAD,
                format!("The keyword {:?} does not appear in the text.", keyword),
            )
        }
    }
}
