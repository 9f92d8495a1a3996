//! The analysis pipeline: tokenization, participle detection and scoring.

use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::assessment::{Assess, Assessment};
use crate::lexicon::RuleSet;
use crate::passive::{find_participles, ClauseSplitter, Split};
use crate::store::ResultEntry;
use crate::tokenizer::Tokenizer;
use crate::types::{Participle, Sentence};
use crate::{Component, Error};

/// The two kinds of analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnalysisKind {
    /// Keyword-scoped scoring. Re-run per tracked keyword.
    Seo,
    /// Keyword-independent scoring. Re-run once per text change.
    Readability,
}

/// Raw analysis output: the tokenized sentences and the participles found in them.
/// Read-only; assessments never mutate the research they score.
#[derive(Debug, Clone, PartialEq)]
pub struct Research<'t> {
    text: &'t str,
    sentences: Vec<Sentence<'t>>,
    participles: Vec<Vec<Participle>>,
    word_count: usize,
}

impl<'t> Research<'t> {
    /// The full text this research was run on.
    pub fn text(&self) -> &'t str {
        self.text
    }

    /// The sentences of the text.
    pub fn sentences(&self) -> &[Sentence<'t>] {
        &self.sentences
    }

    /// The participles found per sentence. Parallel to [sentences][Research::sentences].
    pub fn participles(&self) -> &[Vec<Participle>] {
        &self.participles
    }

    /// The number of word tokens in the text.
    pub fn word_count(&self) -> usize {
        self.word_count
    }
}

/// The analysis pipeline for one language: a tokenizer, a clause splitter and
/// the assessments, sharing one read-only [RuleSet].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analyzer {
    rules: Arc<RuleSet>,
    tokenizer: Tokenizer,
    splitter: ClauseSplitter,
    seo: Vec<Assessment>,
    readability: Vec<Assessment>,
}

impl Component for Analyzer {
    fn name() -> &'static str {
        "analyzer"
    }
}

impl Analyzer {
    /// Creates an analyzer from its components. The tokenizer is configured
    /// from the language options of the rule set.
    pub fn new(
        rules: RuleSet,
        splitter: ClauseSplitter,
        seo: Vec<Assessment>,
        readability: Vec<Assessment>,
    ) -> Self {
        let tokenizer = Tokenizer::new(rules.lang_options().clone());

        Analyzer {
            rules: Arc::new(rules),
            tokenizer,
            splitter,
            seo,
            readability,
        }
    }

    /// The rule set backing this analyzer.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// The tokenizer of this analyzer.
    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// The clause splitter of this analyzer.
    pub fn splitter(&self) -> &ClauseSplitter {
        &self.splitter
    }

    /// Runs tokenization and participle detection without scoring.
    ///
    /// # Errors
    /// - If the detector reports an inconsistency. See [Error::OutOfBoundsMatch].
    pub fn research<'t>(&'t self, text: &'t str) -> Result<Research<'t>, Error> {
        let mut sentences = Vec::new();
        let mut participles = Vec::new();

        for sentence in self.tokenizer.tokenize(text) {
            let mut found = Vec::new();
            for part in self.splitter.split(&sentence, &self.rules) {
                found.extend(find_participles(&part, &self.rules)?);
            }

            participles.push(found);
            sentences.push(sentence);
        }

        let word_count = sentences.iter().map(|sentence| sentence.words().count()).sum();

        Ok(Research {
            text,
            sentences,
            participles,
            word_count,
        })
    }

    /// Runs the full analysis of the given kind and produces one scored entry.
    ///
    /// SEO analysis is scoped to the given keyword. Readability analysis ignores
    /// the keyword, its entry never carries one.
    pub fn analyze(
        &self,
        text: &str,
        keyword: Option<&str>,
        kind: AnalysisKind,
    ) -> Result<ResultEntry, Error> {
        let research = self.research(text)?;

        let (assessments, keyword) = match kind {
            AnalysisKind::Seo => (&self.seo, keyword),
            AnalysisKind::Readability => (&self.readability, None),
        };

        let results: Vec<_> = assessments
            .iter()
            .map(|assessment| assessment.assess(&research, keyword))
            .collect();

        debug!(
            "analyzed {} sentences into {} results ({:?})",
            research.sentences().len(),
            results.len(),
            kind
        );

        Ok(ResultEntry::new(
            keyword.map(|keyword| keyword.to_string()),
            results,
        ))
    }
}
