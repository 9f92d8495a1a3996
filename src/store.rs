//! The result store: a state machine keeping per-keyword scores consistent
//! while keywords are added, edited or removed.

use indexmap::IndexMap;
use itertools::Itertools;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::types::AssessmentResult;
use crate::Error;

/// The scored results of one analysis run. SEO entries carry their focus
/// keyword, the readability entry does not.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultEntry {
    keyword: Option<String>,
    results: Vec<AssessmentResult>,
    overall: u8,
}

impl ResultEntry {
    /// Creates an entry and computes its overall score.
    pub fn new(keyword: Option<String>, results: Vec<AssessmentResult>) -> Self {
        let mut entry = ResultEntry {
            keyword,
            results,
            overall: 0,
        };
        entry.overall = overall_score(&entry.results);
        entry
    }

    /// The focus keyword this entry was scored for, if any.
    pub fn keyword(&self) -> Option<&str> {
        self.keyword.as_deref()
    }

    /// The assessment results, in assessment order.
    pub fn results(&self) -> &[AssessmentResult] {
        &self.results
    }

    /// Consumes the entry, yielding its results.
    pub fn into_results(self) -> Vec<AssessmentResult> {
        self.results
    }

    /// The result of the assessment with the given identifier, if present.
    pub fn result(&self, id: &str) -> Option<&AssessmentResult> {
        self.results.iter().find(|result| result.id() == id)
    }

    /// The overall score on a zero to hundred scale: the mean of the applicable
    /// assessment scores, scaled. Zero if nothing was applicable.
    pub fn overall(&self) -> u8 {
        self.overall
    }

    /// Replaces the result with the same identifier, or appends if there is none.
    /// The overall score is kept in sync.
    pub(crate) fn upsert(&mut self, result: AssessmentResult) {
        match self.results.iter_mut().find(|x| x.id() == result.id()) {
            Some(existing) => *existing = result,
            None => self.results.push(result),
        }
        self.overall = overall_score(&self.results);
    }
}

/// The mean of the applicable scores (score zero means "not applicable"),
/// scaled from the zero to nine scale to zero to hundred.
fn overall_score(results: &[AssessmentResult]) -> u8 {
    let scores: Vec<u32> = results
        .iter()
        .map(|result| u32::from(result.score()))
        .filter(|&score| score > 0)
        .collect();

    if scores.is_empty() {
        return 0;
    }

    let sum: u32 = scores.iter().sum();
    ((sum as f64 / (scores.len() as f64 * 9.)) * 100.).round() as u8
}

/// A command mutating the [ResultStore]. Applied atomically: a failed
/// transition leaves the store untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Transition {
    /// Replaces all SEO results for a keyword, tracking it if it was unknown.
    SetSeoResults {
        keyword: String,
        results: Vec<AssessmentResult>,
    },
    /// Replaces or adds a single result within a tracked keyword's entry.
    /// Fails with [Error::UnknownKeywordUpdate] for untracked keywords.
    UpdateSeoResult {
        keyword: String,
        result: AssessmentResult,
    },
    /// Stops tracking a keyword. Removing an unknown keyword is a no-op.
    RemoveKeyword { keyword: String },
    /// Renames a tracked keyword and replaces its results, as one step.
    /// Observers never see the intermediate state.
    ChangeKeyword {
        old_keyword: String,
        new_keyword: String,
        results: Vec<AssessmentResult>,
    },
    /// Replaces the readability results.
    SetReadabilityResults { results: Vec<AssessmentResult> },
    /// Replaces or adds a single readability result. The readability entry
    /// always exists, so this never fails.
    UpdateReadabilityResult { result: AssessmentResult },
}

impl Transition {
    /// The symbolic name of this command, stable across versions.
    pub fn name(&self) -> &'static str {
        match self {
            Transition::SetSeoResults { .. } => "set_seo_results",
            Transition::UpdateSeoResult { .. } => "update_seo_result",
            Transition::RemoveKeyword { .. } => "remove_keyword",
            Transition::ChangeKeyword { .. } => "change_keyword",
            Transition::SetReadabilityResults { .. } => "set_readability_results",
            Transition::UpdateReadabilityResult { .. } => "update_readability_result",
        }
    }
}

/// Holds the latest [ResultEntry] per tracked focus keyword, in insertion
/// order, plus the keyword-independent readability entry which always exists.
/// Created once per editing session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultStore {
    seo: IndexMap<String, ResultEntry>,
    readability: ResultEntry,
}

impl ResultStore {
    /// Creates an empty store. The readability entry starts empty but present.
    pub fn new() -> Self {
        ResultStore::default()
    }

    /// Applies a transition and returns the entry it produced, if any
    /// (`None` after a removal).
    ///
    /// # Errors
    /// - If an update targets an untracked keyword. The store is left untouched.
    pub fn apply(&mut self, transition: Transition) -> Result<Option<&ResultEntry>, Error> {
        debug!("applying {}", transition.name());

        let entry = match transition {
            Transition::SetSeoResults { keyword, results } => {
                let entry = ResultEntry::new(Some(keyword.clone()), results);
                self.seo.insert(keyword.clone(), entry);
                self.seo.get(&keyword)
            }
            Transition::UpdateSeoResult { keyword, result } => {
                // validated before any mutation, failed updates change nothing
                let entry = self
                    .seo
                    .get_mut(&keyword)
                    .ok_or_else(|| Error::UnknownKeywordUpdate(keyword.clone()))?;
                entry.upsert(result);
                self.seo.get(&keyword)
            }
            Transition::RemoveKeyword { keyword } => {
                self.seo.shift_remove(&keyword);
                None
            }
            Transition::ChangeKeyword {
                old_keyword,
                new_keyword,
                results,
            } => {
                self.seo.shift_remove(&old_keyword);
                let entry = ResultEntry::new(Some(new_keyword.clone()), results);
                self.seo.insert(new_keyword.clone(), entry);
                self.seo.get(&new_keyword)
            }
            Transition::SetReadabilityResults { results } => {
                self.readability = ResultEntry::new(None, results);
                Some(&self.readability)
            }
            Transition::UpdateReadabilityResult { result } => {
                self.readability.upsert(result);
                Some(&self.readability)
            }
        };

        debug!("tracking [{}]", self.keywords().join(", "));
        Ok(entry)
    }

    /// The entry for a tracked keyword, if any.
    pub fn seo_result(&self, keyword: &str) -> Option<&ResultEntry> {
        self.seo.get(keyword)
    }

    /// The tracked focus keywords, in insertion order.
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.seo.keys().map(|keyword| keyword.as_str())
    }

    /// All SEO entries, in keyword insertion order.
    pub fn seo_results(&self) -> impl Iterator<Item = &ResultEntry> {
        self.seo.values()
    }

    /// The readability entry. Always present, possibly empty.
    pub fn readability(&self) -> &ResultEntry {
        &self.readability
    }
}
