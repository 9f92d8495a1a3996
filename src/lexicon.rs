//! Per-language rule tables driving clause splitting and participle detection.

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::tokenizer::TokenizerLangOptions;
use crate::types::{DefaultHashMap, DefaultHashSet, ParticipleKind};
use crate::utils;
use crate::Component;

/// A participle suffix with its matching constraints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuffixPattern {
    suffix: String,
    min_stem: usize,
    kind: ParticipleKind,
}

impl SuffixPattern {
    /// Creates a pattern matching words ending in `suffix` with at least
    /// `min_stem` chars of stem before it. Matches classify as periphrastic.
    pub fn new(suffix: &str, min_stem: usize) -> Self {
        SuffixPattern {
            suffix: utils::normalize(suffix),
            min_stem,
            kind: ParticipleKind::Periphrastic,
        }
    }

    /// The suffix to match, normalized.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// The minimum number of stem chars which must precede the suffix.
    pub fn min_stem(&self) -> usize {
        self.min_stem
    }

    /// The classification given to words matching this pattern.
    pub fn kind(&self) -> ParticipleKind {
        self.kind
    }

    /// Checks whether the normalized word matches this pattern.
    pub fn matches(&self, word: &str) -> bool {
        word.ends_with(&self.suffix)
            && word.chars().count() >= self.suffix.chars().count() + self.min_stem
    }
}

/// A group of auxiliary verb forms together with the suffix patterns
/// applying to participles in parts anchored on this group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuxiliaryGroup {
    name: String,
    auxiliaries: Vec<String>,
    patterns: Vec<SuffixPattern>,
}

impl AuxiliaryGroup {
    /// Creates a group. The forms are normalized.
    pub fn new(name: &str, forms: &[&str], patterns: Vec<SuffixPattern>) -> Self {
        AuxiliaryGroup {
            name: name.to_string(),
            auxiliaries: forms.iter().map(|x| utils::normalize(x)).collect(),
            patterns,
        }
    }

    /// The name of this group, conventionally its base auxiliary.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The normalized auxiliary forms of this group.
    pub fn auxiliaries(&self) -> &[String] {
        &self.auxiliaries
    }

    /// The suffix patterns in priority order: the first matching pattern wins.
    pub fn patterns(&self) -> &[SuffixPattern] {
        &self.patterns
    }
}

/// The static tables for one language: auxiliary groups, irregular participle
/// forms, stopwords and tokenizer options. Read-only during analysis, so one
/// rule set can back any number of concurrent runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleSet {
    lang: String,
    groups: Vec<AuxiliaryGroup>,
    irregulars: DefaultHashSet<String>,
    stopwords: DefaultHashSet<String>,
    lang_options: TokenizerLangOptions,
    #[serde(skip)]
    aux_index: OnceCell<DefaultHashMap<String, usize>>,
}

impl Component for RuleSet {
    fn name() -> &'static str {
        "ruleset"
    }
}

impl RuleSet {
    /// Creates a rule set from its tables. Irregular forms and stopwords are normalized.
    pub fn new(
        lang: &str,
        groups: Vec<AuxiliaryGroup>,
        irregulars: &[&str],
        stopwords: &[&str],
        lang_options: TokenizerLangOptions,
    ) -> Self {
        RuleSet {
            lang: lang.to_string(),
            groups,
            irregulars: irregulars.iter().map(|x| utils::normalize(x)).collect(),
            stopwords: stopwords.iter().map(|x| utils::normalize(x)).collect(),
            lang_options,
            aux_index: OnceCell::default(),
        }
    }

    /// The language code of this rule set e. g. `hu`.
    pub fn lang(&self) -> &str {
        &self.lang
    }

    /// The auxiliary groups of this rule set.
    pub fn groups(&self) -> &[AuxiliaryGroup] {
        &self.groups
    }

    /// The group which contains the given normalized word as an auxiliary form, if any.
    /// If a form occurs in multiple groups, the first group wins.
    pub fn group_of(&self, word: &str) -> Option<&AuxiliaryGroup> {
        self.aux_index().get(word).map(|&index| &self.groups[index])
    }

    /// Checks whether the normalized word is an auxiliary form of any group.
    pub fn is_auxiliary(&self, word: &str) -> bool {
        self.aux_index().contains_key(word)
    }

    /// Checks whether the normalized word is in the irregular participle table.
    pub fn is_irregular(&self, word: &str) -> bool {
        self.irregulars.contains(word)
    }

    /// Checks whether the normalized word is a stopword.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    pub(crate) fn lang_options(&self) -> &TokenizerLangOptions {
        &self.lang_options
    }

    // form -> group index lookup, computed lazily since it is skipped during (de)serialization
    fn aux_index(&self) -> &DefaultHashMap<String, usize> {
        self.aux_index.get_or_init(|| {
            let mut index = DefaultHashMap::default();

            for (i, group) in self.groups.iter().enumerate() {
                for form in group.auxiliaries() {
                    index.entry(form.clone()).or_insert(i);
                }
            }

            index
        })
    }
}
