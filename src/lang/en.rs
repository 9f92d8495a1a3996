//! English: periphrastic passive with `to be` / `to get` auxiliaries and
//! stopword-bounded sentence parts.

use crate::assessment::{
    KeywordDensity, KeywordIntroduction, PassiveVoice, SentenceLength, TextLength,
};
use crate::lexicon::{AuxiliaryGroup, RuleSet, SuffixPattern};
use crate::passive::StopwordSplitter;
use crate::pipeline::Analyzer;
use crate::tokenizer::TokenizerLangOptions;

/// The English rule tables.
pub fn rule_set() -> RuleSet {
    let groups = vec![AuxiliaryGroup::new(
        "be",
        &[
            "am", "is", "are", "was", "were", "be", "been", "being", "get", "gets", "got",
            "getting",
        ],
        vec![SuffixPattern::new("ed", 2)],
    )];

    RuleSet::new(
        "en",
        groups,
        // strong verb participles the -ed pattern cannot reach
        &[
            "written",
            "done",
            "given",
            "taken",
            "made",
            "seen",
            "known",
            "found",
            "built",
            "sent",
            "kept",
            "held",
            "shown",
            "told",
            "brought",
            "bought",
            "caught",
            "taught",
            "thought",
            "left",
            "meant",
            "put",
            "set",
            "read",
            "paid",
            "said",
            "sold",
            "lost",
            "won",
            "worn",
            "broken",
            "chosen",
            "driven",
            "eaten",
            "fallen",
            "forgotten",
            "frozen",
            "hidden",
            "spoken",
            "stolen",
            "understood",
        ],
        &[
            "and", "or", "but", "because", "so", "if", "when", "while", "after", "before",
            "until", "since", "unless", "although", "though", "that", "which", "who",
        ],
        TokenizerLangOptions {
            abbreviations: [
                "mr.", "mrs.", "ms.", "dr.", "prof.", "etc.", "e.g.", "i.e.", "vs.", "approx.",
                "inc.", "st.",
            ]
            .iter()
            .map(|x| x.to_string())
            .collect(),
        },
    )
}

/// The ready-made English analyzer.
pub fn analyzer() -> Analyzer {
    Analyzer::new(
        rule_set(),
        StopwordSplitter.into(),
        vec![
            KeywordDensity.into(),
            TextLength.into(),
            KeywordIntroduction.into(),
        ],
        vec![PassiveVoice.into(), SentenceLength::default().into()],
    )
}
