//! Hungarian: periphrastic passive built on the `van` and `kerül` auxiliary families.

use crate::assessment::{
    KeywordDensity, KeywordIntroduction, PassiveVoice, SentenceLength, TextLength,
};
use crate::lexicon::{AuxiliaryGroup, RuleSet, SuffixPattern};
use crate::passive::AuxiliarySplitter;
use crate::pipeline::Analyzer;
use crate::tokenizer::TokenizerLangOptions;

/// The Hungarian rule tables.
pub fn rule_set() -> RuleSet {
    let groups = vec![
        AuxiliaryGroup::new(
            "van",
            &[
                "van",
                "vannak",
                "volt",
                "voltak",
                "lesz",
                "lesznek",
                "lett",
                "lettek",
                "lenne",
                "lennének",
                "marad",
                "maradt",
                "maradnak",
                "maradtak",
            ],
            vec![SuffixPattern::new("va", 3), SuffixPattern::new("ve", 3)],
        ),
        AuxiliaryGroup::new(
            "kerül",
            &["kerül", "kerülnek", "kerülne", "került", "kerültek"],
            // longer suffixes first, the generic ones need more stem
            vec![
                SuffixPattern::new("ásra", 3),
                SuffixPattern::new("ésre", 3),
                SuffixPattern::new("ra", 5),
                SuffixPattern::new("re", 5),
            ],
        ),
    ];

    RuleSet::new(
        "hu",
        groups,
        // short -ve forms the stem-length guard would reject
        &["téve", "véve", "vive"],
        &[
            "és", "vagy", "de", "hogy", "mert", "ha", "mint", "illetve", "azonban",
        ],
        TokenizerLangOptions {
            abbreviations: ["kb.", "pl.", "stb.", "dr.", "ún.", "ill.", "ca."]
                .iter()
                .map(|x| x.to_string())
                .collect(),
        },
    )
}

/// The ready-made Hungarian analyzer.
pub fn analyzer() -> Analyzer {
    Analyzer::new(
        rule_set(),
        AuxiliarySplitter.into(),
        vec![
            KeywordDensity.into(),
            TextLength.into(),
            KeywordIntroduction.into(),
        ],
        vec![PassiveVoice.into(), SentenceLength::default().into()],
    )
}
