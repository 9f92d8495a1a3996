use lazy_static::lazy_static;
use quickcheck_macros::quickcheck;

use textrule::passive::Split;
use textrule::pipeline::{AnalysisKind, Analyzer};
use textrule::store::{ResultEntry, ResultStore, Transition};
use textrule::types::{AssessmentResult, ParticipleKind};
use textrule::{lang, Error};

lazy_static! {
    static ref HU: Analyzer = lang::hu::analyzer();
    static ref EN: Analyzer = lang::en::analyzer();
}

#[test]
fn can_analyze_empty_text() {
    let entry = HU.analyze("", Some("kép"), AnalysisKind::Seo).unwrap();

    // nothing is applicable, nothing is scored
    assert_eq!(entry.overall(), 0);
}

#[quickcheck]
fn can_tokenize_anything(text: String) -> bool {
    HU.tokenizer().tokenize(&text).count();
    true
}

#[quickcheck]
fn sentences_reconstruct_text(text: String) -> bool {
    let concatenated: String = HU
        .tokenizer()
        .tokenize(&text)
        .map(|sentence| sentence.text())
        .collect();

    if text.trim().is_empty() {
        concatenated.is_empty()
    } else {
        concatenated == text
    }
}

#[quickcheck]
fn detection_is_deterministic(text: String) -> bool {
    let first = HU.research(&text).map(|x| x.participles().to_vec()).ok();
    let second = HU.research(&text).map(|x| x.participles().to_vec()).ok();

    first == second
}

#[test]
fn finds_hungarian_va_participle() {
    let research = HU.research("Ki van plakátolva a képe").unwrap();

    assert_eq!(research.sentences().len(), 1);
    let participles = &research.participles()[0];
    assert_eq!(participles.len(), 1);
    assert_eq!(participles[0].text(), "plakátolva");
    assert_eq!(participles[0].pattern(), Some("va"));
    assert_eq!(participles[0].kind(), ParticipleKind::Periphrastic);
}

#[test]
fn finds_hungarian_irregular_participle() {
    let research = HU.research("A könyv oda van téve az asztalra").unwrap();

    // "asztalra" must not match: the van group has no -ra pattern
    let participles = &research.participles()[0];
    assert_eq!(participles.len(), 1);
    assert_eq!(participles[0].text(), "téve");
    assert_eq!(participles[0].pattern(), None);
    assert_eq!(participles[0].kind(), ParticipleKind::Irregular);
}

#[test]
fn finds_hungarian_kerul_group_participles() {
    for (text, participle, pattern) in &[
        (
            "Sor került a megfinanszírozásra.",
            "megfinanszírozásra",
            "ásra",
        ),
        ("Sor került a beszállításra.", "beszállításra", "ásra"),
        ("Sor került az értékesítésre.", "értékesítésre", "ésre"),
    ] {
        let research = HU.research(text).unwrap();

        let participles = &research.participles()[0];
        assert_eq!(participles.len(), 1, "text: {:?}", text);
        assert_eq!(participles[0].text(), *participle);
        assert_eq!(participles[0].pattern(), Some(*pattern));
    }
}

#[test]
fn no_auxiliary_means_no_passive() {
    let text = "A macska az asztalon alszik.";
    let research = HU.research(text).unwrap();
    assert!(research.participles().iter().all(|x| x.is_empty()));

    let entry = HU.analyze(text, None, AnalysisKind::Readability).unwrap();
    let passive = entry.result("passive_voice").unwrap();
    assert_eq!(passive.score(), 9);
    assert!(passive.marks().is_empty());
}

#[test]
fn hungarian_abbreviations_do_not_split_sentences() {
    let sentences: Vec<_> = HU
        .tokenizer()
        .tokenize("Kb. tíz ember jött el. Mindenki örült.")
        .collect();

    assert_eq!(sentences.len(), 2);
    assert_eq!(sentences[0].text(), "Kb. tíz ember jött el.");
}

#[test]
fn finds_english_participles() {
    let research = EN
        .research("The code was written by hand. The door was closed quietly.")
        .unwrap();

    let participles: Vec<_> = research.participles().iter().flatten().collect();
    assert_eq!(participles.len(), 2);
    assert_eq!(participles[0].text(), "written");
    assert_eq!(participles[0].kind(), ParticipleKind::Irregular);
    assert_eq!(participles[1].text(), "closed");
    assert_eq!(participles[1].pattern(), Some("ed"));
}

#[test]
fn english_stopwords_bound_sentence_parts() {
    let sentence = EN
        .tokenizer()
        .tokenize_sentence("The essay was written because the deadline was near.")
        .unwrap();
    let parts = EN.splitter().split(&sentence, EN.rules());

    assert_eq!(parts.len(), 2);
    assert!(parts[0].text().starts_with("was written"));
    assert!(parts[1].text().starts_with("was near"));
}

#[test]
fn seo_analysis_carries_the_keyword() {
    let entry = HU
        .analyze(
            "Ki van plakátolva a képe. Mindenki látta már.",
            Some("képe"),
            AnalysisKind::Seo,
        )
        .unwrap();

    assert_eq!(entry.keyword(), Some("képe"));
    assert_eq!(entry.results().len(), 3);
    // the keyword occurs right in the first paragraph
    assert_eq!(entry.result("keyword_introduction").unwrap().score(), 9);
    assert!(entry.overall() > 0);
}

#[test]
fn readability_analysis_has_no_keyword() {
    let entry = HU
        .analyze(
            "Ki van plakátolva a képe.",
            Some("képe"),
            AnalysisKind::Readability,
        )
        .unwrap();

    assert_eq!(entry.keyword(), None);
    assert!(entry.result("passive_voice").is_some());
    assert!(entry.result("sentence_length").is_some());
}

fn seo_entry(text: &str, keyword: &str) -> ResultEntry {
    HU.analyze(text, Some(keyword), AnalysisKind::Seo).unwrap()
}

#[test]
fn setting_results_twice_is_idempotent() {
    let text = "Ki van plakátolva a képe.";
    let mut store = ResultStore::new();

    let set = Transition::SetSeoResults {
        keyword: "képe".into(),
        results: seo_entry(text, "képe").into_results(),
    };
    store.apply(set.clone()).unwrap();
    let once = store.clone();
    store.apply(set).unwrap();

    assert_eq!(store, once);
}

#[test]
fn a_session_tracks_keywords_across_transitions() {
    let text = "Ki van plakátolva a képe. Mindenki látta már.";
    let mut store = ResultStore::new();

    for keyword in &["képe", "plakát"] {
        store
            .apply(Transition::SetSeoResults {
                keyword: keyword.to_string(),
                results: seo_entry(text, keyword).into_results(),
            })
            .unwrap();
    }
    store
        .apply(Transition::SetReadabilityResults {
            results: HU
                .analyze(text, None, AnalysisKind::Readability)
                .unwrap()
                .into_results(),
        })
        .unwrap();

    assert_eq!(store.keywords().collect::<Vec<_>>(), vec!["képe", "plakát"]);
    assert!(store.readability().overall() > 0);

    // renaming happens as one step, the old keyword vanishes with it
    store
        .apply(Transition::ChangeKeyword {
            old_keyword: "plakát".into(),
            new_keyword: "kép".into(),
            results: seo_entry(text, "kép").into_results(),
        })
        .unwrap();
    assert_eq!(store.keywords().collect::<Vec<_>>(), vec!["képe", "kép"]);
    assert!(store.seo_result("plakát").is_none());

    // removing an absent keyword stays a no-op
    store
        .apply(Transition::RemoveKeyword {
            keyword: "plakát".into(),
        })
        .unwrap();
    store
        .apply(Transition::RemoveKeyword {
            keyword: "képe".into(),
        })
        .unwrap();
    assert_eq!(store.keywords().collect::<Vec<_>>(), vec!["kép"]);
}

#[test]
fn renaming_an_untracked_keyword_still_inserts() {
    let text = "Ki van plakátolva a képe.";
    let mut store = ResultStore::new();
    store
        .apply(Transition::SetSeoResults {
            keyword: "képe".into(),
            results: seo_entry(text, "képe").into_results(),
        })
        .unwrap();

    // the removal half is a no-op for unknown keywords, the insert still happens
    store
        .apply(Transition::ChangeKeyword {
            old_keyword: "plakát".into(),
            new_keyword: "kép".into(),
            results: seo_entry(text, "kép").into_results(),
        })
        .unwrap();

    assert_eq!(store.keywords().collect::<Vec<_>>(), vec!["képe", "kép"]);
    assert!(store.seo_result("plakát").is_none());
}

#[test]
fn renamed_entries_carry_exactly_the_supplied_results() {
    let mut store = ResultStore::new();
    store
        .apply(Transition::SetSeoResults {
            keyword: "plakát".into(),
            results: seo_entry("Ki van plakátolva a képe.", "plakát").into_results(),
        })
        .unwrap();

    let results = seo_entry("Mindenki látta a képet.", "kép").into_results();
    store
        .apply(Transition::ChangeKeyword {
            old_keyword: "plakát".into(),
            new_keyword: "kép".into(),
            results: results.clone(),
        })
        .unwrap();

    assert!(store.seo_result("plakát").is_none());
    assert_eq!(store.seo_result("kép").unwrap().results(), results.as_slice());
}

#[test]
fn updates_merge_into_the_tracked_entry() {
    let text = "Ki van plakátolva a képe.";
    let mut store = ResultStore::new();
    store
        .apply(Transition::SetSeoResults {
            keyword: "képe".into(),
            results: seo_entry(text, "képe").into_results(),
        })
        .unwrap();
    let count = store.seo_result("képe").unwrap().results().len();

    let update = HU
        .analyze(text, Some("képe"), AnalysisKind::Seo)
        .unwrap()
        .result("keyword_density")
        .cloned()
        .unwrap();
    store
        .apply(Transition::UpdateSeoResult {
            keyword: "képe".into(),
            result: update,
        })
        .unwrap();

    // replaced in place, not appended
    assert_eq!(store.seo_result("képe").unwrap().results().len(), count);
}

#[test]
fn updating_an_untracked_keyword_fails() {
    let mut store = ResultStore::new();

    let error = store.apply(Transition::UpdateSeoResult {
        keyword: "képe".into(),
        result: AssessmentResult::new("keyword_density", 3, "feedback"),
    });

    assert!(matches!(error, Err(Error::UnknownKeywordUpdate(_))));
    assert_eq!(store, ResultStore::new());
}

#[quickcheck]
fn store_keys_track_transitions(ops: Vec<(u8, bool)>) -> bool {
    let mut store = ResultStore::new();
    let mut model: Vec<String> = Vec::new();

    for (byte, insert) in ops {
        let keyword = format!("kw{}", byte % 4);
        if insert {
            store
                .apply(Transition::SetSeoResults {
                    keyword: keyword.clone(),
                    results: Vec::new(),
                })
                .unwrap();
            if !model.contains(&keyword) {
                model.push(keyword);
            }
        } else {
            store
                .apply(Transition::RemoveKeyword {
                    keyword: keyword.clone(),
                })
                .unwrap();
            model.retain(|x| x != &keyword);
        }
    }

    store.keywords().collect::<Vec<_>>() == model
}

#[quickcheck]
fn overall_score_is_a_percentage(scores: Vec<u8>) -> bool {
    // raw scores, the constructor clamps them to the scale
    let results: Vec<_> = scores
        .iter()
        .enumerate()
        .map(|(i, &score)| AssessmentResult::new(format!("a{}", i), score, "feedback"))
        .collect();
    let entry = ResultEntry::new(None, results);

    entry.overall() <= 100 && (entry.overall() == 0) == scores.iter().all(|&score| score == 0)
}
