//! Periphrastic passive voice detection: clause splitting around auxiliary verbs
//! and participle lookup driven by the per-language [RuleSet].

use serde::{Deserialize, Serialize};

use crate::lexicon::{AuxiliaryGroup, RuleSet};
use crate::types::{Participle, ParticipleKind, Position, Sentence, SentencePart, Span, Token};
use crate::utils;
use crate::Error;

/// Splits a sentence into the parts to check for participles.
pub trait Split {
    /// The sentence parts anchored on auxiliary occurrences, in sentence order.
    /// A sentence without auxiliaries yields no parts. Parts never overlap.
    fn split<'t>(&self, sentence: &Sentence<'t>, rules: &'t RuleSet) -> Vec<SentencePart<'t>>;
}

/// The closed set of clause splitting strategies, one per language family.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ClauseSplitter {
    /// Anchors a part on every auxiliary occurrence (Hungarian family).
    Auxiliary(AuxiliarySplitter),
    /// Anchors a part on each run of auxiliaries, bounded by stopwords (English family).
    Stopword(StopwordSplitter),
}

impl Split for ClauseSplitter {
    fn split<'t>(&self, sentence: &Sentence<'t>, rules: &'t RuleSet) -> Vec<SentencePart<'t>> {
        match self {
            ClauseSplitter::Auxiliary(splitter) => splitter.split(sentence, rules),
            ClauseSplitter::Stopword(splitter) => splitter.split(sentence, rules),
        }
    }
}

impl From<AuxiliarySplitter> for ClauseSplitter {
    fn from(splitter: AuxiliarySplitter) -> Self {
        ClauseSplitter::Auxiliary(splitter)
    }
}

impl From<StopwordSplitter> for ClauseSplitter {
    fn from(splitter: StopwordSplitter) -> Self {
        ClauseSplitter::Stopword(splitter)
    }
}

/// Splits on every auxiliary occurrence: each part runs from its auxiliary
/// to the next auxiliary occurrence or the end of the sentence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuxiliarySplitter;

impl Split for AuxiliarySplitter {
    fn split<'t>(&self, sentence: &Sentence<'t>, rules: &'t RuleSet) -> Vec<SentencePart<'t>> {
        let tokens = sentence.tokens();
        let anchors: Vec<(usize, &'t AuxiliaryGroup)> = tokens
            .iter()
            .enumerate()
            .filter_map(|(index, token)| word_group(token, rules).map(|group| (index, group)))
            .collect();

        let mut parts = Vec::new();
        for (nth, &(start, group)) in anchors.iter().enumerate() {
            let (end_index, end) = match anchors.get(nth + 1) {
                Some(&(next, _)) => (next, tokens[next].span().start()),
                None => (tokens.len(), sentence.span().end()),
            };

            parts.push(build_part(
                sentence,
                rules,
                group,
                &tokens[start..end_index],
                vec![tokens[start].clone()],
                end,
            ));
        }

        parts
    }
}

/// Splits on runs of consecutive auxiliaries: each part runs from its auxiliary
/// run to the next stopword, the next auxiliary or the end of the sentence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StopwordSplitter;

impl Split for StopwordSplitter {
    fn split<'t>(&self, sentence: &Sentence<'t>, rules: &'t RuleSet) -> Vec<SentencePart<'t>> {
        let tokens = sentence.tokens();
        let mut parts = Vec::new();
        let mut index = 0;

        while index < tokens.len() {
            let group = match word_group(&tokens[index], rules) {
                Some(group) => group,
                None => {
                    index += 1;
                    continue;
                }
            };

            // the whole run of consecutive auxiliaries belongs to this part
            let mut run_end = index + 1;
            while run_end < tokens.len() && word_group(&tokens[run_end], rules).is_some() {
                run_end += 1;
            }

            let mut end_index = tokens.len();
            for (candidate, token) in tokens.iter().enumerate().skip(run_end) {
                if token.is_word() {
                    let word = utils::normalize(token.as_str());
                    if rules.is_stopword(&word) || rules.is_auxiliary(&word) {
                        end_index = candidate;
                        break;
                    }
                }
            }

            let end = if end_index == tokens.len() {
                sentence.span().end()
            } else {
                tokens[end_index].span().start()
            };

            parts.push(build_part(
                sentence,
                rules,
                group,
                &tokens[index..end_index],
                tokens[index..run_end].to_vec(),
                end,
            ));

            index = end_index;
        }

        parts
    }
}

fn word_group<'t>(token: &Token, rules: &'t RuleSet) -> Option<&'t AuxiliaryGroup> {
    if token.is_word() {
        rules.group_of(&utils::normalize(token.as_str()))
    } else {
        None
    }
}

fn build_part<'t>(
    sentence: &Sentence<'t>,
    rules: &'t RuleSet,
    group: &'t AuxiliaryGroup,
    tokens: &[Token<'t>],
    auxiliaries: Vec<Token<'t>>,
    end: Position,
) -> SentencePart<'t> {
    let start = tokens
        .first()
        .expect("a sentence part is anchored on at least one token")
        .span()
        .start();
    let span = Span::new(start.byte..end.byte, start.char..end.char);
    debug_assert!(span.within(sentence.span()));

    // token and part spans are absolute, the sentence text starts at the sentence span
    let text_range = span.clone().lshift(sentence.span().start());
    let text = &sentence.text()[text_range.byte().clone()];

    SentencePart::new(text, span, rules.lang(), group, auxiliaries, tokens.to_vec())
}

/// Finds the participles in a sentence part.
///
/// Words are normalized before lookup. The irregular-form table takes precedence
/// over suffix patterns; suffix patterns apply in table order and the first match
/// wins. The auxiliaries anchoring the part are never candidates. Matches are
/// returned in sentence order.
///
/// # Errors
/// - If a match lies outside the span of the part. This indicates an internal
///   consistency bug and invalidates the whole output.
pub fn find_participles(part: &SentencePart, rules: &RuleSet) -> Result<Vec<Participle>, Error> {
    let mut participles = Vec::new();

    for token in part.words() {
        if part
            .auxiliaries()
            .iter()
            .any(|auxiliary| auxiliary.span() == token.span())
        {
            continue;
        }

        let word = utils::normalize(token.as_str());

        let (pattern, kind) = if rules.is_irregular(&word) {
            (None, ParticipleKind::Irregular)
        } else {
            match part
                .group()
                .patterns()
                .iter()
                .find(|pattern| pattern.matches(&word))
            {
                Some(pattern) => (Some(pattern.suffix().to_string()), pattern.kind()),
                None => continue,
            }
        };

        let participle = Participle::new(word, token.span().clone(), pattern, kind);
        if !participle.span().within(part.span()) {
            return Err(Error::OutOfBoundsMatch {
                found: participle.text().to_string(),
                span: participle.span().clone(),
                part: part.span().clone(),
            });
        }

        participles.push(participle);
    }

    Ok(participles)
}
