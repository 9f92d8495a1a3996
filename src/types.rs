//! Fundamental types used by this crate.

use std::collections::{HashMap, HashSet};
use std::ops::{Add, AddAssign, Range, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::assessment::SCORE_GOOD;
use crate::lexicon::AuxiliaryGroup;

pub(crate) type DefaultHashMap<K, V> = HashMap<K, V>;
pub(crate) type DefaultHashSet<T> = HashSet<T>;

/// A position in a text. Determined by a byte and char index.
/// Can be an absolute position (offset relative to zero) or a position delta (offset relative to some other position).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub byte: usize,
    pub char: usize,
}

impl Add for Position {
    type Output = Position;

    fn add(self, other: Position) -> Self::Output {
        Position {
            byte: self.byte + other.byte,
            char: self.char + other.char,
        }
    }
}

impl AddAssign for Position {
    fn add_assign(&mut self, other: Position) {
        *self = *self + other;
    }
}

impl Sub for Position {
    type Output = Position;

    fn sub(self, other: Position) -> Self::Output {
        Position {
            byte: self.byte - other.byte,
            char: self.char - other.char,
        }
    }
}

impl SubAssign for Position {
    fn sub_assign(&mut self, other: Position) {
        *self = *self - other;
    }
}

/// A span in a text. Contains a byte and char range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    byte: Range<usize>,
    char: Range<usize>,
}

impl Span {
    /// Creates a new span from a byte and char range.
    pub fn new(byte: Range<usize>, char: Range<usize>) -> Self {
        Span { byte, char }
    }

    /// Gets the byte range.
    pub fn byte(&self) -> &Range<usize> {
        &self.byte
    }

    /// Gets the char range.
    pub fn char(&self) -> &Range<usize> {
        &self.char
    }

    /// The start of this span.
    pub fn start(&self) -> Position {
        Position {
            byte: self.byte.start,
            char: self.char.start,
        }
    }

    /// The end of this span.
    pub fn end(&self) -> Position {
        Position {
            byte: self.byte.end,
            char: self.char.end,
        }
    }

    /// Checks whether this span is empty.
    pub fn is_empty(&self) -> bool {
        self.char.is_empty()
    }

    /// Checks whether this span lies fully within the other span.
    pub fn within(&self, other: &Span) -> bool {
        other.byte.start <= self.byte.start && self.byte.end <= other.byte.end
    }

    /// Shifts the span right by the specified amount.
    pub fn rshift(mut self, position: Position) -> Self {
        self.byte.start += position.byte;
        self.byte.end += position.byte;
        self.char.start += position.char;
        self.char.end += position.char;
        self
    }

    /// Shifts the span left by the specified amount.
    pub fn lshift(mut self, position: Position) -> Self {
        self.byte.start -= position.byte;
        self.byte.end -= position.byte;
        self.char.start -= position.char;
        self.char.end -= position.char;
        self
    }
}

/// A token within a sentence: a maximal run of word characters or a single piece of punctuation.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'t> {
    text: &'t str,
    span: Span,
}

impl<'t> Token<'t> {
    pub(crate) fn new(text: &'t str, span: Span) -> Self {
        Token { text, span }
    }

    /// The text of this token.
    pub fn as_str(&self) -> &'t str {
        self.text
    }

    /// The span of this token in the original text.
    pub fn span(&self) -> &Span {
        &self.span
    }

    /// Whether this token is a word i. e. contains at least one alphanumeric char.
    pub fn is_word(&self) -> bool {
        self.text.chars().any(char::is_alphanumeric)
    }

    pub(crate) fn rshift(mut self, position: Position) -> Self {
        self.span = self.span.rshift(position);
        self
    }
}

/// A tokenized sentence.
#[derive(Debug, Clone, PartialEq)]
pub struct Sentence<'t> {
    tokens: Vec<Token<'t>>,
    text: &'t str,
    span: Span,
}

impl<'t> Sentence<'t> {
    pub(crate) fn new(tokens: Vec<Token<'t>>, text: &'t str) -> Self {
        Sentence {
            tokens,
            text,
            span: Span::new(0..text.len(), 0..text.chars().count()),
        }
    }

    /// The tokens in this sentence, in order.
    pub fn tokens(&self) -> &[Token<'t>] {
        &self.tokens
    }

    /// The text of this sentence, including any leading whitespace.
    pub fn text(&self) -> &'t str {
        self.text
    }

    /// The span of this sentence in the original text.
    pub fn span(&self) -> &Span {
        &self.span
    }

    /// Iterator over the word tokens, skipping punctuation.
    pub fn words(&self) -> impl Iterator<Item = &Token<'t>> {
        self.tokens.iter().filter(|token| token.is_word())
    }

    /// Shifts all spans in the sentence right by the specified amount.
    pub(crate) fn rshift(mut self, position: Position) -> Self {
        self.span = self.span.rshift(position);
        self.tokens = self
            .tokens
            .into_iter()
            .map(|token| token.rshift(position))
            .collect();
        self
    }
}

/// A contiguous part of a sentence, anchored on one or more auxiliary verb occurrences.
/// Immutable once created; detectors report [Participle]s instead of mutating the part.
#[derive(Debug, Clone)]
pub struct SentencePart<'t> {
    text: &'t str,
    span: Span,
    lang: &'t str,
    group: &'t AuxiliaryGroup,
    auxiliaries: Vec<Token<'t>>,
    tokens: Vec<Token<'t>>,
}

impl<'t> SentencePart<'t> {
    pub(crate) fn new(
        text: &'t str,
        span: Span,
        lang: &'t str,
        group: &'t AuxiliaryGroup,
        auxiliaries: Vec<Token<'t>>,
        tokens: Vec<Token<'t>>,
    ) -> Self {
        SentencePart {
            text,
            span,
            lang,
            group,
            auxiliaries,
            tokens,
        }
    }

    /// The text of this part.
    pub fn text(&self) -> &'t str {
        self.text
    }

    /// The span of this part in the original text. Always within the span of the parent sentence.
    pub fn span(&self) -> &Span {
        &self.span
    }

    /// The language code of the rule set which produced this part.
    pub fn lang(&self) -> &'t str {
        self.lang
    }

    /// The auxiliary group whose occurrence anchored this part.
    pub fn group(&self) -> &'t AuxiliaryGroup {
        self.group
    }

    /// The auxiliary tokens found in this part, in order. The first one is the trigger.
    pub fn auxiliaries(&self) -> &[Token<'t>] {
        &self.auxiliaries
    }

    /// The tokens in this part, in order.
    pub fn tokens(&self) -> &[Token<'t>] {
        &self.tokens
    }

    /// Iterator over the word tokens, skipping punctuation.
    pub fn words(&self) -> impl Iterator<Item = &Token<'t>> {
        self.tokens.iter().filter(|token| token.is_word())
    }
}

/// Classification of a found participle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParticipleKind {
    /// Formed from an auxiliary verb and a suffixed verb form.
    Periphrastic,
    /// An irregular form from the per-language lookup table.
    Irregular,
}

/// A participle found in a sentence part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participle {
    text: String,
    span: Span,
    pattern: Option<String>,
    kind: ParticipleKind,
}

impl Participle {
    pub(crate) fn new(
        text: String,
        span: Span,
        pattern: Option<String>,
        kind: ParticipleKind,
    ) -> Self {
        Participle {
            text,
            span,
            pattern,
            kind,
        }
    }

    /// The normalized text of the matched word.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The span of the matched word in the original text.
    pub fn span(&self) -> &Span {
        &self.span
    }

    /// The suffix which matched, e. g. `va`. `None` for irregular forms.
    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_deref()
    }

    /// The classification of this participle.
    pub fn kind(&self) -> ParticipleKind {
        self.kind
    }
}

/// The outcome of one assessment: a score on the zero to nine scale, feedback text
/// and the spans to highlight in the source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResult {
    id: String,
    score: u8,
    text: String,
    marks: Vec<Span>,
}

impl AssessmentResult {
    /// Creates a new result without marks. Scores above [SCORE_GOOD] are
    /// clamped to it.
    pub fn new<S: Into<String>, T: Into<String>>(id: S, score: u8, text: T) -> Self {
        AssessmentResult {
            id: id.into(),
            score: score.min(SCORE_GOOD),
            text: text.into(),
            marks: Vec::new(),
        }
    }

    /// Sets the spans to highlight.
    pub fn with_marks(mut self, marks: Vec<Span>) -> Self {
        self.marks = marks;
        self
    }

    /// The identifier of the assessment which produced this result.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The score: nine is good, six is okay, three signals a problem
    /// and zero means the assessment did not apply to the input.
    pub fn score(&self) -> u8 {
        self.score
    }

    /// Human-readable feedback.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The spans to highlight in the source text.
    pub fn marks(&self) -> &[Span] {
        &self.marks
    }
}
