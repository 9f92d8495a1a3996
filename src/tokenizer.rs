//! Splits text into sentences and word tokens.

use std::ops::Range;

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use crate::types::{DefaultHashSet, Position, Sentence, Span, Token};
use crate::utils;

/// Chars which end a sentence when followed by whitespace or the end of the text.
const TERMINATORS: &[char] = &['.', '!', '?', '…'];

/// Language-dependent options for a tokenizer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenizerLangOptions {
    /// Lowercase forms, including their trailing period, which do not end a sentence e. g. `dr.`.
    #[serde(default)]
    pub abbreviations: DefaultHashSet<String>,
}

/// Splits text into sentences at terminator punctuation and sentences into tokens
/// at Unicode word boundaries. Whitespace never becomes a token.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Tokenizer {
    lang_options: TokenizerLangOptions,
}

impl Tokenizer {
    pub(crate) fn new(lang_options: TokenizerLangOptions) -> Self {
        Tokenizer { lang_options }
    }

    /// Splits the text into sentences, lazily.
    ///
    /// The sentences have some key properties:
    /// - Preceding whitespace is always included so the first sentence always starts at byte and char index zero.
    /// - There are never gaps between sentences i. e. `sentences[i - 1].span().end() == sentences[i].span().start()`.
    /// - Trailing text without a terminator forms the last sentence; trailing whitespace belongs to it.
    /// - A text without any non-whitespace chars yields no sentences.
    pub fn tokenize<'t>(&'t self, text: &'t str) -> SentenceIter<'t> {
        SentenceIter {
            text,
            splits: self.split_ranges(text),
            tokenizer: self,
            index: 0,
            position: Position::default(),
        }
    }

    /// Tokenizes a single sentence. Returns `None` if the input is empty or whitespace-only.
    /// All spans are relative to the start of the input.
    pub fn tokenize_sentence<'t>(&'t self, sentence: &'t str) -> Option<Sentence<'t>> {
        if sentence.trim().is_empty() {
            return None;
        }

        let tokens: Vec<_> = sentence
            .split_word_bound_indices()
            .filter(|(_, token)| !token.trim().is_empty())
            .map(|(byte_start, token)| {
                let char_start = sentence[..byte_start].chars().count();
                Token::new(
                    token,
                    Span::new(
                        byte_start..byte_start + token.len(),
                        char_start..char_start + token.chars().count(),
                    ),
                )
            })
            .collect();

        Some(Sentence::new(tokens, sentence))
    }

    /// Computes the sentence ranges of the text. The ranges are contiguous and cover
    /// the full text, except that a text without words has no ranges at all.
    fn split_ranges(&self, text: &str) -> Vec<Range<usize>> {
        let mut ranges: Vec<Range<usize>> = Vec::new();
        let mut start = 0;

        let mut chars = text.char_indices().peekable();
        while let Some((index, char)) = chars.next() {
            if !TERMINATORS.contains(&char) {
                continue;
            }

            // runs like `?!` or `...` count as one terminator
            let mut end = index + char.len_utf8();
            while let Some(&(next_index, next_char)) = chars.peek() {
                if TERMINATORS.contains(&next_char) {
                    chars.next();
                    end = next_index + next_char.len_utf8();
                } else {
                    break;
                }
            }

            // mid-word terminators (decimals, multi-dot abbreviations) never split
            match chars.peek() {
                Some(&(_, next_char)) if !next_char.is_whitespace() => continue,
                _ => {}
            }

            // a lone period after an abbreviation does not end the sentence
            if char == '.' && end == index + char.len_utf8() && self.is_abbreviation(text, end) {
                continue;
            }

            ranges.push(start..end);
            start = end;
        }

        if start < text.len() {
            if text[start..].trim().is_empty() {
                // trailing whitespace belongs to the last sentence
                if let Some(last) = ranges.last_mut() {
                    last.end = text.len();
                }
            } else {
                ranges.push(start..text.len());
            }
        }

        ranges
    }

    /// Checks whether the word ending at `end` (including its period) is a known abbreviation.
    fn is_abbreviation(&self, text: &str, end: usize) -> bool {
        let before = &text[..end];
        let word_start = match before.rfind(char::is_whitespace) {
            Some(index) => {
                index
                    + before[index..]
                        .chars()
                        .next()
                        .expect("`index` points at a whitespace char")
                        .len_utf8()
            }
            None => 0,
        };

        self.lang_options
            .abbreviations
            .contains(&utils::normalize(&before[word_start..]))
    }
}

/// An iterator over sentences. See [Tokenizer::tokenize] for the properties of the sentences.
pub struct SentenceIter<'t> {
    text: &'t str,
    splits: Vec<Range<usize>>,
    tokenizer: &'t Tokenizer,
    index: usize,
    position: Position,
}

impl<'t> Iterator for SentenceIter<'t> {
    type Item = Sentence<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index == self.splits.len() {
            return None;
        }

        let range = self.splits[self.index].clone();
        self.index += 1;

        let sentence = self
            .tokenizer
            .tokenize_sentence(&self.text[range.clone()])
            .map(|sentence| sentence.rshift(self.position));

        self.position += Position {
            byte: range.len(),
            char: self.text[range].chars().count(),
        };

        sentence
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenizer() -> Tokenizer {
        Tokenizer::new(TokenizerLangOptions {
            abbreviations: ["e.g.", "dr.", "stb."]
                .iter()
                .map(|x| x.to_string())
                .collect(),
        })
    }

    #[test]
    fn splits_at_terminators() {
        let tokenizer = tokenizer();
        let sentences: Vec<_> = tokenizer
            .tokenize("One sentence. Another one! A third?")
            .collect();

        assert_eq!(sentences.len(), 3);
        assert_eq!(sentences[0].text(), "One sentence.");
        assert_eq!(sentences[1].text(), " Another one!");
        assert_eq!(sentences[2].text(), " A third?");
    }

    #[test]
    fn sentences_have_no_gaps() {
        let tokenizer = tokenizer();
        let text = "First.  Second sentence?! And a trailing rest";
        let sentences: Vec<_> = tokenizer.tokenize(text).collect();

        assert_eq!(sentences[0].span().start(), Position::default());
        for window in sentences.windows(2) {
            assert_eq!(window[0].span().end(), window[1].span().start());
        }
        assert_eq!(sentences.iter().map(|x| x.text()).collect::<String>(), text);
    }

    #[test]
    fn abbreviations_do_not_split() {
        let tokenizer = tokenizer();
        let sentences: Vec<_> = tokenizer
            .tokenize("Dr. Kovács is e.g. here. Another sentence.")
            .collect();

        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].text(), "Dr. Kovács is e.g. here.");
    }

    #[test]
    fn decimals_do_not_split() {
        let tokenizer = tokenizer();
        let sentences: Vec<_> = tokenizer.tokenize("It costs 3.14 dollars. Cheap.").collect();

        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].text(), "It costs 3.14 dollars.");
    }

    #[test]
    fn trailing_whitespace_belongs_to_the_last_sentence() {
        let tokenizer = tokenizer();
        let sentences: Vec<_> = tokenizer.tokenize("A sentence.  \n").collect();

        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0].text(), "A sentence.  \n");
    }

    #[test]
    fn whitespace_only_text_yields_no_sentences() {
        let tokenizer = tokenizer();
        assert!(tokenizer.tokenize("").next().is_none());
        assert!(tokenizer.tokenize(" \t\n ").next().is_none());
    }

    #[test]
    fn token_spans_track_bytes_and_chars() {
        let tokenizer = tokenizer();
        let sentence = tokenizer
            .tokenize_sentence("Ki van plakátolva")
            .expect("`text` contains words");
        let tokens = sentence.tokens();

        assert_eq!(tokens[1].as_str(), "van");
        assert_eq!(*tokens[1].span().byte(), 3usize..6);
        assert_eq!(*tokens[1].span().char(), 3usize..6);
        // `á` is two bytes, one char
        assert_eq!(tokens[2].as_str(), "plakátolva");
        assert_eq!(*tokens[2].span().byte(), 7usize..18);
        assert_eq!(*tokens[2].span().char(), 7usize..17);
    }

    #[test]
    fn second_sentence_spans_are_absolute() {
        let tokenizer = tokenizer();
        let text = "Rövid. Ki van plakátolva a képe.";
        let sentences: Vec<_> = tokenizer.tokenize(text).collect();

        let van = &sentences[1].tokens()[1];
        assert_eq!(van.as_str(), "van");
        assert_eq!(&text[van.span().byte().clone()], "van");
    }

    #[test]
    fn punctuation_becomes_tokens_whitespace_does_not() {
        let tokenizer = tokenizer();
        let sentence = tokenizer
            .tokenize_sentence("Hello, world!")
            .expect("`text` contains words");

        let texts: Vec<_> = sentence.tokens().iter().map(|x| x.as_str()).collect();
        assert_eq!(texts, vec!["Hello", ",", "world", "!"]);
        assert_eq!(sentence.words().count(), 2);
    }
}
