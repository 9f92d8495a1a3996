use unicode_normalization::UnicodeNormalization;

/// Normalizes a word for table lookup: NFC composition, then lowercasing.
/// Keeps diacritics but makes canonically equal spellings compare equal.
pub(crate) fn normalize(word: &str) -> String {
    word.nfc().collect::<String>().to_lowercase()
}

/// The first paragraph of a text: everything up to the first blank line.
pub(crate) fn first_paragraph(text: &str) -> &str {
    text.find("\n\n").map_or(text, |index| &text[..index])
}
