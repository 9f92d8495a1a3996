//! Built-in rule sets and ready-made analyzers for the supported languages.

use crate::pipeline::Analyzer;
use crate::Error;

pub mod en;
pub mod hu;

/// Creates the analyzer for the given ISO 639-1 language code.
///
/// # Errors
/// - If no rule set exists for the language code.
pub fn analyzer(code: &str) -> Result<Analyzer, Error> {
    match code {
        "hu" => Ok(hu::analyzer()),
        "en" => Ok(en::analyzer()),
        _ => Err(Error::InvalidLanguage(code.into())),
    }
}
