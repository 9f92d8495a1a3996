//! Rule-based content analysis for multiple languages: sentence tokenization,
//! periphrastic passive voice detection and per-keyword scoring.
//!
//! # Overview
//!
//! textrule has the following core abstractions:
//! - An [Analyzer][pipeline::Analyzer] runs the analysis pipeline for one language:
//!   a [Tokenizer][tokenizer::Tokenizer] splits a text into sentences, a
//!   [ClauseSplitter][passive::ClauseSplitter] anchors [SentencePart][types::SentencePart]s
//!   on auxiliary verbs, the participle detector finds passive constructions and a set of
//!   [Assessment][assessment::Assessment]s turns the findings into scores.
//! - A [RuleSet][lexicon::RuleSet] holds the per-language tables driving detection.
//! - A [ResultStore][store::ResultStore] keeps the latest scores per focus keyword
//!   consistent while keywords are added, edited or removed.
//!
//! # Examples
//!
//! Analyze a text for a focus keyword and track the scores:
//!
//! ```no_run
//! use textrule::lang;
//! use textrule::pipeline::AnalysisKind;
//! use textrule::store::{ResultStore, Transition};
//!
//! let analyzer = lang::analyzer("hu")?;
//! let mut store = ResultStore::new();
//!
//! let entry = analyzer.analyze(
//!     "Ki van plakátolva a képe. Mindenki látta már.",
//!     Some("képe"),
//!     AnalysisKind::Seo,
//! )?;
//! assert_eq!(entry.keyword(), Some("képe"));
//!
//! store.apply(Transition::SetSeoResults {
//!     keyword: "képe".into(),
//!     results: entry.into_results(),
//! })?;
//! assert!(store.seo_result("képe").is_some());
//! # Ok::<(), textrule::Error>(())
//! ```
//!
//! Inspect the raw detector output without scoring:
//!
//! ```no_run
//! use textrule::lang;
//!
//! let analyzer = lang::analyzer("hu")?;
//!
//! let research = analyzer.research("Ki van plakátolva a képe.")?;
//! let participle = research.participles()[0].first().expect("`text` is passive.");
//!
//! assert_eq!(participle.text(), "plakátolva");
//! # Ok::<(), textrule::Error>(())
//! ```

// #![warn(missing_docs)]
use std::{
    io::{self, BufReader, Read, Write},
    path::Path,
};

use fs_err::File;
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

pub mod assessment;
pub mod lang;
pub mod lexicon;
pub mod passive;
pub mod pipeline;
pub mod store;
pub mod tokenizer;
pub mod types;
pub(crate) mod utils;

#[derive(Error, Debug)]
#[allow(missing_docs)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    /// (De)serialization error. Can have occured during deserialization or during serialization.
    #[error(transparent)]
    Serialization(#[from] bincode::Error),
    /// No rule set exists for the requested language code. Fatal for the analysis
    /// run which requested it, never for previously stored results.
    #[error("no rule set for language code {0:?}")]
    InvalidLanguage(String),
    /// A detector produced a match outside the sentence part it was given.
    /// Indicates an internal consistency bug, the output of the run is discarded.
    #[error("participle match {found:?} at {span:?} lies outside its sentence part {part:?}")]
    OutOfBoundsMatch {
        found: String,
        span: types::Span,
        part: types::Span,
    },
    /// An update transition targeted a keyword the store does not track.
    #[error("update for untracked keyword {0:?}")]
    UnknownKeywordUpdate(String),
}

/// A serializable component which can be loaded from a binary asset.
pub trait Component: Serialize + DeserializeOwned {
    /// The canonical name of this component.
    fn name() -> &'static str;

    /// Creates this component from a binary at the given path.
    fn new<P: AsRef<Path>>(p: P) -> Result<Self, Error> {
        let reader = BufReader::new(File::open(p.as_ref())?);
        Ok(Self::from_reader(reader)?)
    }

    fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        Ok(bincode::deserialize_from(reader)?)
    }

    fn to_writer<W: Write>(&self, writer: W) -> Result<(), Error> {
        Ok(bincode::serialize_into(writer, self)?)
    }
}
