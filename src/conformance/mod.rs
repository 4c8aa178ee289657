//! Conformance testing against a reference implementation and a corpus.
//!
//! Two tools live here:
//!
//! - [`DiffTestHarness`] runs this crate's parser and `serde_json` on the same
//!   input and reports whether they agree (both reject, or both accept with
//!   equal values).
//! - [`CorpusRunner`] executes test vectors from a JSON corpus file whose
//!   expected results are written down explicitly, including the cases where
//!   this parser deliberately differs from `serde_json`.

pub mod corpus;
mod harness;

pub use corpus::{Corpus, CorpusResults, CorpusRunner, TestResult, TestVector};
pub use harness::{BatchResult, DiffResult, DiffTestHarness, ParserOutput};

/// Result type for conformance operations.
pub type ConformanceResult<T> = Result<T, ConformanceError>;

/// Errors that can occur while loading conformance inputs.
#[derive(Debug)]
pub enum ConformanceError {
    /// Corpus file could not be read
    IoError(String),
    /// Corpus file is not a valid corpus document
    CorpusParseError(String),
}

impl std::fmt::Display for ConformanceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IoError(msg) => write!(f, "I/O error: {}", msg),
            Self::CorpusParseError(msg) => write!(f, "Failed to parse corpus: {}", msg),
        }
    }
}

impl std::error::Error for ConformanceError {}
