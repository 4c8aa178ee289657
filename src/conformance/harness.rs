//! Differential test harness comparing this parser with `serde_json`.
//!
//! Known, intentional differences (these report as mismatches):
//!
//! - leading zeros, `.5` and `5.` are accepted here and rejected by serde_json
//! - raw control characters inside strings are accepted here
//! - `\u` surrogate escapes are rejected here and decoded by serde_json

use crate::json::{parse_with_limits, JsonValue, Limits};

/// What one implementation made of an input.
#[derive(Debug, Clone, PartialEq)]
pub enum ParserOutput {
    /// The input was accepted.
    Value(JsonValue),
    /// The input was rejected, with the implementation's message.
    Error(String),
}

impl ParserOutput {
    /// Returns true if the input was accepted.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    fn agrees_with(&self, other: &ParserOutput) -> bool {
        match (self, other) {
            (Self::Value(a), Self::Value(b)) => a == b,
            (Self::Error(_), Self::Error(_)) => true,
            _ => false,
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::Value(v) => format!("ok: {}", v),
            Self::Error(e) => format!("err: {}", e),
        }
    }
}

/// Result of a differential test.
#[derive(Debug)]
pub enum DiffResult {
    /// Both implementations produced the same outcome.
    Match {
        /// The agreed outcome.
        output: ParserOutput,
    },
    /// Implementations disagreed.
    Mismatch {
        /// Input text.
        input: String,
        /// This crate's outcome.
        ours: ParserOutput,
        /// serde_json's outcome.
        reference: ParserOutput,
    },
}

impl DiffResult {
    /// Check if the result is a match.
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Match { .. })
    }

    /// Check if the result is a mismatch.
    pub fn is_mismatch(&self) -> bool {
        matches!(self, Self::Mismatch { .. })
    }

    /// Human-readable description of a mismatch, empty for a match.
    pub fn to_report(&self) -> String {
        match self {
            Self::Match { .. } => String::new(),
            Self::Mismatch {
                input,
                ours,
                reference,
            } => format!(
                "input:      {:?}\nminijson:   {}\nserde_json: {}\n",
                input,
                ours.describe(),
                reference.describe()
            ),
        }
    }
}

/// Differential test harness.
pub struct DiffTestHarness {
    limits: Limits,
}

impl DiffTestHarness {
    /// Create a harness using strict limits, which match serde_json's
    /// whole-document behavior.
    pub fn new() -> Self {
        Self::with_limits(Limits::strict())
    }

    /// Create a harness with custom limits for this crate's parser.
    pub fn with_limits(limits: Limits) -> Self {
        Self { limits }
    }

    /// Run this crate's parser.
    pub fn run_ours(&self, input: &str) -> ParserOutput {
        match parse_with_limits(input, self.limits) {
            Ok(value) => ParserOutput::Value(value),
            Err(e) => ParserOutput::Error(format!("{}: {}", e.name(), e)),
        }
    }

    /// Run the reference parser.
    pub fn run_reference(&self, input: &str) -> ParserOutput {
        match serde_json::from_str::<serde_json::Value>(input) {
            Ok(value) => ParserOutput::Value(JsonValue::from(value)),
            Err(e) => ParserOutput::Error(e.to_string()),
        }
    }

    /// Compare both parsers on one input.
    pub fn compare(&self, test_name: &str, input: &str) -> DiffResult {
        let ours = self.run_ours(input);
        let reference = self.run_reference(input);

        if ours.agrees_with(&reference) {
            DiffResult::Match { output: ours }
        } else {
            tracing::debug!(test = test_name, "differential mismatch");
            DiffResult::Mismatch {
                input: input.to_string(),
                ours,
                reference,
            }
        }
    }

    /// Run a batch of differential tests.
    pub fn run_batch<'a>(&self, tests: impl Iterator<Item = (&'a str, &'a str)>) -> BatchResult {
        let mut results = BatchResult::new();

        for (name, input) in tests {
            match self.compare(name, input) {
                DiffResult::Match { .. } => results.passed += 1,
                mismatch @ DiffResult::Mismatch { .. } => {
                    results.failed += 1;
                    results.failures.push((name.to_string(), mismatch));
                }
            }
        }

        results
    }
}

impl Default for DiffTestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Results from running a batch of differential tests.
#[derive(Debug, Default)]
pub struct BatchResult {
    /// Number of tests where both parsers agreed.
    pub passed: usize,
    /// Number of tests where they disagreed.
    pub failed: usize,
    /// Name and details of each disagreement.
    pub failures: Vec<(String, DiffResult)>,
}

impl BatchResult {
    /// Create a new empty batch result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if every test agreed.
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Get a summary string of the results.
    pub fn summary(&self) -> String {
        format!(
            "{} passed, {} failed (total: {})",
            self.passed,
            self.failed,
            self.passed + self.failed
        )
    }
}
