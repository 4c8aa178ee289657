//! Corpus-based conformance testing.
//!
//! A corpus is a JSON document of test vectors:
//!
//! ```json
//! {
//!   "version": "1",
//!   "vectors": [
//!     {"id": "array_basic", "op": "parse", "input": "[1,2]", "expected": {"ok": [1, 2]}},
//!     {"id": "array_open", "op": "parse", "input": "[1,", "expected": {"err": "E109_UnterminatedArray"}},
//!     {"id": "escapes", "op": "roundtrip", "input": "\"a\\\"b\""},
//!     {"id": "compact", "op": "serialize", "input": "[ 1 , 2 ]", "expected": {"ok": "[1,2]"}}
//!   ]
//! }
//! ```
//!
//! Operations:
//!
//! - `parse`: parse `input`; compare with `{"ok": value}` or `{"err": name}`
//! - `roundtrip`: parse, serialize, parse again and require equal values and a
//!   stable serialization
//! - `serialize`: parse and compare the serialized text with `{"ok": text}`
//!
//! A vector may set `"lenient": true` to parse with [`Limits::lenient`].

use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::{ConformanceError, ConformanceResult};
use crate::json::{parse_with_limits, serialize, JsonValue, Limits};

/// A corpus containing test vectors.
#[derive(Debug, Deserialize)]
pub struct Corpus {
    /// Corpus format version.
    pub version: String,
    /// List of test vectors.
    pub vectors: Vec<TestVector>,
}

/// A single test vector.
#[derive(Debug, Deserialize)]
pub struct TestVector {
    /// Unique identifier for the test.
    pub id: String,
    /// Operation to test ("parse", "roundtrip" or "serialize").
    pub op: String,
    /// Raw JSON text handed to the parser.
    pub input: String,
    /// Expected result (success or error).
    #[serde(default)]
    pub expected: serde_json::Value,
    /// Parse with lenient limits.
    #[serde(default)]
    pub lenient: bool,
}

/// Result of running a single test vector.
#[derive(Debug)]
pub enum TestResult {
    /// Test passed.
    Pass,
    /// Test failed with mismatch.
    Fail {
        /// Expected result from the corpus.
        expected: String,
        /// Actual result from the parser.
        actual: String,
    },
    /// Test was skipped (operation not implemented).
    Skip {
        /// Reason for skipping.
        reason: String,
    },
    /// The vector itself is malformed.
    Error {
        /// Error message.
        message: String,
    },
}

impl TestResult {
    /// Returns true if this is a passing result.
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// Returns true if this is a failing result.
    pub fn is_fail(&self) -> bool {
        matches!(self, Self::Fail { .. })
    }
}

/// Results from running the corpus.
#[derive(Debug, Default)]
pub struct CorpusResults {
    /// Number of tests that passed.
    pub passed: usize,
    /// Number of tests that failed.
    pub failed: usize,
    /// Number of tests that were skipped.
    pub skipped: usize,
    /// Number of tests that errored.
    pub errors: usize,
    /// Detailed results for each test.
    pub details: Vec<(String, TestResult)>,
}

impl CorpusResults {
    /// Create a new empty results container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a test result.
    pub fn record(&mut self, id: &str, result: TestResult) {
        match &result {
            TestResult::Pass => self.passed += 1,
            TestResult::Fail { .. } => self.failed += 1,
            TestResult::Skip { .. } => self.skipped += 1,
            TestResult::Error { .. } => self.errors += 1,
        }
        self.details.push((id.to_string(), result));
    }

    /// Get total number of tests run.
    pub fn total(&self) -> usize {
        self.passed + self.failed + self.skipped + self.errors
    }

    /// Returns true if all tests passed (no failures or errors).
    pub fn all_passed(&self) -> bool {
        self.failed == 0 && self.errors == 0
    }

    /// Get a summary string of the results.
    pub fn summary(&self) -> String {
        format!(
            "{} passed, {} failed, {} skipped, {} errors (total: {})",
            self.passed,
            self.failed,
            self.skipped,
            self.errors,
            self.total()
        )
    }

    /// Get failures and errors.
    pub fn problems(&self) -> Vec<&(String, TestResult)> {
        self.details
            .iter()
            .filter(|(_, r)| matches!(r, TestResult::Fail { .. } | TestResult::Error { .. }))
            .collect()
    }
}

/// Corpus runner that executes test vectors.
pub struct CorpusRunner {
    corpus: Corpus,
}

impl CorpusRunner {
    /// Load corpus from a file path.
    pub fn load<P: AsRef<Path>>(path: P) -> ConformanceResult<Self> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| ConformanceError::IoError(format!("{}: {}", path.as_ref().display(), e)))?;
        Self::from_json(&content)
    }

    /// Build a runner from corpus JSON text.
    pub fn from_json(content: &str) -> ConformanceResult<Self> {
        let corpus: Corpus = serde_json::from_str(content)
            .map_err(|e| ConformanceError::CorpusParseError(e.to_string()))?;
        Ok(Self { corpus })
    }

    /// Get the corpus version.
    pub fn version(&self) -> &str {
        &self.corpus.version
    }

    /// Get the number of test vectors.
    pub fn vector_count(&self) -> usize {
        self.corpus.vectors.len()
    }

    /// Run all test vectors and return results.
    pub fn run_all(&self) -> CorpusResults {
        let mut results = CorpusResults::new();

        for vector in &self.corpus.vectors {
            let result = self.run_vector(vector);
            results.record(&vector.id, result);
        }

        results
    }

    /// Run a single test vector.
    fn run_vector(&self, vector: &TestVector) -> TestResult {
        let limits = if vector.lenient {
            Limits::lenient()
        } else {
            Limits::strict()
        };

        match vector.op.as_str() {
            "parse" => self.run_parse(vector, limits),
            "roundtrip" => self.run_roundtrip(vector, limits),
            "serialize" => self.run_serialize(vector, limits),
            _ => TestResult::Skip {
                reason: format!("Unknown operation: {}", vector.op),
            },
        }
    }

    /// Run parse test.
    fn run_parse(&self, vector: &TestVector, limits: Limits) -> TestResult {
        let result = parse_with_limits(&vector.input, limits);

        if let Some(ok) = vector.expected.get("ok") {
            let expected = JsonValue::from(ok.clone());
            match result {
                Ok(actual) if actual == expected => TestResult::Pass,
                Ok(actual) => TestResult::Fail {
                    expected: expected.to_string(),
                    actual: actual.to_string(),
                },
                Err(e) => TestResult::Fail {
                    expected: expected.to_string(),
                    actual: e.name().to_string(),
                },
            }
        } else if let Some(err) = vector.expected.get("err").and_then(|v| v.as_str()) {
            match result {
                Err(e) if e.name() == err => TestResult::Pass,
                Err(e) => TestResult::Fail {
                    expected: err.to_string(),
                    actual: e.name().to_string(),
                },
                Ok(actual) => TestResult::Fail {
                    expected: err.to_string(),
                    actual: actual.to_string(),
                },
            }
        } else {
            TestResult::Error {
                message: "Expected must contain 'ok' or 'err'".to_string(),
            }
        }
    }

    /// Run roundtrip test.
    fn run_roundtrip(&self, vector: &TestVector, limits: Limits) -> TestResult {
        let first = match parse_with_limits(&vector.input, limits) {
            Ok(v) => v,
            Err(e) => {
                return TestResult::Error {
                    message: format!("Input does not parse: {}", e),
                }
            }
        };

        let text = serialize(&first);
        match parse_with_limits(&text, Limits::strict()) {
            Ok(second) if second == first && serialize(&second) == text => TestResult::Pass,
            Ok(second) => TestResult::Fail {
                expected: text,
                actual: serialize(&second),
            },
            Err(e) => TestResult::Fail {
                expected: text,
                actual: e.name().to_string(),
            },
        }
    }

    /// Run serialize test.
    fn run_serialize(&self, vector: &TestVector, limits: Limits) -> TestResult {
        let Some(expected) = vector.expected.get("ok").and_then(|v| v.as_str()) else {
            return TestResult::Error {
                message: "Expected must contain 'ok' text".to_string(),
            };
        };

        match parse_with_limits(&vector.input, limits) {
            Ok(value) => {
                let actual = serialize(&value);
                if actual == expected {
                    TestResult::Pass
                } else {
                    TestResult::Fail {
                        expected: expected.to_string(),
                        actual,
                    }
                }
            }
            Err(e) => TestResult::Error {
                message: format!("Input does not parse: {}", e),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL_CORPUS: &str = r#"{
        "version": "1",
        "vectors": [
            {"id": "p1", "op": "parse", "input": "[1, 2]", "expected": {"ok": [1, 2]}},
            {"id": "p2", "op": "parse", "input": "[1,", "expected": {"err": "E109_UnterminatedArray"}},
            {"id": "p3", "op": "parse", "input": "null x", "lenient": true, "expected": {"ok": null}},
            {"id": "r1", "op": "roundtrip", "input": "{\"k\": \"a\\\"b\\\\c\"}"},
            {"id": "s1", "op": "serialize", "input": "{ \"b\" : 1 , \"a\" : [ ] }", "expected": {"ok": "{\"a\":[],\"b\":1}"}},
            {"id": "x1", "op": "unknown", "input": ""}
        ]
    }"#;

    #[test]
    fn test_run_small_corpus() {
        let runner = CorpusRunner::from_json(SMALL_CORPUS).unwrap();
        assert_eq!(runner.version(), "1");
        assert_eq!(runner.vector_count(), 6);

        let results = runner.run_all();
        assert!(results.all_passed(), "{:?}", results.problems());
        assert_eq!(results.passed, 5);
        assert_eq!(results.skipped, 1);
        assert_eq!(results.total(), 6);
    }

    #[test]
    fn test_wrong_expectation_fails() {
        let corpus = r#"{"version": "1", "vectors": [
            {"id": "bad", "op": "parse", "input": "[1]", "expected": {"err": "E100_EmptyInput"}},
            {"id": "bad2", "op": "parse", "input": "[1]", "expected": {}}
        ]}"#;
        let results = CorpusRunner::from_json(corpus).unwrap().run_all();
        assert_eq!(results.failed, 1);
        assert_eq!(results.errors, 1);
        assert!(results.details[0].1.is_fail());
        assert_eq!(results.problems().len(), 2);
    }

    #[test]
    fn test_invalid_corpus_rejected() {
        assert!(matches!(
            CorpusRunner::from_json("{\"vectors\": 3}"),
            Err(ConformanceError::CorpusParseError(_))
        ));
        assert!(matches!(
            CorpusRunner::load("/nonexistent/corpus.json"),
            Err(ConformanceError::IoError(_))
        ));
    }
}
