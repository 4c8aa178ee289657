//! Parse limits.
//!
//! The grammar recurses once per nested array or object, so nesting depth is
//! bounded here instead of by the call stack. Input size and trailing-content
//! handling are configured alongside it.

/// Limits and policy applied by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum total input size in bytes (E116)
    pub max_input_size: u64,
    /// Maximum nesting depth for arrays/objects (E111)
    pub max_nesting_depth: u64,
    /// Ignore anything after the first complete value instead of failing (E114)
    pub allow_trailing_content: bool,
}

impl Limits {
    /// Default limits: the whole buffer must be one JSON document.
    pub const fn strict() -> Self {
        Self {
            max_input_size: 64 * 1024 * 1024, // 64 MiB
            max_nesting_depth: 128,
            allow_trailing_content: false,
        }
    }

    /// Lenient limits: no size cap, deeper nesting, and trailing content after
    /// the first value is ignored.
    pub const fn lenient() -> Self {
        Self {
            max_input_size: u64::MAX,
            max_nesting_depth: 512,
            allow_trailing_content: true,
        }
    }

    /// Replace the nesting depth limit.
    pub const fn with_max_nesting_depth(mut self, depth: u64) -> Self {
        self.max_nesting_depth = depth;
        self
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::strict()
    }
}
