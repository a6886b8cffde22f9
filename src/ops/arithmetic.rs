//! Operation kinds and per-call configuration

/// Binary operation kind
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum BinaryOp {
    /// Power: a^b
    Pow,
}

impl BinaryOp {
    /// Operation name used in diagnostics
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pow => "pow",
        }
    }
}

/// What happens when an element's arithmetic fails
///
/// # Default
///
/// `Strict`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ErrorPolicy {
    /// Abort on the first failing element and report its index and kind.
    /// Elements before it have already been written.
    #[default]
    Strict,
    /// Write the raw computed value (wrapped integer, NaN, infinity) and
    /// keep going
    Permissive,
}

/// Configuration for one dispatch call
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct OpConfig {
    /// Arithmetic error policy
    pub error_policy: ErrorPolicy,
    /// Process only the first `limit` elements
    pub limit: Option<usize>,
}

impl OpConfig {
    /// Strict policy, no limit
    pub const fn new() -> Self {
        Self {
            error_policy: ErrorPolicy::Strict,
            limit: None,
        }
    }

    /// Set the error policy
    pub const fn with_error_policy(mut self, error_policy: ErrorPolicy) -> Self {
        self.error_policy = error_policy;
        self
    }

    /// Shorthand for `with_error_policy(ErrorPolicy::Permissive)`
    pub const fn permissive(self) -> Self {
        self.with_error_policy(ErrorPolicy::Permissive)
    }

    /// Limit processing to the first `limit` elements
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}
