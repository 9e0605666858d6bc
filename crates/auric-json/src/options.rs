//! Parser configuration.
//!
//! Recursion depth equals JSON nesting depth, so pathologically nested input can
//! exhaust the call stack. The default limit keeps the parser safe on untrusted
//! input; [`ParseOptions::unbounded`] removes it for trusted documents.

/// Default maximum nesting depth for arrays and objects.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Options controlling a parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum number of nested containers. `None` disables the check.
    pub max_depth: Option<usize>,
}

impl ParseOptions {
    /// Default options: depth limited to [`DEFAULT_MAX_DEPTH`].
    pub const fn new() -> Self {
        Self {
            max_depth: Some(DEFAULT_MAX_DEPTH),
        }
    }

    /// No nesting limit. Deep enough input will overflow the stack.
    pub const fn unbounded() -> Self {
        Self { max_depth: None }
    }

    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::new()
    }
}
