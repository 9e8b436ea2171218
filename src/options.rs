//! Pipeline configuration options.

/// Options controlling the prepare pipeline.
///
/// All guards are opt-in; the default options make the pipeline total and
/// panic-free on arbitrarily malformed (but well-formed-tree) input.
#[derive(Debug, Clone, Default)]
pub struct PipelineOptions {
    /// Maximum input nesting depth before translation refuses the document.
    ///
    /// `None` (the default) disables the check. The pipeline recurses once
    /// per nesting level, so callers handling untrusted markup should set a
    /// limit their stack can absorb.
    pub max_depth: Option<usize>,

    /// Verify the structural containment invariants between hoisting and
    /// collapsing, failing with
    /// [`Error::InvariantViolation`](crate::Error::InvariantViolation)
    /// instead of letting a bad tree reach the collapser.
    pub validate: bool,
}

impl PipelineOptions {
    /// Create options with defaults (no depth limit, no validation).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum input nesting depth.
    pub fn with_max_depth(mut self, limit: usize) -> Self {
        self.max_depth = Some(limit);
        self
    }

    /// Enable or disable post-hoist structural validation.
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }
}
