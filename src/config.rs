/// Evaluation settings shared by the library entry points and the binary.
///
/// The defaults reproduce plain IEEE-754 arithmetic with no bound on the
/// input size.
///
/// # Example
/// ```
/// use shunt::{Settings, evaluate_with};
///
/// let strict = Settings { strict_arithmetic: true,
///                         ..Settings::default() };
/// assert!(evaluate_with("1/0", &Settings::default()).unwrap().is_infinite());
/// assert!(evaluate_with("1/0", &strict).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    /// Reject division by zero and any infinite or NaN intermediate result
    /// instead of letting them propagate.
    pub strict_arithmetic:  bool,
    /// Longest accepted expression, in characters.
    pub max_expression_len: Option<usize>,
}

impl Settings {
    /// Settings with strict arithmetic turned on.
    #[must_use]
    pub const fn strict() -> Self {
        Self { strict_arithmetic:  true,
               max_expression_len: None, }
    }

    /// Returns a copy limited to `limit` characters of input.
    #[must_use]
    pub const fn with_max_expression_len(mut self, limit: usize) -> Self {
        self.max_expression_len = Some(limit);
        self
    }
}
