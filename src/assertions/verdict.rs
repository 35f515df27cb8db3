//! Matcher verdicts.

use std::fmt;

/// Negation state the front-end evaluates a matcher under.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchContext {
    /// Whether the assertion was negated with `.not()`.
    pub is_not: bool,
}

impl MatchContext {
    /// Context for a negated assertion.
    #[must_use]
    pub fn negated() -> Self {
        Self { is_not: true }
    }
}

/// Result of evaluating a render matcher, before negation is applied.
pub struct Verdict {
    /// Whether the unnegated expectation holds.
    pub pass: bool,
    message: Box<dyn Fn() -> String + Send + Sync>,
}

impl Verdict {
    /// Create a verdict with a lazily built message.
    pub fn new(pass: bool, message: impl Fn() -> String + Send + Sync + 'static) -> Self {
        Self {
            pass,
            message: Box::new(message),
        }
    }

    /// The failure report.
    #[must_use]
    pub fn message(&self) -> String {
        (self.message)()
    }

    /// Whether the assertion holds once negation is applied.
    #[must_use]
    pub fn holds(&self, ctx: MatchContext) -> bool {
        self.pass != ctx.is_not
    }
}

impl fmt::Debug for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Verdict")
            .field("pass", &self.pass)
            .field("message", &self.message())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negation_flips_outcome() {
        let verdict = Verdict::new(true, || "rendered".to_string());

        assert!(verdict.holds(MatchContext::default()));
        assert!(!verdict.holds(MatchContext::negated()));
        assert_eq!(verdict.message(), "rendered");
    }
}
