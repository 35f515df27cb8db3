//! Failure report text for render matchers.
//!
//! Every function here is pure: the same arguments always give the same text,
//! so reports can be compared verbatim in tests.

/// Registered name of the rerender-occurred matcher.
pub const TO_RERENDER: &str = "toRerender";

/// Registered name of the render-count matcher.
pub const TO_RENDER_EXACTLY_TIMES: &str = "toRenderExactlyTimes";

/// Header line naming the matcher, e.g. `expect(received).not.toRerender(expected)`.
#[must_use]
pub fn matcher_hint(matcher_name: &str, negated: bool) -> String {
    let not = if negated { "not." } else { "" };
    format!("expect(received).{not}{matcher_name}(expected)")
}

/// Explanation line for the rerender-occurred matcher.
#[must_use]
pub fn rerender_body(negated: bool) -> String {
    if negated {
        "Expected component to not rerender, but it did.".to_string()
    } else {
        "Expected component to rerender, but it did not.".to_string()
    }
}

/// Explanation lines for the render-count matcher.
#[must_use]
pub fn render_count_body(negated: bool, expected: usize, actual: usize) -> String {
    let to = if negated { "to not" } else { "to" };
    format!("Expected component {to} render exactly {expected} times.\nIt rendered {actual} times.")
}

/// Full report: header, blank line, body.
#[must_use]
pub fn report(matcher_name: &str, negated: bool, body: &str) -> String {
    format!("{}\n\n{body}", matcher_hint(matcher_name, negated))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matcher_hint() {
        assert_eq!(
            matcher_hint(TO_RERENDER, false),
            "expect(received).toRerender(expected)"
        );
        assert_eq!(
            matcher_hint(TO_RENDER_EXACTLY_TIMES, true),
            "expect(received).not.toRenderExactlyTimes(expected)"
        );
    }

    #[test]
    fn test_rerender_report() {
        assert_eq!(
            report(TO_RERENDER, true, &rerender_body(true)),
            "expect(received).not.toRerender(expected)\n\nExpected component to not rerender, but it did."
        );
        assert_eq!(
            report(TO_RERENDER, false, &rerender_body(false)),
            "expect(received).toRerender(expected)\n\nExpected component to rerender, but it did not."
        );
    }

    #[test]
    fn test_render_count_body() {
        assert_eq!(
            render_count_body(false, 3, 2),
            "Expected component to render exactly 3 times.\nIt rendered 2 times."
        );
        assert_eq!(
            render_count_body(true, 2, 2),
            "Expected component to not render exactly 2 times.\nIt rendered 2 times."
        );
    }
}
