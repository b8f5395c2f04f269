//! Parsing of the model's free-text next-step decision.

/// Literal prefix signaling a web search request.
pub const SEARCH_PREFIX: &str = "CALL_TOOL:";

/// Literal substring signaling that no further search is needed.
pub const COMPLETE_MARKER: &str = "RESEARCH_COMPLETE";

/// The model's next-step decision, extracted from a raw completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// Run a web search with the given query.
    Search(String),
    /// The model believes enough information has been gathered.
    Complete(String),
    /// More research is wanted, or the model produced a bare summary.
    Continue(String),
}

impl Directive {
    /// Classify a completion. A leading search prefix wins over a completion
    /// marker appearing later in the same text.
    pub fn parse(decision: &str) -> Self {
        if let Some(query) = decision.strip_prefix(SEARCH_PREFIX) {
            Directive::Search(query.trim().to_string())
        } else if decision.contains(COMPLETE_MARKER) {
            Directive::Complete(decision.to_string())
        } else {
            Directive::Continue(decision.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_prefix_becomes_search_with_trimmed_query() {
        assert_eq!(
            Directive::parse("CALL_TOOL:  rust async history "),
            Directive::Search("rust async history".to_string())
        );
    }

    #[test]
    fn prefix_wins_over_completion_marker() {
        assert_eq!(
            Directive::parse("CALL_TOOL: is RESEARCH_COMPLETE a keyword"),
            Directive::Search("is RESEARCH_COMPLETE a keyword".to_string())
        );
    }

    #[test]
    fn prefix_not_at_start_is_not_a_search() {
        assert_eq!(
            Directive::parse("Maybe CALL_TOOL: something"),
            Directive::Continue("Maybe CALL_TOOL: something".to_string())
        );
    }

    #[test]
    fn marker_anywhere_means_complete() {
        assert_eq!(
            Directive::parse("I think RESEARCH_COMPLETE: enough data"),
            Directive::Complete("I think RESEARCH_COMPLETE: enough data".to_string())
        );
    }

    #[test]
    fn anything_else_is_a_continuation() {
        assert_eq!(
            Directive::parse("RESEARCH_NEEDED more on dates"),
            Directive::Continue("RESEARCH_NEEDED more on dates".to_string())
        );
        assert_eq!(
            Directive::parse("just a summary"),
            Directive::Continue("just a summary".to_string())
        );
    }
}
