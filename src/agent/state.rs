//! Shared run state threaded through the agent steps.

/// The state of one question-answering run.
///
/// Steps never mutate a state in place: `with_research` and `with_answer`
/// return new values, so the iteration counter never decreases and the
/// research trail is append-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentState {
    /// The question being researched, set once at start.
    pub question: String,

    /// Append-only trail of research snippets, thoughts, and diagnostics.
    pub research_results: Vec<String>,

    /// Empty until the drafter step runs.
    pub drafted_answer: String,

    /// Number of researcher invocations so far.
    pub iterations: u32,
}

impl AgentState {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            research_results: Vec::new(),
            drafted_answer: String::new(),
            iterations: 0,
        }
    }

    /// New state with the given entries appended to the trail and the
    /// iteration counter advanced by one.
    pub fn with_research(&self, entries: Vec<String>) -> Self {
        let mut research_results = self.research_results.clone();
        research_results.extend(entries);
        Self {
            research_results,
            iterations: self.iterations + 1,
            ..self.clone()
        }
    }

    /// New state with the drafted answer set.
    pub fn with_answer(&self, answer: impl Into<String>) -> Self {
        Self {
            drafted_answer: answer.into(),
            ..self.clone()
        }
    }

    /// The joined research trail, or `placeholder` when no research exists yet.
    pub fn trail_or(&self, placeholder: &str) -> String {
        if self.research_results.is_empty() {
            placeholder.to_string()
        } else {
            self.research_results.join("\n")
        }
    }

    /// The most recent trail entry, if any.
    pub fn last_entry(&self) -> Option<&str> {
        self.research_results.last().map(String::as_str)
    }
}
