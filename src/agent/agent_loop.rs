//! Core agent loop implementation.

use std::sync::Arc;

use tracing::debug;

use crate::config::Config;
use crate::llm::{LlmClient, OpenRouterClient};
use crate::search::{SearchClient, TavilyClient};

use super::decision::{decide, Route};
use super::drafter::run_drafter;
use super::researcher::run_researcher;
use super::state::AgentState;

/// The research agent: config plus the two backend clients.
pub struct Agent {
    config: Config,
    llm: Arc<dyn LlmClient>,
    search: Arc<dyn SearchClient>,
}

impl Agent {
    /// Create a new agent with real backend clients wired from the configuration.
    pub fn new(config: Config) -> Self {
        let llm = Arc::new(OpenRouterClient::new(
            config.model_api_key.clone(),
            config.model.clone(),
        ));
        let search = Arc::new(TavilyClient::new(
            config.search_api_key.clone(),
            config.search_max_results,
        ));

        Self {
            config,
            llm,
            search,
        }
    }

    /// Create an agent with injected backend clients (used by tests).
    pub fn with_clients(
        config: Config,
        llm: Arc<dyn LlmClient>,
        search: Arc<dyn SearchClient>,
    ) -> Self {
        Self {
            config,
            llm,
            search,
        }
    }

    /// Run the loop for one question and return the final state.
    ///
    /// The loop always starts with a researcher step; after each step a pure
    /// predicate routes back to research or on to drafting. The drafter runs
    /// exactly once, then the loop is done.
    pub async fn run(&self, question: &str) -> anyhow::Result<RunReport> {
        let mut state = AgentState::new(question);

        loop {
            state = run_researcher(&state, self.llm.as_ref(), self.search.as_ref()).await?;

            let route = decide(&state, self.config.max_iterations);
            debug!(?route, iterations = state.iterations, "decision step");
            match route {
                Route::Research => continue,
                Route::Draft => break,
            }
        }

        state = run_drafter(&state, self.llm.as_ref()).await?;
        Ok(RunReport { state })
    }
}

/// The outcome of one run.
pub struct RunReport {
    pub state: AgentState,
}

impl RunReport {
    /// The drafted answer, or `None` if the drafter produced nothing.
    pub fn final_answer(&self) -> Option<&str> {
        if self.state.drafted_answer.is_empty() {
            None
        } else {
            Some(&self.state.drafted_answer)
        }
    }

    /// Diagnostic snapshot for runs that ended without an answer.
    pub fn snapshot(&self) -> String {
        let mut out = String::new();
        out.push_str("--- Final State Snapshot ---\n");
        out.push_str(&format!("Question: {}\n", self.state.question));
        out.push_str(&format!("Iterations: {}\n", self.state.iterations));
        out.push_str("Research results:\n");
        for (i, entry) in self.state.research_results.iter().enumerate() {
            out.push_str(&format!("  [{}] {}\n", i + 1, truncate_entry(entry, 100)));
        }
        out
    }
}

/// Truncate a trail entry for the snapshot, respecting char boundaries.
fn truncate_entry(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let mut end = max_len;
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}... [truncated]", &s[..end])
    }
}
