//! Drafter step: synthesize the research trail into a final answer.

use tracing::{debug, info};

use crate::llm::LlmClient;

use super::prompt::build_drafting_prompt;
use super::state::AgentState;

/// Placeholder used in the prompt when the trail is empty.
pub const NO_RESEARCH: &str = "No research provided.";

/// Run the single drafting invocation and return the new state.
///
/// The model's response is stored verbatim; there is no quality validation
/// and no retry.
pub async fn run_drafter(state: &AgentState, llm: &dyn LlmClient) -> anyhow::Result<AgentState> {
    info!("drafter step");

    let context = state.trail_or(NO_RESEARCH);
    let (system, user) = build_drafting_prompt(&state.question, &context);
    let response = llm.complete(&system, &user).await?;

    debug!("drafter produced an answer");
    Ok(state.with_answer(response))
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::llm::{LlmClient, LlmError};

    use super::*;

    struct RecordingLlm {
        reply: &'static str,
        calls: Mutex<Vec<(String, String)>>,
    }

    impl RecordingLlm {
        fn new(reply: &'static str) -> Self {
            Self {
                reply,
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl LlmClient for RecordingLlm {
        async fn complete(&self, system: &str, user: &str) -> Result<String, LlmError> {
            self.calls
                .lock()
                .unwrap()
                .push((system.to_string(), user.to_string()));
            Ok(self.reply.to_string())
        }
    }

    #[tokio::test]
    async fn stores_the_response_verbatim() {
        let llm = RecordingLlm::new("Final Answer: blue, because of Rayleigh scattering.");
        let state = AgentState::new("Why is the sky blue?")
            .with_research(vec!["Source: u1\nContent: scattering".to_string()]);

        let drafted = run_drafter(&state, &llm).await.unwrap();

        assert_eq!(
            drafted.drafted_answer,
            "Final Answer: blue, because of Rayleigh scattering."
        );
        // Drafting leaves the trail and the counter alone.
        assert_eq!(drafted.research_results, state.research_results);
        assert_eq!(drafted.iterations, state.iterations);

        let calls = llm.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].0.contains("Source: u1"));
    }

    #[tokio::test]
    async fn empty_trail_uses_placeholder_in_prompt() {
        let llm = RecordingLlm::new("best effort answer");
        let state = AgentState::new("Q");

        let drafted = run_drafter(&state, &llm).await.unwrap();

        assert_eq!(drafted.drafted_answer, "best effort answer");
        let calls = llm.calls.lock().unwrap();
        assert!(calls[0].0.contains(NO_RESEARCH));
    }
}
