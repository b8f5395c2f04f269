//! Researcher step: ask the model for a next action, run searches, grow the trail.

use tracing::{debug, info, warn};

use crate::llm::LlmClient;
use crate::search::{SearchClient, SearchItem, SearchOutcome};

use super::directive::Directive;
use super::prompt::build_research_prompt;
use super::state::AgentState;

/// Placeholder used in the prompt before any research exists.
pub const NO_PRIOR_RESEARCH: &str = "No prior research conducted.";

/// Run one researcher invocation and return the new state.
///
/// Search failures of any kind are folded into the trail as diagnostic
/// entries; the iteration counter advances either way. A model invocation
/// error propagates and aborts the run.
pub async fn run_researcher(
    state: &AgentState,
    llm: &dyn LlmClient,
    search: &dyn SearchClient,
) -> anyhow::Result<AgentState> {
    info!(iteration = state.iterations + 1, "researcher step");

    let context = state.trail_or(NO_PRIOR_RESEARCH);
    let (system, user) = build_research_prompt(&state.question, &context);
    let decision = llm.complete(&system, &user).await?;

    let entries = match Directive::parse(&decision) {
        Directive::Search(query) => {
            debug!(%query, "researcher requested a search");
            match search.search(&query).await {
                Ok(outcome) => entries_from_outcome(outcome),
                Err(e) => {
                    warn!(error = %e, "search invocation failed");
                    vec![format!("Error searching for '{}': {}", query, e)]
                }
            }
        }
        Directive::Complete(text) => {
            debug!("researcher declared research complete");
            vec![format!("Researcher concluded: {}", text)]
        }
        Directive::Continue(text) => {
            debug!("researcher suggests more steps or provided a summary");
            vec![format!("Researcher's thoughts: {}", text)]
        }
    };

    debug!(count = entries.len(), "appending research entries");
    Ok(state.with_research(entries))
}

/// Format a normalized search outcome into trail entries.
fn entries_from_outcome(outcome: SearchOutcome) -> Vec<String> {
    match outcome {
        SearchOutcome::Results(items) if items.is_empty() => {
            vec!["Search returned no structured results.".to_string()]
        }
        SearchOutcome::Results(items) => items
            .into_iter()
            .map(|item| match item {
                SearchItem::Record(record) => {
                    format!("Source: {}\nContent: {}", record.url, record.content)
                }
                SearchItem::Malformed(value) => {
                    format!("Problematic search result item: {}", value)
                }
            })
            .collect(),
        SearchOutcome::ApiError(message) => {
            vec![format!("Search API error: {}", message)]
        }
        SearchOutcome::UnhandledShape(value) => {
            vec![format!("Unhandled search response shape: {}", value)]
        }
    }
}
