//! Agent module - the iterative research-and-draft loop.
//!
//! The agent follows a "research, decide, draft" pattern:
//! 1. The researcher step asks the LLM for a next action; on a search
//!    directive it queries the web and appends the results to the trail
//! 2. A pure decision predicate routes back to research or on to drafting
//! 3. The drafter step synthesizes the trail into a final answer

mod agent_loop;
mod decision;
mod directive;
mod drafter;
mod prompt;
mod researcher;
mod state;

pub use agent_loop::{Agent, RunReport};
pub use decision::{decide, Route};
pub use directive::Directive;
pub use drafter::run_drafter;
pub use prompt::{build_drafting_prompt, build_research_prompt};
pub use researcher::run_researcher;
pub use state::AgentState;
