//! # Deep Research Agent
//!
//! A minimal iterative research-and-draft agent.
//!
//! This library provides:
//! - A research loop that asks an LLM whether to search the web or conclude
//! - A web search adapter that normalizes backend responses into a closed shape
//! - A drafting step that synthesizes the accumulated research into an answer
//!
//! ## Architecture
//!
//! The agent follows a research-then-decide pattern:
//! 1. The researcher step asks the LLM for a next action and grows the research trail
//! 2. A pure decision predicate routes back to research or on to drafting
//! 3. The drafter step synthesizes the trail into a final answer
//!
//! ## Example
//!
//! ```rust,ignore
//! use deep_research_agent::{agent::Agent, config::Config};
//!
//! let config = Config::from_env()?;
//! let agent = Agent::new(config);
//! let report = agent.run("What is the capital of France?").await?;
//! ```

pub mod agent;
pub mod config;
pub mod llm;
pub mod search;

pub use config::Config;
