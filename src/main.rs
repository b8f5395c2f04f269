//! Deep Research Agent - CLI Entry Point
//!
//! Prompts for a research question, runs the agent loop, and prints the
//! drafted answer (or a diagnostic snapshot when no answer was produced).

use std::io::{self, Write};

use deep_research_agent::{agent::Agent, config::Config};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "deep_research_agent=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load .env and configuration; missing credentials are fatal here,
    // before any loop execution.
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;
    info!("Loaded configuration: model={}", config.model);

    print!("Enter your research question: ");
    io::stdout().flush()?;
    let mut question = String::new();
    io::stdin().read_line(&mut question)?;
    let question = question.trim();
    if question.is_empty() {
        anyhow::bail!("no question provided");
    }

    info!("Starting deep research for: '{}'", question);
    let agent = Agent::new(config);
    let report = agent.run(question).await?;

    println!("\n--- FINAL ANSWER ---");
    match report.final_answer() {
        Some(answer) => println!("{}", answer),
        None => {
            println!("No final answer drafted or an error occurred during drafting.");
            print!("{}", report.snapshot());
        }
    }

    Ok(())
}
