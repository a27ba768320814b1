//! Marquee CLI - interactive movie search
//!
//! Reads queries from stdin, drives the search pipeline, and renders the
//! committed result set as text cards. Presentation only; the pipeline
//! itself lives in marquee-app and marquee-search.

mod render;

use std::io::Write;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use marquee_app::{LogNotifier, Notify, SearchBar, SearchOrchestrator};
use marquee_search::{DemoProvider, HttpSearchClient, MovieSearch, SearchConfig};

#[derive(Parser)]
#[command(name = "marquee")]
#[command(about = "A movie search client")]
struct Cli {
    /// Base URL of the search backend
    #[arg(long, default_value = "http://localhost:8080")]
    base_url: String,

    /// Use canned demo results instead of the network
    #[arg(long)]
    demo: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let provider: Arc<dyn MovieSearch> = if cli.demo {
        Arc::new(DemoProvider::new())
    } else {
        Arc::new(HttpSearchClient::new(SearchConfig::new(&cli.base_url)?))
    };
    tracing::info!(base_url = %cli.base_url, demo = cli.demo, "search client configured");

    let notifier: Arc<dyn Notify> = Arc::new(LogNotifier);
    let (events_tx, events_rx) = mpsc::unbounded_channel();
    let mut search_bar = SearchBar::new(events_tx.clone(), Arc::clone(&notifier));
    let mut orchestrator = SearchOrchestrator::new(provider, notifier, events_rx, events_tx);

    println!("Search for movies. Commands: :detail N, :quit");
    prompt()?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = line.trim();
        if command == ":quit" {
            break;
        }

        if let Some(selector) = command.strip_prefix(":detail") {
            render::detail(orchestrator.state(), selector.trim());
        } else {
            search_bar.set_input(line);
            search_bar.submit();
            orchestrator.run_until_idle().await;
            render::cards(orchestrator.state());
        }
        prompt()?;
    }

    Ok(())
}

fn prompt() -> Result<()> {
    print!("> ");
    std::io::stdout().flush()?;
    Ok(())
}
