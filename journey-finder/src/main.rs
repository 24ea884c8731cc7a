use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use tracing::{debug, error, info};

use journey_finder::api::{ApiClient, ApiConfig, DEFAULT_SEARCH_LIMIT, SearchRequest};
use journey_finder::orchestrator::{RequestOrchestrator, RequestPhase, TRANSPORT_FAILURE_MESSAGE};
use journey_finder::validate::{RawInput, parse_content_type_selection};
use journey_finder::view::terminal::render_card_text;
use journey_finder::view::{HtmlRegion, Terminal, ViewBindings, build_cards};

/// Content Journey Finder - fill the time you have with movies and shows
#[derive(Parser)]
#[command(name = "journey-finder")]
#[command(about = "Plan a viewing journey that fits a duration", long_about = None)]
struct Cli {
    /// Base URL of the planning service (overrides JOURNEY_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Request timeout in seconds (overrides JOURNEY_API_TIMEOUT_SECS)
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan a journey of roughly the given length
    Plan {
        /// Journey length in minutes (at least 30)
        #[arg(long)]
        duration: String,

        /// What you feel like watching, in your own words
        #[arg(long, default_value = "")]
        preferences: String,

        /// Restrict to one kind of content: any, movie or tv_show
        #[arg(long, default_value = "any")]
        content_type: String,

        /// Also write the rendered HTML fragment to this file
        #[arg(long)]
        html: Option<PathBuf>,
    },

    /// Search for content by keyword
    Search {
        /// What to search for
        query: String,

        /// Maximum number of results
        #[arg(long, default_value_t = DEFAULT_SEARCH_LIMIT)]
        limit: usize,

        /// Use semantic search over previously seen content
        #[arg(long)]
        semantic: bool,
    },

    /// Check that the planning service is up
    Health,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Logs go to stderr; stdout carries only results
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = ApiConfig::from_env();
    if let Some(url) = cli.api_url {
        config = config.with_base_url(url);
    }
    if let Some(secs) = cli.timeout {
        config = config.with_timeout(secs);
    }

    let client = ApiClient::new(config).context("failed to create API client")?;
    debug!(base_url = client.base_url(), "planning service");

    match cli.command {
        Commands::Plan {
            duration,
            preferences,
            content_type,
            html,
        } => {
            let content_type = parse_content_type_selection(&content_type)
                .map_err(|e| anyhow!("invalid --content-type: {e}"))?;
            plan(client, RawInput::new(duration, preferences, content_type), html).await
        }
        Commands::Search {
            query,
            limit,
            semantic,
        } => search(client, SearchRequest::new(query).with_limit(limit), semantic).await,
        Commands::Health => health(client).await,
    }
}

async fn plan(client: ApiClient, input: RawInput, html: Option<PathBuf>) -> Result<ExitCode> {
    let with_html = html.is_some();
    let bindings = ViewBindings::new(
        Terminal,
        (Terminal, with_html.then(HtmlRegion::new)),
        (Terminal, with_html.then(HtmlRegion::new)),
    );
    let orchestrator = RequestOrchestrator::new(client, bindings);

    let phase = orchestrator.submit(&input).await;

    if let Some(path) = html {
        let bindings = orchestrator.bindings();
        let fragment = bindings
            .results
            .1
            .as_ref()
            .and_then(HtmlRegion::html)
            .or_else(|| bindings.error.1.as_ref().and_then(HtmlRegion::html));

        if let Some(fragment) = fragment {
            std::fs::write(&path, fragment)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "wrote HTML fragment");
        }
    }

    Ok(match phase {
        RequestPhase::Success(_) => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    })
}

async fn search(client: ApiClient, request: SearchRequest, semantic: bool) -> Result<ExitCode> {
    let response = if semantic {
        client.semantic_search(&request).await
    } else {
        client.search(&request).await
    };

    match response {
        Ok(response) if response.success => {
            if response.contents.is_empty() {
                println!("No content found for \"{}\"", request.query);
            }
            for (i, card) in build_cards(&response.contents).iter().enumerate() {
                if i > 0 {
                    println!();
                }
                print!("{}", render_card_text(card));
            }
            Ok(ExitCode::SUCCESS)
        }
        Ok(response) => {
            eprintln!("Error: {}", response.error_message());
            Ok(ExitCode::FAILURE)
        }
        Err(e) => {
            error!(error = %e, "search request failed");
            eprintln!("Error: {TRANSPORT_FAILURE_MESSAGE}");
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn health(client: ApiClient) -> Result<ExitCode> {
    match client.health().await {
        Ok(health) => {
            println!("{} ({})", health.status, client.base_url());
            Ok(if health.is_healthy() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Err(e) => {
            error!(error = %e, "health check failed");
            eprintln!("Error: {TRANSPORT_FAILURE_MESSAGE}");
            Ok(ExitCode::FAILURE)
        }
    }
}
