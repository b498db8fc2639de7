//! Research Partner - Entry Point
//!
//! Runs the stdio tool server by default; other subcommands call tools and
//! manage bookmarks from the shell.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use research_partner::bookmarks::BookmarkStore;
use research_partner::config::{Config, api, default_data_dir};
use research_partner::models::Payload;
use research_partner::server::ToolServer;
use research_partner::{
    CitationStyle, FileBlobStore, ResearchClient, ToolContext, ToolRegistry, format_citation,
};

#[derive(Parser, Debug)]
#[command(name = "research-partner")]
#[command(about = "Paper and dataset discovery tools for research agents")]
#[command(version)]
struct Cli {
    /// Semantic Scholar API host
    #[arg(long, env = "SEMANTIC_SCHOLAR_BASE_URL", default_value = api::SEMANTIC_SCHOLAR_BASE)]
    semantic_scholar_url: String,

    /// Hugging Face host
    #[arg(long, env = "HUGGINGFACE_BASE_URL", default_value = api::HUGGINGFACE_BASE)]
    huggingface_url: String,

    /// Directory holding bookmarks
    #[arg(long, env = "RESEARCH_PARTNER_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the stdio tool server (default)
    Serve,
    /// List tools and their parameters
    Tools,
    /// Run one tool and print its result envelope
    Call {
        /// Tool name, e.g. searchPapers
        tool: String,
        /// JSON arguments
        #[arg(default_value = "{}")]
        args: String,
    },
    /// Manage bookmarks
    Bookmarks {
        #[command(subcommand)]
        action: BookmarkAction,
    },
    /// Format a bookmarked paper as a citation
    Cite {
        /// Exact paper title
        title: String,
        /// Citation style
        #[arg(long, value_enum, default_value_t = CitationStyle::Apa)]
        style: CitationStyle,
    },
}

#[derive(Subcommand, Debug)]
enum BookmarkAction {
    /// Print bookmarked papers
    List,
    /// Fetch a paper by ID and bookmark it
    Add {
        /// Semantic Scholar paper ID
        paper_id: String,
    },
    /// Remove a bookmark by title
    Remove {
        /// Exact paper title
        title: String,
    },
    /// Remove every bookmark
    Clear,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    // Stdout belongs to the protocol.
    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)).init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

fn registry(config: &Config) -> anyhow::Result<ToolRegistry> {
    let client = ResearchClient::new(config)?;
    Ok(ToolRegistry::new(ToolContext::new(Arc::new(client))))
}

fn bookmark_store(config: &Config) -> BookmarkStore<FileBlobStore> {
    let (store, error) = BookmarkStore::load(FileBlobStore::new(&config.data_dir));
    if let Some(err) = error {
        tracing::warn!(error = %err, "Starting with no bookmarks");
    }
    store
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    let data_dir = cli.data_dir.unwrap_or_else(default_data_dir);
    let config = Config::validated(&cli.semantic_scholar_url, &cli.huggingface_url, data_dir)?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            tracing::info!(
                version = env!("CARGO_PKG_VERSION"),
                graph_api = %config.graph_api_url,
                hub_api = %config.hub_api_url,
                "Starting research-partner tool server"
            );
            let client = ResearchClient::new(&config)?;
            ToolServer::new(client).run_stdio().await?;
        }
        Command::Tools => {
            for tool in registry(&config)?.list() {
                println!("{}\n  {}", tool.name, tool.description);
                for param in &tool.parameters {
                    let required = if param.required { "required" } else { "optional" };
                    println!("  - {} ({required}): {}", param.name, param.description);
                }
            }
        }
        Command::Call { tool, args } => {
            let args: serde_json::Value =
                serde_json::from_str(&args).context("Arguments must be a JSON object")?;
            let envelope = registry(&config)?
                .call(&tool, args)
                .await
                .with_context(|| format!("Unknown tool: {tool}"))?;
            println!("{}", serde_json::to_string_pretty(&envelope)?);
        }
        Command::Bookmarks { action } => run_bookmarks(&config, action).await?,
        Command::Cite { title, style } => {
            let store = bookmark_store(&config);
            let paper = store
                .get(&title)
                .with_context(|| format!("\"{title}\" is not bookmarked"))?;
            println!("{}", format_citation(paper, style));
        }
    }

    Ok(())
}

async fn run_bookmarks(config: &Config, action: BookmarkAction) -> anyhow::Result<()> {
    let mut store = bookmark_store(config);

    match action {
        BookmarkAction::List => {
            if store.is_empty() {
                println!("No bookmarks.");
            }
            for paper in store.list() {
                println!("{} ({}) - {}", paper.title, paper.year, paper.authors);
            }
        }
        BookmarkAction::Add { paper_id } => {
            let envelope = registry(config)?
                .call("getPaperDetails", serde_json::json!({ "paperId": paper_id }))
                .await
                .context("getPaperDetails is not registered")?;
            let Payload::Details { paper: Some(details) } = envelope.payload else {
                anyhow::bail!(envelope.message);
            };
            let title = details.paper.title.clone();
            store.add(details.paper)?;
            println!("Bookmarked \"{title}\"");
        }
        BookmarkAction::Remove { title } => {
            if store.remove(&title)? {
                println!("Removed \"{title}\"");
            } else {
                println!("\"{title}\" was not bookmarked");
            }
        }
        BookmarkAction::Clear => {
            store.clear()?;
            println!("Cleared all bookmarks");
        }
    }

    Ok(())
}
