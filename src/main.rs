// src/main.rs
// job-links - MCP tool server for finding recent job postings

use anyhow::Result;
use clap::{Parser, Subcommand};
use job_links::config::{EnvConfig, JobLinksConfig, SerperConfig, config_dir};
use job_links::http::create_shared_client;
use job_links::mcp::{JobLinksServer, ToolRegistry, tools::build_registry};
use job_links::search::types::DEFAULT_PLATFORM;
use job_links::search::{JobSearch, SearchRequest, SerperClient};
use std::sync::Arc;
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "job-links")]
#[command(about = "Find recent job postings on job boards via web search")]
#[command(version)]
struct Cli {
    /// Verbose logging (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run as MCP server over stdio (default)
    Serve,

    /// Run one search and print the result as JSON
    Search {
        /// Search query, e.g. "Software Engineer New York"
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Job board to search
        #[arg(short, long, default_value = DEFAULT_PLATFORM)]
        platform: String,
    },

    /// Print the registered tool definitions
    Tools,
}

/// Resolve configuration and wire the search pipeline into a tool registry
fn build_tools() -> Result<ToolRegistry> {
    let env = EnvConfig::load();
    let file = JobLinksConfig::load();
    let serper = SerperConfig::resolve(&env, &file);

    let validation = serper.validate();
    for warning in &validation.warnings {
        warn!("{}", warning);
    }
    if !validation.is_valid() {
        anyhow::bail!("invalid configuration\n{}", validation.report());
    }

    let client = SerperClient::new(serper, create_shared_client());
    let search = JobSearch::new(Arc::new(client));
    Ok(build_registry(search)?)
}

async fn run_mcp_server() -> Result<()> {
    let registry = build_tools()?;
    info!(tools = registry.len(), "Starting MCP server for job search");

    let server = JobLinksServer::new(Arc::new(registry));

    // Run with stdio transport
    let transport = rmcp::transport::io::stdio();
    let service = rmcp::serve_server(server, transport).await?;
    service.waiting().await?;

    Ok(())
}

async fn run_search(query: Vec<String>, platform: String) -> Result<()> {
    let registry = build_tools()?;
    let request = SearchRequest::from_words(query.as_slice(), platform);

    let arguments = match serde_json::to_value(&request)? {
        serde_json::Value::Object(map) => map,
        _ => anyhow::bail!("search request did not serialize to an object"),
    };
    let outcome = registry
        .call(job_links::mcp::tools::jobs::NAME, arguments)
        .await?;

    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}

fn run_tools() -> Result<()> {
    let registry = build_tools()?;
    println!("{}", serde_json::to_string_pretty(&registry.definitions())?);
    Ok(())
}

/// WARN keeps `serve` quiet; the per-search INFO lines need `-v` there
fn log_level(command: Option<&Commands>, verbose: bool) -> Level {
    match (command, verbose) {
        (_, true) => Level::DEBUG,
        (Some(Commands::Serve) | None, false) => Level::WARN,
        (Some(Commands::Search { .. }) | Some(Commands::Tools), false) => Level::INFO,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env files. Existing variables are never overwritten, so the
    // process environment wins, then the project .env, then ~/.job-links/.env
    let _ = dotenvy::dotenv();
    let _ = dotenvy::from_path(config_dir().join(".env"));

    let cli = Cli::parse();

    let level = log_level(cli.command.as_ref(), cli.verbose);

    // stdout belongs to the MCP channel, so logs always go to stderr
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        None | Some(Commands::Serve) => run_mcp_server().await?,
        Some(Commands::Search { query, platform }) => run_search(query, platform).await?,
        Some(Commands::Tools) => run_tools()?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("job-links").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_search_collects_query_words() {
        let cli = parse(&["search", "Software", "Engineer", "New", "York"]);
        let Some(Commands::Search { query, platform }) = cli.command else {
            panic!("expected search subcommand");
        };
        let request = SearchRequest::from_words(query.as_slice(), platform);
        assert_eq!(request.query, "Software Engineer New York");
        assert_eq!(request.platform, DEFAULT_PLATFORM);
    }

    #[test]
    fn test_search_platform_flag() {
        let cli = parse(&["search", "nurse", "--platform", "Indeed"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Search { ref platform, .. }) if platform == "Indeed"
        ));
    }

    #[test]
    fn test_search_requires_a_query() {
        assert!(Cli::try_parse_from(["job-links", "search"]).is_err());
    }

    #[test]
    fn test_serve_is_the_default() {
        let cli = parse(&[]);
        assert!(cli.command.is_none());
        assert_eq!(log_level(cli.command.as_ref(), cli.verbose), Level::WARN);
    }

    #[test]
    fn test_log_levels() {
        assert_eq!(log_level(Some(&Commands::Serve), false), Level::WARN);
        assert_eq!(log_level(Some(&Commands::Tools), false), Level::INFO);
        assert_eq!(log_level(Some(&Commands::Serve), true), Level::DEBUG);

        let cli = parse(&["-v", "search", "x"]);
        assert_eq!(log_level(cli.command.as_ref(), cli.verbose), Level::DEBUG);
    }
}
