use anyhow::Result;
use clap::{Parser, Subcommand};
use multipath::app::engine::RouteEngine;
use multipath::cli;
use multipath::domain::edge::EdgeId;
use multipath::server::{http, mcp::MultipathMcpServer};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mpath")]
#[command(version, about = "Resolve shortest paths between edges of a trail network")]
struct Cli {
    /// Network graph JSON file
    #[arg(env = "MULTIPATH_GRAPH")]
    graph: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show graph size
    Info,
    /// Compute the path between two edges
    Resolve {
        from: EdgeId,
        to: EdgeId,
        /// Print the full response as JSON
        #[arg(long)]
        json: bool,
    },
    /// Describe one edge
    Edge { id: EdgeId },
    /// Measure a polyline given as LAT,LNG points
    Measure {
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        points: Vec<String>,
    },
    /// Serve the HTTP API
    Serve {
        #[arg(long, env = "MULTIPATH_ADDR", default_value = "127.0.0.1:8080")]
        addr: SocketAddr,
    },
    /// Serve MCP tools over stdio
    Mcp,
}

#[tokio::main]
async fn main() -> Result<()> {
    // stderr keeps stdout free for command output and the MCP transport
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();
    let engine = RouteEngine::load_from_json(&args.graph)?;

    match args.command {
        Command::Info => cli::display_graph_info(&engine)?,
        Command::Resolve { from, to, json } => cli::resolve_path(&engine, from, to, json)?,
        Command::Edge { id } => cli::display_edge(&engine, id)?,
        Command::Measure { points } => cli::measure_distance(&engine, &points)?,
        Command::Serve { addr } => http::serve(engine, addr).await?,
        Command::Mcp => MultipathMcpServer::new(engine).serve_stdio().await?,
    }

    Ok(())
}
