//! StockView CLI — headless access to the catalog and the analysis endpoint.
//!
//! Commands:
//! - `list` — print the stock catalog
//! - `analyze <TICKER>` — request one analysis and print the details block

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use stockview_core::catalog::{self, CATALOG};
use stockview_core::{AnalysisClient, HttpAnalysisClient, ViewerConfig, ViewerState};

#[derive(Parser)]
#[command(
    name = "stockview-cli",
    about = "StockView CLI — construction stock catalog and analysis requests"
)]
struct Cli {
    /// Optional TOML config file (endpoint, log_filter).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the stock catalog.
    List {
        /// Emit a JSON array instead of tab-separated lines.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Request the analysis for one catalog ticker.
    Analyze {
        /// Catalog ticker (case-insensitive), e.g. KBH.
        ticker: String,

        /// Print the response body as the backend sent it instead of the
        /// rendered details.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = ViewerConfig::load(cli.config.as_deref())?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::List { json } => cmd_list(json, &mut out),
        Commands::Analyze { ticker, json } => {
            let client = HttpAnalysisClient::new(config.endpoint.clone())?;
            cmd_analyze(&client, &ticker, json, &mut out)
        }
    }
}

fn cmd_list(json: bool, out: &mut impl Write) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, CATALOG)?;
        writeln!(out)?;
    } else {
        for stock in CATALOG {
            writeln!(out, "{}\t{}", stock.ticker, stock.name)?;
        }
    }
    Ok(())
}

fn cmd_analyze(
    client: &dyn AnalysisClient,
    ticker: &str,
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    let stock = catalog::lookup(ticker)
        .ok_or_else(|| anyhow!("unknown ticker '{ticker}' (run `list` to see the catalog)"))?;

    if json {
        let body = client
            .analyze_raw(stock.ticker)
            .with_context(|| format!("analysis request for {} failed", stock.ticker))?;
        out.write_all(&body)?;
        if !body.ends_with(b"\n") {
            writeln!(out)?;
        }
        return Ok(());
    }

    let mut state = ViewerState::new();
    let ticket = state.select_stock(stock);
    let result = ticket
        .run(client)
        .with_context(|| format!("analysis request for {} failed", stock.ticker))?;
    state.apply_outcome(&ticket, Ok(result));

    if let Some(view) = state.details() {
        write!(out, "{}", view.to_plain_text())?;
    }
    Ok(())
}
