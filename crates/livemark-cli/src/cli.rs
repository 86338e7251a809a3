//! CLI argument definitions for Livemark.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `stock` | Current price and currency of a stock symbol |
//! | `bond` | Current price, currency, coupon and maturity from a bond page |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--timeout-ms` | `LIVEMARK_TIMEOUT_MS` or `10000` | Request deadline |
//! | `--endpoint` | `LIVEMARK_QUOTE_ENDPOINT` | Quote endpoint template |
//! | `--user-agent` | `LIVEMARK_USER_AGENT` | Outgoing user agent |
//! | `--log-level` | `RUST_LOG` or `info` | Log verbosity on stderr |
//!
//! # Examples
//!
//! ```bash
//! livemark stock AAPL
//! livemark bond "https://www.borsaitaliana.it/borsa/obbligazioni/mot/btp/scheda/IT0005436693.html?lang=en" --pretty
//! ```

use clap::{Args, Parser, Subcommand};

/// Livemark - live stock and bond market data
#[derive(Debug, Parser)]
#[command(
    name = "livemark",
    author,
    version,
    about = "Fetch live market data for a stock or a bond"
)]
pub struct Cli {
    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Request deadline in milliseconds.
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    /// Quote endpoint template; must contain `{symbol}`.
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// User agent sent with every request.
    #[arg(long, global = true)]
    pub user_agent: Option<String>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch the current quote of a stock from the JSON chart endpoint.
    ///
    /// # Examples
    ///
    ///   livemark stock AAPL
    ///   livemark stock eni.mi --pretty
    Stock(StockArgs),

    /// Scrape current bond data from a market-data page.
    Bond(BondArgs),
}

#[derive(Debug, Args)]
pub struct StockArgs {
    /// Ticker symbol; upper-cased before the request.
    pub symbol: String,
}

#[derive(Debug, Args)]
pub struct BondArgs {
    /// Full URL of the bond page.
    pub url: String,
}
