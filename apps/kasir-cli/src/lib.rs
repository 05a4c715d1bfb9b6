//! # Kasir CLI Library
//!
//! The text-menu front end for Kasir POS. `main.rs` only parses flags and
//! calls [`run`]; everything else lives here so tests can drive it.
//!
//! ## Module Organization
//! ```text
//! kasir_cli/
//! ├── lib.rs          ◄─── You are here (flags, logging, startup)
//! ├── state/
//! │   ├── mod.rs      ◄─── AppState { Store, ConfigState }
//! │   └── config.rs   ◄─── Layered configuration
//! ├── commands/
//! │   ├── mod.rs      ◄─── Role gate helper, rejection logging
//! │   ├── auth.rs     ◄─── Login / logout
//! │   ├── product.rs  ◄─── Catalog and restock
//! │   ├── cart.rs     ◄─── Cart commands
//! │   └── sale.rs     ◄─── Two-phase checkout
//! ├── menu.rs         ◄─── Main menu and role menu loop
//! ├── console.rs      ◄─── Prompt/print over BufRead + Write
//! ├── render.rs       ◄─── Tables and JSON
//! └── error.rs        ◄─── UiError for commands
//! ```

pub mod commands;
pub mod console;
pub mod error;
pub mod menu;
pub mod render;
pub mod state;

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use kasir_core::Store;
use tracing::info;
use tracing_subscriber::EnvFilter;

use console::Console;
use state::{AppState, ConfigState, OutputFormat};

/// Filter used when neither `--log-level` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Command line flags.
#[derive(Parser, Debug, Default)]
#[command(name = "kasir", version, about = "Text-menu point-of-sale simulator")]
pub struct Cli {
    /// Config file (default: kasir.toml in the platform config directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// How tables and receipts are printed (overrides the config file)
    #[arg(long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Log filter, e.g. `info` or `kasir_cli=debug` (overrides RUST_LOG)
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,
}

/// Runs the application against the real terminal.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • --log-level, else RUST_LOG, else "warn"                           │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • defaults → kasir.toml → KASIR_* env → --output                    │
/// │                                                                         │
/// │  3. Seed the Store ───────────────────────────────────────────────────► │
/// │     • 5 products, 2 accounts, empty cart, nobody logged in              │
/// │                                                                         │
/// │  4. Menu Loop ────────────────────────────────────────────────────────► │
/// │     • until Exit or end of input                                        │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run(cli: Cli) -> anyhow::Result<()> {
    init_tracing(cli.log_level.as_deref());

    info!("Starting Kasir POS");

    let mut config = ConfigState::load(cli.config.as_deref())
        .context("failed to load configuration")?;
    if let Some(output) = cli.output {
        config.output = output;
    }
    info!(store_name = %config.store_name, output = ?config.output, "Configuration loaded");

    let mut state = AppState::new(Store::seeded(), config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    menu::run_session(&mut state, &mut console).context("console I/O failed")?;

    info!("Kasir POS stopped");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `--log-level debug` - Show every command call
/// - `RUST_LOG=kasir_cli=info` - State changes and rejected input
/// - Default: WARN (failed logins and failed checkouts)
fn init_tracing(level: Option<&str>) {
    let filter = level
        .map(EnvFilter::new)
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER));

    // A subscriber may already be installed (e.g. by a test harness).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
