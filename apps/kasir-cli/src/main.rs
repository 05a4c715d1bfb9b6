//! # Kasir Entry Point
//!
//! ```text
//! $ kasir --output table
//!
//! --- Main Menu ---
//! 1. Login
//! 2. Exit
//! Choose an option:
//! ```
//!
//! The actual setup is in lib.rs for better testability.

use clap::Parser;

fn main() -> anyhow::Result<()> {
    kasir_cli::run(kasir_cli::Cli::parse())
}
