//! # CLI Argument Definitions
//!
//! Defines the command-line interface structure using the `clap` crate.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "shub-inspect")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Inspect feature payloads and API envelopes")]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Normalize a package features payload and print the canonical bag
    Bag {
        /// JSON file to read (stdin when omitted)
        file: Option<PathBuf>,
    },
    /// Print the editor-row view of a package features payload
    Rows {
        /// JSON file to read (stdin when omitted)
        file: Option<PathBuf>,
    },
    /// Reconcile a paginated API envelope
    Page {
        /// JSON file to read (stdin when omitted)
        file: Option<PathBuf>,
        /// Page size assumed when the envelope does not carry one
        #[arg(long, default_value_t = shub::platform::DEFAULT_PAGE_LIMIT)]
        limit: u64,
    },
}
