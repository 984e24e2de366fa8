use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Parley — terminal client for the chat assistant and document review backends.
#[derive(Parser, Debug)]
#[command(name = "parley", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter directive override (e.g. `parley=debug`).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Chat with the assistant. Type `/reset` to start over, `/quit` to exit.
    Chat,

    /// Upload a document for review.
    Upload {
        /// Document to upload.
        file: PathBuf,

        /// Bearer token. Falls back to `PARLEY_TOKEN`.
        #[arg(short, long)]
        token: Option<String>,

        /// Category to request; repeat for several.
        #[arg(short, long = "category")]
        categories: Vec<String>,

        /// Directory for downloaded documents.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

pub fn parse() -> Args {
    Args::parse()
}
