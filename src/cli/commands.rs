use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "feedmerge")]
#[command(about = "Multi-source feed merger producing a JSON Feed")]
#[command(version)]
pub struct Cli {
    /// Defaults to `generate` when no subcommand is given
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch all sources and rebuild the feed document
    Generate {
        /// Dry run - fetch and report, but don't write the feed file
        #[arg(long)]
        dry_run: bool,

        /// Output file path (overrides FEEDMERGE_OUTPUT)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// List the configured sources
    Sources,
}
