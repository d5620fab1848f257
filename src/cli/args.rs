// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Path to config file (optional)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the note service, overrides the config file
    #[arg(short, long, value_name = "URL", global = true)]
    pub server: Option<String>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute (list, add, toggle, or shell)
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List notes
    List {
        /// Only show notes marked important
        #[arg(short, long)]
        important: bool,

        /// Output notes as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a note to the collection
    Add {
        /// Note text
        #[arg(value_name = "CONTENT")]
        content: String,

        /// Importance flag; random when omitted
        #[arg(long, value_name = "BOOL")]
        important: Option<bool>,
    },

    /// Toggle the importance flag of a note
    Toggle {
        /// Note ID to toggle
        #[arg(value_name = "NOTE_ID")]
        note_id: i64,
    },

    /// Interactive session reading commands from stdin
    Shell,
}
