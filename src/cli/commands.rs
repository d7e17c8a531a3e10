//! CLI command definitions

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tipcheck")]
#[command(about = "Validate Tips of the Week article front matter", long_about = None)]
#[command(version)]
pub struct Cli {
    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a default .tipcheck.toml
    Init {
        /// Corpus root (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Parse every article and check corpus-wide uniqueness
    Check {
        /// Directory inside the corpus (default: discovered root)
        path: Option<PathBuf>,
    },

    /// List articles sorted by order
    List {
        /// Directory inside the corpus (default: discovered root)
        path: Option<PathBuf>,

        /// Include unpublished articles
        #[arg(short, long)]
        all: bool,
    },

    /// Show the parsed front matter of one article
    Show {
        /// Article file
        file: PathBuf,
    },
}
