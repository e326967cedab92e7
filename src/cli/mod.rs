pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "codemarks")]
#[command(about = "Code Marks - track which files of a repository have been reviewed", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the project web server
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long, env = "HOST")]
        host: Option<String>,
    },

    /// Run database migrations
    Migrate,

    /// Generate a CSV review manifest for a local git checkout
    Manifest {
        /// Path to the local git repository
        repo_path: PathBuf,

        /// Subdirectory in the git repository (empty for the whole checkout)
        subdirectory: String,

        /// Owner or organization of the Github repository
        owner: String,

        /// Branch to track
        branch: String,

        /// Path to the output CSV file
        #[arg(long, default_value = "output.csv")]
        output: PathBuf,
    },
}
