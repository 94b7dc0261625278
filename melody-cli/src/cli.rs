use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::utils::version;

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct AppArgs {
    #[arg(
        short,
        long,
        global = true,
        value_name = "PATH",
        help = "Path to the melody dataset, or a glob pattern for read-only commands"
    )]
    pub dataset: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Count the melodies and notes of the dataset
    Stats,
    /// Report every note that is not of the form <name>_<duration>
    Check,
    /// Rewrite the dataset in canonical form
    Normalize {
        #[arg(
            short,
            long,
            value_name = "PATH",
            help = "Where to write the result, defaults to the dataset itself"
        )]
        output: Option<PathBuf>,
    },
    /// Parse note tokens and print their name and duration
    Parse {
        #[arg(required = true, value_name = "TOKEN")]
        tokens: Vec<String>,
    },
    /// Print the dataset as JSON with every note parsed
    Export {
        #[arg(short, long, help = "Pretty-print the JSON", default_value_t = false)]
        pretty: bool,
    },
}
