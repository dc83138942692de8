//! CLI argument parsing for progresswalk

use clap::Parser;
use std::path::PathBuf;

use crate::direction::Direction;

#[derive(Parser, Debug)]
#[command(name = "pw")]
#[command(author, version, about = "Walk a sentence word by word while observers watch the progress", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Text to split on whitespace and walk
    #[arg(required = true)]
    pub text: String,

    /// Walk backward? (true/1/yes/y/on/reverse/backward or false/0/no/n/off/forward)
    pub reverse: Option<Direction>,
}
