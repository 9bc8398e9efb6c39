// src/cli/mod.rs — CLI definition (clap derive)

pub mod analytics;
pub mod problem;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tutor",
    about = "Terminal client for a chat-based learning companion",
    version
)]
pub struct Cli {
    /// Config file path
    #[arg(long)]
    pub config: Option<String>,

    /// Backend base URL (overrides the config file)
    #[arg(long)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive chat session (the default when no subcommand is given)
    Chat,
    /// Print learning analytics for the current user
    Analytics,
    /// Generate a practice problem and print it
    Problem {
        /// Topic to practice
        topic: String,
        /// Problem type (theoretical, practical)
        #[arg(long, default_value = "theoretical")]
        problem_type: String,
        /// Difficulty (easy, medium, hard)
        #[arg(long, default_value = "easy")]
        difficulty: String,
    },
    /// Show (or overwrite) the persisted user id
    Whoami {
        /// Overwrite the user id; persists immediately
        #[arg(long)]
        set: Option<String>,
    },
}
