pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "engawa")]
#[command(about = "A terminal reader for a personal publishing site", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List posts
    Posts,
    /// List products
    Products,
    /// Show one item's full content
    Show {
        /// Slug or id of the item
        key: String,

        /// Look the key up among products instead of posts
        #[arg(long)]
        product: bool,
    },
    /// Show the recommended set for the home section
    Recommend,
    /// Launch the TUI
    Tui,
}
