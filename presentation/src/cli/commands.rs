//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, colored text
    Text,
    /// JSON output
    Json,
}

/// CLI arguments for arcana
#[derive(Parser, Debug)]
#[command(name = "arcana")]
#[command(author, version, about = "Tarot reading interpretations from configurable inference providers")]
#[command(long_about = r#"
Arcana turns a question and a set of drawn cards into a written reading.

A request goes through three steps:
1. Model resolution: configured providers, else vendors with credentials, else placeholders
2. Prompt composition: the layout is taken from --spread or inferred from the card count
3. Execution: one provider call under a deadline, with failures turned into readable messages

Configuration files are loaded from (in priority order):
1. ARCANA_* environment variables
2. --config <path>     Explicit config file
3. ./arcana.toml       Project-level config
4. ~/.config/arcana/config.toml   Global config

Example:
  arcana models
  arcana prompt --cards 3
  arcana read "Should I take the new job?" --card "The Fool" --card "Three of Cups" --card "The Star"
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the models a reading may use, recommended first
    Models,

    /// Print the instruction template for a layout or card count
    Prompt {
        /// Layout id (single, triad, pentad, heptad, nonad, decad)
        #[arg(short, long, value_name = "ID")]
        spread: Option<String>,

        /// Number of drawn cards
        #[arg(short, long, value_name = "N")]
        cards: usize,
    },

    /// Produce one reading
    Read(ReadArgs),
}

#[derive(clap::Args, Debug)]
pub struct ReadArgs {
    /// The querent's question
    pub question: String,

    /// A drawn card, in draw order (repeat for each card)
    #[arg(short, long = "card", value_name = "CARD", required = true)]
    pub cards: Vec<String>,

    /// Layout id; inferred from the card count when omitted
    #[arg(short, long, value_name = "ID")]
    pub spread: Option<String>,

    /// Composite model id (`provider/model`)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Answered follow-up question as `QUESTION=ANSWER` (repeatable)
    #[arg(long = "clarify", value_name = "Q=A")]
    pub clarifications: Vec<String>,

    /// Free-form notes added to the context
    #[arg(long, value_name = "TEXT")]
    pub extra: Option<String>,

    /// Short description of the querent
    #[arg(long, value_name = "TEXT")]
    pub profile: Option<String>,

    /// Apply the guest output limit
    #[arg(long)]
    pub guest: bool,
}
