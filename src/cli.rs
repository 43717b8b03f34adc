//! CLI definitions: argument parsing, subcommands, and help text.

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

pub use clap_complete::generate;

use crate::core::format::FormatOptions;

const AFTER_HELP: &str = "\
EXAMPLES:
  chriki                          Launch the chat TUI
  chriki -p \"wach rak?\"           One-shot prompt, print the formatted reply
  chriki -p - --plain             Read the prompt from stdin, skip formatting
  chriki key set AIza...          Store the API key
  chriki config                   Show config paths and status
  chriki admin search passeport   Look up a paperwork guide
  chriki history list             List saved conversations
  chriki completions bash         Generate bash completions
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Chriki — l'assistant dzayri f'terminal",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Send a single prompt then exit (without opening the TUI)
    #[arg(
        short = 'p',
        long,
        help = "Provide a prompt to get an immediate reply (use '-' to read from stdin)"
    )]
    pub prompt: Option<String>,

    /// Override the configured model
    #[arg(short = 'm', long, help = "Model ID (e.g. gemini-2.5-flash)")]
    pub model: Option<String>,

    /// Disable emoji prefixes in the formatted reply
    #[arg(long)]
    pub no_emojis: bool,

    /// Disable bold/italic markers in the formatted reply
    #[arg(long)]
    pub no_markdown: bool,

    /// Skip symbol cleaning and paragraph breaks
    #[arg(long)]
    pub plain: bool,

    /// Target maximum characters per chunk
    #[arg(long)]
    pub chunk_length: Option<usize>,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage the stored API key
    Key {
        #[command(subcommand)]
        action: KeyAction,
    },
    /// Show configuration paths and status
    Config,
    /// Look up administrative-document guides
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
    /// Saved conversations
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
    /// Generate shell completions
    Completions { shell: Shell },
}

#[derive(Subcommand)]
pub enum KeyAction {
    /// Store the API key in the config directory
    Set { key: String },
    /// Show where the key comes from (masked)
    Show,
}

#[derive(Subcommand)]
pub enum AdminAction {
    /// List guides, optionally one category only
    List {
        #[arg(long)]
        category: Option<String>,
    },
    /// Show one guide in full
    Show { id: String },
    /// Search guides by keyword
    Search { query: String },
    /// Add or update a guide from a JSON file
    Add { file: std::path::PathBuf },
    /// Remove a guide
    Delete { id: String },
    /// Dump the whole store as JSON to stdout
    Export,
    /// Replace the store from an exported JSON file
    Import { file: std::path::PathBuf },
    /// Restore the built-in guides
    Reset,
}

#[derive(Subcommand)]
pub enum HistoryAction {
    /// List saved conversations
    List,
    /// Print one conversation
    Show { id: String },
    /// Remove one conversation
    Delete { id: String },
}

impl Args {
    /// Map the formatting flags onto pipeline options.
    pub fn format_options(&self) -> FormatOptions {
        let defaults = FormatOptions::default();
        FormatOptions {
            enable_markdown: !self.no_markdown,
            enable_emojis: !self.no_emojis,
            add_line_breaks: !self.plain,
            clean_symbols: !self.plain,
            max_chunk_length: self.chunk_length.unwrap_or(defaults.max_chunk_length),
        }
    }

    /// Default log filter derived from -v/-q.
    pub fn log_filter(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                _ => "debug",
            }
        }
    }
}
