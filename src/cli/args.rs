//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Content presentation utilities: code headers, pagination, TOCs
#[derive(Parser, Debug, Clone)]
#[command(name = "folio", version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Content directory path (relative to the config file)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub content: Option<PathBuf>,

    /// Config file path [default: folio.toml, searched upward]
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Parse the directive header of a code snippet
    Code {
        /// Snippet file, or `-` for stdin
        #[arg(value_hint = clap::ValueHint::FilePath)]
        file: PathBuf,

        /// Snippet language (defaults to the file extension)
        #[arg(short, long)]
        lang: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Expand a line range list such as `1,3-5`
    Ranges {
        ranges: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Compute pagination state for a listing
    #[command(visible_alias = "p")]
    Paginate {
        /// Total number of items
        #[arg(short, long)]
        total: usize,

        /// Current page (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Items per page [config: pagination.per_page]
        #[arg(short = 'n', long)]
        per_page: Option<usize>,

        /// Page buttons in the full strip [config: pagination.max_buttons]
        #[arg(short, long)]
        max_buttons: Option<usize>,

        /// Base path for page links [config: pagination.base_path]
        #[arg(short, long)]
        base: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print the flattened table of contents of a Markdown file
    Toc {
        /// Markdown file, or `-` for stdin
        #[arg(value_hint = clap::ValueHint::FilePath)]
        file: PathBuf,

        /// Print the nested outline instead of the flat list
        #[arg(long)]
        tree: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Render a Markdown file to HTML
    #[command(visible_alias = "r")]
    Render {
        /// Markdown file, or `-` for stdin
        #[arg(value_hint = clap::ValueHint::FilePath)]
        file: PathBuf,

        /// Number code block lines by default [config: render.line_numbers]
        #[arg(short = 'L', long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
        line_numbers: Option<bool>,

        /// Print metadata, HTML and TOC as JSON instead of bare HTML
        #[arg(short, long)]
        json: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List indexed content, one page at a time
    #[command(visible_alias = "l")]
    List {
        #[command(flatten)]
        args: ListArgs,
    },

    /// Count tags across indexed content
    Tags {
        #[command(flatten)]
        output: OutputArgs,
    },
}

/// List command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ListArgs {
    /// Only content of this type
    #[arg(short, long)]
    pub kind: Option<String>,

    /// Only content with this tag (case-insensitive)
    #[arg(short, long)]
    pub tag: Option<String>,

    /// Page to show (1-based)
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Items per page [config: pagination.per_page]
    #[arg(short = 'n', long)]
    pub per_page: Option<usize>,

    /// Include drafts
    #[arg(short, long)]
    pub drafts: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Output options shared by every command.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Pretty-print JSON output
    #[arg(short = 'P', long)]
    pub pretty: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}
