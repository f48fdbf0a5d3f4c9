use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI parser structure
#[derive(Parser)]
#[command(name = "rustyll-toc")]
#[command(about = "Add a table of contents to Markdown documents", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Custom configuration file (repeatable, later files win)
    #[arg(short, long, value_name = "CONFIG_FILE", global = true)]
    pub config: Option<Vec<PathBuf>>,

    /// Show the full backtrace when an error occurs
    #[arg(short, long, default_value_t = false, global = true)]
    pub trace: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false, global = true)]
    pub debug: bool,
}

/// Subcommands for the CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Render a Markdown document to HTML with a table of contents
    #[command(alias = "r")]
    Render {
        /// Markdown file to read (defaults to stdin)
        #[arg(value_name = "INPUT")]
        input: Option<PathBuf>,

        /// File to write the HTML to (defaults to stdout)
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<PathBuf>,

        #[command(flatten)]
        toc: TocArgs,
    },

    /// Print the table of contents tree of a Markdown document as JSON
    #[command(alias = "i")]
    Inspect {
        /// Markdown file to read (defaults to stdin)
        #[arg(value_name = "INPUT")]
        input: Option<PathBuf>,

        /// Drop empty list levels above the shallowest heading
        #[arg(long, default_value_t = false)]
        prune: bool,
    },
}

/// Table of contents overrides shared by commands
#[derive(Args, Debug, Default, Clone)]
pub struct TocArgs {
    /// Title of the table of contents section
    #[arg(long, value_name = "TITLE")]
    pub title: Option<String>,

    /// Wrap the table of contents in a container element
    #[arg(short, long, default_value_t = false)]
    pub wrap: bool,

    /// Identifier of the wrapping container
    #[arg(long, value_name = "ID")]
    pub wrapper_id: Option<String>,

    /// Drop empty list levels above the shallowest heading
    #[arg(long, default_value_t = false)]
    pub prune: bool,
}
