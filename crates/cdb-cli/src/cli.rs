//! CLI argument definitions for the chessdb tools.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "chessdb",
    version,
    about = "Chess game database tools - preview, search and filter collections",
    long_about = "Preview games from a collection file, search games by position\n\
                  and derive sub-position filters from marked squares."
)]
pub struct Cli {
    /// Path to the game collection file.
    #[arg(value_name = "COLLECTION")]
    pub collection: PathBuf,

    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show a game's tags and the board at a ply.
    Show(ShowArgs),

    /// List the games matching a position or sub-position filter.
    Search(SearchArgs),

    /// Derive a sub-position filter from marked squares and apply it.
    Filter(FilterArgs),
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Game number (1-based row in the collection).
    #[arg(long = "game", value_name = "N", default_value_t = 1)]
    pub game: usize,

    /// Ply to display, clamped to the game's range (last ply if omitted).
    #[arg(long = "ply", value_name = "P")]
    pub ply: Option<usize>,
}

#[derive(Parser)]
pub struct SearchArgs {
    /// Full FEN the games must reach at some ply.
    #[arg(long = "fen", value_name = "FEN", conflicts_with = "sub_fen")]
    pub fen: Option<String>,

    /// Placement pattern; blanked squares match anything.
    #[arg(long = "sub-fen", value_name = "PATTERN")]
    pub sub_fen: Option<String>,

    /// Print matches as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct FilterArgs {
    /// Game number (1-based row in the collection).
    #[arg(long = "game", value_name = "N", default_value_t = 1)]
    pub game: usize,

    /// Ply the filter position is taken from (last ply if omitted).
    #[arg(long = "ply", value_name = "P")]
    pub ply: Option<usize>,

    /// Comma-separated marked squares (e.g. e4,d5).
    #[arg(long = "squares", value_name = "SQUARES", value_delimiter = ',')]
    pub squares: Vec<String>,

    /// Print the result as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
