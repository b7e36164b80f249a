use clap::Parser;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Find every word square of a given size: grids whose rows and columns are all dictionary words.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    // --- Search ---
    /// Size of the word squares [default: 5]
    #[arg(short = 'n', long, value_name = "N")]
    pub size: Option<usize>,

    /// Path to the word list, one word per line [default: english_filtered.txt]
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Word to start the search at (the closest following word is used if it is missing)
    #[arg(short, long, value_name = "WORD")]
    pub start: Option<String>,

    /// Word to end the search at (inclusive)
    #[arg(short, long, value_name = "WORD")]
    pub end: Option<String>,

    /// Require unique words (no two rows/columns with the same word)
    #[arg(short, long)]
    pub unique: bool,

    /// Number of search threads.
    /// Defaults to half the number of available logical cores.
    #[arg(short = 'j', long, value_name = "NUM")]
    pub threads: Option<usize>,

    // --- Output ---
    /// Pretty-print word squares (one word per line, blank line between squares)
    #[arg(short, long)]
    pub pretty: bool,

    // --- Configuration ---
    /// Path to an optional configuration file in TOML format
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S search.unique-words=true
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,

    // --- Logging ---
    /// Increase verbosity level (-v for DEBUG, -vv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output and the progress bar except for errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
