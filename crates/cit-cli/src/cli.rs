//! CLI argument definitions for the citation indexer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "cit-cli",
    version,
    about = "Project raw bibliographic citations into search-index documents",
    long_about = "Project raw bibliographic citations into search-index documents.\n\n\
                  Reads one JSON citation per line, runs the ordered stage pipeline,\n\
                  and writes Solr update XML or JSON lines."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Project a JSON-lines file of raw citations.
    Transform(TransformArgs),

    /// List the default stage order.
    Stages,
}

#[derive(Parser)]
pub struct TransformArgs {
    /// JSON-lines file with one raw citation per line ("-" reads stdin).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Collection acronym the citations belong to (e.g. scl).
    #[arg(long = "collection", value_name = "ACRONYM")]
    pub collection: String,

    /// JSON object mapping composite citation ids to external records.
    #[arg(long = "external-metadata", value_name = "JSON")]
    pub external_metadata: Option<PathBuf>,

    /// Output file (default: stdout).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Output format to generate.
    #[arg(long = "format", value_enum, default_value = "xml")]
    pub format: OutputFormatArg,

    /// Abort on the first malformed or failing citation instead of skipping it.
    #[arg(long = "fail-fast")]
    pub fail_fast: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Xml,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
