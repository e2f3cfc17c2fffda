//! Module describing all possible commands and sub-commands to the `igcctl` main driver
//!
//! - `ingest` fetches one or more IGC files and stores them, reporting the allocated ids
//! - `track` does the same then displays one track, or one field of it
//! - `info` displays the service meta record
//! - `list fields` lists the queryable fields
//!
//! `completion` is here just to configure the various shells completion system.
//!

use std::path::PathBuf;

use clap::{crate_authors, crate_description, crate_name, crate_version, Parser, ValueEnum};
use clap_complete::shells::Shell;

/// CLI options
#[derive(Parser)]
#[command(disable_version_flag = true)]
#[clap(name = crate_name!(), about = crate_description!())]
#[clap(version = crate_version!(), author = crate_authors!())]
pub struct Opts {
    /// configuration file.
    #[clap(short = 'c', long)]
    pub config: Option<PathBuf>,
    /// Hierarchical logging output.
    #[clap(short = 't', long)]
    pub tree: bool,
    /// Verbose mode.
    #[clap(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,
    /// Sub-commands (see below).
    #[clap(subcommand)]
    pub subcmd: SubCommand,
}

// ------

/// All sub-commands:
///
/// `completion SHELL`
/// `info`
/// `ingest [--json] URL...`
/// `list fields`
/// `track [--json] -i ID [-f FIELD] URL...`
/// `version`
///
#[derive(Debug, Parser)]
pub enum SubCommand {
    /// Generate Completion stuff
    Completion(ComplOpts),
    /// Display service meta information
    Info,
    /// Fetch and store tracks
    Ingest(IngestOpts),
    /// List things
    List(ListOpts),
    /// Fetch tracks then query one of them
    Track(TrackOpts),
    /// List all package versions
    Version,
}

// ------

/// Options for `ingest`.
///
#[derive(Debug, Parser)]
pub struct IngestOpts {
    /// JSON output
    #[clap(long)]
    pub json: bool,
    /// URLs or paths of IGC files, ingested in order
    #[clap(required = true)]
    pub urls: Vec<String>,
}

// ------

/// Options for `track`.
///
#[derive(Debug, Parser)]
pub struct TrackOpts {
    /// JSON output
    #[clap(long)]
    pub json: bool,
    /// Track id to display
    #[clap(short = 'i', long)]
    pub id: String,
    /// Only this field
    #[clap(short = 'f', long)]
    pub field: Option<String>,
    /// URLs or paths of IGC files, ingested in order
    pub urls: Vec<String>,
}

// ------

/// Options to generate completion files at runtime
///
#[derive(Debug, Parser)]
pub struct ComplOpts {
    #[clap(value_parser)]
    pub shell: Shell,
}

// ------

/// All `list` sub-commands:
///
/// `list fields`
///
#[derive(Debug, Parser)]
pub struct ListOpts {
    #[clap(value_parser)]
    pub cmd: ListSubCommand,
}

/// These are the sub-commands for `list`
///
#[derive(Clone, Copy, Debug, Ord, PartialOrd, Eq, PartialEq, ValueEnum)]
pub enum ListSubCommand {
    /// List all queryable fields
    Fields,
}
