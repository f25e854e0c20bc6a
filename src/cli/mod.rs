use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::common::Options;

/// Command-line surface of the `lsr` binary.
///
/// `-h` is taken by `--human-readable` (as in the tool being mirrored), so
/// the automatic help short flag is disabled and `--help` re-added by hand.
#[derive(Parser, Debug)]
#[command(name = "lsr", author, version, about, long_about = None, disable_help_flag = true)]
pub struct Args {
    /// Do not ignore entries starting with `.`; list the implied `.` and `..` as well.
    #[arg(short = 'a', long = "all")]
    pub all: bool,

    /// Like --all, but do not list the implied `.` and `..`.
    #[arg(short = 'A', long = "almost-all")]
    pub almost_all: bool,

    /// Use the long listing format (type, permissions, links, owner, group, size, time).
    #[arg(short = 'l')]
    pub long: bool,

    /// With -l, print sizes like 1K 234M 2G instead of raw byte counts.
    #[arg(short = 'h', long = "human-readable")]
    pub human_readable: bool,

    /// Reverse the selected sort order.
    #[arg(short = 'r', long = "reverse")]
    pub reverse: bool,

    /// Sort by modification time, newest first, instead of by name.
    #[arg(short = 't')]
    pub sort_by_time: bool,

    /// List subdirectories recursively, depth-first.
    #[arg(short = 'R', long = "recursive")]
    pub recursive: bool,

    /// List one entry per line (always the case; accepted for compatibility).
    #[arg(short = '1')]
    pub one_per_line: bool,

    /// Paths to list; the current directory when none are given.
    pub paths: Vec<PathBuf>,

    /// Print help.
    #[arg(long = "help", action = ArgAction::Help, value_parser = clap::value_parser!(bool))]
    pub help: Option<bool>,
}

impl Args {
    /// Collapse the flag surface into the engine's immutable options.
    pub fn to_options(&self) -> Options {
        Options {
            show_all: self.all,
            show_almost_all: self.almost_all,
            long_format: self.long,
            human_readable: self.human_readable,
            reverse: self.reverse,
            sort_by_time: self.sort_by_time,
            recursive: self.recursive,
            one_per_line: self.one_per_line,
        }
    }

    /// Operands in the order given, defaulting to the current directory.
    pub fn operands(&self) -> Vec<PathBuf> {
        if self.paths.is_empty() {
            vec![PathBuf::from(".")]
        } else {
            self.paths.clone()
        }
    }
}

/// Parses command-line arguments and returns the flag surface.
///
/// This is the main entry point for the CLI logic.
pub fn run() -> Args {
    Args::parse()
}
