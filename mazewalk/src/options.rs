//! Command-line options.
//! `--config <FILE>` or `-c` for a JSON maze, `--recursive` for the call-stack engine.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Arg, ArgAction, Command};

fn make_options_parser() -> Command {
    Command::new("mazewalk")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Report the first-step distribution over a maze's shortest paths")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf))
                .help("JSON maze config; the built-in maze is used when omitted"),
        )
        .arg(
            Arg::new("recursive")
                .long("recursive")
                .action(ArgAction::SetTrue)
                .help("Search by recursion instead of an explicit stack"),
        )
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub config: Option<PathBuf>,
    pub recursive: bool,
}

impl Options {
    /// Parse a full argument list, binary name first.
    pub fn parse_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = make_options_parser().try_get_matches_from(args)?;
        Ok(Options {
            config: matches.get_one::<PathBuf>("config").cloned(),
            recursive: matches.get_flag("recursive"),
        })
    }
}
