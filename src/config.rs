//! Command line configuration.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{arg, value_parser, ArgMatches, Command};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Compress,
    Decompress,
}

impl Mode {
    fn parse(s: &str) -> Result<Self, String> {
        match s {
            "c" => Ok(Mode::Compress),
            "d" => Ok(Mode::Decompress),
            _ => Err(String::from(
                "invalid mode, use 'c' to compress or 'd' to decompress",
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub mode: Mode,
    pub input: PathBuf,
    pub output: PathBuf,
    pub verbose: bool,
}

impl Config {
    pub fn command() -> Command {
        Command::new("huffpack")
            .about("Compress or decompress a file with static Huffman coding")
            .arg(arg!(<MODE> "'c' to compress, 'd' to decompress").value_parser(Mode::parse))
            .arg(arg!(<INPUT> "File to read").value_parser(value_parser!(PathBuf)))
            .arg(arg!(<OUTPUT> "File to write").value_parser(value_parser!(PathBuf)))
            .arg(arg!(-v --verbose "Print the frequency table, tree and codes"))
    }

    /// Parse from an argument list whose first element is the program name.
    pub fn try_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = Self::command().try_get_matches_from(args)?;
        Ok(Self::from_matches(&matches))
    }

    fn from_matches(matches: &ArgMatches) -> Self {
        // required positionals are guaranteed present by clap
        let path = |id: &str| matches.get_one::<PathBuf>(id).cloned().unwrap_or_default();
        Config {
            mode: matches
                .get_one::<Mode>("MODE")
                .copied()
                .unwrap_or(Mode::Compress),
            input: path("INPUT"),
            output: path("OUTPUT"),
            verbose: matches.get_flag("verbose"),
        }
    }
}
