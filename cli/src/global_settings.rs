use clap::{Arg, ArgMatches, arg};
use log::LevelFilter;

/// How to display the resulting agenda
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Output {
    #[default]
    Text, // one appointment per line, as in agenda files
    Json,
}

pub struct GlobalSettings {
    pub output: Output,

    // Number of -v switches.  RUST_LOG still takes precedence.
    pub verbosity: u8,
}

impl GlobalSettings {
    /// Return the command line switches to configure the global settings
    pub fn cli() -> impl IntoIterator<Item = Arg> {
        [
            arg!(--json "Output the agenda as JSON").global(true),
            arg!(-v --verbose ... "Show more logs (repeat for more)")
                .global(true),
        ]
    }

    /// Create the settings from the command line arguments.
    pub fn new(args: &ArgMatches) -> Self {
        GlobalSettings {
            output: if args.get_flag("json") {
                Output::Json
            } else {
                Output::Text
            },
            verbosity: args.get_count("verbose"),
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::args::build_cli;

    fn settings(args: &[&str]) -> GlobalSettings {
        GlobalSettings::new(&build_cli().try_get_matches_from(args).unwrap())
    }

    #[test]
    fn test_defaults() {
        let s = settings(&["agenda", "show", "a.txt"]);
        assert_eq!(s.output, Output::Text);
        assert_eq!(s.log_level(), LevelFilter::Warn);
    }

    #[test]
    fn test_global_switches() {
        // Global switches are accepted after the subcommand too
        let s = settings(&["agenda", "show", "a.txt", "--json", "-vv"]);
        assert_eq!(s.output, Output::Json);
        assert_eq!(s.verbosity, 2);
        assert_eq!(s.log_level(), LevelFilter::Debug);

        let s = settings(&["agenda", "-vvvv", "normalize", "a.txt"]);
        assert_eq!(s.log_level(), LevelFilter::Trace);
    }
}
