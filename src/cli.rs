use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "fitcalc",
    about = "Print distance, mean speed and calories for fitness tracker packages"
)]
pub struct Cli {
    /// JSON file with packages: [["RUN", [15000, 1, 75]], ...].
    ///
    /// Default: the built-in sample readings.
    #[arg(long, value_name = "FILE")]
    pub packages: Option<PathBuf>,

    /// Log and skip bad packages instead of stopping at the first one.
    #[arg(long)]
    pub keep_going: bool,

    /// Increase log verbosity (-v, -vv). Defaults to INFO.
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease log verbosity (-q, -qq). Defaults to INFO.
    #[arg(short = 'q', long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::parse_from(["fitcalc", "--packages", "p.json", "--keep-going", "-vv"]);
        assert_eq!(cli.packages, Some(PathBuf::from("p.json")));
        assert!(cli.keep_going);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.quiet, 0);
    }

    #[test]
    fn defaults_to_samples() {
        let cli = Cli::parse_from(["fitcalc"]);
        assert!(cli.packages.is_none());
        assert!(!cli.keep_going);
    }
}
