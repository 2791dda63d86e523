use std::{path::PathBuf, time::Duration};

use clap::Parser;
use resolvent::config::{Config, NEGATION_MARKER};

/// Determines whether a goal clause follows from premise clauses, by refutation with resolution
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// The problem file, with a clause on each line and the goal on the last line
    #[arg(required_unless_present = "markdown_help")]
    problem_file: Option<PathBuf>,

    /// Write only the clauses used to derive a contradiction
    #[arg(short, long, default_value_t = false)]
    proof: bool,

    /// The format of the trace
    #[arg(short, long, default_value_t, value_enum)]
    format: TraceFormat,

    /// Display stats on completion
    #[arg(short, long, default_value_t = false)]
    stats: bool,

    /// Time limit for the proof, in (a positive number of) seconds
    #[arg(short, long, value_parser = time_limit)]
    time: Option<Duration>,

    /// The character marking a negated literal
    #[arg(short, long, default_value_t = NEGATION_MARKER)]
    negation_marker: char,

    /// Print the command line help as markdown
    #[arg(long, hide = true, default_value_t = false)]
    pub markdown_help: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum TraceFormat {
    #[default]
    /// A line for each clause, followed by the verdict
    Text,
    /// A JSON object with a list of clauses and the verdict
    Json,
}

/// Options of the command line interface, which do not concern the proof itself.
#[derive(Clone, Debug)]
pub struct CliConfig {
    pub problem_file: PathBuf,
    pub proof: bool,
    pub format: TraceFormat,
    pub stats: bool,
    pub time_limit: Option<Duration>,
}

impl CliConfig {
    /// The library config and cli config from parsed arguments.
    pub fn from_args(args: Args) -> (Config, Self) {
        let config = Config {
            negation_marker: args.negation_marker,
        };

        let cli_config = CliConfig {
            problem_file: args.problem_file.unwrap_or_default(),
            proof: args.proof,
            format: args.format,
            stats: args.stats,
            time_limit: args.time,
        };

        (config, cli_config)
    }
}

/// A time limit of some positive number of seconds.
fn time_limit(seconds: &str) -> Result<Duration, String> {
    match seconds.parse::<u64>() {
        Ok(0) => Err("the time limit must be at least one second".to_owned()),
        Ok(seconds) => Ok(Duration::from_secs(seconds)),
        Err(e) => Err(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_limit_is_positive() {
        assert_eq!(time_limit("5"), Ok(Duration::from_secs(5)));
        assert!(time_limit("0").is_err());
        assert!(time_limit("-1").is_err());
    }

    #[test]
    fn zero_time_is_rejected() {
        assert!(Args::try_parse_from(["resolvent", "problem.txt", "--time", "0"]).is_err());

        let args = Args::try_parse_from(["resolvent", "problem.txt", "--time", "2"]).unwrap();
        let (_, cli_config) = CliConfig::from_args(args);
        assert_eq!(cli_config.time_limit, Some(Duration::from_secs(2)));
    }
}
