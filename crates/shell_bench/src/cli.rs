//! Command-line definitions for `shell-bench`.
//!
//! The trailing positionals are matched loosely: the first one is an input kind
//! if it names one, otherwise a gap sequence, and a gap sequence may be followed
//! by an input kind. An unknown gap sequence is not fatal; the run falls back to
//! Sedgewick.

use clap::{ArgAction, Parser, ValueEnum};
use log::warn;
use shell_sort::{GapSequence, InputKind, ParseNameError};

#[derive(Parser, Debug)]
#[command(
    name = "shell-bench",
    about = "Benchmark Shell sort gap sequences on generated input",
    version
)]
pub struct Cli {
    /// Number of elements to generate and sort
    pub size: usize,

    /// Gap sequence (shell, knuth, sedgewick), optionally followed by an input
    /// kind (random, sorted, reverse)
    #[arg(value_name = "OPTION")]
    pub options: Vec<String>,

    /// Seed for random input; drawn from the OS when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BenchOptions {
    pub sequence: GapSequence,
    pub input: InputKind,
}

impl Cli {
    pub fn bench_options(&self) -> (BenchOptions, Option<ParseNameError>) {
        resolve_options(&self.options)
    }
}

/// Resolves the trailing positionals. The second value is the rejected gap
/// sequence name, if the run fell back to Sedgewick.
pub fn resolve_options(args: &[String]) -> (BenchOptions, Option<ParseNameError>) {
    let mut sequence_arg = None;
    let mut input = InputKind::default();

    if args.len() > 2 {
        warn!("ignoring extra arguments {:?}", &args[2..]);
    }

    if let Some((first, rest)) = args.split_first() {
        match first.parse::<InputKind>() {
            Ok(kind) => {
                input = kind;
                if let Some(extra) = rest.first() {
                    warn!("ignoring {extra:?} after input kind");
                }
            }
            Err(_) => {
                sequence_arg = Some(first.as_str());
                if let Some(second) = rest.first() {
                    match second.parse::<InputKind>() {
                        Ok(kind) => input = kind,
                        Err(err) => warn!("ignoring {err}"),
                    }
                }
            }
        }
    }

    let (sequence, rejected) = match sequence_arg.map(str::parse::<GapSequence>) {
        None => (GapSequence::default(), None),
        Some(Ok(sequence)) => (sequence, None),
        Some(Err(err)) => (GapSequence::Sedgewick, Some(err)),
    };

    (BenchOptions { sequence, input }, rejected)
}

pub fn fallback_notice(rejected: &ParseNameError) -> String {
    format!("Error: Invalid GapSequence ({}). Using SEDGEWICK.", rejected.value())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    fn resolve(args: &[&str]) -> BenchOptions {
        resolve_with_rejected(args).0
    }

    fn resolve_with_rejected(args: &[&str]) -> (BenchOptions, Option<ParseNameError>) {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        resolve_options(&args)
    }

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        assert_eq!(
            resolve(&[]),
            BenchOptions {
                sequence: GapSequence::Sedgewick,
                input: InputKind::Random,
            }
        );
    }

    #[test]
    fn sequence_then_input() {
        assert_eq!(
            resolve(&["KNUTH", "REVERSE"]),
            BenchOptions {
                sequence: GapSequence::Knuth,
                input: InputKind::Reverse,
            }
        );
        assert_eq!(resolve(&["shell"]).sequence, GapSequence::Shell);
        assert_eq!(resolve(&["shell"]).input, InputKind::Random);
    }

    #[test]
    fn input_kind_alone() {
        assert_eq!(
            resolve(&["sorted"]),
            BenchOptions {
                sequence: GapSequence::Sedgewick,
                input: InputKind::Sorted,
            }
        );
    }

    #[test]
    fn unknown_sequence_falls_back() {
        let (options, rejected) = resolve_with_rejected(&["ciura", "reverse"]);
        assert_eq!(options.sequence, GapSequence::Sedgewick);
        assert_eq!(options.input, InputKind::Reverse);

        let rejected = rejected.unwrap();
        assert_eq!(rejected.value(), "ciura");
        assert_eq!(
            fallback_notice(&rejected),
            "Error: Invalid GapSequence (ciura). Using SEDGEWICK."
        );
    }

    #[test]
    fn known_sequences_are_not_rejected() {
        let cases: [&[&str]; 4] = [&[], &["knuth"], &["sorted"], &["Shell", "random"]];
        for args in cases {
            assert!(resolve_with_rejected(args).1.is_none(), "{args:?}");
        }
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::try_parse_from([
            "shell-bench",
            "5000",
            "knuth",
            "reverse",
            "--seed",
            "7",
            "--format",
            "json",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.size, 5000);
        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.bench_options().0.sequence, GapSequence::Knuth);
    }

    #[test]
    fn rejects_non_numeric_size() {
        assert!(Cli::try_parse_from(["shell-bench", "many"]).is_err());
        assert!(Cli::try_parse_from(["shell-bench"]).is_err());
    }
}
