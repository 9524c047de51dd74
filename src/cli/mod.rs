use std::{fs::File, io::Read};

/// This doc string acts as a help message when the user runs '--help'
/// as do all doc strings on fields
use clap::Parser;
use log::trace;

use crate::config::Config;
use crate::crackers::CrackerKind;
use crate::error::RotbreakError;

/// The struct for Clap CLI arguments
#[derive(Parser)]
#[command(about, long_about = None)]
pub struct Opts {
    /// The phrase to build a cipher case from
    #[arg(short, long)]
    text: Option<String>,

    /// Read the phrase from a file instead of --text
    #[arg(short, long)]
    file: Option<String>,

    /// Which strategy to run; omit to run all four and compare them
    #[arg(short, long, value_enum)]
    algorithm: Option<AlgorithmArg>,

    /// A level of verbosity, and can be used multiple times
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// How many of the most frequent ciphertext letters the greedy
    /// strategy considers
    #[arg(long)]
    top_frequencies: Option<usize>,

    /// Target letters for the greedy strategy, e.g. "eaosn"
    #[arg(long)]
    candidates: Option<String>,

    /// Character cap for the bounded sample of the sampled strategies
    #[arg(long)]
    sample_limit: Option<usize>,
}

/// CLI spelling of the four strategies.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum AlgorithmArg {
    /// All 25 shifts, labelled
    Exhaustive,
    /// Sample-scored argmax
    DivideConquer,
    /// Frequency-guided hypotheses
    Greedy,
    /// Pruned range search
    BranchBound,
}

impl From<AlgorithmArg> for CrackerKind {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Exhaustive => CrackerKind::Exhaustive,
            AlgorithmArg::DivideConquer => CrackerKind::DivideConquer,
            AlgorithmArg::Greedy => CrackerKind::Greedy,
            AlgorithmArg::BranchBound => CrackerKind::BranchBound,
        }
    }
}

/// Parse CLI arguments into the input text and the chosen strategy
/// (`None` means run all four and compare), installing the global config
/// along the way.
///
/// # Errors
/// Returns a `RotbreakError` when the input file cannot be read, when
/// both or neither of `--text`/`--file` are given, or when a tunable is
/// out of range.
pub fn parse_cli_args() -> Result<(String, Option<CrackerKind>), RotbreakError> {
    let opts: Opts = Opts::parse();
    let min_log_level = match opts.verbose {
        0 => "Warn",
        1 => "Info",
        2 => "Debug",
        _ => "Trace",
    };
    env_logger::init_from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, min_log_level),
    );

    if opts.file.is_some() && opts.text.is_some() {
        return Err(RotbreakError::Config(
            "--text and --file are mutually exclusive".to_string(),
        ));
    }
    let text = match (&opts.text, &opts.file) {
        (Some(text), None) => text.clone(),
        (None, Some(path)) => read_input_file(path)?,
        _ => {
            return Err(RotbreakError::Config(
                "no input was provided, use --text or --file".to_string(),
            ))
        }
    };

    let config = build_config(&opts)?;
    crate::config::set_global_config(config);

    trace!("program was called from the CLI");
    Ok((text, opts.algorithm.map(CrackerKind::from)))
}

/// Turn the optional tunable flags into a Config, validating ranges.
fn build_config(opts: &Opts) -> Result<Config, RotbreakError> {
    let mut config = Config {
        verbose: opts.verbose,
        ..Config::default()
    };
    if let Some(n) = opts.top_frequencies {
        if n == 0 {
            return Err(RotbreakError::Config(
                "--top-frequencies must be at least 1".to_string(),
            ));
        }
        config.top_frequencies = n;
    }
    if let Some(letters) = &opts.candidates {
        let letters: Vec<char> = letters.chars().filter(char::is_ascii_lowercase).collect();
        if letters.is_empty() {
            return Err(RotbreakError::Config(
                "--candidates needs at least one lowercase letter".to_string(),
            ));
        }
        config.candidate_letters = letters;
    }
    if let Some(limit) = opts.sample_limit {
        if limit == 0 {
            return Err(RotbreakError::Config(
                "--sample-limit must be at least 1".to_string(),
            ));
        }
        config.sample_limit = limit;
    }
    Ok(config)
}

/// Read the whole input file as the phrase, trimming the trailing
/// newline.
fn read_input_file(path: &str) -> Result<String, RotbreakError> {
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents.trim_end().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(args: &[&str]) -> Opts {
        Opts::parse_from(std::iter::once("rotbreak").chain(args.iter().copied()))
    }

    #[test]
    fn tunables_land_in_the_config() {
        let config = build_config(&opts(&[
            "--text",
            "hola",
            "--top-frequencies",
            "5",
            "--candidates",
            "eao",
            "--sample-limit",
            "80",
        ]))
        .unwrap();
        assert_eq!(config.top_frequencies, 5);
        assert_eq!(config.candidate_letters, vec!['e', 'a', 'o']);
        assert_eq!(config.sample_limit, 80);
    }

    #[test]
    fn out_of_range_tunables_are_rejected() {
        assert!(build_config(&opts(&["--text", "x", "--top-frequencies", "0"])).is_err());
        assert!(build_config(&opts(&["--text", "x", "--sample-limit", "0"])).is_err());
        assert!(build_config(&opts(&["--text", "x", "--candidates", "123"])).is_err());
    }

    #[test]
    fn algorithm_names_map_onto_cracker_kinds() {
        let parsed = opts(&["--text", "x", "--algorithm", "branch-bound"]);
        assert_eq!(
            parsed.algorithm.map(CrackerKind::from),
            Some(CrackerKind::BranchBound)
        );
    }
}
