//! Rotbreak is a rotation-cipher cracking laboratory: it builds a Caesar
//! case from a phrase, recovers the unknown shift with four different
//! search strategies, and measures each strategy's running time and peak
//! heap usage.
// Warns in case we forget to include documentation
#![warn(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

/// Checkers score candidate decryptions against the reference dictionary.
pub mod checkers;
/// CLI argument parsing for the rotbreak binary.
pub mod cli;
/// The CLI Pretty Printing module contains the functions that format results.
pub mod cli_pretty_printing;
/// The rotation codec: per-letter shifting with wrap-around.
pub mod codec;
/// The Config module enables a configuration module,
/// like a global API to access tunables.
pub mod config;
/// Crackers are the four key-recovery strategies.
pub mod crackers;
/// The reference dictionary derived from the case's plaintext.
pub mod dictionary;
/// Unified error type for the CLI path.
pub mod error;
/// Builds cipher cases from a phrase.
pub mod generator;
/// Timing and peak-memory measurement around one cracker run.
pub mod instrument;
/// Accent folding for the supported alphabet.
pub mod normalizer;

use log::debug;

use checkers::wordlist::WordlistChecker;
use crackers::crack_results::CrackResult;
use crackers::run_cracker;
pub use crackers::CrackerKind;
use dictionary::Dictionary;
use instrument::{measure, Measurement};

/// The main function to call which performs the cracking: run one
/// strategy over `ciphertext`, scored against `dictionary`, with timing
/// and peak-memory measurement bracketing exactly the cracker call.
/// ```rust
/// use rotbreak::{perform_cracking, CrackerKind};
/// use rotbreak::generator;
///
/// let case = generator::generate("el perro come carne");
/// let (result, measurement) =
///     perform_cracking(CrackerKind::Exhaustive, &case.ciphertext, &case.dictionary);
/// assert_eq!(result.candidate_lines().len(), 25);
/// assert!(measurement.elapsed_nanos() > 0);
/// ```
pub fn perform_cracking(
    kind: CrackerKind,
    ciphertext: &str,
    dictionary: &Dictionary,
) -> (CrackResult, Measurement) {
    debug!(
        "dispatching {} over {} characters",
        kind.name(),
        ciphertext.chars().count()
    );
    let checker = WordlistChecker::new(dictionary);
    measure(|| run_cracker(kind, ciphertext, &checker))
}
