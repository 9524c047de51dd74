//! Checkers score candidate decryptions against the current case's
//! reference dictionary. There is exactly one checker today (the wordlist
//! checker); the result-object split is kept so crackers only ever see
//! [`checker_result::CheckResult`]s.

/// The CheckResult struct stores the outcome of scoring one candidate.
pub mod checker_result;
/// The wordlist checker counts dictionary hits among a candidate's words.
pub mod wordlist;
