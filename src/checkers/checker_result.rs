/// Outcome of scoring one candidate decryption.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// True when at least one word of the candidate was found in the
    /// reference dictionary.
    pub is_identified: bool,
    /// Number of dictionary hits.
    pub hits: u32,
    /// Number of words that were eligible for scoring.
    pub words_scored: u32,
    /// Checker which produced this result.
    pub checker_name: &'static str,
    /// Short description of that checker.
    pub checker_description: &'static str,
}
