//! The Interface defines what the struct for each cracker looks like,
//! plus the sampling helper the sampled strategies share.

use crate::checkers::wordlist::WordlistChecker;
use crate::config::get_config;

use super::crack_results::CrackResult;

/// Metadata shared by every cracker. The marker `Type` selects which
/// strategy's `Crack` impl runs.
pub struct Cracker<Type> {
    /// The English name of the strategy.
    pub name: &'static str,
    /// A short description, a line or two at most.
    pub description: &'static str,
    /// Link to further reading.
    pub link: &'static str,
    /// Category tags. Think of them as search keywords.
    pub tags: Vec<&'static str>,
    /// How often this strategy is the one you want. Eye-balled.
    pub popularity: f32,
    /// We don't use the Type, so we use PhantomData to mark it.
    pub phantom: std::marker::PhantomData<Type>,
}

/// All crackers share the same Crack trait, which lets the dispatcher
/// treat them uniformly.
pub trait Crack {
    /// Construct the strategy with its metadata.
    fn new() -> Self
    where
        Self: Sized;
    /// Recover the key: consume the ciphertext, score candidates with
    /// `checker`, return labelled result lines.
    fn crack(&self, ciphertext: &str, checker: &WordlistChecker) -> CrackResult;
    /// Get all tags for the current cracker.
    fn get_tags(&self) -> &Vec<&'static str>;
    /// Get the name of the current cracker.
    fn get_name(&self) -> &str;
    /// Get the description of the current cracker.
    fn get_description(&self) -> &str;
}

/// The deterministic bounded sample the sampled strategies score on: the
/// first half of the ciphertext, capped at the configured sample limit.
/// Counted in characters, not bytes, so multi-byte passthrough characters
/// cannot be split.
pub fn bounded_sample(text: &str) -> String {
    let limit = get_config().sample_limit;
    let half = text.chars().count() / 2;
    text.chars().take(half.min(limit)).collect()
}
