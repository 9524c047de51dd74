//! Scores a candidate decryption by exact dictionary membership: split on
//! whitespace, clean every word the same way the dictionary builder does,
//! count the words present in the reference set.

use log::trace;

use crate::checkers::checker_result::CheckResult;
use crate::dictionary::{normalize_word, Dictionary};

/// Dictionary-membership scorer for one cracking session.
///
/// Borrows the case's reference dictionary; every cracker in a run shares
/// one instance and derives its own scoring floor with
/// [`WordlistChecker::with_min_word_len`].
pub struct WordlistChecker<'dict> {
    /// The name of the checker.
    pub name: &'static str,
    /// What the checker does.
    pub description: &'static str,
    /// Words with fewer letters than this never count as hits.
    min_word_len: usize,
    /// The case's reference dictionary.
    dictionary: &'dict Dictionary,
}

impl<'dict> WordlistChecker<'dict> {
    /// New checker over `dictionary` with no length floor.
    pub fn new(dictionary: &'dict Dictionary) -> Self {
        WordlistChecker {
            name: "Wordlist Checker",
            description: "counts candidate words present in the reference dictionary",
            min_word_len: 0,
            dictionary,
        }
    }

    /// Derive a checker with a different minimum countable word length.
    /// Crackers use this the way decoders pick a scoring sensitivity.
    pub fn with_min_word_len(&self, min_word_len: usize) -> WordlistChecker<'dict> {
        WordlistChecker {
            name: self.name,
            description: self.description,
            min_word_len,
            dictionary: self.dictionary,
        }
    }

    /// Score `text`: the number of cleaned words present in the reference
    /// dictionary, skipping words under the length floor.
    pub fn check(&self, text: &str) -> CheckResult {
        let mut hits = 0u32;
        let mut words_scored = 0u32;
        for word in text.split_whitespace() {
            let clean = normalize_word(word);
            if clean.chars().count() < self.min_word_len {
                continue;
            }
            words_scored += 1;
            if self.dictionary.contains(&clean) {
                hits += 1;
            }
        }
        trace!("wordlist checker scored {}/{} words", hits, words_scored);
        CheckResult {
            is_identified: hits > 0,
            hits,
            words_scored,
            checker_name: self.name,
            checker_description: self.description,
        }
    }
}
