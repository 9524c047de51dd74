//! The reference dictionary: the set of known-good words derived from the
//! current case's plaintext, used as ground truth when scoring candidate
//! decryptions.

use std::collections::HashSet;

use log::trace;

use crate::normalizer::fold_accent;

/// Clean one raw token for dictionary purposes: fold accents, keep
/// alphabetic characters only, lowercase. Both dictionary entries and the
/// words of candidate decryptions go through this, which is what makes
/// membership case- and accent-insensitive.
pub fn normalize_word(word: &str) -> String {
    word.chars()
        .map(fold_accent)
        .filter(|c| c.is_alphabetic())
        .collect::<String>()
        .to_lowercase()
}

/// Set of normalized words from the current case's plaintext.
///
/// Built fresh per generated case and owned by the case, so an old case's
/// words can never leak into a new one.
#[derive(Debug, Default, Clone)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from `text`: whitespace-split tokens, cleaned
    /// through [`normalize_word`], kept when at least two letters long.
    pub fn build(text: &str) -> Self {
        let mut words = HashSet::new();
        for token in text.split_whitespace() {
            let clean = normalize_word(token);
            if clean.chars().count() >= 2 {
                words.insert(clean);
            }
        }
        trace!("built reference dictionary with {} words", words.len());
        Dictionary { words }
    }

    /// Membership test. Expects a word already cleaned through
    /// [`normalize_word`].
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of reference words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when the dictionary holds no words at all.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_words_of_two_or_more_letters() {
        let dict = Dictionary::build("y el perro 123 a!");
        assert!(dict.contains("el"));
        assert!(dict.contains("perro"));
        assert!(!dict.contains("y"));
        assert!(!dict.contains("a"));
        assert!(!dict.contains(""));
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn membership_is_case_and_accent_insensitive() {
        let dict = Dictionary::build("cása");
        for spelling in ["CASA", "casa", "cása", "cÁsa"] {
            assert!(dict.contains(&normalize_word(spelling)));
        }
    }

    #[test]
    fn building_is_idempotent() {
        let a = Dictionary::build("el perro come carne");
        let b = Dictionary::build("el perro come carne");
        assert_eq!(a.len(), b.len());
        assert!(b.contains("carne"));
    }

    #[test]
    fn strips_punctuation_inside_tokens() {
        let dict = Dictionary::build("¡hola! (mundo)");
        assert!(dict.contains("hola"));
        assert!(dict.contains("mundo"));
    }

    #[test]
    fn empty_text_builds_an_empty_dictionary() {
        assert!(Dictionary::build("").is_empty());
        assert!(Dictionary::build("1 2 3 !").is_empty());
    }
}
