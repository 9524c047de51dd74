//! Exhaustive search: decode the ciphertext under every shift 1..=25 and
//! report them all, labelled by key. This is an enumeration, not a
//! selection; recognising the true plaintext among the 25 lines is left
//! to the reader.

use log::trace;

use crate::checkers::wordlist::WordlistChecker;
use crate::codec;

use super::crack_results::CrackResult;
use super::interface::{Crack, Cracker};

/// Exhaustive (brute force) key recovery.
pub struct ExhaustiveCracker;

impl Crack for Cracker<ExhaustiveCracker> {
    fn new() -> Cracker<ExhaustiveCracker> {
        Cracker {
            name: "Exhaustive",
            description: "Decodes the ciphertext under every one of the 25 possible shifts and reports all of them, labelled by key.",
            link: "https://en.wikipedia.org/wiki/Caesar_cipher#Breaking_the_cipher",
            tags: vec!["caesar", "brute-force", "enumeration"],
            popularity: 1.0,
            phantom: std::marker::PhantomData,
        }
    }

    fn crack(&self, ciphertext: &str, _checker: &WordlistChecker) -> CrackResult {
        trace!("trying exhaustive search on {:?}", ciphertext);
        let mut results = CrackResult::new(self, ciphertext.to_string());

        let mut lines = Vec::with_capacity(25);
        for shift in 1..=25 {
            lines.push(format!("Shift {:02}: {}", shift, codec::decode(ciphertext, shift)));
        }

        // An enumeration always produces its full answer; no key is
        // singled out.
        results.success = true;
        results.candidates = Some(lines);
        results
    }

    fn get_tags(&self) -> &Vec<&'static str> {
        &self.tags
    }

    fn get_name(&self) -> &str {
        self.name
    }

    fn get_description(&self) -> &str {
        self.description
    }
}
