//! Sampled divide-and-conquer: score every shift on a bounded prefix of
//! the ciphertext, then pay for exactly one full decode with the winner.
//! The bet is that the prefix carries the same word statistics as the
//! whole text.

use log::{debug, trace};

use crate::checkers::wordlist::WordlistChecker;
use crate::codec;

use super::crack_results::CrackResult;
use super::interface::{bounded_sample, Crack, Cracker};

/// Divide-and-conquer key recovery.
pub struct DivideConquerCracker;

impl Crack for Cracker<DivideConquerCracker> {
    fn new() -> Cracker<DivideConquerCracker> {
        Cracker {
            name: "Divide & Conquer",
            description: "Scores every shift on a bounded prefix of the ciphertext and decodes the full text once with the best-scoring shift.",
            link: "https://en.wikipedia.org/wiki/Divide-and-conquer_algorithm",
            tags: vec!["caesar", "sampled", "argmax"],
            popularity: 0.7,
            phantom: std::marker::PhantomData,
        }
    }

    fn crack(&self, ciphertext: &str, checker: &WordlistChecker) -> CrackResult {
        trace!("trying divide and conquer on {:?}", ciphertext);
        let mut results = CrackResult::new(self, ciphertext.to_string());

        let sample = bounded_sample(ciphertext);
        debug!("scoring {} sample characters", sample.chars().count());

        // Strict improvement only, so the lowest shift wins ties. Starting
        // below zero guarantees a shift is always selected, even when
        // nothing scores.
        let mut best_shift: i32 = 1;
        let mut best_hits: i64 = -1;
        for shift in 1..=25 {
            let hits = i64::from(checker.check(&codec::decode(&sample, shift)).hits);
            if hits > best_hits {
                best_hits = hits;
                best_shift = shift;
            }
        }
        debug!("divide and conquer settled on shift {}", best_shift);

        let full = codec::decode(ciphertext, best_shift);
        let check_res = checker.check(&full);
        results.candidates = Some(vec![format!(
            "Detected shift {:02}: {}",
            best_shift, full
        )]);
        results.key = Some(best_shift as u8);
        results.update_checker(&check_res);
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;

    const PLAINTEXT: &str = "el perro come carne y el gato mira al perro desde la ventana";

    #[test]
    fn recovers_the_key_from_the_sample() {
        let dict = Dictionary::build(PLAINTEXT);
        let checker = WordlistChecker::new(&dict);
        let cracker = Cracker::<DivideConquerCracker>::new();

        for key in [1, 9, 25] {
            let ciphertext = codec::encode(PLAINTEXT, key);
            let result = cracker.crack(&ciphertext, &checker);
            assert_eq!(result.key, Some(key as u8));
            assert!(result.success);
            assert!(result.candidate_lines()[0].contains(PLAINTEXT));
        }
    }

    #[test]
    fn defaults_to_shift_one_when_nothing_scores() {
        let dict = Dictionary::build("el perro come carne");
        let checker = WordlistChecker::new(&dict);
        let cracker = Cracker::<DivideConquerCracker>::new();

        let result = cracker.crack("123 456", &checker);
        assert_eq!(result.key, Some(1));
        assert!(!result.success);
        assert_eq!(result.candidate_lines().len(), 1);
    }
}
