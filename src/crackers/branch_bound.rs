//! Branch and bound over the key space: precompute every shift's score on
//! the bounded sample, then search halved sub-ranges, pruning any range
//! whose best possible score cannot strictly beat the best already found.
//! The bound is the true maximum of the sub-range, so the surviving key
//! is exactly the exhaustive argmax over the same sample.

use log::{debug, trace};

use crate::checkers::wordlist::WordlistChecker;
use crate::codec;

use super::crack_results::CrackResult;
use super::interface::{bounded_sample, Crack, Cracker};

/// Branch-and-bound key recovery.
pub struct BranchBoundCracker;

/// Words with fewer letters than this are not scored by this strategy.
const MIN_SCORED_LEN: usize = 3;

/// Best (shift, score) seen so far, threaded through the recursion.
struct Best {
    shift: u8,
    score: i64,
}

/// Recurse over the shifts whose sample scores sit in `scores[lo..=hi]`
/// (index i holds shift i + 1). Left half first, strict improvement only,
/// so ties resolve to the lowest shift.
fn search_range(scores: &[i64; 25], lo: usize, hi: usize, best: &mut Best) {
    let bound = scores[lo..=hi].iter().copied().max().unwrap_or(i64::MIN);
    if bound <= best.score {
        trace!("pruned shifts {}..={} (bound {})", lo + 1, hi + 1, bound);
        return;
    }
    if lo == hi {
        // The bound of a leaf is its own score, and it strictly beats the
        // best, so this is an improvement.
        best.score = scores[lo];
        best.shift = (lo + 1) as u8;
        return;
    }
    let mid = (lo + hi) / 2;
    search_range(scores, lo, mid, best);
    search_range(scores, mid + 1, hi, best);
}

impl Crack for Cracker<BranchBoundCracker> {
    fn new() -> Cracker<BranchBoundCracker> {
        Cracker {
            name: "Branch & Bound",
            description: "Scores every shift on a bounded sample, then searches halved key ranges, pruning ranges that cannot beat the best score found so far.",
            link: "https://en.wikipedia.org/wiki/Branch_and_bound",
            tags: vec!["caesar", "sampled", "pruning"],
            popularity: 0.5,
            phantom: std::marker::PhantomData,
        }
    }

    fn crack(&self, ciphertext: &str, checker: &WordlistChecker) -> CrackResult {
        trace!("trying branch and bound on {:?}", ciphertext);
        let mut results = CrackResult::new(self, ciphertext.to_string());
        let checker = checker.with_min_word_len(MIN_SCORED_LEN);

        let sample = bounded_sample(ciphertext);
        let mut scores = [0i64; 25];
        for shift in 1..=25usize {
            scores[shift - 1] =
                i64::from(checker.check(&codec::decode(&sample, shift as i32)).hits);
        }

        // Starting below zero guarantees the first reachable leaf is an
        // improvement, so a shift is always selected.
        let mut best = Best { shift: 1, score: -1 };
        search_range(&scores, 0, 24, &mut best);
        debug!(
            "branch and bound settled on shift {} (sample score {})",
            best.shift, best.score
        );

        let full = codec::decode(ciphertext, i32::from(best.shift));
        let check_res = checker.check(&full);
        results.candidates = Some(vec![format!(
            "Best shift {:02} (sample score {}): {}",
            best.shift, best.score, full
        )]);
        results.key = Some(best.shift);
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

    /// Exhaustive argmax over the same sample and scoring rule, for the
    /// agreement property.
    fn exhaustive_sample_argmax(ciphertext: &str, checker: &WordlistChecker) -> u8 {
        let checker = checker.with_min_word_len(MIN_SCORED_LEN);
        let sample = bounded_sample(ciphertext);
        let mut best_shift = 1u8;
        let mut best_hits = -1i64;
        for shift in 1..=25 {
            let hits = i64::from(checker.check(&codec::decode(&sample, shift)).hits);
            if hits > best_hits {
                best_hits = hits;
                best_shift = shift as u8;
            }
        }
        best_shift
    }

    #[test]
    fn recovers_the_key_and_matches_exhaustive_argmax() {
        let dict = Dictionary::build(PLAINTEXT);
        let checker = WordlistChecker::new(&dict);
        let cracker = Cracker::<BranchBoundCracker>::new();

        for key in [2, 13, 24] {
            let ciphertext = codec::encode(PLAINTEXT, key);
            let result = cracker.crack(&ciphertext, &checker);
            assert_eq!(result.key, Some(key as u8));
            assert_eq!(
                result.key,
                Some(exhaustive_sample_argmax(&ciphertext, &checker))
            );
        }
    }

    #[test]
    fn agrees_with_exhaustive_when_exactly_one_key_hits() {
        // Dictionary of a single word; only the true key can score.
        let dict = Dictionary::build("perro");
        let checker = WordlistChecker::new(&dict);
        let cracker = Cracker::<BranchBoundCracker>::new();

        let ciphertext = codec::encode("perro azul reja limon perro verde", 5);
        let result = cracker.crack(&ciphertext, &checker);
        assert_eq!(result.key, Some(5));
        assert_eq!(
            result.key,
            Some(exhaustive_sample_argmax(&ciphertext, &checker))
        );
        assert!(result.success);
    }

    #[test]
    fn defaults_to_shift_one_when_nothing_scores() {
        let dict = Dictionary::build(PLAINTEXT);
        let checker = WordlistChecker::new(&dict);
        let cracker = Cracker::<BranchBoundCracker>::new();

        let result = cracker.crack("123 456", &checker);
        assert_eq!(result.key, Some(1));
        assert!(!result.success);
    }
}
