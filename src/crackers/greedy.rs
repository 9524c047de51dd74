//! Frequency-guided greedy search: bet that the most frequent ciphertext
//! letters are images of the most frequent letters of the target
//! language, try the shifts those pairings imply, and keep the best
//! dictionary score. Cheap, and the only strategy that can fail outright.

use log::{debug, trace};

use crate::checkers::wordlist::WordlistChecker;
use crate::codec;
use crate::config::get_config;

use super::crack_results::CrackResult;
use super::interface::{bounded_sample, Crack, Cracker};

/// Greedy (frequency-guided) key recovery.
pub struct GreedyCracker;

/// Words with fewer letters than this never count as greedy hits.
const MIN_HIT_LEN: usize = 2;

impl Crack for Cracker<GreedyCracker> {
    fn new() -> Cracker<GreedyCracker> {
        Cracker {
            name: "Greedy",
            description: "Pairs the most frequent ciphertext letters with likely plaintext letters and keeps the implied shift with the best dictionary score.",
            link: "https://en.wikipedia.org/wiki/Frequency_analysis",
            tags: vec!["caesar", "frequency", "heuristic"],
            popularity: 0.8,
            phantom: std::marker::PhantomData,
        }
    }

    fn crack(&self, ciphertext: &str, checker: &WordlistChecker) -> CrackResult {
        trace!("trying greedy frequency search on {:?}", ciphertext);
        let mut results = CrackResult::new(self, ciphertext.to_string());
        let config = get_config();
        let checker = checker.with_min_word_len(MIN_HIT_LEN);

        // Histogram over the lowercased, a-z-only ciphertext.
        let mut counts = [0u32; 26];
        for c in ciphertext.to_lowercase().chars() {
            if c.is_ascii_lowercase() {
                counts[(c as u8 - b'a') as usize] += 1;
            }
        }
        if counts.iter().all(|&n| n == 0) {
            debug!("greedy: ciphertext has no alphabetic characters");
            results.candidates = Some(vec![
                "Greedy failure: the ciphertext has no alphabetic characters".to_string(),
            ]);
            return results;
        }

        // The most frequent observed letters, ties broken alphabetically.
        let mut order: Vec<usize> = (0..26).filter(|&i| counts[i] > 0).collect();
        order.sort_by(|&a, &b| counts[b].cmp(&counts[a]).then(a.cmp(&b)));
        order.truncate(config.top_frequencies);

        let sample = bounded_sample(ciphertext);
        let mut best_hits = 0u32;
        let mut best: Option<(u8, String)> = None;

        for &observed_idx in &order {
            let observed = (b'a' + observed_idx as u8) as char;
            for &target in &config.candidate_letters {
                let mut shift = (observed as i32 - target as i32).rem_euclid(26);
                if shift == 0 {
                    // A zero raw difference still names a hypothesis:
                    // shift 26 decodes as identity under the wrap rule.
                    shift = 26;
                }
                let hits = checker.check(&codec::decode(&sample, shift)).hits;
                trace!(
                    "greedy hypothesis {} -> {} (shift {}) scored {}",
                    observed,
                    target,
                    shift,
                    hits
                );
                if hits > best_hits {
                    best_hits = hits;
                    // The full text is decoded lazily, only on strict
                    // improvement.
                    best = Some((shift as u8, codec::decode(ciphertext, shift)));
                }
            }
        }

        match best {
            Some((shift, full)) => {
                let check_res = checker.check(&full);
                results.candidates = Some(vec![format!(
                    "Best greedy guess (shift {:02}): {}",
                    shift, full
                )]);
                results.key = Some(shift);
                results.update_checker(&check_res);
            }
            None => {
                debug!("greedy: no hypothesis matched the dictionary");
                results.candidates = Some(vec![
                    "Greedy failure: no hypothesis matched the dictionary (try a longer text)"
                        .to_string(),
                ]);
            }
        }
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

    const PLAINTEXT: &str =
        "el perro come carne y el gato mira al perro desde la ventana de la casa";

    #[test]
    fn recovers_the_key_when_a_frequent_letter_pairing_hits() {
        let dict = Dictionary::build(PLAINTEXT);
        let checker = WordlistChecker::new(&dict);
        let cracker = Cracker::<GreedyCracker>::new();

        for key in [4, 11, 21] {
            let ciphertext = codec::encode(PLAINTEXT, key);
            let result = cracker.crack(&ciphertext, &checker);
            assert_eq!(result.key, Some(key as u8));
            assert!(result.success);
            assert!(result.candidate_lines()[0].contains(PLAINTEXT));
        }
    }

    #[test]
    fn fails_explicitly_on_letterless_ciphertext() {
        let dict = Dictionary::build(PLAINTEXT);
        let checker = WordlistChecker::new(&dict);
        let cracker = Cracker::<GreedyCracker>::new();

        let result = cracker.crack("123 456", &checker);
        let lines = result.candidate_lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("no alphabetic characters"));
        assert!(!result.success);
        assert_eq!(result.key, None);
    }

    #[test]
    fn fails_explicitly_when_no_hypothesis_scores() {
        // A dictionary with nothing the hypotheses could ever match.
        let dict = Dictionary::build("zzzz qqqq");
        let checker = WordlistChecker::new(&dict);
        let cracker = Cracker::<GreedyCracker>::new();

        let result = cracker.crack("wkh txlfn eurzq ira", &checker);
        let lines = result.candidate_lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("no hypothesis matched"));
        assert!(!result.success);
    }
}
