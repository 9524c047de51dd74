//! Builds a fresh cipher case from a phrase: derives the reference
//! dictionary, draws a random shift and encodes the lowercased text.

use log::debug;
use rand::Rng;

use crate::codec;
use crate::dictionary::Dictionary;

/// One generated case: the ciphertext, the true key and the reference
/// dictionary derived from the plaintext.
///
/// The key is carried for display only; crackers never receive it. The
/// case owns its dictionary, so generating a new case replaces the whole
/// session state at once.
#[derive(Debug, Clone)]
pub struct CipherCase {
    /// The encoded phrase.
    pub ciphertext: String,
    /// The shift that produced it, in [1, 25].
    pub key: u8,
    /// Reference words derived from the plaintext.
    pub dictionary: Dictionary,
}

/// Generate a case with a key drawn from the thread RNG.
pub fn generate(plaintext: &str) -> CipherCase {
    generate_with_rng(plaintext, &mut rand::thread_rng())
}

/// Generate a case with a caller-supplied RNG. Tests and benches pass a
/// seeded one.
pub fn generate_with_rng<R: Rng>(plaintext: &str, rng: &mut R) -> CipherCase {
    let dictionary = Dictionary::build(plaintext);
    let key: u8 = rng.gen_range(1..=25);
    let ciphertext = codec::encode(plaintext, i32::from(key));
    debug!(
        "generated case with key {} and {} dictionary words",
        key,
        dictionary.len()
    );
    CipherCase {
        ciphertext,
        key,
        dictionary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn key_stays_in_range_and_decoding_recovers_the_text() {
        let plaintext = "el perro come carne";
        for seed in 0..50 {
            let case = generate_with_rng(plaintext, &mut StdRng::seed_from_u64(seed));
            assert!((1..=25).contains(&case.key));
            assert_eq!(
                codec::decode(&case.ciphertext, i32::from(case.key)),
                plaintext
            );
        }
    }

    #[test]
    fn the_dictionary_comes_from_the_plaintext() {
        let case = generate_with_rng(
            "la cigüeña vieja y única",
            &mut StdRng::seed_from_u64(42),
        );
        assert!(case.dictionary.contains("cigueña"));
        assert!(case.dictionary.contains("unica"));
        assert!(!case.dictionary.contains("y"));
    }

    #[test]
    fn ciphertext_is_lowercase_with_non_letters_untouched() {
        let case = generate_with_rng("Hola, Mundo 77!", &mut StdRng::seed_from_u64(3));
        assert!(case.ciphertext.ends_with(" 77!"));
        assert!(case.ciphertext.contains(','));
        assert!(!case.ciphertext.chars().any(|c| c.is_ascii_uppercase()));
    }
}
