//! The rotation codec: shifts single letters around the 26-letter lowercase
//! cycle with wrap-around, and whole strings letter by letter.
//!
//! 'ñ'/'Ñ' sits far outside a-z in the character table, so it gets an
//! explicit branch that rotates it as if it occupied the position of 'n'
//! instead of being folded into the generic wrap arithmetic.

use crate::normalizer::fold_accent;

/// Code of 'a', the bottom of the rotation cycle.
const CYCLE_START: i32 = 'a' as i32;
/// Code of 'z', the top of the rotation cycle.
const CYCLE_END: i32 = 'z' as i32;
/// Number of letters in the cycle.
const CYCLE_LEN: i32 = 26;
/// 'ñ' rotates as if it sat at the position of 'n'.
const ENE_ANCHOR: i32 = 'n' as i32;

/// Wrap a shifted letter code back into the a-z range.
///
/// Inputs are pre-shifted by at most one full cycle (shift magnitude is
/// bounded to 26), so a single add or subtract of 26 is enough.
pub fn wrap(code: i32) -> i32 {
    if code > CYCLE_END {
        code - CYCLE_LEN
    } else if code < CYCLE_START {
        code + CYCLE_LEN
    } else {
        code
    }
}

/// Rotate one character by a signed offset.
///
/// Non-alphabetic characters pass through unchanged, as do alphabetic
/// characters outside the supported accented-Latin set.
fn rotate_char(c: char, delta: i32) -> char {
    if c == 'ñ' || c == 'Ñ' {
        // The sentinel: rotate from the position of 'n'. wrap() keeps the
        // result inside a-z, so from_u32 cannot fail here.
        return char::from_u32(wrap(ENE_ANCHOR + delta) as u32).unwrap_or(c);
    }
    let folded = fold_accent(c);
    if folded.is_ascii_alphabetic() {
        char::from_u32(wrap(folded as i32 + delta) as u32).unwrap_or(c)
    } else {
        c
    }
}

/// Rotate `c` forward by `shift` (the encryption direction).
pub fn encode_char(c: char, shift: i32) -> char {
    rotate_char(c, shift)
}

/// Rotate `c` backward by `shift` (the decryption direction).
pub fn decode_char(c: char, shift: i32) -> char {
    rotate_char(c, -shift)
}

/// Encode a whole plaintext under `shift`.
///
/// The source is lowercased first, so ciphertext letters are always
/// lowercase; non-alphabetic characters keep their positions verbatim.
pub fn encode(text: &str, shift: i32) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| encode_char(c, shift))
        .collect()
}

/// Decode a whole ciphertext under `shift`, letter by letter, preserving
/// positions and non-alphabetic characters verbatim.
pub fn decode(text: &str, shift: i32) -> String {
    text.chars().map(|c| decode_char(c, shift)).collect()
}
