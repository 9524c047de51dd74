//! Accent folding for the supported accented-Latin alphabet.
//! Maps a fixed set of accented vowels onto their base ASCII letter so the
//! a-z rotation math in the codec holds. Everything else passes through
//! untouched; case folding happens at encode time, not here.

/// Fold one accented vowel to its base lowercase letter.
///
/// Uppercase accented vowels fold straight to lowercase. Anything outside
/// the mapping, including plain uppercase consonants, is returned unchanged.
pub fn fold_accent(c: char) -> char {
    match c {
        'á' | 'Á' => 'a',
        'é' | 'É' => 'e',
        'í' | 'Í' => 'i',
        'ó' | 'Ó' => 'o',
        'ú' | 'Ú' | 'ü' | 'Ü' => 'u',
        _ => c,
    }
}

/// Fold every character of `text` through [`fold_accent`].
pub fn fold_accents(text: &str) -> String {
    text.chars().map(fold_accent).collect()
}
