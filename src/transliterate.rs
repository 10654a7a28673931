use compact_str::CompactString;
use deunicode::deunicode_char;
use std::str::Chars;

#[inline]
fn transliterate(c: char) -> Chars<'static> {
    // Codepoints with no ASCII mapping fold to nothing, which leaves
    // comparison to the remaining characters of the word.
    deunicode_char(c).unwrap_or("").chars()
}

#[inline]
fn ascii_to_lower_if_alpha(c: char) -> Option<char> {
    debug_assert!(c.is_ascii(), "{}", c.to_string());

    if c.is_ascii_lowercase() {
        Some(c)
    } else if c.is_ascii_uppercase() {
        Some(c.to_ascii_lowercase())
    } else {
        None
    }
}

pub fn to_ascii_casefolded(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars()
        .flat_map(transliterate)
        .filter_map(ascii_to_lower_if_alpha)
}

/// Comparison form of a single word: transliterated to ASCII, lowercased,
/// and stripped of anything that isn't a letter.
pub fn fold_word(word: &str) -> CompactString {
    to_ascii_casefolded(word).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_case_and_diacritics() {
        assert_eq!("nguyen", fold_word("Nguyễn"));
        assert_eq!("ly", fold_word("LÝ"));
        assert_eq!("caune", fold_word("caune"));
    }

    #[test]
    fn composed_and_decomposed_forms_agree() {
        // "é" as a single codepoint vs. "e" plus a combining acute
        assert_eq!(fold_word("Andr\u{e9}"), fold_word("Andre\u{301}"));
    }

    #[test]
    fn ignores_non_letters() {
        assert_eq!("obrien", fold_word("O'Brien"));
        assert_eq!("", fold_word("..."));
    }
}
