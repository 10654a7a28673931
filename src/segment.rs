use crate::transliterate;
use compact_str::CompactString;
use smallvec::SmallVec;
use unicode_segmentation::UnicodeSegmentation;

/// One word of a name, keeping the original surface form for rendering
/// alongside the folded form used for comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub surface: &'a str,
    pub normalized: CompactString,
    pub position: usize,
}

pub type Tokens<'a> = SmallVec<[Token<'a>; 5]>;

pub struct Words<'a> {
    text: &'a str,
    current_word: &'a str,
}

impl<'a> Words<'a> {
    pub fn from_text(text: &'a str) -> Words<'a> {
        Words {
            text,
            current_word: "",
        }
    }
}

impl<'a> Iterator for Words<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        // If we're in the middle of a word that needs sub-segmentation by
        // unicode rules, handle that
        if !self.current_word.is_empty() {
            if let Some((start, subword)) = self
                .current_word
                .split_word_bound_indices()
                .find(|(_, subword)| subword.chars().any(char::is_alphabetic))
            {
                self.current_word = &self.current_word[start + subword.len()..];
                return Some(subword);
            } else {
                self.current_word = "";
            }
        }

        // Otherwise, skip any leading whitespace
        self.text = self.text.trim_start();

        if self.text.is_empty() {
            return None;
        }

        // Now look for the next whitespace that remains
        let next_whitespace = self
            .text
            .find(char::is_whitespace)
            .unwrap_or(self.text.len());
        let word = &self.text[0..next_whitespace];
        self.text = &self.text[next_whitespace..];

        if !word.chars().any(char::is_alphabetic) {
            // Not a word, skip it by recursing
            self.next()
        } else if word.chars().all(|c| !c.is_ascii_alphabetic()) {
            // For completely non-ASCII words, likely Hangul or similar,
            // we defer to the unicode_segmentation library
            self.current_word = word;
            self.next()
        } else {
            // For ASCII, we split on whitespace only
            Some(word)
        }
    }
}

/// Split a name into tokens. Words without any letters are dropped; an
/// input with no words at all yields an empty sequence.
pub fn tokenize(text: &str) -> Tokens {
    Words::from_text(text)
        .enumerate()
        .map(|(position, surface)| Token {
            surface,
            normalized: transliterate::fold_word(surface),
            position,
        })
        .collect()
}
