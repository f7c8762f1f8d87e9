use crate::patterns::{
    decode_digit, get_morse_symbol, is_valid_symbol, lookup_letter, DIGIT_SYMBOL_LEN,
};
use crate::types::{
    SpacingParams, DEFAULT_INTER_LETTER_SPACE, DEFAULT_INTER_WORD_SPACE, MIN_INTER_LETTER_SPACE,
    MIN_INTER_WORD_SPACE,
};
use tracing::debug;

const WORD_DELIMITER: char = ' ';

/// Text <-> Morse conversion with configurable letter and word spacing.
///
/// Spacing is expressed in space units: the number of literal space
/// characters written between letters and between words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    inter_letter_space: usize,
    inter_word_space: usize,
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::new()
    }
}

impl Alphabet {
    pub fn new() -> Self {
        Self {
            inter_letter_space: DEFAULT_INTER_LETTER_SPACE,
            inter_word_space: DEFAULT_INTER_WORD_SPACE,
        }
    }

    /// Start from the defaults and apply `params` through the setters, so
    /// out-of-range values are dropped.
    pub fn from_params(params: &SpacingParams) -> Self {
        let mut alphabet = Self::new();
        alphabet.set_inter_symbol_spaces(params.inter_letter_space);
        alphabet.set_inter_word_spaces(params.inter_word_space);
        alphabet
    }

    pub fn params(&self) -> SpacingParams {
        SpacingParams {
            inter_letter_space: self.inter_letter_space as i32,
            inter_word_space: self.inter_word_space as i32,
        }
    }

    pub fn inter_word_spaces(&self) -> usize {
        self.inter_word_space
    }

    pub fn inter_symbol_spaces(&self) -> usize {
        self.inter_letter_space
    }

    pub fn set_inter_word_spaces(&mut self, n: i32) {
        if n < MIN_INTER_WORD_SPACE {
            debug!(n, "ignoring inter-word spacing below minimum");
            return;
        }
        self.inter_word_space = n as usize;
    }

    pub fn set_inter_symbol_spaces(&mut self, n: i32) {
        if n < MIN_INTER_LETTER_SPACE {
            debug!(n, "ignoring inter-symbol spacing below minimum");
            return;
        }
        self.inter_letter_space = n as usize;
    }

    /// Encode plaintext into Morse.
    ///
    /// Characters without a symbol are skipped, but the letter separator
    /// after their position is still written.
    pub fn encode(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        let letter_gap = " ".repeat(self.inter_letter_space);
        let word_gap = " ".repeat(self.inter_word_space);

        let mut morse = String::new();
        for (w, word) in lowered.split(WORD_DELIMITER).enumerate() {
            if w > 0 {
                morse.push_str(&word_gap);
            }
            let bytes = word.as_bytes();
            for (i, &ch) in bytes.iter().enumerate() {
                if let Some(symbol) = get_morse_symbol(ch) {
                    morse.push_str(symbol);
                }
                if i + 1 < bytes.len() {
                    morse.push_str(&letter_gap);
                }
            }
        }
        morse
    }

    /// Decode Morse into lowercase plaintext, dropping anything that does
    /// not match a symbol.
    pub fn decode(&self, morse: &str) -> String {
        let word_gap = " ".repeat(self.inter_word_space);
        let mut words = morse.split(word_gap.as_str()).peekable();

        let mut text = String::new();
        while let Some(word) = words.next() {
            self.decode_word_into(word, &mut text);
            if words.peek().is_some() && !text.is_empty() {
                text.push(WORD_DELIMITER);
            }
        }
        text
    }

    fn decode_word_into(&self, word: &str, text: &mut String) {
        let letter_gap = " ".repeat(self.inter_letter_space);
        let decoded = word
            .split(letter_gap.as_str())
            .filter(|symbol| is_valid_symbol(symbol))
            .filter_map(|symbol| {
                if symbol.len() == DIGIT_SYMBOL_LEN {
                    decode_digit(symbol)
                } else {
                    lookup_letter(symbol)
                }
            });
        text.extend(decoded);
    }
}

/// Quick guess at whether `text` is Morse: only the first space-delimited
/// token is checked.
pub fn does_it_look_like_morse(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }
    text.split(WORD_DELIMITER).next().is_some_and(is_valid_symbol)
}
