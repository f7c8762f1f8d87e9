// Morse code encoding, decoding and timed signal playback

pub mod alphabet;
pub mod config;
pub mod patterns;
#[cfg(feature = "player")]
pub mod player;
pub mod timing;
pub mod types;

#[cfg(test)]
mod tracing_init;

// Re-export main public API
pub use alphabet::{does_it_look_like_morse, Alphabet};
pub use config::{ConfigError, MorseConfig};
#[cfg(feature = "player")]
pub use player::{IntervalSequencePlayer, SignalCallback};
pub use timing::{sequence_duration, Timing};
pub use types::*;

/// Plaintext to Morse with the given spacing. Characters other than ASCII
/// letters and digits are dropped.
pub fn encode(text: &str, alphabet: &Alphabet) -> String {
    alphabet.encode(text)
}

/// Morse back to lowercase plaintext. Symbols that match nothing are dropped.
pub fn decode(morse: &str, alphabet: &Alphabet) -> String {
    alphabet.decode(morse)
}

/// Plaintext straight to the interval sequence that would play it.
pub fn encode_to_intervals(text: &str, alphabet: &Alphabet, timing: &Timing) -> Vec<Interval> {
    timing.morse_message_to_interval_sequence(&alphabet.encode(text))
}
