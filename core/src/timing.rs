use crate::alphabet::Alphabet;
use crate::patterns::{DAH, DIT};
use crate::types::{
    Interval, TimingParams, DEFAULT_DITS_IN_A_DAH, DEFAULT_DIT_MS, MIN_DITS_IN_A_DAH,
};
use std::time::Duration;
use tracing::debug;

const SPACE: u8 = b' ';

/// Dit length and dah ratio, and the conversion of a Morse string into a
/// timed interval sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    dit_ms: u32,
    dits_in_a_dah: f32,
}

impl Default for Timing {
    fn default() -> Self {
        Self::new()
    }
}

impl Timing {
    pub fn new() -> Self {
        Self {
            dit_ms: DEFAULT_DIT_MS,
            dits_in_a_dah: DEFAULT_DITS_IN_A_DAH,
        }
    }

    pub fn from_params(params: &TimingParams) -> Self {
        let mut timing = Self::new();
        timing.set_dit_ms(params.dit_ms);
        timing.set_dits_in_a_dah(params.dits_in_a_dah);
        timing
    }

    pub fn params(&self) -> TimingParams {
        TimingParams {
            dit_ms: self.dit_ms as i32,
            dits_in_a_dah: self.dits_in_a_dah,
        }
    }

    pub fn dit_ms(&self) -> u32 {
        self.dit_ms
    }

    pub fn set_dit_ms(&mut self, ms: i32) {
        if ms < 0 {
            debug!(ms, "ignoring negative dit length");
            return;
        }
        self.dit_ms = ms as u32;
    }

    pub fn dits_in_a_dah(&self) -> f32 {
        self.dits_in_a_dah
    }

    pub fn set_dits_in_a_dah(&mut self, f: f32) {
        if f.is_nan() || f < MIN_DITS_IN_A_DAH {
            debug!(f, "ignoring dah ratio below one dit");
            return;
        }
        self.dits_in_a_dah = f;
    }

    /// Dah length, truncated to whole milliseconds.
    pub fn dah_ms(&self) -> u32 {
        (f64::from(self.dit_ms) * f64::from(self.dits_in_a_dah)) as u32
    }

    /// Silence between the dits and dahs of one symbol.
    pub fn inter_element_ms(&self) -> u32 {
        self.dit_ms
    }

    /// Length of one space unit.
    pub fn space_ms(&self) -> u32 {
        self.dit_ms
    }

    pub fn inter_symbol_ms(&self, alphabet: &Alphabet) -> u32 {
        space_run_ms(self.space_ms(), alphabet.inter_symbol_spaces())
    }

    pub fn inter_word_ms(&self, alphabet: &Alphabet) -> u32 {
        space_run_ms(self.space_ms(), alphabet.inter_word_spaces())
    }

    /// Turn a Morse string into the intervals to play, in order.
    ///
    /// Each dit or dah is followed by an inter-element silence unless the
    /// message ends or a space comes next. A run of spaces becomes a single
    /// silence of one space unit per character. Other characters are skipped.
    pub fn morse_message_to_interval_sequence(&self, msg: &str) -> Vec<Interval> {
        let bytes = msg.as_bytes();
        let mut intervals = Vec::new();
        let mut i = 0;

        while i < bytes.len() {
            match bytes[i] {
                element @ (DIT | DAH) => {
                    let ms = if element == DIT {
                        self.dit_ms
                    } else {
                        self.dah_ms()
                    };
                    intervals.push(Interval::signal(ms));
                    if bytes.get(i + 1).is_some_and(|&next| next != SPACE) {
                        intervals.push(Interval::silence(self.inter_element_ms()));
                    }
                    i += 1;
                }
                SPACE => {
                    let run = bytes[i..].iter().take_while(|&&b| b == SPACE).count();
                    intervals.push(Interval::silence(space_run_ms(self.space_ms(), run)));
                    i += run;
                }
                _ => i += 1,
            }
        }

        intervals
    }
}

/// Silence for `spaces` space units, clamped to the largest representable
/// duration.
fn space_run_ms(space_ms: u32, spaces: usize) -> u32 {
    let spaces = u32::try_from(spaces).unwrap_or(u32::MAX);
    space_ms.saturating_mul(spaces)
}

/// Total playback time of a sequence.
pub fn sequence_duration(intervals: &[Interval]) -> Duration {
    intervals.iter().map(Interval::duration).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sos_intervals() -> Vec<Interval> {
        let s = [
            Interval::signal(50),
            Interval::silence(50),
            Interval::signal(50),
            Interval::silence(50),
            Interval::signal(50),
        ];
        let o = [
            Interval::signal(150),
            Interval::silence(50),
            Interval::signal(150),
            Interval::silence(50),
            Interval::signal(150),
        ];
        let gap = [Interval::silence(150)];
        [&s[..], &gap[..], &o[..], &gap[..], &s[..]].concat()
    }

    #[test]
    fn three_dits_make_five_intervals() {
        let timing = Timing::new();
        assert_eq!(
            timing.morse_message_to_interval_sequence("..."),
            vec![
                Interval::signal(50),
                Interval::silence(50),
                Interval::signal(50),
                Interval::silence(50),
                Interval::signal(50),
            ]
        );
    }

    #[test]
    fn sos_word_coalesces_letter_gaps() {
        let timing = Timing::new();
        let seq = timing.morse_message_to_interval_sequence("...   ---   ...");
        assert_eq!(seq.len(), 17);
        assert_eq!(seq, sos_intervals());
    }

    #[test]
    fn word_gap_is_one_interval() {
        let timing = Timing::new();
        let seq = timing.morse_message_to_interval_sequence(".-       -");
        assert_eq!(
            seq,
            vec![
                Interval::signal(50),
                Interval::silence(50),
                Interval::signal(150),
                Interval::silence(350),
                Interval::signal(150),
            ]
        );
    }

    #[test]
    fn empty_and_unrecognized_messages_yield_nothing() {
        let timing = Timing::new();
        assert!(timing.morse_message_to_interval_sequence("").is_empty());
        assert!(timing.morse_message_to_interval_sequence("abc").is_empty());
    }

    #[test]
    fn unknown_character_after_element_still_gets_gap() {
        let timing = Timing::new();
        let seq = timing.morse_message_to_interval_sequence(".x.");
        assert_eq!(
            seq,
            vec![Interval::signal(50), Interval::silence(50), Interval::signal(50)]
        );
    }

    #[test]
    fn leading_and_trailing_spaces_become_silences() {
        let timing = Timing::new();
        let seq = timing.morse_message_to_interval_sequence("  . ");
        assert_eq!(
            seq,
            vec![Interval::silence(100), Interval::signal(50), Interval::silence(50)]
        );
    }

    #[test]
    fn dah_length_truncates_fractional_ratio() {
        let mut timing = Timing::new();
        timing.set_dit_ms(33);
        timing.set_dits_in_a_dah(2.5);
        assert_eq!(timing.dah_ms(), 82);
    }

    #[test]
    fn long_dit_saturates_instead_of_overflowing() {
        let mut timing = Timing::new();
        timing.set_dit_ms(i32::MAX);
        let seq = timing.morse_message_to_interval_sequence(".       .");
        assert_eq!(
            seq,
            vec![
                Interval::signal(i32::MAX as u32),
                Interval::silence(u32::MAX),
                Interval::signal(i32::MAX as u32),
            ]
        );
        assert_eq!(timing.inter_word_ms(&Alphabet::new()), u32::MAX);
        assert_eq!(timing.inter_symbol_ms(&Alphabet::new()), u32::MAX);
    }

    #[test]
    fn dah_length_keeps_precision_for_large_dits() {
        let mut timing = Timing::new();
        timing.set_dit_ms(16_777_217);
        timing.set_dits_in_a_dah(1.0);
        assert_eq!(timing.dah_ms(), 16_777_217);
    }

    #[test]
    fn setters_ignore_out_of_range_values() {
        let mut timing = Timing::new();
        timing.set_dit_ms(-1);
        timing.set_dits_in_a_dah(0.5);
        timing.set_dits_in_a_dah(f32::NAN);
        assert_eq!(timing, Timing::new());

        timing.set_dit_ms(0);
        timing.set_dits_in_a_dah(1.0);
        assert_eq!(timing.dit_ms(), 0);
        assert_eq!(timing.dits_in_a_dah(), 1.0);
    }

    #[test]
    fn spacing_durations_follow_alphabet() {
        let mut alphabet = Alphabet::new();
        let timing = Timing::new();
        assert_eq!(timing.inter_symbol_ms(&alphabet), 150);
        assert_eq!(timing.inter_word_ms(&alphabet), 350);

        alphabet.set_inter_word_spaces(10);
        assert_eq!(timing.inter_word_ms(&alphabet), 500);
        assert_eq!(timing.inter_element_ms(), timing.space_ms());
    }

    #[test]
    fn generated_sequence_is_not_affected_by_later_changes() {
        let mut timing = Timing::new();
        let seq = timing.morse_message_to_interval_sequence("-");
        timing.set_dit_ms(200);
        assert_eq!(seq, vec![Interval::signal(150)]);
    }

    #[test]
    fn sequence_duration_sums_all_intervals() {
        assert_eq!(sequence_duration(&sos_intervals()), Duration::from_millis(1350));
        assert_eq!(sequence_duration(&[]), Duration::ZERO);
    }
}
