use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_INTER_LETTER_SPACE: usize = 3;
pub const DEFAULT_INTER_WORD_SPACE: usize = 7;
pub const MIN_INTER_LETTER_SPACE: i32 = 1;
pub const MIN_INTER_WORD_SPACE: i32 = 2;

pub const DEFAULT_DIT_MS: u32 = 50;
pub const DEFAULT_DITS_IN_A_DAH: f32 = 3.0;
pub const MIN_DITS_IN_A_DAH: f32 = 1.0;

/// One timed segment of playback: a signal pulse or a silence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interval {
    is_signal: bool,
    duration_ms: u32,
}

impl Interval {
    pub const fn new(is_signal: bool, duration_ms: u32) -> Self {
        Self {
            is_signal,
            duration_ms,
        }
    }

    pub const fn signal(duration_ms: u32) -> Self {
        Self::new(true, duration_ms)
    }

    pub const fn silence(duration_ms: u32) -> Self {
        Self::new(false, duration_ms)
    }

    pub const fn is_signal(&self) -> bool {
        self.is_signal
    }

    pub const fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(u64::from(self.duration_ms))
    }
}

/// Letter and word separation, in space units. Kept signed so that
/// out-of-range values survive deserialization and are rejected by the
/// validating setters instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpacingParams {
    pub inter_letter_space: i32,
    pub inter_word_space: i32,
}

impl Default for SpacingParams {
    fn default() -> Self {
        Self {
            inter_letter_space: DEFAULT_INTER_LETTER_SPACE as i32,
            inter_word_space: DEFAULT_INTER_WORD_SPACE as i32,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimingParams {
    pub dit_ms: i32,
    pub dits_in_a_dah: f32,
}

impl Default for TimingParams {
    fn default() -> Self {
        Self {
            dit_ms: DEFAULT_DIT_MS as i32,
            dits_in_a_dah: DEFAULT_DITS_IN_A_DAH,
        }
    }
}
