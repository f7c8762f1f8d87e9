// WebAssembly bindings for encoding, decoding and interval generation
use js_sys::Array;
use morsica_core::{sequence_duration, Interval, MorseConfig};
use wasm_bindgen::prelude::*;

mod support;

// Console logging for debugging; the console only exists in the browser
#[cfg(target_arch = "wasm32")]
macro_rules! console_log {
    ($($t:tt)*) => (web_sys::console::log_1(&format_args!($($t)*).to_string().into()))
}

#[cfg(not(target_arch = "wasm32"))]
macro_rules! console_log {
    ($($t:tt)*) => {{
        let _ = format_args!($($t)*);
    }};
}

fn load_config(config_json: &str) -> MorseConfig {
    let (config, err) = support::parse_with_defaults(config_json);
    if let Some(err) = err {
        console_log!("morsica: {}, using defaults", err);
    }
    config
}

// JavaScript-compatible result type
#[wasm_bindgen]
pub struct IntervalSequenceResult {
    intervals: Vec<Interval>,
}

#[wasm_bindgen]
impl IntervalSequenceResult {
    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.intervals.len()
    }

    #[wasm_bindgen(getter)]
    pub fn total_ms(&self) -> f64 {
        sequence_duration(&self.intervals).as_millis() as f64
    }

    /// `[{ isSignal, durationMs }, ...]` in playback order.
    #[wasm_bindgen(getter)]
    pub fn intervals(&self) -> Result<Array, JsValue> {
        let array = Array::new();
        for interval in &self.intervals {
            let value = serde_wasm_bindgen::to_value(interval)
                .map_err(|e| JsValue::from_str(&e.to_string()))?;
            array.push(&value);
        }
        Ok(array)
    }
}

// Main JavaScript API functions

#[wasm_bindgen]
pub fn encode_text(text: &str, config_json: &str) -> String {
    load_config(config_json).alphabet().encode(text)
}

#[wasm_bindgen]
pub fn decode_morse(morse: &str, config_json: &str) -> String {
    load_config(config_json).alphabet().decode(morse)
}

#[wasm_bindgen]
pub fn does_it_look_like_morse(text: &str) -> bool {
    morsica_core::does_it_look_like_morse(text)
}

#[wasm_bindgen]
pub fn generate_interval_sequence(morse: &str, config_json: &str) -> IntervalSequenceResult {
    let intervals = load_config(config_json)
        .timing()
        .morse_message_to_interval_sequence(morse);
    IntervalSequenceResult { intervals }
}
