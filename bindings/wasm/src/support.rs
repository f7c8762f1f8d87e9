// Support utilities for WASM bindings
use morsica_core::MorseConfig;

/// Parse a JSON config, falling back to defaults when it is empty or invalid.
/// The error is returned alongside so the caller can report it.
pub fn parse_with_defaults(config_json: &str) -> (MorseConfig, Option<String>) {
    if config_json.trim().is_empty() || config_json == "{}" {
        return (MorseConfig::default(), None);
    }
    match MorseConfig::from_json(config_json) {
        Ok(config) => (config, None),
        Err(err) => (MorseConfig::default(), Some(err.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_config_uses_defaults() {
        for json in ["", "  ", "{}"] {
            let (config, err) = parse_with_defaults(json);
            assert_eq!(config, MorseConfig::default());
            assert!(err.is_none());
        }
    }

    #[test]
    fn invalid_config_reports_error() {
        let (config, err) = parse_with_defaults("not json");
        assert_eq!(config, MorseConfig::default());
        assert!(err.is_some());
    }

    #[test]
    fn valid_config_is_parsed() {
        let (config, err) = parse_with_defaults(r#"{"ditMs": 75}"#);
        assert!(err.is_none());
        assert_eq!(config.timing().dit_ms(), 75);
    }
}
