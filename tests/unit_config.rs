// tests/unit_config.rs
use salescope_core::config::Config;

#[test]
fn test_defaults() {
    let config = Config::new();
    assert!(!config.preferences.strict);
    assert_eq!(config.preferences.revenue_strategy, "discounted");
}

#[test]
fn test_parse_toml_overrides_preferences() {
    let mut config = Config::new();
    config.parse_toml(
        "[preferences]\nstrict = true\nrevenue_strategy = \"margin\"\n",
    );
    assert!(config.preferences.strict);
    assert_eq!(config.preferences.revenue_strategy, "margin");
}

#[test]
fn test_malformed_toml_keeps_current_settings() {
    let mut config = Config::new();
    config.parse_toml("[preferences\nstrict = maybe");
    assert!(!config.preferences.strict);
    assert_eq!(config.preferences.revenue_strategy, "discounted");
}

#[test]
fn test_partial_toml_fills_missing_fields_with_defaults() {
    let mut config = Config::new();
    config.parse_toml("[preferences]\nstrict = true\n");
    assert!(config.preferences.strict);
    assert_eq!(config.preferences.revenue_strategy, "discounted");
}
