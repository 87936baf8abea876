/*!
 * Tests for comparison configuration
 */

use mathcheck::app_config::{Config, LogLevel, OutputFormat};
use mathcheck::extraction::RegionOrder;

/// Test that the configuration round-trips through JSON
#[test]
fn test_config_serialization_shouldUseLowercaseNames() {
    let config = Config {
        region_order: RegionOrder::Category,
        output_format: OutputFormat::Json,
        log_level: LogLevel::Debug,
        ..Config::default()
    };

    let json = serde_json::to_string(&config).unwrap();

    assert!(json.contains(r#""region_order":"category""#));
    assert!(json.contains(r#""output_format":"json""#));
    assert!(json.contains(r#""log_level":"debug""#));

    let parsed: Config = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, config);
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousWidths_shouldValidateCorrectly() {
    let mut config = Config::default();
    assert!(config.validate().is_ok());

    config.snippet_width = 0;
    assert!(config.validate().is_err());

    config.snippet_width = 1;
    assert!(config.validate().is_ok());
}
