use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;
use twin_forecast::{EngineConfig, ForecastError};

#[test]
fn test_default_config() {
    let config = EngineConfig::default();

    assert_eq!(config.max_window, 5);
    assert_eq!(config.trend_threshold, 0.01);
    assert_eq!(config.min_regression_samples, 2);
    assert!(config.validate().is_ok());
}

#[test]
fn test_partial_json_takes_defaults() {
    let config = EngineConfig::from_json_str(r#"{ "maxWindow": 3 }"#).unwrap();

    assert_eq!(
        config,
        EngineConfig {
            max_window: 3,
            ..EngineConfig::default()
        }
    );
}

#[test]
fn test_invalid_values_are_rejected() {
    for json in [
        r#"{ "maxWindow": 0 }"#,
        r#"{ "trendThreshold": -1.0 }"#,
        r#"{ "minRegressionSamples": 1 }"#,
    ] {
        assert!(
            matches!(
                EngineConfig::from_json_str(json),
                Err(ForecastError::InvalidParameter(_))
            ),
            "{} should be rejected",
            json
        );
    }
}

#[test]
fn test_malformed_json() {
    assert!(matches!(
        EngineConfig::from_json_str(r#"{ "maxWindow": "five" }"#),
        Err(ForecastError::JsonError(_))
    ));
}

#[test]
fn test_config_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, r#"{{ "trendThreshold": 0.5, "minRegressionSamples": 4 }}"#).unwrap();

    let config = EngineConfig::from_file(file.path()).unwrap();
    assert_eq!(config.trend_threshold, 0.5);
    assert_eq!(config.min_regression_samples, 4);
    assert_eq!(config.max_window, 5);

    assert!(matches!(
        EngineConfig::from_file("/nonexistent/config.json"),
        Err(ForecastError::IoError(_))
    ));
}
