use series_math::MathError;
use std::io;
use twin_forecast::error::ForecastError;

#[test]
fn test_error_conversion() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let forecast_error = ForecastError::from(io_error);
    assert!(matches!(forecast_error, ForecastError::IoError(_)));

    let json_error = serde_json::from_str::<Vec<u8>>("nope").unwrap_err();
    assert!(matches!(
        ForecastError::from(json_error),
        ForecastError::JsonError(_)
    ));
}

#[test]
fn test_math_error_mapping() {
    assert!(matches!(
        ForecastError::from(MathError::InsufficientData("1 point".to_string())),
        ForecastError::InsufficientData(_)
    ));
    assert!(matches!(
        ForecastError::from(MathError::DegenerateFit("same x".to_string())),
        ForecastError::DegenerateRegression(_)
    ));
    assert!(matches!(
        ForecastError::from(MathError::InvalidInput("window 0".to_string())),
        ForecastError::InvalidParameter(_)
    ));
}

#[test]
fn test_error_display() {
    let error = ForecastError::UnknownAlgorithm("foo".to_string());
    assert_eq!(error.to_string(), "Unknown algorithm: foo");

    let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "permission denied");
    let error_string = ForecastError::from(io_error).to_string();
    assert!(error_string.contains("IO error"));
    assert!(error_string.contains("permission denied"));
}
