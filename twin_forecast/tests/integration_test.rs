use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;
use twin_forecast::{DataLoader, Diagnostics, PredictionEngine, Trend};

// Export from a plant historian: timestamp, two sensors and a status column
fn create_sample_data() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();

    writeln!(file, "timestamp,tank_level,pump_rpm,status").unwrap();
    writeln!(file, "2024-06-01 12:00:00,80.0,1500,RUN").unwrap();
    writeln!(file, "2024-06-01 12:01:00,78.0,1500,RUN").unwrap();
    writeln!(file, "2024-06-01 12:02:00,76.0,,RUN").unwrap();
    writeln!(file, "2024-06-01 12:03:00,74.0,1520,RUN").unwrap();
    writeln!(file, "2024-06-01 12:04:00,72.0,1480,RUN").unwrap();
    writeln!(file, "2024-06-01 12:05:00,70.0,1500,STOP").unwrap();

    file
}

#[test]
fn test_full_forecast_workflow() {
    // 1. Load data
    let data_file = create_sample_data();
    let data = DataLoader::from_csv_file(data_file.path()).unwrap();
    assert_eq!(data.len(), 6);

    let engine = PredictionEngine::default();
    let variables = ["tank_level", "pump_rpm", "status"];

    // 2. Regression: the level drains 2 units per sample
    let regression = engine.run("prediccion1", &data, &variables);
    assert_eq!(regression.len(), 2);
    assert_eq!(regression[0].variable, "tank_level");
    assert_eq!(regression[0].values(), vec![68.0, 66.0, 64.0, 62.0, 60.0]);
    match &regression[0].diagnostics {
        Diagnostics::LinearRegression { trend, equation, .. } => {
            assert_eq!(*trend, Trend::Descending);
            assert_eq!(equation, "y = -2.000x + 80.00");
        }
        other => panic!("unexpected diagnostics: {:?}", other),
    }
    // The blank rpm cell is dropped from the regression sample.
    match &regression[1].diagnostics {
        Diagnostics::LinearRegression { sample_count, .. } => assert_eq!(*sample_count, 5),
        other => panic!("unexpected diagnostics: {:?}", other),
    }

    // 3. Moving average: the blank rpm cell counts as zero
    let average = engine.run("prediccion2", &data, &variables);
    assert_eq!(average.len(), 2);
    assert_eq!(average[0].values(), vec![74.0; 5]);
    assert_eq!(average[1].values(), vec![1200.0; 5]);

    // 4. Persistence: the first record is the current sample
    let persistence = engine.run("persistencia", &data, &variables);
    assert_eq!(persistence.len(), 2);
    assert_eq!(persistence[0].values(), vec![80.0; 5]);
    assert_eq!(persistence[1].values(), vec![1500.0; 5]);

    // 5. Everything serializes for the dashboard
    let json = serde_json::to_string(&engine.run_all(&data, &variables)).unwrap();
    assert!(json.contains("Media Móvil"));
}
