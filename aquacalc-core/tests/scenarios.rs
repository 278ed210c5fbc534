use aquacalc_core::{
    calculate_volume, evaluate_light_level,
    history::{record_from_reading, LightHistory, NoopStore},
    light::{color_temperature_description, is_optimal_color_temperature},
    logger::{read_log, ReadingLogger},
    sensor::{classify_feed, ReplaySensor},
    validation_message,
};
use aquacalc_schemas::{
    aquarium::{AquariumShape, Dimensions},
    light::{LightLevel, LightReading},
};
use std::io::Write;

#[test]
fn rectangular_display_tank() {
    let result = calculate_volume(AquariumShape::Rectangular, &Dimensions::new(100.0, 40.0, 50.0));
    assert_eq!(result.cubic_centimeters, 200_000.0);
    assert_eq!(result.liters, 200.0);
    assert_eq!(format!("{:.1}", result.gallons), "52.8");
}

#[test]
fn cylindrical_tank() {
    let result = calculate_volume(AquariumShape::Cylindrical, &Dimensions::new(30.0, 0.0, 40.0));
    assert_eq!(format!("{:.1}", result.cubic_centimeters), "28274.3");
    assert_eq!(format!("{:.1}", result.liters), "28.3");
}

#[test]
fn zero_length_rectangular_tank_is_rejected() {
    let message = validation_message(&Dimensions::new(0.0, 10.0, 10.0), AquariumShape::Rectangular);
    assert_eq!(message.as_deref(), Some("length must be greater than 0"));
}

#[test]
fn light_level_boundaries() {
    assert_eq!(evaluate_light_level(1_999), LightLevel::Low);
    assert_eq!(evaluate_light_level(2_000), LightLevel::Medium);
    assert_eq!(evaluate_light_level(10_000), LightLevel::Excessive);
}

#[test]
fn color_temperature_boundaries() {
    assert!(is_optimal_color_temperature(5_000));
    assert!(!is_optimal_color_temperature(4_999));
    assert!(is_optimal_color_temperature(7_000));
    assert!(!is_optimal_color_temperature(7_001));
    assert_eq!(
        color_temperature_description(7_000),
        "Cool light (blue-white) - optimal for aquatic plants"
    );
    assert_eq!(
        color_temperature_description(7_001),
        "Very cool light (blue) - may be excessive"
    );
}

#[test]
fn replayed_capture_flows_into_the_reading_log() {
    let dir = tempfile::tempdir().unwrap();
    let capture = dir.path().join("capture.csv");
    let mut file = std::fs::File::create(&capture).unwrap();
    writeln!(file, "intensity,timestamp_ms,accuracy").unwrap();
    writeln!(file, "1500,1000,3").unwrap();
    writeln!(file, "5200,2000,3").unwrap();
    writeln!(file, "11000,3000,2").unwrap();
    drop(file);

    let log_path = dir.path().join("log.csv");
    let mut logger = ReadingLogger::new(&log_path).unwrap();
    let mut sensor = ReplaySensor::from_csv(&capture).unwrap();

    for classified in classify_feed(&mut sensor) {
        let classified = classified.unwrap();
        let result = aquacalc_core::evaluate_reading(LightReading::new(
            classified.sample.intensity,
            6_500,
        ));
        assert_eq!(result.level, classified.level);
        logger.log_reading(&result, classified.sample.timestamp_ms).unwrap();
    }

    let entries = read_log(&log_path).unwrap();
    let levels: Vec<_> = entries.iter().map(|e| e.level).collect();
    assert_eq!(levels, vec![LightLevel::Low, LightLevel::High, LightLevel::Excessive]);
}

#[test]
fn default_store_keeps_nothing() {
    let mut history = LightHistory::new(NoopStore);
    history
        .insert(record_from_reading(LightReading::new(4_000, 6_000), 0, "manual"))
        .unwrap();
    assert_eq!(history.count().unwrap(), 0);
    assert!(history.all().unwrap().is_empty());
}
