use crate::error::AquacalcError;
use aquacalc_schemas::light::{LightDisplayResult, LightLevel};
use csv::{Writer, WriterBuilder};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::path::Path;

/// One row of a reading log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp_ms: i64,
    pub intensity_lux: u32,
    pub color_temperature_k: u32,
    pub level: LightLevel,
    pub optimal_color: bool,
}

/// Appends evaluated readings to a CSV file, flushing after every row.
pub struct ReadingLogger {
    writer: Writer<fs::File>,
    path: String,
}

impl ReadingLogger {
    /// Opens `path` for appending. The header row is only written when the
    /// file is new or empty.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, AquacalcError> {
        let path = path.as_ref().display().to_string();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| AquacalcError::FileIO(path.clone(), e))?;
        let is_empty = file
            .metadata()
            .map_err(|e| AquacalcError::FileIO(path.clone(), e))?
            .len()
            == 0;

        let writer = WriterBuilder::new().has_headers(is_empty).from_writer(file);
        Ok(Self { writer, path })
    }

    pub fn log_reading(
        &mut self,
        result: &LightDisplayResult,
        timestamp_ms: i64,
    ) -> Result<(), AquacalcError> {
        let entry = LogEntry {
            timestamp_ms,
            intensity_lux: result.intensity_lux,
            color_temperature_k: result.color_temperature_k,
            level: result.level,
            optimal_color: result.is_optimal_color,
        };

        self.writer
            .serialize(entry)
            .map_err(|e| AquacalcError::CsvError(self.path.clone(), e))?;
        self.writer
            .flush()
            .map_err(|e| AquacalcError::FileIO(self.path.clone(), e))?;
        Ok(())
    }
}

pub fn read_log(path: impl AsRef<Path>) -> Result<Vec<LogEntry>, AquacalcError> {
    let display = path.as_ref().display().to_string();
    let mut reader = csv::Reader::from_path(path.as_ref())
        .map_err(|e| AquacalcError::CsvError(display.clone(), e))?;

    let mut entries = Vec::new();
    for result in reader.deserialize() {
        let entry: LogEntry = result.map_err(|e| AquacalcError::CsvError(display.clone(), e))?;
        entries.push(entry);
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::light::evaluate_reading;
    use aquacalc_schemas::light::LightReading;

    #[test]
    fn logged_readings_can_be_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("readings.csv");

        let mut logger = ReadingLogger::new(&path).unwrap();
        logger
            .log_reading(&evaluate_reading(LightReading::new(1_200, 2_700)), 1_000)
            .unwrap();
        logger
            .log_reading(&evaluate_reading(LightReading::new(7_500, 6_500)), 2_000)
            .unwrap();

        let entries = read_log(&path).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].level, LightLevel::Low);
        assert!(!entries[0].optimal_color);
        assert_eq!(entries[1].level, LightLevel::High);
        assert!(entries[1].optimal_color);
        assert_eq!(entries[1].timestamp_ms, 2_000);
    }

    #[test]
    fn later_sessions_append_to_an_existing_log() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("readings.csv");

        {
            let mut first = ReadingLogger::new(&path).unwrap();
            first
                .log_reading(&evaluate_reading(LightReading::new(900, 3_500)), 1_000)
                .unwrap();
        }
        {
            let mut second = ReadingLogger::new(&path).unwrap();
            second
                .log_reading(&evaluate_reading(LightReading::new(5_500, 6_000)), 2_000)
                .unwrap();
        }

        let entries = read_log(&path).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].timestamp_ms, 1_000);
        assert_eq!(entries[1].level, LightLevel::High);

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.matches("timestamp_ms").count(), 1);
    }

    #[test]
    fn missing_log_is_a_csv_error() {
        let err = read_log("/nonexistent/readings.csv").unwrap_err();
        assert!(matches!(err, AquacalcError::CsvError(_, _)));
    }
}
