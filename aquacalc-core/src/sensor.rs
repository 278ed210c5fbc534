//! Light sensor port.
//!
//! A sensor only delivers lux values. Every sample is classified on its own:
//! there is no smoothing, debouncing or sampling policy here.

use crate::{error::AquacalcError, light::evaluate_light_level};
use aquacalc_schemas::light::{LightLevel, LightSensorSample};
use std::collections::VecDeque;
use std::path::Path;

pub trait LightSensor {
    /// `false` when the device has no light sensor at all.
    fn has_light_sensor(&self) -> bool;

    /// Next value from the feed, or `None` once the feed has ended.
    fn next_sample(&mut self) -> Result<Option<LightSensorSample>, AquacalcError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedSample {
    pub sample: LightSensorSample,
    pub level: LightLevel,
}

/// Takes a single sample. Missing hardware is `Ok(None)`, not an error.
pub fn current_reading<S: LightSensor>(
    sensor: &mut S,
) -> Result<Option<LightSensorSample>, AquacalcError> {
    if !sensor.has_light_sensor() {
        return Ok(None);
    }
    sensor.next_sample()
}

/// Classifies every sample the sensor delivers until it ends or fails.
/// The first error is yielded and ends the feed.
pub fn classify_feed<S: LightSensor>(
    sensor: &mut S,
) -> impl Iterator<Item = Result<ClassifiedSample, AquacalcError>> + '_ {
    let mut done = !sensor.has_light_sensor();
    std::iter::from_fn(move || {
        if done {
            return None;
        }
        match sensor.next_sample() {
            Ok(Some(sample)) => Some(Ok(ClassifiedSample {
                sample,
                level: evaluate_light_level(sample.intensity),
            })),
            Ok(None) => {
                done = true;
                None
            }
            Err(e) => {
                done = true;
                Some(Err(e))
            }
        }
    })
}

/// A device without a light sensor.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoLightSensor;

impl LightSensor for NoLightSensor {
    fn has_light_sensor(&self) -> bool {
        false
    }

    fn next_sample(&mut self) -> Result<Option<LightSensorSample>, AquacalcError> {
        Err(AquacalcError::SensorUnavailable)
    }
}

/// Plays back previously captured samples.
#[derive(Debug, Default, Clone)]
pub struct ReplaySensor {
    samples: VecDeque<LightSensorSample>,
}

impl ReplaySensor {
    pub fn from_samples(samples: impl IntoIterator<Item = LightSensorSample>) -> Self {
        Self {
            samples: samples.into_iter().collect(),
        }
    }

    /// Loads a CSV capture with `intensity,timestamp_ms,accuracy` columns.
    pub fn from_csv(path: impl AsRef<Path>) -> Result<Self, AquacalcError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let mut reader = csv::Reader::from_path(path)
            .map_err(|e| AquacalcError::CsvError(display.clone(), e))?;

        let mut samples = VecDeque::new();
        for result in reader.deserialize() {
            let sample: LightSensorSample =
                result.map_err(|e| AquacalcError::CsvError(display.clone(), e))?;
            samples.push_back(sample);
        }
        Ok(Self { samples })
    }

    pub fn remaining(&self) -> usize {
        self.samples.len()
    }
}

impl LightSensor for ReplaySensor {
    fn has_light_sensor(&self) -> bool {
        true
    }

    fn next_sample(&mut self) -> Result<Option<LightSensorSample>, AquacalcError> {
        Ok(self.samples.pop_front())
    }
}
