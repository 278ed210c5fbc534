use crate::{
    error::AquacalcError,
    light::evaluate_reading,
    volume::calculate_checked,
};
use aquacalc_schemas::{
    aquarium::{AquariumShape, Dimensions, VolumeResult},
    file_formats::{SurveyReading, TankSpec},
    light::{LightDisplayResult, LightLevel, LightReading},
};
use serde::Serialize;
use std::collections::BTreeMap;

/// Outcome for one tank: either a volume or the first validation message.
#[derive(Debug, Clone, Serialize)]
pub struct TankOutcome {
    pub name: String,
    pub shape: AquariumShape,
    pub dimensions: Dimensions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<VolumeResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SurveyOutcome {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub result: LightDisplayResult,
}

#[derive(Debug, Default, Clone, Serialize)]
pub struct BatchReport {
    pub tanks: Vec<TankOutcome>,
    pub readings: Vec<SurveyOutcome>,
    pub total_liters: f64,
    pub total_gallons: f64,
    pub readings_per_level: BTreeMap<LightLevel, usize>,
}

impl BatchReport {
    pub fn valid_tanks(&self) -> impl Iterator<Item = (&TankOutcome, &VolumeResult)> {
        self.tanks
            .iter()
            .filter_map(|t| t.volume.as_ref().map(|v| (t, v)))
    }

    pub fn rejected_tanks(&self) -> impl Iterator<Item = &TankOutcome> {
        self.tanks.iter().filter(|t| t.error.is_some())
    }

    pub fn to_json(&self) -> Result<String, AquacalcError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Runs every tank through validation and the volume calculator, and every
/// survey reading through the light evaluator. Invalid tanks are reported,
/// not dropped, and do not count towards the totals.
pub fn evaluate_batch(tanks: &[TankSpec], readings: &[SurveyReading]) -> BatchReport {
    let mut report = BatchReport::default();

    for tank in tanks {
        let outcome = match calculate_checked(tank.shape, &tank.dimensions) {
            Ok(volume) => {
                report.total_liters += volume.liters;
                report.total_gallons += volume.gallons;
                TankOutcome {
                    name: tank.name.clone(),
                    shape: tank.shape,
                    dimensions: tank.dimensions,
                    volume: Some(volume),
                    error: None,
                }
            }
            Err(e) => TankOutcome {
                name: tank.name.clone(),
                shape: tank.shape,
                dimensions: tank.dimensions,
                volume: None,
                error: Some(e.to_string()),
            },
        };
        report.tanks.push(outcome);
    }

    for reading in readings {
        let result = evaluate_reading(LightReading::new(
            reading.intensity_lux,
            reading.color_temperature_k,
        ));
        *report.readings_per_level.entry(result.level).or_insert(0) += 1;
        report.readings.push(SurveyOutcome {
            label: reading.label.clone(),
            notes: reading.notes.clone(),
            result,
        });
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tank(name: &str, shape: AquariumShape, l: f64, w: f64, h: f64) -> TankSpec {
        TankSpec {
            name: name.to_string(),
            shape,
            dimensions: Dimensions::new(l, w, h),
        }
    }

    fn survey(label: &str, lux: u32, kelvin: u32) -> SurveyReading {
        SurveyReading {
            label: label.to_string(),
            intensity_lux: lux,
            color_temperature_k: kelvin,
            notes: None,
        }
    }

    #[test]
    fn invalid_tanks_are_reported_but_not_totalled() {
        let tanks = vec![
            tank("display", AquariumShape::Rectangular, 100.0, 40.0, 50.0),
            tank("broken", AquariumShape::Corner, 50.0, 0.0, 40.0),
        ];
        let report = evaluate_batch(&tanks, &[]);

        assert_eq!(report.valid_tanks().count(), 1);
        let rejected: Vec<_> = report.rejected_tanks().collect();
        assert_eq!(rejected.len(), 1);
        assert_eq!(rejected[0].error.as_deref(), Some("depth must be greater than 0"));
        assert_eq!(report.total_liters, 200.0);
    }

    #[test]
    fn readings_are_counted_per_level() {
        let readings = vec![
            survey("shade", 800, 3_200),
            survey("mid", 2_500, 6_000),
            survey("surface", 2_000, 6_500),
            survey("noon", 15_000, 7_500),
        ];
        let report = evaluate_batch(&[], &readings);

        assert_eq!(report.readings_per_level.get(&LightLevel::Low), Some(&1));
        assert_eq!(report.readings_per_level.get(&LightLevel::Medium), Some(&2));
        assert_eq!(report.readings_per_level.get(&LightLevel::High), None);
        assert_eq!(report.readings_per_level.get(&LightLevel::Excessive), Some(&1));
    }

    #[test]
    fn report_serializes_to_json() {
        let report = evaluate_batch(
            &[tank("nano", AquariumShape::Cylindrical, 30.0, 0.0, 40.0)],
            &[survey("tank", 6_000, 6_500)],
        );
        let json = report.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["tanks"][0]["shape"], "cylindrical");
        assert_eq!(value["readings"][0]["result"]["level"], "high");
        assert!(value["tanks"][0].get("error").is_none());
    }
}
