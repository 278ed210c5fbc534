use crate::{aquarium::AquariumShape, aquarium::Dimensions};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct TankSpec {
    pub name: String,
    pub shape: AquariumShape,
    pub dimensions: Dimensions,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SurveyReading {
    pub label: String,
    pub intensity_lux: u32,
    pub color_temperature_k: u32,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TankFile {
    pub schema_version: String,
    pub tanks: Vec<TankSpec>,
}

#[derive(Debug, Deserialize)]
pub struct LightSurveyFile {
    pub schema_version: String,
    pub readings: Vec<SurveyReading>,
}
