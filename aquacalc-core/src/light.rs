//! Light level classification for planted aquariums.
//!
//! Lux bands are half-open, with each boundary belonging to the higher band:
//!
//! | lux             | level     |
//! |-----------------|-----------|
//! | `[0, 2000)`     | Low       |
//! | `[2000, 5000)`  | Medium    |
//! | `[5000, 10000)` | High      |
//! | `[10000, ∞)`    | Excessive |

use aquacalc_schemas::light::{ColorTemperatureBand, LightDisplayResult, LightLevel, LightReading};
use std::ops::RangeInclusive;

pub const MEDIUM_LIGHT_LUX: u32 = 2_000;
pub const HIGH_LIGHT_LUX: u32 = 5_000;
pub const EXCESSIVE_LIGHT_LUX: u32 = 10_000;

pub const OPTIMAL_COLOR_TEMPERATURE_K: RangeInclusive<u32> = 5_000..=7_000;
pub const NEUTRAL_COLOR_TEMPERATURE_K: u32 = 3_000;

pub fn evaluate_light_level(intensity_lux: u32) -> LightLevel {
    if intensity_lux < MEDIUM_LIGHT_LUX {
        LightLevel::Low
    } else if intensity_lux < HIGH_LIGHT_LUX {
        LightLevel::Medium
    } else if intensity_lux < EXCESSIVE_LIGHT_LUX {
        LightLevel::High
    } else {
        LightLevel::Excessive
    }
}

pub fn light_description(level: LightLevel) -> &'static str {
    match level {
        LightLevel::Low => "Insufficient light - plants may grow slowly",
        LightLevel::Medium => "Moderate light - good growth for low-demand plants",
        LightLevel::High => "Sufficient light - optimal for most aquatic plants",
        LightLevel::Excessive => "Excessive light - may cause algae and stress plants",
    }
}

pub fn recommendation(level: LightLevel) -> &'static str {
    match level {
        LightLevel::Low => "Consider increasing light intensity or photoperiod",
        LightLevel::Medium => "Suitable level for low to medium demand plants",
        LightLevel::High => "Optimal level for aquatic plants",
        LightLevel::Excessive => "Reduce intensity or photoperiod to avoid algae",
    }
}

pub fn is_optimal_color_temperature(kelvin: u32) -> bool {
    OPTIMAL_COLOR_TEMPERATURE_K.contains(&kelvin)
}

/// 7000 K is the top of the optimal band; only values above it are very cool.
pub fn color_temperature_band(kelvin: u32) -> ColorTemperatureBand {
    if kelvin < NEUTRAL_COLOR_TEMPERATURE_K {
        ColorTemperatureBand::Warm
    } else if kelvin < *OPTIMAL_COLOR_TEMPERATURE_K.start() {
        ColorTemperatureBand::Neutral
    } else if kelvin <= *OPTIMAL_COLOR_TEMPERATURE_K.end() {
        ColorTemperatureBand::Cool
    } else {
        ColorTemperatureBand::VeryCool
    }
}

pub fn color_temperature_description(kelvin: u32) -> &'static str {
    match color_temperature_band(kelvin) {
        ColorTemperatureBand::Warm => "Warm light (yellow) - not ideal for plants",
        ColorTemperatureBand::Neutral => "Neutral light - acceptable for plants",
        ColorTemperatureBand::Cool => "Cool light (blue-white) - optimal for aquatic plants",
        ColorTemperatureBand::VeryCool => "Very cool light (blue) - may be excessive",
    }
}

/// Classifies a reading and gathers everything a caller needs to display it.
pub fn evaluate_reading(reading: LightReading) -> LightDisplayResult {
    let level = evaluate_light_level(reading.intensity_lux);
    LightDisplayResult {
        intensity_lux: reading.intensity_lux,
        color_temperature_k: reading.color_temperature_k,
        level,
        description: light_description(level).to_string(),
        recommendation: recommendation(level).to_string(),
        is_optimal_color: is_optimal_color_temperature(reading.color_temperature_k),
        color_description: color_temperature_description(reading.color_temperature_k).to_string(),
    }
}
