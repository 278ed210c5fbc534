use serde::{Deserialize, Serialize};
use std::fmt;

/// Light level for aquatic plants, ordered by ascending lux.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LightLevel {
    Low,
    Medium,
    High,
    Excessive,
}

impl LightLevel {
    pub const ALL: [LightLevel; 4] = [
        LightLevel::Low,
        LightLevel::Medium,
        LightLevel::High,
        LightLevel::Excessive,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            LightLevel::Low => "Low Light",
            LightLevel::Medium => "Medium Light",
            LightLevel::High => "High Light",
            LightLevel::Excessive => "Excessive Light",
        }
    }

    /// Hex color tag used when the level is shown to a user.
    pub fn color(self) -> &'static str {
        match self {
            LightLevel::Low => "#FF5722",
            LightLevel::Medium => "#FF9800",
            LightLevel::High => "#4CAF50",
            LightLevel::Excessive => "#F44336",
        }
    }
}

impl fmt::Display for LightLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Color temperature bands, ordered from warm to very cool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorTemperatureBand {
    /// Below 3000 K.
    Warm,
    /// 3000 K up to but excluding 5000 K.
    Neutral,
    /// 5000 K through 7000 K inclusive.
    Cool,
    /// Above 7000 K.
    VeryCool,
}

/// A single light measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightReading {
    pub intensity_lux: u32,
    pub color_temperature_k: u32,
}

impl LightReading {
    pub fn new(intensity_lux: u32, color_temperature_k: u32) -> Self {
        Self {
            intensity_lux,
            color_temperature_k,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightDisplayResult {
    pub intensity_lux: u32,
    pub color_temperature_k: u32,
    pub level: LightLevel,
    pub description: String,
    pub recommendation: String,
    pub is_optimal_color: bool,
    pub color_description: String,
}

/// A reading as it is handed to a persistence store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightRecord {
    pub id: u64,
    pub intensity_lux: u32,
    pub color_temperature_k: u32,
    /// Milliseconds since the Unix epoch.
    pub timestamp_ms: i64,
    pub level: LightLevel,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightHistoryItem {
    pub id: u64,
    pub intensity_lux: u32,
    pub color_temperature_k: u32,
    pub level: LightLevel,
    pub timestamp_ms: i64,
    pub notes: String,
    pub formatted_time: String,
    pub formatted_date: String,
}

/// One value delivered by a hardware light sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightSensorSample {
    pub intensity: u32,
    pub timestamp_ms: i64,
    #[serde(default)]
    pub accuracy: i32,
}
