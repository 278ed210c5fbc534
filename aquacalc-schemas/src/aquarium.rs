use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The tank geometries the volume calculator understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AquariumShape {
    Rectangular,
    Cylindrical,
    /// Right-triangular prism that sits in a room corner.
    Corner,
    /// Regular hexagonal prism.
    Hexagonal,
}

impl AquariumShape {
    pub const ALL: [AquariumShape; 4] = [
        AquariumShape::Rectangular,
        AquariumShape::Cylindrical,
        AquariumShape::Corner,
        AquariumShape::Hexagonal,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            AquariumShape::Rectangular => "Rectangular",
            AquariumShape::Cylindrical => "Cylindrical",
            AquariumShape::Corner => "Corner (Triangular)",
            AquariumShape::Hexagonal => "Hexagonal",
        }
    }

    /// Whether `Dimensions::width` takes part in the volume of this shape.
    pub fn uses_width(self) -> bool {
        matches!(self, AquariumShape::Rectangular | AquariumShape::Corner)
    }

    /// Name of the measurement stored in `Dimensions::length` for this shape.
    pub fn length_role(self) -> &'static str {
        match self {
            AquariumShape::Rectangular => "length",
            AquariumShape::Cylindrical => "diameter",
            AquariumShape::Corner => "base",
            AquariumShape::Hexagonal => "side",
        }
    }

    /// Name of the measurement stored in `Dimensions::width`, if the shape uses it.
    pub fn width_role(self) -> Option<&'static str> {
        match self {
            AquariumShape::Rectangular => Some("width"),
            AquariumShape::Corner => Some("depth"),
            AquariumShape::Cylindrical | AquariumShape::Hexagonal => None,
        }
    }
}

impl fmt::Display for AquariumShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for AquariumShape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rectangular" | "rect" => Ok(AquariumShape::Rectangular),
            "cylindrical" | "cylinder" => Ok(AquariumShape::Cylindrical),
            "corner" | "triangular" => Ok(AquariumShape::Corner),
            "hexagonal" | "hex" => Ok(AquariumShape::Hexagonal),
            other => Err(format!(
                "unknown aquarium shape '{}' (expected rectangular, cylindrical, corner or hexagonal)",
                other
            )),
        }
    }
}

/// Linear tank measurements in centimeters.
///
/// `length` is the diameter of a cylindrical tank, the base of a corner tank
/// and the side of a hexagonal tank. `width` is the depth of a corner tank
/// and is ignored by cylindrical and hexagonal tanks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub length: f64,
    #[serde(default)]
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub fn new(length: f64, width: f64, height: f64) -> Self {
        Self {
            length,
            width,
            height,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeResult {
    pub cubic_centimeters: f64,
    pub liters: f64,
    pub gallons: f64,
    pub description: String,
}
