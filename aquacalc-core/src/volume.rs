use crate::{
    error::InvalidDimension,
    units::{cm3_to_liters, format_one_decimal, liters_to_gallons},
    validation::validate_dimensions,
};
use aquacalc_schemas::aquarium::{AquariumShape, Dimensions, VolumeResult};
use std::f64::consts::PI;

/// Area factor of a regular hexagon, `3 * sqrt(3) / 2`, as used for hexagonal tanks.
pub const HEXAGON_AREA_FACTOR: f64 = 2.598;

/// Geometric volume in cubic centimeters.
pub fn volume_cm3(shape: AquariumShape, dimensions: &Dimensions) -> f64 {
    let Dimensions {
        length,
        width,
        height,
    } = *dimensions;

    match shape {
        AquariumShape::Rectangular => length * width * height,
        AquariumShape::Cylindrical => {
            let radius = length / 2.0;
            PI * radius * radius * height
        }
        AquariumShape::Corner => (length * width * height) / 2.0,
        AquariumShape::Hexagonal => HEXAGON_AREA_FACTOR * length * length * height,
    }
}

/// Computes the volume of a tank in every supported unit.
///
/// The dimensions are expected to have passed [`validate_dimensions`]; invalid
/// input still yields a result, it is just not meaningful.
pub fn calculate_volume(shape: AquariumShape, dimensions: &Dimensions) -> VolumeResult {
    let cubic_centimeters = volume_cm3(shape, dimensions);
    let liters = cm3_to_liters(cubic_centimeters);
    let gallons = liters_to_gallons(liters);
    let description = describe_volume(shape, dimensions, liters, gallons);

    VolumeResult {
        cubic_centimeters,
        liters,
        gallons,
        description,
    }
}

/// Validates first, then calculates.
pub fn calculate_checked(
    shape: AquariumShape,
    dimensions: &Dimensions,
) -> Result<VolumeResult, InvalidDimension> {
    validate_dimensions(dimensions, shape)?;
    Ok(calculate_volume(shape, dimensions))
}

/// Builds the human readable summary of a volume calculation.
///
/// Dimensions are truncated to whole centimeters; liters and gallons are
/// rounded to one decimal place.
pub fn describe_volume(
    shape: AquariumShape,
    dimensions: &Dimensions,
    liters: f64,
    gallons: f64,
) -> String {
    let length = dimensions.length as i64;
    let width = dimensions.width as i64;
    let height = dimensions.height as i64;

    let (shape_name, dimensions_text) = match shape {
        AquariumShape::Rectangular => (
            "rectangular",
            format!("{} cm long, {} cm wide and {} cm high", length, width, height),
        ),
        AquariumShape::Cylindrical => (
            "cylindrical",
            format!("{} cm in diameter and {} cm high", length, height),
        ),
        AquariumShape::Corner => (
            "corner",
            format!("{} cm base, {} cm depth and {} cm high", length, width, height),
        ),
        AquariumShape::Hexagonal => (
            "hexagonal",
            format!("{} cm per side and {} cm high", length, height),
        ),
    };

    format!(
        "Your {} aquarium of {} holds approximately {} L ({} gallons).",
        shape_name,
        dimensions_text,
        format_one_decimal(liters),
        format_one_decimal(gallons)
    )
}
