use crate::error::InvalidDimension;
use aquacalc_schemas::aquarium::{AquariumShape, Dimensions};

/// Checks the measurements a shape needs, stopping at the first failure.
///
/// Height is checked first, then the length-role field, then width for the
/// shapes that use it. NaN is treated like a missing value.
pub fn validate_dimensions(
    dimensions: &Dimensions,
    shape: AquariumShape,
) -> Result<(), InvalidDimension> {
    if is_missing(dimensions.height) {
        return Err(InvalidDimension { field: "height" });
    }
    if is_missing(dimensions.length) {
        return Err(InvalidDimension {
            field: shape.length_role(),
        });
    }
    if let Some(field) = shape.width_role() {
        if is_missing(dimensions.width) {
            return Err(InvalidDimension { field });
        }
    }
    Ok(())
}

/// The first validation failure as a display message, or `None` when valid.
pub fn validation_message(dimensions: &Dimensions, shape: AquariumShape) -> Option<String> {
    validate_dimensions(dimensions, shape)
        .err()
        .map(|e| e.to_string())
}

fn is_missing(value: f64) -> bool {
    value.is_nan() || value <= 0.0
}
