//! Conversions between cubic centimeters, liters and US gallons.

pub const CM3_PER_LITER: f64 = 1000.0;
pub const GALLONS_PER_LITER: f64 = 0.264172;

pub fn cm3_to_liters(cubic_centimeters: f64) -> f64 {
    cubic_centimeters / CM3_PER_LITER
}

pub fn liters_to_gallons(liters: f64) -> f64 {
    liters * GALLONS_PER_LITER
}

/// Rounds half-up to one decimal place. Only meaningful for non-negative input,
/// which is all the calculators produce.
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub fn format_one_decimal(value: f64) -> String {
    format!("{:.1}", round_one_decimal(value))
}
