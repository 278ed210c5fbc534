//! Aquarium volume and plant lighting calculators.
//!
//! The calculators in [`volume`], [`light`], [`validation`] and [`units`] are
//! pure functions with no I/O. [`history`] and [`sensor`] are ports for the
//! optional collaborators around them; [`logger`] and [`batch`] serve the
//! command line front end.

pub mod batch;
pub mod error;
pub mod history;
pub mod light;
pub mod logger;
pub mod sensor;
pub mod units;
pub mod validation;
pub mod volume;

pub use error::{AquacalcError, InvalidDimension};
pub use light::{evaluate_light_level, evaluate_reading};
pub use validation::{validate_dimensions, validation_message};
pub use volume::calculate_volume;
