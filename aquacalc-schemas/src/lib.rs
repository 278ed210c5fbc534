//! Plain data types shared by the aquacalc calculators and their callers.

pub mod aquarium;
pub mod file_formats;
pub mod light;
