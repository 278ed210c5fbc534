use anyhow::{Context, Result};
use aquacalc_schemas::file_formats::{LightSurveyFile, SurveyReading, TankFile, TankSpec};
use std::{fs, path::Path};

/// Everything a batch run reads from disk.
pub struct BatchInput {
    pub tanks: Vec<TankSpec>,
    pub readings: Vec<SurveyReading>,
}

impl BatchInput {
    /// Loads `tanks/*.yaml` and `light_surveys/*.yaml` under `base_path`.
    /// Either directory may be missing.
    pub fn load(base_path: &Path) -> Result<Self> {
        println!("Loading batch input from '{}'...", base_path.display());

        let tanks = load_yaml_files(base_path.join("tanks"), |file: TankFile| file.tanks)?;
        let readings = load_yaml_files(base_path.join("light_surveys"), |file: LightSurveyFile| {
            file.readings
        })?;

        println!(
            "Loaded {} tank(s) and {} light reading(s).",
            tanks.len(),
            readings.len()
        );
        Ok(Self { tanks, readings })
    }
}

/// Generic helper to load every YAML file in a directory, in file name order.
fn load_yaml_files<P, F, E, T>(dir_path: P, extract_vec: E) -> Result<Vec<T>>
where
    P: AsRef<Path>,
    F: for<'de> serde::Deserialize<'de>, // The file wrapper struct (e.g., TankFile)
    E: Fn(F) -> Vec<T>,                  // A closure to extract the Vec<T> from the wrapper
{
    let dir_path = dir_path.as_ref();
    if !dir_path.is_dir() {
        println!("Warning: '{}' not found, skipping.", dir_path.display());
        return Ok(Vec::new());
    }

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir_path)
        .with_context(|| format!("Failed to read directory: {:?}", dir_path))?
    {
        let path = entry?.path();
        if path.is_file() && path.extension().map_or(false, |s| s == "yaml" || s == "yml") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut items = Vec::new();
    for path in paths {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {:?}", path))?;
        let file_wrapper: F = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse YAML from {:?}", path))?;
        items.extend(extract_vec(file_wrapper));
    }
    Ok(items)
}
