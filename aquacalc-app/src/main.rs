use anyhow::{bail, Context, Result};
use aquacalc_core::{
    batch,
    logger::ReadingLogger,
    sensor::{classify_feed, current_reading, LightSensor, NoLightSensor, ReplaySensor},
    validation_message,
};
use aquacalc_schemas::{
    aquarium::{AquariumShape, Dimensions},
    light::LightReading,
};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

mod config;
mod plotting;
mod report;

#[derive(Parser)]
#[command(name = "aquacalc", version, about = "Aquarium volume and plant lighting calculators")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Calculate the water volume of a tank (all measurements in cm)
    Volume {
        /// rectangular, cylindrical, corner or hexagonal
        #[arg(long)]
        shape: AquariumShape,
        /// Length, or diameter / base / side depending on the shape
        #[arg(long)]
        length: f64,
        /// Width, or depth for corner tanks; unused by cylindrical and hexagonal tanks
        #[arg(long, default_value_t = 0.0)]
        width: f64,
        #[arg(long)]
        height: f64,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Classify a light reading for aquatic plants
    Light {
        #[arg(long)]
        lux: u32,
        #[arg(long, default_value_t = 6500)]
        kelvin: u32,
        #[arg(long)]
        json: bool,
        /// Write the evaluated reading to this CSV file
        #[arg(long)]
        log: Option<PathBuf>,
    },
    /// Evaluate every tank and light survey under a directory
    Batch {
        /// Directory holding tanks/*.yaml and light_surveys/*.yaml
        input: PathBuf,
        #[arg(long, default_value = "./data/runs")]
        output_dir: PathBuf,
    },
    /// Classify readings from a light sensor feed
    Sensor {
        /// Replay a captured CSV feed (intensity,timestamp_ms,accuracy)
        #[arg(long)]
        replay: Option<PathBuf>,
        /// Color temperature to pair with each lux sample
        #[arg(long, default_value_t = 6500)]
        kelvin: u32,
        /// Only take the first sample
        #[arg(long)]
        once: bool,
        #[arg(long)]
        log: Option<PathBuf>,
    },
    /// Chart a reading log appended to by `light --log` or `sensor --log`
    Plot {
        log: PathBuf,
        #[arg(long, default_value = "light_intensity.png")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Volume {
            shape,
            length,
            width,
            height,
            json,
        } => run_volume(shape, Dimensions::new(length, width, height), json),
        Command::Light {
            lux,
            kelvin,
            json,
            log,
        } => run_light(LightReading::new(lux, kelvin), json, log.as_deref()),
        Command::Batch { input, output_dir } => run_batch(&input, &output_dir),
        Command::Sensor {
            replay,
            kelvin,
            once,
            log,
        } => match replay {
            Some(path) => {
                let sensor = ReplaySensor::from_csv(&path)
                    .with_context(|| format!("Failed to load sensor capture {:?}", path))?;
                run_sensor(sensor, kelvin, once, log.as_deref())
            }
            None => run_sensor(NoLightSensor, kelvin, once, log.as_deref()),
        },
        Command::Plot { log, output } => {
            let count = plotting::plot_light_log(&log, &output)?;
            println!("Plotted {} reading(s).", count);
            Ok(())
        }
    }
}

fn run_volume(shape: AquariumShape, dimensions: Dimensions, json: bool) -> Result<()> {
    if let Some(message) = validation_message(&dimensions, shape) {
        bail!("{}", message);
    }

    let result = aquacalc_core::calculate_volume(shape, &dimensions);
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        report::print_volume(shape, &result);
    }
    Ok(())
}

fn run_light(reading: LightReading, json: bool, log: Option<&Path>) -> Result<()> {
    let result = aquacalc_core::evaluate_reading(reading);
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        report::print_light(&result);
    }

    if let Some(path) = log {
        let mut logger = ReadingLogger::new(path)?;
        logger.log_reading(&result, chrono::Utc::now().timestamp_millis())?;
    }
    Ok(())
}

fn run_batch(input: &Path, output_root: &Path) -> Result<()> {
    println!("--- Aquacalc Batch ---");

    let batch_input = config::BatchInput::load(input)?;
    let report = batch::evaluate_batch(&batch_input.tanks, &batch_input.readings);

    let output_dir = output_root.join(format!(
        "batch_{}",
        chrono::Utc::now().format("%Y%m%d_%H%M%S")
    ));
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create output directory: {:?}", output_dir))?;

    fs::write(output_dir.join("report.json"), report.to_json()?)
        .context("Failed to write report.json")?;
    fs::write(output_dir.join("report.md"), report::markdown_report(&report))
        .context("Failed to write report.md")?;

    report::print_batch_summary(&report);
    println!("\nBatch complete. Results are in '{}'", output_dir.display());
    Ok(())
}

fn run_sensor<S: LightSensor>(
    mut sensor: S,
    kelvin: u32,
    once: bool,
    log: Option<&Path>,
) -> Result<()> {
    if !sensor.has_light_sensor() {
        println!("Warning: This device has no light sensor.");
        return Ok(());
    }

    let mut logger = log.map(ReadingLogger::new).transpose()?;

    if once {
        match current_reading(&mut sensor)? {
            Some(sample) => {
                let result = aquacalc_core::evaluate_reading(LightReading::new(sample.intensity, kelvin));
                report::print_light(&result);
                if let Some(logger) = &mut logger {
                    logger.log_reading(&result, sample.timestamp_ms)?;
                }
            }
            None => println!("Warning: The sensor delivered no reading."),
        }
        return Ok(());
    }

    let mut count = 0usize;
    for classified in classify_feed(&mut sensor) {
        let classified = classified?;
        let result = aquacalc_core::evaluate_reading(LightReading::new(
            classified.sample.intensity,
            kelvin,
        ));
        report::print_light(&result);
        if let Some(logger) = &mut logger {
            logger.log_reading(&result, classified.sample.timestamp_ms)?;
        }
        count += 1;
    }
    println!("\nSensor feed ended after {} reading(s).", count);
    Ok(())
}
