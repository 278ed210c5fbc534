//! Renders reading logs as charts.

use anyhow::{Context, Result};
use aquacalc_core::{
    light::{EXCESSIVE_LIGHT_LUX, HIGH_LIGHT_LUX, MEDIUM_LIGHT_LUX},
    logger::{read_log, LogEntry},
};
use plotters::prelude::*;
use std::path::Path;

/// Plots lux per logged sample with a guide line at every level boundary.
/// Returns the number of samples drawn.
pub fn plot_light_log(log_path: &Path, output_path: &Path) -> Result<usize> {
    println!("[Plotting] Reading '{}'...", log_path.display());
    let data = read_log(log_path).context("Failed to read the reading log")?;

    if data.is_empty() {
        println!("[Plotting] Warning: No data to plot.");
        return Ok(0);
    }

    draw_intensity_chart(output_path, &data)?;
    println!("[Plotting] Chart saved to '{}'.", output_path.display());
    Ok(data.len())
}

/// Upper x and y bounds. The y axis always reaches the excessive-light guide.
fn chart_bounds(data: &[LogEntry]) -> (u64, f64) {
    let max_sample = (data.len() as u64).max(1);
    let max_lux = data
        .iter()
        .map(|d| d.intensity_lux as f64)
        .fold(EXCESSIVE_LIGHT_LUX as f64, f64::max);
    (max_sample, max_lux)
}

fn draw_intensity_chart(output_path: &Path, data: &[LogEntry]) -> Result<()> {
    let root = BitMapBackend::new(output_path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let (max_sample, max_lux) = chart_bounds(data);

    let mut chart = ChartBuilder::on(&root)
        .caption("Light Intensity Over Time", ("sans-serif", 50).into_font())
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(60)
        .build_cartesian_2d(0u64..max_sample, 0f64..max_lux * 1.1)?;

    chart
        .configure_mesh()
        .x_desc("Sample")
        .y_desc("Intensity (lux)")
        .draw()?;

    let guides = [
        (MEDIUM_LIGHT_LUX, "Medium light", RGBColor(0xFF, 0x98, 0x00)),
        (HIGH_LIGHT_LUX, "High light", RGBColor(0x4C, 0xAF, 0x50)),
        (EXCESSIVE_LIGHT_LUX, "Excessive light", RGBColor(0xF4, 0x43, 0x36)),
    ];
    for (lux, label, color) in guides {
        chart
            .draw_series(LineSeries::new(
                vec![(0, lux as f64), (max_sample, lux as f64)],
                color.stroke_width(1),
            ))?
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.filled()));
    }

    chart
        .draw_series(LineSeries::new(
            data.iter()
                .enumerate()
                .map(|(i, d)| (i as u64, d.intensity_lux as f64)),
            BLUE.stroke_width(2),
        ))?
        .label("Measured")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.filled()));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use aquacalc_core::{evaluate_reading, logger::ReadingLogger};
    use aquacalc_schemas::light::LightReading;
    use std::fs;

    fn write_log(path: &Path, intensities: &[u32]) {
        let mut logger = ReadingLogger::new(path).unwrap();
        for (i, lux) in intensities.iter().enumerate() {
            logger
                .log_reading(&evaluate_reading(LightReading::new(*lux, 6_500)), i as i64 * 1_000)
                .unwrap();
        }
    }

    #[test]
    fn header_only_log_draws_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("log.csv");
        fs::write(
            &log,
            "timestamp_ms,intensity_lux,color_temperature_k,level,optimal_color\n",
        )
        .unwrap();
        let output = dir.path().join("chart.png");

        assert_eq!(plot_light_log(&log, &output).unwrap(), 0);
        assert!(!output.exists());
    }

    #[test]
    fn bounds_cover_guides_and_single_samples() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("log.csv");
        write_log(&log, &[1_200]);
        let data = read_log(&log).unwrap();
        assert_eq!(chart_bounds(&data), (1, EXCESSIVE_LIGHT_LUX as f64));

        let log = dir.path().join("bright.csv");
        write_log(&log, &[3_000, 14_000]);
        let data = read_log(&log).unwrap();
        assert_eq!(chart_bounds(&data), (2, 14_000.0));
    }

    #[test]
    fn writes_a_chart_for_logged_readings() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("log.csv");
        write_log(&log, &[800, 2_500, 6_000, 11_000]);
        let output = dir.path().join("chart.png");

        assert_eq!(plot_light_log(&log, &output).unwrap(), 4);
        assert!(fs::metadata(&output).unwrap().len() > 0);
    }

    #[test]
    fn single_sample_log_still_plots() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("log.csv");
        write_log(&log, &[4_200]);
        let output = dir.path().join("single.png");

        assert_eq!(plot_light_log(&log, &output).unwrap(), 1);
        assert!(output.exists());
    }
}
