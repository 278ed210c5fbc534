use aquacalc_core::{batch::BatchReport, units::format_one_decimal};
use aquacalc_schemas::{
    aquarium::{AquariumShape, VolumeResult},
    light::{LightDisplayResult, LightLevel},
};

pub fn print_volume(shape: AquariumShape, result: &VolumeResult) {
    println!("\n--- [Volume] {} ---", shape);
    println!("  - Cubic centimeters: {:.1} cm³", result.cubic_centimeters);
    println!("  - Liters:            {} L", format_one_decimal(result.liters));
    println!("  - US gallons:        {} gal", format_one_decimal(result.gallons));
    println!("\n{}", result.description);
}

pub fn print_light(result: &LightDisplayResult) {
    println!("\n--- [Light] {} lux / {} K ---", result.intensity_lux, result.color_temperature_k);
    println!("  - Level:          {} ({})", result.level, result.level.color());
    println!("  - Assessment:     {}", result.description);
    println!("  - Recommendation: {}", result.recommendation);
    println!(
        "  - Color:          {}{}",
        result.color_description,
        if result.is_optimal_color { "" } else { " [not optimal]" }
    );
}

pub fn print_batch_summary(report: &BatchReport) {
    println!("\n\n--- [Batch Summary] ---");
    println!("========================================");
    println!("Tanks:");
    for tank in &report.tanks {
        match (&tank.volume, &tank.error) {
            (Some(volume), _) => println!(
                "  - {:<16} | {:<20} | {:>8} L | {:>7} gal",
                tank.name,
                tank.shape.display_name(),
                format_one_decimal(volume.liters),
                format_one_decimal(volume.gallons)
            ),
            (None, Some(error)) => println!(
                "  - {:<16} | {:<20} | rejected: {}",
                tank.name,
                tank.shape.display_name(),
                error
            ),
            (None, None) => {}
        }
    }
    println!(
        "  Total water volume: {} L ({} gal)",
        format_one_decimal(report.total_liters),
        format_one_decimal(report.total_gallons)
    );
    println!("----------------------------------------");

    println!("\nLight Survey:");
    for outcome in &report.readings {
        println!(
            "  - {:<16} | {:>6} lux | {:<15} | {} K{}",
            outcome.label,
            outcome.result.intensity_lux,
            outcome.result.level.display_name(),
            outcome.result.color_temperature_k,
            if outcome.result.is_optimal_color { "" } else { " (color not optimal)" }
        );
    }
    for level in LightLevel::ALL {
        let count = report.readings_per_level.get(&level).copied().unwrap_or(0);
        println!("  {:<15}: {}", level.display_name(), count);
    }
    println!("========================================");
}

/// Markdown version of the batch summary, written next to the JSON dump.
pub fn markdown_report(report: &BatchReport) -> String {
    let mut md = String::from("# Aquarium Report\n\n## Tanks\n\n");
    md.push_str("| Tank | Shape | Liters | Gallons | Notes |\n");
    md.push_str("|------|-------|--------|---------|-------|\n");
    for tank in &report.tanks {
        match &tank.volume {
            Some(volume) => md.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                tank.name,
                tank.shape.display_name(),
                format_one_decimal(volume.liters),
                format_one_decimal(volume.gallons),
                volume.description
            )),
            None => md.push_str(&format!(
                "| {} | {} | - | - | {} |\n",
                tank.name,
                tank.shape.display_name(),
                tank.error.as_deref().unwrap_or("")
            )),
        }
    }

    md.push_str("\n## Light Survey\n\n");
    md.push_str("| Reading | Lux | Level | Kelvin | Recommendation |\n");
    md.push_str("|---------|-----|-------|--------|----------------|\n");
    for outcome in &report.readings {
        md.push_str(&format!(
            "| {} | {} | {} | {} | {} |\n",
            outcome.label,
            outcome.result.intensity_lux,
            outcome.result.level.display_name(),
            outcome.result.color_temperature_k,
            outcome.result.recommendation
        ));
    }
    md
}
