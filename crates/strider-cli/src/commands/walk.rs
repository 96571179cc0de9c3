//! Walk command implementations.

use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;

use strider_adapter_sim::SimulatorBackend;
use strider_hal::Backend;
use strider_walk::{
    run_walk_1d, run_walk_2d, CoinMode, Distribution, Grid, LatticeDim, Statistics, Statistics2d,
    WalkConfig,
};

/// Execute the walk1d command.
pub async fn execute_1d(
    steps: u32,
    coin: &str,
    shots: u32,
    smooth: Option<f64>,
    backend: &str,
    export: Option<&str>,
) -> Result<()> {
    let config = build_config(steps, LatticeDim::One, coin, shots, smooth)?;
    let backend_impl = make_backend(backend)?;

    println!(
        "{} Running 1D walk: {} steps, {} coin, {} shots on {}",
        style("→").cyan().bold(),
        style(steps).green(),
        style(config.coin).yellow(),
        shots,
        style(backend).yellow()
    );

    let spinner = running_spinner();
    let output = run_walk_1d(&config, backend_impl.as_ref()).await?;
    spinner.finish_and_clear();

    let table = output.smoothed.as_ref().unwrap_or(&output.distribution);
    print_histogram_1d(table, &output.stats);
    print_stats_1d(steps, shots, &output.stats);

    if let Some(path) = export {
        let json = export_1d(&config, &output.distribution, output.smoothed.as_ref(), &output.stats);
        fs::write(path, serde_json::to_string_pretty(&json)?)
            .with_context(|| format!("failed to write {path}"))?;
        println!("  Exported results to {}", style(path).green());
    }

    Ok(())
}

/// Execute the walk2d command.
pub async fn execute_2d(
    steps: u32,
    coin: &str,
    shots: u32,
    smooth: Option<f64>,
    backend: &str,
    export: Option<&str>,
) -> Result<()> {
    let config = build_config(steps, LatticeDim::Two, coin, shots, smooth)?;
    let backend_impl = make_backend(backend)?;

    println!(
        "{} Running 2D walk: {} steps, {} coin, {} shots on {}",
        style("→").cyan().bold(),
        style(steps).green(),
        style(config.coin).yellow(),
        shots,
        style(backend).yellow()
    );

    let spinner = running_spinner();
    let output = run_walk_2d(&config, backend_impl.as_ref()).await?;
    spinner.finish_and_clear();

    let table = output.smoothed.as_ref().unwrap_or(&output.distribution);
    print_top_cells_2d(table);
    print_stats_2d(steps, shots, &output.stats);

    if let Some(path) = export {
        let json = export_2d(&config, &output.distribution, output.smoothed.as_ref(), &output.stats);
        fs::write(path, serde_json::to_string_pretty(&json)?)
            .with_context(|| format!("failed to write {path}"))?;
        println!("  Exported results to {}", style(path).green());
    }

    Ok(())
}

fn build_config(
    steps: u32,
    dims: LatticeDim,
    coin: &str,
    shots: u32,
    smooth: Option<f64>,
) -> Result<WalkConfig> {
    let coin: CoinMode = coin.parse().map_err(|e: String| anyhow::anyhow!(e))?;
    let mut config = WalkConfig::new(steps, dims).with_coin(coin).with_shots(shots);
    if let Some(sigma) = smooth {
        config = config.with_smoothing(sigma);
    }
    Ok(config)
}

fn make_backend(name: &str) -> Result<Box<dyn Backend>> {
    match name.to_lowercase().as_str() {
        "simulator" | "sim" => Ok(Box::new(SimulatorBackend::new())),
        other => {
            anyhow::bail!("Unknown backend: '{}'. Available: simulator", other);
        }
    }
}

fn running_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        spinner.set_style(spinner_style);
    }
    spinner.set_message("Sampling walk...");
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));
    spinner
}

fn print_histogram_1d(table: &Distribution, stats: &Statistics) {
    println!("\n{} Distribution:", style("✓").green().bold());
    for position in stats.min..=stats.max {
        let prob = table.probability(position);
        let bar_len = (prob * 100.0 / 2.0).round() as usize;
        let bar: String = "█".repeat(bar_len);
        println!(
            "  {:>5}: {:>6.3} {}",
            position,
            prob,
            style(bar).cyan()
        );
    }
}

fn print_top_cells_2d(table: &Grid) {
    let mut cells: Vec<_> = table.iter().filter(|&(_, p)| p > 0.0).collect();
    cells.sort_by(|a, b| b.1.total_cmp(&a.1));

    println!(
        "\n{} Distribution (top {} lattice points):",
        style("✓").green().bold(),
        cells.len().min(16)
    );
    for ((x, y), prob) in cells.iter().take(16) {
        let bar_len = (prob * 100.0 / 2.0).round() as usize;
        let bar: String = "█".repeat(bar_len);
        println!(
            "  ({:>4}, {:>4}): {:>6.3} {}",
            x,
            y,
            prob,
            style(bar).cyan()
        );
    }
}

fn print_stats_1d(steps: u32, shots: u32, stats: &Statistics) {
    println!("\n{} Walk statistics ({} steps):", style("✓").green().bold(), steps);
    println!("  Shots:                      {shots}");
    println!("  Mean position:              {:.2}", stats.mean);
    println!("  Standard deviation:         {:.2}", stats.std_dev);
    println!("  Most probable position(s):  {:?}", stats.modes);
    println!("  Min position:               {}", stats.min);
    println!("  Max position:               {}", stats.max);
}

fn print_stats_2d(steps: u32, shots: u32, stats: &Statistics2d) {
    println!("\n{} Walk statistics ({} steps):", style("✓").green().bold(), steps);
    println!("  Shots:                      {shots}");
    println!(
        "  Mean position:              ({:.2}, {:.2})",
        stats.x.mean, stats.y.mean
    );
    println!(
        "  Standard deviation:         ({:.2}, {:.2})",
        stats.x.std_dev, stats.y.std_dev
    );
    println!("  Most probable position(s):  {:?}", stats.modes);
    println!(
        "  X range:                    [{}, {}]",
        stats.x.min, stats.x.max
    );
    println!(
        "  Y range:                    [{}, {}]",
        stats.y.min, stats.y.max
    );
}

fn export_1d(
    config: &WalkConfig,
    raw: &Distribution,
    smoothed: Option<&Distribution>,
    stats: &Statistics,
) -> serde_json::Value {
    serde_json::json!({
        "walk": config,
        "statistics": stats,
        "distribution": table_json_1d(raw),
        "smoothed": smoothed.map(table_json_1d),
    })
}

fn export_2d(
    config: &WalkConfig,
    raw: &Grid,
    smoothed: Option<&Grid>,
    stats: &Statistics2d,
) -> serde_json::Value {
    serde_json::json!({
        "walk": config,
        "statistics": stats,
        "distribution": table_json_2d(raw),
        "smoothed": smoothed.map(table_json_2d),
    })
}

fn table_json_1d(table: &Distribution) -> Vec<serde_json::Value> {
    table
        .iter()
        .map(|(position, probability)| {
            serde_json::json!({ "position": position, "probability": probability })
        })
        .collect()
}

fn table_json_2d(table: &Grid) -> Vec<serde_json::Value> {
    table
        .iter()
        .map(|((x, y), probability)| {
            serde_json::json!({ "x": x, "y": y, "probability": probability })
        })
        .collect()
}
