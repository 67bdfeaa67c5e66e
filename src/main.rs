use std::path::PathBuf;

use anyhow::{Context, Result};
use growth_curve::algorithm::growth::{AlertEvaluator, subject_status, weight_gap};
use growth_curve::collections::GrowthStore;
use growth_curve::{GrowthConfig, SubjectId, View, load_reference_table};
use log::{info, warn};

fn main() -> Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut config = GrowthConfig::default();
    let mut args = std::env::args().skip(1);
    if let Some(data_file) = args.next() {
        config.data_file = PathBuf::from(data_file);
    }
    if let Some(reference_file) = args.next() {
        config.reference_file = PathBuf::from(reference_file);
    }
    config.use_corrected_age = std::env::var("GROWTH_CORRECTED_AGE").is_ok_and(|v| v == "1");
    info!("{config}");

    if !config.reference_file.exists() {
        warn!(
            "Reference table not found: {}",
            config.reference_file.display()
        );
        return Ok(());
    }

    let alerts = run(&config)?;
    info!("Evaluation completed with {alerts} alerts");
    Ok(())
}

/// Load both files, log each twin's status and return the alert count
fn run(config: &GrowthConfig) -> Result<usize> {
    let table = load_reference_table(&config.reference_file).with_context(|| {
        format!(
            "Failed to load reference table {}",
            config.reference_file.display()
        )
    })?;
    let store = GrowthStore::open(&config.data_file)
        .with_context(|| format!("Failed to open data file {}", config.data_file.display()))?
        .with_event_capacity(config.event_capacity);
    let snapshot = store.snapshot();

    for id in SubjectId::ALL {
        let name = &snapshot.subject(id).name;
        match subject_status(
            snapshot,
            &table,
            id,
            config.use_corrected_age,
            &config.thresholds,
        ) {
            Some(status) => {
                info!(
                    "{name}: latest record {} at {:.1} months",
                    status.date, status.age_months
                );
                for metric in &status.metrics {
                    match (metric.value, metric.percentile) {
                        (Some(value), Some(p)) => info!(
                            "  {} {value} {} ({p:.1} percentile)",
                            metric.metric,
                            metric.metric.unit()
                        ),
                        (Some(value), None) => {
                            info!("  {} {value} {}", metric.metric, metric.metric.unit());
                        }
                        _ => info!("  {} -", metric.metric),
                    }
                }
            }
            None => info!("{name}: no data"),
        }
    }

    if let Some(gap) = weight_gap(snapshot) {
        info!(
            "Twin weight gap {:.1}% ({}kg / {}kg)",
            gap.gap_percent, gap.weight_a, gap.weight_b
        );
    }

    let alerts = AlertEvaluator::new(&table)
        .with_thresholds(config.thresholds)
        .with_correction(config.use_corrected_age)
        .evaluate(snapshot, View::Compare);
    for alert in &alerts {
        warn!("{alert}");
    }
    Ok(alerts.len())
}
