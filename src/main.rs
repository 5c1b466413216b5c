//! Turbine Twin - Main Entry Point
//!
//! Headless driver for the twin core: steps the SCADA simulator on a fixed
//! cadence, runs the twin engine on every snapshot, and logs the result.
//! An interactive dashboard would drive the same session the same way.

use anyhow::Context;
use crossbeam_channel::{RecvTimeoutError, bounded};

use turbine_twin::constants::DEFAULT_CONFIG_PATH;
use turbine_twin::domain::config::AppConfig;
use turbine_twin::domain::health::Severity;
use turbine_twin::domain::record::HistoryRecord;
use turbine_twin::state::TwinSession;
use turbine_twin::utils::config_store;
use turbine_twin::utils::format::{format_datetime, format_power};

fn main() -> anyhow::Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let config: AppConfig = config_store::load_config(&config_path)
        .with_context(|| format!("loading config from {config_path}"))?;

    // An inconsistent parameter set would misclassify health; refuse to run.
    let mut session = TwinSession::new(&config).context("starting twin session")?;
    tracing::info!(
        device = %session.device_id(),
        interval_ms = config.run.interval_ms,
        "Starting turbine twin driver..."
    );

    let (stop_tx, stop_rx) = bounded::<()>(1);
    ctrlc::set_handler(move || {
        let _ = stop_tx.try_send(());
    })
    .context("installing Ctrl-C handler")?;

    loop {
        match stop_rx.recv_timeout(session.refresh_interval()) {
            Ok(()) | Err(RecvTimeoutError::Disconnected) => {
                tracing::info!("Shutdown requested");
                break;
            }
            Err(RecvTimeoutError::Timeout) => {}
        }

        if !session.is_running() {
            continue;
        }

        let record = session.advance();
        log_record(session.device_id(), &record);

        if let Some(max_steps) = config.run.max_steps {
            if session.steps() >= max_steps {
                tracing::info!(steps = session.steps(), "Step limit reached");
                break;
            }
        }
    }

    if let Some(path) = &config.run.export_path {
        let records = session.history().to_vec();
        config_store::export_json(path, &records)
            .with_context(|| format!("exporting history to {path}"))?;
        tracing::info!(records = records.len(), path = %path, "History exported");
    }

    if let Some(record) = session.latest() {
        tracing::info!(
            at = %format_datetime(&record.timestamp),
            health = %record.health.worst(),
            power = %format_power(record.snapshot.power),
            "Final state"
        );
    }
    tracing::info!(steps = session.steps(), "Turbine twin driver stopped");
    Ok(())
}

/// One log line per simulated second; health escalates the level.
fn log_record(device_id: &str, record: &HistoryRecord) {
    let snap = &record.snapshot;
    let health = &record.health;
    let summary = format!(
        "wind {:.1} m/s | {:.1} rpm | pitch {:.1} deg | {} | gen {:.1} C | gb {:.1} C | vib {:.2} mm/s",
        snap.wind_speed,
        snap.rpm,
        snap.pitch,
        format_power(snap.power),
        snap.gen_temp,
        snap.gb_temp,
        snap.vibration,
    );

    match health.worst() {
        Severity::Critical => tracing::error!(
            device = %device_id,
            gen_temp = %health.generator_temp,
            gb_temp = %health.gearbox_temp,
            vibration = %health.vibration,
            performance = %health.performance,
            "{summary}"
        ),
        Severity::Warn => tracing::warn!(
            device = %device_id,
            gen_temp = %health.generator_temp,
            gb_temp = %health.gearbox_temp,
            vibration = %health.vibration,
            performance = %health.performance,
            "{summary}"
        ),
        Severity::Ok => tracing::info!(device = %device_id, "{summary}"),
    }
}
