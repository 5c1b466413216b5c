//! Session - Current Snapshot and History Ownership
//!
//! The driver owns exactly one mutable current snapshot plus the growing
//! history log; simulator and twin engine stay stateless between calls.
//! Run/pause, manual stepping and the refresh cadence live here so an
//! interactive front end and the headless loop share one state model.

use std::time::Duration;

use chrono::Utc;

use crate::domain::config::AppConfig;
use crate::domain::params::TurbineParams;
use crate::domain::record::HistoryRecord;
use crate::domain::snapshot::ScadaSnapshot;
use crate::error::Result;
use crate::helpers::bounded::BoundedLog;
use crate::sim::ScadaSimulator;
use crate::twin::{compute_physics, evaluate_health};

/// One live twin session for a single turbine
pub struct TwinSession {
    device_id: String,
    params: TurbineParams,
    simulator: ScadaSimulator,
    current: ScadaSnapshot,
    history: BoundedLog<HistoryRecord>,
    refresh_interval: Duration,
    running: bool,
    steps: u64,
}

impl TwinSession {
    /// Session with an entropy-seeded simulator (live operation).
    ///
    /// Fails when the configured parameter set is internally inconsistent;
    /// the caller must not proceed in that case.
    pub fn new(config: &AppConfig) -> Result<Self> {
        config.turbine.validate()?;
        Ok(Self::build(
            config,
            ScadaSimulator::new(config.turbine.clone()),
        ))
    }

    /// Session with a fixed simulator seed (reproducible runs)
    pub fn with_seed(config: &AppConfig, seed: u64) -> Result<Self> {
        config.turbine.validate()?;
        Ok(Self::build(
            config,
            ScadaSimulator::with_seed(config.turbine.clone(), seed),
        ))
    }

    fn build(config: &AppConfig, simulator: ScadaSimulator) -> Self {
        Self {
            device_id: config.run.device_id.clone(),
            params: config.turbine.clone(),
            simulator,
            current: ScadaSimulator::initialize(),
            history: BoundedLog::new(config.run.history_capacity),
            refresh_interval: Duration::from_millis(config.run.interval_ms),
            running: true,
            steps: 0,
        }
    }

    /// Advance the turbine by one simulated second: step the simulator,
    /// derive physics, classify health, and append the record.
    ///
    /// Also serves as the manual single-step affordance while paused.
    pub fn advance(&mut self) -> HistoryRecord {
        let next = self.simulator.step(&self.current);
        let physics = compute_physics(&self.params, &next);
        let health = evaluate_health(&self.params, &next, &physics);
        let record = HistoryRecord {
            timestamp: Utc::now(),
            snapshot: next.clone(),
            physics,
            health,
        };
        self.current = next;
        self.steps += 1;
        self.history.push(record.clone());
        record
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    pub fn resume(&mut self) {
        self.running = true;
    }

    pub fn toggle(&mut self) {
        self.running = !self.running;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn set_refresh_interval(&mut self, interval: Duration) {
        self.refresh_interval = interval;
    }

    pub fn refresh_interval(&self) -> Duration {
        self.refresh_interval
    }

    /// Latest snapshot, before or after any number of steps
    pub fn current(&self) -> &ScadaSnapshot {
        &self.current
    }

    /// Most recent fully derived record, if any step has run
    pub fn latest(&self) -> Option<&HistoryRecord> {
        self.history.latest()
    }

    pub fn history(&self) -> &BoundedLog<HistoryRecord> {
        &self.history
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    pub fn params(&self) -> &TurbineParams {
        &self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_session() -> TwinSession {
        TwinSession::with_seed(&AppConfig::default(), 42).unwrap()
    }

    #[test]
    fn test_rejects_inconsistent_params() {
        let mut config = AppConfig::default();
        config.turbine.gen_temp_warn = 120.0;
        assert!(TwinSession::new(&config).is_err());
    }

    #[test]
    fn test_advance_appends_one_record_per_step() {
        let mut session = seeded_session();
        assert!(session.latest().is_none());

        let record = session.advance();
        assert_eq!(session.steps(), 1);
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.latest(), Some(&record));
        assert_eq!(session.current(), &record.snapshot);

        session.advance();
        session.advance();
        assert_eq!(session.steps(), 3);
        assert_eq!(session.history().len(), 3);
    }

    #[test]
    fn test_history_respects_capacity() {
        let mut config = AppConfig::default();
        config.run.history_capacity = 2;
        let mut session = TwinSession::with_seed(&config, 1).unwrap();
        for _ in 0..5 {
            session.advance();
        }
        assert_eq!(session.history().len(), 2);
        assert_eq!(session.steps(), 5);
    }

    #[test]
    fn test_pause_resume_toggle() {
        let mut session = seeded_session();
        assert!(session.is_running());
        session.pause();
        assert!(!session.is_running());
        session.resume();
        assert!(session.is_running());
        session.toggle();
        assert!(!session.is_running());
    }

    #[test]
    fn test_refresh_interval_from_config() {
        let mut config = AppConfig::default();
        config.run.interval_ms = 250;
        let mut session = TwinSession::with_seed(&config, 1).unwrap();
        assert_eq!(session.refresh_interval(), Duration::from_millis(250));
        session.set_refresh_interval(Duration::from_secs(2));
        assert_eq!(session.refresh_interval(), Duration::from_secs(2));
    }

    #[test]
    fn test_records_carry_consistent_derivations() {
        let mut session = seeded_session();
        let record = session.advance();
        let physics = compute_physics(session.params(), &record.snapshot);
        assert_eq!(record.physics, physics);
        let health = evaluate_health(session.params(), &record.snapshot, &physics);
        assert_eq!(record.health, health);
    }
}
