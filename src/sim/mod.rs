//! Sim - Stochastic SCADA State Evolution

pub mod simulator;

pub use simulator::ScadaSimulator;
