//! Twin - Physics Derivation and Health Classification

pub mod engine;

pub use engine::{compute_physics, evaluate_health};
