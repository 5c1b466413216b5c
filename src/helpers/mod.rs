//! Helpers - Generic Support Types

pub mod bounded;
