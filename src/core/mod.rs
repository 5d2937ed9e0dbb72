//! Core processing building blocks: shrink-only fit geometry, resampling,
//! centered padding and batch parameters. These are internal primitives
//! consumed by the high-level `api` module.
pub mod params;
pub mod processing;
