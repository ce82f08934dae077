//! Core building blocks: run parameters and the resize primitive.
//! These are internal pieces consumed by the high-level `api` module.
pub mod params;
pub mod processing;
