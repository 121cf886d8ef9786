//! Testing infrastructure for writerops integration tests.
//!
//! - `TestWorld`: isolated data directory plus CLI execution
//! - `fixtures`: daily records and highlights seeded straight into the store

pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
