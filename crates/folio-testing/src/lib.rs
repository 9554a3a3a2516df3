//! Testing infrastructure for folio integration tests.
//!
//! This crate provides utilities for writing robust integration tests:
//! - `TestWorld`: Fluent interface for a temporary content tree plus CLI runner
//! - `fixtures`: Project document builder
//! - `memory`: In-memory `DocumentStore` for catalog tests without a filesystem
//! - `assertions`: Custom assertions over the CLI's JSON output

pub mod assertions;
pub mod fixtures;
pub mod memory;
pub mod world;

pub use fixtures::ProjectFixture;
pub use memory::MemoryStore;
pub use world::TestWorld;
