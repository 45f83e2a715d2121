//! # Playerlog App
//!
//! Application layer - context wiring and command functions.
//!
//! This crate contains:
//! - Application context (dependency injection)
//! - Command functions (UI shell → backend bridge)
//! - Telemetry bootstrap
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - Provides async commands for the UI shell

pub mod commands;
pub mod context;
pub mod utils;

// Re-export for convenience
pub use context::AppContext;
pub use utils::logging::init_telemetry;
