//! Remote diary boundary (matches and training sessions)

pub mod ports;

pub use ports::{MatchesApi, TrainingApi};
