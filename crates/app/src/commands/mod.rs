//! Command functions - UI shell to backend bridge

pub mod auth;
pub mod matches;
pub mod profile;
pub mod trainings;

pub use auth::*;
pub use matches::*;
pub use profile::*;
pub use trainings::*;
