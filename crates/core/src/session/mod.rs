//! Session storage boundary

pub mod ports;

pub use ports::SessionStore;
