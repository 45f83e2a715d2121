//! Session storage implementations

pub mod file_store;

pub use file_store::FileSessionStore;
