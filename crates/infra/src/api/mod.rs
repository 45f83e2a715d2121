//! Diary backend API client

pub mod auth;
pub mod client;
pub mod diary;

pub use auth::{AccessTokenProvider, SessionTokenProvider};
pub use client::{ApiClient, ApiClientConfig};
pub use diary::DiaryApiClient;
