pub mod auth;
pub mod config;
pub mod drink;
pub mod error;
pub mod favorites;
pub mod storage;

// Re-export common error type
pub use error::ShakerError;
