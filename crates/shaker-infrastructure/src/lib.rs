//! Infrastructure adapters for Shaker.
//!
//! Concrete implementations of the ports defined in `shaker-core`: the
//! reqwest gateway against TheCocktailDB, file-backed key-value storage, the
//! in-memory account registry, and config/path resolution.

pub mod account_registry;
pub mod cocktail_api;
pub mod config_service;
pub mod json_file_storage;
pub mod paths;

pub use account_registry::InMemoryAccountRegistry;
pub use cocktail_api::CocktailDbGateway;
pub use config_service::load_config;
pub use json_file_storage::JsonFileStorage;
pub use paths::ShakerPaths;
