//! Data-driven content definitions and loaders.
//!
//! This crate houses the static content of the shooting gallery and provides
//! loaders for RON/TOML data files:
//! - Weapon and target catalogs (data-driven via RON)
//! - Game configuration (data-driven via TOML)
//!
//! Content is handed to a session at construction and never appears in
//! game state.

pub mod defaults;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use defaults::standard_catalog;

#[cfg(feature = "loaders")]
pub use loaders::{CatalogLoader, ConfigLoader, ContentFactory};
