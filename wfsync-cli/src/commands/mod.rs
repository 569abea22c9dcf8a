//! CLI command implementations.
//!
//! Each subcommand has its own module with argument definitions and handlers.
//!
//! # Command Modules
//!
//! - [`config`] - Configuration management (path, show, init)
//! - [`edit`] - Insert, update and delete transactions
//! - [`read`] - Fetch a layer as GeoJSON

pub mod common;
pub mod config;
pub mod edit;
pub mod read;
