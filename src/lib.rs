//! Paintmix - artist paint mixing server
//!
//! Finds the closest mix of a painter's owned paints for a target color.
//! This library exposes modules for integration testing.

pub mod api;
pub mod assets;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
