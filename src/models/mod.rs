pub mod catalog;
pub mod config;

pub use catalog::{Brand, Catalog};
pub use config::AppConfig;
