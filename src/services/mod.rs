pub mod mix_service;

pub use mix_service::{MixRequest, MixService};
