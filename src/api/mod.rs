/// Public API for the PokeAPI client layer.
pub mod client;
pub mod errors;

pub use client::{ApiClient, Resource};
pub use errors::ApiError;
