pub mod api;
pub mod config;
pub mod constants;
pub mod core;
pub mod infrastructure;

pub use crate::core::errors::SquadError;
pub use crate::core::services::SquadService;

#[cfg(test)]
mod tests;
