pub mod booking;
pub mod catalog;
pub mod errors;
pub mod models;
pub mod services;
pub mod validation;
pub mod voting;
