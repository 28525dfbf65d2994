pub mod audit;
pub mod group;
pub mod movie;
