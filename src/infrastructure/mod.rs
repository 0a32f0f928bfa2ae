pub mod client;
pub mod observability;
pub mod persistence;
