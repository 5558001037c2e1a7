pub mod config;
pub mod handlers;
pub mod helpers;
pub mod integrations;
