pub mod client;
pub mod config;
pub mod contracts;
pub mod error;
pub mod menu;
pub mod orchestrator;
pub mod services;
pub mod task;
pub mod utils;
