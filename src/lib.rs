pub mod config;
pub mod db;
pub mod error;

// Project store web pages
pub mod web;

// Review manifest generation
pub mod manifest;

pub mod cli;

// Utilities
pub mod utils;

// Re-exports
pub use config::Settings;
pub use error::{Error, Result};
