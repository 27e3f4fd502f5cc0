//! Core sesame library (config, HTTP adapter, logging).

pub mod api;
pub mod config;
pub mod interrupt;
pub mod logging;
