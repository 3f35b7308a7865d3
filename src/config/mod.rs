//! Configuration model for pagesmith.
//!
//! This module defines the Config struct that represents `pagesmith.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! defaults for every field, and validation of config values.

mod model;
mod operations;


pub use model::{Config, DEFAULT_CONFIG_FILE};
