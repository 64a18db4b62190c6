//! Configuration module for the pulsegate authentication core.
//!
//! Handles loading and validating configuration from TOML files. The only
//! security-relevant surface here is the shared secret and its declared
//! encoding; everything else is ambient (freshness window, logging).

mod settings;

pub use settings::*;
