//! Configuration loading and management for the Payroll Estimation Engine.
//!
//! This module provides functionality to load the agreement parameters from
//! YAML files: point-value revisions, the classification pay grid and the
//! FTE/real-hours calibration factors. Agreement revisions are a config
//! change, never a code change.
//!
//! # Example
//!
//! ```no_run
//! use paie_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/idcc1518").unwrap();
//! println!("Loaded agreement: {}", config.agreement().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AgreementConfig, AgreementMetadata, Classification, ConversionFactors, ParametersConfig,
    PayParameters, PointRevision,
};
