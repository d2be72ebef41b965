//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading agreement
//! parameters from YAML files.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{
    AgreementConfig, AgreementMetadata, Classification, ConversionFactors, ParametersConfig,
    PayParameters,
};

/// Loads and provides access to the agreement configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// provides methods to query point values, classifications and the
/// calibration factors.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/idcc1518/
/// ├── agreement.yaml   # Agreement metadata
/// └── parameters.yaml  # Point revisions, pay grid, conversion factors
/// ```
///
/// # Example
///
/// ```no_run
/// use paie_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/idcc1518").unwrap();
///
/// let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
/// let params = loader.pay_parameters("professeur", date).unwrap();
/// println!("Point value: {} €", params.point_value);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AgreementConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/idcc1518")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any required field is missing from the configuration
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let agreement_path = path.join("agreement.yaml");
        let metadata = Self::load_yaml::<AgreementMetadata>(&agreement_path)?;

        let parameters_path = path.join("parameters.yaml");
        let parameters = Self::load_yaml::<ParametersConfig>(&parameters_path)?;

        if parameters.point_revisions.is_empty() {
            return Err(EngineError::ConfigParseError {
                path: parameters_path.display().to_string(),
                message: "point_revisions must not be empty".to_string(),
            });
        }

        Ok(Self {
            config: AgreementConfig::new(metadata, parameters),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying agreement configuration.
    pub fn config(&self) -> &AgreementConfig {
        &self.config
    }

    /// Returns the agreement metadata.
    pub fn agreement(&self) -> &AgreementMetadata {
        self.config.agreement()
    }

    /// Returns the FTE/real-hours calibration factors.
    pub fn conversion(&self) -> &ConversionFactors {
        self.config.conversion()
    }

    /// Gets a classification by its code.
    ///
    /// # Arguments
    ///
    /// * `code` - The classification code (e.g., "professeur")
    ///
    /// # Returns
    ///
    /// Returns the classification if found, or `ClassificationNotFound` error.
    pub fn get_classification(&self, code: &str) -> EngineResult<&Classification> {
        self.config
            .classifications()
            .get(code)
            .ok_or_else(|| EngineError::ClassificationNotFound {
                code: code.to_string(),
            })
    }

    /// Gets the point value in effect on a given date.
    ///
    /// The method finds the most recent point revision that is effective on
    /// or before the given date.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use paie_engine::config::ConfigLoader;
    /// use chrono::NaiveDate;
    ///
    /// let loader = ConfigLoader::load("./config/idcc1518")?;
    /// let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    /// let point = loader.get_point_value(date)?;
    /// println!("Point value: {} €", point);
    /// # Ok::<(), paie_engine::error::EngineError>(())
    /// ```
    pub fn get_point_value(&self, date: NaiveDate) -> EngineResult<Decimal> {
        self.config
            .point_revisions()
            .iter()
            .rev()
            .find(|r| r.effective_date <= date)
            .map(|r| r.point_value)
            .ok_or(EngineError::PointValueNotFound { date })
    }

    /// Returns the frozen historical point value for the differential bonus.
    ///
    /// This is a separate parameter from the live point value and stays at
    /// the value in effect when the current agreement took effect.
    pub fn differential_point_value(&self) -> Decimal {
        self.config.differential_point_value()
    }

    /// Composes the pay parameters for one computation.
    ///
    /// # Arguments
    ///
    /// * `classification` - The classification code (e.g., "professeur")
    /// * `date` - The reference date selecting the point revision
    ///
    /// # Returns
    ///
    /// Returns the injectable [`PayParameters`] record, or an error if the
    /// classification is unknown or no point revision covers the date.
    pub fn pay_parameters(
        &self,
        classification: &str,
        date: NaiveDate,
    ) -> EngineResult<PayParameters> {
        let classification = self.get_classification(classification)?;
        let point_value = self.get_point_value(date)?;

        Ok(PayParameters {
            point_value,
            coefficient: classification.coefficient,
            differential_point_value: self.differential_point_value(),
        })
    }
}
