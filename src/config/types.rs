//! Configuration types for the pay parameters.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. Point values, the pay
//! grid and the calibration factors all change by collective-agreement
//! revision, so they live in configuration rather than in code.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

/// Metadata about the collective agreement.
#[derive(Debug, Clone, Deserialize)]
pub struct AgreementMetadata {
    /// The agreement identifier (e.g., "IDCC 1518").
    pub code: String,
    /// The human-readable name of the agreement.
    pub name: String,
    /// The version or revision date of the agreement snapshot.
    pub version: String,
    /// URL to the official agreement text.
    pub source_url: String,
}

/// A revision of the point index value, effective from a given date.
///
/// The agreement revises the point value periodically; the loader picks
/// the most recent revision on or before the computation's reference date.
#[derive(Debug, Clone, Deserialize)]
pub struct PointRevision {
    /// The date this point value takes effect.
    pub effective_date: NaiveDate,
    /// The point index value in euros.
    pub point_value: Decimal,
}

/// A classification in the agreement's pay grid.
#[derive(Debug, Clone, Deserialize)]
pub struct Classification {
    /// The human-readable name of the classification.
    pub name: String,
    /// The pay-grid coefficient for this classification.
    pub coefficient: u32,
    /// Reference to the agreement article defining this classification.
    pub article: String,
}

/// The two calibration factors linking smoothed FTE hours to real hours.
///
/// These are independently calibrated values. `fte_to_real_hours_factor`
/// divides a monthly FTE figure back to real monthly hours;
/// `fte_to_annual_real_hours_factor` multiplies a payslip FTE figure up to
/// approximate real annual hours. They must never be unified or derived
/// from one another.
#[derive(Debug, Clone, Deserialize)]
pub struct ConversionFactors {
    /// Monthly FTE hours per real monthly hour (observed 1.36).
    pub fte_to_real_hours_factor: Decimal,
    /// Real annual hours per monthly FTE hour (observed 7.4805).
    pub fte_to_annual_real_hours_factor: Decimal,
}

/// Pay parameters file structure (`parameters.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct ParametersConfig {
    /// Point value revisions, any order; sorted by the loader.
    pub point_revisions: Vec<PointRevision>,
    /// The frozen historical point value used by the differential bonus.
    ///
    /// Stays at the value in effect when the current agreement took effect
    /// (6.32) even as the live point value is revised upward.
    pub differential_point_value: Decimal,
    /// Map of classification code to pay-grid entry.
    pub classifications: HashMap<String, Classification>,
    /// FTE/real-hours calibration factors.
    pub conversion: ConversionFactors,
}

/// The pay parameters injected into a single payroll computation.
///
/// Composed by the loader from the revision in effect at the reference
/// date and the requested classification; the calculation rules never
/// read configuration themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayParameters {
    /// The point index value in effect at the reference date.
    pub point_value: Decimal,
    /// The pay-grid coefficient of the classification.
    pub coefficient: u32,
    /// The frozen historical point value for the differential bonus.
    pub differential_point_value: Decimal,
}

/// The complete agreement configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct AgreementConfig {
    metadata: AgreementMetadata,
    /// Point revisions sorted by effective date, oldest first.
    point_revisions: Vec<PointRevision>,
    differential_point_value: Decimal,
    classifications: HashMap<String, Classification>,
    conversion: ConversionFactors,
}

impl AgreementConfig {
    /// Creates a new AgreementConfig from its component parts.
    pub fn new(metadata: AgreementMetadata, parameters: ParametersConfig) -> Self {
        let mut point_revisions = parameters.point_revisions;
        point_revisions.sort_by(|a, b| a.effective_date.cmp(&b.effective_date));
        Self {
            metadata,
            point_revisions,
            differential_point_value: parameters.differential_point_value,
            classifications: parameters.classifications,
            conversion: parameters.conversion,
        }
    }

    /// Returns the agreement metadata.
    pub fn agreement(&self) -> &AgreementMetadata {
        &self.metadata
    }

    /// Returns all point revisions, oldest first.
    pub fn point_revisions(&self) -> &[PointRevision] {
        &self.point_revisions
    }

    /// Returns the frozen differential point value.
    pub fn differential_point_value(&self) -> Decimal {
        self.differential_point_value
    }

    /// Returns all classifications.
    pub fn classifications(&self) -> &HashMap<String, Classification> {
        &self.classifications
    }

    /// Returns the FTE/real-hours calibration factors.
    pub fn conversion(&self) -> &ConversionFactors {
        &self.conversion
    }
}
