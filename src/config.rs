//! Configuration management and validation.
//!
//! Provides the decoder configuration: flight category thresholds and the
//! visibility assumed when a report carries no statute-mile group. The
//! defaults reproduce the standard categorization rules exactly.

use crate::constants::{DEFAULT_VISIBILITY_SM, category_rules};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Thresholds used to derive the flight category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryThresholds {
    /// Wind speed strictly above this is severe
    pub severe_wind_knots: u32,

    /// Wind speed strictly above this is significant
    pub significant_wind_knots: u32,

    /// Visibility at or below this is severe
    pub severe_visibility_sm: f64,

    /// Visibility strictly below this is significant
    pub significant_visibility_sm: f64,
}

impl Default for CategoryThresholds {
    fn default() -> Self {
        Self {
            severe_wind_knots: category_rules::SEVERE_WIND_KNOTS,
            significant_wind_knots: category_rules::SIGNIFICANT_WIND_KNOTS,
            severe_visibility_sm: category_rules::SEVERE_VISIBILITY_SM,
            significant_visibility_sm: category_rules::SIGNIFICANT_VISIBILITY_SM,
        }
    }
}

/// Global configuration for report decoding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecoderConfig {
    /// Flight category thresholds
    pub thresholds: CategoryThresholds,

    /// Visibility assumed when no statute-mile group is present
    pub default_visibility_sm: f64,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            thresholds: CategoryThresholds::default(),
            default_visibility_sm: DEFAULT_VISIBILITY_SM,
        }
    }
}

impl DecoderConfig {
    /// Set the severe and significant wind limits
    pub fn with_wind_limits(mut self, severe_knots: u32, significant_knots: u32) -> Self {
        self.thresholds.severe_wind_knots = severe_knots;
        self.thresholds.significant_wind_knots = significant_knots;
        self
    }

    /// Set the severe and significant visibility limits
    pub fn with_visibility_limits(mut self, severe_sm: f64, significant_sm: f64) -> Self {
        self.thresholds.severe_visibility_sm = severe_sm;
        self.thresholds.significant_visibility_sm = significant_sm;
        self
    }

    /// Set the visibility assumed for reports without a visibility group
    pub fn with_default_visibility(mut self, visibility_sm: f64) -> Self {
        self.default_visibility_sm = visibility_sm;
        self
    }

    /// Validate threshold consistency
    pub fn validate(&self) -> Result<()> {
        let t = &self.thresholds;

        for (name, value) in [
            ("severe_visibility_sm", t.severe_visibility_sm),
            ("significant_visibility_sm", t.significant_visibility_sm),
            ("default_visibility_sm", self.default_visibility_sm),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::configuration(format!(
                    "{} must be a positive finite number, got {}",
                    name, value
                )));
            }
        }

        if t.severe_visibility_sm > t.significant_visibility_sm {
            return Err(Error::configuration(format!(
                "severe visibility limit ({}) exceeds significant limit ({})",
                t.severe_visibility_sm, t.significant_visibility_sm
            )));
        }

        if t.severe_wind_knots < t.significant_wind_knots {
            return Err(Error::configuration(format!(
                "severe wind limit ({}) is below significant limit ({})",
                t.severe_wind_knots, t.significant_wind_knots
            )));
        }

        debug!("Decoder configuration validated: {:?}", self);
        Ok(())
    }
}
