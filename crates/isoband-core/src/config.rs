//! Configuration for the band mesher.

use serde::{Deserialize, Serialize};

use crate::error::{IsobandError, Result};

/// Configuration for a filled iso-contour band run.
///
/// `min` and `max` bound the value window in the normalized [0, 1] domain;
/// iso-levels are spaced `(max - min) / band_count` apart. `lut` names a
/// registered color map and `reversed` flips its direction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BandConfig {
    /// Lower bound of the value window (normalized domain).
    pub min: f64,

    /// Upper bound of the value window (normalized domain).
    pub max: f64,

    /// Number of iso-contour bands across the window.
    pub band_count: u32,

    /// Name of the color map used for flat band colors.
    pub lut: String,

    /// Whether to reverse the color map direction.
    pub reversed: bool,
}

impl Default for BandConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 1.0,
            band_count: 10,
            lut: "rainbow".to_string(),
            reversed: false,
        }
    }
}

impl BandConfig {
    /// Checks the numeric invariants of the configuration.
    ///
    /// # Errors
    /// Returns [`IsobandError::InvalidBandCount`] if `band_count` is zero,
    /// or [`IsobandError::InvalidRange`] if the window is inverted or not finite.
    pub fn validate(&self) -> Result<()> {
        if self.band_count == 0 {
            return Err(IsobandError::InvalidBandCount(self.band_count));
        }
        if !(self.min <= self.max) || !self.min.is_finite() || !self.max.is_finite() {
            return Err(IsobandError::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    /// Spacing between consecutive iso-levels.
    #[must_use]
    pub fn increment(&self) -> f64 {
        (self.max - self.min) / f64::from(self.band_count)
    }

    /// Serializes the configuration to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserializes a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = BandConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.band_count, 10);
        assert!((cfg.increment() - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_zero_band_count_rejected() {
        let cfg = BandConfig {
            band_count: 0,
            ..BandConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(IsobandError::InvalidBandCount(0))
        ));
    }

    #[test]
    fn test_inverted_range_rejected() {
        let cfg = BandConfig {
            min: 0.8,
            max: 0.2,
            ..BandConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(IsobandError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let cfg = BandConfig {
            min: 0.1,
            max: 0.9,
            band_count: 16,
            lut: "insar".to_string(),
            reversed: true,
        };
        let json = cfg.to_json().unwrap();
        let back = BandConfig::from_json(&json).unwrap();
        assert_eq!(back.band_count, 16);
        assert_eq!(back.lut, "insar");
        assert!(back.reversed);
        assert!((back.min - 0.1).abs() < 1e-12);
    }
}
