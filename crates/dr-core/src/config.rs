//! Routing policy configuration.
//!
//! The connectivity threshold, the speed assumption behind the time estimate,
//! and the per-kilometre fuel cost are policy values.  They default to the
//! values the service has always used and can be overridden from a YAML file:
//!
//! ```yaml
//! connect_threshold_km: 50.0
//! minutes_per_km: 2.0        # ~30 km/h average
//! fuel_cost_per_km: 0.15
//! default_max_stops: 10
//! ```
//!
//! Omitted keys keep their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteConfig {
    /// Two locations closer than this (inclusive) are joined by an edge.
    #[serde(default = "default_connect_threshold_km")]
    pub connect_threshold_km: f64,

    /// Minutes of driving per kilometre used for `estimated_time`.
    #[serde(default = "default_minutes_per_km")]
    pub minutes_per_km: f64,

    /// Currency units per kilometre used for `fuel_cost`.
    #[serde(default = "default_fuel_cost_per_km")]
    pub fuel_cost_per_km: f64,

    /// Stop cap applied when a request does not carry its own.
    #[serde(default = "default_max_stops")]
    pub default_max_stops: usize,
}

fn default_connect_threshold_km() -> f64 {
    50.0
}

fn default_minutes_per_km() -> f64 {
    2.0
}

fn default_fuel_cost_per_km() -> f64 {
    0.15
}

fn default_max_stops() -> usize {
    10
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            connect_threshold_km: default_connect_threshold_km(),
            minutes_per_km:       default_minutes_per_km(),
            fuel_cost_per_km:     default_fuel_cost_per_km(),
            default_max_stops:    default_max_stops(),
        }
    }
}

impl RouteConfig {
    /// Parse and validate a YAML document.
    pub fn from_yaml_str(yaml: &str) -> CoreResult<Self> {
        let config: RouteConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a YAML file.
    pub fn from_yaml_file(path: &Path) -> CoreResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    /// Reject values that would make distances or estimates meaningless.
    pub fn validate(&self) -> CoreResult<()> {
        let finite_non_negative = [
            ("connect_threshold_km", self.connect_threshold_km),
            ("minutes_per_km", self.minutes_per_km),
            ("fuel_cost_per_km", self.fuel_cost_per_km),
        ];
        for (name, value) in finite_non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(CoreError::Config(format!(
                    "{name} must be a finite, non-negative number (got {value})"
                )));
            }
        }
        Ok(())
    }

    /// Estimated driving time in minutes for a route of `km` kilometres.
    #[inline]
    pub fn estimated_minutes(&self, km: f64) -> f64 {
        km * self.minutes_per_km
    }

    /// Estimated fuel cost for a route of `km` kilometres.
    #[inline]
    pub fn fuel_cost(&self, km: f64) -> f64 {
        km * self.fuel_cost_per_km
    }
}
