//! Routing configuration for the route graph.

use serde::{Deserialize, Serialize};

/// Error returned for unusable routing settings.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SettingsError {
    /// Bus velocity must be a positive, finite number of km/h
    #[error("invalid bus velocity: {0} km/h")]
    InvalidVelocity(f64),
}

/// Parameters fixed for the whole route graph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoutingSettings {
    /// Time spent waiting for any bus at a stop (minutes).
    pub bus_wait_time: u32,

    /// Bus travel speed (km/h).
    pub bus_velocity: f64,
}

impl RoutingSettings {
    /// Create settings, validating the velocity.
    pub fn new(bus_wait_time: u32, bus_velocity: f64) -> Result<Self, SettingsError> {
        let settings = Self {
            bus_wait_time,
            bus_velocity,
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Check that the settings can produce finite travel times.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.bus_velocity.is_finite() && self.bus_velocity > 0.0 {
            Ok(())
        } else {
            Err(SettingsError::InvalidVelocity(self.bus_velocity))
        }
    }

    /// Returns the wait time in minutes.
    pub fn wait_minutes(&self) -> f64 {
        f64::from(self.bus_wait_time)
    }

    /// Minutes needed to ride `metres` at the configured velocity.
    pub fn travel_minutes(&self, metres: f64) -> f64 {
        metres / self.bus_velocity / 1000.0 * 60.0
    }
}

impl Default for RoutingSettings {
    fn default() -> Self {
        Self {
            bus_wait_time: 6,
            bus_velocity: 40.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings() {
        let settings = RoutingSettings::default();

        assert_eq!(settings.bus_wait_time, 6);
        assert_eq!(settings.bus_velocity, 40.0);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn travel_minutes() {
        let settings = RoutingSettings::new(6, 60.0).unwrap();

        assert_eq!(settings.travel_minutes(1000.0), 1.0);
        assert_eq!(settings.travel_minutes(0.0), 0.0);
        assert_eq!(settings.wait_minutes(), 6.0);
    }

    #[test]
    fn rejects_bad_velocity() {
        assert_eq!(
            RoutingSettings::new(6, 0.0),
            Err(SettingsError::InvalidVelocity(0.0))
        );
        assert!(RoutingSettings::new(6, -10.0).is_err());
        assert!(RoutingSettings::new(6, f64::INFINITY).is_err());
        assert!(RoutingSettings::new(6, f64::NAN).is_err());
    }

    #[test]
    fn deserializes_from_json() {
        let settings: RoutingSettings =
            serde_json::from_str(r#"{"bus_wait_time": 2, "bus_velocity": 30}"#).unwrap();

        assert_eq!(settings.bus_wait_time, 2);
        assert_eq!(settings.bus_velocity, 30.0);
    }
}
