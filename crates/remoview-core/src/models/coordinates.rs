use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{RemoviewError, Result};

/// A sampled point on Earth in WGS 84 degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in [-90, 90]
    pub lat: f64,

    /// Longitude in [-180, 180]
    pub lng: f64,
}

impl Coordinates {
    /// Create coordinates, rejecting values outside the valid ranges
    pub fn new(lat: f64, lng: f64) -> Result<Self> {
        let coordinates = Self { lat, lng };
        coordinates.validate()?;
        Ok(coordinates)
    }

    /// Sample a uniformly random point using the thread-local RNG
    pub fn random() -> Self {
        Self::random_with(&mut rand::thread_rng())
    }

    /// Sample a uniformly random point from the given RNG
    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            lat: rng.gen_range(-90.0..90.0),
            lng: rng.gen_range(-180.0..180.0),
        }
    }

    /// Check that both components are finite and in range
    pub fn validate(&self) -> Result<()> {
        if !self.lat.is_finite() || !(-90.0..=90.0).contains(&self.lat) {
            return Err(RemoviewError::InvalidCoordinates {
                lat: self.lat,
                lng: self.lng,
                reason: "latitude must be within [-90, 90]".to_string(),
            });
        }
        if !self.lng.is_finite() || !(-180.0..=180.0).contains(&self.lng) {
            return Err(RemoviewError::InvalidCoordinates {
                lat: self.lat,
                lng: self.lng,
                reason: "longitude must be within [-180, 180]".to_string(),
            });
        }
        Ok(())
    }

    /// Compact "lat, lng" rendering with two decimals, as used in history listings
    pub fn short(&self) -> String {
        format!("{:.2}, {:.2}", self.lat, self.lng)
    }
}

impl fmt::Display for Coordinates {
    /// Hemisphere notation, e.g. `48.8584° N, 2.2945° E`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lat_dir = if self.lat >= 0.0 { 'N' } else { 'S' };
        let lng_dir = if self.lng >= 0.0 { 'E' } else { 'W' };
        write!(
            f,
            "{:.4}° {}, {:.4}° {}",
            self.lat.abs(),
            lat_dir,
            self.lng.abs(),
            lng_dir
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_new_accepts_bounds() {
        assert!(Coordinates::new(90.0, 180.0).is_ok());
        assert!(Coordinates::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(matches!(
            Coordinates::new(90.5, 0.0),
            Err(RemoviewError::InvalidCoordinates { .. })
        ));
        assert!(matches!(
            Coordinates::new(0.0, -180.1),
            Err(RemoviewError::InvalidCoordinates { .. })
        ));
        assert!(Coordinates::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_random_samples_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10_000 {
            let c = Coordinates::random_with(&mut rng);
            assert!((-90.0..=90.0).contains(&c.lat), "lat out of range: {}", c.lat);
            assert!((-180.0..=180.0).contains(&c.lng), "lng out of range: {}", c.lng);
        }
    }

    #[test]
    fn test_display_uses_hemispheres() {
        let c = Coordinates { lat: 48.85837, lng: -2.294481 };
        assert_eq!(c.to_string(), "48.8584° N, 2.2945° W");

        let c = Coordinates { lat: -33.8688, lng: 151.2093 };
        assert_eq!(c.to_string(), "33.8688° S, 151.2093° E");
    }

    #[test]
    fn test_short_format() {
        let c = Coordinates { lat: 12.3456, lng: -98.7654 };
        assert_eq!(c.short(), "12.35, -98.77");
    }

    #[test]
    fn test_serde_field_names() {
        let c = Coordinates { lat: 1.5, lng: -2.5 };
        let json = serde_json::to_value(c).unwrap();
        assert_eq!(json, serde_json::json!({ "lat": 1.5, "lng": -2.5 }));
    }
}
