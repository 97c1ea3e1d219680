use serde::{Deserialize, Serialize};

/// Geographic coordinates in decimal degrees.
///
/// The bundled fixture stores coordinates as a two-element `[lat, lng]`
/// array, so deserialization goes through `From<[f64; 2]>`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoLocation {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Haversine great-circle distance in meters between two points.
    ///
    /// Pure and non-negative for any finite input.
    pub fn distance_m(&self, other: &GeoLocation) -> f64 {
        const EARTH_RADIUS_M: f64 = 6_371_000.0;

        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let dlat = (other.latitude - self.latitude).to_radians();
        let dlon = (other.longitude - self.longitude).to_radians();

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().asin();

        EARTH_RADIUS_M * c
    }
}

impl From<[f64; 2]> for GeoLocation {
    fn from(pair: [f64; 2]) -> Self {
        Self::new(pair[0], pair[1])
    }
}

impl From<GeoLocation> for [f64; 2] {
    fn from(location: GeoLocation) -> Self {
        [location.latitude, location.longitude]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_same_point() {
        let p = GeoLocation::new(60.1699, 24.9384);
        assert!((p.distance_m(&p) - 0.0).abs() < 0.001);
    }

    #[test]
    fn test_distance_helsinki_to_tampere() {
        let helsinki = GeoLocation::new(60.1699, 24.9384);
        let tampere = GeoLocation::new(61.4978, 23.7610);
        let dist = helsinki.distance_m(&tampere);
        // Helsinki to Tampere is ~160 km
        assert!((dist - 160_000.0).abs() < 5_000.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = GeoLocation::new(60.17, 24.94);
        let b = GeoLocation::new(60.19, 24.83);
        assert!((a.distance_m(&b) - b.distance_m(&a)).abs() < 1e-9);
    }

    #[test]
    fn test_from_pair_is_lat_then_lng() {
        let p = GeoLocation::from([60.17, 24.94]);
        assert_eq!(p.latitude, 60.17);
        assert_eq!(p.longitude, 24.94);
    }
}
