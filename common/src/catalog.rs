//! One-time dataset enrichment: randomized delivery prices and the
//! synthetic viewer location.
//!
//! Both steps run exactly once during application initialization and the
//! results are passed down as immutable values. The RNG is a generic
//! parameter so tests can seed a `StdRng` and get deterministic output.

use rand::Rng;

use crate::location::GeoLocation;
use crate::model::restaurant::Restaurant;

/// Upper bound (exclusive) of the uniform delivery-price draw.
pub const DELIVERY_PRICE_MAX: f64 = 1500.0;

/// Overwrites every record's `delivery_price` with a uniform draw from
/// `[0, DELIVERY_PRICE_MAX)`.
///
/// EUR records are rounded to 2 decimal places; every other currency
/// keeps the raw drawn value. The resulting unit mismatch between the
/// two branches is intentional, preserved as observed behavior.
pub fn assign_delivery_prices<R: Rng>(restaurants: &mut [Restaurant], rng: &mut R) {
    for restaurant in restaurants.iter_mut() {
        let drawn = rng.gen_range(0.0..DELIVERY_PRICE_MAX);
        restaurant.delivery_price = if restaurant.currency == "EUR" {
            (drawn * 100.0).round() / 100.0
        } else {
            drawn
        };
    }
}

/// Axis-aligned bounding box over a set of coordinates, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

/// Min/max latitude and longitude across the full set.
///
/// An empty set yields infinite bounds.
pub fn bounding_box(restaurants: &[Restaurant]) -> BoundingBox {
    let mut bbox = BoundingBox {
        min_lat: f64::INFINITY,
        max_lat: f64::NEG_INFINITY,
        min_lng: f64::INFINITY,
        max_lng: f64::NEG_INFINITY,
    };

    for restaurant in restaurants {
        bbox.min_lat = bbox.min_lat.min(restaurant.location.latitude);
        bbox.max_lat = bbox.max_lat.max(restaurant.location.latitude);
        bbox.min_lng = bbox.min_lng.min(restaurant.location.longitude);
        bbox.max_lng = bbox.max_lng.max(restaurant.location.longitude);
    }

    bbox
}

/// Draws one random coordinate uniformly inside the dataset's bounding
/// box. Used as the reference point for every "closest" comparison.
///
/// Latitude and longitude are drawn independently as
/// `r * (max - min) + min`, so the result always lies within the box.
/// An empty set produces non-finite coordinates; that case is not
/// guarded.
pub fn random_viewer_location<R: Rng>(restaurants: &[Restaurant], rng: &mut R) -> GeoLocation {
    let bbox = bounding_box(restaurants);

    let latitude = rng.gen_range(0.0..1.0) * (bbox.max_lat - bbox.min_lat) + bbox.min_lat;
    let longitude = rng.gen_range(0.0..1.0) * (bbox.max_lng - bbox.min_lng) + bbox.min_lng;

    GeoLocation::new(latitude, longitude)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn restaurant(name: &str, currency: &str, lat: f64, lng: f64) -> Restaurant {
        Restaurant {
            name: name.to_string(),
            description: String::new(),
            city: "Helsinki".to_string(),
            tags: vec![],
            currency: currency.to_string(),
            delivery_price: 0.0,
            location: GeoLocation::new(lat, lng),
            image: String::new(),
            blurhash: String::new(),
            online: true,
        }
    }

    fn decimal_places_at_most(value: f64, places: u32) -> bool {
        let scaled = value * 10f64.powi(places as i32);
        (scaled - scaled.round()).abs() < 1e-6
    }

    #[test]
    fn test_eur_prices_rounded_within_range() {
        let mut set: Vec<Restaurant> = (0..200)
            .map(|i| restaurant(&format!("r{i}"), "EUR", 60.17, 24.94))
            .collect();
        let mut rng = StdRng::seed_from_u64(7);

        assign_delivery_prices(&mut set, &mut rng);

        for r in &set {
            assert!(r.delivery_price >= 0.0 && r.delivery_price <= DELIVERY_PRICE_MAX);
            assert!(decimal_places_at_most(r.delivery_price, 2));
        }
    }

    #[test]
    fn test_non_eur_prices_raw_within_range() {
        let mut set: Vec<Restaurant> = (0..200)
            .map(|i| restaurant(&format!("r{i}"), "SEK", 60.17, 24.94))
            .collect();
        let mut rng = StdRng::seed_from_u64(7);

        assign_delivery_prices(&mut set, &mut rng);

        for r in &set {
            assert!(r.delivery_price >= 0.0 && r.delivery_price < DELIVERY_PRICE_MAX);
        }
    }

    #[test]
    fn test_bounding_box_spans_the_set() {
        let set = vec![
            restaurant("a", "EUR", 60.15, 24.90),
            restaurant("b", "EUR", 60.21, 25.02),
            restaurant("c", "EUR", 60.18, 24.80),
        ];

        let bbox = bounding_box(&set);
        assert_eq!(bbox.min_lat, 60.15);
        assert_eq!(bbox.max_lat, 60.21);
        assert_eq!(bbox.min_lng, 24.80);
        assert_eq!(bbox.max_lng, 25.02);
    }

    #[test]
    fn test_viewer_location_stays_inside_bounding_box() {
        let set = vec![
            restaurant("a", "EUR", 60.15, 24.90),
            restaurant("b", "EUR", 60.21, 25.02),
            restaurant("c", "EUR", 60.18, 24.80),
        ];
        let bbox = bounding_box(&set);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let viewer = random_viewer_location(&set, &mut rng);
            assert!(viewer.latitude >= bbox.min_lat && viewer.latitude <= bbox.max_lat);
            assert!(viewer.longitude >= bbox.min_lng && viewer.longitude <= bbox.max_lng);
        }
    }

    #[test]
    fn test_enrichment_is_deterministic_under_a_fixed_seed() {
        let mut first: Vec<Restaurant> = (0..10)
            .map(|i| restaurant(&format!("r{i}"), "EUR", 60.17, 24.94))
            .collect();
        let mut second = first.clone();

        assign_delivery_prices(&mut first, &mut StdRng::seed_from_u64(99));
        assign_delivery_prices(&mut second, &mut StdRng::seed_from_u64(99));

        assert_eq!(first, second);
    }
}
