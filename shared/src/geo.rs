//! Great-circle distance math and distance formatting
//!
//! Everything here is pure; the map and list screens call it on every
//! re-render, so it must stay allocation-light.

use crate::types::Coordinates;

/// Mean Earth radius in meters
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

fn to_rad(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

/// Haversine distance between two points, in meters.
///
/// The intermediate term is clamped to [0, 1] so antipodal or identical
/// points never produce a NaN out of the square roots.
pub fn haversine_meters(a: &Coordinates, b: &Coordinates) -> f64 {
    let d_lat = to_rad(b.latitude - a.latitude);
    let d_lon = to_rad(b.longitude - a.longitude);
    let lat1 = to_rad(a.latitude);
    let lat2 = to_rad(b.latitude);

    let s = (d_lat / 2.0).sin().powi(2) + (d_lon / 2.0).sin().powi(2) * lat1.cos() * lat2.cos();
    let s = s.clamp(0.0, 1.0);

    let c = 2.0 * s.sqrt().atan2((1.0 - s).sqrt());
    EARTH_RADIUS_METERS * c
}

/// Haversine distance in kilometers
pub fn haversine_km(a: &Coordinates, b: &Coordinates) -> f64 {
    haversine_meters(a, b) / 1000.0
}

/// Format a distance in meters for display: under 1 km as rounded meters,
/// otherwise one-decimal kilometers.
pub fn format_distance_meters(meters: f64) -> String {
    if meters < 1000.0 {
        format!("{} m", meters.round() as i64)
    } else {
        format!("{:.1} km", meters / 1000.0)
    }
}

/// Same formatting rule for a distance already expressed in kilometers
pub fn format_distance_km(km: f64) -> String {
    format_distance_meters(km * 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn coord(lat: f64, lon: f64) -> Coordinates {
        Coordinates::new(lat, lon)
    }

    #[test]
    fn test_zero_distance_for_same_point() {
        let a = coord(19.4326, -99.1332);
        assert_eq!(haversine_meters(&a, &a), 0.0);
    }

    #[test]
    fn test_known_distance() {
        // Zamora cathedral to a point roughly 1.1 km away
        let a = coord(19.9855, -102.2836);
        let b = coord(19.9950, -102.2800);
        let d = haversine_meters(&a, &b);
        assert!(d > 900.0 && d < 1300.0, "unexpected distance: {}", d);
    }

    #[test]
    fn test_antipodal_points_do_not_produce_nan() {
        let a = coord(0.0, 0.0);
        let b = coord(0.0, 180.0);
        let d = haversine_meters(&a, &b);
        assert!(d.is_finite());
        // Half the Earth's circumference, within a percent
        assert!((d - 20_015_086.0).abs() < 200_000.0);
    }

    #[test]
    fn test_format_distance() {
        assert_eq!(format_distance_meters(950.0), "950 m");
        assert_eq!(format_distance_meters(1500.0), "1.5 km");
        assert_eq!(format_distance_meters(999_999.0), "1000.0 km");
        assert_eq!(format_distance_meters(0.0), "0 m");
    }

    #[test]
    fn test_format_distance_km_variant() {
        assert_eq!(format_distance_km(0.95), "950 m");
        assert_eq!(format_distance_km(1.5), "1.5 km");
    }

    proptest! {
        /// distance(a, a) = 0 for any coordinate
        #[test]
        fn prop_self_distance_is_zero(
            lat in -90.0f64..90.0,
            lon in -180.0f64..180.0,
        ) {
            let a = coord(lat, lon);
            prop_assert_eq!(haversine_meters(&a, &a), 0.0);
        }

        /// distance(a, b) = distance(b, a)
        #[test]
        fn prop_distance_is_symmetric(
            lat1 in -90.0f64..90.0,
            lon1 in -180.0f64..180.0,
            lat2 in -90.0f64..90.0,
            lon2 in -180.0f64..180.0,
        ) {
            let a = coord(lat1, lon1);
            let b = coord(lat2, lon2);
            let ab = haversine_meters(&a, &b);
            let ba = haversine_meters(&b, &a);
            prop_assert!((ab - ba).abs() < 1e-6);
        }

        /// distances are always finite and non-negative
        #[test]
        fn prop_distance_is_finite_and_non_negative(
            lat1 in -90.0f64..90.0,
            lon1 in -180.0f64..180.0,
            lat2 in -90.0f64..90.0,
            lon2 in -180.0f64..180.0,
        ) {
            let d = haversine_meters(&coord(lat1, lon1), &coord(lat2, lon2));
            prop_assert!(d.is_finite());
            prop_assert!(d >= 0.0);
        }
    }
}
