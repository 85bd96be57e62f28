//! Great-circle distance.
//!
//! Haversine over decimal-degree coordinates, meters out. Coordinates are
//! validated up front; everything past validation is pure arithmetic.

use crate::domain::GeoPoint;
use crate::error::AuraError;

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Haversine distance between two points, in meters.
pub fn distance_meters(a: &GeoPoint, b: &GeoPoint) -> Result<f64, AuraError> {
    a.validate()?;
    b.validate()?;

    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let dlat = (b.latitude - a.latitude).to_radians();
    let dlng = (b.longitude - a.longitude).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    Ok(EARTH_RADIUS_M * c)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(lat: f64, lng: f64) -> GeoPoint {
        GeoPoint {
            latitude: lat,
            longitude: lng,
        }
    }

    #[test]
    fn distance_to_self_is_zero() {
        let p = point(40.7128, -74.0060);
        assert_eq!(distance_meters(&p, &p).unwrap(), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let p = point(40.7128, -74.0060);
        let q = point(51.5074, -0.1278);
        let pq = distance_meters(&p, &q).unwrap();
        let qp = distance_meters(&q, &p).unwrap();
        assert!((pq - qp).abs() / pq < 1e-4);
    }

    #[test]
    fn nyc_to_london_matches_reference() {
        // Reference great-circle distance ≈ 5,570 km; allow 0.01% plus the
        // spherical-model slack.
        let nyc = point(40.7128, -74.0060);
        let london = point(51.5074, -0.1278);
        let d = distance_meters(&nyc, &london).unwrap();
        assert!((d - 5_570_000.0).abs() < 10_000.0, "got {d}");
    }

    #[test]
    fn short_east_west_hop_is_about_850m() {
        // One hundredth of a degree of longitude at NYC's latitude.
        let a = point(40.7128, -74.0060);
        let b = point(40.7128, -73.9960);
        let d = distance_meters(&a, &b).unwrap();
        assert!((700.0..1000.0).contains(&d), "got {d}");
    }

    #[test]
    fn triangle_inequality_holds() {
        let p = point(40.7128, -74.0060);
        let q = point(42.3601, -71.0589);
        let r = point(39.9526, -75.1652);
        let pq = distance_meters(&p, &q).unwrap();
        let qr = distance_meters(&q, &r).unwrap();
        let pr = distance_meters(&p, &r).unwrap();
        assert!(pr <= pq + qr + 1e-6);
    }

    #[test]
    fn out_of_range_coordinates_are_rejected() {
        let good = point(0.0, 0.0);
        let bad_lat = point(91.0, 0.0);
        let bad_lng = point(0.0, 181.0);
        assert!(matches!(
            distance_meters(&good, &bad_lat),
            Err(AuraError::InvalidCoordinate(_))
        ));
        assert!(matches!(
            distance_meters(&bad_lng, &good),
            Err(AuraError::InvalidCoordinate(_))
        ));
    }
}
