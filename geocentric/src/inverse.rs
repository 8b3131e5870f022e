//! Conversion géocentrique → géodésique (ECEF → LLA)
//!
//! Méthode de Bowring : un angle auxiliaire donne la latitude en une seule
//! passe, sans raffinement itératif de Newton. L'erreur reste
//! sous-millimétrique en altitude et sous le microdegré en angle pour des
//! points terrestres ou proches de la Terre ; elle croît aux altitudes
//! extrêmes.

use crate::angle;
use crate::ellipsoid::Ellipsoid;
use crate::error::GeocentricError;
use crate::types::{Geocentric, Geodetic};

/// Distance à l'axe polaire (mètres) sous laquelle la longitude est
/// conventionnellement nulle
const POLAR_AXIS_EPSILON: f64 = 1.0e-12;

/// Convertit une position cartésienne géocentrique en position géodésique
///
/// La longitude retournée est dans (-180, 180], la latitude dans [-90, 90].
/// Sur l'axe polaire la longitude est indéfinie et vaut 0 par convention.
///
/// # Errors
///
/// Retourne `GeocentricError::InvalidParameter` si une composante n'est pas
/// finie, et `GeocentricError::DegenerateInput` pour l'origine (0, 0, 0),
/// qui n'a pas de position géodésique.
pub fn geocentric_to_geodetic(
    ellipsoid: &Ellipsoid,
    geocentric: Geocentric,
) -> Result<Geodetic, GeocentricError> {
    validate(geocentric)?;

    let (x, y, z) = (geocentric.x, geocentric.y, geocentric.z);
    let a = ellipsoid.semi_major_axis();
    let b = ellipsoid.semi_minor_axis();
    let e2 = ellipsoid.first_eccentricity_squared();
    let ep2 = ellipsoid.second_eccentricity_squared();

    // Distance à l'axe polaire
    let p = (x.powi(2) + y.powi(2)).sqrt();

    if p < POLAR_AXIS_EPSILON {
        tracing::trace!(z, "point on the polar axis, longitude set to 0");
        let latitude = 90.0_f64.copysign(z);
        let altitude = z.abs() - b;
        return Ok(Geodetic::new(latitude, 0.0, altitude));
    }

    // Angle auxiliaire de Bowring
    let theta = (z * a).atan2(p * b);
    let (sin_theta, cos_theta) = theta.sin_cos();

    let lat = (z + ep2 * b * sin_theta.powi(3)).atan2(p - e2 * a * cos_theta.powi(3));

    // atan2 couvre les quatre quadrants, y compris x = 0
    let lon = y.atan2(x);

    let n = ellipsoid.grande_normale(lat);
    let altitude = p / lat.cos() - n;

    Ok(Geodetic::new(
        lat.to_degrees(),
        angle::normalize_longitude(lon.to_degrees()),
        altitude,
    ))
}

/// Validation des composantes avant tout calcul trigonométrique
fn validate(geocentric: Geocentric) -> Result<(), GeocentricError> {
    for (name, value) in [
        ("x", geocentric.x),
        ("y", geocentric.y),
        ("z", geocentric.z),
    ] {
        if !value.is_finite() {
            return Err(GeocentricError::invalid_parameter(
                name,
                value,
                "a finite value in meters",
            ));
        }
    }

    if geocentric.x == 0.0 && geocentric.y == 0.0 && geocentric.z == 0.0 {
        return Err(GeocentricError::degenerate_input(
            "the coordinate origin is the Earth's center",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forward::geodetic_to_geocentric;

    #[test]
    fn test_rejects_origin() {
        let err = geocentric_to_geodetic(&Ellipsoid::WGS84, Geocentric::new(0.0, 0.0, 0.0))
            .unwrap_err();
        assert!(matches!(err, GeocentricError::DegenerateInput { .. }));
    }

    #[test]
    fn test_rejects_non_finite_components() {
        let wgs84 = Ellipsoid::WGS84;

        let err = geocentric_to_geodetic(&wgs84, Geocentric::new(f64::NAN, 0.0, 0.0))
            .unwrap_err();
        assert!(matches!(
            err,
            GeocentricError::InvalidParameter { name: "x", .. }
        ));
        assert!(
            geocentric_to_geodetic(&wgs84, Geocentric::new(0.0, f64::INFINITY, 0.0)).is_err()
        );
        assert!(geocentric_to_geodetic(&wgs84, Geocentric::new(0.0, 0.0, f64::NAN)).is_err());
    }

    #[test]
    fn test_equator_prime_meridian() {
        let geodetic =
            geocentric_to_geodetic(&Ellipsoid::WGS84, Geocentric::new(6_378_137.0, 0.0, 0.0))
                .unwrap();

        assert!(geodetic.latitude.abs() < 1e-9, "lat={}", geodetic.latitude);
        assert!(geodetic.longitude.abs() < 1e-9, "lon={}", geodetic.longitude);
        assert!(geodetic.altitude.abs() < 1e-6, "alt={}", geodetic.altitude);
    }

    #[test]
    fn test_zero_x_meridian() {
        // x = 0 est le cas dégénéré d'une arctangente à un argument,
        // atan2 le couvre sans branche particulière
        let east =
            geocentric_to_geodetic(&Ellipsoid::WGS84, Geocentric::new(0.0, 6_378_137.0, 0.0))
                .unwrap();
        assert!((east.longitude - 90.0).abs() < 1e-9, "lon={}", east.longitude);
        assert!(east.latitude.abs() < 1e-9, "lat={}", east.latitude);
        assert!(east.altitude.abs() < 1e-6, "alt={}", east.altitude);

        let west =
            geocentric_to_geodetic(&Ellipsoid::WGS84, Geocentric::new(0.0, -6_378_137.0, 0.0))
                .unwrap();
        assert!(
            (west.longitude + 90.0).abs() < 1e-9,
            "lon={}",
            west.longitude
        );
    }

    #[test]
    fn test_polar_axis_north() {
        let geodetic = geocentric_to_geodetic(
            &Ellipsoid::WGS84,
            Geocentric::new(0.0, 0.0, 6_356_752.314245179 + 500.0),
        )
        .unwrap();

        assert_eq!(geodetic.latitude, 90.0);
        assert_eq!(geodetic.longitude, 0.0);
        assert!((geodetic.altitude - 500.0).abs() < 1e-3, "alt={}", geodetic.altitude);
    }

    #[test]
    fn test_polar_axis_south() {
        let geodetic = geocentric_to_geodetic(
            &Ellipsoid::WGS84,
            Geocentric::new(0.0, 0.0, -6_356_752.314245179),
        )
        .unwrap();

        assert_eq!(geodetic.latitude, -90.0);
        assert_eq!(geodetic.longitude, 0.0);
        assert!(geodetic.altitude.abs() < 1e-3, "alt={}", geodetic.altitude);
    }

    #[test]
    fn test_known_point_roundtrip() {
        let wgs84 = Ellipsoid::WGS84;
        let origin = Geodetic::new(10.0, 12.0, 20.0);

        let ecef = geodetic_to_geocentric(&wgs84, origin).unwrap();
        let back = geocentric_to_geodetic(&wgs84, ecef).unwrap();

        assert!((back.latitude - 10.0).abs() < 1e-6, "lat={}", back.latitude);
        assert!((back.longitude - 12.0).abs() < 1e-6, "lon={}", back.longitude);
        assert!((back.altitude - 20.0).abs() < 1e-3, "alt={}", back.altitude);
    }
}
