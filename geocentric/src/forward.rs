//! Conversion géodésique → géocentrique (LLA → ECEF)
//!
//! Forme fermée exacte, sans itération : le point est porté par la grande
//! normale à la latitude donnée.

use crate::ellipsoid::Ellipsoid;
use crate::error::GeocentricError;
use crate::types::{Geocentric, Geodetic};

/// Convertit une position géodésique en cartésien géocentrique
///
/// Latitude dans [-90, 90], longitude dans [-180, 180] (-180 et 180
/// désignent le même méridien), altitude finie en mètres. Le résultat est
/// exact au sens de l'arithmétique double précision.
///
/// # Errors
///
/// Retourne `GeocentricError::InvalidParameter` si une coordonnée est hors
/// domaine ou non finie.
pub fn geodetic_to_geocentric(
    ellipsoid: &Ellipsoid,
    geodetic: Geodetic,
) -> Result<Geocentric, GeocentricError> {
    validate(geodetic)?;

    let lat = geodetic.latitude.to_radians();
    let lon = geodetic.longitude.to_radians();
    let alt = geodetic.altitude;

    let (sin_lat, cos_lat) = lat.sin_cos();
    let e2 = ellipsoid.first_eccentricity_squared();
    let n = ellipsoid.grande_normale(lat);

    let x = (n + alt) * cos_lat * lon.cos();
    let y = (n + alt) * cos_lat * lon.sin();
    let z = (n * (1.0 - e2) + alt) * sin_lat;

    Ok(Geocentric::new(x, y, z))
}

/// Validation des domaines avant tout calcul trigonométrique
fn validate(geodetic: Geodetic) -> Result<(), GeocentricError> {
    // NaN échoue les tests d'intervalle, il est donc rejeté ici aussi
    if !(-90.0..=90.0).contains(&geodetic.latitude) {
        return Err(GeocentricError::invalid_parameter(
            "latitude",
            geodetic.latitude,
            "degrees in [-90, 90]",
        ));
    }
    if !(-180.0..=180.0).contains(&geodetic.longitude) {
        return Err(GeocentricError::invalid_parameter(
            "longitude",
            geodetic.longitude,
            "degrees in [-180, 180]",
        ));
    }
    if !geodetic.altitude.is_finite() {
        return Err(GeocentricError::invalid_parameter(
            "altitude",
            geodetic.altitude,
            "a finite value in meters",
        ));
    }
    Ok(())
}
