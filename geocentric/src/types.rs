//! Types de coordonnées

/// Position géodésique sur un ellipsoïde de référence
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geodetic {
    /// Latitude en degrés, domaine [-90, 90]
    pub latitude: f64,

    /// Longitude en degrés, domaine (-180, 180]
    pub longitude: f64,

    /// Altitude ellipsoïdale en mètres (négative sous l'ellipsoïde)
    pub altitude: f64,
}

impl Geodetic {
    /// Crée une position géodésique
    pub fn new(latitude: f64, longitude: f64, altitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude,
        }
    }

    /// Position sur la surface de l'ellipsoïde (altitude nulle)
    pub fn surface(latitude: f64, longitude: f64) -> Self {
        Self::new(latitude, longitude, 0.0)
    }
}

/// Position cartésienne géocentrique (ECEF) en mètres
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geocentric {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Geocentric {
    /// Crée une position géocentrique
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}
