//! Définitions des ellipsoïdes
//!
//! Un ellipsoïde de révolution est entièrement défini par son demi-grand axe
//! et son aplatissement ; toutes les autres quantités géométriques en sont
//! dérivées et recalculées à la demande.

use crate::error::GeocentricError;

/// Ellipsoïde de révolution
///
/// Valeur immuable : les champs sont privés et la construction via [`Ellipsoid::new`]
/// valide les domaines, un ellipsoïde existant est donc toujours cohérent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    semi_major_axis: f64,
    flattening: f64,
}

impl Ellipsoid {
    /// Ellipsoïde WGS84
    pub const WGS84: Ellipsoid = Ellipsoid {
        semi_major_axis: 6_378_137.0,
        flattening: 1.0 / 298.257223563,
    };

    /// Ellipsoïde GRS80 (utilisé par Lambert 93)
    /// Note: Quasi identique à WGS84, différence < 0.1mm
    pub const GRS80: Ellipsoid = Ellipsoid {
        semi_major_axis: 6_378_137.0,
        flattening: 1.0 / 298.257222101,
    };

    /// Crée un ellipsoïde depuis son demi-grand axe (mètres) et son aplatissement
    ///
    /// # Errors
    ///
    /// Retourne `GeocentricError::InvalidParameter` si le demi-grand axe n'est
    /// pas strictement positif ou si l'aplatissement est hors de (0, 1).
    pub fn new(semi_major_axis: f64, flattening: f64) -> Result<Self, GeocentricError> {
        if !semi_major_axis.is_finite() || semi_major_axis <= 0.0 {
            return Err(GeocentricError::invalid_parameter(
                "semi_major_axis",
                semi_major_axis,
                "a finite value > 0 in meters",
            ));
        }
        if !flattening.is_finite() || flattening <= 0.0 || flattening >= 1.0 {
            return Err(GeocentricError::invalid_parameter(
                "flattening",
                flattening,
                "a finite value in (0, 1)",
            ));
        }

        Ok(Self {
            semi_major_axis,
            flattening,
        })
    }

    /// Demi-grand axe (rayon équatorial) en mètres
    #[inline]
    pub fn semi_major_axis(&self) -> f64 {
        self.semi_major_axis
    }

    /// Aplatissement
    #[inline]
    pub fn flattening(&self) -> f64 {
        self.flattening
    }

    /// Demi-petit axe (rayon polaire) en mètres
    #[inline]
    pub fn semi_minor_axis(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.flattening)
    }

    /// Première excentricité au carré
    #[inline]
    pub fn first_eccentricity_squared(&self) -> f64 {
        (2.0 - self.flattening) * self.flattening
    }

    /// Première excentricité
    #[inline]
    pub fn first_eccentricity(&self) -> f64 {
        self.first_eccentricity_squared().sqrt()
    }

    /// Deuxième excentricité au carré
    #[inline]
    pub fn second_eccentricity_squared(&self) -> f64 {
        let e2 = self.first_eccentricity_squared();
        e2 / (1.0 - e2)
    }

    /// Deuxième excentricité
    #[inline]
    pub fn second_eccentricity(&self) -> f64 {
        self.second_eccentricity_squared().sqrt()
    }

    /// Grande normale (rayon de courbure dans le plan vertical) à la latitude
    /// géodésique donnée, en radians
    #[inline]
    pub fn grande_normale(&self, lat: f64) -> f64 {
        self.semi_major_axis / (1.0 - self.first_eccentricity_squared() * lat.sin().powi(2)).sqrt()
    }
}
