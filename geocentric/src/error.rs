//! Types d'erreurs pour le crate geocentric

use thiserror::Error;

/// Erreurs pouvant survenir lors des conversions de coordonnées
#[derive(Debug, Error)]
pub enum GeocentricError {
    /// Paramètre hors domaine (ellipsoïde ou coordonnée d'entrée)
    #[error("invalid parameter {name}: {value} (expected {expected})")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        expected: &'static str,
    },

    /// Entrée géocentrique sans position géodésique définie
    #[error("degenerate geocentric input: {reason}")]
    DegenerateInput { reason: &'static str },
}

impl GeocentricError {
    /// Crée une erreur de paramètre invalide
    pub fn invalid_parameter(name: &'static str, value: f64, expected: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value,
            expected,
        }
    }

    /// Crée une erreur d'entrée dégénérée
    pub fn degenerate_input(reason: &'static str) -> Self {
        Self::DegenerateInput { reason }
    }
}
