//! # geocentric
//!
//! Conversions entre coordonnées géodésiques (latitude, longitude, altitude)
//! et coordonnées cartésiennes géocentriques (ECEF) sur un ellipsoïde de
//! révolution.
//!
//! ## Features
//!
//! - Conversion géodésique → géocentrique en forme fermée (sans itération)
//! - Conversion inverse par la méthode de Bowring (angle auxiliaire, une passe)
//! - Ellipsoïdes paramétrés par demi-grand axe et aplatissement (WGS84, GRS80)
//! - Validation des domaines d'entrée avec erreurs typées
//!
//! ## Usage
//!
//! ```rust
//! use geocentric::{geocentric_to_geodetic, geodetic_to_geocentric, Ellipsoid, Geodetic};
//!
//! let wgs84 = Ellipsoid::WGS84;
//!
//! let ecef = geodetic_to_geocentric(&wgs84, Geodetic::new(10.0, 12.0, 20.0))?;
//! let back = geocentric_to_geodetic(&wgs84, ecef)?;
//!
//! assert!((back.latitude - 10.0).abs() < 1e-6);
//! assert!((back.longitude - 12.0).abs() < 1e-6);
//! assert!((back.altitude - 20.0).abs() < 1e-3);
//! # Ok::<(), geocentric::GeocentricError>(())
//! ```

pub mod angle;
pub mod ellipsoid;
pub mod error;
pub mod forward;
pub mod inverse;
pub mod types;

pub use ellipsoid::Ellipsoid;
pub use error::GeocentricError;
pub use forward::geodetic_to_geocentric;
pub use inverse::geocentric_to_geodetic;
pub use types::{Geocentric, Geodetic};
