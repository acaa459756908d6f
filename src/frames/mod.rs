//! Reference-frame links between celestial coordinate systems.
//!
//! Each link maps a [`V6C`](crate::V6C) state vector from one frame into a
//! neighbouring frame. The [`state`](crate::state) module chains links into
//! arbitrary conversions, with FK5 (J2000 equinox) as the hub.
//!
//! # Links
//!
//! - [`fk4`]: FK5 ↔ FK4 via the Standish 6×6 matrices and the E-terms of aberration
//! - [`ecliptic`]: FK5 ↔ mean ecliptic and equinox of date (IAU 1976/1980)
//! - [`galactic`]: FK4 ↔ IAU 1958 galactic coordinates
//! - [`icrs`]: FK5 ↔ ICRS via the Hipparcos frame orientation and spin
//! - [`precession`]: IAU 1976 precession between Julian epochs
//!
//! # Rotation convention
//!
//! [`rotx`], [`roty`] and [`rotz`] are *frame* rotations: they rotate the axes
//! by the given angle, so a fixed vector appears to rotate the opposite way.

pub mod ecliptic;
pub mod fk4;
pub mod galactic;
pub mod icrs;
pub mod precession;

pub use ecliptic::{ecliptic_to_fk5, fk5_to_ecliptic, obliquity};
pub use fk4::{add_eterms, fk4_to_fk5, fk5_to_fk4, remove_eterms};
pub use galactic::{fk4_to_galactic, galactic_matrix, galactic_to_fk4};
pub use icrs::{fk5_to_icrs, icrs_to_fk5};
pub use precession::precession_matrix;

use nalgebra::Matrix3;

/// Frame rotation about the x axis.
pub fn rotx(angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.sin_cos();
    Matrix3::new(1.0, 0.0, 0.0, 0.0, c, s, 0.0, -s, c)
}

/// Frame rotation about the y axis.
pub fn roty(angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.sin_cos();
    Matrix3::new(c, 0.0, -s, 0.0, 1.0, 0.0, s, 0.0, c)
}

/// Frame rotation about the z axis.
pub fn rotz(angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.sin_cos();
    Matrix3::new(c, s, 0.0, -s, c, 0.0, 0.0, 0.0, 1.0)
}
