//! FK4 ↔ IAU 1958 galactic coordinates.
//!
//! The galactic system is defined on the FK4 frame (B1950 equinox) with the
//! E-terms of aberration removed. The rotation is built from the defining
//! constants rather than a tabulated matrix.

use nalgebra::Matrix3;
use std::f64::consts::{FRAC_PI_2, PI};

use super::fk4::{add_eterms, remove_eterms};
use super::{roty, rotz};
use crate::units::d2r;
use crate::vec6::V6C;

/// Right ascension of the north galactic pole (B1950, degrees).
pub const NGP_ALPHA_DEG: f64 = 192.25;
/// Declination of the north galactic pole (B1950, degrees).
pub const NGP_DELTA_DEG: f64 = 27.4;
/// Galactic longitude of the north celestial pole (degrees).
pub const NCP_LONGITUDE_DEG: f64 = 123.0;

/// Rotation from FK4 (B1950, E-terms removed) to galactic coordinates.
pub fn galactic_matrix() -> Matrix3<f64> {
    rotz(PI - d2r(NCP_LONGITUDE_DEG))
        * roty(FRAC_PI_2 - d2r(NGP_DELTA_DEG))
        * rotz(d2r(NGP_ALPHA_DEG))
}

/// FK4 (with E-terms) to galactic.
pub fn fk4_to_galactic(v: &V6C) -> V6C {
    remove_eterms(v).rotate(&galactic_matrix())
}

/// Galactic to FK4 (with E-terms).
pub fn galactic_to_fk4(v: &V6C) -> V6C {
    add_eterms(&v.rotate_inverse(&galactic_matrix()))
}
