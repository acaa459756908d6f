//! IAU 1976 (Lieske) precession.

use nalgebra::Matrix3;

use super::{roty, rotz};
use crate::units::DAS2R;

/// Precession matrix from mean equator and equinox of Julian epoch `ep0` to
/// that of Julian epoch `ep1` (both in years, e.g. 2000.0).
///
/// Built from the Euler angles ζ, z, θ as `Rz(-z) · Ry(θ) · Rz(-ζ)`.
pub fn precession_matrix(ep0: f64, ep1: f64) -> Matrix3<f64> {
    let t0 = (ep0 - 2000.0) / 100.0;
    let t = (ep1 - ep0) / 100.0;
    let tas2r = t * DAS2R;
    let w = 2306.2181 + (1.39656 - 0.000139 * t0) * t0;

    let zeta = (w + ((0.30188 - 0.000344 * t0) + 0.017998 * t) * t) * tas2r;
    let z = (w + ((1.09468 + 0.000066 * t0) + 0.018203 * t) * t) * tas2r;
    let theta = ((2004.3109 + (-0.85330 - 0.000217 * t0) * t0)
        + ((-0.42665 - 0.000217 * t0) - 0.041833 * t) * t)
        * tas2r;

    rotz(-z) * roty(theta) * rotz(-zeta)
}
