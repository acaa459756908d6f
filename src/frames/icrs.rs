//! FK5 ↔ ICRS via the Hipparcos catalogue frame.
//!
//! The Hipparcos frame is aligned with the ICRS. Relative to FK5 (J2000) it
//! has a fixed orientation offset at J2000 and a residual spin (Mignard &
//! Froeschlé 2000), so the two frames drift apart linearly with time.

use nalgebra::{Matrix3, Vector3};

use crate::time::J2000;
use crate::units::DAS2R;
use crate::vec6::V6C;

/// Orientation of FK5 with respect to Hipparcos at J2000, in mas.
const ORIENTATION_MAS: [f64; 3] = [-19.9, -9.1, 22.9];
/// Spin of FK5 with respect to Hipparcos, in mas per Julian year.
const SPIN_MAS_PER_YEAR: [f64; 3] = [-0.30, 0.60, 0.70];

const DAYS_PER_YEAR: f64 = 365.25;

/// Rotation matrix for a rotation vector (axis × angle, radians).
fn rv2m(w: &Vector3<f64>) -> Matrix3<f64> {
    let phi = w.norm();
    let (s, c) = phi.sin_cos();
    let f = 1.0 - c;
    let (x, y, z) = if phi > 0.0 {
        (w.x / phi, w.y / phi, w.z / phi)
    } else {
        (w.x, w.y, w.z)
    };
    Matrix3::new(
        x * x * f + c,
        x * y * f + z * s,
        x * z * f - y * s,
        y * x * f - z * s,
        y * y * f + c,
        y * z * f + x * s,
        z * x * f + y * s,
        z * y * f - x * s,
        z * z * f + c,
    )
}

/// FK5 → Hipparcos rotation and the FK5 spin in radians per day.
fn fk5_hipparcos() -> (Matrix3<f64>, Vector3<f64>) {
    let r5h = rv2m(&(Vector3::from(ORIENTATION_MAS) * 1e-3 * DAS2R));
    let s5h = Vector3::from(SPIN_MAS_PER_YEAR) * 1e-3 * DAS2R / DAYS_PER_YEAR;
    (r5h, s5h)
}

/// FK5 (J2000 equinox) to ICRS, both at epoch `epoch`.
pub fn fk5_to_icrs(v: &V6C, epoch: f64) -> V6C {
    let (r5h, s5h) = fk5_hipparcos();
    let v = v.propagate(J2000, epoch);
    let vel = v.vel + s5h.cross(&v.pos);
    V6C::new(r5h * v.pos, r5h * vel).propagate(epoch, J2000)
}

/// ICRS to FK5 (J2000 equinox), both at epoch `epoch`.
pub fn icrs_to_fk5(v: &V6C, epoch: f64) -> V6C {
    let (r5h, s5h) = fk5_hipparcos();
    let v = v.propagate(J2000, epoch);
    let vel = v.vel - (r5h * s5h).cross(&v.pos);
    let rt = r5h.transpose();
    V6C::new(rt * v.pos, rt * vel).propagate(epoch, J2000)
}
