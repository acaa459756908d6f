//! FK5 ↔ FK4 conversion.
//!
//! The FK4 frame (B1950 equinox) differs from FK5 (J2000 equinox) by the
//! equinox correction, the change of precession constants and the E-terms of
//! aberration, which FK4 catalogue positions include. The conversion uses the
//! 6×6 matrices of Standish (1982) and Aoki et al. (1983) acting on a
//! position/velocity pair in "unit distance, arcsec per century" form.
//!
//! The matrices link an FK5 state at epoch J2000 to an FK4 state at epoch
//! B1950. The public functions take and return states at a common epoch and
//! propagate linearly on either side of the matrix step.

use nalgebra::{Matrix6, Vector3, Vector6};

use crate::time::{B1950, CB, CJ, J2000};
use crate::units::DR2AS;
use crate::vec6::V6C;

// ── Constants ──

/// E-terms of aberration: position part (radians).
const ETERM_POS: [f64; 3] = [-1.62557e-6, -0.31919e-6, -0.13843e-6];
/// E-terms of aberration: rate part (arcsec per tropical century).
const ETERM_VEL: [f64; 3] = [1.245e-3, -1.580e-3, -0.659e-3];

/// FK4 (B1950, E-terms removed) to FK5 (J2000), row major.
#[rustfmt::skip]
const EM425: [f64; 36] = [
    0.9999256782, -0.0111820610, -0.0048579477, 0.00000242395018, -0.00000002710663, -0.00000001177656,
    0.0111820610, 0.9999374784, -0.0000271765, 0.00000002710663, 0.00000242397878, -0.00000000006587,
    0.0048579479, -0.0000272474, 0.9999881997, 0.00000001177656, -0.00000000006582, 0.00000242410173,
    -0.000551, -0.238565, 0.435739, 0.99994704, -0.01118251, -0.00485767,
    0.238514, -0.002667, -0.008541, 0.01118251, 0.99995883, -0.00002718,
    -0.435623, 0.012254, 0.002117, 0.00485767, -0.00002714, 1.00000956,
];

/// FK5 (J2000) to FK4 (B1950, without E-terms), row major.
#[rustfmt::skip]
const EM524: [f64; 36] = [
    0.9999256795, 0.0111814828, 0.0048590039, -0.00000242389840, -0.00000002710544, -0.00000001177742,
    -0.0111814828, 0.9999374849, -0.0000271771, 0.00000002710544, -0.00000242392702, 0.00000000006585,
    -0.0048590040, -0.0000271557, 0.9999881946, 0.00000001177742, 0.00000000006585, -0.00000242404995,
    -0.000551, 0.238509, -0.435614, 0.99990432, 0.01118145, 0.00485852,
    -0.238560, -0.002667, 0.012254, -0.01118145, 0.99991613, -0.00002717,
    0.435730, -0.008541, 0.002117, -0.00485852, -0.00002716, 0.99996684,
];

// ── State-vector scaling ──

/// Split a state into distance and a unit-distance 6-vector whose velocity
/// part is in arcsec per century of `century` days.
fn to_unit_form(v: &V6C, century: f64) -> (f64, Vector6<f64>) {
    let r = v.r();
    let p = v.pos / r;
    let d = v.vel / r * century * DR2AS;
    (r, Vector6::new(p.x, p.y, p.z, d.x, d.y, d.z))
}

fn from_unit_form(r: f64, pos: Vector3<f64>, vel: Vector3<f64>, century: f64) -> V6C {
    V6C::new(pos * r, vel * r / DR2AS / century)
}

fn split(pv: &Vector6<f64>) -> (Vector3<f64>, Vector3<f64>) {
    (pv.fixed_rows::<3>(0).into(), pv.fixed_rows::<3>(3).into())
}

// ── Frame steps at the standard epochs ──

/// FK5 state at epoch J2000 to FK4 state at epoch B1950.
fn fk524(v: &V6C) -> V6C {
    let a = Vector3::from(ETERM_POS);
    let ad = Vector3::from(ETERM_VEL);

    let (r, pv) = to_unit_form(v, CJ);
    let (p1, v1) = split(&(Matrix6::from_row_slice(&EM524) * pv));

    // Re-apply the E-terms, iterating once on the length of the result
    let q = p1.dot(&a);
    let w = (p1 + a * p1.norm() - p1 * q).norm();
    let pos = p1 + a * w - p1 * q;
    let vel = v1 + ad * w - pos * p1.dot(&ad);

    from_unit_form(r, pos, vel, CB)
}

/// FK4 state at epoch B1950 to FK5 state at epoch J2000.
fn fk425(v: &V6C) -> V6C {
    let a = Vector3::from(ETERM_POS);
    let ad = Vector3::from(ETERM_VEL);

    let (r, pv) = to_unit_form(v, CB);
    let (u, ud) = split(&pv);

    // Remove the E-terms
    let p1 = u - a + u * u.dot(&a);
    let v1 = ud - ad + u * u.dot(&ad);

    let (pos, vel) = split(
        &(Matrix6::from_row_slice(&EM425)
            * Vector6::new(p1.x, p1.y, p1.z, v1.x, v1.y, v1.z)),
    );
    from_unit_form(r, pos, vel, CJ)
}

// ── Public links ──

/// FK5 (J2000 equinox) to FK4 (B1950 equinox), both at epoch `epoch`.
///
/// A null position passes through unchanged.
pub fn fk5_to_fk4(v: &V6C, epoch: f64) -> V6C {
    if v.r() == 0.0 {
        return *v;
    }
    fk524(&v.propagate(J2000, epoch)).propagate(epoch, B1950)
}

/// FK4 (B1950 equinox) to FK5 (J2000 equinox), both at epoch `epoch`.
///
/// A null position passes through unchanged.
pub fn fk4_to_fk5(v: &V6C, epoch: f64) -> V6C {
    if v.r() == 0.0 {
        return *v;
    }
    fk425(&v.propagate(B1950, epoch)).propagate(epoch, J2000)
}

/// Remove the E-terms of aberration from an FK4 catalogue position.
pub fn remove_eterms(v: &V6C) -> V6C {
    let r = v.r();
    if r == 0.0 {
        return *v;
    }
    let a = Vector3::from(ETERM_POS);
    let u = v.pos / r;
    V6C::new((u - a + u * u.dot(&a)) * r, v.vel)
}

/// Add the E-terms of aberration to a position, giving an FK4 catalogue position.
pub fn add_eterms(v: &V6C) -> V6C {
    let r = v.r();
    if r == 0.0 {
        return *v;
    }
    let a = Vector3::from(ETERM_POS);
    let u = v.pos / r;
    let p = u + a - u * u.dot(&a);
    V6C::new(p.normalize() * r, v.vel)
}
