//! FK5 ↔ mean ecliptic and equinox of date.
//!
//! The equatorial state (J2000 equinox) is precessed to the equinox of date
//! with IAU 1976 precession, then rotated about the x axis by the IAU 1980
//! mean obliquity of that date.

use nalgebra::Matrix3;

use super::{precession_matrix, rotx};
use crate::time::{jd2jyear, CJ, J2000};
use crate::units::DAS2R;
use crate::vec6::V6C;

/// IAU 1980 mean obliquity of the ecliptic (radians) at Julian date `jd`.
pub fn obliquity(jd: f64) -> f64 {
    let t = (jd - J2000) / CJ;
    DAS2R * (84381.448 + (-46.8150 + (-0.00059 + 0.001813 * t) * t) * t)
}

/// Rotation from FK5 (J2000 equinox) to ecliptic coordinates of `equinox`.
pub fn ecliptic_matrix(equinox: f64) -> Matrix3<f64> {
    rotx(obliquity(equinox)) * precession_matrix(2000.0, jd2jyear(equinox))
}

/// FK5 (J2000 equinox) to mean ecliptic of `equinox` (Julian date).
pub fn fk5_to_ecliptic(v: &V6C, equinox: f64) -> V6C {
    v.rotate(&ecliptic_matrix(equinox))
}

/// Mean ecliptic of `equinox` (Julian date) to FK5 (J2000 equinox).
pub fn ecliptic_to_fk5(v: &V6C, equinox: f64) -> V6C {
    v.rotate_inverse(&ecliptic_matrix(equinox))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{d2r, r2d};
    use crate::vec6::V6S;

    #[test]
    fn test_obliquity_j2000() {
        // 23° 26' 21.448"
        let expected = d2r(23.0 + 26.0 / 60.0 + 21.448 / 3600.0);
        assert!((obliquity(J2000) - expected).abs() < 1e-15);
    }

    #[test]
    fn test_equinox_and_pole() {
        // The vernal equinox stays at (0, 0)
        let eq = fk5_to_ecliptic(&V6S::direction(0.0, 0.0).s2c(), J2000).c2s();
        assert!(eq.alpha.abs() < 1e-15);
        assert!(eq.delta.abs() < 1e-15);

        // The north ecliptic pole is at RA 18h, Dec 90° - ε
        let eps = obliquity(J2000);
        let pole = V6S::direction(d2r(270.0), std::f64::consts::FRAC_PI_2 - eps).s2c();
        let ecl = fk5_to_ecliptic(&pole, J2000).c2s();
        assert!((r2d(ecl.delta) - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_roundtrip_other_equinox() {
        let equinox = J2000 + 50.0 * 365.25;
        let v = V6S::direction(2.1, -0.3).s2c();
        let back = ecliptic_to_fk5(&fk5_to_ecliptic(&v, equinox), equinox);
        assert!((back.pos - v.pos).norm() < 1e-14);
    }
}
