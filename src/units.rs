//! Angle unit conversions, normalization and sexagesimal formatting.
//!
//! Everything in this crate works in radians internally. These helpers cover
//! the conversions needed at the edges: degrees and hours from catalogues,
//! arcseconds for proper motions and tolerances.

use std::f64::consts::{PI, TAU};

/// Arcseconds per radian.
pub const DR2AS: f64 = 180.0 * 3600.0 / PI;
/// Radians per arcsecond.
pub const DAS2R: f64 = PI / (180.0 * 3600.0);

/// Degrees to radians.
pub fn d2r(deg: f64) -> f64 {
    deg.to_radians()
}

/// Radians to degrees.
pub fn r2d(rad: f64) -> f64 {
    rad.to_degrees()
}

/// Hours to radians.
pub fn h2r(hours: f64) -> f64 {
    hours * PI / 12.0
}

/// Radians to hours.
pub fn r2h(rad: f64) -> f64 {
    rad * 12.0 / PI
}

/// Degrees to hours.
pub fn d2h(deg: f64) -> f64 {
    deg / 15.0
}

/// Hours to degrees.
pub fn h2d(hours: f64) -> f64 {
    hours * 15.0
}

/// Arcseconds to radians.
pub fn as2r(arcsec: f64) -> f64 {
    arcsec * DAS2R
}

/// Radians to arcseconds.
pub fn r2as(rad: f64) -> f64 {
    rad * DR2AS
}

/// Normalize an angle in radians to `[0, 2π)`.
pub fn r2r(rad: f64) -> f64 {
    let w = rad.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if w >= TAU {
        0.0
    } else {
        w
    }
}

/// Normalize an angle in degrees to `[0, 360)`.
pub fn d2d(deg: f64) -> f64 {
    let w = deg.rem_euclid(360.0);
    if w >= 360.0 {
        0.0
    } else {
        w
    }
}

/// Absolute separation of two longitudes (degrees), in arcseconds.
///
/// The difference is taken the short way round, so 359.9999° and 0.0001° are
/// 0.72″ apart rather than almost a full circle.
pub fn delta_arcsec(a_deg: f64, b_deg: f64) -> f64 {
    let d = d2d(a_deg - b_deg);
    d.min(360.0 - d) * 3600.0
}

// ── Sexagesimal formatting ──

/// Split a non-negative value into (units, minutes, seconds) rounded to
/// `decimals` places, carrying rounded-up seconds into the higher fields.
fn sexagesimal(value: f64, decimals: usize) -> (u64, u64, f64) {
    let scale = 10u64.pow(decimals as u32);
    let ticks = (value * 3600.0 * scale as f64).round() as u64;
    let units = ticks / (3600 * scale);
    let minutes = (ticks / (60 * scale)) % 60;
    let seconds = (ticks % (60 * scale)) as f64 / scale as f64;
    (units, minutes, seconds)
}

/// Format a right ascension (radians) as `HH:MM:SS.SSSS`.
///
/// The angle is normalized first; a value that rounds up to 24h wraps to 00h.
pub fn fmt_alpha(rad: f64) -> String {
    let (h, m, s) = sexagesimal(r2h(r2r(rad)), 4);
    format!("{:02}:{:02}:{:07.4}", h % 24, m, s)
}

/// Format a declination (radians) as `+DD:MM:SS.SSS`.
pub fn fmt_delta(rad: f64) -> String {
    let (d, m, s) = sexagesimal(r2d(rad).abs(), 3);
    // Sign of the rounded value, so -0.0001" prints as +00:00:00.000
    let sign = if rad < 0.0 && (d, m, s) != (0, 0, 0.0) { '-' } else { '+' };
    format!("{}{:02}:{:02}:{:06.3}", sign, d, m, s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_conversions() {
        assert!((d2r(180.0) - PI).abs() < 1e-15);
        assert!((r2d(PI / 2.0) - 90.0).abs() < 1e-12);
        assert!((h2r(12.0) - PI).abs() < 1e-15);
        assert!((r2h(PI) - 12.0).abs() < 1e-12);
        assert!((h2d(d2h(123.4)) - 123.4).abs() < 1e-12);
        assert!((r2as(as2r(1.5)) - 1.5).abs() < 1e-12);
        assert!((as2r(3600.0) - d2r(1.0)).abs() < 1e-15);
    }

    #[test]
    fn test_r2r_range() {
        assert_eq!(r2r(0.0), 0.0);
        assert!((r2r(-PI / 2.0) - 1.5 * PI).abs() < 1e-12);
        assert!((r2r(5.0 * PI) - PI).abs() < 1e-12);
        assert!(r2r(-1e-300) < TAU);
        assert!((d2d(-90.0) - 270.0).abs() < 1e-12);
    }

    #[test]
    fn test_delta_arcsec_wraps() {
        assert!((delta_arcsec(359.9999, 0.0001) - 0.72).abs() < 1e-6);
        assert!((delta_arcsec(10.0, 9.0) - 3600.0).abs() < 1e-9);
        assert!((delta_arcsec(9.0, 10.0) - 3600.0).abs() < 1e-9);
    }

    #[test]
    fn test_fmt() {
        assert_eq!(fmt_alpha(h2r(12.5)), "12:30:00.0000");
        assert_eq!(fmt_alpha(h2r(-1.0)), "23:00:00.0000");
        assert_eq!(fmt_alpha(h2r(24.0 - 1e-10)), "00:00:00.0000");
        assert_eq!(fmt_delta(d2r(-33.5)), "-33:30:00.000");
        assert_eq!(fmt_delta(d2r(45.0 + 1.0 / 3600.0)), "+45:00:01.000");
        assert_eq!(fmt_delta(-as2r(1e-4)), "+00:00:00.000");
        assert_eq!(fmt_delta(-as2r(0.002)), "-00:00:00.002");
    }
}
