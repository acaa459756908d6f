//! Standard epochs and Julian/Besselian year conversions.
//!
//! Times are Julian dates. No time-scale conversions are made: the epochs and
//! equinoxes used by the frame links only need to be consistent with each
//! other, not tied to UTC.

/// Julian date of the J2000.0 epoch.
pub const J2000: f64 = 2451545.0;
/// Julian date of the B1950.0 epoch.
pub const B1950: f64 = 2433282.42345905;
/// Days in a Julian century.
pub const CJ: f64 = 36525.0;
/// Days in a tropical (Besselian) century.
pub const CB: f64 = 36524.21987817305;
/// Offset between Julian date and modified Julian date.
pub const MJD_OFFSET: f64 = 2400000.5;

const JULIAN_YEAR: f64 = CJ / 100.0;
const BESSELIAN_YEAR: f64 = CB / 100.0;

/// Julian epoch (e.g. 2050.0) to Julian date.
pub fn jyear2jd(jyear: f64) -> f64 {
    J2000 + (jyear - 2000.0) * JULIAN_YEAR
}

/// Julian date to Julian epoch.
pub fn jd2jyear(jd: f64) -> f64 {
    2000.0 + (jd - J2000) / JULIAN_YEAR
}

/// Besselian epoch (e.g. 1950.0) to Julian date.
pub fn byear2jd(byear: f64) -> f64 {
    B1950 + (byear - 1950.0) * BESSELIAN_YEAR
}

/// Julian date to Besselian epoch.
pub fn jd2byear(jd: f64) -> f64 {
    1950.0 + (jd - B1950) / BESSELIAN_YEAR
}

/// Modified Julian date to Julian date.
pub fn mjd2jd(mjd: f64) -> f64 {
    mjd + MJD_OFFSET
}

/// Julian date to modified Julian date.
pub fn jd2mjd(jd: f64) -> f64 {
    jd - MJD_OFFSET
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_epochs() {
        assert_eq!(jyear2jd(2000.0), J2000);
        assert!((byear2jd(1950.0) - B1950).abs() < 1e-8);
        assert!((jd2byear(B1950) - 1950.0).abs() < 1e-12);
        // B1900 sits at JD 2415020.31352
        assert!((byear2jd(1900.0) - 2415020.31352).abs() < 1e-4);
        assert!((jd2jyear(J2000 + 50.0 * 365.25) - 2050.0).abs() < 1e-12);
    }

    #[test]
    fn test_inverses() {
        for y in [1850.0, 1950.0, 1991.25, 2000.0, 2050.5] {
            assert!((jd2jyear(jyear2jd(y)) - y).abs() < 1e-10);
            assert!((jd2byear(byear2jd(y)) - y).abs() < 1e-10);
        }
        assert!((jd2mjd(mjd2jd(51544.5)) - 51544.5).abs() < 1e-12);
        assert_eq!(mjd2jd(51544.5), J2000);
    }
}
