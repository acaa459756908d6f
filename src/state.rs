//! Coordinate states and single-vector conversion between them.
//!
//! A state names the frame a [`V6C`] is expressed in. Conversions route
//! through FK5 (J2000 equinox) as the hub. Galactic coordinates hang off FK4,
//! so FK4 ↔ galactic is a single link and every other galactic conversion
//! passes through FK4 first.
//!
//! ```text
//!   ICRS ── FK5 ── FK4 ── Galactic
//!            │
//!         Ecliptic
//! ```

use std::fmt;

use crate::frames;
use crate::time::J2000;
use crate::vec6::V6C;

/// Coordinate state of a state vector.
///
/// The numeric codes are the TPM state numbers, which scripts and fixture
/// tables use to name conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum State {
    /// International Celestial Reference System.
    Icrs = 1,
    /// Mean ecliptic and equinox of the configured equinox.
    Ecliptic = 3,
    /// IAU 1958 galactic coordinates.
    Galactic = 4,
    /// FK4, B1950 equinox.
    Fk4 = 5,
    /// FK5, mean equator and equinox J2000.
    Fk5 = 6,
}

impl State {
    pub const ALL: [State; 5] = [
        State::Icrs,
        State::Ecliptic,
        State::Galactic,
        State::Fk4,
        State::Fk5,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            State::Icrs => "ICRS",
            State::Ecliptic => "Ecliptic",
            State::Galactic => "Galactic",
            State::Fk4 => "FK4",
            State::Fk5 => "FK5",
        }
    }
}

impl TryFrom<u8> for State {
    type Error = anyhow::Error;

    fn try_from(code: u8) -> anyhow::Result<Self> {
        State::ALL
            .into_iter()
            .find(|s| s.code() == code)
            .ok_or_else(|| anyhow::anyhow!("Unknown coordinate state code {code}"))
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (S{:02})", self.name(), self.code())
    }
}

/// Conversion parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvertConfig {
    /// Epoch of the state vectors (Julian date). Input and output share it.
    pub epoch: f64,
    /// Equinox (Julian date) of the ecliptic state. FK5 is always J2000.
    pub equinox: f64,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            epoch: J2000,
            equinox: J2000,
        }
    }
}

/// Convert one state vector from state `s1` to state `s2`.
pub fn convert(v: &V6C, s1: State, s2: State, config: &ConvertConfig) -> V6C {
    match (s1, s2) {
        _ if s1 == s2 => *v,
        (State::Fk4, State::Galactic) => frames::fk4_to_galactic(v),
        (State::Galactic, State::Fk4) => frames::galactic_to_fk4(v),
        _ => from_fk5(&to_fk5(v, s1, config), s2, config),
    }
}

/// Bring a state vector to FK5, J2000 equinox.
fn to_fk5(v: &V6C, s: State, config: &ConvertConfig) -> V6C {
    match s {
        State::Icrs => frames::icrs_to_fk5(v, config.epoch),
        State::Ecliptic => frames::ecliptic_to_fk5(v, config.equinox),
        State::Galactic => frames::fk4_to_fk5(&frames::galactic_to_fk4(v), config.epoch),
        State::Fk4 => frames::fk4_to_fk5(v, config.epoch),
        State::Fk5 => *v,
    }
}

/// Take an FK5 (J2000 equinox) state vector to state `s`.
fn from_fk5(v: &V6C, s: State, config: &ConvertConfig) -> V6C {
    match s {
        State::Icrs => frames::fk5_to_icrs(v, config.epoch),
        State::Ecliptic => frames::fk5_to_ecliptic(v, config.equinox),
        State::Galactic => frames::fk4_to_galactic(&frames::fk5_to_fk4(v, config.epoch)),
        State::Fk4 => frames::fk5_to_fk4(v, config.epoch),
        State::Fk5 => *v,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::jyear2jd;
    use crate::units::{d2r, r2as};
    use crate::vec6::V6S;

    #[test]
    fn test_codes() {
        for s in State::ALL {
            assert_eq!(State::try_from(s.code()).unwrap(), s);
        }
        assert_eq!(State::Fk5.code(), 6);
        assert_eq!(State::Ecliptic.code(), 3);
        assert!(State::try_from(2).is_err());
        assert!(State::try_from(0).is_err());
        let err = State::try_from(21).unwrap_err().to_string();
        assert!(err.contains("21"));
    }

    #[test]
    fn test_display() {
        assert_eq!(State::Fk4.to_string(), "FK4 (S05)");
    }

    #[test]
    fn test_identity() {
        let v = V6C::from([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let config = ConvertConfig::default();
        for s in State::ALL {
            assert_eq!(convert(&v, s, s, &config), v);
        }
    }

    #[test]
    fn test_equinox_ignored_outside_ecliptic() {
        let config = ConvertConfig {
            equinox: jyear2jd(2050.0),
            ..Default::default()
        };
        let v = V6S::direction(d2r(150.0), d2r(20.0)).s2c();
        for s in [State::Icrs, State::Fk4, State::Galactic] {
            let a = convert(&v, State::Fk5, s, &config);
            let b = convert(&v, State::Fk5, s, &ConvertConfig::default());
            assert!(r2as((a.unit() - b.unit()).norm()) < 1e-12, "{s}");
        }
    }

    #[test]
    fn test_ecliptic_at_other_equinox() {
        let equinox = jyear2jd(2050.0);
        let config = ConvertConfig {
            equinox,
            ..Default::default()
        };
        let v = V6S::direction(d2r(217.5), d2r(34.2)).s2c();
        let got = convert(&v, State::Fk5, State::Ecliptic, &config);
        let want = v.rotate(&frames::ecliptic::ecliptic_matrix(equinox));
        assert!(r2as((got.unit() - want.unit()).norm()) < 1e-9);

        // 50 years of general precession in longitude, ~50.3"/yr; ecliptic
        // motion shifts it by tens of arcsec away from the ecliptic
        let j2000 = convert(&v, State::Fk5, State::Ecliptic, &ConvertConfig::default());
        let dlon = r2as(got.c2s().alpha - j2000.c2s().alpha);
        assert!((dlon - 2515.0).abs() < 60.0, "dlon = {dlon}");

        let back = convert(&got, State::Ecliptic, State::Fk5, &config);
        assert!(r2as((back.unit() - v.unit()).norm()) < 1e-9);
    }

    #[test]
    fn test_galactic_via_fk4_matches_direct() {
        let config = ConvertConfig::default();
        let v = V6S {
            r: 1e9,
            alpha: 2.0,
            delta: 0.5,
            ..Default::default()
        }
        .s2c();
        let direct = convert(&v, State::Fk5, State::Galactic, &config);
        let fk4 = convert(&v, State::Fk5, State::Fk4, &config);
        let two_step = convert(&fk4, State::Fk4, State::Galactic, &config);
        assert!(r2as((direct.unit() - two_step.unit()).norm()) < 1e-9);
    }
}
