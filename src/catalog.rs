//! Catalogue entries and their conversion to and from state vectors.
//!
//! Catalogue units follow the classic FK4/FK5 conventions:
//!
//! | field | unit |
//! |-------|------|
//! | `alpha`, `delta` | radians |
//! | `pma` | arcsec per century, dα/dt (no cos δ factor) |
//! | `pmd` | arcsec per century |
//! | `px` | arcsec |
//! | `rv` | km/s, positive receding |
//!
//! The century length is an argument: `CJ` for FK5/ICRS catalogues, `CB`
//! for FK4 catalogues.

use crate::units::{r2r, DAS2R, DR2AS};
use crate::vec6::{V6C, V6S};

/// Astronomical unit in km.
pub const AU_KM: f64 = 149597870.66;
/// Distance (AU) assigned to sources without a measured parallax.
pub const INFINITE_DISTANCE: f64 = 1e9;

const SECONDS_PER_DAY: f64 = 86400.0;

/// A catalogue position with proper motion, parallax and radial velocity.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CatalogEntry {
    pub alpha: f64,
    pub delta: f64,
    pub pma: f64,
    pub pmd: f64,
    pub px: f64,
    pub rv: f64,
}

impl CatalogEntry {
    /// Position only, no motion and no parallax.
    pub fn at(alpha: f64, delta: f64) -> Self {
        Self {
            alpha,
            delta,
            ..Default::default()
        }
    }
}

/// Catalogue entry to Cartesian state vector.
///
/// `c` is the number of days per century used by the proper motions.
/// A non-positive parallax places the source at [`INFINITE_DISTANCE`].
pub fn cat2v6(entry: &CatalogEntry, c: f64) -> V6C {
    let r = if entry.px > 0.0 {
        1.0 / (entry.px * DAS2R)
    } else {
        INFINITE_DISTANCE
    };
    V6S {
        r,
        alpha: entry.alpha,
        delta: entry.delta,
        rdot: entry.rv * SECONDS_PER_DAY / AU_KM,
        alphadot: entry.pma * DAS2R / c,
        deltadot: entry.pmd * DAS2R / c,
    }
    .s2c()
}

/// Cartesian state vector to catalogue entry; `alpha` is normalized to `[0, 2π)`.
pub fn v62cat(v6: &V6C, c: f64) -> CatalogEntry {
    let s = v6.c2s();
    CatalogEntry {
        alpha: r2r(s.alpha),
        delta: s.delta,
        pma: s.alphadot * c * DR2AS,
        pmd: s.deltadot * c * DR2AS,
        px: if s.r > 0.0 { DR2AS / s.r } else { 0.0 },
        rv: s.rdot * AU_KM / SECONDS_PER_DAY,
    }
}
