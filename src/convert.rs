//! Batch conversion of state vectors.
//!
//! These are the two operations exposed to scripts: convert a list of state
//! vectors between coordinate states, and propagate a list of state vectors
//! for proper motion. Both keep the order and length of the input.

use tracing::debug;

use crate::state::{self, ConvertConfig, State};
use crate::vec6::V6C;

/// Convert state vectors from state `s1` to state `s2`.
pub fn convertv6(v6: &[V6C], s1: State, s2: State, config: &ConvertConfig) -> Vec<V6C> {
    debug!(
        "Converting {} state vectors {} -> {} (epoch {}, equinox {})",
        v6.len(),
        s1,
        s2,
        config.epoch,
        config.equinox
    );
    v6.iter()
        .map(|v| state::convert(v, s1, s2, config))
        .collect()
}

/// Propagate state vectors linearly from Julian date `start` to `end`.
pub fn proper_motion(v6: &[V6C], end: f64, start: f64) -> Vec<V6C> {
    debug!(
        "Applying proper motion to {} state vectors: {} -> {}",
        v6.len(),
        start,
        end
    );
    v6.iter().map(|v| v.propagate(end, start)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{cat2v6, v62cat, CatalogEntry};
    use crate::time::{B1950, CB, CJ, J2000};
    use crate::units::{d2r, r2as};

    #[test]
    fn test_empty() {
        let config = ConvertConfig::default();
        assert!(convertv6(&[], State::Fk5, State::Fk4, &config).is_empty());
        assert!(proper_motion(&[], B1950, J2000).is_empty());
    }

    #[test]
    fn test_order_preserved() {
        let config = ConvertConfig::default();
        let input: Vec<V6C> = (0..5)
            .map(|i| cat2v6(&CatalogEntry::at(d2r(30.0 * i as f64), d2r(10.0)), CJ))
            .collect();
        let out = convertv6(&input, State::Fk5, State::Ecliptic, &config);
        assert_eq!(out.len(), input.len());
        for (v_in, v_out) in input.iter().zip(&out) {
            let single = state::convert(v_in, State::Fk5, State::Ecliptic, &config);
            assert_eq!(&single, v_out);
        }
    }

    #[test]
    fn test_proper_motion_moves_position() {
        // 1"/yr in declination for 50 Julian years
        let e = CatalogEntry {
            pmd: 100.0,
            ..CatalogEntry::at(d2r(45.0), 0.0)
        };
        let v = proper_motion(&[cat2v6(&e, CJ)], J2000 + 50.0 * 365.25, J2000);
        let out = v62cat(&v[0], CJ);
        assert!((r2as(out.delta) - 50.0).abs() < 1e-4);
        assert!((out.pmd - 100.0).abs() < 1e-4);
    }

    #[test]
    fn test_fk5_to_fk4_motionless_source() {
        // A motionless FK5 source has a small apparent FK4 proper motion
        let config = ConvertConfig::default();
        let v = cat2v6(&CatalogEntry::at(d2r(150.0), d2r(20.0)), CJ);
        let fk4 = convertv6(&[v], State::Fk5, State::Fk4, &config);
        let back = proper_motion(&fk4, B1950, J2000);
        let cat = v62cat(&back[0], CB);
        assert!(cat.pma.abs() > 0.0);
        assert!(cat.pma.abs() < 1.0, "pma = {}", cat.pma);
        assert!(cat.pmd.abs() < 1.0, "pmd = {}", cat.pmd);
    }
}
