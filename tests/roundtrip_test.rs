//! Round-trip properties over random sky positions and catalogue entries.

use std::f64::consts::TAU;

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use rand_distr::{Distribution, Normal};
use tpm::time::{B1950, CB, CJ, J2000};
use tpm::{
    cat2v6, convertv6, proper_motion, r2as, v62cat, CatalogEntry, ConvertConfig, State, V6C,
};

const N_SOURCES: usize = 200;

/// Random catalogue entries: positions uniform on the sphere, proper motions
/// of a few arcsec per century, parallaxes up to 0.2".
fn random_entries(rng: &mut StdRng, n: usize) -> Vec<CatalogEntry> {
    let pm_dist = Normal::new(0.0, 3.0).unwrap();
    let rv_dist = Normal::new(0.0, 30.0).unwrap();
    (0..n)
        .map(|_| {
            let alpha = rng.random::<f64>() * TAU;
            let delta = (rng.random::<f64>() * 2.0 - 1.0).asin(); // uniform in sin(dec)
            CatalogEntry {
                alpha,
                delta,
                pma: pm_dist.sample(rng) / delta.cos().max(0.1),
                pmd: pm_dist.sample(rng),
                px: rng.random::<f64>() * 0.2,
                rv: rv_dist.sample(rng),
            }
        })
        .collect()
}

/// Largest angular separation between matching vectors, in arcsec.
fn max_separation_arcsec(a: &[V6C], b: &[V6C]) -> f64 {
    assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b)
        .map(|(x, y)| r2as((x.unit() - y.unit()).norm()))
        .fold(0.0, f64::max)
}

#[test]
fn test_roundtrip_through_every_state() {
    let _ = tracing_subscriber::fmt().with_env_filter("info").try_init();
    let mut rng = StdRng::seed_from_u64(42);
    let v6: Vec<V6C> = random_entries(&mut rng, N_SOURCES)
        .iter()
        .map(|e| cat2v6(e, CJ))
        .collect();

    let config = ConvertConfig {
        epoch: J2000 + 5000.0,
        equinox: J2000 - 20000.0,
    };

    // FK4 ↔ FK5 matrices are mutually inverse only to ~0.02"
    let cases = [
        (State::Icrs, 1e-9),
        (State::Ecliptic, 1e-9),
        (State::Fk4, 0.025),
        (State::Galactic, 0.025),
    ];
    for (state, tol) in cases {
        let there = convertv6(&v6, State::Fk5, state, &config);
        let back = convertv6(&there, state, State::Fk5, &config);
        let sep = max_separation_arcsec(&v6, &back);
        println!("FK5 -> {state} -> FK5: max separation {sep:.3e}\"");
        assert!(sep < tol, "{state}: {sep}\" >= {tol}\"");
    }
}

#[test]
fn test_icrs_ecliptic_roundtrip_keeps_motion() {
    let mut rng = StdRng::seed_from_u64(7);
    let entries = random_entries(&mut rng, N_SOURCES);
    let v6: Vec<V6C> = entries.iter().map(|e| cat2v6(e, CJ)).collect();

    let config = ConvertConfig::default();
    let ecl = convertv6(&v6, State::Icrs, State::Ecliptic, &config);
    let back = convertv6(&ecl, State::Ecliptic, State::Icrs, &config);

    for (e, v) in entries.iter().zip(&back) {
        let cat = v62cat(v, CJ);
        assert!((cat.pmd - e.pmd).abs() < 1e-8);
        assert!((cat.px - e.px).abs() < 1e-10);
        assert!((cat.rv - e.rv).abs() < 1e-8);
    }
}

#[test]
fn test_catalog_roundtrip() {
    let mut rng = StdRng::seed_from_u64(1234);
    for e in random_entries(&mut rng, N_SOURCES) {
        for c in [CJ, CB] {
            let back = v62cat(&cat2v6(&e, c), c);
            assert!(r2as((back.alpha - e.alpha).abs()) < 1e-7);
            assert!(r2as((back.delta - e.delta).abs()) < 1e-7);
            assert!((back.pma - e.pma).abs() < 1e-7);
            assert!((back.pmd - e.pmd).abs() < 1e-7);
            // Zero parallax comes back as the "infinite" distance
            let px = if e.px > 0.0 {
                e.px
            } else {
                tpm::units::DR2AS / tpm::INFINITE_DISTANCE
            };
            assert!((back.px - px).abs() < 1e-12);
        }
    }
}

#[test]
fn test_proper_motion_roundtrip() {
    let mut rng = StdRng::seed_from_u64(99);
    let v6: Vec<V6C> = random_entries(&mut rng, N_SOURCES)
        .iter()
        .map(|e| cat2v6(e, CJ))
        .collect();

    let there = proper_motion(&v6, B1950, J2000);
    let back = proper_motion(&there, J2000, B1950);
    for (a, b) in v6.iter().zip(&back) {
        assert!((a.pos - b.pos).norm() / a.r() < 1e-12);
        assert_eq!(a.vel, b.vel);
    }
}
