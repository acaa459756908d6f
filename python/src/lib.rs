//! Python bindings for tpm via PyO3.
//!
//! Exposes the conversions to Python as the `pytpm` package with two
//! submodules, `pytpm.tpm` (state vectors, catalogue entries, unit helpers,
//! constants) and `pytpm.convert` (batch conversion and proper motion).

mod helpers;
mod vec6;

use pyo3::prelude::*;
use pyo3::types::PyDict;

use tpm::time::{self, B1950, CB, CJ, J2000};
use tpm::{CatalogEntry, ConvertConfig, State};

use crate::helpers::{parse_state, parse_v6, v6_to_python};
use crate::vec6::{PyV6C, PyV6S};

// ═══════════════════════════════════════════════════════════════════════════
// pytpm.tpm — units and epochs
// ═══════════════════════════════════════════════════════════════════════════

/// Degrees to radians.
#[pyfunction]
fn d2r(deg: f64) -> f64 {
    tpm::d2r(deg)
}

/// Radians to degrees.
#[pyfunction]
fn r2d(rad: f64) -> f64 {
    tpm::r2d(rad)
}

/// Hours to radians.
#[pyfunction]
fn h2r(hours: f64) -> f64 {
    tpm::h2r(hours)
}

/// Radians to hours.
#[pyfunction]
fn r2h(rad: f64) -> f64 {
    tpm::r2h(rad)
}

/// Arcseconds to radians.
#[pyfunction]
fn as2r(arcsec: f64) -> f64 {
    tpm::as2r(arcsec)
}

/// Radians to arcseconds.
#[pyfunction]
fn r2as(rad: f64) -> f64 {
    tpm::r2as(rad)
}

/// Normalize an angle in radians to [0, 2π).
#[pyfunction]
fn r2r(rad: f64) -> f64 {
    tpm::r2r(rad)
}

/// Right ascension (radians) as "HH:MM:SS.SSSS".
#[pyfunction]
fn fmt_alpha(rad: f64) -> String {
    tpm::fmt_alpha(rad)
}

/// Declination (radians) as "+DD:MM:SS.SSS".
#[pyfunction]
fn fmt_delta(rad: f64) -> String {
    tpm::fmt_delta(rad)
}

/// Besselian epoch to Julian date.
#[pyfunction]
fn byear2jd(byear: f64) -> f64 {
    time::byear2jd(byear)
}

/// Julian epoch to Julian date.
#[pyfunction]
fn jyear2jd(jyear: f64) -> f64 {
    time::jyear2jd(jyear)
}

/// Julian date to Besselian epoch.
#[pyfunction]
fn jd2byear(jd: f64) -> f64 {
    time::jd2byear(jd)
}

/// Julian date to Julian epoch.
#[pyfunction]
fn jd2jyear(jd: f64) -> f64 {
    time::jd2jyear(jd)
}

// ═══════════════════════════════════════════════════════════════════════════
// pytpm.tpm — catalogue entries
// ═══════════════════════════════════════════════════════════════════════════

/// Catalogue entry to Cartesian state vector.
///
/// Args:
///     alpha: Right ascension (radians).
///     delta: Declination (radians).
///     pma: Proper motion in RA, dα/dt, arcsec per century.
///     pmd: Proper motion in Dec, arcsec per century.
///     px: Parallax (arcsec). Zero or negative means "infinite" distance.
///     rv: Radial velocity (km/s).
///     c: Days per century: CJ for FK5/ICRS, CB for FK4. Default CJ.
#[pyfunction]
#[pyo3(signature = (alpha, delta, pma = 0.0, pmd = 0.0, px = 0.0, rv = 0.0, c = CJ))]
fn cat2v6(alpha: f64, delta: f64, pma: f64, pmd: f64, px: f64, rv: f64, c: f64) -> PyV6C {
    let entry = CatalogEntry {
        alpha,
        delta,
        pma,
        pmd,
        px,
        rv,
    };
    PyV6C {
        inner: tpm::cat2v6(&entry, c),
    }
}

/// Cartesian state vector to catalogue entry.
///
/// Returns:
///     dict with keys 'alpha', 'delta', 'pma', 'pmd', 'px', 'rv', in the
///     units taken by cat2v6.
#[pyfunction]
#[pyo3(signature = (v6, c = CJ))]
fn v62cat<'py>(py: Python<'py>, v6: PyRef<'_, PyV6C>, c: f64) -> PyResult<Bound<'py, PyDict>> {
    let cat = tpm::v62cat(&v6.inner, c);
    let dict = PyDict::new(py);
    dict.set_item("alpha", cat.alpha)?;
    dict.set_item("delta", cat.delta)?;
    dict.set_item("pma", cat.pma)?;
    dict.set_item("pmd", cat.pmd)?;
    dict.set_item("px", cat.px)?;
    dict.set_item("rv", cat.rv)?;
    Ok(dict)
}

// ═══════════════════════════════════════════════════════════════════════════
// pytpm.convert
// ═══════════════════════════════════════════════════════════════════════════

/// Convert state vectors between coordinate states.
///
/// Args:
///     v6: A V6C, a list of V6C, or an Nx6 numpy array.
///     s1: Input state (1 ICRS, 3 ecliptic, 4 galactic, 5 FK4, 6 FK5). Default 6.
///     s2: Output state. Default 6.
///     epoch: Epoch of the state vectors (Julian date). Default J2000.
///     equinox: Equinox of the ecliptic state (Julian date). Default J2000.
///         FK5 (state 6) is always mean equator and equinox J2000.
///
/// Returns:
///     Converted state vectors in the same form as `v6`.
#[pyfunction]
#[pyo3(signature = (v6, s1 = 6, s2 = 6, epoch = J2000, equinox = J2000))]
fn convertv6<'py>(
    py: Python<'py>,
    v6: &Bound<'py, PyAny>,
    s1: i64,
    s2: i64,
    epoch: f64,
    equinox: f64,
) -> PyResult<Bound<'py, PyAny>> {
    let s1 = parse_state(s1)?;
    let s2 = parse_state(s2)?;
    let (input, batch) = parse_v6(v6)?;
    let config = ConvertConfig { epoch, equinox };
    let out = tpm::convertv6(&input, s1, s2, &config);
    v6_to_python(py, out, batch)
}

/// Apply proper motion to state vectors.
///
/// Args:
///     v6: A V6C, a list of V6C, or an Nx6 numpy array.
///     end: Final epoch (Julian date).
///     start: Epoch of the input state vectors (Julian date).
#[pyfunction]
fn proper_motion<'py>(
    py: Python<'py>,
    v6: &Bound<'py, PyAny>,
    end: f64,
    start: f64,
) -> PyResult<Bound<'py, PyAny>> {
    let (input, batch) = parse_v6(v6)?;
    let out = tpm::proper_motion(&input, end, start);
    v6_to_python(py, out, batch)
}

// ═══════════════════════════════════════════════════════════════════════════
// Module
// ═══════════════════════════════════════════════════════════════════════════

fn register_tpm(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyV6C>()?;
    m.add_class::<PyV6S>()?;
    m.add_function(wrap_pyfunction!(d2r, m)?)?;
    m.add_function(wrap_pyfunction!(r2d, m)?)?;
    m.add_function(wrap_pyfunction!(h2r, m)?)?;
    m.add_function(wrap_pyfunction!(r2h, m)?)?;
    m.add_function(wrap_pyfunction!(as2r, m)?)?;
    m.add_function(wrap_pyfunction!(r2as, m)?)?;
    m.add_function(wrap_pyfunction!(r2r, m)?)?;
    m.add_function(wrap_pyfunction!(fmt_alpha, m)?)?;
    m.add_function(wrap_pyfunction!(fmt_delta, m)?)?;
    m.add_function(wrap_pyfunction!(byear2jd, m)?)?;
    m.add_function(wrap_pyfunction!(jyear2jd, m)?)?;
    m.add_function(wrap_pyfunction!(jd2byear, m)?)?;
    m.add_function(wrap_pyfunction!(jd2jyear, m)?)?;
    m.add_function(wrap_pyfunction!(cat2v6, m)?)?;
    m.add_function(wrap_pyfunction!(v62cat, m)?)?;

    m.add("J2000", J2000)?;
    m.add("B1950", B1950)?;
    m.add("CJ", CJ)?;
    m.add("CB", CB)?;
    m.add("TPM_ICRS", State::Icrs.code())?;
    m.add("TPM_S03", State::Ecliptic.code())?;
    m.add("TPM_S04", State::Galactic.code())?;
    m.add("TPM_S05", State::Fk4.code())?;
    m.add("TPM_S06", State::Fk5.code())?;
    Ok(())
}

fn register_convert(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(convertv6, m)?)?;
    m.add_function(wrap_pyfunction!(proper_motion, m)?)?;
    Ok(())
}

/// pytpm: astrometric state-vector conversions
///
/// `from pytpm import tpm, convert`
#[pymodule]
fn pytpm(m: &Bound<'_, PyModule>) -> PyResult<()> {
    let py = m.py();

    let tpm_mod = PyModule::new(py, "tpm")?;
    register_tpm(&tpm_mod)?;
    m.add_submodule(&tpm_mod)?;

    let convert_mod = PyModule::new(py, "convert")?;
    register_convert(&convert_mod)?;
    m.add_submodule(&convert_mod)?;

    // Make `import pytpm.tpm` work, not just attribute access
    let modules = py.import("sys")?.getattr("modules")?;
    modules.set_item("pytpm.tpm", &tpm_mod)?;
    modules.set_item("pytpm.convert", &convert_mod)?;
    Ok(())
}
