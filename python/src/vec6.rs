use pyo3::prelude::*;

use tpm::{V6C, V6S};

/// Cartesian state vector: position (AU) and velocity (AU/day).
///
/// Example:
///     v = pytpm.tpm.V6C(x=1.0, y=0.0, z=0.0)
///     s = v.c2s()
#[pyclass(name = "V6C")]
#[derive(Clone)]
pub(crate) struct PyV6C {
    pub(crate) inner: V6C,
}

#[pymethods]
impl PyV6C {
    #[new]
    #[pyo3(signature = (x = 0.0, y = 0.0, z = 0.0, xdot = 0.0, ydot = 0.0, zdot = 0.0))]
    fn new(x: f64, y: f64, z: f64, xdot: f64, ydot: f64, zdot: f64) -> Self {
        Self {
            inner: V6C::from([x, y, z, xdot, ydot, zdot]),
        }
    }

    #[getter]
    fn x(&self) -> f64 {
        self.inner.pos.x
    }
    #[setter]
    fn set_x(&mut self, value: f64) {
        self.inner.pos.x = value;
    }

    #[getter]
    fn y(&self) -> f64 {
        self.inner.pos.y
    }
    #[setter]
    fn set_y(&mut self, value: f64) {
        self.inner.pos.y = value;
    }

    #[getter]
    fn z(&self) -> f64 {
        self.inner.pos.z
    }
    #[setter]
    fn set_z(&mut self, value: f64) {
        self.inner.pos.z = value;
    }

    #[getter]
    fn xdot(&self) -> f64 {
        self.inner.vel.x
    }
    #[setter]
    fn set_xdot(&mut self, value: f64) {
        self.inner.vel.x = value;
    }

    #[getter]
    fn ydot(&self) -> f64 {
        self.inner.vel.y
    }
    #[setter]
    fn set_ydot(&mut self, value: f64) {
        self.inner.vel.y = value;
    }

    #[getter]
    fn zdot(&self) -> f64 {
        self.inner.vel.z
    }
    #[setter]
    fn set_zdot(&mut self, value: f64) {
        self.inner.vel.z = value;
    }

    /// Distance from the origin (AU).
    #[getter]
    fn r(&self) -> f64 {
        self.inner.r()
    }

    /// Convert to a spherical state vector.
    fn c2s(&self) -> PyV6S {
        PyV6S {
            inner: self.inner.c2s(),
        }
    }

    /// `[x, y, z, xdot, ydot, zdot]` as a list.
    fn tolist(&self) -> Vec<f64> {
        self.inner.to_array().to_vec()
    }

    fn __repr__(&self) -> String {
        let [x, y, z, xd, yd, zd] = self.inner.to_array();
        format!("V6C(x={x:.9e}, y={y:.9e}, z={z:.9e}, xdot={xd:.9e}, ydot={yd:.9e}, zdot={zd:.9e})")
    }
}

/// Spherical state vector.
///
/// Attributes:
///     r: Distance (AU).
///     alpha: Longitude / right ascension (radians).
///     delta: Latitude / declination (radians).
///     rdot: Radial velocity (AU/day).
///     alphadot: Longitude rate, dα/dt (radians/day).
///     deltadot: Latitude rate (radians/day).
///
/// Example:
///     s = pytpm.tpm.V6S(r=1e9, alpha=tpm.d2r(150.0), delta=tpm.d2r(20.0))
///     v = s.s2c()
#[pyclass(name = "V6S")]
#[derive(Clone)]
pub(crate) struct PyV6S {
    pub(crate) inner: V6S,
}

#[pymethods]
impl PyV6S {
    #[new]
    #[pyo3(signature = (r = 0.0, alpha = 0.0, delta = 0.0, rdot = 0.0, alphadot = 0.0, deltadot = 0.0))]
    fn new(r: f64, alpha: f64, delta: f64, rdot: f64, alphadot: f64, deltadot: f64) -> Self {
        Self {
            inner: V6S {
                r,
                alpha,
                delta,
                rdot,
                alphadot,
                deltadot,
            },
        }
    }

    #[getter]
    fn r(&self) -> f64 {
        self.inner.r
    }
    #[setter]
    fn set_r(&mut self, value: f64) {
        self.inner.r = value;
    }

    #[getter]
    fn alpha(&self) -> f64 {
        self.inner.alpha
    }
    #[setter]
    fn set_alpha(&mut self, value: f64) {
        self.inner.alpha = value;
    }

    #[getter]
    fn delta(&self) -> f64 {
        self.inner.delta
    }
    #[setter]
    fn set_delta(&mut self, value: f64) {
        self.inner.delta = value;
    }

    #[getter]
    fn rdot(&self) -> f64 {
        self.inner.rdot
    }
    #[setter]
    fn set_rdot(&mut self, value: f64) {
        self.inner.rdot = value;
    }

    #[getter]
    fn alphadot(&self) -> f64 {
        self.inner.alphadot
    }
    #[setter]
    fn set_alphadot(&mut self, value: f64) {
        self.inner.alphadot = value;
    }

    #[getter]
    fn deltadot(&self) -> f64 {
        self.inner.deltadot
    }
    #[setter]
    fn set_deltadot(&mut self, value: f64) {
        self.inner.deltadot = value;
    }

    /// Convert to a Cartesian state vector.
    fn s2c(&self) -> PyV6C {
        PyV6C {
            inner: self.inner.s2c(),
        }
    }

    fn __repr__(&self) -> String {
        let s = &self.inner;
        format!(
            "V6S(r={:.9e}, alpha={:.12}, delta={:.12}, rdot={:.9e}, alphadot={:.9e}, deltadot={:.9e})",
            s.r, s.alpha, s.delta, s.rdot, s.alphadot, s.deltadot
        )
    }

    fn __str__(&self) -> String {
        format!(
            "{} {}  r={:.6e} AU",
            tpm::fmt_alpha(self.inner.alpha),
            tpm::fmt_delta(self.inner.delta),
            self.inner.r
        )
    }
}
