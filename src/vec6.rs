//! Six-component state vectors: position and velocity of a source.
//!
//! `V6C` is the Cartesian form used by every frame link (AU and AU/day).
//! `V6S` is the spherical form `(r, α, δ, ṙ, α̇, δ̇)` that catalogues are
//! written in. Conversions follow the usual pv-to-spherical formulae, with
//! the longitude rate expressed as dα/dt (no cos δ factor).

use nalgebra::{Matrix3, Vector3};

/// Cartesian state vector: position in AU, velocity in AU/day.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct V6C {
    pub pos: Vector3<f64>,
    pub vel: Vector3<f64>,
}

/// Spherical state vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct V6S {
    /// Distance in AU.
    pub r: f64,
    /// Longitude (right ascension) in radians.
    pub alpha: f64,
    /// Latitude (declination) in radians.
    pub delta: f64,
    /// Radial velocity in AU/day.
    pub rdot: f64,
    /// Longitude rate dα/dt in radians/day.
    pub alphadot: f64,
    /// Latitude rate in radians/day.
    pub deltadot: f64,
}

impl V6C {
    pub fn new(pos: Vector3<f64>, vel: Vector3<f64>) -> Self {
        Self { pos, vel }
    }

    /// Distance from the origin in AU.
    pub fn r(&self) -> f64 {
        self.pos.norm()
    }

    /// Unit vector along the position.
    pub fn unit(&self) -> Vector3<f64> {
        self.pos.normalize()
    }

    /// Convert to spherical form.
    ///
    /// A source on the polar axis gets `alpha = 0` and zero angular rates. A
    /// null position takes its angles from the velocity direction.
    pub fn c2s(&self) -> V6S {
        let r_true = self.pos.norm();
        let (p, rw) = if r_true == 0.0 {
            (self.vel, self.vel.norm())
        } else {
            (self.pos, r_true)
        };
        let (x, y, z) = (p.x, p.y, p.z);
        let (xd, yd, zd) = (self.vel.x, self.vel.y, self.vel.z);
        let rxy2 = x * x + y * y;
        let r2 = rxy2 + z * z;
        let rxy = rxy2.sqrt();
        let xyp = x * xd + y * yd;

        let (alpha, delta, alphadot, deltadot) = if rxy2 != 0.0 {
            (
                y.atan2(x),
                z.atan2(rxy),
                (x * yd - y * xd) / rxy2,
                (zd * rxy2 - z * xyp) / (r2 * rxy),
            )
        } else {
            let delta = if z == 0.0 { 0.0 } else { z.atan2(rxy) };
            (0.0, delta, 0.0, 0.0)
        };

        let rdot = if rw != 0.0 { (xyp + z * zd) / rw } else { 0.0 };

        V6S {
            r: r_true,
            alpha,
            delta,
            rdot,
            alphadot,
            deltadot,
        }
    }

    /// Linear proper-motion propagation from `start` to `end` (Julian dates).
    pub fn propagate(&self, end: f64, start: f64) -> Self {
        Self {
            pos: self.pos + self.vel * (end - start),
            vel: self.vel,
        }
    }

    /// Apply a rotation to position and velocity.
    pub fn rotate(&self, m: &Matrix3<f64>) -> Self {
        Self {
            pos: m * self.pos,
            vel: m * self.vel,
        }
    }

    /// Apply the inverse (transpose) of a rotation.
    pub fn rotate_inverse(&self, m: &Matrix3<f64>) -> Self {
        self.rotate(&m.transpose())
    }

    /// `[x, y, z, ẋ, ẏ, ż]`
    pub fn to_array(&self) -> [f64; 6] {
        [
            self.pos.x, self.pos.y, self.pos.z, self.vel.x, self.vel.y, self.vel.z,
        ]
    }
}

impl From<[f64; 6]> for V6C {
    fn from(a: [f64; 6]) -> Self {
        Self {
            pos: Vector3::new(a[0], a[1], a[2]),
            vel: Vector3::new(a[3], a[4], a[5]),
        }
    }
}

impl V6S {
    /// Convert to Cartesian form.
    pub fn s2c(&self) -> V6C {
        let (sa, ca) = self.alpha.sin_cos();
        let (sd, cd) = self.delta.sin_cos();
        let rcd = self.r * cd;
        let x = rcd * ca;
        let y = rcd * sa;
        let rdd = self.r * self.deltadot;
        let w = rdd * sd - cd * self.rdot;

        V6C {
            pos: Vector3::new(x, y, self.r * sd),
            vel: Vector3::new(
                -y * self.alphadot - w * ca,
                x * self.alphadot - w * sa,
                rdd * cd + sd * self.rdot,
            ),
        }
    }

    /// Unit-distance, motionless source at the given position.
    pub fn direction(alpha: f64, delta: f64) -> Self {
        Self {
            r: 1.0,
            alpha,
            delta,
            ..Default::default()
        }
    }
}

impl From<V6S> for V6C {
    fn from(s: V6S) -> Self {
        s.s2c()
    }
}

impl From<V6C> for V6S {
    fn from(c: V6C) -> Self {
        c.c2s()
    }
}
