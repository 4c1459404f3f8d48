//! Resolution of user supplied components into a rotation quaternion.
//!
//! Component names follow the command line: `q1, q2, q3` are the imaginary
//! parts (x, y, z) and `q0` is the real part w.

use crate::Quaternion;

/// Quaternion after resolution, with a flag telling whether it was rescaled
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedQuaternion {
    pub quaternion: Quaternion,
    /// Euclidean norm of the components as given
    pub input_norm: f64,
    pub normalized: bool,
}

/// Radicand of the real part reconstruction, `1 - x² - y² - z²`
pub fn real_part_radicand(x: f64, y: f64, z: f64) -> f64 {
    1.0 - x * x - y * y - z * z
}

/// Build a unit quaternion from its imaginary part, reconstructing
/// `w = sqrt(1 - x² - y² - z²)`.
///
/// A negative radicand yields a NaN real part.
pub fn from_imaginary(x: f64, y: f64, z: f64) -> Quaternion {
    let w = real_part_radicand(x, y, z).sqrt();
    Quaternion::new(w, x, y, z)
}

/// Decide whether a quaternion with the given norm must be rescaled.
///
/// A tolerance of zero means the exact comparison `norm != 1.0`.
pub fn needs_normalization(norm: f64, tolerance: f64) -> bool {
    if tolerance > 0.0 {
        !((norm - 1.0).abs() <= tolerance)
    } else {
        norm != 1.0
    }
}

/// Divide every component by the Euclidean norm when
/// [`needs_normalization`] says so.
pub fn normalize(q: Quaternion, tolerance: f64) -> ResolvedQuaternion {
    let norm = q.norm();
    if needs_normalization(norm, tolerance) {
        ResolvedQuaternion {
            quaternion: Quaternion::new(q.w / norm, q.i / norm, q.j / norm, q.k / norm),
            input_norm: norm,
            normalized: true,
        }
    } else {
        ResolvedQuaternion {
            quaternion: q,
            input_norm: norm,
            normalized: false,
        }
    }
}
