//! # Attitude - quaternion to Euler angle conversion
//!
//! Turns a rotation quaternion, given either as its imaginary part or as all
//! four components, into the Euler angle triple of a rotation sequence.
//!
//! ## Conventions
//!
//! - Components are `(w, x, y, z)`; nalgebra stores x, y, z as `i, j, k`
//! - The i-axis has psi, the j-axis has theta, the k-axis has phi
//! - `psi` is always the first angle, then `theta` and lastly `phi`
//! - Rotations are right handed: `R(psi, theta, phi) = R_k(phi) R_j(theta) R_i(psi)`
//!
//! Only the zyx sequence is implemented.

use nalgebra as na;

pub mod error;
pub mod euler;
pub mod quaternion;
pub mod sequence;
pub mod utils;

pub use error::{AttitudeError, AttitudeResult};
pub use euler::{quat_to_euler, EulerAngles};
pub use quaternion::ResolvedQuaternion;
pub use sequence::RotationSequence;

/// Rotation quaternion `(w, i, j, k)`
pub type Quaternion = na::Quaternion<f64>;

/// Configuration for the conversion
#[derive(Debug, Clone, Default)]
pub struct ConversionConfig {
    /// Allowed deviation of the input norm from one before the quaternion
    /// is rescaled. Zero keeps the exact `norm != 1` comparison.
    pub norm_tolerance: f64,

    /// Report out-of-domain inputs as [`AttitudeError::DomainError`]
    /// instead of passing NaN through
    pub strict_domain: bool,
}

/// Quaternion resolution and conversion under a [`ConversionConfig`]
#[derive(Debug, Clone)]
pub struct Converter {
    config: ConversionConfig,
}

impl Converter {
    /// Create a new converter with the given configuration
    pub fn new(config: ConversionConfig) -> AttitudeResult<Self> {
        if !config.norm_tolerance.is_finite() || config.norm_tolerance < 0.0 {
            return Err(error::helpers::config_error(
                format!(
                    "norm tolerance must be a finite non-negative number, got {}",
                    config.norm_tolerance
                ),
                Some("norm_tolerance"),
            ));
        }

        Ok(Self { config })
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    /// Build a quaternion from its imaginary part, reconstructing the real part
    pub fn from_imaginary(&self, x: f64, y: f64, z: f64) -> AttitudeResult<Quaternion> {
        if self.config.strict_domain {
            let radicand = quaternion::real_part_radicand(x, y, z);
            if radicand < 0.0 {
                return Err(error::helpers::domain_error(
                    format!("1 - x² - y² - z² is negative ({})", radicand),
                    "real part reconstruction",
                ));
            }
        }

        let q = quaternion::from_imaginary(x, y, z);
        if self.config.strict_domain {
            error::helpers::check_quaternion_finite(&q, "real part reconstruction")?;
        }
        Ok(q)
    }

    /// Take all four components, normalizing them if their norm is off
    pub fn from_components(
        &self,
        w: f64,
        x: f64,
        y: f64,
        z: f64,
    ) -> AttitudeResult<ResolvedQuaternion> {
        let resolved =
            quaternion::normalize(Quaternion::new(w, x, y, z), self.config.norm_tolerance);

        if self.config.strict_domain {
            if resolved.input_norm == 0.0 {
                return Err(error::helpers::domain_error(
                    "cannot normalize a zero quaternion",
                    "normalization",
                ));
            }
            error::helpers::check_quaternion_finite(&resolved.quaternion, "normalization")?;
        }
        Ok(resolved)
    }

    /// Convert a resolved quaternion to Euler angles in radians
    pub fn convert(&self, seq: RotationSequence, q: &Quaternion) -> AttitudeResult<EulerAngles> {
        let angles = quat_to_euler(seq, q)?;

        if self.config.strict_domain {
            let argument = euler::zyx_theta_argument(q);
            if !(-1.0..=1.0).contains(&argument) {
                return Err(error::helpers::domain_error(
                    format!("asin argument {} is outside [-1, 1]", argument),
                    "euler conversion",
                ));
            }
            error::helpers::check_values_finite(&angles.as_array(), "euler conversion")?;
        }
        Ok(angles)
    }
}
