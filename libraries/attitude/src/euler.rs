use crate::error::{helpers, AttitudeResult};
use crate::sequence::RotationSequence;
use crate::utils::{deg_to_rad, rad_to_deg};
use crate::Quaternion;

/// Euler angle triple of a rotation sequence.
///
/// `psi` is always the first angle, then `theta` and lastly `phi`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EulerAngles {
    pub psi: f64,
    pub theta: f64,
    pub phi: f64,
}

impl EulerAngles {
    pub fn new(psi: f64, theta: f64, phi: f64) -> Self {
        Self { psi, theta, phi }
    }

    /// Interpret the angles as radians and convert them to degrees
    pub fn to_degrees(&self) -> Self {
        Self::new(
            rad_to_deg(self.psi),
            rad_to_deg(self.theta),
            rad_to_deg(self.phi),
        )
    }

    /// Interpret the angles as degrees and convert them to radians
    pub fn to_radians(&self) -> Self {
        Self::new(
            deg_to_rad(self.psi),
            deg_to_rad(self.theta),
            deg_to_rad(self.phi),
        )
    }

    pub fn as_array(&self) -> [f64; 3] {
        [self.psi, self.theta, self.phi]
    }

    pub fn is_finite(&self) -> bool {
        self.as_array().iter().all(|v| v.is_finite())
    }
}

/// Argument passed to `asin` for the middle angle of the zyx sequence
pub fn zyx_theta_argument(q: &Quaternion) -> f64 {
    let (w, x, y, z) = (q.w, q.i, q.j, q.k);
    2.0 * (w * y - x * z)
}

/// Convert a unit quaternion to Euler angles in radians.
///
/// Only [`RotationSequence::Zyx`] is implemented. The `asin` argument is not
/// clamped, so a quaternion that is far from unit norm may give NaN.
pub fn quat_to_euler(seq: RotationSequence, q: &Quaternion) -> AttitudeResult<EulerAngles> {
    match seq {
        RotationSequence::Zyx => {
            let (w, x, y, z) = (q.w, q.i, q.j, q.k);

            let psi = (2.0 * (x * y + w * z)).atan2(w * w + x * x - y * y - z * z);
            let theta = zyx_theta_argument(q).asin();
            let phi = (2.0 * (y * z + w * x)).atan2(w * w - x * x - y * y + z * z);

            Ok(EulerAngles::new(psi, theta, phi))
        }
        other => Err(helpers::unsupported_sequence(other.as_str())),
    }
}
