use core::fmt;
use core::str::FromStr;

use crate::error::{helpers, AttitudeError};

/// Tait-Bryan rotation orders, named by the axis of the first,
/// second and third rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationSequence {
    Xyz,
    Yzx,
    Zxy,
    Xzy,
    Yxz,
    /// R = R_z(phi) R_y(theta) R_x(psi)
    Zyx,
}

impl RotationSequence {
    /// All known sequences
    pub const ALL: [RotationSequence; 6] = [
        RotationSequence::Xyz,
        RotationSequence::Yzx,
        RotationSequence::Zxy,
        RotationSequence::Xzy,
        RotationSequence::Yxz,
        RotationSequence::Zyx,
    ];

    /// Lowercase token used on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            RotationSequence::Xyz => "xyz",
            RotationSequence::Yzx => "yzx",
            RotationSequence::Zxy => "zxy",
            RotationSequence::Xzy => "xzy",
            RotationSequence::Yxz => "yxz",
            RotationSequence::Zyx => "zyx",
        }
    }

    /// Whether a quaternion conversion exists for this sequence
    pub fn is_supported(&self) -> bool {
        matches!(self, RotationSequence::Zyx)
    }
}

impl fmt::Display for RotationSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RotationSequence {
    type Err = AttitudeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RotationSequence::ALL
            .iter()
            .copied()
            .find(|seq| seq.as_str() == s)
            .ok_or_else(|| helpers::unsupported_sequence(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_sequences() {
        for seq in RotationSequence::ALL {
            assert_eq!(seq.as_str().parse::<RotationSequence>(), Ok(seq));
            assert_eq!(seq.to_string(), seq.as_str());
        }
    }

    #[test]
    fn test_parse_unknown_sequence() {
        let err = "abc".parse::<RotationSequence>().unwrap_err();
        assert_eq!(
            err,
            AttitudeError::UnsupportedSequence {
                sequence: "abc".into()
            }
        );
        // Tokens are case sensitive
        assert!("ZYX".parse::<RotationSequence>().is_err());
    }

    #[test]
    fn test_only_zyx_supported() {
        let supported: Vec<_> = RotationSequence::ALL
            .iter()
            .filter(|seq| seq.is_supported())
            .collect();
        assert_eq!(supported, vec![&RotationSequence::Zyx]);
    }
}
