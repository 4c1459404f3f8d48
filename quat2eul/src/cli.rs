use clap::error::ErrorKind;
use std::ffi::OsString;

use clap::{CommandFactory, Parser};
use thiserror::Error;

const CONVENTION: &str = "\
for example $ quat2eul zyx 0 0 0.7071
convention: i-axis has psi, j-axis has theta, k-axis has phi
 psi is always the first angle, then theta and lastly phi
 the rotation is a right-handed helix
 R(psi,theta,phi) = R_k(phi) R_j(theta) R_i(psi)";

/// Sequence plus the three imaginary components
const MIN_POSITIONALS: usize = 4;

/// Options that consume the following argument as their value
const VALUE_OPTIONS: [&str; 1] = ["--tolerance"];

/// Count the positional arguments after the program name.
///
/// Anything starting with `-` that is not a number is an option; a value
/// attached to an option is not counted.
fn count_positionals(args: &[OsString]) -> usize {
    let mut count = 0;
    let mut skip_value = false;
    let mut only_positionals = false;
    for arg in args.iter().skip(1) {
        let arg = arg.to_string_lossy();
        if skip_value {
            skip_value = false;
        } else if only_positionals {
            count += 1;
        } else if arg == "--" {
            only_positionals = true;
        } else if arg.starts_with('-') && arg.parse::<f64>().is_err() {
            skip_value = VALUE_OPTIONS.contains(&arg.as_ref());
        } else {
            count += 1;
        }
    }
    count
}

/// Converts a quaternion (imaginary or full) to an Euler angle sequence
#[derive(Parser, Debug)]
#[command(name = "quat2eul")]
#[command(version)]
#[command(allow_negative_numbers = true)]
#[command(after_help = CONVENTION)]
pub struct Cli {
    /// Rotation sequence (only zyx is supported)
    pub sequence: String,

    /// First imaginary component (x)
    pub q1: f64,

    /// Second imaginary component (y)
    pub q2: f64,

    /// Third imaginary component (z)
    pub q3: f64,

    /// Real component (w); reconstructed from q1..q3 when omitted
    pub q0: Option<f64>,

    /// Normalize only when the norm differs from one by more than this
    #[arg(long, default_value_t = 0.0)]
    pub tolerance: f64,

    /// Fail on out-of-domain input instead of printing NaN
    #[arg(long)]
    pub strict: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Errors raised while reading the command line
#[derive(Error, Debug)]
pub enum CliError {
    #[error("insufficient arguments: expected <SEQUENCE> <Q1> <Q2> <Q3> [Q0]")]
    InsufficientArguments,

    #[error("invalid arguments: {0}")]
    InvalidArguments(String),
}

/// Quaternion components as given on the command line
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Components {
    /// Only q1..q3, the real part has to be reconstructed
    Imaginary { x: f64, y: f64, z: f64 },
    /// All four components
    Full { w: f64, x: f64, y: f64, z: f64 },
}

impl Cli {
    /// Parse the arguments, printing the usage text when positionals are missing.
    ///
    /// `--help` and `--version` print and exit with status 0.
    pub fn parse_args<I, T>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        match Cli::try_parse_from(args.iter().cloned()) {
            Ok(cli) => Ok(cli),
            Err(err) => match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
                _ if count_positionals(&args) < MIN_POSITIONALS => {
                    println!("{}", Cli::command().render_help());
                    Err(CliError::InsufficientArguments)
                }
                _ => Err(CliError::InvalidArguments(err.to_string().trim().to_owned())),
            },
        }
    }

    pub fn components(&self) -> Components {
        match self.q0 {
            Some(w) => Components::Full {
                w,
                x: self.q1,
                y: self.q2,
                z: self.q3,
            },
            None => Components::Imaginary {
                x: self.q1,
                y: self.q2,
                z: self.q3,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_imaginary_components() {
        let cli = Cli::parse_args(["quat2eul", "zyx", "0", "0", "0.7071068"]).unwrap();
        assert_eq!(cli.sequence, "zyx");
        assert_eq!(
            cli.components(),
            Components::Imaginary {
                x: 0.0,
                y: 0.0,
                z: 0.7071068
            }
        );
        assert_eq!(cli.tolerance, 0.0);
        assert!(!cli.strict);
    }

    #[test]
    fn test_full_components_order() {
        // q0 comes last on the command line
        let cli = Cli::parse_args(["quat2eul", "zyx", "1", "0", "0", "1"]).unwrap();
        assert_eq!(
            cli.components(),
            Components::Full {
                w: 1.0,
                x: 1.0,
                y: 0.0,
                z: 0.0
            }
        );
    }

    #[test]
    fn test_negative_components() {
        let cli = Cli::parse_args(["quat2eul", "zyx", "-0.5", "0", "-0.5"]).unwrap();
        assert_eq!(cli.q1, -0.5);
        assert_eq!(cli.q3, -0.5);
    }

    #[test]
    fn test_options() {
        let cli = Cli::parse_args([
            "quat2eul",
            "--strict",
            "--tolerance",
            "1e-6",
            "zyx",
            "0",
            "0",
            "0",
            "1",
        ])
        .unwrap();
        assert!(cli.strict);
        assert_eq!(cli.tolerance, 1e-6);
    }

    #[test]
    fn test_insufficient_arguments() {
        let err = Cli::parse_args(["quat2eul", "zyx", "0", "0"]).unwrap_err();
        assert!(matches!(err, CliError::InsufficientArguments));
    }

    #[test]
    fn test_insufficient_arguments_with_invalid_values() {
        let err = Cli::parse_args(["quat2eul", "zyx", "abc", "0"]).unwrap_err();
        assert!(matches!(err, CliError::InsufficientArguments));

        let err = Cli::parse_args(["quat2eul", "-x", "0"]).unwrap_err();
        assert!(matches!(err, CliError::InsufficientArguments));
    }

    #[test]
    fn test_count_positionals() {
        let args = |v: &[&str]| v.iter().map(|s| OsString::from(*s)).collect::<Vec<_>>();
        assert_eq!(count_positionals(&args(&["quat2eul"])), 0);
        assert_eq!(count_positionals(&args(&["quat2eul", "zyx", "-0.5", "0", "1"])), 4);
        assert_eq!(
            count_positionals(&args(&["quat2eul", "--tolerance", "1e-6", "--strict", "zyx", "0"])),
            2
        );
        assert_eq!(count_positionals(&args(&["quat2eul", "-x", "0"])), 1);
        assert_eq!(count_positionals(&args(&["quat2eul", "--", "-x", "0", "0", "0"])), 4);
    }

    #[test]
    fn test_invalid_number() {
        let err = Cli::parse_args(["quat2eul", "zyx", "0", "abc", "0"]).unwrap_err();
        assert!(matches!(err, CliError::InvalidArguments(_)));
    }

    #[test]
    fn test_too_many_arguments() {
        let err = Cli::parse_args(["quat2eul", "zyx", "0", "0", "0", "1", "2"]).unwrap_err();
        assert!(matches!(err, CliError::InvalidArguments(_)));
    }
}
