use std::io::{self, Write};

use anyhow::Context;
use attitude::{ConversionConfig, Converter, RotationSequence};
use log::{debug, warn};

mod cli;
mod report;

use cli::{Cli, Components};

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .target(env_logger::Target::Stderr)
        .init();
}

fn run(cli: &Cli, out: &mut impl Write) -> anyhow::Result<()> {
    let converter = Converter::new(ConversionConfig {
        norm_tolerance: cli.tolerance,
        strict_domain: cli.strict,
    })?;
    debug!("Conversion config: {:?}", converter.config());

    let q = match cli.components() {
        Components::Imaginary { x, y, z } => {
            let q = converter.from_imaginary(x, y, z)?;
            debug!("Reconstructed real part q0 = {}", q.w);
            report::write_quaternion(out, &q)?;
            q
        }
        Components::Full { w, x, y, z } => {
            let resolved = converter.from_components(w, x, y, z)?;
            debug!(
                "Input norm {} (normalized: {})",
                resolved.input_norm, resolved.normalized
            );
            if resolved.normalized {
                report::write_unit_quaternion(out, &resolved.quaternion)?;
            }
            report::write_quaternion(out, &resolved.quaternion)?;
            resolved.quaternion
        }
    };

    let seq: RotationSequence = cli.sequence.parse()?;
    debug!("Rotation sequence: {}", seq);

    let radians = converter
        .convert(seq, &q)
        .with_context(|| format!("Failed to convert quaternion for sequence {}", seq))?;
    if !radians.is_finite() {
        warn!("Euler angles contain NaN; the quaternion is outside the conversion domain");
    }

    report::write_angles(out, seq, &radians)?;
    out.flush()?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args(std::env::args_os())?;
    init_logging(cli.verbose);
    debug!("Arguments: {:?}", cli);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&cli, &mut out)
}
