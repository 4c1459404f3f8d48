use std::io::{self, Write};

use attitude::{EulerAngles, Quaternion, RotationSequence};

/// Fixed-point with six decimals, comma separated
fn format_values(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| format!("{:.6}", v))
        .collect::<Vec<_>>()
        .join(", ")
}

fn components(q: &Quaternion) -> [f64; 4] {
    [q.w, q.i, q.j, q.k]
}

/// `unit q = [...]`, printed after a quaternion was rescaled
pub fn write_unit_quaternion(out: &mut impl Write, q: &Quaternion) -> io::Result<()> {
    writeln!(out, "unit q = [{}]", format_values(&components(q)))
}

/// `your q = [...]`, the quaternion the angles are computed from
pub fn write_quaternion(out: &mut impl Write, q: &Quaternion) -> io::Result<()> {
    writeln!(out, "your q = [{}]", format_values(&components(q)))
}

/// Angles in radians followed by the same angles in degrees
pub fn write_angles(
    out: &mut impl Write,
    seq: RotationSequence,
    radians: &EulerAngles,
) -> io::Result<()> {
    writeln!(out, "angles psi, theta, phi for {} are in", seq)?;
    writeln!(out, "rad    {}", format_values(&radians.as_array()))?;
    writeln!(out, "deg    {}", format_values(&radians.to_degrees().as_array()))
}
