//! Points to HYPER conversion
//!
//! Mock of the x402 reward formula. Alpha and reputation are read from
//! protocol parameters in production; here they are CLI inputs with the
//! protocol defaults.

use anyhow::Result;

pub const DEFAULT_ALPHA: f64 = 0.001;
pub const DEFAULT_REPUTATION: f64 = 1.0;

/// Pure function for the conversion: `HYPER = points * alpha * reputation`,
/// with every input clamped at zero.
pub fn convert_points_to_hyper(points: f64, alpha: f64, reputation: f64) -> f64 {
    points.max(0.0) * alpha.max(0.0) * reputation.max(0.0)
}

/// Run the convert subcommand: print the converted amount.
pub fn run(points: f64, alpha: f64, reputation: f64) -> Result<()> {
    let hyper = convert_points_to_hyper(points, alpha, reputation);
    println!("points={} -> HYPER={:.6}", points, hyper);
    Ok(())
}
