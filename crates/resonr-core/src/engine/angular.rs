//! Linearization of closed-form angular (Legendre) distributions on the
//! canonical scattering-cosine domain `[-1, 1]`.

use super::error::EngineError;
use super::linearize::{finalize, refine_segment};
use crate::core::math::legendre::legendre_series;
use crate::core::models::table::TabulatedFunction;

/// Linearizes the normalized angular distribution defined by the Legendre
/// coefficients `a_1..a_N` (the zeroth coefficient is identically 1).
///
/// The midpoint `μ = 0` is always inserted before refinement starts: odd
/// expansions change sign there, and a plain endpoint bisection could
/// otherwise accept a chord that misses the crossing.
pub fn linearize_angular(
    coefficients: &[f64],
    tolerance: f64,
    zero_floor: f64,
) -> Result<TabulatedFunction, EngineError> {
    let f = |mu: f64| legendre_series(coefficients, mu);

    let mut points = vec![(-1.0, f(-1.0))];
    refine_segment(&f, (0.0, f(0.0)), tolerance, zero_floor, &mut points)?;
    refine_segment(&f, (1.0, f(1.0)), tolerance, zero_floor, &mut points)?;
    finalize(points, zero_floor)
}
