/// Symmetric (Lorentzian) resonance profile at the dimensionless offset
/// `x = 2(E - E')/Γ`.
#[inline]
pub fn psi(x: f64) -> f64 {
    1.0 / (1.0 + x * x)
}

/// Antisymmetric (interference) resonance profile at the same offset.
#[inline]
pub fn chi(x: f64) -> f64 {
    x / (1.0 + x * x)
}
