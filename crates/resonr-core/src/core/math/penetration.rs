use thiserror::Error;

/// Wave-number coefficient: k = C · A/(A+1) · √E with E in eV and k in
/// units of (10⁻¹² cm)⁻¹, so that π/k² is in barns.
const WAVE_NUMBER_COEFFICIENT: f64 = 2.196771e-3;

/// Evaluated files carry orbital angular momenta no higher than 4; the
/// closed-form barrier factors below stop there, so anything above is a
/// structural failure, never silent truncation.
pub const MAX_ORBITAL_MOMENTUM: u32 = 4;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Orbital angular momentum l = {0} exceeds the supported ceiling of 4")]
pub struct UnsupportedOrbitalMomentum(pub u32);

/// Neutron wave number for a target of mass `mass_ratio` (in neutron
/// masses) at `energy_ev`. Negative energies (bound levels) use |E|.
#[inline]
pub fn wave_number(mass_ratio: f64, energy_ev: f64) -> f64 {
    WAVE_NUMBER_COEFFICIENT * (mass_ratio / (mass_ratio + 1.0)) * energy_ev.abs().sqrt()
}

/// Mass-computed channel radius in units of 10⁻¹² cm.
#[inline]
pub fn channel_radius(mass_ratio: f64) -> f64 {
    0.123 * mass_ratio.cbrt() + 0.08
}

/// Penetration factor `P_l` and level-shift factor `S_l` at the
/// dimensionless radius `ρ`, in closed form for `l = 0..4`.
pub fn penetration_shift(l: u32, rho: f64) -> Result<(f64, f64), UnsupportedOrbitalMomentum> {
    let r2 = rho * rho;
    match l {
        0 => Ok((rho, 0.0)),
        1 => {
            let den = 1.0 + r2;
            Ok((rho * r2 / den, -1.0 / den))
        }
        2 => {
            let den = 9.0 + 3.0 * r2 + r2 * r2;
            Ok((rho * r2 * r2 / den, -(18.0 + 3.0 * r2) / den))
        }
        3 => {
            let r4 = r2 * r2;
            let r6 = r4 * r2;
            let den = 225.0 + 45.0 * r2 + 6.0 * r4 + r6;
            Ok((rho * r6 / den, -(675.0 + 90.0 * r2 + 6.0 * r4) / den))
        }
        4 => {
            let r4 = r2 * r2;
            let r6 = r4 * r2;
            let r8 = r4 * r4;
            let den = 11025.0 + 1575.0 * r2 + 135.0 * r4 + 10.0 * r6 + r8;
            Ok((
                rho * r8 / den,
                -(44100.0 + 4725.0 * r2 + 270.0 * r4 + 10.0 * r6) / den,
            ))
        }
        _ => Err(UnsupportedOrbitalMomentum(l)),
    }
}

/// Hard-sphere phase shift `φ_l` at the dimensionless radius `ρ̂`.
pub fn phase_shift(l: u32, rho_hat: f64) -> Result<f64, UnsupportedOrbitalMomentum> {
    let r2 = rho_hat * rho_hat;
    match l {
        0 => Ok(rho_hat),
        1 => Ok(rho_hat - rho_hat.atan()),
        2 => Ok(rho_hat - (3.0 * rho_hat / (3.0 - r2)).atan()),
        3 => Ok(rho_hat - (rho_hat * (15.0 - r2) / (15.0 - 6.0 * r2)).atan()),
        4 => Ok(rho_hat
            - (rho_hat * (105.0 - 10.0 * r2) / (105.0 - 45.0 * r2 + r2 * r2)).atan()),
        _ => Err(UnsupportedOrbitalMomentum(l)),
    }
}

/// Penetrability ratio `V_l = P_l/ρ` used by the unresolved-region
/// effective neutron width.
pub fn penetration_ratio(l: u32, rho: f64) -> Result<f64, UnsupportedOrbitalMomentum> {
    if l == 0 {
        return Ok(1.0);
    }
    let (p, _) = penetration_shift(l, rho)?;
    Ok(p / rho)
}
