//! Multi-level Breit-Wigner reconstruction. Capture and fission are
//! level-independent sums exactly as in the single-level model; elastic
//! scattering accumulates the collision-function sum coherently within each
//! total-angular-momentum group before squaring, with a correction for the
//! statistical weight of spin sequences carrying no resonances.

use std::f64::consts::PI;

use super::slbw::{breit_wigner_list, resonance_term};
use super::{kinematics, statistical_weight};
use crate::core::math::penetration::penetration_shift;
use crate::core::models::cross_section::CrossSection;
use crate::core::models::range::EnergyRange;
use crate::engine::error::EngineError;

const SPIN_MATCH_TOLERANCE: f64 = 1e-6;

/// Coherent collision-function accumulator for one `J` group.
struct SpinGroup {
    spin: f64,
    symmetric_sum: f64,
    antisymmetric_sum: f64,
}

pub fn evaluate(range: &EnergyRange, energy_ev: f64) -> Result<CrossSection, EngineError> {
    let mut elastic = 0.0;
    let mut fission = 0.0;
    let mut capture = 0.0;
    let mut potential = 0.0;

    for channel in &range.channels {
        let resonances = breit_wigner_list(channel, "Multi-level Breit-Wigner")?;
        let kin = kinematics(range, channel, energy_ev)?;
        let (p_e, s_e) = penetration_shift(channel.l, kin.rho)?;
        let k2 = kin.k * kin.k;

        let sin_sq = kin.phi.sin().powi(2);
        let cos_two_phi = (2.0 * kin.phi).cos();
        let sin_two_phi = (2.0 * kin.phi).sin();
        let hard_sphere = 4.0 * PI / k2 * (2 * channel.l + 1) as f64 * sin_sq;
        potential += hard_sphere;

        let mut groups: Vec<SpinGroup> = Vec::new();
        for resonance in resonances {
            let Some(term) = resonance_term(range, channel, resonance, energy_ev, p_e, s_e)?
            else {
                continue;
            };
            let gn = term.neutron_width;
            let gt = term.total_width;

            // Incoherent reaction channels, identical to the single-level sums.
            let common = PI / k2 * term.weight * 4.0 / (gt * gt);
            capture += common * gn * resonance.radiative_width * term.psi;
            fission += common * gn * resonance.fission_width * term.psi;

            // Coherent elastic accumulation per J group.
            let strength = 2.0 * gn / gt;
            let group = match groups
                .iter_mut()
                .find(|g| (g.spin - resonance.spin.abs()).abs() < SPIN_MATCH_TOLERANCE)
            {
                Some(existing) => existing,
                None => {
                    groups.push(SpinGroup {
                        spin: resonance.spin.abs(),
                        symmetric_sum: 0.0,
                        antisymmetric_sum: 0.0,
                    });
                    groups.last_mut().expect("just pushed")
                }
            };
            group.symmetric_sum += strength * term.psi;
            group.antisymmetric_sum += strength * term.chi;
        }

        let mut weight_covered = 0.0;
        for group in &groups {
            let weight = statistical_weight(range.target_spin, group.spin);
            weight_covered += weight;
            let alpha = 1.0 - group.symmetric_sum;
            let beta = group.antisymmetric_sum;
            let re = 1.0 - alpha * cos_two_phi + beta * sin_two_phi;
            let im = alpha * sin_two_phi + beta * cos_two_phi;
            elastic += PI / k2 * weight * (re * re + im * im);
        }

        // Spin sequences with no listed resonances still scatter off the
        // hard sphere; their statistical weight is the remainder.
        let missing_weight = (2 * channel.l + 1) as f64 - weight_covered;
        elastic += PI / k2 * missing_weight * 2.0 * (1.0 - cos_two_phi);
    }

    Ok(CrossSection {
        total: elastic + fission + capture,
        elastic,
        fission,
        capture,
        potential,
    })
}
