//! Single-level Breit-Wigner reconstruction: every resonance contributes an
//! independent psi/chi line-shape term on top of hard-sphere potential
//! scattering.

use std::f64::consts::PI;

use tracing::debug;

use super::{kinematics, statistical_weight};
use crate::core::math::penetration::penetration_shift;
use crate::core::math::shapes::{chi, psi};
use crate::core::models::cross_section::CrossSection;
use crate::core::models::range::EnergyRange;
use crate::core::models::resonance::{
    AngularMomentumChannel, BreitWignerResonance, ChannelTables,
};
use crate::engine::error::EngineError;

/// One resonance's line-shape quantities at the evaluation energy.
pub(crate) struct ResonanceTerm {
    /// Neutron width rescaled by the penetrability ratio.
    pub neutron_width: f64,
    pub total_width: f64,
    pub psi: f64,
    pub chi: f64,
    /// Spin statistical factor `g_J`.
    pub weight: f64,
}

pub(crate) fn breit_wigner_list<'a>(
    channel: &'a AngularMomentumChannel,
    formalism: &'static str,
) -> Result<&'a [BreitWignerResonance], EngineError> {
    match &channel.tables {
        ChannelTables::BreitWigner(list) => Ok(list),
        _ => Err(EngineError::InsufficientParameters {
            formalism,
            message: format!(
                "channel with l = {} does not carry Breit-Wigner resonance records",
                channel.l
            ),
        }),
    }
}

/// Evaluates one resonance at `energy_ev`: penetrability-rescaled neutron
/// width, shifted resonance energy, and the psi/chi profiles. Returns `None`
/// for a resonance whose penetrability vanishes (it cannot contribute).
pub(crate) fn resonance_term(
    range: &EnergyRange,
    channel: &AngularMomentumChannel,
    resonance: &BreitWignerResonance,
    energy_ev: f64,
    penetration: f64,
    shift: f64,
) -> Result<Option<ResonanceTerm>, EngineError> {
    let kin_r = kinematics(range, channel, resonance.energy.abs())?;
    let (p_r, s_r) = penetration_shift(channel.l, kin_r.rho)?;
    if p_r == 0.0 {
        debug!(
            resonance_energy = resonance.energy,
            "Skipping resonance with vanishing penetrability"
        );
        return Ok(None);
    }

    let neutron_width = resonance.neutron_width * penetration / p_r;
    let total_width = neutron_width
        + resonance.radiative_width
        + resonance.fission_width
        + resonance.competitive_width;
    let shifted_energy =
        resonance.energy + resonance.neutron_width * (s_r - shift) / (2.0 * p_r);
    let x = 2.0 * (energy_ev - shifted_energy) / total_width;

    Ok(Some(ResonanceTerm {
        neutron_width,
        total_width,
        psi: psi(x),
        chi: chi(x),
        weight: statistical_weight(range.target_spin, resonance.spin),
    }))
}

pub fn evaluate(range: &EnergyRange, energy_ev: f64) -> Result<CrossSection, EngineError> {
    let mut elastic = 0.0;
    let mut fission = 0.0;
    let mut capture = 0.0;
    let mut potential = 0.0;

    for channel in &range.channels {
        let resonances = breit_wigner_list(channel, "Single-level Breit-Wigner")?;
        let kin = kinematics(range, channel, energy_ev)?;
        let (p_e, s_e) = penetration_shift(channel.l, kin.rho)?;
        let k2 = kin.k * kin.k;

        let sin_sq = kin.phi.sin().powi(2);
        let sin_two_phi = (2.0 * kin.phi).sin();
        let hard_sphere = 4.0 * PI / k2 * (2 * channel.l + 1) as f64 * sin_sq;
        potential += hard_sphere;
        elastic += hard_sphere;

        for resonance in resonances {
            let Some(term) = resonance_term(range, channel, resonance, energy_ev, p_e, s_e)?
            else {
                continue;
            };
            let gn = term.neutron_width;
            let gt = term.total_width;
            let common = PI / k2 * term.weight * 4.0 / (gt * gt);

            elastic += common
                * ((gn * gn - 2.0 * gn * gt * sin_sq) * term.psi
                    + gn * gt * term.chi * sin_two_phi);
            capture += common * gn * resonance.radiative_width * term.psi;
            fission += common * gn * resonance.fission_width * term.psi;
        }
    }

    Ok(CrossSection {
        total: elastic + fission + capture,
        elastic,
        fission,
        capture,
        potential,
    })
}
