//! Resonance formalism evaluators: one computational unit per formalism,
//! each mapping an incident energy to a point cross section.
//!
//! Evaluators are pure functions over borrowed evaluated-parameter trees.
//! Dispatch is a closed match over the range kind and formalism tag, with an
//! explicit unsupported arm; nothing falls through silently.

pub mod adler;
pub mod mlbw;
pub mod reich_moore;
pub mod slbw;
pub mod unresolved;

use super::error::EngineError;
use crate::core::math::penetration::{channel_radius, phase_shift, wave_number};
use crate::core::models::cross_section::CrossSection;
use crate::core::models::range::{EnergyRange, Formalism, RangeKind};
use crate::core::models::resonance::AngularMomentumChannel;

/// Evaluates the cross section of one range at `energy_ev`.
pub fn evaluate(range: &EnergyRange, energy_ev: f64) -> Result<CrossSection, EngineError> {
    match (range.kind, range.formalism) {
        (RangeKind::Resolved, Formalism::SingleLevelBreitWigner) => {
            slbw::evaluate(range, energy_ev)
        }
        (RangeKind::Resolved, Formalism::MultiLevelBreitWigner) => mlbw::evaluate(range, energy_ev),
        (RangeKind::Resolved, Formalism::ReichMoore) => reich_moore::evaluate(range, energy_ev),
        (RangeKind::Resolved, Formalism::AdlerAdler) => adler::evaluate(range, energy_ev),
        (RangeKind::Unresolved, Formalism::Statistical) => unresolved::evaluate(range, energy_ev),
        (kind, formalism) => Err(EngineError::UnsupportedFormalism { kind, formalism }),
    }
}

/// Spin statistical factor `g_J = (2J + 1) / (2(2I + 1))`.
#[inline]
pub(crate) fn statistical_weight(target_spin: f64, j: f64) -> f64 {
    (2.0 * j.abs() + 1.0) / (2.0 * (2.0 * target_spin + 1.0))
}

/// Per-channel kinematic quantities at one energy.
pub(crate) struct ChannelKinematics {
    pub k: f64,
    /// Dimensionless radius entering penetrabilities and level shifts.
    pub rho: f64,
    /// Hard-sphere phase shift for the channel's `l`.
    pub phi: f64,
}

pub(crate) fn kinematics(
    range: &EnergyRange,
    channel: &AngularMomentumChannel,
    energy_ev: f64,
) -> Result<ChannelKinematics, EngineError> {
    let k = wave_number(channel.mass_ratio, energy_ev);
    let scattering = range.scattering_radius.value_at(energy_ev);
    let radius = if range.channel_radius_from_mass {
        channel_radius(channel.mass_ratio)
    } else {
        scattering
    };
    let phi = phase_shift(channel.l, k * scattering)?;
    Ok(ChannelKinematics {
        k,
        rho: k * radius,
        phi,
    })
}
