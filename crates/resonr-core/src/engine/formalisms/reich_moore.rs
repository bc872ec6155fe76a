//! Reich-Moore reconstruction. Every `(l, channel-spin, J)` triple carries a
//! symmetric 3×3 complex channel matrix over (elastic, fission-A, fission-B)
//! built from the resonances with that `J`; the collision-matrix element
//! follows from its inverse. A triple whose matrix turns out singular
//! contributes nothing, and evaluation continues with the remaining triples.

use std::f64::consts::PI;

use nalgebra::DMatrix;
use tracing::debug;

use super::{kinematics, statistical_weight};
use crate::core::math::matrix::invert_complex_symmetric;
use crate::core::math::penetration::penetration_shift;
use crate::core::models::cross_section::CrossSection;
use crate::core::models::range::EnergyRange;
use crate::core::models::resonance::{ChannelTables, ReichMooreResonance};
use crate::engine::error::EngineError;

const SPIN_MATCH_TOLERANCE: f64 = 1e-6;

/// Reaction channels entering the channel matrix.
const CHANNELS: usize = 3;

/// Signed square root of a signed squared amplitude.
#[inline]
fn reduced_amplitude(width: f64) -> f64 {
    width.signum() * width.abs().sqrt()
}

/// The channel spins reachable by an s = 1/2 projectile on a target of spin
/// `I`: |I - 1/2| and I + 1/2, collapsing to one value for I = 0.
fn channel_spins(target_spin: f64) -> Vec<f64> {
    let low = (target_spin - 0.5).abs();
    let high = target_spin + 0.5;
    if (high - low).abs() < SPIN_MATCH_TOLERANCE {
        vec![low]
    } else {
        vec![low, high]
    }
}

pub fn evaluate(range: &EnergyRange, energy_ev: f64) -> Result<CrossSection, EngineError> {
    let mut elastic = 0.0;
    let mut fission = 0.0;
    let mut capture = 0.0;
    let mut potential = 0.0;

    for channel in &range.channels {
        let resonances = match &channel.tables {
            ChannelTables::ReichMoore(list) => list,
            _ => {
                return Err(EngineError::InsufficientParameters {
                    formalism: "Reich-Moore",
                    message: format!(
                        "channel with l = {} does not carry Reich-Moore resonance records",
                        channel.l
                    ),
                });
            }
        };

        let kin = kinematics(range, channel, energy_ev)?;
        let (p_e, _) = penetration_shift(channel.l, kin.rho)?;
        let k2 = kin.k * kin.k;
        let cos_two_phi = (2.0 * kin.phi).cos();
        let sin_two_phi = (2.0 * kin.phi).sin();
        potential += 4.0 * PI / k2 * (2 * channel.l + 1) as f64 * kin.phi.sin().powi(2);

        // Each J value occurs under one or two channel-spin sequences.
        // Resonance records carry J but not the channel spin, so the first
        // sequence reaching a J absorbs its resonances and any further
        // sequence with the same J scatters off the hard sphere alone.
        let mut assigned: Vec<f64> = Vec::new();
        for spin in channel_spins(range.target_spin) {
            let l = channel.l as f64;
            let j_min = (l - spin).abs();
            let j_max = l + spin;
            let mut j = j_min;
            while j <= j_max + 0.25 {
                let weight = statistical_weight(range.target_spin, j);
                let group: Vec<&ReichMooreResonance> = resonances
                    .iter()
                    .filter(|r| (r.spin.abs() - j).abs() < SPIN_MATCH_TOLERANCE)
                    .collect();
                let already_taken = assigned
                    .iter()
                    .any(|&taken| (taken - j).abs() < SPIN_MATCH_TOLERANCE);

                if group.is_empty() || already_taken {
                    let hard_sphere = PI / k2 * weight * 2.0 * (1.0 - cos_two_phi);
                    elastic += hard_sphere;
                } else {
                    assigned.push(j);
                    if let Some((group_elastic, group_fission, group_capture)) = evaluate_group(
                        range, channel, &group, energy_ev, p_e, k2, weight, cos_two_phi,
                        sin_two_phi,
                    )? {
                        elastic += group_elastic;
                        fission += group_fission;
                        capture += group_capture;
                    }
                }
                j += 1.0;
            }
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

/// Evaluates one populated `(l, s, J)` triple. Returns `None` when the
/// channel matrix is singular: that triple contributes zero by policy.
#[allow(clippy::too_many_arguments)]
fn evaluate_group(
    range: &EnergyRange,
    channel: &crate::core::models::resonance::AngularMomentumChannel,
    group: &[&ReichMooreResonance],
    energy_ev: f64,
    penetration: f64,
    k2: f64,
    weight: f64,
    cos_two_phi: f64,
    sin_two_phi: f64,
) -> Result<Option<(f64, f64, f64)>, EngineError> {
    let mut real = DMatrix::identity(CHANNELS, CHANNELS);
    let mut imag = DMatrix::zeros(CHANNELS, CHANNELS);

    for resonance in group {
        let kin_r = kinematics(range, channel, resonance.energy.abs())?;
        let (p_r, _) = penetration_shift(channel.l, kin_r.rho)?;
        if p_r == 0.0 {
            debug!(
                resonance_energy = resonance.energy,
                "Skipping resonance with vanishing penetrability"
            );
            continue;
        }

        let neutron_width = resonance.neutron_width * penetration / p_r;
        let amplitudes = [
            neutron_width.sqrt(),
            reduced_amplitude(resonance.fission_width_a),
            reduced_amplitude(resonance.fission_width_b),
        ];
        let offset = resonance.energy - energy_ev;
        let half_gamma = resonance.radiative_width / 2.0;
        let denominator = offset * offset + half_gamma * half_gamma;

        for c in 0..CHANNELS {
            for cp in c..CHANNELS {
                let product = amplitudes[c] * amplitudes[cp] / 2.0;
                let real_update = product * half_gamma / denominator;
                let imag_update = -product * offset / denominator;
                real[(c, cp)] += real_update;
                real[(cp, c)] = real[(c, cp)];
                imag[(c, cp)] += imag_update;
                imag[(cp, c)] = imag[(c, cp)];
            }
        }
    }

    let (g, h) = match invert_complex_symmetric(&real, &imag) {
        Ok(inverse) => inverse,
        Err(singular) => {
            debug!(
                energy = energy_ev,
                %singular,
                "Channel matrix is singular; spin group contributes zero"
            );
            return Ok(None);
        }
    };

    let t = 2.0 * g[(0, 0)] - 1.0;
    let v = 2.0 * h[(0, 0)];
    let re_u = t * cos_two_phi + v * sin_two_phi;
    let im_u = v * cos_two_phi - t * sin_two_phi;

    let group_total = 2.0 * PI / k2 * weight * (1.0 - re_u);
    let one_minus = 1.0 - re_u;
    let group_elastic = PI / k2 * weight * (one_minus * one_minus + im_u * im_u);
    let fission_strength = g[(0, 1)] * g[(0, 1)]
        + h[(0, 1)] * h[(0, 1)]
        + g[(0, 2)] * g[(0, 2)]
        + h[(0, 2)] * h[(0, 2)];
    let group_fission = PI / k2 * weight * 4.0 * fission_strength;
    let group_capture = group_total - group_elastic - group_fission;

    Ok(Some((group_elastic, group_fission, group_capture)))
}
