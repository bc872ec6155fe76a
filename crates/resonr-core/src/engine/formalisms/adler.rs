//! Adler-Adler reconstruction: a rational background polynomial per reaction
//! plus psi/chi resonance terms, defined for s-wave channels only. Elastic
//! scattering is only derivable when the backgrounds needed to subtract the
//! reaction channels from the total are present; otherwise the evaluation
//! runs in low-information mode with a bare total.

use std::f64::consts::PI;

use super::kinematics;
use crate::core::math::shapes::{chi, psi};
use crate::core::models::cross_section::CrossSection;
use crate::core::models::range::EnergyRange;
use crate::core::models::resonance::{AdlerCoefficients, ChannelTables};
use crate::engine::error::EngineError;

const FORMALISM: &str = "Adler-Adler";

/// Minimum usable background set: the four inverse-power coefficients.
const MIN_BACKGROUND_COEFFICIENTS: usize = 4;

/// `A1 + A2/E + A3/E² + A4/E³ + B1·E + B2·E²`, with the `B` terms optional.
fn background(coefficients: &[f64], energy_ev: f64) -> Result<f64, EngineError> {
    if coefficients.len() < MIN_BACKGROUND_COEFFICIENTS {
        return Err(EngineError::InsufficientParameters {
            formalism: FORMALISM,
            message: format!(
                "a background set requires at least {MIN_BACKGROUND_COEFFICIENTS} coefficients, \
                 got {}",
                coefficients.len()
            ),
        });
    }
    let e = energy_ev;
    let mut value = coefficients[0]
        + coefficients[1] / e
        + coefficients[2] / (e * e)
        + coefficients[3] / (e * e * e);
    if let Some(&b1) = coefficients.get(4) {
        value += b1 * e;
    }
    if let Some(&b2) = coefficients.get(5) {
        value += b2 * e * e;
    }
    Ok(value)
}

/// Resonance term for the reaction channels without phase factors.
fn shape_term(c: &AdlerCoefficients, energy_ev: f64) -> f64 {
    let x = (energy_ev - c.energy) / c.half_width;
    (c.symmetric * psi(x) - c.asymmetric * chi(x)) / c.half_width
}

/// Resonance term for the total, carrying the hard-sphere phase factors.
fn shape_term_total(
    c: &AdlerCoefficients,
    energy_ev: f64,
    cos_two_phi: f64,
    sin_two_phi: f64,
) -> f64 {
    let x = (energy_ev - c.energy) / c.half_width;
    let symmetric = c.symmetric * cos_two_phi + c.asymmetric * sin_two_phi;
    let asymmetric = c.asymmetric * cos_two_phi - c.symmetric * sin_two_phi;
    (symmetric * psi(x) - asymmetric * chi(x)) / c.half_width
}

pub fn evaluate(range: &EnergyRange, energy_ev: f64) -> Result<CrossSection, EngineError> {
    let mut xs = CrossSection::default();

    for channel in &range.channels {
        let tables = match &channel.tables {
            ChannelTables::AdlerAdler(tables) => tables,
            _ => {
                return Err(EngineError::InsufficientParameters {
                    formalism: FORMALISM,
                    message: "channel does not carry Adler-Adler coefficient records".to_string(),
                });
            }
        };
        if channel.l != 0 {
            return Err(EngineError::InsufficientParameters {
                formalism: FORMALISM,
                message: format!("only s-wave channels are defined, got l = {}", channel.l),
            });
        }

        let kin = kinematics(range, channel, energy_ev)?;
        let k2 = kin.k * kin.k;
        let cos_two_phi = (2.0 * kin.phi).cos();
        let sin_two_phi = (2.0 * kin.phi).sin();
        xs.potential += 4.0 * PI / k2 * kin.phi.sin().powi(2);

        let mut total = background(&tables.background.total, energy_ev)?;
        let mut capture = match &tables.background.capture {
            Some(coefficients) => background(coefficients, energy_ev)?,
            None => 0.0,
        };
        let mut fission = match &tables.background.fission {
            Some(coefficients) => background(coefficients, energy_ev)?,
            None => 0.0,
        };

        let mut has_fission_data = tables.background.fission.is_some();
        for resonance in &tables.resonances {
            total += shape_term_total(&resonance.total, energy_ev, cos_two_phi, sin_two_phi);
            capture += shape_term(&resonance.capture, energy_ev);
            if let Some(fission_coefficients) = &resonance.fission {
                fission += shape_term(fission_coefficients, energy_ev);
                has_fission_data = true;
            }
        }

        let scale = PI / k2;
        total *= scale;
        capture *= scale;
        fission *= scale;

        // Elastic is the remainder of the total; without a capture
        // background (or a fission background when fission data exist) the
        // remainder is not defined and the total stands alone.
        let elastic_derivable = tables.background.capture.is_some()
            && (!has_fission_data || tables.background.fission.is_some());
        if elastic_derivable {
            xs.elastic += total - capture - fission;
        }
        xs.total += total;
        xs.capture += capture;
        xs.fission += fission;
    }

    Ok(xs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::range::{Formalism, RangeKind, ScatteringRadius};
    use crate::core::models::resonance::{
        AdlerAdlerResonance, AdlerAdlerTables, AdlerBackground, AngularMomentumChannel,
    };

    fn range_with(tables: AdlerAdlerTables) -> EnergyRange {
        EnergyRange {
            kind: RangeKind::Resolved,
            formalism: Formalism::AdlerAdler,
            lower_ev: 1.0,
            upper_ev: 100.0,
            target_spin: 0.5,
            scattering_radius: ScatteringRadius::Constant(0.8),
            channel_radius_from_mass: false,
            channels: vec![AngularMomentumChannel {
                l: 0,
                mass_ratio: 235.0,
                competitive_q_value: None,
                tables: ChannelTables::AdlerAdler(tables),
            }],
        }
    }

    fn full_background() -> AdlerBackground {
        AdlerBackground {
            total: vec![3.0, 0.5, 0.1, 0.01],
            fission: Some(vec![1.0, 0.2, 0.0, 0.0]),
            capture: Some(vec![0.5, 0.1, 0.0, 0.0]),
        }
    }

    fn resonance_at(energy: f64) -> AdlerAdlerResonance {
        let coefficients = |g: f64, h: f64| AdlerCoefficients {
            energy,
            half_width: 0.05,
            symmetric: g,
            asymmetric: h,
        };
        AdlerAdlerResonance {
            total: coefficients(4.0, 0.4),
            fission: Some(coefficients(1.5, 0.1)),
            capture: coefficients(2.0, 0.2),
        }
    }

    #[test]
    fn background_polynomial_evaluates_all_six_terms() {
        let value = background(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2.0).unwrap();
        assert!((value - (1.0 + 1.0 + 0.75 + 0.5 + 10.0 + 24.0)).abs() < 1e-12);
    }

    #[test]
    fn background_with_fewer_than_four_coefficients_is_rejected() {
        assert!(matches!(
            background(&[1.0, 2.0, 3.0], 2.0),
            Err(EngineError::InsufficientParameters { .. })
        ));
    }

    #[test]
    fn background_only_evaluation_returns_accumulated_background() {
        let range = range_with(AdlerAdlerTables {
            background: full_background(),
            resonances: Vec::new(),
        });
        let xs = evaluate(&range, 10.0).unwrap();
        // Every exit path reports the accumulated values, never a
        // zero-initialized result.
        assert!(xs.total > 0.0);
        assert!(xs.capture > 0.0);
        assert!(xs.fission > 0.0);
        assert!((xs.total - (xs.elastic + xs.fission + xs.capture)).abs() < 1e-12 * xs.total);
    }

    #[test]
    fn resonance_terms_peak_at_the_resonance_energy() {
        let range = range_with(AdlerAdlerTables {
            background: full_background(),
            resonances: vec![resonance_at(20.0)],
        });
        let on = evaluate(&range, 20.0).unwrap();
        let off = evaluate(&range, 60.0).unwrap();
        assert!(on.capture > off.capture);
        assert!(on.total > off.total);
    }

    #[test]
    fn full_information_mode_conserves_the_total() {
        let range = range_with(AdlerAdlerTables {
            background: full_background(),
            resonances: vec![resonance_at(20.0)],
        });
        for energy in [5.0, 19.9, 20.0, 20.1, 75.0] {
            let xs = evaluate(&range, energy).unwrap();
            let sum = xs.elastic + xs.fission + xs.capture;
            assert!((xs.total - sum).abs() <= 1e-9 * xs.total.abs().max(1.0));
        }
    }

    #[test]
    fn low_information_mode_reports_a_bare_total() {
        let range = range_with(AdlerAdlerTables {
            background: AdlerBackground {
                total: vec![3.0, 0.5, 0.1, 0.01],
                fission: None,
                capture: None,
            },
            resonances: Vec::new(),
        });
        let xs = evaluate(&range, 10.0).unwrap();
        assert!(xs.total > 0.0);
        assert_eq!(xs.elastic, 0.0);
        // The conservation identity is intentionally not enforced here.
        assert!(xs.total != xs.elastic + xs.fission + xs.capture);
    }

    #[test]
    fn missing_fission_background_with_fission_resonances_disables_elastic() {
        let range = range_with(AdlerAdlerTables {
            background: AdlerBackground {
                total: vec![3.0, 0.5, 0.1, 0.01],
                fission: None,
                capture: Some(vec![0.5, 0.1, 0.0, 0.0]),
            },
            resonances: vec![resonance_at(20.0)],
        });
        let xs = evaluate(&range, 10.0).unwrap();
        assert_eq!(xs.elastic, 0.0);
        assert!(xs.fission > 0.0);
    }

    #[test]
    fn higher_orbital_momenta_are_rejected() {
        let mut range = range_with(AdlerAdlerTables {
            background: full_background(),
            resonances: Vec::new(),
        });
        range.channels[0].l = 1;
        assert!(matches!(
            evaluate(&range, 10.0),
            Err(EngineError::InsufficientParameters { .. })
        ));
    }

    #[test]
    fn phase_factors_rotate_the_total_resonance_term() {
        let c = AdlerCoefficients {
            energy: 20.0,
            half_width: 0.05,
            symmetric: 4.0,
            asymmetric: 0.4,
        };
        // With φ = 0 the total term must reduce to the plain shape term.
        let plain = shape_term(&c, 19.98);
        let rotated = shape_term_total(&c, 19.98, 1.0, 0.0);
        assert!((plain - rotated).abs() < 1e-12);
    }
}
