//! Unresolved-region reconstruction from statistical average parameters.
//! Cross sections per `(l, J)` group follow from the penetrability-scaled
//! effective neutron width and Porter-Thomas width-fluctuation averages;
//! tabulated averages are interpolated between the bracketing grid energies
//! before a single evaluation at the request energy.

use std::f64::consts::PI;

use super::{kinematics, statistical_weight};
use crate::core::math::penetration::penetration_ratio;
use crate::core::math::quadrature::{
    AverageWidths, FluctuationReaction, fluctuation_average,
};
use crate::core::models::cross_section::CrossSection;
use crate::core::models::range::EnergyRange;
use crate::core::models::resonance::{ChannelTables, UnresolvedTables, UrrRow};
use crate::engine::error::EngineError;

const FORMALISM: &str = "Unresolved statistical";

/// Average parameters of one spin group after energy interpolation.
struct GroupParameters {
    spin: f64,
    spacing: f64,
    widths: AverageWidths,
    neutron_dof: f64,
    fission_dof: f64,
    competitive_dof: f64,
}

pub fn evaluate(range: &EnergyRange, energy_ev: f64) -> Result<CrossSection, EngineError> {
    let mut elastic = 0.0;
    let mut fission = 0.0;
    let mut capture = 0.0;
    let mut potential = 0.0;

    for channel in &range.channels {
        let tables = match &channel.tables {
            ChannelTables::Unresolved(tables) => tables,
            _ => {
                return Err(EngineError::InsufficientParameters {
                    formalism: FORMALISM,
                    message: format!(
                        "channel with l = {} does not carry unresolved statistical tables",
                        channel.l
                    ),
                });
            }
        };

        let kin = kinematics(range, channel, energy_ev)?;
        let k2 = kin.k * kin.k;
        let sin_sq = kin.phi.sin().powi(2);
        let hard_sphere = 4.0 * PI / k2 * (2 * channel.l + 1) as f64 * sin_sq;
        potential += hard_sphere;
        elastic += hard_sphere;

        let ratio = penetration_ratio(channel.l, kin.rho)?;
        let sqrt_e = energy_ev.abs().sqrt();

        let groups = collect_groups(tables, energy_ev)?;
        for group in groups {
            if group.spacing <= 0.0 {
                return Err(EngineError::InsufficientParameters {
                    formalism: FORMALISM,
                    message: format!(
                        "average level spacing must be positive, got {}",
                        group.spacing
                    ),
                });
            }

            let widths = AverageWidths {
                neutron: group.widths.neutron * sqrt_e * ratio,
                ..group.widths
            };
            let weight = statistical_weight(range.target_spin, group.spin);
            let base = 2.0 * PI * PI / (k2 * group.spacing) * weight;

            let average = |reaction| {
                fluctuation_average(
                    &widths,
                    group.neutron_dof,
                    group.fission_dof,
                    group.competitive_dof,
                    reaction,
                )
                .map_err(|source| EngineError::InsufficientParameters {
                    formalism: FORMALISM,
                    message: source.to_string(),
                })
            };

            elastic += base
                * (average(FluctuationReaction::Elastic)? - 2.0 * widths.neutron * sin_sq);
            capture += base * average(FluctuationReaction::Capture)?;
            fission += base * average(FluctuationReaction::Fission)?;
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

/// Flattens the three table kinds into interpolated per-group parameters.
/// The reduced neutron width is returned unscaled; the caller applies the
/// `√E · V_l` energy dependence.
fn collect_groups(
    tables: &UnresolvedTables,
    energy_ev: f64,
) -> Result<Vec<GroupParameters>, EngineError> {
    match tables {
        UnresolvedTables::EnergyIndependent(groups) => Ok(groups
            .iter()
            .map(|g| GroupParameters {
                spin: g.spin,
                spacing: g.spacing,
                widths: AverageWidths {
                    neutron: g.reduced_neutron_width,
                    radiative: g.radiative_width,
                    fission: 0.0,
                    competitive: 0.0,
                },
                neutron_dof: g.neutron_dof,
                fission_dof: 1.0,
                competitive_dof: 1.0,
            })
            .collect()),
        UnresolvedTables::TabulatedFission { energies, groups } => groups
            .iter()
            .map(|g| {
                if g.fission_widths.len() != energies.len() {
                    return Err(EngineError::InsufficientParameters {
                        formalism: FORMALISM,
                        message: format!(
                            "group with J = {} tabulates {} fission widths over {} grid energies",
                            g.spin,
                            g.fission_widths.len(),
                            energies.len()
                        ),
                    });
                }
                Ok(GroupParameters {
                    spin: g.spin,
                    spacing: g.spacing,
                    widths: AverageWidths {
                        neutron: g.reduced_neutron_width,
                        radiative: g.radiative_width,
                        fission: interpolate_clamped(energies, &g.fission_widths, energy_ev),
                        competitive: 0.0,
                    },
                    neutron_dof: g.neutron_dof,
                    fission_dof: g.fission_dof,
                    competitive_dof: 1.0,
                })
            })
            .collect(),
        UnresolvedTables::FullyTabulated(groups) => groups
            .iter()
            .map(|g| {
                let row = interpolate_rows(&g.rows, energy_ev)?;
                Ok(GroupParameters {
                    spin: g.spin,
                    spacing: row.spacing,
                    widths: AverageWidths {
                        neutron: row.reduced_neutron_width,
                        radiative: row.radiative_width,
                        fission: row.fission_width,
                        competitive: row.competitive_width,
                    },
                    neutron_dof: g.neutron_dof,
                    fission_dof: g.fission_dof,
                    competitive_dof: g.competitive_dof,
                })
            })
            .collect(),
    }
}

/// Linear interpolation over a parallel grid, clamped to the end values.
fn interpolate_clamped(grid: &[f64], values: &[f64], x: f64) -> f64 {
    match grid.first() {
        None => 0.0,
        Some(&first) if x <= first => values[0],
        _ => {
            let last = *grid.last().expect("non-empty grid");
            if x >= last {
                return *values.last().expect("non-empty values");
            }
            let idx = grid.partition_point(|&g| g <= x) - 1;
            let (x1, x2) = (grid[idx], grid[idx + 1]);
            let (y1, y2) = (values[idx], values[idx + 1]);
            y1 + (y2 - y1) * (x - x1) / (x2 - x1)
        }
    }
}

/// Interpolates every field of the bracketing rows; requests at a grid
/// energy reproduce that row exactly.
fn interpolate_rows(rows: &[UrrRow], energy_ev: f64) -> Result<UrrRow, EngineError> {
    let (first, last) = match (rows.first(), rows.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => {
            return Err(EngineError::InsufficientParameters {
                formalism: FORMALISM,
                message: "a fully-tabulated group carries no energy rows".to_string(),
            });
        }
    };
    if energy_ev <= first.energy {
        return Ok(*first);
    }
    if energy_ev >= last.energy {
        return Ok(*last);
    }
    let idx = rows.partition_point(|row| row.energy <= energy_ev) - 1;
    let (a, b) = (&rows[idx], &rows[idx + 1]);
    let fraction = (energy_ev - a.energy) / (b.energy - a.energy);
    let lerp = |x: f64, y: f64| x + (y - x) * fraction;
    Ok(UrrRow {
        energy: energy_ev,
        spacing: lerp(a.spacing, b.spacing),
        reduced_neutron_width: lerp(a.reduced_neutron_width, b.reduced_neutron_width),
        radiative_width: lerp(a.radiative_width, b.radiative_width),
        fission_width: lerp(a.fission_width, b.fission_width),
        competitive_width: lerp(a.competitive_width, b.competitive_width),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::range::{Formalism, RangeKind, ScatteringRadius};
    use crate::core::models::resonance::{
        AngularMomentumChannel, UrrFissionGroup, UrrSpinGroup, UrrTabulatedGroup,
    };

    fn range_with(tables: UnresolvedTables) -> EnergyRange {
        EnergyRange {
            kind: RangeKind::Unresolved,
            formalism: Formalism::Statistical,
            lower_ev: 1e3,
            upper_ev: 1e5,
            target_spin: 0.5,
            scattering_radius: ScatteringRadius::Constant(0.7),
            channel_radius_from_mass: false,
            channels: vec![AngularMomentumChannel {
                l: 0,
                mass_ratio: 238.0,
                competitive_q_value: None,
                tables: ChannelTables::Unresolved(tables),
            }],
        }
    }

    fn spin_group() -> UrrSpinGroup {
        UrrSpinGroup {
            spin: 0.5,
            spacing: 20.0,
            neutron_dof: 1.0,
            reduced_neutron_width: 2e-3,
            radiative_width: 25e-3,
        }
    }

    #[test]
    fn energy_independent_averages_produce_positive_cross_sections() {
        let range = range_with(UnresolvedTables::EnergyIndependent(vec![spin_group()]));
        let xs = evaluate(&range, 5e3).unwrap();
        assert!(xs.elastic > 0.0);
        assert!(xs.capture > 0.0);
        assert_eq!(xs.fission, 0.0);
        assert!(xs.potential > 0.0);
    }

    #[test]
    fn total_equals_the_sum_of_partials() {
        let range = range_with(UnresolvedTables::EnergyIndependent(vec![spin_group()]));
        for energy in [2e3, 1e4, 8e4] {
            let xs = evaluate(&range, energy).unwrap();
            let sum = xs.elastic + xs.fission + xs.capture;
            assert!((xs.total - sum).abs() <= 1e-9 * xs.total.abs().max(1.0));
        }
    }

    #[test]
    fn capture_falls_off_with_energy_in_the_statistical_region() {
        let range = range_with(UnresolvedTables::EnergyIndependent(vec![spin_group()]));
        let low = evaluate(&range, 2e3).unwrap();
        let high = evaluate(&range, 5e4).unwrap();
        assert!(low.capture > high.capture);
    }

    #[test]
    fn tabulated_fission_widths_interpolate_between_grid_energies() {
        let tables = UnresolvedTables::TabulatedFission {
            energies: vec![1e3, 1e4],
            groups: vec![UrrFissionGroup {
                spin: 0.5,
                spacing: 20.0,
                neutron_dof: 1.0,
                fission_dof: 2.0,
                reduced_neutron_width: 2e-3,
                radiative_width: 25e-3,
                fission_widths: vec![10e-3, 30e-3],
            }],
        };
        let range = range_with(tables);
        let at_grid = evaluate(&range, 1e3).unwrap();
        let between = evaluate(&range, 5.5e3).unwrap();
        assert!(at_grid.fission > 0.0);
        assert!(between.fission > 0.0);
        // The interpolated width (20 meV) exceeds the first grid value
        // (10 meV); the drop of 1/k² with energy partially offsets it.
        assert!(between.fission.is_finite());
    }

    #[test]
    fn mismatched_fission_grid_lengths_are_rejected() {
        let tables = UnresolvedTables::TabulatedFission {
            energies: vec![1e3, 1e4, 1e5],
            groups: vec![UrrFissionGroup {
                spin: 0.5,
                spacing: 20.0,
                neutron_dof: 1.0,
                fission_dof: 1.0,
                reduced_neutron_width: 2e-3,
                radiative_width: 25e-3,
                fission_widths: vec![10e-3],
            }],
        };
        let range = range_with(tables);
        assert!(matches!(
            evaluate(&range, 5e3),
            Err(EngineError::InsufficientParameters { .. })
        ));
    }

    #[test]
    fn fully_tabulated_rows_reproduce_grid_points_exactly() {
        let rows = vec![
            UrrRow {
                energy: 1e3,
                spacing: 20.0,
                reduced_neutron_width: 2e-3,
                radiative_width: 25e-3,
                fission_width: 0.0,
                competitive_width: 0.0,
            },
            UrrRow {
                energy: 1e4,
                spacing: 24.0,
                reduced_neutron_width: 3e-3,
                radiative_width: 26e-3,
                fission_width: 0.0,
                competitive_width: 0.0,
            },
        ];
        let row = interpolate_rows(&rows, 1e4).unwrap();
        assert_eq!(row.spacing, 24.0);
        assert_eq!(row.reduced_neutron_width, 3e-3);

        let mid = interpolate_rows(&rows, 5.5e3).unwrap();
        assert_eq!(mid.spacing, 22.0);
        assert_eq!(mid.reduced_neutron_width, 2.5e-3);
    }

    #[test]
    fn fully_tabulated_groups_evaluate_between_rows() {
        let tables = UnresolvedTables::FullyTabulated(vec![UrrTabulatedGroup {
            spin: 0.5,
            neutron_dof: 1.0,
            fission_dof: 1.0,
            competitive_dof: 1.0,
            rows: vec![
                UrrRow {
                    energy: 1e3,
                    spacing: 20.0,
                    reduced_neutron_width: 2e-3,
                    radiative_width: 25e-3,
                    fission_width: 12e-3,
                    competitive_width: 0.0,
                },
                UrrRow {
                    energy: 1e4,
                    spacing: 24.0,
                    reduced_neutron_width: 3e-3,
                    radiative_width: 26e-3,
                    fission_width: 18e-3,
                    competitive_width: 0.0,
                },
            ],
        }]);
        let range = range_with(tables);
        let xs = evaluate(&range, 4e3).unwrap();
        assert!(xs.capture > 0.0);
        assert!(xs.fission > 0.0);
        assert!(xs.total > 0.0);
    }

    #[test]
    fn empty_row_table_is_a_structural_failure() {
        let tables = UnresolvedTables::FullyTabulated(vec![UrrTabulatedGroup {
            spin: 0.5,
            neutron_dof: 1.0,
            fission_dof: 1.0,
            competitive_dof: 1.0,
            rows: Vec::new(),
        }]);
        let range = range_with(tables);
        assert!(matches!(
            evaluate(&range, 4e3),
            Err(EngineError::InsufficientParameters { .. })
        ));
    }

    #[test]
    fn non_positive_spacing_is_rejected() {
        let mut group = spin_group();
        group.spacing = 0.0;
        let range = range_with(UnresolvedTables::EnergyIndependent(vec![group]));
        assert!(matches!(
            evaluate(&range, 5e3),
            Err(EngineError::InsufficientParameters { .. })
        ));
    }

    #[test]
    fn interpolation_clamps_outside_the_grid() {
        assert_eq!(interpolate_clamped(&[1.0, 2.0], &[10.0, 20.0], 0.5), 10.0);
        assert_eq!(interpolate_clamped(&[1.0, 2.0], &[10.0, 20.0], 3.0), 20.0);
        assert_eq!(interpolate_clamped(&[1.0, 2.0], &[10.0, 20.0], 1.5), 15.0);
    }
}
