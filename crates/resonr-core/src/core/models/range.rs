use super::resonance::AngularMomentumChannel;
use super::table::TabulatedFunction;
use serde::{Deserialize, Serialize};

/// Whether individual resonances are resolved in this energy interval or only
/// statistical averages of their parameters are known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RangeKind {
    Resolved,
    Unresolved,
}

/// The physics model parameterizing a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Formalism {
    SingleLevelBreitWigner,
    MultiLevelBreitWigner,
    ReichMoore,
    AdlerAdler,
    /// Average-parameter statistical model; only meaningful in the
    /// unresolved region.
    Statistical,
}

/// Scattering radius in units of 10⁻¹² cm, either constant over the range or
/// tabulated against energy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScatteringRadius {
    Constant(f64),
    EnergyDependent(TabulatedFunction),
}

impl ScatteringRadius {
    /// Radius at `energy_ev`. Energy-dependent tables are clamped to their
    /// end values outside the tabulated domain.
    pub fn value_at(&self, energy_ev: f64) -> f64 {
        match self {
            Self::Constant(radius) => *radius,
            Self::EnergyDependent(table) => {
                if let Some(radius) = table.evaluate(energy_ev) {
                    return radius;
                }
                match table.points.first() {
                    Some(&(first_e, first_r)) if energy_ev < first_e => first_r,
                    _ => table.points.last().map(|&(_, r)| r).unwrap_or(0.0),
                }
            }
        }
    }
}

/// One contiguous energy interval of an evaluation, with everything needed to
/// evaluate its cross section at a point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyRange {
    pub kind: RangeKind,
    pub formalism: Formalism,
    /// Interval bounds in eV.
    pub lower_ev: f64,
    pub upper_ev: f64,
    /// Target-nucleus spin `I`.
    pub target_spin: f64,
    pub scattering_radius: ScatteringRadius,
    /// When set, penetrabilities and level shifts use the mass-computed
    /// channel radius instead of the scattering radius. The hard-sphere
    /// phase shift always uses the scattering radius.
    pub channel_radius_from_mass: bool,
    pub channels: Vec<AngularMomentumChannel>,
}

impl EnergyRange {
    #[inline]
    pub fn is_resolved(&self) -> bool {
        self.kind == RangeKind::Resolved
    }

    #[inline]
    pub fn contains(&self, energy_ev: f64) -> bool {
        energy_ev >= self.lower_ev && energy_ev <= self.upper_ev
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::table::{InterpolationLaw, LawRegion};

    #[test]
    fn constant_radius_ignores_energy() {
        let radius = ScatteringRadius::Constant(0.54);
        assert_eq!(radius.value_at(1.0), 0.54);
        assert_eq!(radius.value_at(1e6), 0.54);
    }

    #[test]
    fn energy_dependent_radius_interpolates_inside_its_domain() {
        let radius = ScatteringRadius::EnergyDependent(TabulatedFunction::new(
            vec![(1.0, 0.4), (3.0, 0.8)],
            vec![LawRegion::new(InterpolationLaw::LinLin, 2)],
        ));
        assert_eq!(radius.value_at(2.0), 0.6000000000000001);
    }

    #[test]
    fn energy_dependent_radius_clamps_outside_its_domain() {
        let radius = ScatteringRadius::EnergyDependent(TabulatedFunction::new(
            vec![(1.0, 0.4), (3.0, 0.8)],
            vec![LawRegion::new(InterpolationLaw::LinLin, 2)],
        ));
        assert_eq!(radius.value_at(0.1), 0.4);
        assert_eq!(radius.value_at(10.0), 0.8);
    }

    #[test]
    fn contains_is_inclusive_at_both_bounds() {
        let range = EnergyRange {
            kind: RangeKind::Resolved,
            formalism: Formalism::SingleLevelBreitWigner,
            lower_ev: 1e-5,
            upper_ev: 500.0,
            target_spin: 0.5,
            scattering_radius: ScatteringRadius::Constant(0.5),
            channel_radius_from_mass: false,
            channels: Vec::new(),
        };
        assert!(range.contains(1e-5));
        assert!(range.contains(500.0));
        assert!(!range.contains(500.1));
    }
}
