use serde::{Deserialize, Serialize};

/// All resonance data attached to one orbital angular momentum `l`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AngularMomentumChannel {
    pub l: u32,
    /// Ratio of the target mass to the neutron mass (AWRI).
    pub mass_ratio: f64,
    /// Q-value of the competitive reaction channel, if one is open [eV].
    pub competitive_q_value: Option<f64>,
    pub tables: ChannelTables,
}

/// The mutually exclusive parameter sets a channel can carry. Exactly one
/// kind exists per channel; the formalism tag on the enclosing range selects
/// how it is evaluated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChannelTables {
    BreitWigner(Vec<BreitWignerResonance>),
    ReichMoore(Vec<ReichMooreResonance>),
    AdlerAdler(AdlerAdlerTables),
    Unresolved(UnresolvedTables),
}

/// Single- or multi-level Breit-Wigner resonance record. Widths in eV,
/// evaluated at the resonance energy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BreitWignerResonance {
    /// Resonance energy [eV]; bound levels carry a negative value.
    pub energy: f64,
    /// Total angular momentum `J`.
    pub spin: f64,
    pub neutron_width: f64,
    pub radiative_width: f64,
    pub fission_width: f64,
    /// Width of the competitive channel; zero when closed.
    pub competitive_width: f64,
}

impl BreitWignerResonance {
    /// Total width at the resonance energy.
    #[inline]
    pub fn total_width(&self) -> f64 {
        self.neutron_width + self.radiative_width + self.fission_width + self.competitive_width
    }
}

/// Reich-Moore resonance record. The two fission widths are signed squared
/// amplitudes: a negative value means a negative reduced-amplitude sign.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReichMooreResonance {
    pub energy: f64,
    pub spin: f64,
    pub neutron_width: f64,
    pub radiative_width: f64,
    pub fission_width_a: f64,
    pub fission_width_b: f64,
}

/// One reaction's Adler-Adler resonance coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdlerCoefficients {
    /// Resonance energy ν [eV].
    pub energy: f64,
    /// Half-width μ [eV].
    pub half_width: f64,
    /// Symmetric amplitude G.
    pub symmetric: f64,
    /// Antisymmetric amplitude H.
    pub asymmetric: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdlerAdlerResonance {
    pub total: AdlerCoefficients,
    pub fission: Option<AdlerCoefficients>,
    pub capture: AdlerCoefficients,
}

/// Rational background coefficients, one set per reaction:
/// `A1 + A2/E + A3/E² + A4/E³ + B1·E + B2·E²`. At least the four `A`
/// coefficients must be present for a set to be usable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdlerBackground {
    pub total: Vec<f64>,
    pub fission: Option<Vec<f64>>,
    pub capture: Option<Vec<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdlerAdlerTables {
    pub background: AdlerBackground,
    pub resonances: Vec<AdlerAdlerResonance>,
}

/// Unresolved-region statistical tables. The three kinds differ in how much
/// of the average-parameter set is tabulated against energy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UnresolvedTables {
    /// All averages energy-independent; no fission channel.
    EnergyIndependent(Vec<UrrSpinGroup>),
    /// Average fission widths tabulated per level on a grid shared by every
    /// spin group; all other averages energy-independent.
    TabulatedFission {
        energies: Vec<f64>,
        groups: Vec<UrrFissionGroup>,
    },
    /// Every average parameter tabulated against its own per-group grid.
    FullyTabulated(Vec<UrrTabulatedGroup>),
}

/// Energy-independent average parameters for one `(l, J)` spin group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrrSpinGroup {
    pub spin: f64,
    /// Average level spacing D̄ [eV].
    pub spacing: f64,
    /// Porter-Thomas degrees of freedom for the neutron width.
    pub neutron_dof: f64,
    /// Reduced average neutron width Γn⁰ [eV].
    pub reduced_neutron_width: f64,
    pub radiative_width: f64,
}

/// Spin group with fission widths tabulated on the shared energy grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrrFissionGroup {
    pub spin: f64,
    pub spacing: f64,
    pub neutron_dof: f64,
    pub fission_dof: f64,
    pub reduced_neutron_width: f64,
    pub radiative_width: f64,
    /// One average fission width per entry of the shared grid.
    pub fission_widths: Vec<f64>,
}

/// Spin group with fully energy-tabulated averages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrrTabulatedGroup {
    pub spin: f64,
    pub neutron_dof: f64,
    pub fission_dof: f64,
    pub competitive_dof: f64,
    pub rows: Vec<UrrRow>,
}

/// One tabulated energy row of a fully-tabulated spin group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UrrRow {
    pub energy: f64,
    pub spacing: f64,
    pub reduced_neutron_width: f64,
    pub radiative_width: f64,
    pub fission_width: f64,
    pub competitive_width: f64,
}
