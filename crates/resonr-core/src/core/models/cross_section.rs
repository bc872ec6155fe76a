use serde::Serialize;
use std::ops::{Add, AddAssign};

/// Point value of the reconstructed cross section, in barns.
///
/// `elastic` includes the potential-scattering part; `potential` reports that
/// part separately for diagnostics and the off-resonance limit.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CrossSection {
    pub total: f64,
    pub elastic: f64,
    pub fission: f64,
    pub capture: f64,
    pub potential: f64,
}

impl CrossSection {
    pub fn new(total: f64, elastic: f64, fission: f64, capture: f64, potential: f64) -> Self {
        Self {
            total,
            elastic,
            fission,
            capture,
            potential,
        }
    }

    /// Reaction channels compared during adaptive refinement, in a fixed order.
    /// The potential channel is informational and never drives refinement.
    #[inline]
    pub fn channels(&self) -> [f64; 4] {
        [self.total, self.elastic, self.fission, self.capture]
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.total.is_finite()
            && self.elastic.is_finite()
            && self.fission.is_finite()
            && self.capture.is_finite()
            && self.potential.is_finite()
    }
}

impl Add for CrossSection {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            total: self.total + rhs.total,
            elastic: self.elastic + rhs.elastic,
            fission: self.fission + rhs.fission,
            capture: self.capture + rhs.capture,
            potential: self.potential + rhs.potential,
        }
    }
}

impl AddAssign for CrossSection {
    fn add_assign(&mut self, rhs: Self) {
        self.total += rhs.total;
        self.elastic += rhs.elastic;
        self.fission += rhs.fission;
        self.capture += rhs.capture;
        self.potential += rhs.potential;
    }
}
