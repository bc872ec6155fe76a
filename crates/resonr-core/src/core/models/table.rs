use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum TabulationError {
    #[error("Unrecognized interpolation-law code: {0}")]
    UnrecognizedLawCode(u32),

    #[error("Point abscissae must be non-decreasing (violated at index {index})")]
    NonMonotonicX { index: usize },

    #[error("A non-empty table requires at least one law region")]
    MissingLaws,

    #[error("Final law boundary {boundary} does not equal the point count {points}")]
    BoundaryMismatch { boundary: usize, points: usize },
}

/// Interpolation rule between two adjacent tabulated points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterpolationLaw {
    /// Constant, equal to the left point.
    Histogram,
    /// `y` linear in `x`.
    LinLin,
    /// `y` linear in `ln x`.
    LinLog,
    /// `ln y` linear in `x`.
    LogLin,
    /// `ln y` linear in `ln x`.
    LogLog,
}

impl InterpolationLaw {
    /// Maps an evaluated-file law code onto the closed law set. Codes in the
    /// 11-15 and 21-25 bands carry method qualifiers on top of the base law
    /// and reduce to it here; anything else is rejected.
    pub fn from_code(code: u32) -> Result<Self, TabulationError> {
        let base = match code {
            1..=5 => code,
            11..=15 => code - 10,
            21..=25 => code - 20,
            _ => return Err(TabulationError::UnrecognizedLawCode(code)),
        };
        Ok(match base {
            1 => Self::Histogram,
            2 => Self::LinLin,
            3 => Self::LinLog,
            4 => Self::LogLin,
            _ => Self::LogLog,
        })
    }

    /// Interpolates between `(x1, y1)` and `(x2, y2)` at `x`.
    ///
    /// Log-domain violations (non-positive `x` or `y` under a log law) are not
    /// screened here; they surface as non-finite values for the caller's
    /// numeric checks.
    pub fn interpolate(&self, x: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
        if x1 == x2 {
            return y1;
        }
        match self {
            Self::Histogram => y1,
            Self::LinLin => y1 + (y2 - y1) * (x - x1) / (x2 - x1),
            Self::LinLog => y1 + (y2 - y1) * (x / x1).ln() / (x2 / x1).ln(),
            Self::LogLin => y1 * ((x - x1) / (x2 - x1) * (y2 / y1).ln()).exp(),
            Self::LogLog => y1 * ((x / x1).ln() / (x2 / x1).ln() * (y2 / y1).ln()).exp(),
        }
    }

    /// True for the laws the linearizer must refine by bisection.
    #[inline]
    pub fn needs_refinement(&self) -> bool {
        matches!(self, Self::LinLog | Self::LogLin | Self::LogLog)
    }
}

/// One contiguous interpolation region: `law` applies up to and including
/// point index `boundary - 1` (the boundary is a 1-based point count, so the
/// final region's boundary equals the table length).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LawRegion {
    pub law: InterpolationLaw,
    pub boundary: usize,
}

impl LawRegion {
    pub fn new(law: InterpolationLaw, boundary: usize) -> Self {
        Self { law, boundary }
    }
}

/// An ordered piecewise-tabulated function over scalar or vector values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tabulated<V> {
    pub points: Vec<(f64, V)>,
    pub laws: Vec<LawRegion>,
}

pub type TabulatedFunction = Tabulated<f64>;
pub type TabulatedCrossSections = Tabulated<super::cross_section::CrossSection>;

impl<V> Tabulated<V> {
    pub fn new(points: Vec<(f64, V)>, laws: Vec<LawRegion>) -> Self {
        Self { points, laws }
    }

    /// The canonical degenerate result: no points, no laws.
    pub fn empty() -> Self {
        Self {
            points: Vec::new(),
            laws: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Checks the structural invariants: non-decreasing abscissae (exact
    /// duplicates are legal only as materialized steps) and a law list whose
    /// final boundary covers the whole point sequence.
    pub fn validate(&self) -> Result<(), TabulationError> {
        for (i, pair) in self.points.windows(2).enumerate() {
            if pair[1].0 < pair[0].0 {
                return Err(TabulationError::NonMonotonicX { index: i + 1 });
            }
        }
        if self.points.is_empty() {
            return Ok(());
        }
        let last = match self.laws.last() {
            Some(region) => region.boundary,
            None => return Err(TabulationError::MissingLaws),
        };
        if last != self.points.len() {
            return Err(TabulationError::BoundaryMismatch {
                boundary: last,
                points: self.points.len(),
            });
        }
        Ok(())
    }

    /// The interpolation law governing the segment that starts at point
    /// `index` (i.e. the segment `[index, index + 1]`).
    pub fn law_for_segment(&self, index: usize) -> Option<InterpolationLaw> {
        self.laws
            .iter()
            .find(|region| index + 1 < region.boundary)
            .or(self.laws.last())
            .map(|region| region.law)
    }
}

impl Tabulated<f64> {
    /// Evaluates the table at `x` under its declared laws. `None` outside the
    /// tabulated domain.
    pub fn evaluate(&self, x: f64) -> Option<f64> {
        let first = self.points.first()?;
        let last = self.points.last()?;
        if x < first.0 || x > last.0 {
            return None;
        }
        let idx = match self
            .points
            .binary_search_by(|probe| probe.0.partial_cmp(&x).expect("ordered abscissae"))
        {
            Ok(exact) => return Some(self.points[exact].1),
            Err(insertion) => insertion - 1,
        };
        let (x1, y1) = self.points[idx];
        let (x2, y2) = self.points[idx + 1];
        let law = self.law_for_segment(idx)?;
        Some(law.interpolate(x, x1, y1, x2, y2))
    }
}
