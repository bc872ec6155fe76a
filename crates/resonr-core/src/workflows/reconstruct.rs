use tracing::{info, instrument, warn};

use crate::core::models::cross_section::CrossSection;
use crate::core::models::range::EnergyRange;
use crate::core::models::table::{InterpolationLaw, LawRegion, TabulatedCrossSections};
use crate::engine::config::ReconstructionConfig;
use crate::engine::error::EngineError;
use crate::engine::formalisms;
use crate::engine::linearize::linearize_cross_sections;
use crate::engine::progress::{Progress, ProgressReporter};

#[derive(Debug, Clone)]
pub struct ReconstructionResult {
    /// Linearized pointwise cross sections over the union of the input
    /// ranges, in energy order.
    pub cross_sections: TabulatedCrossSections,
    /// Points contributed by each input range, in evaluation order.
    pub points_per_range: Vec<usize>,
}

impl ReconstructionResult {
    fn empty() -> Self {
        Self {
            cross_sections: TabulatedCrossSections::empty(),
            points_per_range: Vec::new(),
        }
    }
}

/// Reconstructs the pointwise cross section over every supplied energy range
/// and linearizes it to the configured tolerance.
///
/// Degenerate input (no ranges) yields an empty result. A numeric failure
/// during linearization also yields an empty result after a diagnostic, so
/// callers can skip the dataset; structural failures (unsupported formalism,
/// missing parameters) propagate as errors.
#[instrument(skip_all, name = "reconstruction_workflow")]
pub fn run(
    ranges: &[EnergyRange],
    config: &ReconstructionConfig,
    reporter: &ProgressReporter,
) -> Result<ReconstructionResult, EngineError> {
    if ranges.is_empty() {
        info!("No reconstructable energy ranges; returning an empty cross-section table.");
        return Ok(ReconstructionResult::empty());
    }

    reporter.report(Progress::PhaseStart {
        name: "Reconstruction",
    });
    info!(ranges = ranges.len(), "Starting resonance reconstruction.");

    let mut ordered: Vec<&EnergyRange> = ranges.iter().collect();
    ordered.sort_by(|a, b| {
        a.lower_ev
            .partial_cmp(&b.lower_ev)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut points: Vec<(f64, CrossSection)> = Vec::new();
    let mut points_per_range = Vec::with_capacity(ordered.len());
    for range in ordered {
        reporter.report(Progress::RangeStart {
            lower_ev: range.lower_ev,
            upper_ev: range.upper_ev,
        });

        let base = points.len();
        let oracle = |energy: f64| formalisms::evaluate(range, energy);
        let range_points = match linearize_cross_sections(
            oracle,
            range.lower_ev,
            range.upper_ev,
            config.tolerance,
            config.zero_floor,
            |count| {
                if count % config.milestone_interval == 0 {
                    reporter.report(Progress::PointMilestone {
                        points: base + count,
                    });
                }
            },
        ) {
            Ok(range_points) => range_points,
            Err(EngineError::Numeric { context, x }) => {
                warn!(
                    context,
                    x, "Numeric failure during linearization; skipping this dataset."
                );
                reporter.report(Progress::PhaseFinish);
                return Ok(ReconstructionResult::empty());
            }
            Err(other) => return Err(other),
        };

        let added = stitch(&mut points, range_points, config.zero_floor);
        points_per_range.push(added);
        reporter.report(Progress::RangeFinish { points: added });
    }

    let laws = vec![LawRegion::new(InterpolationLaw::LinLin, points.len())];
    let cross_sections = TabulatedCrossSections::new(points, laws);
    cross_sections.validate()?;

    info!(
        points = cross_sections.len(),
        "Reconstruction complete."
    );
    reporter.report(Progress::PhaseFinish);

    Ok(ReconstructionResult {
        cross_sections,
        points_per_range,
    })
}

/// Appends one range's points, dropping a leading point that duplicates the
/// previous range's upper boundary. Returns the number of points added.
fn stitch(
    points: &mut Vec<(f64, CrossSection)>,
    mut range_points: Vec<(f64, CrossSection)>,
    zero_floor: f64,
) -> usize {
    if let (Some(&(last_x, last_xs)), Some(&(first_x, first_xs))) =
        (points.last(), range_points.first())
    {
        let same_value = last_xs
            .channels()
            .iter()
            .zip(first_xs.channels())
            .all(|(&a, b)| (a - b).abs() <= zero_floor);
        if last_x == first_x && same_value {
            range_points.remove(0);
        }
    }
    let added = range_points.len();
    points.extend(range_points);
    added
}
