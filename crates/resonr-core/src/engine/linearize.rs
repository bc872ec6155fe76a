//! Adaptive linearization: conversion of evaluable functions and mixed-law
//! tables into piecewise-linear point sets accurate within a relative
//! tolerance.
//!
//! Refinement is an iterative bisection over an explicit worklist stack, not
//! recursion: the stack holds pending right endpoints, the top interval is
//! tested at its midpoint against the straight line through its endpoints,
//! and failing intervals are halved by pushing the midpoint. Every push
//! strictly shrinks an interval, so termination is guaranteed; an interval
//! whose midpoint is no longer representable between its endpoints is
//! accepted as converged.

use super::error::EngineError;
use crate::core::models::cross_section::CrossSection;
use crate::core::models::table::{InterpolationLaw, LawRegion, TabulatedFunction};

/// Linearizes an arbitrary scalar function on `[lower, upper]` to the given
/// relative tolerance. Values at or below `zero_floor` in magnitude are
/// treated as zero.
pub fn linearize_function<F>(
    f: F,
    lower: f64,
    upper: f64,
    tolerance: f64,
    zero_floor: f64,
) -> Result<TabulatedFunction, EngineError>
where
    F: Fn(f64) -> f64,
{
    if !(upper > lower) {
        return Ok(TabulatedFunction::empty());
    }
    let y_lower = checked_eval(&f, lower)?;
    let mut points = vec![(lower, y_lower)];
    refine_segment(&f, (upper, checked_eval(&f, upper)?), tolerance, zero_floor, &mut points)?;
    finalize(points, zero_floor)
}

/// Linearizes a tabulated function under its declared interpolation laws.
///
/// Histogram regions are materialized exactly as repeated-abscissa steps and
/// lin-lin regions are copied verbatim; only log-involving regions are
/// refined by bisection against the declared law.
pub fn linearize_table(
    table: &TabulatedFunction,
    tolerance: f64,
    zero_floor: f64,
) -> Result<TabulatedFunction, EngineError> {
    table.validate()?;
    if table.len() < 2 {
        return Ok(table.clone());
    }

    let mut points: Vec<(f64, f64)> = Vec::with_capacity(table.len());
    let mut start = 0usize;
    for region in &table.laws {
        let last_segment = region.boundary.saturating_sub(1);
        for segment in start..last_segment {
            let (x1, y1) = table.points[segment];
            let (x2, y2) = table.points[segment + 1];
            push_point(&mut points, (x1, y1));
            match region.law {
                InterpolationLaw::Histogram => {
                    // Materialize the step: hold y1 up to x2; the next
                    // segment contributes the riser point (x2, y2).
                    push_point(&mut points, (x2, y1));
                }
                InterpolationLaw::LinLin => {}
                law => {
                    let oracle = |x: f64| law.interpolate(x, x1, y1, x2, y2);
                    refine_segment(&oracle, (x2, y2), tolerance, zero_floor, &mut points)?;
                    points.pop();
                }
            }
        }
        start = last_segment;
    }
    push_point(&mut points, *table.points.last().expect("non-empty table"));
    finalize(points, zero_floor)
}

/// Linearizes a cross-section-valued function on `[lower, upper]`. An
/// interval is accepted only when every reaction channel independently
/// satisfies the floor-or-tolerance test. `on_point` observes the running
/// point count after each accepted point.
pub fn linearize_cross_sections<F, P>(
    f: F,
    lower: f64,
    upper: f64,
    tolerance: f64,
    zero_floor: f64,
    mut on_point: P,
) -> Result<Vec<(f64, CrossSection)>, EngineError>
where
    F: Fn(f64) -> Result<CrossSection, EngineError>,
    P: FnMut(usize),
{
    if !(upper > lower) {
        return Ok(Vec::new());
    }
    let first = checked_eval_xs(&f, lower)?;
    let last = checked_eval_xs(&f, upper)?;

    let mut points = vec![(lower, first)];
    let mut stack = vec![(upper, last)];
    let mut current = (lower, first);

    while let Some(&(top_x, top_y)) = stack.last() {
        let mid = 0.5 * (current.0 + top_x);
        if !(mid > current.0 && mid < top_x) {
            current = stack.pop().expect("stack is non-empty");
            points.push(current);
            on_point(points.len());
            continue;
        }

        let exact = checked_eval_xs(&f, mid)?;
        let fraction = (mid - current.0) / (top_x - current.0);
        let accepted = current
            .1
            .channels()
            .iter()
            .zip(top_y.channels())
            .zip(exact.channels())
            .all(|((&y1, y2), value)| {
                let approx = y1 + (y2 - y1) * fraction;
                channel_converged(y1, y2, value, approx, tolerance, zero_floor)
            });

        if accepted {
            current = stack.pop().expect("stack is non-empty");
            points.push(current);
            on_point(points.len());
        } else {
            stack.push((mid, exact));
        }
    }

    Ok(snap_cross_sections(points, zero_floor))
}

fn checked_eval<F: Fn(f64) -> f64>(f: &F, x: f64) -> Result<f64, EngineError> {
    let y = f(x);
    if y.is_finite() {
        Ok(y)
    } else {
        Err(EngineError::Numeric {
            context: "linearization",
            x,
        })
    }
}

fn checked_eval_xs<F>(f: &F, x: f64) -> Result<CrossSection, EngineError>
where
    F: Fn(f64) -> Result<CrossSection, EngineError>,
{
    let xs = f(x)?;
    if xs.is_finite() {
        Ok(xs)
    } else {
        Err(EngineError::Numeric {
            context: "cross-section linearization",
            x,
        })
    }
}

#[inline]
fn channel_converged(
    y1: f64,
    y2: f64,
    exact: f64,
    approx: f64,
    tolerance: f64,
    zero_floor: f64,
) -> bool {
    if y1.abs().max(y2.abs()) <= zero_floor {
        return true;
    }
    let deviation = (exact - approx).abs();
    deviation <= tolerance * exact.abs() || deviation <= zero_floor
}

/// Bisects `(points.last(), end)` until every subinterval passes the
/// floor-or-tolerance test, appending accepted points (including `end`).
pub(crate) fn refine_segment<F>(
    f: &F,
    end: (f64, f64),
    tolerance: f64,
    zero_floor: f64,
    points: &mut Vec<(f64, f64)>,
) -> Result<(), EngineError>
where
    F: Fn(f64) -> f64,
{
    let mut current = *points.last().expect("refinement requires a left endpoint");
    let mut stack = vec![end];

    while let Some(&(top_x, top_y)) = stack.last() {
        let mid = 0.5 * (current.0 + top_x);
        if !(mid > current.0 && mid < top_x) {
            current = stack.pop().expect("stack is non-empty");
            points.push(current);
            continue;
        }

        let exact = checked_eval(f, mid)?;
        let approx = current.1 + (top_y - current.1) * (mid - current.0) / (top_x - current.0);
        if !approx.is_finite() {
            return Err(EngineError::Numeric {
                context: "linearization",
                x: mid,
            });
        }

        if channel_converged(current.1, top_y, exact, approx, tolerance, zero_floor) {
            current = stack.pop().expect("stack is non-empty");
            points.push(current);
        } else {
            stack.push((mid, exact));
        }
    }
    Ok(())
}

fn push_point(points: &mut Vec<(f64, f64)>, point: (f64, f64)) {
    if points.last() != Some(&point) {
        points.push(point);
    }
}

/// Snaps values below the floor to exact zero and collapses duplicate-`x`
/// pairs whose values agree within the floor, then wraps the result as a
/// single lin-lin region.
pub(crate) fn finalize(
    points: Vec<(f64, f64)>,
    zero_floor: f64,
) -> Result<TabulatedFunction, EngineError> {
    let mut cleaned: Vec<(f64, f64)> = Vec::with_capacity(points.len());
    for (x, y) in points {
        let snapped = if y.abs() <= zero_floor { 0.0 } else { y };
        if let Some(&(last_x, last_y)) = cleaned.last() {
            if last_x == x && (last_y - snapped).abs() <= zero_floor {
                continue;
            }
        }
        cleaned.push((x, snapped));
    }
    let laws = vec![LawRegion::new(InterpolationLaw::LinLin, cleaned.len())];
    let result = TabulatedFunction::new(cleaned, laws);
    result.validate()?;
    Ok(result)
}

fn snap_cross_sections(
    points: Vec<(f64, CrossSection)>,
    zero_floor: f64,
) -> Vec<(f64, CrossSection)> {
    let snap = |v: f64| if v.abs() <= zero_floor { 0.0 } else { v };
    let mut cleaned: Vec<(f64, CrossSection)> = Vec::with_capacity(points.len());
    for (x, xs) in points {
        let snapped = CrossSection {
            total: snap(xs.total),
            elastic: snap(xs.elastic),
            fission: snap(xs.fission),
            capture: snap(xs.capture),
            potential: snap(xs.potential),
        };
        if let Some(&(last_x, last_xs)) = cleaned.last() {
            let close = last_xs
                .channels()
                .iter()
                .zip(snapped.channels())
                .all(|(&a, b)| (a - b).abs() <= zero_floor);
            if last_x == x && close {
                continue;
            }
        }
        cleaned.push((x, snapped));
    }
    cleaned
}
