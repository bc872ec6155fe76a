use thiserror::Error;

/// Abscissae of the fixed 10-point quadratures over chi-squared width
/// distributions with 1 to 4 degrees of freedom (row index = dof - 1).
const ABSCISSAE: [[f64; 10]; 4] = [
    [
        3.0013465e-3,
        7.8592886e-2,
        4.3282415e-1,
        1.3345267e0,
        3.0481846e0,
        5.8263198e0,
        9.9452656e0,
        1.5782128e1,
        2.3996824e1,
        3.6216208e1,
    ],
    [
        1.3219203e-2,
        7.2349624e-2,
        1.9089473e-1,
        3.9528842e-1,
        7.4083443e-1,
        1.3498293e0,
        2.5297983e0,
        5.2384894e0,
        1.3821772e1,
        7.5647525e1,
    ],
    [
        1.0004488e-3,
        2.6197629e-2,
        1.4427472e-1,
        4.4484223e-1,
        1.0160615e0,
        1.9421066e0,
        3.3150885e0,
        5.2607093e0,
        7.9989413e0,
        1.2072069e1,
    ],
    [
        6.6096015e-3,
        3.6174812e-2,
        9.5447365e-2,
        1.9764421e-1,
        3.7041722e-1,
        6.7491465e-1,
        1.2648992e0,
        2.6192447e0,
        6.9108860e0,
        3.7823763e1,
    ],
];

/// Weights matching [`ABSCISSAE`]; each row is normalized to unit mass and
/// unit mean.
const WEIGHTS: [[f64; 10]; 4] = [
    [
        1.1120413e-1,
        2.3546798e-1,
        2.8440987e-1,
        2.2419127e-1,
        1.0967668e-1,
        3.0493789e-2,
        4.2930874e-3,
        1.9741736e-4,
        1.4844093e-6,
        4.0314842e-10,
    ],
    [
        3.3773418e-2,
        7.9932171e-2,
        1.2835937e-1,
        1.7652616e-1,
        2.1347043e-1,
        2.1154965e-1,
        1.3365186e-1,
        2.2630659e-2,
        1.6313638e-5,
        2.7453430e-31,
    ],
    [
        3.3376336e-4,
        1.8506216e-2,
        1.2309933e-1,
        2.9918935e-1,
        3.3431470e-1,
        1.7766587e-1,
        4.2695880e-2,
        3.1156781e-3,
        3.5622418e-5,
        1.4600472e-8,
    ],
    [
        4.4648157e-4,
        5.7830864e-3,
        2.4503126e-2,
        6.9780001e-2,
        1.5814697e-1,
        2.8556137e-1,
        3.3811225e-1,
        1.1855043e-1,
        2.2547207e-4,
        2.0768533e-29,
    ],
];

#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("Porter-Thomas degrees of freedom {0} lie outside the tabulated set 1..=4")]
pub struct InvalidDegreesOfFreedom(pub f64);

/// Average partial widths of one unresolved spin group, already scaled to
/// the evaluation energy.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AverageWidths {
    pub neutron: f64,
    pub radiative: f64,
    pub fission: f64,
    pub competitive: f64,
}

/// The reaction whose width-fluctuation average is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FluctuationReaction {
    Elastic,
    Fission,
    Capture,
}

fn table_row(dof: f64) -> Result<&'static [f64; 10], InvalidDegreesOfFreedom> {
    let rounded = dof.round();
    if (dof - rounded).abs() > 1e-6 || !(1.0..=4.0).contains(&rounded) {
        return Err(InvalidDegreesOfFreedom(dof));
    }
    Ok(&ABSCISSAE[rounded as usize - 1])
}

fn weight_row(dof: f64) -> Result<&'static [f64; 10], InvalidDegreesOfFreedom> {
    let rounded = dof.round();
    if (dof - rounded).abs() > 1e-6 || !(1.0..=4.0).contains(&rounded) {
        return Err(InvalidDegreesOfFreedom(dof));
    }
    Ok(&WEIGHTS[rounded as usize - 1])
}

/// Porter-Thomas width-fluctuation average
/// `⟨ tΓn · X / (tΓn + Γγ + uΓf + vΓx) ⟩` over the chi-squared
/// distributions of the fluctuating widths, where `X` is `tΓn`, `uΓf`, or
/// `Γγ` depending on the requested reaction.
///
/// The radiative width has many contributing channels and does not
/// fluctuate. Distributions over closed channels (zero average width)
/// collapse to a single unit node, so the nominal triple quadrature reduces
/// to one or two nested sums in the common cases.
pub fn fluctuation_average(
    widths: &AverageWidths,
    neutron_dof: f64,
    fission_dof: f64,
    competitive_dof: f64,
    reaction: FluctuationReaction,
) -> Result<f64, InvalidDegreesOfFreedom> {
    if widths.neutron <= 0.0 {
        return Ok(0.0);
    }
    if reaction == FluctuationReaction::Fission && widths.fission <= 0.0 {
        return Ok(0.0);
    }

    // A closed channel collapses its quadrature dimension to one unit node.
    static UNIT: [f64; 1] = [1.0];

    let (neutron_nodes, neutron_weights): (&[f64], &[f64]) =
        (table_row(neutron_dof)?, weight_row(neutron_dof)?);
    let (fission_nodes, fission_weights): (&[f64], &[f64]) = if widths.fission > 0.0 {
        (table_row(fission_dof)?, weight_row(fission_dof)?)
    } else {
        (&UNIT, &UNIT)
    };
    let (competitive_nodes, competitive_weights): (&[f64], &[f64]) = if widths.competitive > 0.0 {
        (table_row(competitive_dof)?, weight_row(competitive_dof)?)
    } else {
        (&UNIT, &UNIT)
    };

    let mut average = 0.0;
    for (tn, wn) in neutron_nodes.iter().zip(neutron_weights) {
        let gn = tn * widths.neutron;
        for (tf, wf) in fission_nodes.iter().zip(fission_weights) {
            let gf = tf * widths.fission;
            for (tx, wx) in competitive_nodes.iter().zip(competitive_weights) {
                let sum = gn + widths.radiative + gf + tx * widths.competitive;
                if sum <= 0.0 {
                    continue;
                }
                let numerator = match reaction {
                    FluctuationReaction::Elastic => gn * gn,
                    FluctuationReaction::Fission => gn * gf,
                    FluctuationReaction::Capture => gn * widths.radiative,
                };
                average += wn * wf * wx * numerator / sum;
            }
        }
    }
    Ok(average)
}
