use nalgebra::DMatrix;
use thiserror::Error;

/// Inversion failure: an exactly-zero pivot was encountered. Callers decide
/// whether this is fatal; the Reich-Moore evaluator treats it as a
/// zero-contribution spin group.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Matrix is singular: encountered an exactly-zero pivot")]
pub struct Singular;

/// Inverts a symmetric matrix in place by pivot sweeps, exploiting symmetry:
/// only the upper triangle is eliminated and every update is mirrored into
/// the lower triangle. A zero pivot fails with [`Singular`].
pub fn invert_symmetric(matrix: &DMatrix<f64>) -> Result<DMatrix<f64>, Singular> {
    let n = matrix.nrows();
    debug_assert_eq!(n, matrix.ncols(), "symmetric inversion requires a square matrix");
    let mut a = matrix.clone();

    for k in 0..n {
        let pivot = a[(k, k)];
        if pivot == 0.0 {
            return Err(Singular);
        }

        // Sweep the block outside row/column k first; it only reads the
        // still-unmodified pivot row and column.
        for i in 0..n {
            if i == k {
                continue;
            }
            for j in i..n {
                if j == k {
                    continue;
                }
                let value = a[(i, j)] - a[(i, k)] * a[(k, j)] / pivot;
                a[(i, j)] = value;
                a[(j, i)] = value;
            }
        }
        for i in 0..n {
            if i != k {
                let value = a[(i, k)] / pivot;
                a[(i, k)] = value;
                a[(k, i)] = value;
            }
        }
        a[(k, k)] = -1.0 / pivot;
    }

    // A full set of sweeps yields -A⁻¹.
    Ok(-a)
}

/// Dense matrix product, the building block of the complex inversion.
#[inline]
pub fn multiply(a: &DMatrix<f64>, b: &DMatrix<f64>) -> DMatrix<f64> {
    a * b
}

/// Inverts the complex symmetric matrix `A + iB` by the Frobenius-Schur
/// method: invert the real part, invert the Schur complement
/// `A + B·A⁻¹·B`, then back-substitute the imaginary part. Returns the real
/// and imaginary parts of the inverse.
pub fn invert_complex_symmetric(
    real: &DMatrix<f64>,
    imag: &DMatrix<f64>,
) -> Result<(DMatrix<f64>, DMatrix<f64>), Singular> {
    let real_inv = invert_symmetric(real)?;
    let schur = real + multiply(imag, &multiply(&real_inv, imag));
    let inverse_real = invert_symmetric(&schur)?;
    let inverse_imag = -multiply(&real_inv, &multiply(imag, &inverse_real));
    Ok((inverse_real, inverse_imag))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn random_well_conditioned(n: usize) -> DMatrix<f64> {
        let mut rng = rand::thread_rng();
        let mut m = DMatrix::zeros(n, n);
        for i in 0..n {
            for j in i..n {
                let value = rng.gen_range(-1.0..1.0);
                m[(i, j)] = value;
                m[(j, i)] = value;
            }
            // Diagonal dominance keeps the matrix comfortably invertible.
            m[(i, i)] += n as f64 + 1.0;
        }
        m
    }

    fn max_abs_diff(a: &DMatrix<f64>, b: &DMatrix<f64>) -> f64 {
        (a - b).abs().max()
    }

    #[test]
    fn inverse_times_original_is_identity_for_sizes_one_through_five() {
        for n in 1..=5 {
            let m = random_well_conditioned(n);
            let inverse = invert_symmetric(&m).unwrap();
            let product = multiply(&inverse, &m);
            let identity = DMatrix::identity(n, n);
            assert!(
                max_abs_diff(&product, &identity) < 1e-10,
                "inversion failed for n = {n}"
            );
        }
    }

    #[test]
    fn inverse_of_symmetric_matrix_is_symmetric() {
        let m = random_well_conditioned(4);
        let inverse = invert_symmetric(&m).unwrap();
        assert!(max_abs_diff(&inverse, &inverse.transpose()) < 1e-12);
    }

    #[test]
    fn known_two_by_two_inverse() {
        let m = DMatrix::from_row_slice(2, 2, &[2.0, 1.0, 1.0, 2.0]);
        let inverse = invert_symmetric(&m).unwrap();
        let expected =
            DMatrix::from_row_slice(2, 2, &[2.0 / 3.0, -1.0 / 3.0, -1.0 / 3.0, 2.0 / 3.0]);
        assert!(max_abs_diff(&inverse, &expected) < 1e-14);
    }

    #[test]
    fn singular_matrix_with_zero_row_is_rejected() {
        let m = DMatrix::from_row_slice(3, 3, &[1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0]);
        assert_eq!(invert_symmetric(&m), Err(Singular));
    }

    #[test]
    fn zero_matrix_is_rejected() {
        let m = DMatrix::zeros(2, 2);
        assert_eq!(invert_symmetric(&m), Err(Singular));
    }

    #[test]
    fn multiply_computes_the_dense_product() {
        let a = DMatrix::from_row_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let b = DMatrix::from_row_slice(2, 2, &[5.0, 6.0, 7.0, 8.0]);
        let product = multiply(&a, &b);
        let expected = DMatrix::from_row_slice(2, 2, &[19.0, 22.0, 43.0, 50.0]);
        assert!(max_abs_diff(&product, &expected) < 1e-14);
    }

    #[test]
    fn complex_inverse_reproduces_the_identity() {
        let real = DMatrix::from_row_slice(3, 3, &[4.0, 1.0, 0.5, 1.0, 3.0, 0.2, 0.5, 0.2, 5.0]);
        let imag = DMatrix::from_row_slice(3, 3, &[0.3, 0.1, 0.0, 0.1, 0.4, 0.2, 0.0, 0.2, 0.1]);
        let (g, h) = invert_complex_symmetric(&real, &imag).unwrap();

        // (A + iB)(G + iH) = (AG - BH) + i(AH + BG) must be I + 0i.
        let product_real = multiply(&real, &g) - multiply(&imag, &h);
        let product_imag = multiply(&real, &h) + multiply(&imag, &g);
        assert!(max_abs_diff(&product_real, &DMatrix::identity(3, 3)) < 1e-12);
        assert!(max_abs_diff(&product_imag, &DMatrix::zeros(3, 3)) < 1e-12);
    }

    #[test]
    fn complex_inverse_with_zero_imaginary_part_matches_real_inverse() {
        let real = random_well_conditioned(3);
        let imag = DMatrix::zeros(3, 3);
        let (g, h) = invert_complex_symmetric(&real, &imag).unwrap();
        let expected = invert_symmetric(&real).unwrap();
        assert!(max_abs_diff(&g, &expected) < 1e-12);
        assert!(max_abs_diff(&h, &DMatrix::zeros(3, 3)) < 1e-12);
    }

    #[test]
    fn complex_inverse_with_singular_real_part_is_rejected() {
        let real = DMatrix::zeros(2, 2);
        let imag = DMatrix::identity(2, 2);
        assert_eq!(invert_complex_symmetric(&real, &imag), Err(Singular));
    }
}
