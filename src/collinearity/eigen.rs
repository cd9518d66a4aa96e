//! Condition indices and variance-decomposition proportions.

use std::fmt;

use faer::{Col, Mat};

use crate::error::DiagnosticsError;
use crate::model::OlsModel;

/// Eigenvalue decomposition of the scaled model matrix with condition indices
/// and variance-decomposition proportions.
///
/// Row j of the table describes one principal component of the column-scaled
/// model matrix `[1 | X]`: its eigenvalue, its condition index
/// `sqrt(λ_max / λ_j)`, and the share of each coefficient's variance
/// associated with that component. Each coefficient column of `proportions`
/// sums to one.
///
/// A condition index above 30 paired with two or more proportions above 0.5
/// in the same row is the usual reading for a damaging near-dependency.
#[derive(Debug, Clone)]
pub struct ConditionIndexTable {
    /// Coefficient labels: `intercept` followed by the predictor names.
    pub columns: Vec<String>,
    /// Eigenvalues of the scaled cross-product matrix, descending.
    pub eigenvalues: Col<f64>,
    /// Condition index of each component, ascending from 1.
    pub condition_indices: Col<f64>,
    /// Variance-decomposition proportions; `(j, k)` is the share of
    /// coefficient k attributed to component j.
    pub proportions: Mat<f64>,
}

impl fmt::Display for ConditionIndexTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.eigenvalues.nrows();

        writeln!(f, "Eigenvalues and Condition Indices")?;
        writeln!(f, "---------------------------------")?;
        write!(f, "{:>12}  {:>16}", "Eigenvalue", "Condition Index")?;
        for name in &self.columns {
            let w = name.len().max(9);
            write!(f, "  {name:>w$}")?;
        }
        writeln!(f)?;

        for j in 0..m {
            write!(
                f,
                "{:>12.4}  {:>16.4}",
                self.eigenvalues[j], self.condition_indices[j]
            )?;
            for (k, name) in self.columns.iter().enumerate() {
                let w = name.len().max(9);
                write!(f, "  {:>w$.4}", self.proportions[(j, k)])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Compute condition indices and variance-decomposition proportions.
///
/// The model matrix `[1 | X]` is scaled to unit column length and the
/// eigendecomposition of its cross-product is taken. Requires at least two
/// predictors.
pub fn eigen_condition_index(model: &OlsModel) -> Result<ConditionIndexTable, DiagnosticsError> {
    let p = model.n_predictors();
    if p < 2 {
        return Err(DiagnosticsError::NotEnoughPredictors { got: p });
    }

    let design = model.model_matrix();
    let n = design.nrows();
    let m = design.ncols();

    // Scale each column to unit length; the model matrix has full column
    // rank, so no column norm is zero.
    let mut scaled = Mat::zeros(n, m);
    for j in 0..m {
        let norm: f64 = (0..n).map(|i| design[(i, j)] * design[(i, j)]).sum::<f64>().sqrt();
        for i in 0..n {
            scaled[(i, j)] = design[(i, j)] / norm;
        }
    }

    let cross = scaled.transpose() * &scaled;
    let (eigenvalues, vectors) = symmetric_eigen(cross);

    let lam_max = eigenvalues[0];
    let condition_indices = Col::from_fn(m, |j| {
        if eigenvalues[j] > 0.0 {
            (lam_max / eigenvalues[j]).sqrt()
        } else {
            f64::INFINITY
        }
    });

    // Variance-decomposition proportions: for coefficient k the share of
    // component j is (v_kj² / λ_j) normalized over components.
    let mut proportions = Mat::zeros(m, m);
    for k in 0..m {
        let mut phi = vec![0.0; m];
        let mut total = 0.0;
        for j in 0..m {
            if eigenvalues[j] > 0.0 {
                phi[j] = vectors[(k, j)] * vectors[(k, j)] / eigenvalues[j];
                total += phi[j];
            }
        }
        for j in 0..m {
            proportions[(j, k)] = if total > 0.0 { phi[j] / total } else { f64::NAN };
        }
    }

    let mut columns = Vec::with_capacity(m);
    columns.push("intercept".to_string());
    columns.extend(model.predictor_names().iter().cloned());

    Ok(ConditionIndexTable {
        columns,
        eigenvalues,
        condition_indices,
        proportions,
    })
}

/// Eigendecomposition of a symmetric matrix by the cyclic Jacobi method.
///
/// Returns eigenvalues in descending order; column j of the returned matrix
/// is the eigenvector for eigenvalue j.
fn symmetric_eigen(mut a: Mat<f64>) -> (Col<f64>, Mat<f64>) {
    let m = a.nrows();
    let mut v = Mat::<f64>::identity(m, m);

    for _sweep in 0..50 {
        let mut off = 0.0;
        for i in 0..m {
            for j in (i + 1)..m {
                off += a[(i, j)] * a[(i, j)];
            }
        }
        if off <= 1e-28 {
            break;
        }

        for p in 0..m {
            for q in (p + 1)..m {
                let apq = a[(p, q)];
                if apq.abs() < 1e-30 {
                    continue;
                }

                // Rotation that zeroes a[(p, q)]
                let theta = (a[(q, q)] - a[(p, p)]) / (2.0 * apq);
                let t = if theta.abs() > 1e12 {
                    1.0 / (2.0 * theta)
                } else {
                    let sign = if theta >= 0.0 { 1.0 } else { -1.0 };
                    sign / (theta.abs() + (theta * theta + 1.0).sqrt())
                };
                let c = 1.0 / (t * t + 1.0).sqrt();
                let s = t * c;

                let app = a[(p, p)];
                let aqq = a[(q, q)];
                a[(p, p)] = app - t * apq;
                a[(q, q)] = aqq + t * apq;
                a[(p, q)] = 0.0;
                a[(q, p)] = 0.0;

                for k in 0..m {
                    if k != p && k != q {
                        let akp = a[(k, p)];
                        let akq = a[(k, q)];
                        a[(k, p)] = c * akp - s * akq;
                        a[(p, k)] = a[(k, p)];
                        a[(k, q)] = s * akp + c * akq;
                        a[(q, k)] = a[(k, q)];
                    }
                }

                for k in 0..m {
                    let vkp = v[(k, p)];
                    let vkq = v[(k, q)];
                    v[(k, p)] = c * vkp - s * vkq;
                    v[(k, q)] = s * vkp + c * vkq;
                }
            }
        }
    }

    let mut order: Vec<usize> = (0..m).collect();
    order.sort_by(|&i, &j| a[(j, j)].total_cmp(&a[(i, i)]));

    let eigenvalues = Col::from_fn(m, |j| a[(order[j], order[j])]);
    let vectors = Mat::from_fn(m, m, |i, j| v[(i, order[j])]);

    (eigenvalues, vectors)
}
