//! Variance inflation factors and tolerance.

use std::fmt;

use crate::error::DiagnosticsError;
use crate::model::{least_squares_with_intercept, OlsModel};
use crate::utils::matrix::{column, drop_column};

/// Tolerance and variance inflation factor for a single predictor.
#[derive(Debug, Clone)]
pub struct VifRow {
    pub predictor: String,
    pub tolerance: f64,
    pub vif: f64,
}

/// Tolerance and variance inflation factors for every predictor in a model.
///
/// For predictor j, `R²_j` is the coefficient of determination from
/// regressing x_j on all other predictors. Then
///
/// - tolerance_j = 1 - R²_j
/// - VIF_j = 1 / tolerance_j
///
/// A VIF of 1 means the predictor carries no linear overlap with the others;
/// values above 10 are conventionally read as serious collinearity.
#[derive(Debug, Clone)]
pub struct VifTable {
    pub rows: Vec<VifRow>,
}

impl VifTable {
    /// Indices of predictors whose VIF exceeds `threshold`.
    ///
    /// Common thresholds are 5 and 10.
    pub fn high_vif(&self, threshold: f64) -> Vec<usize> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.vif > threshold)
            .map(|(j, _)| j)
            .collect()
    }
}

impl fmt::Display for VifTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .rows
            .iter()
            .map(|row| row.predictor.len())
            .max()
            .unwrap_or(0)
            .max("Variable".len());

        writeln!(f, "Tolerance and Variance Inflation Factor")?;
        writeln!(f, "---------------------------------------")?;
        writeln!(
            f,
            "{:<width$}  {:>12}  {:>12}",
            "Variable",
            "Tolerance",
            "VIF",
            width = width
        )?;
        for row in &self.rows {
            writeln!(
                f,
                "{:<width$}  {:>12.4}  {:>12.4}",
                row.predictor,
                row.tolerance,
                row.vif,
                width = width
            )?;
        }
        Ok(())
    }
}

/// Compute tolerance and variance inflation factors for each predictor.
///
/// Each predictor is regressed on all remaining predictors (with intercept)
/// and its VIF is derived from the auxiliary R². Requires at least two
/// predictors.
pub fn vif_tolerance(model: &OlsModel) -> Result<VifTable, DiagnosticsError> {
    let p = model.n_predictors();
    if p < 2 {
        return Err(DiagnosticsError::NotEnoughPredictors { got: p });
    }

    let x = model.predictors();
    let mut rows = Vec::with_capacity(p);

    for j in 0..p {
        let x_other = drop_column(x, j);
        let x_j = column(x, j);

        let aux = least_squares_with_intercept(&x_other, &x_j, model.rank_tolerance())?;

        let tolerance = (1.0 - aux.r_squared).clamp(0.0, 1.0);
        let vif = if aux.r_squared < 1.0 - 1e-14 {
            (1.0 / tolerance).max(1.0)
        } else {
            f64::INFINITY
        };

        rows.push(VifRow {
            predictor: model.predictor_names()[j].clone(),
            tolerance,
            vif,
        });
    }

    Ok(VifTable { rows })
}
