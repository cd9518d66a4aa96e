//! Zero-order, partial, and part correlations.

use std::fmt;

use crate::error::DiagnosticsError;
use crate::model::{least_squares_with_intercept, OlsModel};
use crate::utils::matrix::{column, drop_column, pearson};

/// Correlations between one predictor and the response.
#[derive(Debug, Clone)]
pub struct CorrelationRow {
    pub predictor: String,
    /// Pearson correlation of the predictor with the response.
    pub zero_order: f64,
    /// Correlation with the other predictors partialled out of both sides.
    pub partial: f64,
    /// Semipartial correlation: other predictors partialled out of this
    /// predictor only.
    pub part: f64,
}

/// Correlation table describing each predictor's contribution to R².
///
/// The squared part correlation is the drop in R² from removing the
/// predictor; the squared partial correlation is that drop relative to the
/// variation the reduced model leaves unexplained. Signs follow the fitted
/// coefficients.
#[derive(Debug, Clone)]
pub struct CorrelationTable {
    pub response: String,
    pub rows: Vec<CorrelationRow>,
}

impl fmt::Display for CorrelationTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .rows
            .iter()
            .map(|row| row.predictor.len())
            .max()
            .unwrap_or(0)
            .max("Variable".len());

        writeln!(f, "Correlations")?;
        writeln!(f, "------------")?;
        writeln!(f, "Response: {}", self.response)?;
        writeln!(f)?;
        writeln!(
            f,
            "{:<width$}  {:>12}  {:>12}  {:>12}",
            "Variable",
            "Zero Order",
            "Partial",
            "Part",
            width = width
        )?;
        for row in &self.rows {
            writeln!(
                f,
                "{:<width$}  {:>12.4}  {:>12.4}  {:>12.4}",
                row.predictor,
                row.zero_order,
                row.partial,
                row.part,
                width = width
            )?;
        }
        Ok(())
    }
}

/// Compute zero-order, partial, and part correlations for each predictor.
///
/// Partial and part values come from refitting the model without the
/// predictor and comparing R² values; with a single predictor all three
/// coincide.
pub fn correlations(model: &OlsModel) -> Result<CorrelationTable, DiagnosticsError> {
    let p = model.n_predictors();
    let x = model.predictors();
    let y = model.response();
    let r2_full = model.r_squared();

    let mut rows = Vec::with_capacity(p);
    for j in 0..p {
        let x_other = drop_column(x, j);
        let reduced = least_squares_with_intercept(&x_other, y, model.rank_tolerance())?;
        let r2_reduced = reduced.r_squared;

        let sign = if model.coefficients()[j] < 0.0 { -1.0 } else { 1.0 };
        let gain = (r2_full - r2_reduced).max(0.0);

        let part = sign * gain.sqrt();
        let unexplained = 1.0 - r2_reduced;
        let partial = if unexplained > 0.0 {
            sign * (gain / unexplained).sqrt()
        } else {
            f64::NAN
        };

        rows.push(CorrelationRow {
            predictor: model.predictor_names()[j].clone(),
            zero_order: pearson(&column(x, j), y),
            partial,
            part,
        });
    }

    Ok(CorrelationTable {
        response: model.response_name().to_string(),
        rows,
    })
}
