//! Residual-fit spread plot data.

use faer::Col;

use crate::model::OlsModel;
use crate::utils::matrix::{ecdf_proportions, mean};

/// One panel of the residual-fit spread display: sorted values paired with
/// their empirical cumulative proportions.
#[derive(Debug, Clone)]
pub struct QuantilePanel {
    pub proportion: Col<f64>,
    pub value: Col<f64>,
}

/// Side-by-side spread comparison of what the fit explains and what it
/// leaves behind.
///
/// The `fit_mean` panel holds the sorted centered fitted values and the
/// `residual` panel the sorted residuals, both against empirical CDF
/// proportions. When the residual spread dominates the fit-mean spread, the
/// model accounts for little of the variation in the response.
#[derive(Debug, Clone)]
pub struct ResidualFitSpreadPlot {
    pub fit_mean: QuantilePanel,
    pub residual: QuantilePanel,
}

/// Compute residual-fit spread panels for a fitted model.
pub fn residual_fit_spread(model: &OlsModel) -> ResidualFitSpreadPlot {
    let fitted = model.fitted_values();
    let center = mean(fitted);
    let centered = Col::from_fn(fitted.nrows(), |i| fitted[i] - center);

    ResidualFitSpreadPlot {
        fit_mean: quantile_panel(&centered),
        residual: quantile_panel(model.residuals()),
    }
}

fn quantile_panel(values: &Col<f64>) -> QuantilePanel {
    let mut sorted: Vec<f64> = values.iter().copied().collect();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let props = ecdf_proportions(&sorted);

    QuantilePanel {
        proportion: Col::from_fn(props.len(), |i| props[i]),
        value: Col::from_fn(sorted.len(), |i| sorted[i]),
    }
}
