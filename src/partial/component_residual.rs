//! Residual-plus-component plot data.

use faer::Col;

use crate::model::OlsModel;
use crate::utils::matrix::{column, least_squares_line};

/// Partial residuals against one predictor.
///
/// Each point is `(x_ik, e_i + b_k * x_ik)`: the residual with the
/// predictor's own linear component added back. Curvature in this scatter
/// flags a predictor entering the model nonlinearly. The least-squares line
/// through the points has slope `b_k` and intercept zero.
#[derive(Debug, Clone)]
pub struct ComponentResidualPanel {
    pub predictor: String,
    pub x: Col<f64>,
    pub partial_residual: Col<f64>,
    pub line_slope: f64,
    pub line_intercept: f64,
}

/// Residual-plus-component plot data for every predictor in a model.
#[derive(Debug, Clone)]
pub struct ComponentResidualPlots {
    pub panels: Vec<ComponentResidualPanel>,
}

/// Compute residual-plus-component plot data for each predictor.
pub fn component_plus_residual_plots(model: &OlsModel) -> ComponentResidualPlots {
    let n = model.n_observations();
    let residuals = model.residuals();

    let mut panels = Vec::with_capacity(model.n_predictors());
    for j in 0..model.n_predictors() {
        let x_j = column(model.predictors(), j);
        let b_j = model.coefficients()[j];

        let partial_residual = Col::from_fn(n, |i| residuals[i] + b_j * x_j[i]);
        let (line_intercept, line_slope) = least_squares_line(&x_j, &partial_residual);

        panels.push(ComponentResidualPanel {
            predictor: model.predictor_names()[j].clone(),
            x: x_j,
            partial_residual,
            line_slope,
            line_intercept,
        });
    }

    ComponentResidualPlots { panels }
}

#[cfg(test)]
mod tests {
    use super::*;
    use faer::Mat;

    #[test]
    fn test_line_recovers_coefficient_and_zero_intercept() {
        let x = Mat::from_fn(24, 2, |i, j| ((i + 4 * j) as f64).sin() + 0.2 * i as f64);
        let y = Col::from_fn(24, |i| 3.0 - 0.4 * i as f64 + ((i % 5) as f64));

        let model = OlsModel::fit(&x, &y).expect("model should fit");
        let plots = component_plus_residual_plots(&model);

        for (j, panel) in plots.panels.iter().enumerate() {
            // Residuals are orthogonal to each predictor and sum to zero, so
            // the fitted line reproduces the coefficient exactly.
            assert!((panel.line_slope - model.coefficients()[j]).abs() < 1e-8);
            assert!(panel.line_intercept.abs() < 1e-7);
        }
    }

    #[test]
    fn test_partial_residuals_contain_component() {
        let x = Mat::from_fn(12, 1, |i, _| (i + 1) as f64);
        let y = Col::from_fn(12, |i| 5.0 + 2.0 * (i + 1) as f64 + ((i % 3) as f64 - 1.0));

        let model = OlsModel::fit(&x, &y).expect("model should fit");
        let plots = component_plus_residual_plots(&model);

        let panel = &plots.panels[0];
        let b = model.coefficients()[0];
        for i in 0..12 {
            let expected = model.residuals()[i] + b * (i + 1) as f64;
            assert!((panel.partial_residual[i] - expected).abs() < 1e-12);
            assert_eq!(panel.x[i], (i + 1) as f64);
        }
    }

    #[test]
    fn test_panels_follow_predictor_order() {
        let x = Mat::from_fn(15, 3, |i, j| ((i * (j + 2)) as f64).cos() + (j as f64) * 0.3 * i as f64);
        let y = Col::from_fn(15, |i| (i % 7) as f64);

        let model = OlsModel::builder()
            .predictor_names(["disp", "hp", "wt"])
            .fit(&x, &y)
            .expect("model should fit");
        let plots = component_plus_residual_plots(&model);

        assert_eq!(plots.panels.len(), 3);
        assert_eq!(plots.panels[0].predictor, "disp");
        assert_eq!(plots.panels[2].predictor, "wt");
    }
}
