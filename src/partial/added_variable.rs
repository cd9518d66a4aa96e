//! Added-variable (partial regression) plot data.

use faer::Col;

use crate::error::DiagnosticsError;
use crate::model::{least_squares_with_intercept, OlsModel};
use crate::utils::matrix::{column, drop_column, least_squares_line};

/// Partial regression scatter for a single predictor.
///
/// The points are the residuals of the response and of this predictor, each
/// regressed on all the remaining predictors. The slope of the least-squares
/// line through them equals the predictor's coefficient in the full model.
#[derive(Debug, Clone)]
pub struct AddedVariablePanel {
    pub predictor: String,
    pub x_residuals: Col<f64>,
    pub y_residuals: Col<f64>,
    pub slope: f64,
}

/// Added-variable plot data for every predictor in a model.
///
/// A panel whose points hug a sloped line shows a predictor contributing
/// information the others do not carry; a flat cloud shows one that is
/// redundant given the rest.
#[derive(Debug, Clone)]
pub struct AddedVariablePlots {
    pub response: String,
    pub panels: Vec<AddedVariablePanel>,
}

/// Compute added-variable plot data for each predictor.
///
/// With a single predictor the residualization degenerates to centering, so
/// the panel reproduces the centered data themselves.
pub fn added_variable_plots(model: &OlsModel) -> Result<AddedVariablePlots, DiagnosticsError> {
    let p = model.n_predictors();
    let x = model.predictors();
    let y = model.response();

    let mut panels = Vec::with_capacity(p);
    for j in 0..p {
        let x_other = drop_column(x, j);
        let x_j = column(x, j);

        let y_aux = least_squares_with_intercept(&x_other, y, model.rank_tolerance())?;
        let x_aux = least_squares_with_intercept(&x_other, &x_j, model.rank_tolerance())?;

        let (_, slope) = least_squares_line(&x_aux.residuals, &y_aux.residuals);

        panels.push(AddedVariablePanel {
            predictor: model.predictor_names()[j].clone(),
            x_residuals: x_aux.residuals,
            y_residuals: y_aux.residuals,
            slope,
        });
    }

    Ok(AddedVariablePlots {
        response: model.response_name().to_string(),
        panels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use faer::Mat;

    #[test]
    fn test_panel_slope_equals_full_model_coefficient() {
        // Correlated predictors with a known exact fit: b = (1.5, 2.5).
        let x_vals = [[1.0, 1.0], [2.0, 1.0], [3.0, 2.0], [4.0, 2.0]];
        let x = Mat::from_fn(4, 2, |i, j| x_vals[i][j]);
        let y = Col::from_fn(4, |i| [3.0, 5.0, 9.0, 10.0][i]);

        let model = OlsModel::fit(&x, &y).expect("model should fit");
        let plots = added_variable_plots(&model).expect("plots");

        assert!((plots.panels[0].slope - 1.5).abs() < 1e-10);
        assert!((plots.panels[1].slope - 2.5).abs() < 1e-10);
    }

    #[test]
    fn test_panel_slope_matches_coefficients_on_larger_data() {
        let x = Mat::from_fn(30, 3, |i, j| {
            ((i * (j + 1)) as f64).sin() + 0.2 * (i as f64) * ((j + 1) as f64)
        });
        let y = Col::from_fn(30, |i| 1.0 + 0.5 * i as f64 + ((i % 4) as f64));

        let model = OlsModel::fit(&x, &y).expect("model should fit");
        let plots = added_variable_plots(&model).expect("plots");

        for (j, panel) in plots.panels.iter().enumerate() {
            assert!(
                (panel.slope - model.coefficients()[j]).abs() < 1e-8,
                "slope {} != coefficient {}",
                panel.slope,
                model.coefficients()[j]
            );
        }
    }

    #[test]
    fn test_residual_clouds_are_centered() {
        let x = Mat::from_fn(20, 2, |i, j| ((i + 5 * j) as f64).cos() + 0.1 * i as f64);
        let y = Col::from_fn(20, |i| (i % 6) as f64);

        let model = OlsModel::fit(&x, &y).expect("model should fit");
        let plots = added_variable_plots(&model).expect("plots");

        for panel in &plots.panels {
            let sx: f64 = panel.x_residuals.iter().sum();
            let sy: f64 = panel.y_residuals.iter().sum();
            assert!(sx.abs() < 1e-8);
            assert!(sy.abs() < 1e-8);
        }
    }

    #[test]
    fn test_single_predictor_panel_is_centered_data() {
        let x = Mat::from_fn(10, 1, |i, _| (i + 1) as f64);
        let y = Col::from_fn(10, |i| 2.0 + 3.0 * i as f64 + ((i % 2) as f64));

        let model = OlsModel::fit(&x, &y).expect("model should fit");
        let plots = added_variable_plots(&model).expect("plots");

        let panel = &plots.panels[0];
        let x_mean = 5.5;
        for i in 0..10 {
            assert!((panel.x_residuals[i] - ((i + 1) as f64 - x_mean)).abs() < 1e-10);
        }
        assert!((panel.slope - model.coefficients()[0]).abs() < 1e-10);
    }
}
