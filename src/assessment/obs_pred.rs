//! Observed versus predicted plot data.

use faer::Col;

use crate::model::OlsModel;
use crate::utils::matrix::least_squares_line;

/// Observed response against fitted values.
///
/// A model that predicts well concentrates the points around the 45 degree
/// identity line. The stored line is the least-squares fit of predicted on
/// observed; its slope equals the model R², so a shallow line is another
/// reading of a poor fit.
#[derive(Debug, Clone)]
pub struct ObservedVsPredictedPlot {
    pub observed: Col<f64>,
    pub predicted: Col<f64>,
    pub fit_intercept: f64,
    pub fit_slope: f64,
}

/// Compute observed-vs-predicted plot data for a fitted model.
pub fn observed_vs_predicted(model: &OlsModel) -> ObservedVsPredictedPlot {
    let observed = model.response().clone();
    let predicted = model.fitted_values().clone();
    let (fit_intercept, fit_slope) = least_squares_line(&observed, &predicted);

    ObservedVsPredictedPlot {
        observed,
        predicted,
        fit_intercept,
        fit_slope,
    }
}
