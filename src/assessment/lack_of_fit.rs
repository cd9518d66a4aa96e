//! Lack-of-fit F test for simple regression.

use std::fmt;

use statrs::distribution::{ContinuousCDF, FisherSnedecor};

use crate::error::DiagnosticsError;
use crate::model::OlsModel;

/// Analysis-of-variance table splitting the residual sum of squares of a
/// simple regression into lack-of-fit and pure-error components.
///
/// Replicated predictor values estimate the pure error directly from the
/// within-group spread of the response; what remains of the residual sum of
/// squares is attributed to lack of fit. A significant lack-of-fit F says a
/// straight line in this predictor is the wrong mean function.
#[derive(Debug, Clone)]
pub struct LackOfFitAnova {
    pub response: String,
    pub predictor: String,
    pub regression_df: usize,
    pub regression_ss: f64,
    pub regression_ms: f64,
    pub regression_f: f64,
    pub regression_p: f64,
    pub residual_df: usize,
    pub residual_ss: f64,
    pub residual_ms: f64,
    pub lack_of_fit_df: usize,
    pub lack_of_fit_ss: f64,
    pub lack_of_fit_ms: f64,
    pub lack_of_fit_f: f64,
    pub lack_of_fit_p: f64,
    pub pure_error_df: usize,
    pub pure_error_ss: f64,
    pub pure_error_ms: f64,
}

impl fmt::Display for LackOfFitAnova {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Lack of Fit F Test")?;
        writeln!(f, "------------------")?;
        writeln!(f, "Response:  {}", self.response)?;
        writeln!(f, "Predictor: {}", self.predictor)?;
        writeln!(f)?;
        writeln!(
            f,
            "{:<13} {:>5} {:>13} {:>13} {:>10} {:>10}",
            "", "DF", "Sum Sq", "Mean Sq", "F Value", "Pr(>F)"
        )?;
        writeln!(
            f,
            "{:<13} {:>5} {:>13.4} {:>13.4} {:>10.4} {:>10.4}",
            "Regression",
            self.regression_df,
            self.regression_ss,
            self.regression_ms,
            self.regression_f,
            self.regression_p
        )?;
        writeln!(
            f,
            "{:<13} {:>5} {:>13.4} {:>13.4}",
            "Residual", self.residual_df, self.residual_ss, self.residual_ms
        )?;
        writeln!(
            f,
            "{:<13} {:>5} {:>13.4} {:>13.4} {:>10.4} {:>10.4}",
            " Lack of fit",
            self.lack_of_fit_df,
            self.lack_of_fit_ss,
            self.lack_of_fit_ms,
            self.lack_of_fit_f,
            self.lack_of_fit_p
        )?;
        writeln!(
            f,
            "{:<13} {:>5} {:>13.4} {:>13.4}",
            " Pure error", self.pure_error_df, self.pure_error_ss, self.pure_error_ms
        )?;
        Ok(())
    }
}

/// Run the lack-of-fit F test on a simple regression model.
///
/// Observations are grouped by exact equality of the predictor value. Errors
/// when the model has more than one predictor, when no value is replicated
/// (no pure-error degrees of freedom), or when fewer than three distinct
/// values leave the lack-of-fit sum of squares without degrees of freedom.
pub fn lack_of_fit_anova(model: &OlsModel) -> Result<LackOfFitAnova, DiagnosticsError> {
    let p = model.n_predictors();
    if p != 1 {
        return Err(DiagnosticsError::NotSimpleRegression { got: p });
    }

    let n = model.n_observations();
    let x = model.predictors();
    let y = model.response();

    // Group the response by replicated predictor values.
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&i, &j| x[(i, 0)].total_cmp(&x[(j, 0)]));

    let mut n_groups = 0;
    let mut pure_error_ss = 0.0;
    let mut start = 0;
    while start < n {
        let mut end = start;
        while end + 1 < n && x[(order[end + 1], 0)] == x[(order[start], 0)] {
            end += 1;
        }
        n_groups += 1;

        let size = end - start + 1;
        if size > 1 {
            let group_mean: f64 =
                (start..=end).map(|k| y[order[k]]).sum::<f64>() / size as f64;
            for k in start..=end {
                let d = y[order[k]] - group_mean;
                pure_error_ss += d * d;
            }
        }
        start = end + 1;
    }

    let pure_error_df = n - n_groups;
    if pure_error_df == 0 {
        return Err(DiagnosticsError::NoReplicates);
    }
    if n_groups < 3 {
        return Err(DiagnosticsError::InsufficientDistinctValues { got: n_groups });
    }
    let lack_of_fit_df = n_groups - 2;

    let residual_ss = model.rss();
    let lack_of_fit_ss = (residual_ss - pure_error_ss).max(0.0);

    let lack_of_fit_ms = lack_of_fit_ss / lack_of_fit_df as f64;
    let pure_error_ms = pure_error_ss / pure_error_df as f64;

    let (lack_of_fit_f, lack_of_fit_p) = if pure_error_ms > 0.0 {
        let f_stat = lack_of_fit_ms / pure_error_ms;
        let p_val = FisherSnedecor::new(lack_of_fit_df as f64, pure_error_df as f64)
            .ok()
            .map_or(f64::NAN, |d| 1.0 - d.cdf(f_stat));
        (f_stat, p_val)
    } else if lack_of_fit_ms > 0.0 {
        (f64::INFINITY, 0.0)
    } else {
        (f64::NAN, f64::NAN)
    };

    Ok(LackOfFitAnova {
        response: model.response_name().to_string(),
        predictor: model.predictor_names()[0].clone(),
        regression_df: 1,
        regression_ss: model.ess(),
        regression_ms: model.ess(),
        regression_f: model.f_statistic(),
        regression_p: model.f_pvalue(),
        residual_df: model.residual_df(),
        residual_ss,
        residual_ms: model.mse(),
        lack_of_fit_df,
        lack_of_fit_ss,
        lack_of_fit_ms,
        lack_of_fit_f,
        lack_of_fit_p,
        pure_error_df,
        pure_error_ss,
        pure_error_ms,
    })
}
