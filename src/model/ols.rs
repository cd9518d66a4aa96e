//! Ordinary least squares model fitting.

use faer::{Col, Mat};
use statrs::distribution::{ContinuousCDF, FisherSnedecor, StudentsT};
use thiserror::Error;

/// Errors produced while fitting a model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Design matrix and response have different numbers of rows.
    #[error("dimension mismatch: X has {x_rows} rows but y has {y_len} elements")]
    DimensionMismatch { x_rows: usize, y_len: usize },

    /// The design matrix has no predictor columns.
    #[error("design matrix has no predictor columns")]
    NoPredictors,

    /// Too few observations to estimate the coefficients and an error variance.
    #[error("insufficient observations: need at least {needed}, got {got}")]
    InsufficientObservations { needed: usize, got: usize },

    /// The design matrix or response contains NaN or infinite entries.
    #[error("input contains non-finite values")]
    NonFiniteInput,

    /// The intercept-augmented design matrix is not of full column rank.
    #[error("design matrix is rank deficient (rank {rank} of {ncols} columns)")]
    RankDeficient { rank: usize, ncols: usize },

    /// The number of predictor names does not match the number of columns.
    #[error("expected {expected} predictor names, got {got}")]
    NameCountMismatch { expected: usize, got: usize },
}

/// A fitted ordinary least squares model with an intercept.
///
/// The model keeps its training data so that diagnostics can refit reduced
/// models and residualize individual predictors.
///
/// # Example
///
/// ```rust,ignore
/// use olsdiag::model::OlsModel;
/// use faer::{Col, Mat};
///
/// let model = OlsModel::builder()
///     .response_name("mpg")
///     .predictor_names(["disp", "hp", "wt"])
///     .fit(&x, &y)?;
///
/// println!("R² = {}", model.r_squared());
/// ```
#[derive(Debug, Clone)]
pub struct OlsModel {
    x: Mat<f64>,
    y: Col<f64>,
    response_name: String,
    predictor_names: Vec<String>,
    rank_tolerance: f64,
    intercept: f64,
    coefficients: Col<f64>,
    fitted_values: Col<f64>,
    residuals: Col<f64>,
    intercept_std_error: f64,
    std_errors: Col<f64>,
    t_statistics: Col<f64>,
    p_values: Col<f64>,
    tss: f64,
    rss: f64,
    r_squared: f64,
    adj_r_squared: f64,
    mse: f64,
    rmse: f64,
    f_statistic: f64,
    f_pvalue: f64,
}

impl OlsModel {
    /// Create a builder for configuring names and tolerances.
    pub fn builder() -> OlsModelBuilder {
        OlsModelBuilder::default()
    }

    /// Fit a model with default settings.
    pub fn fit(x: &Mat<f64>, y: &Col<f64>) -> Result<Self, ModelError> {
        OlsModelBuilder::default().fit(x, y)
    }

    /// Number of observations.
    pub fn n_observations(&self) -> usize {
        self.y.nrows()
    }

    /// Number of predictor columns, excluding the intercept.
    pub fn n_predictors(&self) -> usize {
        self.x.ncols()
    }

    /// Number of estimated parameters, including the intercept.
    pub fn n_parameters(&self) -> usize {
        self.x.ncols() + 1
    }

    /// Residual degrees of freedom.
    pub fn residual_df(&self) -> usize {
        self.n_observations() - self.n_parameters()
    }

    /// Predictor matrix the model was fitted on.
    pub fn predictors(&self) -> &Mat<f64> {
        &self.x
    }

    /// Response vector the model was fitted on.
    pub fn response(&self) -> &Col<f64> {
        &self.y
    }

    /// The intercept-augmented design matrix `[1 | X]`.
    pub fn model_matrix(&self) -> Mat<f64> {
        augment_with_intercept(&self.x)
    }

    /// Fitted intercept.
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Fitted slope coefficients, in predictor order.
    pub fn coefficients(&self) -> &Col<f64> {
        &self.coefficients
    }

    /// Fitted values.
    pub fn fitted_values(&self) -> &Col<f64> {
        &self.fitted_values
    }

    /// Ordinary residuals.
    pub fn residuals(&self) -> &Col<f64> {
        &self.residuals
    }

    /// Standard error of the intercept.
    pub fn intercept_std_error(&self) -> f64 {
        self.intercept_std_error
    }

    /// Standard errors of the slope coefficients.
    pub fn std_errors(&self) -> &Col<f64> {
        &self.std_errors
    }

    /// t-statistics of the slope coefficients.
    pub fn t_statistics(&self) -> &Col<f64> {
        &self.t_statistics
    }

    /// Two-sided p-values of the slope coefficients.
    pub fn p_values(&self) -> &Col<f64> {
        &self.p_values
    }

    /// Total sum of squares.
    pub fn tss(&self) -> f64 {
        self.tss
    }

    /// Residual sum of squares.
    pub fn rss(&self) -> f64 {
        self.rss
    }

    /// Explained (regression) sum of squares.
    pub fn ess(&self) -> f64 {
        self.tss - self.rss
    }

    /// Coefficient of determination.
    pub fn r_squared(&self) -> f64 {
        self.r_squared
    }

    /// R² adjusted for the number of parameters.
    pub fn adj_r_squared(&self) -> f64 {
        self.adj_r_squared
    }

    /// Mean squared error of the residuals.
    pub fn mse(&self) -> f64 {
        self.mse
    }

    /// Root mean squared error.
    pub fn rmse(&self) -> f64 {
        self.rmse
    }

    /// Overall F-statistic of the regression.
    pub fn f_statistic(&self) -> f64 {
        self.f_statistic
    }

    /// p-value of the overall F-statistic.
    pub fn f_pvalue(&self) -> f64 {
        self.f_pvalue
    }

    /// Name of the response variable.
    pub fn response_name(&self) -> &str {
        &self.response_name
    }

    /// Names of the predictor columns.
    pub fn predictor_names(&self) -> &[String] {
        &self.predictor_names
    }

    /// Rank tolerance used when the model was fitted.
    pub fn rank_tolerance(&self) -> f64 {
        self.rank_tolerance
    }
}

/// Builder for [`OlsModel`].
#[derive(Debug, Clone)]
pub struct OlsModelBuilder {
    response_name: String,
    predictor_names: Option<Vec<String>>,
    rank_tolerance: f64,
}

impl Default for OlsModelBuilder {
    fn default() -> Self {
        Self {
            response_name: "y".to_string(),
            predictor_names: None,
            rank_tolerance: 1e-10,
        }
    }
}

impl OlsModelBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name of the response variable.
    pub fn response_name(mut self, name: impl Into<String>) -> Self {
        self.response_name = name.into();
        self
    }

    /// Set the names of the predictor columns.
    ///
    /// Defaults to `x1`, `x2`, ... when not provided.
    pub fn predictor_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.predictor_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Set the relative tolerance used to detect rank deficiency.
    pub fn rank_tolerance(mut self, tol: f64) -> Self {
        self.rank_tolerance = tol;
        self
    }

    /// Fit an ordinary least squares model to the given data.
    pub fn fit(&self, x: &Mat<f64>, y: &Col<f64>) -> Result<OlsModel, ModelError> {
        let n = x.nrows();
        let p = x.ncols();

        // Validate dimensions
        if n != y.nrows() {
            return Err(ModelError::DimensionMismatch {
                x_rows: n,
                y_len: y.nrows(),
            });
        }

        if p == 0 {
            return Err(ModelError::NoPredictors);
        }

        // Need residual degrees of freedom for the error variance
        if n < p + 2 {
            return Err(ModelError::InsufficientObservations {
                needed: p + 2,
                got: n,
            });
        }

        for j in 0..p {
            for i in 0..n {
                if !x[(i, j)].is_finite() {
                    return Err(ModelError::NonFiniteInput);
                }
            }
        }
        for i in 0..n {
            if !y[i].is_finite() {
                return Err(ModelError::NonFiniteInput);
            }
        }

        let predictor_names = match &self.predictor_names {
            Some(names) => {
                if names.len() != p {
                    return Err(ModelError::NameCountMismatch {
                        expected: p,
                        got: names.len(),
                    });
                }
                names.clone()
            }
            None => (1..=p).map(|j| format!("x{j}")).collect(),
        };

        // Solve the least squares problem on [1 | X]
        let design = augment_with_intercept(x);
        let beta = qr_least_squares(&design, y, self.rank_tolerance)?;

        let intercept = beta[0];
        let coefficients = Col::from_fn(p, |j| beta[j + 1]);

        // Fitted values and residuals
        let mut fitted_values = Col::zeros(n);
        let mut residuals = Col::zeros(n);
        for i in 0..n {
            let mut pred = intercept;
            for j in 0..p {
                pred += x[(i, j)] * coefficients[j];
            }
            fitted_values[i] = pred;
            residuals[i] = y[i] - pred;
        }

        // Sums of squares
        let y_mean: f64 = y.iter().sum::<f64>() / n as f64;
        let tss: f64 = y.iter().map(|&yi| (yi - y_mean).powi(2)).sum();
        let rss: f64 = residuals.iter().map(|&r| r.powi(2)).sum();

        let r_squared = if tss > 0.0 {
            (1.0 - rss / tss).clamp(0.0, 1.0)
        } else if rss < 1e-10 {
            1.0
        } else {
            0.0
        };

        let df_total = (n - 1) as f64;
        let df_resid = (n - p - 1) as f64;
        let df_model = p as f64;

        let adj_r_squared = 1.0 - (1.0 - r_squared) * df_total / df_resid;

        let mse = rss / df_resid;
        let rmse = mse.sqrt();

        // Overall F-test
        let ess = tss - rss;
        let f_statistic = if mse > 0.0 {
            (ess / df_model) / mse
        } else {
            f64::NAN
        };
        let f_pvalue = if f_statistic.is_finite() {
            FisherSnedecor::new(df_model, df_resid)
                .ok()
                .map_or(f64::NAN, |d| 1.0 - d.cdf(f_statistic))
        } else {
            f64::NAN
        };

        // Standard errors from the diagonal of (X'X)⁻¹ on the augmented design
        let xtx_inv = invert_cross_product(&design, self.rank_tolerance)?;
        let intercept_std_error = se_from_variance(mse * xtx_inv[(0, 0)]);
        let std_errors = Col::from_fn(p, |j| se_from_variance(mse * xtx_inv[(j + 1, j + 1)]));

        let t_statistics = Col::from_fn(p, |j| {
            if std_errors[j].is_nan() || std_errors[j] == 0.0 {
                f64::NAN
            } else {
                coefficients[j] / std_errors[j]
            }
        });

        let t_dist = StudentsT::new(0.0, 1.0, df_resid).ok();
        let p_values = Col::from_fn(p, |j| {
            if t_statistics[j].is_finite() {
                t_dist
                    .as_ref()
                    .map_or(f64::NAN, |d| 2.0 * (1.0 - d.cdf(t_statistics[j].abs())))
            } else {
                f64::NAN
            }
        });

        Ok(OlsModel {
            x: x.clone(),
            y: y.clone(),
            response_name: self.response_name.clone(),
            predictor_names,
            rank_tolerance: self.rank_tolerance,
            intercept,
            coefficients,
            fitted_values,
            residuals,
            intercept_std_error,
            std_errors,
            t_statistics,
            p_values,
            tss,
            rss,
            r_squared,
            adj_r_squared,
            mse,
            rmse,
            f_statistic,
            f_pvalue,
        })
    }
}

/// Result of an auxiliary least squares fit performed by a diagnostic.
#[derive(Debug, Clone)]
pub(crate) struct AuxiliaryFit {
    pub(crate) residuals: Col<f64>,
    pub(crate) r_squared: f64,
}

/// Regress `y` on `[1 | x]`, returning residuals and R².
///
/// With zero predictor columns this degenerates to the mean-only model.
pub(crate) fn least_squares_with_intercept(
    x: &Mat<f64>,
    y: &Col<f64>,
    rank_tolerance: f64,
) -> Result<AuxiliaryFit, ModelError> {
    let n = y.nrows();
    let y_mean: f64 = y.iter().sum::<f64>() / n as f64;
    let tss: f64 = y.iter().map(|&yi| (yi - y_mean).powi(2)).sum();

    if x.ncols() == 0 {
        let residuals = Col::from_fn(n, |i| y[i] - y_mean);
        return Ok(AuxiliaryFit {
            residuals,
            r_squared: 0.0,
        });
    }

    let design = augment_with_intercept(x);
    let beta = qr_least_squares(&design, y, rank_tolerance)?;

    let mut residuals = Col::zeros(n);
    for i in 0..n {
        let mut pred = 0.0;
        for j in 0..design.ncols() {
            pred += design[(i, j)] * beta[j];
        }
        residuals[i] = y[i] - pred;
    }

    let rss: f64 = residuals.iter().map(|&r| r.powi(2)).sum();
    let r_squared = if tss > 0.0 {
        (1.0 - rss / tss).clamp(0.0, 1.0)
    } else if rss < 1e-10 {
        1.0
    } else {
        0.0
    };

    Ok(AuxiliaryFit {
        residuals,
        r_squared,
    })
}

/// Build the intercept-augmented design matrix `[1 | X]`.
fn augment_with_intercept(x: &Mat<f64>) -> Mat<f64> {
    Mat::from_fn(
        x.nrows(),
        x.ncols() + 1,
        |i, j| if j == 0 { 1.0 } else { x[(i, j - 1)] },
    )
}

/// Solve the least squares problem `design * beta ≈ y` by QR decomposition.
///
/// Rejects designs whose R factor has a relatively negligible diagonal entry.
fn qr_least_squares(
    design: &Mat<f64>,
    y: &Col<f64>,
    rank_tolerance: f64,
) -> Result<Col<f64>, ModelError> {
    let m = design.ncols();

    let qr = design.qr();
    let q = qr.compute_Q();
    let r = qr.R();

    check_full_rank(&r.to_owned(), m, rank_tolerance)?;

    let qty = q.transpose() * y;

    // Back-substitution for the upper triangular system R * beta = Q'y
    let mut beta = Col::zeros(m);
    for i in (0..m).rev() {
        let mut sum = qty[i];
        for j in (i + 1)..m {
            sum -= r[(i, j)] * beta[j];
        }
        beta[i] = sum / r[(i, i)];
    }

    Ok(beta)
}

/// Compute `(D'D)⁻¹` for a design matrix `D` via QR decomposition.
fn invert_cross_product(design: &Mat<f64>, rank_tolerance: f64) -> Result<Mat<f64>, ModelError> {
    let m = design.ncols();
    let xtx = design.transpose() * design;

    let qr = xtx.qr();
    let q = qr.compute_Q();
    let r = qr.R();

    check_full_rank(&r.to_owned(), m, rank_tolerance)?;

    // Solve R * inv = Q' column by column
    let mut inv = Mat::zeros(m, m);
    let qt = q.transpose();
    for col in 0..m {
        for i in (0..m).rev() {
            let mut sum = qt[(i, col)];
            for j in (i + 1)..m {
                sum -= r[(i, j)] * inv[(j, col)];
            }
            inv[(i, col)] = sum / r[(i, i)];
        }
    }

    Ok(inv)
}

/// Flag rank deficiency from the diagonal of an R factor.
fn check_full_rank(r: &Mat<f64>, m: usize, rank_tolerance: f64) -> Result<(), ModelError> {
    let mut max_diag: f64 = 0.0;
    for i in 0..m {
        max_diag = max_diag.max(r[(i, i)].abs());
    }

    let threshold = rank_tolerance * max_diag;
    let rank = (0..m).filter(|&i| r[(i, i)].abs() > threshold).count();
    if max_diag == 0.0 || rank < m {
        return Err(ModelError::RankDeficient { rank, ncols: m });
    }

    Ok(())
}

fn se_from_variance(var: f64) -> f64 {
    if var >= 0.0 {
        var.sqrt()
    } else {
        f64::NAN
    }
}
