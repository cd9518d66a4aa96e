//! OLS model fitting tests.

mod common;

use approx::assert_relative_eq;
use faer::{Col, Mat};
use olsdiag::model::{ModelError, OlsModel};

// ============================================================================
// Basic Fitting Tests
// ============================================================================

#[test]
fn test_exact_line_recovery() {
    // y = 2 + 3*x
    let x = Mat::from_fn(6, 1, |i, _| i as f64);
    let y = Col::from_fn(6, |i| 2.0 + 3.0 * i as f64);

    let model = OlsModel::fit(&x, &y).expect("fit should succeed");

    assert_relative_eq!(model.coefficients()[0], 3.0, epsilon = 1e-10);
    assert_relative_eq!(model.intercept(), 2.0, epsilon = 1e-10);
    assert_relative_eq!(model.r_squared(), 1.0, epsilon = 1e-10);
}

#[test]
fn test_exact_multiple_regression_recovery() {
    // y = 1 + 2*x1 + 3*x2 with non-collinear features
    let mut x = Mat::zeros(10, 2);
    let mut y = Col::zeros(10);

    for i in 0..10 {
        x[(i, 0)] = i as f64;
        x[(i, 1)] = (i * i) as f64;
        y[i] = 1.0 + 2.0 * x[(i, 0)] + 3.0 * x[(i, 1)];
    }

    let model = OlsModel::fit(&x, &y).expect("fit should succeed");

    assert_relative_eq!(model.coefficients()[0], 2.0, epsilon = 1e-10);
    assert_relative_eq!(model.coefficients()[1], 3.0, epsilon = 1e-10);
    assert_relative_eq!(model.intercept(), 1.0, epsilon = 1e-10);
}

#[test]
fn test_coefficient_recovery_with_noise() {
    let (x, y, true_coefficients) = common::generate_linear_data(200, 3, 5.0, 0.5, 42);

    let model = OlsModel::fit(&x, &y).expect("fit should succeed");

    for j in 0..3 {
        assert!(
            (model.coefficients()[j] - true_coefficients[j]).abs() < 0.3,
            "coefficient {} too far from truth: {} vs {}",
            j,
            model.coefficients()[j],
            true_coefficients[j]
        );
    }
    assert!((model.intercept() - 5.0).abs() < 0.3);
    assert!(model.r_squared() > 0.9);
}

// ============================================================================
// Summary Statistic Coherence
// ============================================================================

#[test]
fn test_anova_decomposition_holds() {
    let (x, y, _) = common::generate_linear_data(80, 2, 1.0, 1.0, 7);

    let model = OlsModel::fit(&x, &y).expect("fit should succeed");

    assert_relative_eq!(model.ess() + model.rss(), model.tss(), epsilon = 1e-8);

    let p = model.n_predictors() as f64;
    let df = model.residual_df() as f64;
    let f_expected = (model.ess() / p) / (model.rss() / df);
    assert_relative_eq!(model.f_statistic(), f_expected, epsilon = 1e-8);

    let n = model.n_observations() as f64;
    let adj_expected = 1.0 - (1.0 - model.r_squared()) * (n - 1.0) / df;
    assert_relative_eq!(model.adj_r_squared(), adj_expected, epsilon = 1e-10);

    assert_relative_eq!(model.mse(), model.rss() / df, epsilon = 1e-12);
    assert_relative_eq!(model.rmse(), model.mse().sqrt(), epsilon = 1e-12);
}

#[test]
fn test_residuals_are_orthogonal_to_design() {
    let (x, y, _) = common::generate_linear_data(60, 3, -2.0, 0.8, 11);

    let model = OlsModel::fit(&x, &y).expect("fit should succeed");
    let residuals = model.residuals();

    let sum: f64 = residuals.iter().sum();
    assert!(sum.abs() < 1e-8, "residuals should sum to zero: {sum}");

    for j in 0..3 {
        let mut dot = 0.0;
        for i in 0..60 {
            dot += residuals[i] * x[(i, j)];
        }
        assert!(dot.abs() < 1e-7, "residuals not orthogonal to column {j}: {dot}");
    }
}

#[test]
fn test_inference_outputs_are_plausible() {
    let (x, y, _) = common::generate_linear_data(100, 2, 3.0, 0.5, 99);

    let model = OlsModel::fit(&x, &y).expect("fit should succeed");

    for j in 0..2 {
        assert!(model.std_errors()[j] > 0.0);
        assert!(model.t_statistics()[j].is_finite());
        let p = model.p_values()[j];
        assert!((0.0..=1.0).contains(&p), "p-value out of range: {p}");
    }
    assert!(model.intercept_std_error() > 0.0);

    // Strong true signal relative to the noise level
    assert!(model.f_statistic() > 10.0);
    assert!(model.f_pvalue() < 0.05);
}

// ============================================================================
// Validation Errors
// ============================================================================

#[test]
fn test_dimension_mismatch_is_rejected() {
    let x = Mat::zeros(10, 2);
    let y = Col::zeros(8);

    let err = OlsModel::fit(&x, &y).expect_err("should reject mismatched rows");
    assert_eq!(err, ModelError::DimensionMismatch { x_rows: 10, y_len: 8 });
}

#[test]
fn test_empty_design_is_rejected() {
    let x = Mat::zeros(10, 0);
    let y = Col::zeros(10);

    let err = OlsModel::fit(&x, &y).expect_err("should reject empty design");
    assert_eq!(err, ModelError::NoPredictors);
}

#[test]
fn test_too_few_observations_is_rejected() {
    // Two predictors need at least four rows
    let x = Mat::from_fn(3, 2, |i, j| (i + j) as f64);
    let y = Col::from_fn(3, |i| i as f64);

    let err = OlsModel::fit(&x, &y).expect_err("should reject short data");
    assert_eq!(err, ModelError::InsufficientObservations { needed: 4, got: 3 });
}

#[test]
fn test_non_finite_input_is_rejected() {
    let mut x = Mat::from_fn(8, 1, |i, _| i as f64);
    let y = Col::from_fn(8, |i| i as f64);
    x[(3, 0)] = f64::NAN;

    let err = OlsModel::fit(&x, &y).expect_err("should reject NaN input");
    assert_eq!(err, ModelError::NonFiniteInput);
}

#[test]
fn test_collinear_design_is_rejected() {
    // x2 = 2 * x1
    let x = Mat::from_fn(10, 2, |i, j| (j + 1) as f64 * i as f64);
    let y = Col::from_fn(10, |i| i as f64);

    let err = OlsModel::fit(&x, &y).expect_err("should reject collinear design");
    assert!(matches!(err, ModelError::RankDeficient { .. }), "got {err:?}");
}

#[test]
fn test_constant_column_is_rejected() {
    // A constant predictor duplicates the intercept column
    let x = Mat::from_fn(10, 2, |i, j| if j == 0 { i as f64 } else { 5.0 });
    let y = Col::from_fn(10, |i| i as f64);

    let err = OlsModel::fit(&x, &y).expect_err("should reject constant column");
    assert!(matches!(err, ModelError::RankDeficient { .. }), "got {err:?}");
}

#[test]
fn test_name_count_mismatch_is_rejected() {
    let x = Mat::from_fn(10, 2, |i, j| ((i + 1) * (j + 2)) as f64 + (i * i) as f64 * j as f64);
    let y = Col::from_fn(10, |i| i as f64);

    let err = OlsModel::builder()
        .predictor_names(["only_one"])
        .fit(&x, &y)
        .expect_err("should reject wrong name count");
    assert_eq!(err, ModelError::NameCountMismatch { expected: 2, got: 1 });
}

// ============================================================================
// Naming
// ============================================================================

#[test]
fn test_default_and_custom_names() {
    let (x, y, _) = common::generate_linear_data(30, 2, 0.0, 0.2, 3);

    let model = OlsModel::fit(&x, &y).expect("fit should succeed");
    assert_eq!(model.response_name(), "y");
    assert_eq!(model.predictor_names(), &["x1".to_string(), "x2".to_string()]);

    let named = OlsModel::builder()
        .response_name("mpg")
        .predictor_names(["disp", "hp"])
        .fit(&x, &y)
        .expect("fit should succeed");
    assert_eq!(named.response_name(), "mpg");
    assert_eq!(named.predictor_names()[1], "hp");
}
