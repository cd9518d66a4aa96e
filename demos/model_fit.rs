//! Example demonstrating model fit assessment.
//!
//! Fits a simple regression with replicated x levels, prints the summary
//! statistics, the lack-of-fit ANOVA, and the spread of centered fitted
//! values against residuals.

use faer::{Col, Mat};
use olsdiag::assessment::{lack_of_fit_anova, observed_vs_predicted, residual_fit_spread};
use olsdiag::model::OlsModel;

fn main() {
    // Three measurements at each dose level
    let doses = [1.0, 2.0, 4.0, 8.0, 16.0];
    let noise = [0.4, -0.3, -0.1, 0.6, -0.5, -0.1, 0.2, 0.1, -0.3, 0.5, -0.2, -0.3, 0.3, 0.0, -0.3];
    let x = Mat::from_fn(15, 1, |i, _| doses[i / 3]);
    let y = Col::from_fn(15, |i| 1.2 + 0.45 * doses[i / 3] + noise[i]);

    let model = OlsModel::builder()
        .response_name("response")
        .predictor_names(["dose"])
        .fit(&x, &y)
        .expect("fit should succeed");

    println!("=== Fit summary ===\n");
    println!("intercept: {:.4}", model.intercept());
    println!("slope:     {:.4}", model.coefficients()[0]);
    println!("R²:        {:.4}", model.r_squared());
    println!("adj. R²:   {:.4}", model.adj_r_squared());
    println!("RMSE:      {:.4}", model.rmse());

    println!("\n\n=== Lack-of-fit ANOVA ===\n");
    let anova = lack_of_fit_anova(&model).expect("anova should succeed");
    println!("{anova}");

    println!("\n\n=== Observed vs predicted ===\n");
    let plot = observed_vs_predicted(&model);
    println!(
        "fit line: predicted = {:.4} + {:.4} * observed",
        plot.fit_intercept, plot.fit_slope
    );

    println!("\n\n=== Residual-fit spread ===\n");
    let spread = residual_fit_spread(&model);
    let n = spread.fit_mean.value.nrows();
    println!(
        "centered fit range: [{:.3}, {:.3}]",
        spread.fit_mean.value[0],
        spread.fit_mean.value[n - 1]
    );
    println!(
        "residual range:     [{:.3}, {:.3}]",
        spread.residual.value[0],
        spread.residual.value[n - 1]
    );
}
