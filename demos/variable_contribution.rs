//! Example demonstrating variable-contribution diagnostics.
//!
//! Fits a three-predictor model, prints the correlation table, and shows
//! that the added-variable and residual-plus-component fit lines recover
//! the model coefficients.

use faer::{Col, Mat};
use olsdiag::model::OlsModel;
use olsdiag::partial::{added_variable_plots, component_plus_residual_plots, correlations};

fn main() {
    let x = Mat::from_fn(40, 3, |i, j| {
        ((i * (2 * j + 1)) as f64).sin() + (j + 1) as f64 * 0.05 * i as f64
    });
    let noise = [0.2, -0.4, 0.3, -0.1, 0.0, 0.1, -0.2, 0.2];
    let y = Col::from_fn(40, |i| {
        2.0 + 1.2 * x[(i, 0)] - 0.8 * x[(i, 1)] + 0.4 * x[(i, 2)] + noise[i % 8]
    });

    let model = OlsModel::builder()
        .response_name("yield")
        .predictor_names(["temp", "pressure", "time"])
        .fit(&x, &y)
        .expect("fit should succeed");

    println!("=== Correlations ===\n");
    let table = correlations(&model).expect("correlations should succeed");
    println!("{table}");

    println!("\n\n=== Added-variable plots ===\n");
    let av = added_variable_plots(&model).expect("plots should succeed");
    for (panel, &coef) in av.panels.iter().zip(model.coefficients().iter()) {
        println!(
            "{:>10}: slope {:.4}  (model coefficient {:.4})",
            panel.predictor, panel.slope, coef
        );
    }

    println!("\n\n=== Residual-plus-component lines ===\n");
    let cr = component_plus_residual_plots(&model);
    for panel in &cr.panels {
        println!(
            "{:>10}: slope {:.4}, intercept {:.4}",
            panel.predictor, panel.line_slope, panel.line_intercept
        );
    }
}
