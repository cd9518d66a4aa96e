//! Example demonstrating collinearity screening.
//!
//! Builds one well-behaved design and one with a near-duplicate predictor,
//! then prints the tolerance/VIF table and the eigenvalue/condition-index
//! table for each.

use faer::{Col, Mat};
use olsdiag::collinearity::collinearity_diagnostics;
use olsdiag::model::OlsModel;

fn main() {
    println!("=== Independent predictors ===\n");
    independent_predictors();

    println!("\n\n=== Near-duplicate predictors ===\n");
    near_duplicate_predictors();
}

fn independent_predictors() {
    let x = Mat::from_fn(30, 3, |i, j| match j {
        0 => ((2 * i) as f64).sin(),
        1 => ((3 * i) as f64).cos(),
        _ => ((5 * i + 1) as f64).sin(),
    });
    let noise = [0.3, -0.2, 0.5, -0.4, 0.1, -0.3];
    let y = Col::from_fn(30, |i| {
        1.0 + 0.8 * x[(i, 0)] - 0.5 * x[(i, 1)] + 0.3 * x[(i, 2)] + noise[i % 6]
    });

    let model = OlsModel::builder()
        .predictor_names(["cycle_a", "cycle_b", "cycle_c"])
        .fit(&x, &y)
        .expect("fit should succeed");

    let report = collinearity_diagnostics(&model).expect("diagnostics should succeed");
    println!("{report}");
}

fn near_duplicate_predictors() {
    // wt_reported repeats wt with a small measurement error
    let wobble = [0.02, -0.03, 0.01, -0.02, 0.03, -0.01];
    let x = Mat::from_fn(30, 3, |i, j| match j {
        0 => 2.0 + (i as f64) * 0.1,
        1 => ((i * 3) as f64).cos(),
        _ => 2.0 + (i as f64) * 0.1 + wobble[i % 6],
    });
    let noise = [0.3, -0.2, 0.5, -0.4, 0.1, -0.3];
    let y = Col::from_fn(30, |i| 4.0 + 1.5 * x[(i, 0)] - 0.7 * x[(i, 1)] + noise[i % 6]);

    let model = OlsModel::builder()
        .predictor_names(["wt", "drag", "wt_reported"])
        .fit(&x, &y)
        .expect("fit should succeed");

    let report = collinearity_diagnostics(&model).expect("diagnostics should succeed");
    println!("{report}");

    let flagged = report.vif.high_vif(10.0);
    for idx in flagged {
        println!(
            "VIF above 10: {} ({:.1})",
            report.vif.rows[idx].predictor, report.vif.rows[idx].vif
        );
    }
}
