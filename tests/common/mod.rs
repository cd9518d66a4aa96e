//! Common test utilities and data generators.

use faer::{Col, Mat};

/// Generate simple linear data: y = x * beta + intercept + noise
pub fn generate_linear_data(
    n_samples: usize,
    n_features: usize,
    intercept: f64,
    noise_std: f64,
    seed: u64,
) -> (Mat<f64>, Col<f64>, Col<f64>) {
    // Simple deterministic "random" for reproducibility
    let mut rng_state = seed;
    let next_rand = |state: &mut u64| -> f64 {
        *state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((*state >> 33) as f64) / (u32::MAX as f64) * 2.0 - 1.0
    };

    let mut x = Mat::zeros(n_samples, n_features);
    let mut y = Col::zeros(n_samples);
    let mut true_coefficients = Col::zeros(n_features);

    // Generate true coefficients
    for j in 0..n_features {
        true_coefficients[j] = (j + 1) as f64;
    }

    // Generate X and y
    for i in 0..n_samples {
        let mut yi = intercept;
        for j in 0..n_features {
            x[(i, j)] = next_rand(&mut rng_state);
            yi += x[(i, j)] * true_coefficients[j];
        }
        yi += noise_std * next_rand(&mut rng_state);
        y[i] = yi;
    }

    (x, y, true_coefficients)
}

/// Generate data where the third predictor nearly duplicates the first, so
/// columns 0 and 2 carry almost the same information.
pub fn generate_correlated_data(n_samples: usize, seed: u64) -> (Mat<f64>, Col<f64>) {
    let mut rng_state = seed;
    let next_rand = |state: &mut u64| -> f64 {
        *state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((*state >> 33) as f64) / (u32::MAX as f64) * 2.0 - 1.0
    };

    let mut x = Mat::zeros(n_samples, 3);
    let mut y = Col::zeros(n_samples);

    for i in 0..n_samples {
        let base = next_rand(&mut rng_state);
        x[(i, 0)] = base;
        x[(i, 1)] = next_rand(&mut rng_state);
        x[(i, 2)] = base + 0.05 * next_rand(&mut rng_state);
        y[i] = 1.0 + 2.0 * x[(i, 0)] - x[(i, 1)] + 0.5 * x[(i, 2)]
            + 0.1 * next_rand(&mut rng_state);
    }

    (x, y)
}

/// Generate a simple regression with two replicates at each x level and
/// group means that lie exactly on y = 2 + 3x.
pub fn generate_replicated_design(n_levels: usize) -> (Mat<f64>, Col<f64>) {
    let n = 2 * n_levels;
    let mut x = Mat::zeros(n, 1);
    let mut y = Col::zeros(n);

    for level in 0..n_levels {
        let xv = (level + 1) as f64;
        let center = 2.0 + 3.0 * xv;
        x[(2 * level, 0)] = xv;
        x[(2 * level + 1, 0)] = xv;
        y[2 * level] = center - 0.25;
        y[2 * level + 1] = center + 0.25;
    }

    (x, y)
}
