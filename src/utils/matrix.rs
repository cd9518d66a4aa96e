//! Matrix and vector helpers shared by the diagnostic routines.

use faer::{Col, Mat};

/// Extract column `j` of `x` as an owned vector.
pub fn column(x: &Mat<f64>, j: usize) -> Col<f64> {
    Col::from_fn(x.nrows(), |i| x[(i, j)])
}

/// Copy of `x` with column `drop` removed.
pub fn drop_column(x: &Mat<f64>, drop: usize) -> Mat<f64> {
    Mat::from_fn(x.nrows(), x.ncols() - 1, |i, j| {
        if j < drop {
            x[(i, j)]
        } else {
            x[(i, j + 1)]
        }
    })
}

/// Arithmetic mean of a vector.
pub fn mean(v: &Col<f64>) -> f64 {
    v.iter().sum::<f64>() / v.nrows() as f64
}

/// Pearson correlation between two vectors of equal length.
///
/// Returns NaN when either vector has zero variance.
pub fn pearson(a: &Col<f64>, b: &Col<f64>) -> f64 {
    let ma = mean(a);
    let mb = mean(b);

    let mut sab = 0.0;
    let mut saa = 0.0;
    let mut sbb = 0.0;
    for i in 0..a.nrows() {
        let da = a[i] - ma;
        let db = b[i] - mb;
        sab += da * db;
        saa += da * da;
        sbb += db * db;
    }

    if saa <= 0.0 || sbb <= 0.0 {
        return f64::NAN;
    }
    sab / (saa * sbb).sqrt()
}

/// Least-squares line through the points `(x_i, y_i)`.
///
/// Returns `(intercept, slope)`. The slope is NaN when `x` is constant.
pub fn least_squares_line(x: &Col<f64>, y: &Col<f64>) -> (f64, f64) {
    let mx = mean(x);
    let my = mean(y);

    let mut sxy = 0.0;
    let mut sxx = 0.0;
    for i in 0..x.nrows() {
        let dx = x[i] - mx;
        sxy += dx * (y[i] - my);
        sxx += dx * dx;
    }

    if sxx <= 0.0 {
        return (my, f64::NAN);
    }
    let slope = sxy / sxx;
    (my - slope * mx, slope)
}

/// Empirical cumulative proportions for an ascending-sorted slice.
///
/// Each entry is the fraction of values less than or equal to it, so tied
/// values share the proportion of the last member of their run.
pub fn ecdf_proportions(sorted: &[f64]) -> Vec<f64> {
    let n = sorted.len();
    let mut props = vec![0.0; n];

    let mut i = 0;
    while i < n {
        let mut j = i;
        while j + 1 < n && sorted[j + 1] == sorted[i] {
            j += 1;
        }
        let p = (j + 1) as f64 / n as f64;
        for prop in props.iter_mut().take(j + 1).skip(i) {
            *prop = p;
        }
        i = j + 1;
    }

    props
}
