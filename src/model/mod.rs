//! Model fitting.
//!
//! Every diagnostic in this crate starts from a fitted [`OlsModel`]. The model
//! always includes an intercept and keeps its training data, which the
//! diagnostics use to refit reduced models.

mod ols;

pub use ols::{ModelError, OlsModel, OlsModelBuilder};

pub(crate) use ols::least_squares_with_intercept;
