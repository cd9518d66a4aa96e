//! Variable-contribution diagnostics.
//!
//! This module isolates what each predictor adds to a fitted model:
//!
//! - **Added-variable plots**: residuals of the response against residuals of
//!   one predictor, both after regressing out the remaining predictors. The
//!   slope of the point cloud equals the predictor's coefficient in the full
//!   model.
//! - **Correlations**: zero-order, partial, and semipartial (part)
//!   correlations between the response and each predictor.
//! - **Residual-plus-component plots**: partial residuals `e + b_k * x_k`
//!   against `x_k`, for judging whether a predictor enters linearly.
//!
//! # Example
//!
//! ```rust,ignore
//! use olsdiag::model::OlsModel;
//! use olsdiag::partial::{added_variable_plots, correlations};
//!
//! let model = OlsModel::fit(&x, &y)?;
//! let table = correlations(&model)?;
//! println!("{table}");
//!
//! let plots = added_variable_plots(&model)?;
//! for panel in &plots.panels {
//!     println!("{}: slope {:.4}", panel.predictor, panel.slope);
//! }
//! ```

mod added_variable;
mod component_residual;
mod correlations;

pub use added_variable::{added_variable_plots, AddedVariablePanel, AddedVariablePlots};
pub use component_residual::{
    component_plus_residual_plots, ComponentResidualPanel, ComponentResidualPlots,
};
pub use correlations::{correlations, CorrelationRow, CorrelationTable};
