//! Model-fit assessment diagnostics.
//!
//! Three views of how well a fitted line describes the data:
//!
//! - **Residual-fit spread**: quantile panels comparing the spread of the
//!   centered fitted values with the spread of the residuals
//! - **Observed vs predicted**: scatter data around the 45 degree line
//! - **Lack-of-fit F test**: pure-error decomposition of the residual sum of
//!   squares for simple regressions with replicated predictor values
//!
//! # Example
//!
//! ```rust,ignore
//! use olsdiag::assessment::{lack_of_fit_anova, residual_fit_spread};
//!
//! let model = OlsModel::fit(&x, &y)?;
//!
//! let spread = residual_fit_spread(&model);
//! println!("largest residual: {}", spread.residual.value[n - 1]);
//!
//! println!("{}", lack_of_fit_anova(&model)?);
//! ```

mod lack_of_fit;
mod obs_pred;
mod spread;

pub use lack_of_fit::{lack_of_fit_anova, LackOfFitAnova};
pub use obs_pred::{observed_vs_predicted, ObservedVsPredictedPlot};
pub use spread::{residual_fit_spread, QuantilePanel, ResidualFitSpreadPlot};
