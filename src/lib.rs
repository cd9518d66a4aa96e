//! Diagnostics for ordinary least squares regression models.
//!
//! This library fits an OLS model and derives the numeric tables behind the
//! classical model-checking plots: collinearity measures (VIF, tolerance,
//! condition indices with variance-decomposition proportions), fit assessment
//! (residual-fit spread, observed vs predicted, lack-of-fit ANOVA), and
//! variable-contribution views (added-variable plots, partial and
//! semipartial correlations, residual-plus-component plots).
//!
//! # Example
//!
//! ```rust,ignore
//! use olsdiag::prelude::*;
//!
//! // Fit a model with named predictors
//! let model = OlsModel::builder()
//!     .response_name("mpg")
//!     .predictor_names(["disp", "hp", "wt"])
//!     .fit(&x, &y)?;
//!
//! // Collinearity screening
//! let table = vif_tolerance(&model)?;
//! println!("{table}");
//!
//! // Lack-of-fit test for a simple regression
//! let anova = lack_of_fit_anova(&simple_model)?;
//! println!("{anova}");
//! ```

pub mod assessment;
pub mod collinearity;
pub mod error;
pub mod model;
pub mod partial;
pub mod utils;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::assessment::{
        lack_of_fit_anova, observed_vs_predicted, residual_fit_spread, LackOfFitAnova,
        ObservedVsPredictedPlot, QuantilePanel, ResidualFitSpreadPlot,
    };
    pub use crate::collinearity::{
        collinearity_diagnostics, eigen_condition_index, vif_tolerance, CollinearityDiagnostics,
        ConditionIndexTable, VifRow, VifTable,
    };
    pub use crate::error::DiagnosticsError;
    pub use crate::model::{ModelError, OlsModel, OlsModelBuilder};
    pub use crate::partial::{
        added_variable_plots, component_plus_residual_plots, correlations, AddedVariablePanel,
        AddedVariablePlots, ComponentResidualPanel, ComponentResidualPlots, CorrelationRow,
        CorrelationTable,
    };
}

pub use crate::error::DiagnosticsError;
pub use crate::model::{ModelError, OlsModel, OlsModelBuilder};
