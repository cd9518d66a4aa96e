//! Error types shared by the diagnostic routines.

use thiserror::Error;

use crate::model::ModelError;

/// Errors produced when a diagnostic is requested for a model that does not
/// support it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DiagnosticsError {
    /// Collinearity diagnostics need at least two predictors; with a single
    /// predictor there is nothing to be collinear with.
    #[error("collinearity diagnostics require at least 2 predictors, got {got}")]
    NotEnoughPredictors { got: usize },

    /// The lack-of-fit test is defined for simple regression only.
    #[error("lack-of-fit test requires a model with exactly one predictor, got {got}")]
    NotSimpleRegression { got: usize },

    /// Pure error cannot be estimated when every predictor value occurs once.
    #[error("lack-of-fit test requires repeated predictor values")]
    NoReplicates,

    /// With fewer than three distinct predictor values the lack-of-fit sum of
    /// squares has no degrees of freedom.
    #[error("lack-of-fit test requires at least 3 distinct predictor values, got {got}")]
    InsufficientDistinctValues { got: usize },

    /// An auxiliary regression performed by the diagnostic failed.
    #[error(transparent)]
    Model(#[from] ModelError),
}
