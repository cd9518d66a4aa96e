//! Combined collinearity report.

use std::fmt;

use crate::collinearity::eigen::{eigen_condition_index, ConditionIndexTable};
use crate::collinearity::vif::{vif_tolerance, VifTable};
use crate::error::DiagnosticsError;
use crate::model::OlsModel;

/// VIF table and condition-index table for one model, computed together.
#[derive(Debug, Clone)]
pub struct CollinearityDiagnostics {
    pub vif: VifTable,
    pub condition_index: ConditionIndexTable,
}

impl fmt::Display for CollinearityDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.vif)?;
        write!(f, "{}", self.condition_index)
    }
}

/// Compute both collinearity diagnostics for a model.
///
/// Requires at least two predictors, as does each table on its own.
pub fn collinearity_diagnostics(
    model: &OlsModel,
) -> Result<CollinearityDiagnostics, DiagnosticsError> {
    Ok(CollinearityDiagnostics {
        vif: vif_tolerance(model)?,
        condition_index: eigen_condition_index(model)?,
    })
}
