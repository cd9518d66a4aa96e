//! Multicollinearity diagnostics.
//!
//! Two complementary views of linear dependence among the predictors:
//!
//! - **VIF and tolerance**: how much each coefficient's variance is inflated
//!   by the other predictors
//! - **Condition indices**: eigenvalue analysis of the scaled model matrix
//!   with variance-decomposition proportions, which localizes a
//!   near-dependency to the coefficients it damages
//!
//! # Example
//!
//! ```rust,ignore
//! use olsdiag::collinearity::{collinearity_diagnostics, vif_tolerance};
//!
//! let model = OlsModel::fit(&x, &y)?;
//!
//! let vif = vif_tolerance(&model)?;
//! for row in &vif.rows {
//!     println!("{}: VIF = {:.2}", row.predictor, row.vif);
//! }
//!
//! // Or both tables at once
//! println!("{}", collinearity_diagnostics(&model)?);
//! ```

mod eigen;
mod report;
mod vif;

pub use eigen::{eigen_condition_index, ConditionIndexTable};
pub use report::{collinearity_diagnostics, CollinearityDiagnostics};
pub use vif::{vif_tolerance, VifRow, VifTable};
