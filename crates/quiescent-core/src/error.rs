//! Error types for quiescent-core.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Request falls outside the declared bounds for its topology family.
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// A stage's bias equation has no positive real solution, or a derived
    /// resistor came out non-positive.
    #[error("infeasible design: {0}")]
    InfeasibleDesign(String),

    /// A numeric root-finding step exceeded its iteration budget.
    #[error("root finding did not converge after {iterations} iterations")]
    NumericalDivergence { iterations: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
