use thiserror::Error;

use popnorm_model::ModelError;

#[derive(Debug, Error)]
pub enum NormalizeError {
    /// Without any column there is nothing to use as the region column.
    #[error("table has no columns")]
    NoColumns,
    #[error("invalid keyword configuration: {0}")]
    Keywords(#[from] ModelError),
}

pub type Result<T> = std::result::Result<T, NormalizeError>;
