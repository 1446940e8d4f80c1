use thiserror::Error;
use crate::services::catalog::CatalogError;

pub type Result<T> = std::result::Result<T, MatchError>;

/// Errors surfaced by the matcher and classifier
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Catalog load failed: {0}")]
    CatalogLoad(#[from] CatalogError),

    #[error("Index build failed: {0}")]
    IndexBuild(String),
}
