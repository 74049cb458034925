use thiserror::Error;

use tc_catalogue::CatalogueError;
use tc_router::RouterError;

/// Failures that prevent a document from being answered at all.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("catalogue load failed: {0}")]
    Catalogue(#[from] CatalogueError),

    #[error("router build failed: {0}")]
    Router(#[from] RouterError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("query parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type QueryResult<T> = Result<T, QueryError>;
