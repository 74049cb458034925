use thiserror::Error;

/// Errors produced while loading or querying the catalogue.
///
/// Every variant except `DegenerateMetric` is a load-time failure and aborts
/// the whole load.
#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("duplicate stop name {0:?}")]
    DuplicateStop(String),

    #[error("duplicate bus name {0:?}")]
    DuplicateBus(String),

    #[error("{referenced_by} references unknown stop {stop:?}")]
    UnknownStop {
        referenced_by: String,
        stop:          String,
    },

    #[error("{0} arena is full")]
    CapacityExceeded(&'static str),

    #[error("bus {0:?} has an empty route")]
    EmptyRoute(String),

    #[error("bus {0:?} has zero geographic length; curvature is undefined")]
    DegenerateMetric(String),

    #[error("catalogue parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CatalogueResult<T> = Result<T, CatalogueError>;
