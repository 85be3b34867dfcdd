use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("path has {got} stops; searching needs at least 2")]
    PathTooShort { got: usize },

    #[error("scan increment must be positive, got {0}")]
    NonPositiveEps(f64),
}

pub type SearchResult<T> = Result<T, SearchError>;
