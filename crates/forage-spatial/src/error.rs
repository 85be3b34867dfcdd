use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("perception radius must be positive, got {0}")]
    NonPositiveRadius(f64),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
