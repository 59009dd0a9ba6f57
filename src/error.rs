use thiserror::Error;

#[derive(Debug, Error)]
pub enum BlendError {
    #[error("Pixel coordinate out of bounds")]
    InvalidPixelCoordinate,
    #[error("{0} fragments cannot fill a target of {1} pixels")]
    MismatchedFragmentCount(usize, usize),
}

pub type BlendResult<T> = Result<T, BlendError>;
