use std::fmt;

/// Error type for feedfwd
#[derive(Debug, PartialEq)]
pub enum Error {
    /// Indicates a vector's length disagrees with the length the topology
    /// mandates at that point.
    DimensionMismatch { expected: usize, actual: usize },
    /// Indicates a layer-size list with fewer than two layers or with an
    /// empty layer.
    InvalidTopology,
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::DimensionMismatch { expected, actual } => {
                write!(f, "Expected a vector of length {expected}, got {actual}.")
            }
            Error::InvalidTopology => {
                write!(f, "A network needs at least two layers, all of nonzero size.")
            }
        }
    }
}

impl std::error::Error for Error {}
