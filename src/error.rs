//! Crate-level error type

use crate::config::ConfigError;
use crate::graph::{GraphError, LoadError};
use friendrec_algorithms::AlgoError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FriendRecError {
    #[error(transparent)]
    Algo(#[from] AlgoError),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type FriendRecResult<T> = Result<T, FriendRecError>;
