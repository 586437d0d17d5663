//! Errors for merging element trees across a collection

use itertools::Itertools;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MergeError {
    #[error("no tree value at position(s): {}", .positions.iter().join(", "))]
    MissingTrees { positions: Vec<usize> },
}

pub type MergeResult<T> = Result<T, MergeError>;
