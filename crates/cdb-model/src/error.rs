use thiserror::Error;

use crate::board::Cord;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("missing {0} field")]
    MissingField(&'static str),
    #[error("placement must describe 8 ranks, found {0}")]
    RankCount(usize),
    #[error("rank {rank} does not describe 8 files")]
    BadRank { rank: u8 },
    #[error("unknown piece character: {0:?}")]
    UnknownPiece(char),
    #[error("invalid {field} field: {value:?}")]
    BadField { field: &'static str, value: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error("malformed move notation: {0:?}")]
    BadNotation(String),
    #[error("no piece on {0}")]
    EmptySource(Cord),
}
