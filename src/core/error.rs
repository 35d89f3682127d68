use thiserror::Error;

/// Why a loadout string failed to parse.
///
/// Every variant is returned as a value; the codec never panics on
/// malformed input. Unrecognized skill GUIDs are deliberately absent
/// here - a catalog miss drops the node, it does not fail the parse.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("export string is empty")]
    EmptyInput,

    #[error("invalid format: expected {expected} prefix")]
    UnrecognizedFormat { expected: &'static str },

    #[error("corrupt encoding: {0}")]
    CorruptEncoding(#[from] base64::DecodeError),

    #[error("corrupt payload: {0}")]
    CorruptPayload(#[from] serde_json::Error),

    #[error("invalid loadout structure: missing character or nodes")]
    InvalidStructure,
}

/// Why a placement request was rejected
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    #[error("position is not on the cube lattice")]
    NotOnLattice,

    #[error("position is outside the grid radius")]
    OutOfBounds,

    #[error("position is already occupied")]
    Occupied,

    #[error("fixed skill can only occupy its own cell")]
    FixedPosition,
}

pub type Result<T> = std::result::Result<T, ParseError>;
