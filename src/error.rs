//! Engine errors for unusable inbound updates.

use std::fmt;

use crate::Side;

/// Errors returned when a message cannot be applied to the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LadderError {
    /// A book update arrived with no quotes on one side, so no anchor can
    /// be computed from it. The engine keeps its previous state.
    EmptySide(Side),
}

impl fmt::Display for LadderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LadderError::EmptySide(side) => {
                write!(f, "book update has an empty {} side", side.book_name())
            }
        }
    }
}

impl std::error::Error for LadderError {}
