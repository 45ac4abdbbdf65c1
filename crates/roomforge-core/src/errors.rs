//! Error types for the roomforge engine.

use thiserror::Error;

/// Which kind of wall opening an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpeningKind {
    Door,
    Window,
}

impl std::fmt::Display for OpeningKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OpeningKind::Door => write!(f, "door"),
            OpeningKind::Window => write!(f, "window"),
        }
    }
}

/// Errors surfaced by explicit room validation.
///
/// The geometry builders and the placement solver never return these: they
/// skip openings with bad indices and fall back to a default rectangle for
/// degenerate floors. `Room::validate` is the opt-in strict check for
/// callers that want the input contract enforced at the boundary.
#[derive(Debug, Error)]
pub enum RoomError {
    #[error("{opening} references wall {index}, but the room has {wall_count} walls")]
    WallIndexOutOfRange {
        opening: OpeningKind,
        index: usize,
        wall_count: usize,
    },

    #[error("floor polygon has {points} points, need at least 3")]
    DegenerateFloor { points: usize },

    #[error("room has no walls")]
    EmptyWalls,
}
