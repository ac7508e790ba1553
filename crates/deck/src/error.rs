use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::SlideKind;

/// Reasons a deck could not be loaded.
#[derive(Debug, Error)]
pub enum DeckError {
    #[error("failed to read deck {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse deck: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("slide `{id}` has invalid {kind} content: {source}")]
    InvalidContent {
        id: String,
        kind: SlideKind,
        #[source]
        source: serde_json::Error,
    },
    #[error("slide `{id}` has unrecognised type `{kind}`")]
    UnknownType { id: String, kind: String },
    #[error("slide `{id}`: {reason}")]
    Chart { id: String, reason: String },
    #[error("deck contains no slides")]
    Empty,
    #[error("duplicate slide id `{0}`")]
    DuplicateId(String),
}
