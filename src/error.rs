use crate::session::SessionState;

/// Everything that can go wrong while tracking a game or writing its results.
///
/// The domain variants are user-input rejections: they are reported in the
/// status line and leave all state untouched.
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    #[error("enter a game title before starting")]
    BlankTitle,

    #[error("a game is already in progress")]
    GameInProgress,

    #[error("nothing to save: no time, shots or stats recorded")]
    NothingToSave,

    #[error("no game in progress")]
    NoActiveGame,

    #[error("shots can only be recorded while on court")]
    NotOnCourt,

    #[error("cannot {action} while {state}")]
    InvalidTransition {
        action: &'static str,
        state: SessionState,
    },

    #[error("player name is required")]
    MissingPlayerName,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, TrackerError>;
