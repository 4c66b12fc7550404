use super::MenuStateId;
use thiserror::Error;

/// Errors reported by the menu service
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuError {
    /// No handler is registered for the requested state
    #[error("no handler registered for menu state {0}")]
    UnknownState(MenuStateId),

    /// `resume_last_state` was called with nothing to go back to
    #[error("navigation history is empty")]
    HistoryEmpty,

    /// Two handlers in one registration batch claim the same state
    #[error("menu state {0} registered twice")]
    DuplicateHandler(MenuStateId),

    /// A state required at startup has no handler
    #[error("menu state {0} has no handler")]
    MissingHandler(MenuStateId),

    /// The process is shutting down; no more transitions are accepted
    #[error("exit already requested")]
    ExitRequested,
}
