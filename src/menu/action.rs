use super::MenuStateId;

/// What a widget does when it is activated
///
/// Every button carries exactly one action. The slot index and the failure
/// text are captured when the GUI is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ChangeState(MenuStateId),
    ResumeLast,
    LoadSlot { slot: usize, failure: String },
    SaveSlot { slot: usize, failure: String },
    StartNewGame,
    ToggleFullscreen,
    ShowMessage(String),
    ChangeLocale(String),
    Exit,
}

impl Action {
    /// Slot index for load/save actions
    pub fn slot(&self) -> Option<usize> {
        match self {
            Action::LoadSlot { slot, .. } | Action::SaveSlot { slot, .. } => Some(*slot),
            _ => None,
        }
    }
}
