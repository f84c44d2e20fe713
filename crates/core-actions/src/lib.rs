//! Discrete line-editing actions and their dispatch.
//!
//! The keyboard layer decodes key presses into `Action` values; each variant
//! carries its own typed payload. `dispatcher::Dispatcher` applies one action
//! at a time to a `core_state::LineState` and maintains undo checkpoints.

pub mod clipboard;
pub mod dispatcher;

pub use clipboard::{Clipboard, ClipboardError, MemoryClipboard, OpenClipboard};
pub use dispatcher::{DispatchResult, Dispatcher};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionKind {
    Left,
    Right,
    WordLeft,
    WordRight,
    Home,
    End,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Cursor motion; `extend` grows the selection instead of collapsing it.
    Move { motion: MotionKind, extend: bool },
    /// Insert raw text at the cursor.
    Insert(String),
    /// Replace the before-cursor half with an externally completed line.
    Complete(String),
    /// Dynamic word expansion from command history.
    Expand,
    DeleteForward,
    Backspace,
    DeleteWordForward,
    BackspaceWord,
    KillToEnd,
    Cut,
    Copy,
    Paste,
    Escape,
    SelectAll,
    HistoryPrevious,
    HistoryNext,
    /// Remove the displayed line from command history.
    HistoryZap,
    Undo,
    Redo,
    UndoEmacs,
}

/// Payload-free tag of an `Action`, used to detect runs of the same action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Move,
    Insert,
    Complete,
    Expand,
    DeleteForward,
    Backspace,
    DeleteWordForward,
    BackspaceWord,
    KillToEnd,
    Cut,
    Copy,
    Paste,
    Escape,
    SelectAll,
    HistoryPrevious,
    HistoryNext,
    HistoryZap,
    Undo,
    Redo,
    UndoEmacs,
}

/// Undo batching class of an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionCategory {
    /// Never checkpoints.
    Navigation,
    /// A run of the same insertion action is one undo step.
    Insertion,
    /// A run of the same deletion action is one undo step.
    Deletion,
    /// Always its own undo step.
    Batch,
    Undo,
    Redo,
    UndoEmacs,
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Move { .. } => ActionKind::Move,
            Action::Insert(_) => ActionKind::Insert,
            Action::Complete(_) => ActionKind::Complete,
            Action::Expand => ActionKind::Expand,
            Action::DeleteForward => ActionKind::DeleteForward,
            Action::Backspace => ActionKind::Backspace,
            Action::DeleteWordForward => ActionKind::DeleteWordForward,
            Action::BackspaceWord => ActionKind::BackspaceWord,
            Action::KillToEnd => ActionKind::KillToEnd,
            Action::Cut => ActionKind::Cut,
            Action::Copy => ActionKind::Copy,
            Action::Paste => ActionKind::Paste,
            Action::Escape => ActionKind::Escape,
            Action::SelectAll => ActionKind::SelectAll,
            Action::HistoryPrevious => ActionKind::HistoryPrevious,
            Action::HistoryNext => ActionKind::HistoryNext,
            Action::HistoryZap => ActionKind::HistoryZap,
            Action::Undo => ActionKind::Undo,
            Action::Redo => ActionKind::Redo,
            Action::UndoEmacs => ActionKind::UndoEmacs,
        }
    }

    pub fn category(&self) -> ActionCategory {
        self.kind().category()
    }
}

impl ActionKind {
    pub fn category(self) -> ActionCategory {
        match self {
            ActionKind::Move
            | ActionKind::SelectAll
            | ActionKind::HistoryPrevious
            | ActionKind::HistoryNext
            | ActionKind::HistoryZap => ActionCategory::Navigation,
            ActionKind::Insert | ActionKind::Complete | ActionKind::Expand => {
                ActionCategory::Insertion
            }
            ActionKind::DeleteForward | ActionKind::Backspace => ActionCategory::Deletion,
            ActionKind::DeleteWordForward
            | ActionKind::BackspaceWord
            | ActionKind::KillToEnd
            | ActionKind::Cut
            | ActionKind::Copy
            | ActionKind::Paste
            | ActionKind::Escape => ActionCategory::Batch,
            ActionKind::Undo => ActionCategory::Undo,
            ActionKind::Redo => ActionCategory::Redo,
            ActionKind::UndoEmacs => ActionCategory::UndoEmacs,
        }
    }

    /// History browsing keeps the browse session alive; every other action ends it.
    pub fn keeps_browsing(self) -> bool {
        matches!(self, ActionKind::HistoryPrevious | ActionKind::HistoryNext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payloads_share_a_kind() {
        assert_eq!(
            Action::Insert("a".into()).kind(),
            Action::Insert("b".into()).kind()
        );
        assert_eq!(
            Action::Move {
                motion: MotionKind::Left,
                extend: false
            }
            .category(),
            ActionCategory::Navigation
        );
    }

    #[test]
    fn word_deletes_and_kill_are_batches() {
        for a in [Action::BackspaceWord, Action::DeleteWordForward, Action::KillToEnd] {
            assert_eq!(a.category(), ActionCategory::Batch);
        }
        assert_eq!(Action::Backspace.category(), ActionCategory::Deletion);
        assert_eq!(Action::Expand.category(), ActionCategory::Insertion);
    }
}
