//! Dispatcher applying `Action` to mutable line state.
//!
//! Sub-modules:
//! * `motion`        - cursor movement and selection extension
//! * `edit`          - text mutation (insert/complete/expand/delete/kill/escape)
//! * `clipboard_ops` - copy/cut/paste through the clipboard collaborator
//! * `history`       - command history browsing
//! * `undo`          - standard and emacs-style undo / redo
//!
//! Every action runs to completion before checkpointing: the handler mutates
//! the state first, then `checkpoint` compares against the snapshot taken by
//! `step_line` and appends to the undo logs. A checkpoint therefore always
//! holds a state that was actually visible.
//!
//! Checkpoint rule (both logs fed from the same pre-action snapshot):
//! * the buffer must have changed, and
//! * the action is a batch action, or an insertion/deletion action whose
//!   kind differs from the previous action, or
//! * for the standard log: the action is an emacs undo;
//!   for the emacs log: the action is a redo.

use crate::{Action, ActionCategory, ActionKind, Clipboard};
use core_state::LineState;

mod clipboard_ops;
mod edit;
mod history;
mod motion;
mod undo;

/// Result of dispatching a single `Action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchResult {
    /// Prompt or line text differs from before the action (repaint needed).
    pub changed: bool,
    /// A standard undo checkpoint was recorded.
    pub checkpoint: bool,
}

/// Owns the cross-action bookkeeping (the previous action kind).
#[derive(Debug, Default)]
pub struct Dispatcher {
    last_action: Option<ActionKind>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_action(&self) -> Option<ActionKind> {
        self.last_action
    }

    /// Forget batching state; call when a new input line starts.
    pub fn reset(&mut self) {
        self.last_action = None;
    }

    /// Apply an action to the line state.
    pub fn dispatch(
        &mut self,
        action: Action,
        state: &mut LineState,
        clipboard: &mut dyn Clipboard,
    ) -> DispatchResult {
        let kind = action.kind();
        state.step_line();
        if kind != ActionKind::Expand {
            state.discard_expansion();
        }
        if kind != ActionKind::UndoEmacs {
            state.undo_engine_mut().end_emacs_walk();
        }

        match action {
            Action::Move {
                motion: motion_kind,
                extend,
            } => motion::handle_motion(motion_kind, extend, state),
            Action::SelectAll => state.select_all(),
            Action::Insert(_)
            | Action::Complete(_)
            | Action::Expand
            | Action::DeleteForward
            | Action::Backspace
            | Action::DeleteWordForward
            | Action::BackspaceWord
            | Action::KillToEnd
            | Action::Escape => edit::handle_edit(action, state),
            Action::Copy => clipboard_ops::handle_copy(state, clipboard),
            Action::Cut => clipboard_ops::handle_cut(state, clipboard),
            Action::Paste => clipboard_ops::handle_paste(state, clipboard),
            Action::HistoryPrevious | Action::HistoryNext | Action::HistoryZap => {
                history::handle_history(kind, state)
            }
            Action::Undo => undo::handle_undo(state),
            Action::Redo => undo::handle_redo(state),
            Action::UndoEmacs => undo::handle_undo_emacs(state),
        }

        if !kind.keeps_browsing() {
            state.end_browsing();
        }

        let checkpoint = self.checkpoint(kind, state);
        self.last_action = Some(kind);
        let result = DispatchResult {
            changed: state.changed(),
            checkpoint,
        };
        tracing::trace!(target: "actions.dispatch", ?kind, changed = result.changed, checkpoint, "dispatch");
        result
    }

    fn checkpoint(&self, kind: ActionKind, state: &mut LineState) -> bool {
        if !state.buffer_changed() {
            return false;
        }
        let category = kind.category();
        let new_batch = match category {
            ActionCategory::Batch => true,
            ActionCategory::Insertion | ActionCategory::Deletion => {
                self.last_action != Some(kind)
            }
            _ => false,
        };
        let standard = new_batch || kind == ActionKind::UndoEmacs;
        let emacs = new_batch || kind == ActionKind::Redo;
        let snapshot = state.prev_snapshot();
        let undo = state.undo_engine_mut();
        if standard {
            undo.push_checkpoint(snapshot.clone());
        } else if matches!(
            category,
            ActionCategory::Insertion | ActionCategory::Deletion
        ) {
            undo.clear_redo();
        }
        if emacs {
            undo.push_emacs_checkpoint(snapshot);
        }
        standard
    }
}
