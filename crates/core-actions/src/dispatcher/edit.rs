//! Text edit action handling.
//!
//! Selection-aware semantics live on `LineState`; this layer only routes
//! and traces. Batching decisions are made by the dispatcher afterwards.

use crate::Action;
use core_state::LineState;

pub(crate) fn handle_edit(action: Action, state: &mut LineState) {
    let before = state.buffer().cursor();
    let op = match action {
        Action::Insert(text) => {
            state.insert(&text);
            "insert"
        }
        Action::Complete(line) => {
            state.complete(&line);
            "complete"
        }
        Action::Expand => {
            state.expand();
            "expand"
        }
        Action::DeleteForward => {
            state.delete_forward();
            "delete_forward"
        }
        Action::Backspace => {
            state.backspace();
            "backspace"
        }
        Action::DeleteWordForward => {
            state.delete_word_forward();
            "delete_word_forward"
        }
        Action::BackspaceWord => {
            state.backspace_word();
            "backspace_word"
        }
        Action::KillToEnd => {
            state.kill_to_end();
            "kill_to_end"
        }
        Action::Escape => {
            state.escape();
            "escape"
        }
        other => {
            tracing::warn!(target: "actions.dispatch", action = ?other, "not_an_edit");
            return;
        }
    };
    tracing::trace!(target: "actions.dispatch", op, from = before, to = state.buffer().cursor(), "edit");
}
