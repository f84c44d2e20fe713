//! Undo / Redo handling.
//!
//! Delegates to the snapshot logs inside `LineState`. Checkpointing of the
//! resulting change (emacs undo into the standard log, redo into the emacs
//! log) is decided by the dispatcher after the handler returns.

use core_state::LineState;

pub(crate) fn handle_undo(state: &mut LineState) {
    let restored = state.undo();
    let engine = state.undo_engine();
    tracing::trace!(target: "actions.dispatch", op = "undo", restored, undo_depth = engine.undo_depth(), redo_depth = engine.redo_depth(), "undo");
}

pub(crate) fn handle_redo(state: &mut LineState) {
    let restored = state.redo();
    let engine = state.undo_engine();
    tracing::trace!(target: "actions.dispatch", op = "redo", restored, undo_depth = engine.undo_depth(), redo_depth = engine.redo_depth(), "redo");
}

pub(crate) fn handle_undo_emacs(state: &mut LineState) {
    let restored = state.undo_emacs();
    let engine = state.undo_engine();
    tracing::trace!(target: "actions.dispatch", op = "undo_emacs", restored, cursor = ?engine.emacs_cursor(), len = engine.emacs_len(), "undo_emacs");
}
