//! Copy / cut / paste.
//!
//! The clipboard is held through `OpenClipboard` so it is released on every
//! path. An unavailable clipboard or one without text is a silent no-op.

use crate::{Clipboard, OpenClipboard};
use core_state::LineState;

pub(crate) fn handle_copy(state: &mut LineState, clipboard: &mut dyn Clipboard) {
    copy_selection(state, clipboard);
}

pub(crate) fn handle_cut(state: &mut LineState, clipboard: &mut dyn Clipboard) {
    if copy_selection(state, clipboard) {
        let removed = state.delete_selection();
        tracing::trace!(target: "actions.clipboard", bytes = removed.len(), "cut");
    }
}

pub(crate) fn handle_paste(state: &mut LineState, clipboard: &mut dyn Clipboard) {
    let text = match OpenClipboard::acquire(clipboard) {
        Ok(mut open) => open.read_text(),
        Err(e) => {
            tracing::debug!(target: "actions.clipboard", error = %e, "paste_unavailable");
            return;
        }
    };
    match text {
        Some(text) => {
            tracing::trace!(target: "actions.clipboard", bytes = text.len(), "paste");
            state.paste(&text);
        }
        None => tracing::debug!(target: "actions.clipboard", "paste_no_text"),
    }
}

/// Write the selected text to the clipboard. Returns true on success.
fn copy_selection(state: &LineState, clipboard: &mut dyn Clipboard) -> bool {
    let selected = state.selected_text();
    let mut open = match OpenClipboard::acquire(clipboard) {
        Ok(open) => open,
        Err(e) => {
            tracing::debug!(target: "actions.clipboard", error = %e, "copy_unavailable");
            return false;
        }
    };
    match open.write_text(&selected) {
        Ok(()) => {
            tracing::trace!(target: "actions.clipboard", bytes = selected.len(), "copy");
            true
        }
        Err(e) => {
            tracing::debug!(target: "actions.clipboard", error = %e, "copy_failed");
            false
        }
    }
}
