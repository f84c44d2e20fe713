//! Command history browsing.

use crate::ActionKind;
use core_state::LineState;

pub(crate) fn handle_history(kind: ActionKind, state: &mut LineState) {
    match kind {
        ActionKind::HistoryPrevious => state.browse_previous(),
        ActionKind::HistoryNext => state.browse_next(),
        ActionKind::HistoryZap => {
            let removed = state.zap_history();
            tracing::debug!(target: "actions.dispatch", removed, "history_zap");
        }
        _ => return,
    }
    let history = state.history();
    tracing::trace!(target: "actions.dispatch", ?kind, index = history.index(), len = history.len(), filter = history.filter(), "history");
}
