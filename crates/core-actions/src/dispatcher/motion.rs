//! Cursor motion handling.

use crate::MotionKind;
use core_state::LineState;

pub(crate) fn handle_motion(kind: MotionKind, extend: bool, state: &mut LineState) {
    let before = state.buffer().cursor();
    match kind {
        MotionKind::Left => state.move_left(extend),
        MotionKind::Right => state.move_right(extend),
        MotionKind::WordLeft => state.move_word_left(extend),
        MotionKind::WordRight => state.move_word_right(extend),
        MotionKind::Home => state.move_home(extend),
        MotionKind::End => state.move_end(extend),
    }
    tracing::trace!(target: "actions.dispatch", ?kind, extend, from = before, to = state.buffer().cursor(), "motion");
}
