//! Randomised action sequences must keep the undo invariants.

mod common;

use common::Harness;
use core_actions::{Action, ActionCategory, MotionKind};
use proptest::prelude::*;

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        "[a-c -]{1,3}".prop_map(Action::Insert),
        Just(Action::Backspace),
        Just(Action::DeleteForward),
        Just(Action::BackspaceWord),
        Just(Action::KillToEnd),
        Just(Action::Move {
            motion: MotionKind::Left,
            extend: false
        }),
        Just(Action::Move {
            motion: MotionKind::Home,
            extend: true
        }),
        Just(Action::Undo),
        Just(Action::Redo),
        Just(Action::UndoEmacs),
    ]
}

proptest! {
    #[test]
    fn redo_is_empty_after_any_changing_edit(actions in proptest::collection::vec(action_strategy(), 0..48)) {
        let mut h = Harness::new();
        for action in actions {
            let category = action.category();
            let r = h.run(action);
            if r.changed && matches!(category, ActionCategory::Insertion | ActionCategory::Deletion | ActionCategory::Batch) {
                prop_assert_eq!(h.state.undo_engine().redo_depth(), 0);
            }
        }
    }

    #[test]
    fn undo_then_redo_restores_state(actions in proptest::collection::vec(action_strategy(), 0..48)) {
        let mut h = Harness::new();
        for action in actions {
            h.run(action);
        }
        if h.state.undo_engine().undo_depth() > 0 {
            let before = h.halves();
            h.run(Action::Undo);
            h.run(Action::Redo);
            prop_assert_eq!(h.halves(), before);
        }
    }

    #[test]
    fn emacs_undo_always_terminates(actions in proptest::collection::vec(action_strategy(), 0..32)) {
        let mut h = Harness::new();
        for action in actions {
            h.run(action);
        }
        let bound = h.state.undo_engine().emacs_len() + 2;
        let mut steps = 0;
        while h.run(Action::UndoEmacs).changed {
            steps += 1;
            prop_assert!(steps <= bound);
        }
    }
}
