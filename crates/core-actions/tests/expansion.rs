mod common;

use common::{Harness, mv};
use core_actions::{Action, MotionKind};

#[test]
fn expansion_cycles_back_to_stub() {
    let mut h = Harness::with_history(&["make install", "make test"]);
    h.type_text("mak");
    h.run(Action::Expand);
    assert_eq!(h.text(), "make");
    h.run(Action::Expand);
    assert_eq!(h.text(), "mak");
    h.run(Action::Expand);
    assert_eq!(h.text(), "make");
}

#[test]
fn expansion_uses_context_word() {
    let mut h = Harness::with_history(&["git checkout main", "cargo check"]);
    h.type_text("git ch");
    h.run(Action::Expand);
    assert_eq!(h.text(), "git checkout");
    h.run(Action::Expand);
    assert_eq!(h.text(), "git check");
    h.run(Action::Expand);
    assert_eq!(h.text(), "git ch");
}

#[test]
fn expansion_keeps_after_half() {
    let mut h = Harness::with_history(&["cat README.md"]);
    h.type_text("less RE | head");
    for _ in 0.." | head".len() {
        h.run(mv(MotionKind::Left));
    }
    h.run(Action::Expand);
    assert_eq!(
        h.halves(),
        ("less README.md".to_string(), " | head".to_string())
    );
}

#[test]
fn other_actions_discard_the_session() {
    let mut h = Harness::with_history(&["make install", "make test"]);
    h.type_text("mak");
    h.run(Action::Expand);
    assert!(h.state.expander().is_active());
    h.run(mv(MotionKind::Left));
    assert!(!h.state.expander().is_active());
    h.run(mv(MotionKind::End));
    // Fresh scan: "make" has no longer extensions, so it stays put.
    h.run(Action::Expand);
    assert_eq!(h.text(), "make");
}

#[test]
fn consecutive_expansions_are_one_undo_step() {
    let mut h = Harness::with_history(&["make install", "make test", "makepkg"]);
    h.type_text("mak");
    h.run(Action::Expand);
    assert_eq!(h.text(), "makepkg");
    h.run(Action::Expand);
    assert_eq!(h.text(), "make");
    h.run(Action::Undo);
    assert_eq!(h.text(), "mak");
}
