mod common;

use common::{Harness, mv};
use core_actions::{Action, MotionKind};
use pretty_assertions::assert_eq;

#[test]
fn filtered_browse_cycles_only_matching_entries() {
    let mut h = Harness::with_history(&["cd a", "ls", "cd b"]);
    h.type_text("cd");
    let mut seen = Vec::new();
    for _ in 0..3 {
        h.run(Action::HistoryPrevious);
        seen.push(h.text());
    }
    assert_eq!(seen, ["cd b", "cd a", "cd a"]);

    h.run(Action::HistoryNext);
    assert_eq!(h.text(), "cd b");
    h.run(Action::HistoryNext);
    assert_eq!(h.text(), "cd");
    h.run(Action::HistoryNext);
    assert_eq!(h.text(), "cd");
    assert_eq!(h.state.history().entries(), ["cd a", "ls", "cd b"]);
}

#[test]
fn any_other_action_ends_browsing() {
    let mut h = Harness::with_history(&["make install", "ls"]);
    h.type_text("make");
    h.run(Action::HistoryPrevious);
    assert_eq!(h.text(), "make install");
    assert!(h.state.history().is_filtering());

    h.run(mv(MotionKind::Left));
    assert!(!h.state.history().is_filtering());
    assert_eq!(h.state.history().entries(), ["make install", "ls"]);
    assert_eq!(h.text(), "make install");
}

#[test]
fn browsing_never_checkpoints() {
    let mut h = Harness::with_history(&["cargo test"]);
    h.run(Action::HistoryPrevious);
    assert_eq!(h.text(), "cargo test");
    assert_eq!(h.state.undo_engine().undo_depth(), 0);
}

#[test]
fn exhausted_history_is_a_noop() {
    let mut h = Harness::new();
    let r = h.run(Action::HistoryPrevious);
    assert!(!r.changed);
    let r = h.run(Action::HistoryNext);
    assert!(!r.changed);
}

#[test]
fn escape_stashes_line_and_undo_brings_it_back() {
    let mut h = Harness::new();
    h.type_text("make test");
    h.run(Action::Escape);
    assert_eq!(h.text(), "");
    assert_eq!(h.state.history().entries(), ["make test"]);
    h.run(Action::Undo);
    assert_eq!(h.text(), "make test");
}

#[test]
fn escape_while_filtering_keeps_history_clean() {
    let mut h = Harness::with_history(&["cd a"]);
    h.type_text("cd");
    h.run(Action::HistoryPrevious);
    h.run(Action::Escape);
    assert_eq!(h.state.history().entries(), ["cd a"]);
    assert_eq!(h.text(), "cd a");
}

#[test]
fn zap_removes_displayed_entry() {
    let mut h = Harness::with_history(&["rm -rf build", "ls"]);
    h.type_text("rm");
    h.run(Action::HistoryPrevious);
    assert_eq!(h.text(), "rm -rf build");
    h.run(Action::HistoryZap);
    assert_eq!(h.state.history().entries(), ["ls"]);
}

#[test]
fn accepted_line_goes_to_history_and_resets() {
    let mut h = Harness::with_history(&["ls"]);
    h.type_text("pwd");
    let line = h.state.accept_line();
    assert_eq!(line, "pwd");
    h.state.reset_line("> ");
    h.dispatcher.reset();
    assert_eq!(h.state.history().entries(), ["ls", "pwd"]);
    assert_eq!(h.text(), "");
    assert_eq!(h.state.undo_engine().undo_depth(), 0);
}
