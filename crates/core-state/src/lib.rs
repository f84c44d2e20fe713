//! Line editing state: split buffer, selection anchor, prompt, command
//! history, dynamic expansion and the undo engine.
//!
//! `LineState` owns everything a single interactive input line needs. The
//! buffer, selection, undo logs and expansion session are transient and are
//! reset by `reset_line`; the command history lives for the whole process.
//!
//! Selection model:
//! - The selection is the half-open range between `anchor` and the cursor.
//! - Every non-extending operation re-anchors at the cursor, collapsing the
//!   selection. Extending motions leave the anchor alone.
//! - The anchor is clamped to the line length on every read.
//!
//! Change detection: `step_line` records the visible state before an action
//! and `changed` compares against it; this is what the renderer consumes.

use core_text::motion::{Direction, WordWalk};
use core_text::LineBuffer;
use tracing::trace;

pub mod expand;
pub mod history;
pub mod undo;

use expand::DynamicExpander;
use history::CommandHistory;
use undo::{UndoEngine, UndoSnapshot};
pub use history::DEFAULT_MAX_CMD_HISTORY;
pub use undo::UNDO_HISTORY_MAX;

/// Bounds handed to the engine at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineLimits {
    pub max_cmd_history: usize,
    pub undo_limit: usize,
}

impl Default for EngineLimits {
    fn default() -> Self {
        Self {
            max_cmd_history: DEFAULT_MAX_CMD_HISTORY,
            undo_limit: UNDO_HISTORY_MAX,
        }
    }
}

/// The visible triple the renderer compares between actions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct VisibleLine {
    prompt: String,
    before: String,
    after: String,
}

/// Read-only view of the line for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineView<'a> {
    pub prompt: &'a str,
    pub before: &'a str,
    pub after: &'a str,
    pub selection: (usize, usize),
}

#[derive(Debug)]
pub struct LineState {
    prompt: String,
    buffer: LineBuffer,
    prev: VisibleLine,
    anchor: usize,
    history: CommandHistory,
    expander: DynamicExpander,
    undo: UndoEngine,
}

impl Default for LineState {
    fn default() -> Self {
        Self::new(EngineLimits::default())
    }
}

impl LineState {
    pub fn new(limits: EngineLimits) -> Self {
        Self {
            prompt: String::new(),
            buffer: LineBuffer::new(),
            prev: VisibleLine::default(),
            anchor: 0,
            history: CommandHistory::new(limits.max_cmd_history),
            expander: DynamicExpander::new(),
            undo: UndoEngine::new(limits.undo_limit),
        }
    }

    pub fn buffer(&self) -> &LineBuffer {
        &self.buffer
    }
    pub fn before(&self) -> &str {
        self.buffer.before()
    }
    pub fn after(&self) -> &str {
        self.buffer.after()
    }
    pub fn text(&self) -> String {
        self.buffer.text()
    }
    pub fn prompt(&self) -> &str {
        &self.prompt
    }
    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }
    pub fn history(&self) -> &CommandHistory {
        &self.history
    }
    pub fn history_mut(&mut self) -> &mut CommandHistory {
        &mut self.history
    }
    pub fn expander(&self) -> &DynamicExpander {
        &self.expander
    }
    pub fn undo_engine(&self) -> &UndoEngine {
        &self.undo
    }
    pub fn undo_engine_mut(&mut self) -> &mut UndoEngine {
        &mut self.undo
    }

    pub fn view(&self) -> LineView<'_> {
        LineView {
            prompt: &self.prompt,
            before: self.buffer.before(),
            after: self.buffer.after(),
            selection: self.selection_range(),
        }
    }

    // ---- line lifecycle ----

    /// Prepare for a new action: remember the visible state.
    pub fn step_line(&mut self) {
        self.prev = VisibleLine {
            prompt: self.prompt.clone(),
            before: self.buffer.before().to_string(),
            after: self.buffer.after().to_string(),
        };
    }

    /// Start a new input line.
    pub fn reset_line(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
        self.buffer.clear();
        self.anchor = 0;
        self.expander.discard();
        self.undo.clear();
        self.history.end_browsing();
        self.reset_prev_line();
        trace!(target: "state", prompt = %self.prompt, "reset_line");
    }

    /// Forget the previous visible state so the whole line repaints.
    pub fn reset_prev_line(&mut self) {
        self.prev = VisibleLine::default();
    }

    /// True if prompt, before or after differ from the state at `step_line`.
    pub fn changed(&self) -> bool {
        self.prompt != self.prev.prompt || self.buffer_changed()
    }

    /// True if the buffer halves differ from the state at `step_line`.
    pub fn buffer_changed(&self) -> bool {
        self.buffer.before() != self.prev.before || self.buffer.after() != self.prev.after
    }

    /// Undo snapshot of the state recorded by `step_line`.
    pub fn prev_snapshot(&self) -> UndoSnapshot {
        UndoSnapshot::new(self.prev.before.clone(), self.prev.after.clone())
    }

    /// End browsing and record the full line into the command history.
    pub fn accept_line(&mut self) -> String {
        self.history.end_browsing();
        let line = self.buffer.text();
        self.history.record(&line);
        line
    }

    // ---- selection ----

    pub fn selection_range(&self) -> (usize, usize) {
        let cursor = self.buffer.cursor();
        let anchor = self.anchor.min(self.buffer.len());
        (cursor.min(anchor), cursor.max(anchor))
    }

    pub fn selected_text(&self) -> String {
        let (lo, hi) = self.selection_range();
        self.buffer.text().get(lo..hi).unwrap_or_default().to_string()
    }

    pub fn has_selection(&self) -> bool {
        let (lo, hi) = self.selection_range();
        lo != hi
    }

    pub fn reset_selection(&mut self) {
        self.anchor = self.buffer.cursor();
    }

    /// Remove the selected text and return it.
    pub fn delete_selection(&mut self) -> String {
        let (lo, hi) = self.selection_range();
        let removed = self.buffer.remove_range(lo, hi);
        self.reset_selection();
        removed
    }

    pub fn select_all(&mut self) {
        self.buffer.end();
        self.anchor = 0;
        self.history.end_browsing();
    }

    fn after_motion(&mut self, extend: bool) {
        if extend {
            self.history.end_browsing();
        } else {
            self.reset_selection();
        }
    }

    // ---- motions ----

    pub fn move_left(&mut self, extend: bool) {
        self.buffer.step_left();
        self.after_motion(extend);
    }

    pub fn move_right(&mut self, extend: bool) {
        self.buffer.step_right();
        self.after_motion(extend);
    }

    pub fn move_home(&mut self, extend: bool) {
        self.buffer.home();
        self.after_motion(extend);
    }

    pub fn move_end(&mut self, extend: bool) {
        self.buffer.end();
        self.after_motion(extend);
    }

    pub fn move_word_left(&mut self, extend: bool) {
        let mut walk = WordWalk::new(Direction::Backward);
        while walk.next_step(&self.buffer) {
            self.move_left(extend);
        }
    }

    pub fn move_word_right(&mut self, extend: bool) {
        let mut walk = WordWalk::new(Direction::Forward);
        while walk.next_step(&self.buffer) {
            self.move_right(extend);
        }
    }

    // ---- edits ----

    /// Insert at the cursor, replacing any selection.
    pub fn insert(&mut self, text: &str) {
        if self.has_selection() {
            self.delete_selection();
        }
        self.buffer.insert(text);
        self.reset_selection();
    }

    /// Insert clipboard text: surrounding NULs dropped, line breaks flattened.
    pub fn paste(&mut self, text: &str) {
        let cleaned = text
            .trim_matches('\0')
            .replace('\r', "")
            .replace('\n', " ");
        self.insert(&cleaned);
    }

    /// Replace the before-cursor half with a completed line.
    pub fn complete(&mut self, completed: &str) {
        let after = self.buffer.after().to_string();
        self.buffer.set(completed, after);
        self.reset_selection();
    }

    pub fn delete_forward(&mut self) {
        if self.has_selection() {
            self.delete_selection();
        } else {
            self.buffer.delete_after();
            self.reset_selection();
        }
    }

    pub fn backspace(&mut self) {
        if self.has_selection() {
            self.delete_selection();
        } else {
            self.buffer.delete_before();
            self.reset_selection();
        }
    }

    pub fn delete_word_forward(&mut self) {
        if self.has_selection() {
            self.delete_selection();
            return;
        }
        let mut walk = WordWalk::new(Direction::Forward);
        while walk.next_step(&self.buffer) {
            self.delete_forward();
        }
    }

    pub fn backspace_word(&mut self) {
        if self.has_selection() {
            self.delete_selection();
            return;
        }
        let mut walk = WordWalk::new(Direction::Backward);
        while walk.next_step(&self.buffer) {
            self.backspace();
        }
    }

    pub fn kill_to_end(&mut self) {
        if self.has_selection() {
            self.delete_selection();
        } else {
            self.buffer.clear_after();
            self.reset_selection();
        }
    }

    /// Escape: clear a selection if there is one; otherwise stash the line in
    /// history and clear it (unless browsing with a filter) and stop browsing.
    pub fn escape(&mut self) {
        if self.has_selection() {
            self.reset_selection();
            return;
        }
        if !self.history.is_filtering() {
            let line = self.buffer.text();
            self.history.record(&line);
            self.buffer.clear();
        }
        self.history.end_browsing();
        self.reset_selection();
    }

    // ---- history ----

    pub fn browse_previous(&mut self) {
        let line = self.buffer.text();
        if let Some(entry) = self.history.browse_previous(&line) {
            self.buffer.set(entry, "");
        }
        self.reset_selection();
    }

    pub fn browse_next(&mut self) {
        if let Some(entry) = self.history.browse_next() {
            self.buffer.set(entry, "");
        }
        self.reset_selection();
    }

    pub fn end_browsing(&mut self) {
        self.history.end_browsing();
    }

    /// Remove the displayed line from the command history.
    pub fn zap_history(&mut self) -> bool {
        self.history.end_browsing();
        let line = self.buffer.text();
        self.history.zap(&line)
    }

    // ---- expansion ----

    pub fn expand(&mut self) {
        if let Some(before) = self.expander.expand(self.buffer.before(), &self.history) {
            let after = self.buffer.after().to_string();
            self.buffer.set(before, after);
        }
        self.reset_selection();
    }

    pub fn discard_expansion(&mut self) {
        self.expander.discard();
    }

    // ---- undo ----

    pub fn undo(&mut self) -> bool {
        let restored = self.undo.undo(&mut self.buffer);
        self.reset_selection();
        restored
    }

    pub fn redo(&mut self) -> bool {
        let restored = self.undo.redo(&mut self.buffer);
        self.reset_selection();
        restored
    }

    pub fn undo_emacs(&mut self) -> bool {
        let restored = self.undo.undo_emacs(&mut self.buffer);
        self.reset_selection();
        restored
    }
}
