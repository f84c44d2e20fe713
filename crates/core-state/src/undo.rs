use core_text::LineBuffer;
use tracing::trace;

/// Maximum number of snapshots retained in each undo log.
pub const UNDO_HISTORY_MAX: usize = 200;

/// Buffer state captured before a mutating action. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UndoSnapshot {
    pub before: String,
    pub after: String,
}

impl UndoSnapshot {
    pub fn new(before: impl Into<String>, after: impl Into<String>) -> Self {
        Self {
            before: before.into(),
            after: after.into(),
        }
    }

    pub fn capture(buffer: &LineBuffer) -> Self {
        Self::new(buffer.before(), buffer.after())
    }

    pub fn restore(&self, buffer: &mut LineBuffer) {
        buffer.set(self.before.clone(), self.after.clone());
    }
}

/// Two independent undo systems fed by the same checkpoints.
///
/// * The standard pair is a LIFO undo stack with a mirrored redo stack.
/// * The emacs log is append-only. An undo walk moves an absolute index
///   backwards through it; the first undo of a walk appends the current
///   state so the walk can be reversed by later edits. The walk ends on any
///   other action (`end_emacs_walk`) and only then may the log be trimmed.
#[derive(Debug)]
pub struct UndoEngine {
    undo_stack: Vec<UndoSnapshot>,
    redo_stack: Vec<UndoSnapshot>,
    emacs_log: Vec<UndoSnapshot>,
    emacs_cursor: Option<usize>,
    limit: usize,
}

impl Default for UndoEngine {
    fn default() -> Self {
        Self::new(UNDO_HISTORY_MAX)
    }
}

impl UndoEngine {
    pub fn new(limit: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            emacs_log: Vec::new(),
            emacs_cursor: None,
            limit: limit.max(1),
        }
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }
    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }
    pub fn emacs_len(&self) -> usize {
        self.emacs_log.len()
    }
    /// Absolute index of the emacs log entry currently shown, while walking.
    pub fn emacs_cursor(&self) -> Option<usize> {
        self.emacs_cursor
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.emacs_log.clear();
        self.emacs_cursor = None;
    }

    /// Push a checkpoint onto the standard undo stack. Any new checkpoint
    /// invalidates the redo stack.
    pub fn push_checkpoint(&mut self, snap: UndoSnapshot) {
        if self.undo_stack.last() == Some(&snap) {
            trace!(target: "state.undo", undo_depth = self.undo_stack.len(), "snapshot_dedupe_skip");
        } else {
            self.undo_stack.push(snap);
            trace!(target: "state.undo", undo_depth = self.undo_stack.len(), redo_depth = self.redo_stack.len(), "push_checkpoint");
            if self.undo_stack.len() > self.limit {
                let _ = self.undo_stack.remove(0);
                trace!(target: "state.undo", "undo_stack_trimmed");
            }
        }
        self.clear_redo();
    }

    pub fn clear_redo(&mut self) {
        if !self.redo_stack.is_empty() {
            self.redo_stack.clear();
            trace!(target: "state.undo", "redo_stack_cleared_on_new_edit");
        }
    }

    /// Append a checkpoint to the emacs log. Ends any walk in progress.
    pub fn push_emacs_checkpoint(&mut self, snap: UndoSnapshot) {
        self.emacs_cursor = None;
        if self.emacs_log.last() == Some(&snap) {
            return;
        }
        self.emacs_log.push(snap);
        trace!(target: "state.undo", emacs_len = self.emacs_log.len(), "push_emacs_checkpoint");
        if self.emacs_log.len() > self.limit {
            let excess = self.emacs_log.len() - self.limit;
            self.emacs_log.drain(..excess);
            trace!(target: "state.undo", "emacs_log_trimmed");
        }
    }

    /// Forget the emacs walk position; the next emacs undo starts a new walk.
    pub fn end_emacs_walk(&mut self) {
        self.emacs_cursor = None;
    }

    pub fn undo(&mut self, buffer: &mut LineBuffer) -> bool {
        let Some(last) = self.undo_stack.pop() else {
            return false;
        };
        self.redo_stack.push(UndoSnapshot::capture(buffer));
        trace!(target: "state.undo", undo_depth = self.undo_stack.len(), redo_depth = self.redo_stack.len(), "undo_pop");
        last.restore(buffer);
        true
    }

    pub fn redo(&mut self, buffer: &mut LineBuffer) -> bool {
        let Some(next) = self.redo_stack.pop() else {
            return false;
        };
        self.undo_stack.push(UndoSnapshot::capture(buffer));
        trace!(target: "state.undo", undo_depth = self.undo_stack.len(), redo_depth = self.redo_stack.len(), "redo_pop");
        next.restore(buffer);
        true
    }

    /// One step of an emacs-style undo walk. Returns false when the walk is
    /// already at the oldest entry (or the log holds nothing older).
    pub fn undo_emacs(&mut self, buffer: &mut LineBuffer) -> bool {
        let cursor = match self.emacs_cursor {
            Some(cursor) => cursor,
            None => {
                let current = UndoSnapshot::capture(buffer);
                if self.emacs_log.last() != Some(&current) {
                    self.emacs_log.push(current);
                }
                self.emacs_log.len() - 1
            }
        };
        if cursor == 0 {
            self.emacs_cursor = Some(0);
            trace!(target: "state.undo", emacs_len = self.emacs_log.len(), "emacs_walk_at_oldest");
            return false;
        }
        let target = cursor - 1;
        self.emacs_cursor = Some(target);
        self.emacs_log[target].restore(buffer);
        trace!(target: "state.undo", emacs_cursor = target, emacs_len = self.emacs_log.len(), "emacs_undo");
        true
    }
}
