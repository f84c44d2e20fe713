//! Command history with substring-filtered browsing.
//!
//! Entries are kept in chronological order without duplicates. While the
//! user browses, `index` points at the entry shown; `index == len` means a
//! fresh line is being edited. Starting to browse from a non-blank line
//! pushes that line as a temporary entry and uses it as a case-insensitive
//! "contains" filter; the temporary entry is removed again when browsing ends.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, trace};

/// Default bound on stored command lines.
pub const DEFAULT_MAX_CMD_HISTORY: usize = 2000;

#[derive(Debug, Clone)]
pub struct CommandHistory {
    entries: Vec<String>,
    filter: String,
    index: usize,
    max_len: usize,
}

impl Default for CommandHistory {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CMD_HISTORY)
    }
}

impl CommandHistory {
    pub fn new(max_len: usize) -> Self {
        Self {
            entries: Vec::new(),
            filter: String::new(),
            index: 0,
            max_len: max_len.max(1),
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    pub fn index(&self) -> usize {
        self.index
    }
    pub fn filter(&self) -> &str {
        &self.filter
    }
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// True while browsing with a temporary filter entry pushed.
    pub fn is_filtering(&self) -> bool {
        !self.filter.is_empty()
    }

    /// True while an entry (rather than a fresh line) is being shown.
    pub fn is_browsing(&self) -> bool {
        self.index < self.entries.len()
    }

    /// Append a line, moving an existing duplicate to the end. Empty lines are ignored.
    pub fn record(&mut self, line: &str) {
        self.end_browsing();
        if line.is_empty() {
            return;
        }
        if let Some(pos) = self.entries.iter().position(|e| e == line) {
            self.entries.remove(pos);
        }
        self.entries.push(line.to_string());
        if self.entries.len() > self.max_len {
            let excess = self.entries.len() - self.max_len;
            self.entries.drain(..excess);
            trace!(target: "state.history", excess, "history_trimmed");
        }
        self.index = self.entries.len();
    }

    /// Remove `line` from the history (if present) and stop browsing.
    pub fn zap(&mut self, line: &str) -> bool {
        self.end_browsing();
        let removed = match self.entries.iter().position(|e| e == line) {
            Some(pos) => {
                self.entries.remove(pos);
                true
            }
            None => false,
        };
        self.index = self.entries.len();
        debug!(target: "state.history", removed, "zap");
        removed
    }

    /// Step to the previous entry matching the filter. `current` is the line
    /// being edited; it seeds the filter when browsing starts. Returns the
    /// entry to load, or `None` when no older match exists.
    pub fn browse_previous(&mut self, current: &str) -> Option<String> {
        if !current.trim().is_empty()
            && self.index == self.entries.len()
            && self.filter.is_empty()
        {
            self.entries.push(current.to_string());
            self.filter = current.to_string();
            trace!(target: "state.history", filter = %self.filter, "browse_filter_start");
        }
        let mut i = self.index.min(self.entries.len());
        while i > 0 {
            i -= 1;
            if self.matches(&self.entries[i]) {
                self.index = i;
                return Some(self.entries[i].clone());
            }
        }
        None
    }

    /// Step to the next entry matching the filter. At the newest entry a
    /// filtered browse ends (the temporary entry is dropped).
    pub fn browse_next(&mut self) -> Option<String> {
        let len = self.entries.len();
        if self.index + 1 < len {
            let next = (self.index + 1..len).find(|&i| self.matches(&self.entries[i]))?;
            self.index = next;
            Some(self.entries[next].clone())
        } else {
            if self.is_filtering() {
                self.end_browsing();
            }
            None
        }
    }

    /// Leave browsing mode, dropping the temporary filter entry if one was pushed.
    pub fn end_browsing(&mut self) {
        if self.is_filtering() {
            self.entries.pop();
            self.filter.clear();
            trace!(target: "state.history", "browse_filter_end");
        }
        self.index = self.entries.len();
    }

    fn matches(&self, entry: &str) -> bool {
        self.filter.is_empty() || entry.to_lowercase().contains(&self.filter.to_lowercase())
    }

    /// Load entries from a file (one per line). A missing file leaves the
    /// history untouched.
    pub fn load_from(&mut self, path: &Path) -> Result<usize> {
        if !path.exists() {
            return Ok(0);
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading history file {}", path.display()))?;
        let mut count = 0;
        for line in content.lines() {
            let line = line.trim_end_matches('\r');
            if !line.is_empty() {
                self.record(line);
                count += 1;
            }
        }
        debug!(target: "state.history", file = %path.display(), count, entries = self.entries.len(), "history_loaded");
        Ok(count)
    }

    /// Write the persistent entries to a file (one per line).
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let persistent = if self.is_filtering() {
            &self.entries[..self.entries.len() - 1]
        } else {
            &self.entries[..]
        };
        let mut out = persistent.join("\n");
        if !out.is_empty() {
            out.push('\n');
        }
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating history directory {}", parent.display()))?;
        }
        fs::write(path, out).with_context(|| format!("writing history file {}", path.display()))?;
        debug!(target: "state.history", file = %path.display(), entries = persistent.len(), "history_saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn history(lines: &[&str]) -> CommandHistory {
        let mut h = CommandHistory::default();
        for l in lines {
            h.record(l);
        }
        h
    }

    #[test]
    fn record_dedupes_and_skips_empty() {
        let h = history(&["ls", "cd a", "", "ls"]);
        assert_eq!(h.entries(), ["cd a", "ls"]);
        assert_eq!(h.index(), 2);
    }

    #[test]
    fn record_is_bounded_dropping_oldest() {
        let mut h = CommandHistory::new(3);
        for l in ["a", "b", "c", "d", "e"] {
            h.record(l);
        }
        assert_eq!(h.entries(), ["c", "d", "e"]);
    }

    #[test]
    fn filtered_browse_never_surfaces_non_matching_entries() {
        let mut h = history(&["cd a", "ls", "cd b"]);
        assert_eq!(h.browse_previous("cd").as_deref(), Some("cd b"));
        assert_eq!(h.browse_previous("cd b").as_deref(), Some("cd a"));
        assert_eq!(h.browse_previous("cd a"), None);
        assert_eq!(h.index(), 0);
        assert_eq!(h.browse_next().as_deref(), Some("cd b"));
        assert_eq!(h.browse_next().as_deref(), Some("cd"));
        assert_eq!(h.browse_next(), None);
        assert!(!h.is_filtering());
        assert_eq!(h.entries(), ["cd a", "ls", "cd b"]);
    }

    #[test]
    fn filter_is_case_insensitive() {
        let mut h = history(&["Git Status", "ls"]);
        assert_eq!(h.browse_previous("git").as_deref(), Some("Git Status"));
    }

    #[test]
    fn blank_line_browses_everything() {
        let mut h = history(&["a", "b"]);
        assert_eq!(h.browse_previous("  ").as_deref(), Some("b"));
        assert_eq!(h.browse_previous("b").as_deref(), Some("a"));
        assert!(!h.is_filtering());
        assert_eq!(h.browse_previous("a"), None);
    }

    #[test]
    fn end_browsing_removes_temporary_entry() {
        let mut h = history(&["make"]);
        h.browse_previous("ma");
        assert_eq!(h.len(), 2);
        h.end_browsing();
        assert_eq!(h.entries(), ["make"]);
        assert_eq!(h.index(), 1);
    }

    #[test]
    fn zap_removes_entry() {
        let mut h = history(&["a", "b", "c"]);
        assert!(h.zap("b"));
        assert!(!h.zap("zzz"));
        assert_eq!(h.entries(), ["a", "c"]);
    }

    #[test]
    fn persistence_round_trips_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("history");
        let mut h = history(&["one", "two"]);
        h.browse_previous("tw");
        h.save_to(&path).unwrap();

        let mut loaded = CommandHistory::new(10);
        assert_eq!(loaded.load_from(&path).unwrap(), 2);
        assert_eq!(loaded.entries(), ["one", "two"]);
        assert_eq!(loaded.load_from(&dir.path().join("missing")).unwrap(), 0);
    }
}
