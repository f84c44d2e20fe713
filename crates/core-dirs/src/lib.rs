//! Directory history: a browser-like list of visited working directories.
//!
//! The list is deduplicated (paths compare after `~` expansion and case
//! folding) and rotated after every visit so the current directory is always
//! the last entry; truncation to `max_len` therefore evicts the oldest
//! entries. `keep` marks the current entry as "a command ran here": a visit
//! with `keep` unset overwrites the current entry instead of inserting, so
//! passing through a directory does not pollute the history.
//!
//! Navigation (`go_back`, `go_forward`, `jump`) changes directory through the
//! `Filesystem` collaborator. Entries that can no longer be entered are
//! evicted and navigation continues in the same direction; the failures are
//! returned to the caller for display and never raised.

pub mod fs;

pub use fs::{Filesystem, OsFilesystem};

use std::io;
use std::path::Path;
use tracing::{debug, trace, warn};

pub const DEFAULT_MAX_DIR_HISTORY: usize = 9;

/// Result of a navigation request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationOutcome {
    /// Entry now current, if any directory could be entered.
    pub location: Option<String>,
    /// One user-visible message per evicted stale entry.
    pub failures: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Back,
    Forward,
}

#[derive(Debug, Clone)]
pub struct DirHistory {
    locations: Vec<String>,
    index: usize,
    keep: bool,
    max_len: usize,
}

impl Default for DirHistory {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DIR_HISTORY)
    }
}

impl DirHistory {
    pub fn new(max_len: usize) -> Self {
        Self {
            locations: Vec::new(),
            index: 0,
            keep: true,
            max_len: max_len.max(1),
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.locations
    }
    pub fn index(&self) -> usize {
        self.index
    }
    pub fn current(&self) -> Option<&str> {
        self.locations.get(self.index).map(String::as_str)
    }
    pub fn keep(&self) -> bool {
        self.keep
    }
    pub fn len(&self) -> usize {
        self.locations.len()
    }
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// A command executed in the current directory; the next visit inserts
    /// rather than overwrites.
    pub fn mark_keep(&mut self) {
        self.keep = true;
    }

    /// Record the process working directory (home abbreviated to `~`).
    pub fn visit_current_directory(&mut self, fs: &dyn Filesystem) -> io::Result<()> {
        let cwd = fs.current_dir()?;
        let location = fs.abbreviate_home(&cwd);
        self.visit(&location, fs);
        Ok(())
    }

    /// Record a directory change to `location`.
    pub fn visit(&mut self, location: &str, fs: &dyn Filesystem) {
        let norm = normalize(location, fs);
        if self
            .current()
            .is_some_and(|cur| normalize(cur, fs) == norm)
        {
            trace!(target: "dirs.history", location, "visit_same_location");
            return;
        }

        if self.keep || self.locations.is_empty() {
            let at = if self.locations.is_empty() {
                0
            } else {
                self.index + 1
            };
            self.locations.insert(at, location.to_string());
            self.index = at;
        } else {
            self.locations[self.index] = location.to_string();
        }
        self.keep = false;

        let mut deduped = Vec::with_capacity(self.locations.len());
        let mut current = 0;
        for (i, l) in self.locations.drain(..).enumerate() {
            if i == self.index {
                current = deduped.len();
                deduped.push(l);
            } else if normalize(&l, fs) != norm {
                deduped.push(l);
            }
        }
        self.locations = deduped;

        self.locations.rotate_left(current + 1);
        if self.locations.len() > self.max_len {
            let excess = self.locations.len() - self.max_len;
            self.locations.drain(..excess);
        }
        self.index = self.locations.len() - 1;
        debug!(target: "dirs.history", location, entries = self.locations.len(), "visit");
    }

    /// Step to the previous entry, wrapping to the newest.
    pub fn go_back(&mut self, fs: &mut dyn Filesystem) -> NavigationOutcome {
        if self.locations.is_empty() {
            return NavigationOutcome::default();
        }
        self.index = self.index.checked_sub(1).unwrap_or(self.locations.len() - 1);
        self.apply(Step::Back, fs)
    }

    /// Step to the next entry, wrapping to the oldest.
    pub fn go_forward(&mut self, fs: &mut dyn Filesystem) -> NavigationOutcome {
        if self.locations.is_empty() {
            return NavigationOutcome::default();
        }
        self.index = (self.index + 1) % self.locations.len();
        self.apply(Step::Forward, fs)
    }

    /// Go to a known entry (exact match). Unknown locations are ignored.
    pub fn jump(&mut self, location: &str, fs: &mut dyn Filesystem) -> NavigationOutcome {
        match self.locations.iter().position(|l| l == location) {
            Some(i) => {
                self.index = i;
                self.apply(Step::Back, fs)
            }
            None => {
                debug!(target: "dirs.history", location, "jump_unknown_location");
                NavigationOutcome::default()
            }
        }
    }

    fn apply(&mut self, step: Step, fs: &mut dyn Filesystem) -> NavigationOutcome {
        let mut outcome = NavigationOutcome::default();
        while let Some(location) = self.locations.get(self.index) {
            let target = fs.expand_user_home(location);
            match fs.change_directory(Path::new(&target)) {
                Ok(()) => {
                    self.keep = true;
                    debug!(target: "dirs.history", location = %location, index = self.index, "changed_directory");
                    outcome.location = Some(location.clone());
                    return outcome;
                }
                Err(e) => {
                    let message = format!("{target}: {e}");
                    warn!(target: "dirs.history", %message, "stale_location_evicted");
                    outcome.failures.push(message);
                    self.locations.remove(self.index);
                    if self.locations.is_empty() {
                        self.index = 0;
                        break;
                    }
                    self.index = match step {
                        Step::Back => self.index.checked_sub(1).unwrap_or(self.locations.len() - 1),
                        Step::Forward if self.index >= self.locations.len() => 0,
                        Step::Forward => self.index,
                    };
                }
            }
        }
        outcome
    }
}

fn normalize(location: &str, fs: &dyn Filesystem) -> String {
    fs.expand_user_home(location).to_lowercase()
}
