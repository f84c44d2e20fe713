//! Split line buffer abstraction.
//!
//! The input line is held as two halves: the text before the cursor and the
//! text after it. The cursor position is always `before.len()` (a byte
//! offset), so every primitive here is a transfer of one grapheme cluster
//! across the boundary or an append/removal at one of its ends.
//!
//! All primitives are absorbing at the buffer ends: moving or deleting past
//! either end is a silent no-op and never panics.

pub mod motion;

/// A single-line edit buffer split at the cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    before: String,
    after: String,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a buffer from explicit halves (cursor ends up between them).
    pub fn from_parts(before: impl Into<String>, after: impl Into<String>) -> Self {
        Self {
            before: before.into(),
            after: after.into(),
        }
    }

    pub fn before(&self) -> &str {
        &self.before
    }

    pub fn after(&self) -> &str {
        &self.after
    }

    /// Full line text (`before + after`).
    pub fn text(&self) -> String {
        let mut s = String::with_capacity(self.len());
        s.push_str(&self.before);
        s.push_str(&self.after);
        s
    }

    /// Byte length of the full line.
    pub fn len(&self) -> usize {
        self.before.len() + self.after.len()
    }

    pub fn is_empty(&self) -> bool {
        self.before.is_empty() && self.after.is_empty()
    }

    /// Cursor offset (bytes) into the full line.
    pub fn cursor(&self) -> usize {
        self.before.len()
    }

    /// Replace both halves at once.
    pub fn set(&mut self, before: impl Into<String>, after: impl Into<String>) {
        self.before = before.into();
        self.after = after.into();
    }

    pub fn clear(&mut self) {
        self.before.clear();
        self.after.clear();
    }

    pub fn clear_after(&mut self) {
        self.after.clear();
    }

    /// Cluster immediately left of the cursor.
    pub fn prev_cluster(&self) -> Option<&str> {
        grapheme::last(&self.before)
    }

    /// Cluster immediately right of the cursor.
    pub fn next_cluster(&self) -> Option<&str> {
        grapheme::first(&self.after)
    }

    /// Move one cluster from `before` to the front of `after`. Returns false at line start.
    pub fn step_left(&mut self) -> bool {
        let Some(len) = self.prev_cluster().map(str::len) else {
            return false;
        };
        let split = self.before.len() - len;
        let moved = self.before.split_off(split);
        self.after.insert_str(0, &moved);
        true
    }

    /// Move one cluster from the front of `after` to `before`. Returns false at line end.
    pub fn step_right(&mut self) -> bool {
        let Some(len) = self.next_cluster().map(str::len) else {
            return false;
        };
        let rest = self.after.split_off(len);
        let moved = std::mem::replace(&mut self.after, rest);
        self.before.push_str(&moved);
        true
    }

    /// Move the cursor to position 0.
    pub fn home(&mut self) {
        if self.before.is_empty() {
            return;
        }
        self.before.push_str(&self.after);
        self.after = std::mem::take(&mut self.before);
    }

    /// Move the cursor to the end of the line.
    pub fn end(&mut self) {
        let after = std::mem::take(&mut self.after);
        self.before.push_str(&after);
    }

    /// Append text at the cursor.
    pub fn insert(&mut self, text: &str) {
        self.before.push_str(text);
    }

    /// Remove the cluster left of the cursor. Returns false at line start.
    pub fn delete_before(&mut self) -> bool {
        let Some(len) = self.prev_cluster().map(str::len) else {
            return false;
        };
        let split = self.before.len() - len;
        self.before.truncate(split);
        true
    }

    /// Remove the cluster right of the cursor. Returns false at line end.
    pub fn delete_after(&mut self) -> bool {
        let Some(len) = self.next_cluster().map(str::len) else {
            return false;
        };
        self.after.replace_range(..len, "");
        true
    }

    /// Remove the full-line byte range `[lo, hi)` and return it. The cursor
    /// ends up at `lo` when the range contains it, otherwise it keeps its
    /// place relative to the surviving text. Out of range bounds are clamped;
    /// bounds that are not on a char boundary leave the buffer untouched.
    pub fn remove_range(&mut self, lo: usize, hi: usize) -> String {
        let len = self.len();
        let hi = hi.min(len);
        let lo = lo.min(hi);
        if lo == hi {
            return String::new();
        }
        let text = self.text();
        if !text.is_char_boundary(lo) || !text.is_char_boundary(hi) {
            tracing::warn!(target: "text", lo, hi, "remove_range_not_on_boundary");
            return String::new();
        }
        let cursor = self.cursor();
        let removed = text[lo..hi].to_string();
        let cursor = if cursor <= lo {
            cursor
        } else if cursor >= hi {
            cursor - (hi - lo)
        } else {
            lo
        };
        let mut rest = String::with_capacity(len - removed.len());
        rest.push_str(&text[..lo]);
        rest.push_str(&text[hi..]);
        let after = rest.split_off(cursor);
        self.before = rest;
        self.after = after;
        removed
    }
}

/// Grapheme helpers operating on plain string slices.
pub mod grapheme {
    use unicode_segmentation::UnicodeSegmentation;

    /// First grapheme cluster of `s`.
    pub fn first(s: &str) -> Option<&str> {
        s.graphemes(true).next()
    }

    /// Last grapheme cluster of `s`.
    pub fn last(s: &str) -> Option<&str> {
        s.graphemes(true).next_back()
    }

    /// Number of grapheme clusters.
    pub fn count(s: &str) -> usize {
        s.graphemes(true).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_move_one_cluster_across_cursor() {
        let mut b = LineBuffer::from_parts("ab", "cd");
        assert!(b.step_left());
        assert_eq!((b.before(), b.after()), ("a", "bcd"));
        assert!(b.step_right());
        assert!(b.step_right());
        assert_eq!((b.before(), b.after()), ("abc", "d"));
    }

    #[test]
    fn steps_are_noops_at_ends() {
        let mut b = LineBuffer::from_parts("", "x");
        assert!(!b.step_left());
        b.end();
        assert!(!b.step_right());
        assert_eq!(b.before(), "x");
        assert!(!LineBuffer::new().delete_before());
        assert!(!LineBuffer::new().delete_after());
    }

    #[test]
    fn multibyte_clusters_move_as_a_unit() {
        // e + combining acute, then a family emoji
        let mut b = LineBuffer::from_parts("e\u{301}👨‍👩‍👧", "");
        assert!(b.step_left());
        assert_eq!(b.after(), "👨‍👩‍👧");
        assert!(b.delete_before());
        assert_eq!(b.before(), "");
        assert_eq!(grapheme::count(b.after()), 1);
    }

    #[test]
    fn home_and_end_move_whole_halves() {
        let mut b = LineBuffer::from_parts("git ", "status");
        b.home();
        assert_eq!((b.before(), b.after()), ("", "git status"));
        b.end();
        assert_eq!((b.before(), b.after()), ("git status", ""));
    }

    #[test]
    fn remove_range_relocates_cursor() {
        let mut b = LineBuffer::from_parts("hello", " world");
        assert_eq!(b.remove_range(0, 2), "he");
        assert_eq!((b.before(), b.after()), ("llo", " world"));

        let mut b = LineBuffer::from_parts("hello", " world");
        assert_eq!(b.remove_range(3, 8), "lo wo");
        assert_eq!((b.before(), b.after()), ("hel", "rld"));

        let mut b = LineBuffer::from_parts("hello", " world");
        assert_eq!(b.remove_range(6, 100), "world");
        assert_eq!((b.before(), b.after()), ("hello", " "));
    }
}
