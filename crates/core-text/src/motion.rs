//! Word boundary classification shared by word motions and word deletes.
//!
//! A word motion is "skip a run of separators, then skip a run of
//! non-separators", applied one cluster at a time by the caller so that
//! every intermediate step has ordinary single-step semantics.

use crate::LineBuffer;

/// Stop characters for word-wise navigation and deletion.
pub const WORD_SEPARATORS: &[char] = &[
    ' ', '\t', '\\', '-', '_', '.', '/', '&', '|', ';', '<', '>', '=', '"',
];

/// True when the cluster starts with a word separator.
pub fn is_separator(cluster: &str) -> bool {
    cluster
        .chars()
        .next()
        .is_some_and(|c| WORD_SEPARATORS.contains(&c))
}

/// Which side of the cursor a word motion consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Backward,
    Forward,
}

/// Phase of a word walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Separators,
    Token,
}

/// Drives a word walk over a buffer. Each call to `next_step` reports whether
/// another single-cluster step should be taken; the caller performs the step
/// (move or delete) itself.
#[derive(Debug, Clone)]
pub struct WordWalk {
    direction: Direction,
    phase: Phase,
}

impl WordWalk {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            phase: Phase::Separators,
        }
    }

    /// Returns true if the caller should take one more step.
    pub fn next_step(&mut self, buf: &LineBuffer) -> bool {
        let adjacent = match self.direction {
            Direction::Backward => buf.prev_cluster(),
            Direction::Forward => buf.next_cluster(),
        };
        let Some(cluster) = adjacent else {
            return false;
        };
        let sep = is_separator(cluster);
        match self.phase {
            Phase::Separators if sep => true,
            Phase::Separators => {
                self.phase = Phase::Token;
                true
            }
            Phase::Token => !sep,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk_left(before: &str) -> String {
        let mut buf = LineBuffer::from_parts(before, "");
        let mut walk = WordWalk::new(Direction::Backward);
        while walk.next_step(&buf) {
            buf.step_left();
        }
        buf.before().to_string()
    }

    fn walk_right(after: &str) -> String {
        let mut buf = LineBuffer::from_parts("", after);
        let mut walk = WordWalk::new(Direction::Forward);
        while walk.next_step(&buf) {
            buf.step_right();
        }
        buf.before().to_string()
    }

    #[test]
    fn separators_cover_shell_punctuation() {
        for s in [" ", "\t", "\\", "-", "_", ".", "/", "|", ";"] {
            assert!(is_separator(s), "{s:?}");
        }
        assert!(!is_separator("a"));
        assert!(!is_separator(""));
    }

    #[test]
    fn backward_walk_skips_separators_then_token() {
        assert_eq!(walk_left("cd some/dir  "), "cd some/");
        assert_eq!(walk_left("cd some/dir"), "cd some/");
        assert_eq!(walk_left("make"), "");
        assert_eq!(walk_left("   "), "");
    }

    #[test]
    fn forward_walk_stops_at_token_end() {
        assert_eq!(walk_right("  git status"), "  git");
        assert_eq!(walk_right("foo.bar"), "foo");
        assert_eq!(walk_right(""), "");
    }
}
