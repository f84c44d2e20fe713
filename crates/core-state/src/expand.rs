//! History-driven dynamic word expansion.
//!
//! Repeated expansion cycles the word under the cursor through tokens seen
//! in earlier commands that extend it. Tokens that follow the same preceding
//! word as the one being typed are offered first. The original word is the
//! last candidate, so cycling always comes back to what the user typed.

use crate::history::CommandHistory;
use std::collections::HashSet;
use tracing::{debug, trace};

/// State carried across consecutive expansion actions.
#[derive(Debug, Clone)]
pub struct ExpansionSession {
    /// Before-cursor text captured when the session started.
    pub original: String,
    pub stub: String,
    pub context: String,
    /// Remaining candidates; the next one offered is at the end.
    pub candidates: Vec<String>,
}

impl ExpansionSession {
    pub fn start(before: &str, history: &CommandHistory) -> Self {
        let (stub, context) = split_stub(before);
        let candidates = collect_candidates(stub, context, history);
        debug!(target: "state.expand", stub, context, candidates = candidates.len(), "expansion_start");
        Self {
            original: before.to_string(),
            stub: stub.to_string(),
            context: context.to_string(),
            candidates,
        }
    }

    /// Pop the next candidate and build the replacement before-cursor text.
    fn next_line(&mut self) -> Option<String> {
        let candidate = self.candidates.pop()?;
        let keep = self.original.len() - self.stub.len();
        let mut line = String::with_capacity(keep + candidate.len());
        line.push_str(&self.original[..keep]);
        line.push_str(&candidate);
        trace!(target: "state.expand", candidate = %candidate, remaining = self.candidates.len(), "expansion_step");
        Some(line)
    }
}

#[derive(Debug, Default)]
pub struct DynamicExpander {
    session: Option<ExpansionSession>,
}

impl DynamicExpander {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> Option<&ExpansionSession> {
        self.session.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Drop the current session; the next expansion rescans history.
    pub fn discard(&mut self) {
        if self.session.take().is_some() {
            trace!(target: "state.expand", "expansion_discarded");
        }
    }

    /// Advance the expansion. Returns the new before-cursor text.
    pub fn expand(&mut self, before: &str, history: &CommandHistory) -> Option<String> {
        let session = self
            .session
            .get_or_insert_with(|| ExpansionSession::start(before, history));
        let line = session.next_line();
        if session.candidates.is_empty() {
            self.session = None;
        }
        line
    }
}

/// Split the before-cursor text into (stub, context): the trailing
/// whitespace-delimited token (possibly empty) and the token preceding it.
pub fn split_stub(before: &str) -> (&str, &str) {
    let stub_start = before
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_whitespace())
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0);
    let stub = &before[stub_start..];
    let context = before[..stub_start].split_whitespace().next_back().unwrap_or("");
    (stub, context)
}

fn collect_candidates(stub: &str, context: &str, history: &CommandHistory) -> Vec<String> {
    let stub_lower = stub.to_lowercase();
    let context_lower = context.to_lowercase();
    let mut preferred = Vec::new();
    let mut fallback = Vec::new();
    for entry in history.entries().iter().rev() {
        let tokens: Vec<&str> = entry.split_whitespace().collect();
        for (i, token) in tokens.iter().enumerate().rev() {
            let lower = token.to_lowercase();
            if !lower.starts_with(&stub_lower) || lower == stub_lower {
                continue;
            }
            let prev = if i > 0 { tokens[i - 1] } else { "" };
            if prev.to_lowercase() == context_lower {
                preferred.push(*token);
            } else {
                fallback.push(*token);
            }
        }
    }
    let mut seen = HashSet::new();
    let mut ordered: Vec<String> = preferred
        .into_iter()
        .chain(fallback)
        .filter(|t| seen.insert(*t))
        .map(str::to_string)
        .collect();
    ordered.push(stub.to_string());
    ordered.reverse();
    ordered
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
    fn split_stub_takes_last_token_and_context() {
        assert_eq!(split_stub("git che"), ("che", "git"));
        assert_eq!(split_stub("mak"), ("mak", ""));
        assert_eq!(split_stub("ls  "), ("", "ls"));
        assert_eq!(split_stub(""), ("", ""));
    }

    #[test]
    fn cycles_most_recent_first_then_back_to_stub() {
        let h = history(&["make install", "make test"]);
        let mut ex = DynamicExpander::new();
        assert_eq!(ex.expand("mak", &h).as_deref(), Some("make"));
        assert_eq!(ex.expand("make", &h).as_deref(), Some("mak"));
        assert!(!ex.is_active());
        // A fresh session starts over.
        assert_eq!(ex.expand("mak", &h).as_deref(), Some("make"));
    }

    #[test]
    fn context_matches_are_preferred() {
        let h = history(&["git checkout main", "cargo check", "git status"]);
        let session = ExpansionSession::start("git ch", &h);
        let mut offered = session.candidates.clone();
        offered.reverse();
        assert_eq!(offered, ["checkout", "check", "ch"]);
    }

    #[test]
    fn candidates_are_unique_case_sensitively() {
        let h = history(&["echo Foo", "echo foo", "echo foo"]);
        let session = ExpansionSession::start("echo f", &h);
        let mut offered = session.candidates.clone();
        offered.reverse();
        assert_eq!(offered, ["foo", "Foo", "f"]);
    }

    #[test]
    fn replaces_only_the_stub_suffix() {
        let h = history(&["cd /usr/local/bin"]);
        let mut ex = DynamicExpander::new();
        assert_eq!(
            ex.expand("ls -l /us", &h).as_deref(),
            Some("ls -l /usr/local/bin")
        );
    }

    #[test]
    fn exact_matches_are_not_candidates() {
        let h = history(&["ls", "LS"]);
        let session = ExpansionSession::start("ls", &h);
        assert_eq!(session.candidates, ["ls"]);
    }
}
