//! Script directive parsing.
//!
//! One directive per line. Editing directives map onto `Action`s; the
//! remaining ones accept the line or drive the directory history. Blank
//! lines and `#` comments yield `None`.

use anyhow::{Result, bail};
use core_actions::{Action, MotionKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    Edit(Action),
    /// Accept the current line into command history and start a new one.
    Enter,
    Cd(String),
    Back,
    Forward,
    Jump(String),
    /// A command ran in the current directory.
    Keep,
    /// Print the directory history.
    Dirs,
}

fn motion(kind: MotionKind, extend: bool) -> Directive {
    Directive::Edit(Action::Move {
        motion: kind,
        extend,
    })
}

pub fn parse_directive(line: &str) -> Result<Option<Directive>> {
    let line = line.trim_start().trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let (word, arg) = match line.split_once(' ') {
        Some((w, rest)) => (w, Some(rest)),
        None => (line, None),
    };

    let directive = match (word, arg) {
        ("insert", Some(text)) => Directive::Edit(Action::Insert(text.to_string())),
        ("complete", Some(text)) => Directive::Edit(Action::Complete(text.to_string())),
        ("cd", Some(path)) => Directive::Cd(path.trim().to_string()),
        ("jump", Some(path)) => Directive::Jump(path.trim().to_string()),
        ("insert" | "complete" | "cd" | "jump", None) => bail!("`{word}` needs an argument"),
        (_, Some(a)) if !a.trim().is_empty() => bail!("`{word}` takes no argument"),
        _ => match word {
            "left" => motion(MotionKind::Left, false),
            "right" => motion(MotionKind::Right, false),
            "word-left" => motion(MotionKind::WordLeft, false),
            "word-right" => motion(MotionKind::WordRight, false),
            "home" => motion(MotionKind::Home, false),
            "end" => motion(MotionKind::End, false),
            "shift-left" => motion(MotionKind::Left, true),
            "shift-right" => motion(MotionKind::Right, true),
            "shift-word-left" => motion(MotionKind::WordLeft, true),
            "shift-word-right" => motion(MotionKind::WordRight, true),
            "shift-home" => motion(MotionKind::Home, true),
            "shift-end" => motion(MotionKind::End, true),
            "delete" => Directive::Edit(Action::DeleteForward),
            "backspace" => Directive::Edit(Action::Backspace),
            "delete-word" => Directive::Edit(Action::DeleteWordForward),
            "backspace-word" => Directive::Edit(Action::BackspaceWord),
            "kill" => Directive::Edit(Action::KillToEnd),
            "cut" => Directive::Edit(Action::Cut),
            "copy" => Directive::Edit(Action::Copy),
            "paste" => Directive::Edit(Action::Paste),
            "esc" => Directive::Edit(Action::Escape),
            "select-all" => Directive::Edit(Action::SelectAll),
            "up" => Directive::Edit(Action::HistoryPrevious),
            "down" => Directive::Edit(Action::HistoryNext),
            "zap" => Directive::Edit(Action::HistoryZap),
            "expand" => Directive::Edit(Action::Expand),
            "undo" => Directive::Edit(Action::Undo),
            "redo" => Directive::Edit(Action::Redo),
            "undo-emacs" => Directive::Edit(Action::UndoEmacs),
            "enter" => Directive::Enter,
            "back" => Directive::Back,
            "forward" => Directive::Forward,
            "keep" => Directive::Keep,
            "dirs" => Directive::Dirs,
            other => bail!("unknown directive `{other}`"),
        },
    };
    Ok(Some(directive))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn insert_keeps_argument_verbatim() {
        assert_eq!(
            parse_directive("insert  ls -la ").unwrap(),
            Some(Directive::Edit(Action::Insert(" ls -la ".into())))
        );
    }

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        assert_eq!(parse_directive("").unwrap(), None);
        assert_eq!(parse_directive("   \r\n").unwrap(), None);
        assert_eq!(parse_directive("# undo").unwrap(), None);
    }

    #[test]
    fn selection_motions_extend() {
        assert_eq!(
            parse_directive("shift-word-left").unwrap(),
            Some(Directive::Edit(Action::Move {
                motion: MotionKind::WordLeft,
                extend: true
            }))
        );
        assert_eq!(
            parse_directive("  home\r\n").unwrap(),
            Some(Directive::Edit(Action::Move {
                motion: MotionKind::Home,
                extend: false
            }))
        );
    }

    #[test]
    fn directory_directives() {
        assert_eq!(
            parse_directive("cd ~/src ").unwrap(),
            Some(Directive::Cd("~/src".into()))
        );
        assert_eq!(parse_directive("back").unwrap(), Some(Directive::Back));
        assert_eq!(
            parse_directive("jump /tmp").unwrap(),
            Some(Directive::Jump("/tmp".into()))
        );
    }

    #[test]
    fn malformed_directives_are_errors() {
        assert!(parse_directive("frobnicate").is_err());
        assert!(parse_directive("insert").is_err());
        assert!(parse_directive("undo now").is_err());
    }
}
