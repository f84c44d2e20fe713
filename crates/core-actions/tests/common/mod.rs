#![allow(dead_code)]

use core_actions::{Action, DispatchResult, Dispatcher, MemoryClipboard, MotionKind};
use core_state::LineState;

pub struct Harness {
    pub state: LineState,
    pub dispatcher: Dispatcher,
    pub clipboard: MemoryClipboard,
}

impl Harness {
    pub fn new() -> Self {
        let mut state = LineState::default();
        state.reset_line("> ");
        Self {
            state,
            dispatcher: Dispatcher::new(),
            clipboard: MemoryClipboard::new(),
        }
    }

    pub fn with_history(lines: &[&str]) -> Self {
        let mut h = Self::new();
        for l in lines {
            h.state.history_mut().record(l);
        }
        h
    }

    pub fn run(&mut self, action: Action) -> DispatchResult {
        self.dispatcher
            .dispatch(action, &mut self.state, &mut self.clipboard)
    }

    /// Type text one character at a time, like key presses.
    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.run(Action::Insert(c.to_string()));
        }
    }

    pub fn text(&self) -> String {
        self.state.text()
    }

    pub fn halves(&self) -> (String, String) {
        (
            self.state.before().to_string(),
            self.state.after().to_string(),
        )
    }
}

pub fn mv(motion: MotionKind) -> Action {
    Action::Move {
        motion,
        extend: false,
    }
}

pub fn select(motion: MotionKind) -> Action {
    Action::Move {
        motion,
        extend: true,
    }
}
