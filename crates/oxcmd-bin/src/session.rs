//! Script session: one line editor plus the directory history, driven by
//! parsed directives and reporting to a writer.

use crate::script::Directive;
use anyhow::Result;
use core_actions::{Dispatcher, MemoryClipboard};
use core_dirs::{DirHistory, Filesystem, NavigationOutcome};
use core_state::{EngineLimits, LineState};
use std::io::Write;
use std::path::Path;
use tracing::{debug, info, warn};

pub struct Session<F: Filesystem> {
    prompt: String,
    pub state: LineState,
    dispatcher: Dispatcher,
    clipboard: MemoryClipboard,
    dirs: DirHistory,
    fs: F,
    accepted: usize,
}

impl<F: Filesystem> Session<F> {
    pub fn new(prompt: &str, limits: EngineLimits, max_dir_history: usize, fs: F) -> Self {
        let mut state = LineState::new(limits);
        state.reset_line(prompt);
        Self {
            prompt: prompt.to_string(),
            state,
            dispatcher: Dispatcher::new(),
            clipboard: MemoryClipboard::new(),
            dirs: DirHistory::new(max_dir_history),
            fs,
            accepted: 0,
        }
    }

    pub fn accepted(&self) -> usize {
        self.accepted
    }

    /// Record the starting directory.
    pub fn start(&mut self) {
        if let Err(e) = self.dirs.visit_current_directory(&self.fs) {
            warn!(target: "runtime", error = %e, "initial_directory_unavailable");
        }
    }

    pub fn run(&mut self, directive: Directive, out: &mut impl Write) -> Result<()> {
        match directive {
            Directive::Edit(action) => {
                let result = self
                    .dispatcher
                    .dispatch(action, &mut self.state, &mut self.clipboard);
                if result.changed {
                    self.print_line(out)?;
                }
            }
            Directive::Enter => {
                let line = self.state.accept_line();
                info!(target: "runtime", line = %line, "line_accepted");
                writeln!(out, "accepted: {line}")?;
                self.accepted += 1;
                self.dirs.mark_keep();
                self.state.reset_line(self.prompt.as_str());
                self.dispatcher.reset();
            }
            Directive::Cd(path) => {
                let target = self.fs.expand_user_home(&path);
                match self.fs.change_directory(Path::new(&target)) {
                    Ok(()) => {
                        self.dirs.visit_current_directory(&self.fs)?;
                        debug!(target: "runtime", path = %target, "cd");
                    }
                    Err(e) => writeln!(out, "  {target}: {e}")?,
                }
            }
            Directive::Back => {
                let outcome = self.dirs.go_back(&mut self.fs);
                report(&outcome, out)?;
            }
            Directive::Forward => {
                let outcome = self.dirs.go_forward(&mut self.fs);
                report(&outcome, out)?;
            }
            Directive::Jump(location) => {
                let outcome = self.dirs.jump(&location, &mut self.fs);
                report(&outcome, out)?;
            }
            Directive::Keep => self.dirs.mark_keep(),
            Directive::Dirs => {
                for (i, location) in self.dirs.entries().iter().enumerate() {
                    let marker = if i == self.dirs.index() { '*' } else { ' ' };
                    writeln!(out, "{marker} {location}")?;
                }
            }
        }
        Ok(())
    }

    fn print_line(&self, out: &mut impl Write) -> Result<()> {
        let view = self.state.view();
        writeln!(out, "{}{}|{}", view.prompt, view.before, view.after)?;
        Ok(())
    }
}

fn report(outcome: &NavigationOutcome, out: &mut impl Write) -> Result<()> {
    for failure in &outcome.failures {
        writeln!(out, "  {failure}")?;
    }
    if let Some(location) = &outcome.location {
        writeln!(out, "cwd: {location}")?;
    }
    Ok(())
}
