//! Replay scripts: one step per line.
//!
//! ```text
//! # comment
//! Alt+1
//! Ctrl+K @input
//! open confirm-dialog
//! Escape
//! disable
//! ```

use std::fmt;
use std::io::Read;
use std::path::Path;

use dashkeys_common::DashkeysError;
use dashkeys_platform::{Chord, DispatchOutcome, FocusContext, KeyEvent, TransientId};

use super::core::DashboardShell;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Press a chord, optionally with focus in an element of the given tag.
    Press(KeyEvent),
    /// Open transient UI under a name.
    Open(String),
    /// Close the most recent transient UI with this name (outside click).
    Close(String),
    Enable,
    Disable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Key(DispatchOutcome),
    Opened(TransientId),
    Closed(Option<TransientId>),
    Enabled(bool),
}

impl fmt::Display for StepOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepOutcome::Key(outcome) => write!(f, "{outcome}"),
            StepOutcome::Opened(id) => write!(f, "opened {id}"),
            StepOutcome::Closed(Some(id)) => write!(f, "closed {id}"),
            StepOutcome::Closed(None) => write!(f, "nothing to close"),
            StepOutcome::Enabled(true) => write!(f, "shortcuts enabled"),
            StepOutcome::Enabled(false) => write!(f, "shortcuts disabled"),
        }
    }
}

/// Parse one line. Blank lines and `#` comments yield `None`.
pub fn parse_step(line: &str) -> Result<Option<Step>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(None);
    };
    let rest: Vec<&str> = words.collect();

    let step = match (head, rest.as_slice()) {
        ("enable", []) => Step::Enable,
        ("disable", []) => Step::Disable,
        ("open", [name]) => Step::Open(name.to_string()),
        ("close", [name]) => Step::Close(name.to_string()),
        ("open" | "close", _) => return Err(format!("`{head}` takes one name")),
        (chord, focus) => {
            let chord: Chord = chord.parse().map_err(|e| format!("{e}"))?;
            let mut event = chord.to_event();
            match focus {
                [] => {}
                [tag] => {
                    let tag = tag
                        .strip_prefix('@')
                        .ok_or_else(|| format!("expected @tag, got `{tag}`"))?;
                    event = event.with_focus(FocusContext::from_tag(tag));
                }
                _ => return Err("a chord takes at most one @tag".into()),
            }
            Step::Press(event)
        }
    };
    Ok(Some(step))
}

/// Parse a whole script, keeping 1-based line numbers.
pub fn parse_script(text: &str) -> Result<Vec<(usize, Step)>, DashkeysError> {
    let mut steps = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let line_no = i + 1;
        match parse_step(line) {
            Ok(Some(step)) => steps.push((line_no, step)),
            Ok(None) => {}
            Err(message) => {
                return Err(DashkeysError::Script {
                    line: line_no,
                    message,
                })
            }
        }
    }
    Ok(steps)
}

/// Read a script from `path`, or from stdin when no path is given.
pub fn read_script(path: Option<&Path>) -> Result<String, DashkeysError> {
    match path {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

impl DashboardShell {
    pub fn run_step(&mut self, step: Step) -> StepOutcome {
        match step {
            Step::Press(event) => StepOutcome::Key(self.press(event)),
            Step::Open(name) => StepOutcome::Opened(self.transients.borrow_mut().open(name)),
            Step::Close(name) => StepOutcome::Closed(self.transients.borrow_mut().close_named(&name)),
            Step::Enable => {
                self.dispatcher.enable();
                StepOutcome::Enabled(true)
            }
            Step::Disable => {
                self.dispatcher.disable();
                StepOutcome::Enabled(false)
            }
        }
    }
}
