//! Splits a controller string into text runs, button tokens and line breaks.
//!
//! Two modes:
//! - `Text`: characters accumulate into a run. `[` flushes the run and opens a
//!   token, `\n` flushes the run and emits a line break, `\r` is dropped.
//! - `Token`: every character accumulates (including `\r`, `\n` and `[`) until
//!   `]` closes the token, which is then resolved against the button table.
//!
//! A token still open at end of input is discarded, never emitted as text.

use crate::button::ControllerButton;

/// One piece of a controller string, in drawing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// A maximal span of plain characters.
    Run(String),
    /// A bracket token naming a known button.
    Button(ControllerButton),
    /// A closed bracket token that names no button.
    Unknown(String),
    /// An explicit `\n`.
    Newline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Text,
    Token,
}

/// Iterator over the [`Segment`]s of a string.
#[derive(Debug)]
pub struct Segments<'a> {
    chars: std::str::Chars<'a>,
    mode: Mode,
    buffer: String,
    /// Line break held back while the run before it is yielded.
    pending_newline: bool,
}

/// Scan `text` into segments.
pub fn segments(text: &str) -> Segments<'_> {
    Segments {
        chars: text.chars(),
        mode: Mode::Text,
        buffer: String::new(),
        pending_newline: false,
    }
}

impl Segments<'_> {
    fn take_run(&mut self) -> Option<Segment> {
        if self.buffer.is_empty() {
            None
        } else {
            Some(Segment::Run(std::mem::take(&mut self.buffer)))
        }
    }
}

impl Iterator for Segments<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        if self.pending_newline {
            self.pending_newline = false;
            return Some(Segment::Newline);
        }

        while let Some(ch) = self.chars.next() {
            match self.mode {
                Mode::Token => {
                    self.buffer.push(ch);
                    if ch == ']' {
                        self.mode = Mode::Text;
                        let token = std::mem::take(&mut self.buffer);
                        return Some(match ControllerButton::from_token(&token) {
                            Some(button) => Segment::Button(button),
                            None => Segment::Unknown(token),
                        });
                    }
                }
                Mode::Text => match ch {
                    '\r' => {}
                    '[' => {
                        let run = self.take_run();
                        self.mode = Mode::Token;
                        self.buffer.push('[');
                        if run.is_some() {
                            return run;
                        }
                    }
                    '\n' => {
                        return match self.take_run() {
                            Some(run) => {
                                self.pending_newline = true;
                                Some(run)
                            }
                            None => Some(Segment::Newline),
                        };
                    }
                    _ => self.buffer.push(ch),
                },
            }
        }

        match self.mode {
            Mode::Text => self.take_run(),
            Mode::Token => {
                if !self.buffer.is_empty() {
                    tracing::trace!(token = %self.buffer, "dropping unterminated button token");
                    self.buffer.clear();
                }
                None
            }
        }
    }
}
