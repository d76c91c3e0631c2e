//! Line-oriented console adapter and the interactive menu sessions.
//!
//! # Responsibility
//! - Prompt for and read one trimmed line at a time.
//! - Run the menu dispatch loop and map choices onto service commands.
//!
//! # Invariants
//! - The loop has a single waiting state; every handler returns to it.
//! - Invalid input is reported and abandons only the current operation.
//! - End of input at any prompt ends the session without saving. An
//!   interrupt signal is handled by the binaries with the same notice.

use crate::repo::document_repo::RepoError;
use crate::service::selection::parse_selection;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{BufRead, Write};

pub mod member_session;
pub mod menu;
pub mod news_session;

use menu::MenuAction;

pub type SessionResult<T> = Result<T, SessionError>;

/// Printed when a session ends on an interrupt or end of input.
pub const INTERRUPT_NOTICE: &str = "\n\nExiting...";

/// How an interactive session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// "Save and exit": the document was written.
    Saved,
    /// "Exit without saving".
    Discarded,
    /// Input ended mid-session; nothing was written.
    Interrupted,
}

/// Failure that ends a session.
#[derive(Debug)]
pub enum SessionError {
    /// Reading input or writing output failed.
    Io(std::io::Error),
    /// Input reached end of stream. Sessions turn this into
    /// `SessionOutcome::Interrupted` before returning.
    Closed,
    /// Saving or rendering the document failed.
    Repo(RepoError),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "console i/o failed: {err}"),
            Self::Closed => write!(f, "console input closed"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Closed => None,
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for SessionError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<RepoError> for SessionError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Prompt/response channel over any buffered reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes `label` without a newline and reads the trimmed response.
    pub fn prompt(&mut self, label: &str) -> SessionResult<String> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SessionError::Closed);
        }
        Ok(line.trim().to_string())
    }

    /// Writes one line of output.
    pub fn say(&mut self, text: impl Display) -> SessionResult<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

/// Result of one handler invocation inside the dispatch loop.
pub(crate) enum Flow {
    Continue,
    Exit(SessionOutcome),
}

/// Shows the menu and reads one choice. `None` means re-prompt.
pub(crate) fn read_action<A, R, W>(console: &mut Console<R, W>) -> SessionResult<Option<A>>
where
    A: MenuAction,
    R: BufRead,
    W: Write,
{
    console.say("\n=== Menu ===")?;
    for line in A::LINES {
        console.say(line)?;
    }
    let input = console.prompt(&format!("\nSelect option (0-{}): ", A::MAX))?;
    match A::parse(&input) {
        Ok(action) => Ok(Some(action)),
        Err(err) => {
            console.say(err)?;
            Ok(None)
        }
    }
}

/// Reads a 1-based position for a collection of `len` records.
///
/// Reports invalid input and returns `None`; there is no retry.
pub(crate) fn select_index<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    what: &str,
    len: usize,
) -> SessionResult<Option<usize>> {
    let input = console.prompt(&format!("\nSelect {what} (1-{len}): "))?;
    match parse_selection(&input, len) {
        Ok(index) => Ok(Some(index)),
        Err(err) => {
            console.say(err)?;
            Ok(None)
        }
    }
}

/// Converts end of input into an unsaved exit.
pub(crate) fn settle<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    result: SessionResult<SessionOutcome>,
) -> SessionResult<SessionOutcome> {
    match result {
        Err(SessionError::Closed) => {
            console.say(INTERRUPT_NOTICE)?;
            Ok(SessionOutcome::Interrupted)
        }
        other => other,
    }
}
