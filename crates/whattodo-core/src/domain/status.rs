//! Task completion status.

use std::fmt;
use std::str::FromStr;

use super::errors::ParseError;

/// Completion state of a task (two states only).
///
/// Persisted as a boolean (`true` = done). Text input goes through the strict
/// [`FromStr`] impl: unknown tokens are rejected instead of ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TaskStatus {
    #[default]
    NotDone,
    Done,
}

impl TaskStatus {
    pub const DONE_TOKEN: &'static str = "done";
    pub const NOT_DONE_TOKEN: &'static str = "not done";

    pub const DONE_GLYPH: &'static str = "✔";
    pub const NOT_DONE_GLYPH: &'static str = "✘";

    pub fn is_done(self) -> bool {
        matches!(self, TaskStatus::Done)
    }

    /// Single-character indicator used in listings.
    pub fn glyph(self) -> &'static str {
        match self {
            TaskStatus::Done => Self::DONE_GLYPH,
            TaskStatus::NotDone => Self::NOT_DONE_GLYPH,
        }
    }

    pub fn as_token(self) -> &'static str {
        match self {
            TaskStatus::Done => Self::DONE_TOKEN,
            TaskStatus::NotDone => Self::NOT_DONE_TOKEN,
        }
    }
}

impl From<bool> for TaskStatus {
    fn from(done: bool) -> Self {
        if done {
            TaskStatus::Done
        } else {
            TaskStatus::NotDone
        }
    }
}

impl From<TaskStatus> for bool {
    fn from(status: TaskStatus) -> Self {
        status.is_done()
    }
}

impl FromStr for TaskStatus {
    type Err = ParseError;

    /// Accepts `done` and `not done`; `not-done` is accepted so the value can
    /// be passed on a command line without quoting.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::DONE_TOKEN => Ok(TaskStatus::Done),
            Self::NOT_DONE_TOKEN | "not-done" => Ok(TaskStatus::NotDone),
            other => Err(ParseError::Status(other.to_string())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn default_is_not_done() {
        assert_eq!(TaskStatus::default(), TaskStatus::NotDone);
        assert!(!TaskStatus::default().is_done());
    }

    #[rstest]
    #[case::done("done", TaskStatus::Done)]
    #[case::not_done("not done", TaskStatus::NotDone)]
    #[case::not_done_dashed("not-done", TaskStatus::NotDone)]
    fn parses_known_tokens(#[case] token: &str, #[case] expected: TaskStatus) {
        assert_eq!(token.parse::<TaskStatus>().unwrap(), expected);
    }

    #[rstest]
    #[case::banana("banana")]
    #[case::empty("")]
    #[case::uppercase("DONE")]
    #[case::padded(" done")]
    fn rejects_unknown_tokens(#[case] token: &str) {
        let err = token.parse::<TaskStatus>().unwrap_err();
        assert_eq!(err, ParseError::Status(token.to_string()));
    }

    #[test]
    fn glyphs_differ_per_state() {
        assert_eq!(TaskStatus::Done.glyph(), "✔");
        assert_eq!(TaskStatus::NotDone.glyph(), "✘");
    }

    #[test]
    fn bool_conversion_matches_persisted_flag() {
        assert_eq!(TaskStatus::from(true), TaskStatus::Done);
        assert_eq!(TaskStatus::from(false), TaskStatus::NotDone);
        assert!(bool::from(TaskStatus::Done));
        assert!(!bool::from(TaskStatus::NotDone));
    }

    #[test]
    fn display_round_trips_through_parse() {
        for status in [TaskStatus::Done, TaskStatus::NotDone] {
            assert_eq!(status.to_string().parse::<TaskStatus>().unwrap(), status);
        }
    }
}
