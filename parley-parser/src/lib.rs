//! Note: message tags (`@key=value;...`) are not handled.

use smallvec::SmallVec;

mod parser;
mod prefix;

pub use crate::prefix::Prefix;

pub type Parameters<'a> = SmallVec<[&'a str; 15]>;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParsingError {
    #[error("empty line")]
    Empty,
    #[error("cannot tokenize {line:?}: {reason}")]
    Invalid { line: String, reason: String },
}

///
/// See: https://modern.ircdocs.horse/#message-format
///
#[derive(Debug, Clone)]
pub struct Line<'l> {
    prefix: Option<&'l str>,
    command: &'l str,
    parameters: Parameters<'l>,
    has_trailing: bool,
}

impl<'l> Line<'l> {
    pub fn prefix(&self) -> Option<&'l str> {
        self.prefix
    }

    pub fn command(&self) -> &'l str {
        self.command
    }

    pub fn parameters(&self) -> &Parameters<'l> {
        &self.parameters
    }

    pub fn first_parameter(&self) -> Option<&'l str> {
        self.parameters.first().copied()
    }

    /// The `:`-prefixed last parameter, without its colon.
    /// `Some("")` when the line ends with a bare `:`.
    pub fn trailing(&self) -> Option<&'l str> {
        if self.has_trailing {
            self.parameters.last().copied()
        } else {
            None
        }
    }

    /// Parameters before the trailing one.
    pub fn middle(&self) -> &[&'l str] {
        match self.parameters.split_last() {
            Some((_, middle)) if self.has_trailing => middle,
            _ => self.parameters.as_slice(),
        }
    }

    pub fn numeric(&self) -> Option<u16> {
        if self.command.len() == 3 && self.command.bytes().all(|c| c.is_ascii_digit()) {
            self.command.parse().ok()
        } else {
            None
        }
    }
}

/// Tokenize one protocol line. A trailing CR/LF is ignored.
pub fn parse(line: &str) -> Result<Line<'_>, ParsingError> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim_start_matches(' ').is_empty() {
        return Err(ParsingError::Empty);
    }

    log::trace!("tokenizing {}", line.escape_debug());
    match parser::parse_line(line) {
        Ok((_, parsed)) => Ok(parsed),
        Err(err) => Err(ParsingError::Invalid {
            line: line.to_string(),
            reason: err.to_string(),
        }),
    }
}
