//! Lazy JSON Lines candidate reader.

use std::io::{self, BufRead, Lines};

use thiserror::Error;

use vicinity_core::Candidate;

/// Errors that can occur while reading candidates.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("failed to read line {line}")]
    Io {
        line: usize,
        #[source]
        source: io::Error,
    },

    #[error("line {line} is not a valid candidate")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Yields one candidate per non-blank line, reading on demand.
pub struct Candidates<R> {
    lines: Lines<R>,
    line: usize,
}

impl<R: BufRead> Candidates<R> {
    /// Wraps a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
        }
    }
}

impl<R: BufRead> Iterator for Candidates<R> {
    type Item = Result<Candidate, ReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let text = self.lines.next()?;
            self.line += 1;
            let line = self.line;

            let text = match text {
                Ok(text) => text,
                Err(source) => return Some(Err(ReadError::Io { line, source })),
            };
            if text.trim().is_empty() {
                continue;
            }

            return Some(
                serde_json::from_str(&text).map_err(|source| ReadError::Parse { line, source }),
            );
        }
    }
}
