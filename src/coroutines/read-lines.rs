//! I/O-free coroutine to read a descriptor line by line.

use std::mem;

use log::{debug, trace};
use memchr::memchr;
use thiserror::Error;

use crate::io::FdIo;

use super::read::{ReadFd, ReadFdError, ReadFdResult};

/// Errors that can occur during the coroutine progression.
#[derive(Clone, Debug, Error)]
pub enum ReadFdLinesError {
    /// Error from the [`ReadFd`] coroutine.
    #[error(transparent)]
    Read(#[from] ReadFdError),
}

/// Output emitted after a coroutine finishes its progression.
#[derive(Clone, Debug)]
pub enum ReadFdLinesResult {
    /// The coroutine has yielded the next line.
    Ok(Vec<u8>),

    /// A descriptor I/O needs to be performed to make the coroutine
    /// progress.
    Io(FdIo),

    /// An error occured during the coroutine progression.
    Err(ReadFdLinesError),

    /// The descriptor reached End Of File and no buffered line
    /// remains.
    Eof,
}

/// I/O-free coroutine to read a descriptor line by line.
///
/// Each successful resumption yields the next line with its `\n`
/// terminator stripped, a `\r` preceding it also stripped. A final
/// line without terminator is yielded before [`ReadFdLinesResult::Eof`].
#[derive(Debug)]
pub struct ReadFdLines {
    /// The inner read coroutine.
    read: ReadFd,

    /// Bytes read from the descriptor but not yielded yet.
    buffer: Vec<u8>,

    /// Whether the inner read coroutine reached EOF.
    eof: bool,
}

impl ReadFdLines {
    /// Creates a new coroutine to read lines using a buffer with
    /// [`ReadFd::DEFAULT_CAPACITY`] capacity.
    ///
    /// See [`Self::with_capacity`] for a custom buffer capacity.
    pub fn new() -> Self {
        Self::with_capacity(ReadFd::DEFAULT_CAPACITY)
    }

    /// Creates a new coroutine to read lines using a buffer with the
    /// given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        trace!("init coroutine to read lines (capacity: {capacity})");
        let read = ReadFd::with_capacity(capacity);
        let buffer = Vec::with_capacity(capacity);
        let eof = false;
        Self { read, buffer, eof }
    }

    fn take_line(&mut self, terminator: usize) -> Vec<u8> {
        let mut line: Vec<u8> = self.buffer.drain(..=terminator).collect();
        line.pop();

        if line.last() == Some(&b'\r') {
            line.pop();
        }

        debug!("yield line of {} bytes", line.len());
        line
    }

    /// Makes the coroutine progress.
    pub fn resume(&mut self, mut arg: Option<FdIo>) -> ReadFdLinesResult {
        loop {
            if let Some(n) = memchr(b'\n', &self.buffer) {
                break ReadFdLinesResult::Ok(self.take_line(n));
            }

            if self.eof {
                if self.buffer.is_empty() {
                    break ReadFdLinesResult::Eof;
                }

                // last line without terminator
                let line = mem::take(&mut self.buffer);
                debug!("yield final unterminated line of {} bytes", line.len());
                break ReadFdLinesResult::Ok(line);
            }

            let output = match self.read.resume(arg.take()) {
                ReadFdResult::Ok(output) => output,
                ReadFdResult::Err(err) => break ReadFdLinesResult::Err(err.into()),
                ReadFdResult::Io(io) => break ReadFdLinesResult::Io(io),
                ReadFdResult::Eof => {
                    self.eof = true;
                    continue;
                }
            };

            self.buffer.extend(output.bytes());
            self.read.replace(output.buffer);
        }
    }
}

impl Default for ReadFdLines {
    fn default() -> Self {
        Self::new()
    }
}
