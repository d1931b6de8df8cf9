//! I/O-free coroutine to read bytes from a descriptor until it
//! reaches EOF.

use std::mem;

use log::trace;
use thiserror::Error;

use crate::io::FdIo;

use super::read::{ReadFd, ReadFdError, ReadFdResult};

/// Errors that can occur during the coroutine progression.
#[derive(Clone, Debug, Error)]
pub enum ReadFdToEndError {
    /// Error from the [`ReadFd`] coroutine.
    #[error(transparent)]
    Read(#[from] ReadFdError),
}

/// Output emitted after a coroutine finishes its progression.
#[derive(Clone, Debug)]
pub enum ReadFdToEndResult {
    /// The coroutine has successfully terminated its progression.
    Ok(Vec<u8>),

    /// A descriptor I/O needs to be performed to make the coroutine
    /// progress.
    Io(FdIo),

    /// An error occured during the coroutine progression.
    Err(ReadFdToEndError),
}

/// I/O-free coroutine to read bytes from a descriptor until it
/// reaches EOF.
#[derive(Debug)]
pub struct ReadFdToEnd {
    /// The inner read coroutine.
    read: ReadFd,

    /// The buffer containing the read bytes.
    buffer: Vec<u8>,
}

impl ReadFdToEnd {
    /// Creates a new coroutine to read bytes using a buffer with
    /// [`ReadFd::DEFAULT_CAPACITY`] capacity.
    ///
    /// See [`Self::with_capacity`] for a custom buffer capacity.
    pub fn new() -> Self {
        Self::with_capacity(ReadFd::DEFAULT_CAPACITY)
    }

    /// Creates a new coroutine to read bytes using a buffer with the
    /// given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        trace!("init coroutine to read until EOF (capacity: {capacity})");
        let read = ReadFd::with_capacity(capacity);
        let buffer = Vec::with_capacity(capacity);
        Self { read, buffer }
    }

    /// Makes the coroutine progress.
    pub fn resume(&mut self, mut arg: Option<FdIo>) -> ReadFdToEndResult {
        loop {
            let output = match self.read.resume(arg.take()) {
                ReadFdResult::Ok(output) => output,
                ReadFdResult::Err(err) => break ReadFdToEndResult::Err(err.into()),
                ReadFdResult::Io(io) => break ReadFdToEndResult::Io(io),
                ReadFdResult::Eof => {
                    let buffer = mem::take(&mut self.buffer);
                    break ReadFdToEndResult::Ok(buffer);
                }
            };

            self.buffer.extend(output.bytes());
            self.read.replace(output.buffer);
        }
    }
}

impl Default for ReadFdToEnd {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::io::{BufReader, Read as _};

    use crate::{
        coroutines::read_to_end::ReadFdToEndResult,
        io::{FdIo, FdOutput},
    };

    use super::ReadFdToEnd;

    #[test]
    fn read_to_end() {
        let _ = env_logger::try_init();

        let mut reader = BufReader::new("abcdef".as_bytes());

        let mut read = ReadFdToEnd::with_capacity(4);
        let mut arg = None;

        let output = loop {
            match read.resume(arg.take()) {
                ReadFdToEndResult::Ok(output) => break output,
                ReadFdToEndResult::Io(FdIo::Read(Err(mut buffer))) => {
                    let bytes_count = reader.read(&mut buffer).unwrap();
                    let output = FdOutput {
                        buffer,
                        bytes_count,
                    };
                    arg = Some(FdIo::Read(Ok(output)))
                }
                other => unreachable!("Unexpected result: {other:?}"),
            }
        };

        assert_eq!(output, b"abcdef");
    }

    #[test]
    fn read_to_end_empty_source() {
        let _ = env_logger::try_init();

        let mut reader = BufReader::new("".as_bytes());

        let mut read = ReadFdToEnd::with_capacity(4);
        let mut arg = None;

        let output = loop {
            match read.resume(arg.take()) {
                ReadFdToEndResult::Ok(output) => break output,
                ReadFdToEndResult::Io(FdIo::Read(Err(mut buffer))) => {
                    let bytes_count = reader.read(&mut buffer).unwrap();
                    let output = FdOutput {
                        buffer,
                        bytes_count,
                    };
                    arg = Some(FdIo::Read(Ok(output)))
                }
                other => unreachable!("Unexpected result: {other:?}"),
            }
        };

        assert!(output.is_empty());
    }
}
