//! I/O-free coroutine to read bytes from a descriptor into a buffer.

use log::{debug, trace};
use thiserror::Error;

use crate::io::{FdIo, FdOutput};

/// Errors that can occur during the coroutine progression.
#[derive(Clone, Debug, Error)]
pub enum ReadFdError {
    /// The coroutine was resumed with an unexpected argument.
    #[error("Invalid argument: expected {0}, got {1:?}")]
    InvalidArgument(&'static str, FdIo),

    /// The coroutine was resumed while its buffer was lent out.
    #[error("Read buffer not ready")]
    BufferNotReady,
}

/// Output emitted after a coroutine finishes its progression.
#[derive(Clone, Debug)]
pub enum ReadFdResult {
    /// The coroutine has successfully terminated its progression.
    Ok(FdOutput),

    /// A descriptor I/O needs to be performed to make the coroutine
    /// progress.
    Io(FdIo),

    /// An error occured during the coroutine progression.
    Err(ReadFdError),

    /// The descriptor reached End Of File.
    Eof,
}

/// I/O-free coroutine for reading bytes from a descriptor into a
/// buffer.
#[derive(Debug)]
pub struct ReadFd {
    capacity: usize,
    buffer: Option<Vec<u8>>,
}

impl ReadFd {
    /// The default read buffer capacity.
    pub const DEFAULT_CAPACITY: usize = 8 * 1024;

    /// Creates a new coroutine to read bytes using a buffer with
    /// [`Self::DEFAULT_CAPACITY`] capacity.
    ///
    /// See [`Self::with_capacity`] for a custom buffer capacity.
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Creates a new coroutine to read bytes using a buffer with the
    /// given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        debug!("create read buffer of {capacity} capacity");
        let buffer = Some(vec![0; capacity]);
        Self { capacity, buffer }
    }

    /// Returns the buffer capacity.
    ///
    /// This function does not return directly the capacity of the
    /// buffer, it returns instead the initial capacity the coroutine
    /// was created with.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Replaces the inner buffer with the given one.
    pub fn replace(&mut self, mut buffer: Vec<u8>) {
        let capacity = buffer.capacity();
        trace!("replace read buffer with {capacity} capacity");
        buffer.fill(0);
        self.buffer.replace(buffer);
        self.capacity = capacity;
    }

    /// Makes the read progress.
    pub fn resume(&mut self, arg: Option<FdIo>) -> ReadFdResult {
        let Some(arg) = arg else {
            let Some(buffer) = self.buffer.take() else {
                return ReadFdResult::Err(ReadFdError::BufferNotReady);
            };

            trace!("break: need I/O to read bytes");
            return ReadFdResult::Io(FdIo::Read(Err(buffer)));
        };

        trace!("resume after reading bytes");

        let FdIo::Read(io) = arg else {
            return ReadFdResult::Err(ReadFdError::InvalidArgument("read output", arg));
        };

        let output = match io {
            Ok(output) => output,
            // the request is still pending, the runtime could not
            // progress without blocking
            Err(buffer) => return ReadFdResult::Io(FdIo::Read(Err(buffer))),
        };

        match output.bytes_count {
            0 => {
                debug!("read 0 bytes, descriptor reached EOF");
                ReadFdResult::Eof
            }
            n => {
                let capacity = output.buffer.capacity();
                debug!("read {n}/{capacity} bytes");
                ReadFdResult::Ok(output)
            }
        }
    }
}

impl Default for ReadFd {
    fn default() -> Self {
        Self::new()
    }
}
