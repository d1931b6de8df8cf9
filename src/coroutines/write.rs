//! I/O-free coroutine to write bytes to a descriptor.

use log::{debug, trace};
use thiserror::Error;

use crate::io::{FdIo, FdOutput};

/// Errors that can occur during the coroutine progression.
#[derive(Clone, Debug, Error)]
pub enum WriteFdError {
    /// The coroutine was resumed with an unexpected argument.
    #[error("Invalid argument: expected {0}, got {1:?}")]
    InvalidArgument(&'static str, FdIo),
}

/// Output emitted after a coroutine finishes its progression.
#[derive(Clone, Debug)]
pub enum WriteFdResult {
    /// The coroutine has successfully written all its bytes.
    Ok(FdOutput),

    /// A descriptor I/O needs to be performed to make the coroutine
    /// progress.
    Io(FdIo),

    /// An error occured during the coroutine progression.
    Err(WriteFdError),

    /// The descriptor accepted 0 bytes.
    Eof,
}

/// I/O-free coroutine for writing bytes to a descriptor.
///
/// Short writes are handled internally: the coroutine keeps emitting
/// [`FdIo::Write`] requests for the unwritten tail until everything
/// went through.
#[derive(Debug, Default)]
pub struct WriteFd {
    bytes: Vec<u8>,
    total: usize,
}

impl WriteFd {
    /// Creates a new coroutine to write the given bytes.
    pub fn new(bytes: Vec<u8>) -> Self {
        trace!("init coroutine for writing {} bytes", bytes.len());
        let total = 0;
        Self { bytes, total }
    }

    /// Makes the write progress.
    pub fn resume(&mut self, arg: Option<FdIo>) -> WriteFdResult {
        let Some(arg) = arg else {
            let bytes = self.bytes.drain(..).collect();
            trace!("break: need I/O to write bytes");
            return WriteFdResult::Io(FdIo::Write(Err(bytes)));
        };

        trace!("resume after writing bytes");

        let FdIo::Write(io) = arg else {
            return WriteFdResult::Err(WriteFdError::InvalidArgument("write output", arg));
        };

        let output = match io {
            Ok(output) => output,
            // the request is still pending, the runtime could not
            // progress without blocking
            Err(bytes) => return WriteFdResult::Io(FdIo::Write(Err(bytes))),
        };

        match output.bytes_count {
            0 => WriteFdResult::Eof,
            n if n < output.buffer.len() => {
                self.total += n;
                debug!("wrote {n} bytes, {} remaining", output.buffer.len() - n);
                let tail = output.buffer[n..].to_vec();
                WriteFdResult::Io(FdIo::Write(Err(tail)))
            }
            n => {
                self.total += n;
                debug!("wrote {n} bytes, {} in total", self.total);
                WriteFdResult::Ok(output)
            }
        }
    }
}
