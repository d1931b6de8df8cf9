//! I/O-free coroutine to move a descriptor's cursor.

use std::io::SeekFrom;

use log::{debug, trace};
use thiserror::Error;

use crate::io::FdIo;

/// Errors that can occur during the coroutine progression.
#[derive(Clone, Debug, Error)]
pub enum SeekFdError {
    /// The coroutine was resumed with an unexpected argument.
    #[error("Invalid argument: expected {0}, got {1:?}")]
    InvalidArgument(&'static str, FdIo),
}

/// Output emitted after a coroutine finishes its progression.
#[derive(Clone, Debug)]
pub enum SeekFdResult {
    /// The coroutine has successfully terminated its progression,
    /// with the resolved absolute position.
    Ok(u64),

    /// A descriptor I/O needs to be performed to make the coroutine
    /// progress.
    Io(FdIo),

    /// An error occured during the coroutine progression.
    Err(SeekFdError),
}

/// I/O-free coroutine for moving a descriptor's cursor.
#[derive(Clone, Debug)]
pub struct SeekFd {
    from: SeekFrom,
}

impl SeekFd {
    /// Creates a new coroutine to seek to the given position.
    pub fn new(from: SeekFrom) -> Self {
        trace!("init coroutine for seeking to {from:?}");
        Self { from }
    }

    /// Makes the seek progress.
    pub fn resume(&mut self, arg: Option<FdIo>) -> SeekFdResult {
        let Some(arg) = arg else {
            trace!("break: need I/O to seek");
            return SeekFdResult::Io(FdIo::Seek(Err(self.from)));
        };

        trace!("resume after seeking");

        let FdIo::Seek(io) = arg else {
            return SeekFdResult::Err(SeekFdError::InvalidArgument("seek output", arg));
        };

        match io {
            Ok(pos) => {
                debug!("cursor moved to position {pos}");
                SeekFdResult::Ok(pos)
            }
            // the request is still pending, the runtime could not
            // progress without blocking
            Err(from) => SeekFdResult::Io(FdIo::Seek(Err(from))),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Seek, SeekFrom};

    use crate::io::FdIo;

    use super::{SeekFd, SeekFdResult};

    #[test]
    fn seek() {
        let _ = env_logger::try_init();

        let mut cursor = Cursor::new(b"abcdef".to_vec());

        let mut seek = SeekFd::new(SeekFrom::Start(4));
        let mut arg = None;

        let pos = loop {
            match seek.resume(arg.take()) {
                SeekFdResult::Ok(pos) => break pos,
                SeekFdResult::Io(FdIo::Seek(Err(from))) => {
                    let pos = cursor.seek(from).unwrap();
                    arg = Some(FdIo::Seek(Ok(pos)))
                }
                other => unreachable!("Unexpected result: {other:?}"),
            }
        };

        assert_eq!(pos, 4);

        let mut seek = SeekFd::new(SeekFrom::Current(-2));
        let mut arg = None;

        let pos = loop {
            match seek.resume(arg.take()) {
                SeekFdResult::Ok(pos) => break pos,
                SeekFdResult::Io(FdIo::Seek(Err(from))) => {
                    let pos = cursor.seek(from).unwrap();
                    arg = Some(FdIo::Seek(Ok(pos)))
                }
                other => unreachable!("Unexpected result: {other:?}"),
            }
        };

        assert_eq!(pos, 2);
    }
}
