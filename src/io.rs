use std::io::SeekFrom;

/// The file descriptor I/O request enum, emitted by [coroutines] and
/// processed by [runtimes].
///
/// Represents all the possible I/O requests that a descriptor
/// coroutine can emit. Runtimes should be able to handle all
/// variants.
///
/// The `Err` side of each variant is the pending request (the buffer
/// to fill, the bytes to drain, the position to reach), the `Ok` side
/// the completed response. A runtime that cannot progress without
/// blocking returns the request untouched, so that callers can wait
/// for descriptor readiness and retry.
///
/// [coroutines]: crate::coroutines
/// [runtimes]: crate::runtimes
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FdIo {
    /// I/O for reading bytes from a descriptor.
    Read(Result<FdOutput, Vec<u8>>),

    /// I/O for writing bytes to a descriptor.
    Write(Result<FdOutput, Vec<u8>>),

    /// I/O for moving a descriptor's cursor.
    ///
    /// The response carries the resolved absolute position.
    Seek(Result<u64, SeekFrom>),
}

impl FdIo {
    /// Returns `true` when this value is still a request waiting to
    /// be processed by a runtime.
    pub fn is_pending(&self) -> bool {
        match self {
            FdIo::Read(io) => io.is_err(),
            FdIo::Write(io) => io.is_err(),
            FdIo::Seek(io) => io.is_err(),
        }
    }
}

/// Output returned by both read and write coroutines.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FdOutput {
    /// The inner buffer.
    pub buffer: Vec<u8>,

    /// The amount of bytes that have been read/written.
    pub bytes_count: usize,
}

impl FdOutput {
    pub fn bytes(&self) -> &[u8] {
        &self.buffer[..self.bytes_count]
    }
}
