//! The standard, blocking descriptor runtime.

use std::io::{self, ErrorKind, Read, Seek, SeekFrom, Write};

use log::trace;

use crate::io::{FdIo, FdOutput};

/// The standard, blocking descriptor runtime handler.
///
/// This handler makes use of standard modules [`std::io`] to process
/// [`FdIo`]. When the underlying descriptor is in non-blocking mode
/// and the operation would block, the request is returned untouched
/// (still pending) so that the caller can wait for readiness and
/// retry.
pub fn handle(fd: impl Read + Write + Seek, io: FdIo) -> io::Result<FdIo> {
    match io {
        FdIo::Read(io) => read(fd, io),
        FdIo::Write(io) => write(fd, io),
        FdIo::Seek(io) => seek(fd, io),
    }
}

pub fn read(mut fd: impl Read, input: Result<FdOutput, Vec<u8>>) -> io::Result<FdIo> {
    let mut buffer = match input {
        Ok(output) => return Ok(FdIo::Read(Ok(output))),
        Err(buffer) => buffer,
    };

    trace!("reading bytes synchronously");
    let bytes_count = match fd.read(&mut buffer) {
        Ok(n) => n,
        Err(err) if err.kind() == ErrorKind::WouldBlock => {
            trace!("read would block, request left pending");
            return Ok(FdIo::Read(Err(buffer)));
        }
        Err(err) => return Err(err),
    };

    let output = FdOutput {
        buffer,
        bytes_count,
    };

    Ok(FdIo::Read(Ok(output)))
}

pub fn write(mut fd: impl Write, input: Result<FdOutput, Vec<u8>>) -> io::Result<FdIo> {
    let bytes = match input {
        Ok(output) => return Ok(FdIo::Write(Ok(output))),
        Err(bytes) => bytes,
    };

    trace!("writing bytes synchronously");
    let bytes_count = match fd.write(&bytes) {
        Ok(n) => n,
        Err(err) if err.kind() == ErrorKind::WouldBlock => {
            trace!("write would block, request left pending");
            return Ok(FdIo::Write(Err(bytes)));
        }
        Err(err) => return Err(err),
    };

    let output = FdOutput {
        buffer: bytes,
        bytes_count,
    };

    Ok(FdIo::Write(Ok(output)))
}

pub fn seek(mut fd: impl Seek, input: Result<u64, SeekFrom>) -> io::Result<FdIo> {
    let from = match input {
        Ok(pos) => return Ok(FdIo::Seek(Ok(pos))),
        Err(from) => from,
    };

    trace!("seeking synchronously");
    let pos = fd.seek(from)?;

    Ok(FdIo::Seek(Ok(pos)))
}
