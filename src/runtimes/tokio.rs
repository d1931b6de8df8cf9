//! The Tokio-based, async descriptor runtime.

use std::io::{self, SeekFrom};

use log::trace;
use tokio::io::{
    AsyncRead, AsyncReadExt, AsyncSeek, AsyncSeekExt, AsyncWrite, AsyncWriteExt,
};

use crate::io::{FdIo, FdOutput};

/// The Tokio-based, async descriptor runtime handler.
///
/// This handler makes use of standard module [`std::io`] and Tokio
/// module [`tokio::io`] to process [`FdIo`].
pub async fn handle(
    fd: impl AsyncRead + AsyncWrite + AsyncSeek + Unpin,
    io: FdIo,
) -> io::Result<FdIo> {
    match io {
        FdIo::Read(io) => read(fd, io).await,
        FdIo::Write(io) => write(fd, io).await,
        FdIo::Seek(io) => seek(fd, io).await,
    }
}

pub async fn read(
    mut fd: impl AsyncRead + Unpin,
    input: Result<FdOutput, Vec<u8>>,
) -> io::Result<FdIo> {
    let mut buffer = match input {
        Ok(output) => return Ok(FdIo::Read(Ok(output))),
        Err(buffer) => buffer,
    };

    trace!("reading bytes asynchronously");
    let bytes_count = fd.read(&mut buffer).await?;

    let output = FdOutput {
        buffer,
        bytes_count,
    };

    Ok(FdIo::Read(Ok(output)))
}

pub async fn write(
    mut fd: impl AsyncWrite + Unpin,
    input: Result<FdOutput, Vec<u8>>,
) -> io::Result<FdIo> {
    let bytes = match input {
        Ok(output) => return Ok(FdIo::Write(Ok(output))),
        Err(bytes) => bytes,
    };

    trace!("writing bytes asynchronously");
    let bytes_count = fd.write(&bytes).await?;

    let output = FdOutput {
        buffer: bytes,
        bytes_count,
    };

    Ok(FdIo::Write(Ok(output)))
}

pub async fn seek(
    mut fd: impl AsyncSeek + Unpin,
    input: Result<u64, SeekFrom>,
) -> io::Result<FdIo> {
    let from = match input {
        Ok(pos) => return Ok(FdIo::Seek(Ok(pos))),
        Err(from) => from,
    };

    trace!("seeking asynchronously");
    let pos = fd.seek(from).await?;

    Ok(FdIo::Seek(Ok(pos)))
}

#[cfg(test)]
mod tests {
    use std::io::SeekFrom;

    use crate::coroutines::{
        read_to_end::{ReadFdToEnd, ReadFdToEndResult},
        seek::{SeekFd, SeekFdResult},
        write::{WriteFd, WriteFdResult},
    };

    use super::handle;

    #[tokio::test]
    async fn write_seek_read_back() {
        let _ = env_logger::try_init();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scratch");

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .truncate(true)
            .read(true)
            .write(true)
            .open(&path)
            .await
            .unwrap();

        let mut write = WriteFd::new(b"abcdef".to_vec());
        let mut arg = None;

        loop {
            match write.resume(arg.take()) {
                WriteFdResult::Ok(_) => break,
                WriteFdResult::Io(io) => arg = Some(handle(&mut file, io).await.unwrap()),
                other => unreachable!("Unexpected result: {other:?}"),
            }
        }

        let mut seek = SeekFd::new(SeekFrom::Start(0));
        let mut arg = None;

        loop {
            match seek.resume(arg.take()) {
                SeekFdResult::Ok(pos) => break assert_eq!(pos, 0),
                SeekFdResult::Io(io) => arg = Some(handle(&mut file, io).await.unwrap()),
                SeekFdResult::Err(err) => unreachable!("Unexpected error: {err:?}"),
            }
        }

        let mut read = ReadFdToEnd::new();
        let mut arg = None;

        let output = loop {
            match read.resume(arg.take()) {
                ReadFdToEndResult::Ok(output) => break output,
                ReadFdToEndResult::Io(io) => arg = Some(handle(&mut file, io).await.unwrap()),
                ReadFdToEndResult::Err(err) => unreachable!("Unexpected error: {err:?}"),
            }
        };

        assert_eq!(output, b"abcdef");
    }
}
