//! The raw file descriptor bridge.
//!
//! [`Fd`] takes ownership of an OS file descriptor, switches it to
//! non-blocking mode and exposes it through the standard
//! [`Read`]/[`Write`]/[`Seek`] traits, so it can be driven by the
//! [std runtime]. Operations that cannot progress fail with
//! [`ErrorKind::WouldBlock`], which the runtime surfaces as a pending
//! request; [`Fd::wait_readable`] and [`Fd::wait_writable`] park the
//! caller until the descriptor is ready again.
//!
//! [std runtime]: crate::runtimes::std

use std::{
    io::{self, Read, Seek, SeekFrom, Write},
    os::fd::{AsFd, BorrowedFd, OwnedFd},
};

use log::{debug, trace};
use rustix::{
    event::{poll, PollFd, PollFlags},
    fs::{fcntl_getfl, fcntl_setfl, OFlags},
};

/// An owned file descriptor in non-blocking mode.
#[derive(Debug)]
pub struct Fd {
    fd: OwnedFd,
}

impl Fd {
    /// Takes ownership of the given descriptor and puts it in
    /// non-blocking mode.
    pub fn new(fd: OwnedFd) -> io::Result<Self> {
        let flags = fcntl_getfl(&fd)?;
        fcntl_setfl(&fd, flags | OFlags::NONBLOCK)?;
        debug!("bridged descriptor in non-blocking mode");
        Ok(Self { fd })
    }

    /// Duplicates the process's standard input into an owned,
    /// non-blocking descriptor.
    ///
    /// The duplicate shares its open file description with fd 0, so
    /// the non-blocking mode is observable there as well.
    pub fn stdin() -> io::Result<Self> {
        let stdin = io::stdin();
        let fd = stdin.as_fd().try_clone_to_owned()?;
        Self::new(fd)
    }

    /// Blocks the calling thread until the descriptor is readable.
    pub fn wait_readable(&self) -> io::Result<()> {
        trace!("waiting for descriptor readability");
        let mut fds = [PollFd::new(&self.fd, PollFlags::IN)];
        poll(&mut fds, None)?;
        Ok(())
    }

    /// Blocks the calling thread until the descriptor is writable.
    pub fn wait_writable(&self) -> io::Result<()> {
        trace!("waiting for descriptor writability");
        let mut fds = [PollFd::new(&self.fd, PollFlags::OUT)];
        poll(&mut fds, None)?;
        Ok(())
    }

}

impl AsFd for Fd {
    fn as_fd(&self) -> BorrowedFd<'_> {
        self.fd.as_fd()
    }
}

impl Read for Fd {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = rustix::io::read(&self.fd, buf)?;
        Ok(n)
    }
}

impl Write for Fd {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = rustix::io::write(&self.fd, buf)?;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Seek for Fd {
    fn seek(&mut self, from: SeekFrom) -> io::Result<u64> {
        let from = match from {
            SeekFrom::Start(pos) => rustix::fs::SeekFrom::Start(pos),
            SeekFrom::End(off) => rustix::fs::SeekFrom::End(off),
            SeekFrom::Current(off) => rustix::fs::SeekFrom::Current(off),
        };

        let pos = rustix::fs::seek(&self.fd, from)?;
        Ok(pos)
    }
}

#[cfg(test)]
mod tests {
    use std::{
        fs::File,
        io::{Read, Seek, SeekFrom, Write},
    };

    use super::Fd;

    #[test]
    fn write_seek_read_back() {
        let _ = env_logger::try_init();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scratch");

        let file = File::options()
            .create(true)
            .truncate(true)
            .read(true)
            .write(true)
            .open(&path)
            .unwrap();

        let mut fd = Fd::new(file.into()).unwrap();

        fd.write_all(b"abcdef").unwrap();
        assert_eq!(fd.seek(SeekFrom::Start(2)).unwrap(), 2);

        let mut rest = Vec::new();
        fd.read_to_end(&mut rest).unwrap();
        assert_eq!(rest, b"cdef");
    }

    #[test]
    fn regular_file_is_always_ready() {
        let _ = env_logger::try_init();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scratch");

        let file = File::options()
            .create(true)
            .truncate(true)
            .read(true)
            .write(true)
            .open(&path)
            .unwrap();

        let fd = Fd::new(file.into()).unwrap();

        fd.wait_readable().unwrap();
        fd.wait_writable().unwrap();
    }
}
