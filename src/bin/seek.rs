//! Interleaves writes and seeks against a file through the
//! descriptor bridge. The resulting file content is always
//! `aaccccAAbbbbbbbb`.

use std::{env, fs::File, io::SeekFrom};

use io_fd::{
    coroutines::{
        seek::{SeekFd, SeekFdResult},
        write::{WriteFd, WriteFdResult},
    },
    fd::Fd,
    runtimes::std::handle,
};
use log::debug;

fn main() {
    env_logger::init();

    let path = env::args().nth(1).unwrap_or_else(|| String::from("seek.txt"));
    debug!("writing to {path}");

    let file = File::options()
        .create(true)
        .truncate(true)
        .write(true)
        .open(&path)
        .unwrap();

    let mut fd = Fd::new(file.into()).unwrap();

    write_all(&mut fd, b"aaaaaaaabbbbbbbb");
    seek_to(&mut fd, SeekFrom::Start(2));
    write_all(&mut fd, b"cccc");

    let pos = seek_to(&mut fd, SeekFrom::Current(0));
    debug!("cursor settled at position {pos}");

    write_all(&mut fd, b"AA");
}

fn write_all(fd: &mut Fd, bytes: &[u8]) {
    let mut write = WriteFd::new(bytes.to_vec());
    let mut arg = None;

    loop {
        match write.resume(arg.take()) {
            WriteFdResult::Ok(_) => break,
            WriteFdResult::Eof => panic!("descriptor accepted 0 bytes"),
            WriteFdResult::Err(err) => panic!("{err}"),
            WriteFdResult::Io(io) => {
                let io = handle(&mut *fd, io).unwrap();
                if io.is_pending() {
                    fd.wait_writable().unwrap();
                }
                arg = Some(io);
            }
        }
    }
}

fn seek_to(fd: &mut Fd, from: SeekFrom) -> u64 {
    let mut seek = SeekFd::new(from);
    let mut arg = None;

    loop {
        match seek.resume(arg.take()) {
            SeekFdResult::Ok(pos) => break pos,
            SeekFdResult::Err(err) => panic!("{err}"),
            SeekFdResult::Io(io) => arg = Some(handle(&mut *fd, io).unwrap()),
        }
    }
}
