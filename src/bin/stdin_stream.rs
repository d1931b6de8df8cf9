//! Reads standard input through the descriptor bridge and echoes
//! every chunk as it arrives, until EOF.

use std::io::{stdout, Write as _};

use io_fd::{
    coroutines::read::{ReadFd, ReadFdResult},
    fd::Fd,
    runtimes::std::handle,
};

fn main() {
    env_logger::init();

    let mut fd = Fd::stdin().unwrap();

    println!("Reading from standard input, close it (Ctrl-D) to finish.");

    let mut read = ReadFd::new();
    let mut arg = None;

    loop {
        match read.resume(arg.take()) {
            ReadFdResult::Eof => break,
            ReadFdResult::Err(err) => panic!("{err}"),
            ReadFdResult::Ok(output) => {
                stdout().write_all(output.bytes()).unwrap();
                stdout().flush().unwrap();
                read.replace(output.buffer);
            }
            ReadFdResult::Io(io) => {
                let io = handle(&mut fd, io).unwrap();
                if io.is_pending() {
                    fd.wait_readable().unwrap();
                }
                arg = Some(io);
            }
        }
    }
}
