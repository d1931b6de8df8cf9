//! Reads standard input to EOF through the descriptor bridge, then
//! echoes everything back in one go.

use std::io::{stdout, Write as _};

use io_fd::{
    coroutines::read_to_end::{ReadFdToEnd, ReadFdToEndResult},
    fd::Fd,
    runtimes::std::handle,
};

fn main() {
    env_logger::init();

    let mut fd = Fd::stdin().unwrap();

    println!("Reading from standard input, close it (Ctrl-D) to finish.");

    let mut read = ReadFdToEnd::new();
    let mut arg = None;

    let bytes = loop {
        match read.resume(arg.take()) {
            ReadFdToEndResult::Ok(bytes) => break bytes,
            ReadFdToEndResult::Err(err) => panic!("{err}"),
            ReadFdToEndResult::Io(io) => {
                let io = handle(&mut fd, io).unwrap();
                if io.is_pending() {
                    fd.wait_readable().unwrap();
                }
                arg = Some(io);
            }
        }
    };

    stdout().write_all(&bytes).unwrap();
}
