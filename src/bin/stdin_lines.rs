//! Reads standard input line by line through the descriptor bridge.

use io_fd::{
    coroutines::read_lines::{ReadFdLines, ReadFdLinesResult},
    fd::Fd,
    runtimes::std::handle,
};

fn main() {
    env_logger::init();

    let mut fd = Fd::stdin().unwrap();

    println!("Reading from standard input, close it (Ctrl-D) to finish.");

    let mut lines = ReadFdLines::new();
    let mut arg = None;

    loop {
        match lines.resume(arg.take()) {
            ReadFdLinesResult::Eof => break,
            ReadFdLinesResult::Err(err) => panic!("{err}"),
            ReadFdLinesResult::Ok(line) => {
                println!("Got: {:?}", String::from_utf8_lossy(&line));
            }
            ReadFdLinesResult::Io(io) => {
                let io = handle(&mut fd, io).unwrap();
                if io.is_pending() {
                    fd.wait_readable().unwrap();
                }
                arg = Some(io);
            }
        }
    }
}
