//! Collection of I/O-free, resumable and composable file descriptor
//! state machines.
//!
//! Coroutines emit [`FdIo`] requests that need to be processed by
//! [runtimes] in order to continue their progression.
//!
//! [`FdIo`]: crate::FdIo
//! [runtimes]: crate::runtimes

pub mod read;
#[path = "read-lines.rs"]
pub mod read_lines;
#[path = "read-to-end.rs"]
pub mod read_to_end;
pub mod seek;
pub mod write;
