#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Set of I/O-free coroutines and runtimes to manage raw file
//! descriptors.
//!
//! Coroutines are resumable state machines that emit [`FdIo`]
//! requests instead of performing any I/O themselves. Runtimes
//! process those requests against a concrete descriptor, blocking or
//! async. The [`fd`] module bridges a raw OS descriptor into this
//! cooperative, non-blocking world.

pub mod coroutines;
#[cfg(feature = "std")]
pub mod fd;
pub mod io;
pub mod runtimes;

pub use io::{FdIo, FdOutput};
