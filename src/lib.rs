//! webterm - A simulated single-user terminal
//!
//! This library provides an in-memory hierarchical namespace and a
//! line-oriented command shell that drives it, including output
//! redirection and interactive continuations.

pub mod commands;
pub mod fs;
pub mod parser;
pub mod shell;
pub mod store;

pub use commands::{Command, CommandContext, CommandResult, ErrorKind, MessageKind, Output, ShellError};
pub use fs::{FileSystem, InMemoryFs, NodeInfo, VfsError};
pub use shell::{Shell, ShellOptions};
pub use store::{KeyValueStore, MemoryStore};
