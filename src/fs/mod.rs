//! File System Module
//!
//! Provides the virtual namespace the shell operates on:
//! - FileSystem: the namespace interface used by commands
//! - InMemoryFs: arena-backed tree with a current-directory cursor (default)

pub mod types;
pub mod in_memory_fs;

pub use types::*;
pub use in_memory_fs::InMemoryFs;
