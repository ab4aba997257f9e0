//! File System Types
//!
//! Core types and traits for the virtual namespace.

use std::fmt;
use std::sync::Arc;
use std::time::SystemTime;
use thiserror::Error;

/// Nominal size reported for every directory.
pub const DIRECTORY_SIZE: u64 = 4096;

/// Owner and group of nodes seeded by the system.
pub const SYSTEM_OWNER: &str = "root";
pub const SYSTEM_GROUP: &str = "root";

/// Owner and group of nodes created from the shell.
pub const USER_OWNER: &str = "guest";
pub const USER_GROUP: &str = "users";

pub const DIRECTORY_PERMISSIONS: &str = "drwxr-xr-x";
pub const FILE_PERMISSIONS: &str = "-rw-r--r--";
pub const DEVICE_PERMISSIONS: &str = "crw-rw-rw-";

/// Namespace errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VfsError {
    #[error("No such file or directory: {path}")]
    NotFound { path: String },

    #[error("Not a directory: {path}")]
    NotADirectory { path: String },

    #[error("Is a directory: {path}")]
    IsADirectory { path: String },

    #[error("Directory not empty: {path}")]
    NotEmpty { path: String },

    #[error("Directory already exists: {name}")]
    AlreadyExists { name: String },

    #[error("Cannot remove current or root directory: {path}")]
    Protected { path: String },

    #[error("Path not found: {path}")]
    PathNotFound { path: String },

    #[error("Invalid path: {path}")]
    InvalidPath { path: String },
}

/// Supplies the content of a device file on every read.
pub type ReadHook = Arc<dyn Fn() -> String + Send + Sync>;

/// Receives the text written to a device file in place of stored content.
pub type WriteHook = Arc<dyn Fn(&str) + Send + Sync>;

/// Node type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Directory,
    File,
}

/// Metadata snapshot of a single node, as returned by listings and stat.
#[derive(Clone, PartialEq, Eq)]
pub struct NodeInfo {
    pub name: String,
    pub kind: NodeKind,
    pub owner: String,
    pub group: String,
    pub permissions: String,
    pub size: u64,
    pub modified: SystemTime,
    pub is_device: bool,
}

impl NodeInfo {
    pub fn is_directory(&self) -> bool {
        self.kind == NodeKind::Directory
    }

    pub fn is_file(&self) -> bool {
        self.kind == NodeKind::File
    }
}

impl fmt::Debug for NodeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeInfo")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("owner", &self.owner)
            .field("size", &self.size)
            .finish()
    }
}

/// Sorts a listing by name, ignoring case, the order used by every lister.
pub fn sort_by_name(nodes: &mut [NodeInfo]) {
    nodes.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name))
    });
}

/// Single-session namespace interface.
///
/// Every path accepts either an absolute path or one relative to the
/// current directory; `.` and `..` are resolved lexically, and `..` at the
/// root stays at the root.
pub trait FileSystem: Send + Sync {
    /// Render the current directory as `/a/b` (`/` for the root)
    fn current_path(&self) -> String;

    /// Immediate children of a directory (the current one when `path` is None), unordered
    fn list_children(&self, path: Option<&str>) -> Result<Vec<NodeInfo>, VfsError>;

    /// Move the current directory
    fn change_directory(&mut self, path: &str) -> Result<(), VfsError>;

    /// Read a file, consulting its read hook first
    fn read_file(&self, path: &str) -> Result<String, VfsError>;

    /// Replace a file's content, creating the file if it doesn't exist
    fn write_file(&mut self, path: &str, content: &str) -> Result<(), VfsError>;

    /// Append to a file, creating it if it doesn't exist
    fn append_file(&mut self, path: &str, content: &str) -> Result<(), VfsError>;

    /// Create a single directory; the parent chain must already exist
    fn make_directory(&mut self, path: &str) -> Result<(), VfsError>;

    /// Create a directory together with any missing parents
    fn create_dir_all(&mut self, path: &str) -> Result<(), VfsError>;

    /// Remove an empty directory
    fn remove_directory(&mut self, path: &str) -> Result<(), VfsError>;

    /// Install a device file whose reads and writes go through hooks
    fn register_device(
        &mut self,
        path: &str,
        read: Option<ReadHook>,
        write: Option<WriteHook>,
    ) -> Result<(), VfsError>;

    /// Metadata for a single node
    fn stat(&self, path: &str) -> Result<NodeInfo, VfsError>;

    /// Check if a path resolves
    fn exists(&self, path: &str) -> bool {
        self.stat(path).is_ok()
    }
}
