//! In-Memory File System Implementation
//!
//! Nodes live in an arena and refer to each other by [`NodeId`]. A directory
//! owns the ids of its children; the parent link of every node is just
//! another id, so the tree needs no reference counting.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::SystemTime;

use tracing::debug;

use super::types::*;

/// Index of a node in the arena. Slots freed by `remove_directory` are reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct NodeId(usize);

struct Device {
    read: Option<ReadHook>,
    write: Option<WriteHook>,
}

enum NodeBody {
    Directory { children: HashMap<String, NodeId> },
    File { content: String, device: Option<Device> },
}

struct Node {
    name: String,
    owner: String,
    group: String,
    permissions: String,
    modified: SystemTime,
    parent: Option<NodeId>,
    body: NodeBody,
}

impl Node {
    fn directory(name: &str, parent: Option<NodeId>, owner: &str, group: &str) -> Self {
        Self {
            name: name.to_string(),
            owner: owner.to_string(),
            group: group.to_string(),
            permissions: DIRECTORY_PERMISSIONS.to_string(),
            modified: SystemTime::now(),
            parent,
            body: NodeBody::Directory { children: HashMap::new() },
        }
    }

    fn file(name: &str, parent: NodeId, content: String, owner: &str, group: &str) -> Self {
        Self {
            name: name.to_string(),
            owner: owner.to_string(),
            group: group.to_string(),
            permissions: FILE_PERMISSIONS.to_string(),
            modified: SystemTime::now(),
            parent: Some(parent),
            body: NodeBody::File { content, device: None },
        }
    }

    fn is_directory(&self) -> bool {
        matches!(self.body, NodeBody::Directory { .. })
    }

    fn info(&self) -> NodeInfo {
        let (kind, size, is_device) = match &self.body {
            NodeBody::Directory { .. } => (NodeKind::Directory, DIRECTORY_SIZE, false),
            NodeBody::File { device: Some(_), .. } => (NodeKind::File, 0, true),
            NodeBody::File { content, device: None } => {
                (NodeKind::File, content.len() as u64, false)
            }
        };
        NodeInfo {
            name: self.name.clone(),
            kind,
            owner: self.owner.clone(),
            group: self.group.clone(),
            permissions: self.permissions.clone(),
            size,
            modified: self.modified,
            is_device,
        }
    }
}

/// In-memory virtual namespace with a current-directory cursor.
pub struct InMemoryFs {
    nodes: Vec<Option<Node>>,
    free: Vec<NodeId>,
    root: NodeId,
    cwd: NodeId,
    /// Derived from `cwd` by walking parent links; recomputed on every directory change.
    cwd_segments: Vec<String>,
}

impl InMemoryFs {
    /// Create a namespace holding only the root, with the cursor at the root.
    pub fn new() -> Self {
        let root = Node::directory("", None, SYSTEM_OWNER, SYSTEM_GROUP);
        Self {
            nodes: vec![Some(root)],
            free: Vec::new(),
            root: NodeId(0),
            cwd: NodeId(0),
            cwd_segments: Vec::new(),
        }
    }

    /// Create the stock layout: `/users/guest` home, `/system`, and a `/dev/null` sink.
    pub fn with_default_layout() -> Self {
        let mut fs = Self::new();
        let root = fs.root;
        let users = fs.insert_dir(root, "users", SYSTEM_OWNER, SYSTEM_GROUP);
        let guest = fs.insert_dir(users, "guest", USER_OWNER, USER_GROUP);
        let system = fs.insert_dir(root, "system", SYSTEM_OWNER, SYSTEM_GROUP);
        let dev = fs.insert_dir(root, "dev", SYSTEM_OWNER, SYSTEM_GROUP);

        fs.insert_file(system, "readme", "Welcome to WebTerm OS v1.0", SYSTEM_OWNER, SYSTEM_GROUP);
        fs.insert_file(guest, "notes.txt", "Remember to buy milk.", USER_OWNER, USER_GROUP);
        let null = fs.insert_file(dev, "null", "", SYSTEM_OWNER, SYSTEM_GROUP);
        fs.make_device(null, Some(Arc::new(String::new)), Some(Arc::new(|_: &str| {})));

        fs.set_cwd(guest);
        fs
    }

    fn node(&self, id: NodeId) -> &Node {
        self.nodes[id.0].as_ref().expect("node id refers to a removed node")
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.nodes[id.0].as_mut().expect("node id refers to a removed node")
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        if let Some(id) = self.free.pop() {
            self.nodes[id.0] = Some(node);
            return id;
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(Some(node));
        id
    }

    fn child(&self, dir: NodeId, name: &str) -> Option<NodeId> {
        match &self.node(dir).body {
            NodeBody::Directory { children } => children.get(name).copied(),
            NodeBody::File { .. } => None,
        }
    }

    fn attach(&mut self, parent: NodeId, name: &str, child: NodeId) {
        let dir = self.node_mut(parent);
        if let NodeBody::Directory { children } = &mut dir.body {
            children.insert(name.to_string(), child);
        }
        dir.modified = SystemTime::now();
    }

    fn insert_dir(&mut self, parent: NodeId, name: &str, owner: &str, group: &str) -> NodeId {
        if let Some(existing) = self.child(parent, name) {
            return existing;
        }
        let id = self.alloc(Node::directory(name, Some(parent), owner, group));
        self.attach(parent, name, id);
        id
    }

    fn insert_file(&mut self, parent: NodeId, name: &str, content: &str, owner: &str, group: &str) -> NodeId {
        let id = self.alloc(Node::file(name, parent, content.to_string(), owner, group));
        self.attach(parent, name, id);
        id
    }

    fn make_device(&mut self, id: NodeId, read: Option<ReadHook>, write: Option<WriteHook>) {
        let node = self.node_mut(id);
        node.permissions = DEVICE_PERMISSIONS.to_string();
        node.modified = SystemTime::now();
        node.body = NodeBody::File {
            content: String::new(),
            device: Some(Device { read, write }),
        };
    }

    fn set_cwd(&mut self, id: NodeId) {
        self.cwd = id;
        self.cwd_segments = self.segments_of(id);
    }

    /// Names from the root down to `id`, found by walking parent links.
    fn segments_of(&self, id: NodeId) -> Vec<String> {
        let mut segments = Vec::new();
        let mut current = id;
        while let Some(parent) = self.node(current).parent {
            segments.push(self.node(current).name.clone());
            current = parent;
        }
        segments.reverse();
        segments
    }

    /// Lexically resolve `path` against the cursor into absolute segments.
    fn absolute_segments(&self, path: &str) -> Vec<String> {
        let mut segments = if path.starts_with('/') {
            Vec::new()
        } else {
            self.cwd_segments.clone()
        };
        for part in path.split('/').filter(|p| !p.is_empty()) {
            match part {
                "." => {}
                ".." => {
                    segments.pop();
                }
                _ => segments.push(part.to_string()),
            }
        }
        segments
    }

    fn walk(&self, segments: &[String]) -> Option<NodeId> {
        let mut current = self.root;
        for segment in segments {
            current = self.child(current, segment)?;
        }
        Some(current)
    }

    fn resolve(&self, path: &str) -> Result<NodeId, VfsError> {
        self.walk(&self.absolute_segments(path))
            .ok_or_else(|| VfsError::NotFound { path: path.to_string() })
    }

    /// Parent directory id and leaf name for a path that may not exist yet.
    fn resolve_parent(&self, path: &str) -> Result<(NodeId, String), VfsError> {
        let mut segments = self.absolute_segments(path);
        let leaf = segments
            .pop()
            .ok_or_else(|| VfsError::InvalidPath { path: path.to_string() })?;
        let parent = self
            .walk(&segments)
            .ok_or_else(|| VfsError::NotFound { path: path.to_string() })?;
        // A File on the parent chain is a lookup miss, same as in `resolve`.
        if !self.node(parent).is_directory() {
            return Err(VfsError::NotFound { path: path.to_string() });
        }
        Ok((parent, leaf))
    }

    fn put(&mut self, path: &str, content: &str, append: bool) -> Result<(), VfsError> {
        if let Ok(id) = self.resolve(path) {
            let node = self.node_mut(id);
            return match &mut node.body {
                NodeBody::Directory { .. } => Err(VfsError::IsADirectory { path: path.to_string() }),
                NodeBody::File { device: Some(Device { write: Some(hook), .. }), .. } => {
                    hook(content);
                    Ok(())
                }
                NodeBody::File { content: stored, .. } => {
                    if append {
                        stored.push_str(content);
                    } else {
                        *stored = content.to_string();
                    }
                    node.modified = SystemTime::now();
                    debug!(path, bytes = content.len(), append, "updated file");
                    Ok(())
                }
            };
        }

        let (parent, leaf) = self.resolve_parent(path)?;
        self.insert_file(parent, &leaf, content, USER_OWNER, USER_GROUP);
        debug!(path, bytes = content.len(), "created file");
        Ok(())
    }
}

impl Default for InMemoryFs {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for InMemoryFs {
    fn current_path(&self) -> String {
        if self.cwd_segments.is_empty() {
            "/".to_string()
        } else {
            format!("/{}", self.cwd_segments.join("/"))
        }
    }

    fn list_children(&self, path: Option<&str>) -> Result<Vec<NodeInfo>, VfsError> {
        let id = match path {
            Some(p) => self.resolve(p)?,
            None => self.cwd,
        };
        match &self.node(id).body {
            NodeBody::Directory { children } => {
                Ok(children.values().map(|&child| self.node(child).info()).collect())
            }
            NodeBody::File { .. } => Err(VfsError::NotADirectory {
                path: path.map(str::to_string).unwrap_or_else(|| self.current_path()),
            }),
        }
    }

    fn change_directory(&mut self, path: &str) -> Result<(), VfsError> {
        let id = self.resolve(path)?;
        if !self.node(id).is_directory() {
            return Err(VfsError::NotADirectory { path: path.to_string() });
        }
        self.set_cwd(id);
        debug!(cwd = %self.current_path(), "changed directory");
        Ok(())
    }

    fn read_file(&self, path: &str) -> Result<String, VfsError> {
        let id = self.resolve(path)?;
        match &self.node(id).body {
            NodeBody::Directory { .. } => Err(VfsError::IsADirectory { path: path.to_string() }),
            NodeBody::File { device: Some(Device { read: Some(hook), .. }), .. } => Ok(hook()),
            NodeBody::File { content, .. } => Ok(content.clone()),
        }
    }

    fn write_file(&mut self, path: &str, content: &str) -> Result<(), VfsError> {
        self.put(path, content, false)
    }

    fn append_file(&mut self, path: &str, content: &str) -> Result<(), VfsError> {
        self.put(path, content, true)
    }

    fn make_directory(&mut self, path: &str) -> Result<(), VfsError> {
        let mut segments = self.absolute_segments(path);
        let name = segments
            .pop()
            .ok_or_else(|| VfsError::InvalidPath { path: path.to_string() })?;
        let parent = match self.walk(&segments) {
            Some(id) if self.node(id).is_directory() => id,
            _ => {
                return Err(VfsError::PathNotFound {
                    path: format!("/{}", segments.join("/")),
                })
            }
        };
        if self.child(parent, &name).is_some() {
            return Err(VfsError::AlreadyExists { name });
        }
        self.insert_dir(parent, &name, USER_OWNER, USER_GROUP);
        debug!(path, "created directory");
        Ok(())
    }

    fn create_dir_all(&mut self, path: &str) -> Result<(), VfsError> {
        let mut current = self.root;
        for segment in self.absolute_segments(path) {
            current = match self.child(current, &segment) {
                Some(id) if self.node(id).is_directory() => id,
                Some(_) => return Err(VfsError::NotADirectory { path: path.to_string() }),
                None => self.insert_dir(current, &segment, USER_OWNER, USER_GROUP),
            };
        }
        Ok(())
    }

    fn remove_directory(&mut self, path: &str) -> Result<(), VfsError> {
        let id = self.resolve(path)?;
        let node = self.node(id);
        let NodeBody::Directory { children } = &node.body else {
            return Err(VfsError::NotADirectory { path: path.to_string() });
        };
        if id == self.cwd || id == self.root {
            return Err(VfsError::Protected { path: path.to_string() });
        }
        if !children.is_empty() {
            return Err(VfsError::NotEmpty { path: path.to_string() });
        }

        let name = node.name.clone();
        if let Some(parent) = node.parent {
            let dir = self.node_mut(parent);
            if let NodeBody::Directory { children } = &mut dir.body {
                children.remove(&name);
            }
            dir.modified = SystemTime::now();
        }
        self.nodes[id.0] = None;
        self.free.push(id);
        debug!(path, "removed directory");
        Ok(())
    }

    fn register_device(
        &mut self,
        path: &str,
        read: Option<ReadHook>,
        write: Option<WriteHook>,
    ) -> Result<(), VfsError> {
        let mut segments = self.absolute_segments(path);
        let name = segments
            .pop()
            .ok_or_else(|| VfsError::InvalidPath { path: path.to_string() })?;

        let mut parent = self.root;
        for segment in &segments {
            parent = match self.child(parent, segment) {
                Some(id) if self.node(id).is_directory() => id,
                Some(_) => return Err(VfsError::NotADirectory { path: path.to_string() }),
                None => self.insert_dir(parent, segment, SYSTEM_OWNER, SYSTEM_GROUP),
            };
        }

        let id = match self.child(parent, &name) {
            Some(id) if self.node(id).is_directory() => {
                return Err(VfsError::IsADirectory { path: path.to_string() })
            }
            Some(id) => id,
            None => self.insert_file(parent, &name, "", SYSTEM_OWNER, SYSTEM_GROUP),
        };
        self.make_device(id, read, write);
        debug!(path, "registered device");
        Ok(())
    }

    fn stat(&self, path: &str) -> Result<NodeInfo, VfsError> {
        let id = self.resolve(path)?;
        Ok(self.node(id).info())
    }
}
