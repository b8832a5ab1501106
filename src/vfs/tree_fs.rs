//! The file system engine: path resolution and the command operations.

use anyhow::anyhow;
use tracing::debug;

use crate::core::{self, Result, SEPARATOR};
use crate::vfs::node::{Entry, NodeArena, NodeId};

/// An in-memory file system engine that owns a tree of directories and empty
/// placeholder files and drives it with shell-style commands.
///
/// ### Internal state
///
/// * `arena` — Owns every entry of the tree; entries reference each other
///   through [`NodeId`] handles only.
/// * `root` — The parentless root directory, created once at construction and
///   alive for as long as the engine.
/// * `current` — The current-directory cursor against which relative paths
///   are resolved. Always a valid handle; changes only via [`cd`](Self::cd).
///
/// ### Invariants
///
/// 1. **Root existence**: the root is always present, is a directory, and is
///    the unique entry without a parent.
/// 2. **Unique names**: within any directory no two children share a name;
///    files and directories share one namespace.
/// 3. **Link consistency**: every non-root entry's parent back-reference
///    matches the parent's child mapping.
///
/// ### Lifecycle
///
/// Entries are created by [`mkdir`](Self::mkdir) / [`touch`](Self::touch) and
/// removed only by [`rm`](Self::rm), which detaches exactly one empty entry
/// from its parent. The arena reclaims all storage when the engine drops.
///
/// ### Thread safety
///
/// Not thread-safe; every operation is a synchronous, CPU-bound tree walk
/// that assumes exclusive access. Give each session its own engine, or wrap
/// one in a lock at the application level.
///
/// ### Example
///
/// ```
/// use treefs::TreeFs;
///
/// let mut fs = TreeFs::new();
/// fs.mkdir("home")?;
/// fs.mkdir("home/user")?;
/// fs.cd("home/user")?;
/// assert_eq!(fs.pwd(), "/home/user");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub struct TreeFs {
    arena: NodeArena,
    root: NodeId,
    current: NodeId,
}

impl TreeFs {
    /// Creates an engine holding an empty tree, with the cursor at the root.
    pub fn new() -> Self {
        let mut arena = NodeArena::default();
        let root = arena.alloc_root();
        TreeFs {
            arena,
            root,
            current: root,
        }
    }

    /// The entry the current-directory cursor points at.
    pub fn current(&self) -> &Entry {
        self.arena.entry(self.current)
    }

    /// The root directory entry.
    pub fn root(&self) -> &Entry {
        self.arena.entry(self.root)
    }

    /// Resolves a handle obtained from [`Entry::parent`] or
    /// [`Entry::children`].
    pub fn entry(&self, id: NodeId) -> &Entry {
        self.arena.entry(id)
    }

    /// Changes the current directory.
    ///
    /// The literal argument `".."` moves to the immediate parent and fails at
    /// the root. Any other argument is resolved as a path, where a `..`
    /// segment met at the root stays at the root instead of failing.
    /// On failure the cursor is unchanged.
    pub fn cd(&mut self, path: &str) -> Result<()> {
        if path.is_empty() {
            return Err(anyhow!("invalid path: empty"));
        }

        if path == ".." {
            return match self.current().parent() {
                Some(parent) => {
                    self.current = parent;
                    Ok(())
                }
                None => Err(anyhow!("already at the root directory")),
            };
        }

        match self.resolve_dir(path) {
            Some(target) => {
                self.current = target;
                debug!(path, "changed directory");
                Ok(())
            }
            None => Err(anyhow!("directory '{path}' not found")),
        }
    }

    /// Creates an empty directory at `path`.
    ///
    /// The parent prefix (everything before the last separator) must resolve
    /// to an existing directory and must not already hold an entry with the
    /// leaf name.
    pub fn mkdir(&mut self, path: &str) -> Result<()> {
        if path.is_empty() {
            return Err(anyhow!("invalid path: empty"));
        }
        let (parent, leaf) = self.locate_parent(path)?;
        self.ensure_vacant(parent, leaf)?;

        let dir = self.arena.alloc_dir(leaf);
        self.arena.add_child(parent, dir);
        debug!(path, "created directory");
        Ok(())
    }

    /// Creates an empty placeholder file at `path`. Same control flow and
    /// error handling as [`mkdir`](Self::mkdir).
    pub fn touch(&mut self, path: &str) -> Result<()> {
        if path.is_empty() {
            return Err(anyhow!("invalid path: empty"));
        }
        let (parent, leaf) = self.locate_parent(path)?;
        self.ensure_vacant(parent, leaf)?;

        let file = self.arena.alloc_file(leaf);
        self.arena.add_child(parent, file);
        debug!(path, "created file");
        Ok(())
    }

    /// Removes the file or empty directory at `path`.
    ///
    /// Deletion is never recursive: a directory with at least one child is
    /// refused and nothing changes.
    pub fn rm(&mut self, path: &str) -> Result<()> {
        if path.is_empty() {
            return Err(anyhow!("invalid path: empty"));
        }
        let (parent, leaf) = self.locate_parent(path)?;

        let target = self
            .arena
            .entry(parent)
            .child(leaf)
            .ok_or_else(|| anyhow!("'{path}' not found"))?;
        if self.arena.entry(target).has_children() {
            return Err(anyhow!("directory '{leaf}' is not empty"));
        }

        self.arena.remove_child(parent, leaf);
        debug!(path, "removed entry");
        Ok(())
    }

    /// Child names of the current directory in name order, directories
    /// suffixed with the separator. The empty listing is not an error.
    pub fn ls(&self) -> Vec<String> {
        self.current()
            .children()
            .map(|(name, id)| {
                if self.arena.entry(id).is_dir() {
                    format!("{name}{SEPARATOR}")
                } else {
                    name.to_string()
                }
            })
            .collect()
    }

    /// The full path of the current directory.
    pub fn pwd(&self) -> String {
        self.arena.full_path(self.current)
    }

    /// Checks whether `path` names any entry, directory or file.
    pub fn exists(&self, path: &str) -> bool {
        self.find(path).is_some()
    }

    /// Checks whether `path` names a directory. An error is returned if the
    /// path does not exist.
    pub fn is_dir(&self, path: &str) -> Result<bool> {
        match self.find(path) {
            Some(id) => Ok(self.arena.entry(id).is_dir()),
            None => Err(anyhow!("'{path}' does not exist")),
        }
    }

    /// Checks whether `path` names a file. An error is returned if the path
    /// does not exist.
    pub fn is_file(&self, path: &str) -> Result<bool> {
        match self.find(path) {
            Some(id) => Ok(self.arena.entry(id).is_file()),
            None => Err(anyhow!("'{path}' does not exist")),
        }
    }

    /// The central resolution primitive: walks `path` segment by segment and
    /// returns the directory it names, or `None` as soon as a segment is
    /// missing or names a file. There is no partial result.
    ///
    /// A leading separator starts the walk at the root, anything else at the
    /// current directory. Empty segments are skipped, `.` is a no-op, and a
    /// `..` met while the walk is already at the root stays at the root.
    fn resolve_dir(&self, path: &str) -> Option<NodeId> {
        let (start, rest) = match path.strip_prefix(SEPARATOR) {
            Some(rest) => (self.root, rest),
            None => (self.current, path),
        };

        let mut cursor = start;
        for segment in core::segments(rest) {
            match segment {
                ".." => {
                    if let Some(parent) = self.arena.entry(cursor).parent() {
                        cursor = parent;
                    }
                }
                "." => {}
                name => {
                    let child = self.arena.entry(cursor).child(name)?;
                    if !self.arena.entry(child).is_dir() {
                        return None;
                    }
                    cursor = child;
                }
            }
        }
        Some(cursor)
    }

    /// Resolves `path` to any entry: a directory via [`resolve_dir`], or a
    /// file via a parent-plus-leaf lookup. Returns `None` when the path names
    /// nothing.
    fn find(&self, path: &str) -> Option<NodeId> {
        if let Some(id) = self.resolve_dir(path) {
            return Some(id);
        }
        let (prefix, leaf) = core::split_leaf(path);
        if leaf.is_empty() {
            return None;
        }
        let parent = match prefix {
            None => self.current,
            Some(prefix) => self.resolve_dir(prefix)?,
        };
        self.arena.entry(parent).child(leaf)
    }

    /// Splits `path` into its target parent directory and leaf name. With no
    /// parent prefix the target parent is the current directory.
    fn locate_parent<'a>(&self, path: &'a str) -> Result<(NodeId, &'a str)> {
        let (prefix, leaf) = core::split_leaf(path);
        if leaf.is_empty() {
            return Err(anyhow!("invalid path: '{path}'"));
        }
        let parent = match prefix {
            None => self.current,
            Some(prefix) => self
                .resolve_dir(prefix)
                .ok_or_else(|| anyhow!("parent path for '{path}' does not exist"))?,
        };
        Ok((parent, leaf))
    }

    fn ensure_vacant(&self, parent: NodeId, leaf: &str) -> Result<()> {
        if self.arena.entry(parent).child(leaf).is_some() {
            return Err(anyhow!(
                "a file or directory named '{leaf}' already exists"
            ));
        }
        Ok(())
    }
}

impl Default for TreeFs {
    fn default() -> Self {
        Self::new()
    }
}
