//! The tree node model: entries, their kinds, and the arena that owns them.

use std::collections::BTreeMap;

use crate::core::SEPARATOR;

/// Non-owning handle to an [`Entry`] inside a [`NodeArena`].
///
/// Used for parent back-references and for the engine's current-directory
/// cursor, so that upward traversal never competes with the ownership of the
/// child mappings.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct NodeId(usize);

/// Distinguishes the two entry variants. A directory carries its children,
/// keyed by name; files and directories share one namespace per directory.
#[derive(Debug, Clone, PartialEq)]
pub enum EntryKind {
    File,
    Directory { children: BTreeMap<String, NodeId> },
}

/// A named node in the tree: a file or a directory.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    name: String,
    parent: Option<NodeId>,
    kind: EntryKind,
}

impl Entry {
    fn new(name: String, kind: EntryKind) -> Self {
        debug_assert!(!name.is_empty(), "entry name must not be empty");
        Entry {
            name,
            parent: None,
            kind,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &EntryKind {
        &self.kind
    }

    /// The owning directory, or `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn is_dir(&self) -> bool {
        matches!(self.kind, EntryKind::Directory { .. })
    }

    pub fn is_file(&self) -> bool {
        matches!(self.kind, EntryKind::File)
    }

    /// Looks up a direct child by exact name. `None` for files and for
    /// absent names.
    pub fn child(&self, name: &str) -> Option<NodeId> {
        match &self.kind {
            EntryKind::Directory { children } => children.get(name).copied(),
            EntryKind::File => None,
        }
    }

    /// Direct children in name order. Empty for files.
    pub fn children(&self) -> impl Iterator<Item = (&str, NodeId)> {
        let children = match &self.kind {
            EntryKind::Directory { children } => Some(children),
            EntryKind::File => None,
        };
        children
            .into_iter()
            .flatten()
            .map(|(name, id)| (name.as_str(), *id))
    }

    pub fn has_children(&self) -> bool {
        match &self.kind {
            EntryKind::Directory { children } => !children.is_empty(),
            EntryKind::File => false,
        }
    }
}

/// Owns every entry of one tree for the lifetime of the engine.
///
/// Detaching an entry (see [`remove_child`](NodeArena::remove_child)) only
/// severs it from its parent's mapping; the slot itself is reclaimed when the
/// arena drops. Handles therefore never dangle.
#[derive(Debug, Default)]
pub(crate) struct NodeArena {
    nodes: Vec<Entry>,
}

impl NodeArena {
    /// Allocates the parentless root directory, named after the separator.
    pub fn alloc_root(&mut self) -> NodeId {
        self.alloc(Entry::new(
            SEPARATOR.to_string(),
            EntryKind::Directory {
                children: BTreeMap::new(),
            },
        ))
    }

    pub fn alloc_dir(&mut self, name: &str) -> NodeId {
        self.alloc(Entry::new(
            name.to_string(),
            EntryKind::Directory {
                children: BTreeMap::new(),
            },
        ))
    }

    pub fn alloc_file(&mut self, name: &str) -> NodeId {
        self.alloc(Entry::new(name.to_string(), EntryKind::File))
    }

    fn alloc(&mut self, entry: Entry) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(entry);
        id
    }

    pub fn entry(&self, id: NodeId) -> &Entry {
        &self.nodes[id.0]
    }

    /// Inserts `child` into `parent`'s mapping under the child's own name and
    /// points the child's back-reference at `parent`.
    ///
    /// Performs no uniqueness check: a colliding name silently overwrites the
    /// mapping slot, so callers must check first.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[child.0].parent = Some(parent);
        let name = self.nodes[child.0].name.clone();
        self.children_mut(parent).insert(name, child);
    }

    /// Removes the mapping entry if present; returns whether a removal
    /// occurred. The detached entry keeps its back-reference.
    pub fn remove_child(&mut self, parent: NodeId, name: &str) -> bool {
        self.children_mut(parent).remove(name).is_some()
    }

    /// The separator-joined path from the root to `id`, computed on demand by
    /// walking parent links. The root is the separator alone and contributes
    /// no extra separator to its descendants.
    pub fn full_path(&self, id: NodeId) -> String {
        let mut names = Vec::new();
        let mut cursor = id;
        while let Some(parent) = self.entry(cursor).parent() {
            names.push(self.entry(cursor).name());
            cursor = parent;
        }
        if names.is_empty() {
            return SEPARATOR.to_string();
        }
        names.reverse();
        let mut path = String::new();
        for name in names {
            path.push(SEPARATOR);
            path.push_str(name);
        }
        path
    }

    fn children_mut(&mut self, id: NodeId) -> &mut BTreeMap<String, NodeId> {
        match &mut self.nodes[id.0].kind {
            EntryKind::Directory { children } => children,
            EntryKind::File => unreachable!("files cannot carry children"),
        }
    }
}
