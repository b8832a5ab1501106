//! An in-memory simulation of a hierarchical file system.
//! Models a tree of directories and empty placeholder files with a current
//! directory cursor, shell-style navigation and mutation commands, and full
//! absolute/relative path resolution. Ideal for teaching, testing command
//! interpreters, and experimenting with path semantics.
//!
//! ### Overview
//!
//! `treefs` keeps an entire directory tree in process memory; nothing ever
//! touches the host disk. The [`TreeFs`] engine owns the tree and exposes the
//! classic command set: `cd`, `pwd`, `ls`, `mkdir`, `touch` and `rm`, all
//! driven by one path-resolution primitive that understands absolute and
//! relative paths, `.` and `..` segments, and repeated separators.
//!
//! **Key ideas**:
//! - **Isolation**: The whole tree is ephemeral and rebuilt on every start;
//!   there is no persistence and no host file system access.
//! - **One resolution primitive**: Every path-taking command walks the same
//!   segment-by-segment resolver against the current-directory cursor.
//! - **Recoverable errors**: Every failure is an ordinary error value with a
//!   human-readable message; no command can take the process down.
//! - **Clarity**: Files are empty placeholders, directories own their
//!   children exclusively, and parent links are plain non-owning handles.
//!
//! ### Example
//!
//! ```
//! use treefs::TreeFs;
//!
//! let mut fs = TreeFs::new();
//! fs.mkdir("docs")?;
//! fs.touch("docs/note.txt")?;
//! fs.cd("docs")?;
//! assert_eq!(fs.pwd(), "/docs");
//! assert_eq!(fs.ls(), vec!["note.txt"]);
//! # Ok::<(), anyhow::Error>(())
//! ```

mod core;
mod vfs;

pub use core::Result;
pub use vfs::{Entry, EntryKind, NodeId, TreeFs};
