mod node;
mod tree_fs;

pub use node::{Entry, EntryKind, NodeId};
pub use tree_fs::TreeFs;
