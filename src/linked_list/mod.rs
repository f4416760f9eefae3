//! Doubly linked list whose nodes live in an arena and are addressed by cursors.

mod list;
mod node;

pub use self::list::{LinkedList, LinkedListIntoIter, LinkedListIter};
