//! Positions inside a container.

use crate::arena::Handle;
use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_CONTAINER_ID: AtomicUsize = AtomicUsize::new(0);

pub(crate) fn next_container_id() -> usize {
    NEXT_CONTAINER_ID.fetch_add(1, Ordering::Relaxed)
}

/// A position in a container: either an element or the end sentinel one past the last element.
///
/// A cursor does not borrow its container. A cursor to an element refers to the element itself,
/// not to the container holding it: it stays valid until the element is erased, including
/// across `merge`, `splice` and `swap`, which move elements between containers. Using it after
/// the erasure yields `Error::InvalidCursor`. An end cursor belongs to the container that
/// produced it.
///
/// # Examples
///
/// ```
/// use ordered_collections::red_black_tree::RedBlackSet;
///
/// let mut set = RedBlackSet::new();
/// let (cursor, _) = set.insert(2);
/// set.insert(1);
/// set.insert(3);
///
/// assert_eq!(set.get(cursor), Ok(&2));
/// assert_eq!(set.successor(cursor).and_then(|next| set.get(next)), Ok(&3));
/// assert!(set.end().is_end());
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Cursor {
    position: Position,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum Position {
    Node(Handle),
    End(usize),
}

impl Cursor {
    pub(crate) fn new(container: usize, node: Option<Handle>) -> Self {
        let position = match node {
            Some(node) => Position::Node(node),
            None => Position::End(container),
        };
        Cursor { position }
    }

    pub(crate) fn position(&self) -> Position {
        self.position
    }

    /// Returns `true` if this is the end cursor.
    pub fn is_end(&self) -> bool {
        match self.position {
            Position::Node(_) => false,
            Position::End(_) => true,
        }
    }
}
