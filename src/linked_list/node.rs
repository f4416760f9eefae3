use crate::arena::Handle;

/// A struct representing a node of a doubly linked list.
#[derive(Clone, Debug)]
pub struct Node<T> {
    pub value: T,
    pub prev: Option<Handle>,
    pub next: Option<Handle>,
}

impl<T> Node<T> {
    pub fn new(value: T, prev: Option<Handle>, next: Option<Handle>) -> Self {
        Node { value, prev, next }
    }
}
