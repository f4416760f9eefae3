use crate::arena::{Handle, TypedArena};
use crate::cursor::{self, Cursor, Position};
use crate::error::{Error, Result};
use crate::red_black_tree::node::{Color, Node};
use compare::Compare;
use log::{debug, trace};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::mem;

enum Slot {
    Occupied(Handle),
    Vacant { parent: Option<Handle>, is_left: bool },
}

/// The red black tree shared by `RedBlackSet` and `RedBlackMultiSet`.
///
/// The comparator is only consulted while searching, before any link is rewritten, so a
/// panicking comparator leaves the tree untouched.
pub struct Tree<T, C> {
    id: usize,
    nodes: TypedArena<Node<T>>,
    root: Option<Handle>,
    cmp: C,
}

impl<T, C> Tree<T, C> {
    pub fn new(cmp: C) -> Self {
        Tree {
            id: cursor::next_container_id(),
            nodes: TypedArena::new(),
            root: None,
            cmp,
        }
    }

    pub fn cmp(&self) -> &C {
        &self.cmp
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn max_size() -> usize {
        isize::max_value() as usize / mem::size_of::<Node<T>>()
    }

    pub fn clear(&mut self) {
        trace!("clearing tree {} holding {} nodes", self.id, self.len());
        self.nodes.clear();
        self.root = None;
    }

    pub fn key(&self, node: Handle) -> &T {
        &self.nodes[node].key
    }

    pub fn cursor(&self, node: Option<Handle>) -> Cursor {
        Cursor::new(self.id, node)
    }

    /// Maps a cursor to the node it refers to, or `None` for the end cursor.
    pub fn resolve(&self, cursor: Cursor) -> Result<Option<Handle>> {
        match cursor.position() {
            Position::Node(node) if self.nodes.contains(node) => Ok(Some(node)),
            Position::End(id) if id == self.id => Ok(None),
            _ => Err(Error::InvalidCursor),
        }
    }

    /// Returns the number of nodes in `[first, last)`, or `None` if `last` does not follow
    /// `first`.
    pub fn distance(&self, first: Option<Handle>, last: Option<Handle>) -> Option<usize> {
        let mut len = 0;
        let mut curr = first;
        while curr != last {
            curr = self.successor(curr?);
            len += 1;
        }
        Some(len)
    }

    /// Exchanges the nodes and comparators of two trees. End cursors stay with their tree.
    pub fn swap(&mut self, other: &mut Tree<T, C>) {
        mem::swap(&mut self.nodes, &mut other.nodes);
        mem::swap(&mut self.root, &mut other.root);
        mem::swap(&mut self.cmp, &mut other.cmp);
    }

    pub fn get(&self, cursor: Cursor) -> Result<&T> {
        self.resolve(cursor)?
            .map(|node| self.key(node))
            .ok_or(Error::EndOfContainer)
    }

    pub fn successor_cursor(&self, cursor: Cursor) -> Result<Cursor> {
        match self.resolve(cursor)? {
            None => Err(Error::EndOfContainer),
            Some(node) => Ok(self.cursor(self.successor(node))),
        }
    }

    pub fn predecessor_cursor(&self, cursor: Cursor) -> Result<Cursor> {
        let prev = match self.resolve(cursor)? {
            None => self.max(),
            Some(node) => self.predecessor(node),
        };
        prev.map(|node| self.cursor(Some(node)))
            .ok_or(Error::BeginningOfContainer)
    }

    pub fn erase(&mut self, cursor: Cursor) -> Result<T> {
        match self.resolve(cursor) {
            Ok(Some(node)) => Ok(self.remove(node)),
            Ok(None) => {
                debug!("rejected erase of the end cursor of tree {}", self.id);
                Err(Error::EndOfContainer)
            },
            Err(err) => {
                debug!("rejected erase of a foreign or stale cursor in tree {}", self.id);
                Err(err)
            },
        }
    }

    pub fn min(&self) -> Option<Handle> {
        self.root.map(|node| self.leftmost(node))
    }

    pub fn max(&self) -> Option<Handle> {
        self.root.map(|node| self.rightmost(node))
    }

    fn leftmost(&self, mut node: Handle) -> Handle {
        while let Some(left) = self.nodes[node].left {
            node = left;
        }
        node
    }

    fn rightmost(&self, mut node: Handle) -> Handle {
        while let Some(right) = self.nodes[node].right {
            node = right;
        }
        node
    }

    pub fn successor(&self, node: Handle) -> Option<Handle> {
        if let Some(right) = self.nodes[node].right {
            return Some(self.leftmost(right));
        }
        let mut curr = node;
        let mut parent = self.nodes[curr].parent;
        while let Some(parent_node) = parent {
            if self.nodes[parent_node].right != Some(curr) {
                break;
            }
            curr = parent_node;
            parent = self.nodes[curr].parent;
        }
        parent
    }

    pub fn predecessor(&self, node: Handle) -> Option<Handle> {
        if let Some(left) = self.nodes[node].left {
            return Some(self.rightmost(left));
        }
        let mut curr = node;
        let mut parent = self.nodes[curr].parent;
        while let Some(parent_node) = parent {
            if self.nodes[parent_node].left != Some(curr) {
                break;
            }
            curr = parent_node;
            parent = self.nodes[curr].parent;
        }
        parent
    }

    fn is_red(&self, node: Option<Handle>) -> bool {
        match node {
            None => false,
            Some(node) => self.nodes[node].color == Color::Red,
        }
    }

    fn set_color(&mut self, node: Option<Handle>, color: Color) {
        if let Some(node) = node {
            self.nodes[node].color = color;
        }
    }

    fn replace_child(&mut self, parent: Option<Handle>, old: Handle, new: Option<Handle>) {
        match parent {
            None => self.root = new,
            Some(parent) => {
                let parent_node = &mut self.nodes[parent];
                if parent_node.left == Some(old) {
                    parent_node.left = new;
                } else {
                    parent_node.right = new;
                }
            },
        }
    }

    // puts the subtree rooted at `new` where the subtree rooted at `old` was
    fn transplant(&mut self, old: Handle, new: Option<Handle>) {
        let parent = self.nodes[old].parent;
        self.replace_child(parent, old, new);
        if let Some(new) = new {
            self.nodes[new].parent = parent;
        }
    }

    fn rotate_left(&mut self, node: Handle) {
        let child = self.nodes[node]
            .right
            .expect("Expected right child node to be `Some`.");
        let grandchild = self.nodes[child].left;
        self.nodes[node].right = grandchild;
        if let Some(grandchild) = grandchild {
            self.nodes[grandchild].parent = Some(node);
        }
        self.transplant(node, Some(child));
        self.nodes[child].left = Some(node);
        self.nodes[node].parent = Some(child);
    }

    fn rotate_right(&mut self, node: Handle) {
        let child = self.nodes[node]
            .left
            .expect("Expected left child node to be `Some`.");
        let grandchild = self.nodes[child].right;
        self.nodes[node].left = grandchild;
        if let Some(grandchild) = grandchild {
            self.nodes[grandchild].parent = Some(node);
        }
        self.transplant(node, Some(child));
        self.nodes[child].right = Some(node);
        self.nodes[node].parent = Some(child);
    }

    fn insert_fixup(&mut self, mut node: Handle) {
        while let Some(mut parent) = self.nodes[node].parent {
            if self.nodes[parent].color == Color::Black {
                break;
            }
            // a red node is never the root
            let grandparent = self.nodes[parent]
                .parent
                .expect("Expected red node to have a parent.");

            if self.nodes[grandparent].left == Some(parent) {
                let uncle = self.nodes[grandparent].right;
                if self.is_red(uncle) {
                    self.set_color(Some(parent), Color::Black);
                    self.set_color(uncle, Color::Black);
                    self.set_color(Some(grandparent), Color::Red);
                    node = grandparent;
                    continue;
                }
                if self.nodes[parent].right == Some(node) {
                    self.rotate_left(parent);
                    mem::swap(&mut node, &mut parent);
                }
                self.nodes[parent].color = Color::Black;
                self.nodes[grandparent].color = Color::Red;
                self.rotate_right(grandparent);
            } else {
                let uncle = self.nodes[grandparent].left;
                if self.is_red(uncle) {
                    self.set_color(Some(parent), Color::Black);
                    self.set_color(uncle, Color::Black);
                    self.set_color(Some(grandparent), Color::Red);
                    node = grandparent;
                    continue;
                }
                if self.nodes[parent].left == Some(node) {
                    self.rotate_right(parent);
                    mem::swap(&mut node, &mut parent);
                }
                self.nodes[parent].color = Color::Black;
                self.nodes[grandparent].color = Color::Red;
                self.rotate_left(grandparent);
            }
            break;
        }
        let root = self.root;
        self.set_color(root, Color::Black);
    }

    /// Unlinks `node`, rebalances, and returns its key. Every other node keeps its handle.
    pub fn remove(&mut self, node: Handle) -> T {
        self.unlink(node);
        self.nodes.free(node).key
    }

    // detaches `node` from the tree while leaving it allocated
    fn unlink(&mut self, node: Handle) {
        let Node {
            color, left, right, ..
        } = self.nodes[node];

        let (removed_color, child, child_parent) = match (left, right) {
            (None, _) => {
                let parent = self.nodes[node].parent;
                self.transplant(node, right);
                (color, right, parent)
            },
            (_, None) => {
                let parent = self.nodes[node].parent;
                self.transplant(node, left);
                (color, left, parent)
            },
            (Some(left), Some(right)) => {
                // splice the in-order successor into the removed node's position
                let successor = self.leftmost(right);
                let successor_color = self.nodes[successor].color;
                let child = self.nodes[successor].right;
                let child_parent = if self.nodes[successor].parent == Some(node) {
                    successor
                } else {
                    let parent = self.nodes[successor]
                        .parent
                        .expect("Expected successor to have a parent.");
                    self.transplant(successor, child);
                    self.nodes[successor].right = Some(right);
                    self.nodes[right].parent = Some(successor);
                    parent
                };
                self.transplant(node, Some(successor));
                self.nodes[successor].left = Some(left);
                self.nodes[left].parent = Some(successor);
                self.nodes[successor].color = color;
                (successor_color, child, Some(child_parent))
            },
        };

        if removed_color == Color::Black {
            self.remove_fixup(child, child_parent);
        }
    }

    // links an allocated, detached node below `parent` and rebalances
    fn attach(&mut self, node: Handle, parent: Option<Handle>, is_left: bool) {
        {
            let entry = &mut self.nodes[node];
            entry.color = Color::Red;
            entry.parent = parent;
            entry.left = None;
            entry.right = None;
        }
        match parent {
            None => self.root = Some(node),
            Some(parent) if is_left => self.nodes[parent].left = Some(node),
            Some(parent) => self.nodes[parent].right = Some(node),
        }
        self.insert_fixup(node);
    }

    // `node` carries an extra black; `parent` is tracked separately since `node` may be `None`
    fn remove_fixup(&mut self, mut node: Option<Handle>, mut parent: Option<Handle>) {
        while node != self.root && !self.is_red(node) {
            let parent_node = match parent {
                Some(parent_node) => parent_node,
                None => break,
            };

            if self.nodes[parent_node].left == node {
                let mut sibling = self.nodes[parent_node]
                    .right
                    .expect("Expected doubly black node to have a sibling.");
                if self.nodes[sibling].color == Color::Red {
                    self.nodes[sibling].color = Color::Black;
                    self.nodes[parent_node].color = Color::Red;
                    self.rotate_left(parent_node);
                    sibling = self.nodes[parent_node]
                        .right
                        .expect("Expected doubly black node to have a sibling.");
                }

                let Node {
                    left: near, right: far, ..
                } = self.nodes[sibling];
                if !self.is_red(near) && !self.is_red(far) {
                    self.nodes[sibling].color = Color::Red;
                    node = Some(parent_node);
                    parent = self.nodes[parent_node].parent;
                    continue;
                }
                if !self.is_red(far) {
                    self.set_color(near, Color::Black);
                    self.nodes[sibling].color = Color::Red;
                    self.rotate_right(sibling);
                    sibling = self.nodes[parent_node]
                        .right
                        .expect("Expected doubly black node to have a sibling.");
                }
                self.nodes[sibling].color = self.nodes[parent_node].color;
                self.nodes[parent_node].color = Color::Black;
                let far = self.nodes[sibling].right;
                self.set_color(far, Color::Black);
                self.rotate_left(parent_node);
            } else {
                let mut sibling = self.nodes[parent_node]
                    .left
                    .expect("Expected doubly black node to have a sibling.");
                if self.nodes[sibling].color == Color::Red {
                    self.nodes[sibling].color = Color::Black;
                    self.nodes[parent_node].color = Color::Red;
                    self.rotate_right(parent_node);
                    sibling = self.nodes[parent_node]
                        .left
                        .expect("Expected doubly black node to have a sibling.");
                }

                let Node {
                    left: far, right: near, ..
                } = self.nodes[sibling];
                if !self.is_red(near) && !self.is_red(far) {
                    self.nodes[sibling].color = Color::Red;
                    node = Some(parent_node);
                    parent = self.nodes[parent_node].parent;
                    continue;
                }
                if !self.is_red(far) {
                    self.set_color(near, Color::Black);
                    self.nodes[sibling].color = Color::Red;
                    self.rotate_left(sibling);
                    sibling = self.nodes[parent_node]
                        .left
                        .expect("Expected doubly black node to have a sibling.");
                }
                self.nodes[sibling].color = self.nodes[parent_node].color;
                self.nodes[parent_node].color = Color::Black;
                let far = self.nodes[sibling].left;
                self.set_color(far, Color::Black);
                self.rotate_right(parent_node);
            }
            node = self.root;
            break;
        }
        self.set_color(node, Color::Black);
    }
}

impl<T, C> Tree<T, C>
where
    C: Compare<T>,
{
    fn search_slot(&self, key: &T, unique: bool) -> Slot {
        let mut parent = None;
        let mut is_left = false;
        let mut curr = self.root;
        while let Some(node) = curr {
            parent = Some(node);
            match self.cmp.compare(key, &self.nodes[node].key) {
                Ordering::Less => {
                    is_left = true;
                    curr = self.nodes[node].left;
                },
                Ordering::Equal if unique => return Slot::Occupied(node),
                // equal keys descend right so that they land after their existing run
                _ => {
                    is_left = false;
                    curr = self.nodes[node].right;
                },
            }
        }
        Slot::Vacant { parent, is_left }
    }

    /// Inserts `key`, returning its node and whether a new node was created. With `unique` set,
    /// an equal key already in the tree is returned instead.
    pub fn insert(&mut self, key: T, unique: bool) -> (Handle, bool) {
        let (parent, is_left) = match self.search_slot(&key, unique) {
            Slot::Occupied(node) => return (node, false),
            Slot::Vacant { parent, is_left } => (parent, is_left),
        };

        let node = self.nodes.allocate(Node::new(key, parent));
        self.attach(node, parent, is_left);
        (node, true)
    }

    /// Returns the first node whose key is not less than `key`.
    pub fn lower_bound(&self, key: &T) -> Option<Handle> {
        let mut ret = None;
        let mut curr = self.root;
        while let Some(node) = curr {
            if self.cmp.compare(&self.nodes[node].key, key) == Ordering::Less {
                curr = self.nodes[node].right;
            } else {
                ret = Some(node);
                curr = self.nodes[node].left;
            }
        }
        ret
    }

    /// Returns the first node whose key is greater than `key`.
    pub fn upper_bound(&self, key: &T) -> Option<Handle> {
        let mut ret = None;
        let mut curr = self.root;
        while let Some(node) = curr {
            if self.cmp.compare(&self.nodes[node].key, key) == Ordering::Greater {
                ret = Some(node);
                curr = self.nodes[node].left;
            } else {
                curr = self.nodes[node].right;
            }
        }
        ret
    }

    /// Returns the last node whose key is not greater than `key`.
    pub fn floor(&self, key: &T) -> Option<Handle> {
        let mut ret = None;
        let mut curr = self.root;
        while let Some(node) = curr {
            if self.cmp.compare(&self.nodes[node].key, key) == Ordering::Greater {
                curr = self.nodes[node].left;
            } else {
                ret = Some(node);
                curr = self.nodes[node].right;
            }
        }
        ret
    }

    /// Returns the first node whose key is equal to `key`.
    pub fn find(&self, key: &T) -> Option<Handle> {
        self.lower_bound(key)
            .filter(|node| self.cmp.compare(key, &self.nodes[*node].key) == Ordering::Equal)
    }

    /// Moves `node` out of `other` and links it into `self`, returning whether it moved. With
    /// `unique` set, a node whose key is already in `self` stays in `other`. The node keeps its
    /// handle, so cursors to it follow it into `self`.
    pub fn transfer(&mut self, other: &mut Tree<T, C>, node: Handle, unique: bool) -> bool {
        let (parent, is_left) = match self.search_slot(other.key(node), unique) {
            Slot::Occupied(_) => return false,
            Slot::Vacant { parent, is_left } => (parent, is_left),
        };
        other.unlink(node);
        self.nodes.adopt(&mut other.nodes, node);
        self.attach(node, parent, is_left);
        true
    }
}

impl<T, C> Clone for Tree<T, C>
where
    T: Clone,
    C: Clone,
{
    // the copy gets fresh handles and a fresh id so that cursors of the original are rejected
    fn clone(&self) -> Self {
        let mut nodes = TypedArena::with_capacity(self.len());
        let mut copies = HashMap::with_capacity(self.len());
        let mut curr = self.min();
        while let Some(node) = curr {
            let entry = &self.nodes[node];
            let copy = nodes.allocate(Node {
                key: entry.key.clone(),
                color: entry.color,
                parent: None,
                left: None,
                right: None,
            });
            copies.insert(node, copy);
            curr = self.successor(node);
        }
        for (node, copy) in &copies {
            let entry = &self.nodes[*node];
            let copy_entry = &mut nodes[*copy];
            copy_entry.parent = entry.parent.map(|parent| copies[&parent]);
            copy_entry.left = entry.left.map(|left| copies[&left]);
            copy_entry.right = entry.right.map(|right| copies[&right]);
        }
        Tree {
            id: cursor::next_container_id(),
            nodes,
            root: self.root.map(|root| copies[&root]),
            cmp: self.cmp.clone(),
        }
    }
}
