use crate::cursor::Cursor;
use crate::error::{Error, Result};
use crate::red_black_tree::iter::{RedBlackIntoIter, RedBlackIter};
use crate::red_black_tree::tree::Tree;
use compare::{natural, Compare, Natural};
use log::trace;
use std::fmt::{self, Debug};
use std::iter::FromIterator;

/// An ordered set of unique keys implemented using a red black tree.
///
/// A red black tree is a self-balancing binary search tree that colors every node red or black.
/// No red node has a red child and every path from the root to a leaf crosses the same number
/// of black nodes, which keeps the height of the tree logarithmic in the number of keys.
///
/// Positions in the set are `Cursor`s. A cursor stays valid until the key it points at is
/// erased, no matter what else is inserted or erased in the meantime.
///
/// # Examples
///
/// ```
/// use ordered_collections::red_black_tree::RedBlackSet;
///
/// let mut set = RedBlackSet::new();
/// set.insert(0);
/// set.insert(3);
///
/// assert_eq!(set.len(), 2);
///
/// assert_eq!(set.min(), Some(&0));
/// assert_eq!(set.ceil(&2), Some(&3));
///
/// assert_eq!(set.remove(&0), Some(0));
/// assert_eq!(set.remove(&1), None);
/// ```
#[derive(Clone)]
pub struct RedBlackSet<T, C = Natural<T>> {
    tree: Tree<T, C>,
}

impl<T> RedBlackSet<T>
where
    T: Ord,
{
    /// Constructs a new, empty `RedBlackSet<T>` ordered by the natural order of `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackSet;
    ///
    /// let set: RedBlackSet<u32> = RedBlackSet::new();
    /// ```
    pub fn new() -> Self {
        Self::with_cmp(natural())
    }
}

impl<T, C> RedBlackSet<T, C>
where
    C: Compare<T>,
{
    /// Constructs a new, empty `RedBlackSet<T, C>` ordered by the given comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{natural, Compare};
    /// use ordered_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::with_cmp(natural().rev());
    /// set.insert(1);
    /// set.insert(2);
    /// assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&2, &1]);
    /// ```
    pub fn with_cmp(cmp: C) -> Self {
        RedBlackSet {
            tree: Tree::new(cmp),
        }
    }

    /// Inserts a key into the set. Returns a cursor to the key in the set and whether the key
    /// was inserted. If an equal key already exists, the set is left unchanged and the cursor
    /// points at the existing key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// let (first, inserted) = set.insert(1);
    /// assert!(inserted);
    ///
    /// let (second, inserted) = set.insert(1);
    /// assert!(!inserted);
    /// assert_eq!(first, second);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, key: T) -> (Cursor, bool) {
        let (node, inserted) = self.tree.insert(key, true);
        (self.tree.cursor(Some(node)), inserted)
    }

    /// Inserts every key in order, returning the result of each insertion.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set: RedBlackSet<i32> = vec![3, 6, 1, -1, 5].into_iter().collect();
    /// let results = set.insert_many(vec![-2, -1, 7]);
    ///
    /// assert_eq!(
    ///     results.iter().map(|result| result.1).collect::<Vec<bool>>(),
    ///     vec![true, false, true],
    /// );
    /// assert_eq!(
    ///     set.iter().collect::<Vec<&i32>>(),
    ///     vec![&-2, &-1, &1, &3, &5, &6, &7],
    /// );
    /// ```
    pub fn insert_many<I>(&mut self, keys: I) -> Vec<(Cursor, bool)>
    where
        I: IntoIterator<Item = T>,
    {
        keys.into_iter().map(|key| self.insert(key)).collect()
    }

    /// Removes a key from the set. If the key exists in the set, it will return the
    /// associated key. Otherwise it will return `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert_eq!(set.remove(&1), Some(1));
    /// assert_eq!(set.remove(&1), None);
    /// ```
    pub fn remove(&mut self, key: &T) -> Option<T> {
        self.tree.find(key).map(|node| self.tree.remove(node))
    }

    /// Checks if a key exists in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains(&self, key: &T) -> bool {
        self.tree.find(key).is_some()
    }

    /// Returns a cursor to the key equal to `key`, or the end cursor if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(45);
    /// assert_eq!(set.get(set.find(&45)), Ok(&45));
    /// assert_eq!(set.find(&60), set.end());
    /// ```
    pub fn find(&self, key: &T) -> Cursor {
        self.tree.cursor(self.tree.find(key))
    }

    /// Returns a cursor to the first key that is not less than `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackSet;
    ///
    /// let set: RedBlackSet<u32> = vec![1, 3].into_iter().collect();
    /// assert_eq!(set.get(set.lower_bound(&1)), Ok(&1));
    /// assert_eq!(set.get(set.lower_bound(&2)), Ok(&3));
    /// assert!(set.lower_bound(&4).is_end());
    /// ```
    pub fn lower_bound(&self, key: &T) -> Cursor {
        self.tree.cursor(self.tree.lower_bound(key))
    }

    /// Returns a cursor to the first key that is greater than `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackSet;
    ///
    /// let set: RedBlackSet<u32> = vec![1, 3].into_iter().collect();
    /// assert_eq!(set.get(set.upper_bound(&1)), Ok(&3));
    /// assert!(set.upper_bound(&3).is_end());
    /// ```
    pub fn upper_bound(&self, key: &T) -> Cursor {
        self.tree.cursor(self.tree.upper_bound(key))
    }

    /// Returns the pair `(lower_bound(key), upper_bound(key))`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackSet;
    ///
    /// let set: RedBlackSet<u32> = vec![1, 2, 3].into_iter().collect();
    /// let (first, last) = set.equal_range(&2);
    /// assert_eq!(set.iter_range(first, last).unwrap().collect::<Vec<&u32>>(), vec![&2]);
    /// ```
    pub fn equal_range(&self, key: &T) -> (Cursor, Cursor) {
        (self.lower_bound(key), self.upper_bound(key))
    }

    /// Returns a key in the set that is less than or equal to a particular key. Returns `None` if
    /// such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert_eq!(set.floor(&0), None);
    /// assert_eq!(set.floor(&2), Some(&1));
    /// ```
    pub fn floor(&self, key: &T) -> Option<&T> {
        self.tree.floor(key).map(|node| self.tree.key(node))
    }

    /// Returns a key in the set that is greater than or equal to a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert_eq!(set.ceil(&0), Some(&1));
    /// assert_eq!(set.ceil(&2), None);
    /// ```
    pub fn ceil(&self, key: &T) -> Option<&T> {
        self.tree.lower_bound(key).map(|node| self.tree.key(node))
    }

    /// Moves every key of `other` that is not already in the set into the set. Keys that
    /// collide stay in `other`. The nodes themselves are moved, so cursors to moved keys keep
    /// working through the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set: RedBlackSet<u32> = vec![2, 3, 4].into_iter().collect();
    /// let mut other: RedBlackSet<u32> = vec![1, 2, 3].into_iter().collect();
    /// let one = other.begin();
    /// set.merge(&mut other);
    ///
    /// assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&1, &2, &3, &4]);
    /// assert_eq!(other.iter().collect::<Vec<&u32>>(), vec![&2, &3]);
    /// assert_eq!(set.get(one), Ok(&1));
    /// ```
    pub fn merge(&mut self, other: &mut Self) {
        let mut moved = 0;
        let mut curr = other.tree.min();
        while let Some(node) = curr {
            curr = other.tree.successor(node);
            if self.tree.transfer(&mut other.tree, node, true) {
                moved += 1;
            }
        }
        trace!("merged {} keys into set, {} collided", moved, other.len());
    }
}

impl<T, C> RedBlackSet<T, C> {
    /// Returns a reference to the comparator of the set.
    pub fn cmp(&self) -> &C {
        self.tree.cmp()
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackSet;
    ///
    /// let set: RedBlackSet<u32> = RedBlackSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Returns the theoretical upper bound on the number of keys the set can hold.
    pub fn max_size(&self) -> usize {
        Tree::<T, C>::max_size()
    }

    /// Clears the set, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// set.clear();
    /// assert_eq!(set.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Exchanges the contents of two sets in constant time. Cursors to keys follow their keys
    /// into the other set, while each set keeps its own end cursor.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set: RedBlackSet<u32> = vec![1, 2].into_iter().collect();
    /// let mut other = RedBlackSet::new();
    /// let cursor = set.begin();
    ///
    /// set.swap(&mut other);
    /// assert!(set.is_empty());
    /// assert_eq!(other.get(cursor), Ok(&1));
    /// ```
    pub fn swap(&mut self, other: &mut Self) {
        self.tree.swap(&mut other.tree);
    }

    /// Returns a cursor to the minimum key, or the end cursor if the set is empty.
    pub fn begin(&self) -> Cursor {
        self.tree.cursor(self.tree.min())
    }

    /// Returns the end cursor of the set, one past the maximum key.
    pub fn end(&self) -> Cursor {
        self.tree.cursor(None)
    }

    /// Returns the key a cursor points at.
    ///
    /// # Errors
    ///
    /// Returns `Error::EndOfContainer` for the end cursor and `Error::InvalidCursor` if the
    /// cursor belongs to another container or its key was erased.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::Error;
    /// use ordered_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert_eq!(set.get(set.begin()), Ok(&1));
    /// assert_eq!(set.get(set.end()), Err(Error::EndOfContainer));
    /// ```
    pub fn get(&self, cursor: Cursor) -> Result<&T> {
        self.tree.get(cursor)
    }

    /// Returns a cursor to the in-order successor of the key at `cursor`. The successor of the
    /// maximum key is the end cursor.
    ///
    /// # Errors
    ///
    /// Returns `Error::EndOfContainer` if `cursor` is the end cursor.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackSet;
    ///
    /// let set: RedBlackSet<u32> = vec![1, 2].into_iter().collect();
    /// let cursor = set.successor(set.begin()).unwrap();
    /// assert_eq!(set.get(cursor), Ok(&2));
    /// assert_eq!(set.successor(cursor), Ok(set.end()));
    /// ```
    pub fn successor(&self, cursor: Cursor) -> Result<Cursor> {
        self.tree.successor_cursor(cursor)
    }

    /// Returns a cursor to the in-order predecessor of the key at `cursor`. The predecessor of
    /// the end cursor is the maximum key.
    ///
    /// # Errors
    ///
    /// Returns `Error::BeginningOfContainer` if `cursor` points at the minimum key, or is the
    /// end cursor of an empty set.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::Error;
    /// use ordered_collections::red_black_tree::RedBlackSet;
    ///
    /// let set: RedBlackSet<u32> = vec![1, 2].into_iter().collect();
    /// let last = set.predecessor(set.end()).unwrap();
    /// assert_eq!(set.get(last), Ok(&2));
    /// assert_eq!(set.predecessor(set.begin()), Err(Error::BeginningOfContainer));
    /// ```
    pub fn predecessor(&self, cursor: Cursor) -> Result<Cursor> {
        self.tree.predecessor_cursor(cursor)
    }

    /// Removes the key a cursor points at and returns it. Every other cursor stays valid.
    ///
    /// # Errors
    ///
    /// Returns `Error::EndOfContainer` for the end cursor and `Error::InvalidCursor` if the
    /// cursor belongs to another container or its key was already erased. The set is left
    /// unchanged on error.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::Error;
    /// use ordered_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set: RedBlackSet<u32> = vec![52, 54, 45, 48, 53].into_iter().collect();
    /// let cursor = set.successor(set.begin()).unwrap();
    /// assert_eq!(set.erase(cursor), Ok(48));
    /// assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&45, &52, &53, &54]);
    ///
    /// assert_eq!(set.erase(set.end()), Err(Error::EndOfContainer));
    /// ```
    pub fn erase(&mut self, cursor: Cursor) -> Result<T> {
        self.tree.erase(cursor)
    }

    /// Returns the minimum key of the set. Returns `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> {
        self.tree.min().map(|node| self.tree.key(node))
    }

    /// Returns the maximum key of the set. Returns `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T> {
        self.tree.max().map(|node| self.tree.key(node))
    }

    /// Returns an iterator over the set. The iterator will yield keys using in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> RedBlackIter<'_, T, C> {
        RedBlackIter::new(&self.tree, self.tree.min(), None, self.tree.len())
    }

    /// Returns an iterator over the keys in `[first, last)`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidCursor` if either cursor belongs to another container or points at
    /// an erased key, or if `last` comes before `first`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackSet;
    ///
    /// let set: RedBlackSet<u32> = (0..10).collect();
    /// let range = set.iter_range(set.lower_bound(&3), set.lower_bound(&6)).unwrap();
    /// assert_eq!(range.rev().collect::<Vec<&u32>>(), vec![&5, &4, &3]);
    /// ```
    pub fn iter_range(&self, first: Cursor, last: Cursor) -> Result<RedBlackIter<'_, T, C>> {
        let front = self.tree.resolve(first)?;
        let back = self.tree.resolve(last)?;
        match self.tree.distance(front, back) {
            Some(len) => Ok(RedBlackIter::new(&self.tree, front, back, len)),
            None => Err(Error::InvalidCursor),
        }
    }
}

impl<T, C> IntoIterator for RedBlackSet<T, C> {
    type IntoIter = RedBlackIntoIter<T, C>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        RedBlackIntoIter::new(self.tree)
    }
}

impl<'a, T, C> IntoIterator for &'a RedBlackSet<T, C>
where
    T: 'a,
{
    type IntoIter = RedBlackIter<'a, T, C>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Default for RedBlackSet<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for RedBlackSet<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = RedBlackSet::new();
        set.extend(iter);
        set
    }
}

impl<T, C> Extend<T> for RedBlackSet<T, C>
where
    C: Compare<T>,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<T, C> PartialEq for RedBlackSet<T, C>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T, C> Eq for RedBlackSet<T, C> where T: Eq {}

impl<T, C> Debug for RedBlackSet<T, C>
where
    T: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
