use crate::cursor::Cursor;
use crate::error::{Error, Result};
use crate::red_black_tree::iter::{RedBlackIntoIter, RedBlackIter};
use crate::red_black_tree::tree::Tree;
use compare::{natural, Compare, Natural};
use log::trace;
use std::fmt::{self, Debug};
use std::iter::FromIterator;

/// An ordered multiset implemented using a red black tree.
///
/// Equal keys are kept as separate nodes that form a contiguous run in iteration order. A new
/// key is placed after every key it compares equal to, so equal keys iterate in the order they
/// were inserted.
///
/// # Examples
///
/// ```
/// use ordered_collections::red_black_tree::RedBlackMultiSet;
///
/// let mut multiset: RedBlackMultiSet<u32> = vec![1, 2, 2, 3, 3, 3].into_iter().collect();
///
/// assert_eq!(multiset.count(&3), 3);
/// assert_eq!(multiset.get(multiset.lower_bound(&2)), Ok(&2));
/// assert_eq!(multiset.get(multiset.upper_bound(&2)), Ok(&3));
///
/// assert_eq!(multiset.remove(&3), Some(3));
/// assert_eq!(multiset.count(&3), 2);
/// ```
#[derive(Clone)]
pub struct RedBlackMultiSet<T, C = Natural<T>> {
    tree: Tree<T, C>,
}

impl<T> RedBlackMultiSet<T>
where
    T: Ord,
{
    /// Constructs a new, empty `RedBlackMultiSet<T>` ordered by the natural order of `T`.
    pub fn new() -> Self {
        Self::with_cmp(natural())
    }
}

impl<T, C> RedBlackMultiSet<T, C>
where
    C: Compare<T>,
{
    /// Constructs a new, empty `RedBlackMultiSet<T, C>` ordered by the given comparator.
    pub fn with_cmp(cmp: C) -> Self {
        RedBlackMultiSet {
            tree: Tree::new(cmp),
        }
    }

    /// Inserts a key after every key equal to it. Insertion into a multiset always succeeds, so
    /// the returned flag is always `true`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackMultiSet;
    ///
    /// let mut multiset = RedBlackMultiSet::new();
    /// let (cursor, inserted) = multiset.insert(42);
    /// assert!(inserted);
    /// assert_eq!(cursor, multiset.begin());
    ///
    /// let (last, _) = multiset.insert(42);
    /// assert_eq!(multiset.successor(cursor), Ok(last));
    /// ```
    pub fn insert(&mut self, key: T) -> (Cursor, bool) {
        let (node, inserted) = self.tree.insert(key, false);
        (self.tree.cursor(Some(node)), inserted)
    }

    /// Inserts every key in order, returning the result of each insertion.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackMultiSet;
    ///
    /// let mut multiset = RedBlackMultiSet::new();
    /// let results = multiset.insert_many(vec![3, 1, 3]);
    /// assert!(results.iter().all(|&(_, inserted)| inserted));
    /// assert_eq!(multiset.get(results[1].0), Ok(&1));
    /// assert_eq!(multiset.iter().collect::<Vec<&u32>>(), vec![&1, &3, &3]);
    /// ```
    pub fn insert_many<I>(&mut self, keys: I) -> Vec<(Cursor, bool)>
    where
        I: IntoIterator<Item = T>,
    {
        keys.into_iter().map(|key| self.insert(key)).collect()
    }

    /// Removes one occurrence of a key, the first of its run, and returns it.
    pub fn remove(&mut self, key: &T) -> Option<T> {
        self.tree.find(key).map(|node| self.tree.remove(node))
    }

    /// Checks if at least one occurrence of a key exists in the multiset.
    pub fn contains(&self, key: &T) -> bool {
        self.tree.find(key).is_some()
    }

    /// Returns the number of occurrences of a key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackMultiSet;
    ///
    /// let multiset: RedBlackMultiSet<u32> = vec![2, 1, 2, 2].into_iter().collect();
    /// assert_eq!(multiset.count(&2), 3);
    /// assert_eq!(multiset.count(&1), 1);
    /// assert_eq!(multiset.count(&0), 0);
    /// ```
    pub fn count(&self, key: &T) -> usize {
        let (first, last) = self.equal_range(key);
        match self.iter_range(first, last) {
            Ok(range) => range.count(),
            Err(_) => 0,
        }
    }

    /// Returns a cursor to the first occurrence of a key, or the end cursor if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackMultiSet;
    ///
    /// let mut multiset = RedBlackMultiSet::new();
    /// let (first, _) = multiset.insert(5);
    /// multiset.insert(5);
    /// multiset.insert(3);
    /// assert_eq!(multiset.find(&5), first);
    /// assert_eq!(multiset.find(&4), multiset.end());
    /// ```
    pub fn find(&self, key: &T) -> Cursor {
        self.tree.cursor(self.tree.find(key))
    }

    /// Returns a cursor to the first key that is not less than `key`. For a key in the multiset
    /// this is the first of its run.
    pub fn lower_bound(&self, key: &T) -> Cursor {
        self.tree.cursor(self.tree.lower_bound(key))
    }

    /// Returns a cursor to the first key that is greater than `key`, one past the run of `key`.
    pub fn upper_bound(&self, key: &T) -> Cursor {
        self.tree.cursor(self.tree.upper_bound(key))
    }

    /// Returns the cursors delimiting the run of keys equal to `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackMultiSet;
    ///
    /// let multiset: RedBlackMultiSet<u32> = vec![52, 52, 45, 48, 53].into_iter().collect();
    /// let (first, last) = multiset.equal_range(&52);
    /// let run = multiset.iter_range(first, last).unwrap();
    /// assert_eq!(run.collect::<Vec<&u32>>(), vec![&52, &52]);
    ///
    /// let (first, last) = multiset.equal_range(&2);
    /// assert_eq!(first, last);
    /// assert_eq!(multiset.get(first), Ok(&45));
    /// ```
    pub fn equal_range(&self, key: &T) -> (Cursor, Cursor) {
        (self.lower_bound(key), self.upper_bound(key))
    }

    /// Returns the last key that is less than or equal to `key`.
    pub fn floor(&self, key: &T) -> Option<&T> {
        self.tree.floor(key).map(|node| self.tree.key(node))
    }

    /// Returns the first key that is greater than or equal to `key`.
    pub fn ceil(&self, key: &T) -> Option<&T> {
        self.tree.lower_bound(key).map(|node| self.tree.key(node))
    }

    /// Moves every node of `other` into the multiset, leaving `other` empty. Moved keys land
    /// after the keys of the multiset they compare equal to. Cursors to moved keys stay valid and
    /// now point into the multiset.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackMultiSet;
    ///
    /// let mut multiset: RedBlackMultiSet<u32> = vec![2, 3].into_iter().collect();
    /// let mut other: RedBlackMultiSet<u32> = vec![1, 2, 2].into_iter().collect();
    /// let one = other.begin();
    /// multiset.merge(&mut other);
    ///
    /// assert_eq!(multiset.iter().collect::<Vec<&u32>>(), vec![&1, &2, &2, &2, &3]);
    /// assert_eq!(multiset.get(one), Ok(&1));
    /// assert!(other.is_empty());
    /// ```
    pub fn merge(&mut self, other: &mut Self) {
        let moved = other.len();
        while let Some(node) = other.tree.min() {
            self.tree.transfer(&mut other.tree, node, false);
        }
        trace!("merged {} keys into multiset", moved);
    }
}

impl<T, C> RedBlackMultiSet<T, C> {
    /// Returns a reference to the comparator of the multiset.
    pub fn cmp(&self) -> &C {
        self.tree.cmp()
    }

    /// Returns the number of keys in the multiset, counting every occurrence.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the multiset is empty.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Returns the theoretical upper bound on the number of keys the multiset can hold.
    pub fn max_size(&self) -> usize {
        Tree::<T, C>::max_size()
    }

    /// Clears the multiset, removing all keys.
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Exchanges the contents of two multisets in constant time. Cursors to keys follow their
    /// keys into the other multiset, while each multiset keeps its own end cursor.
    pub fn swap(&mut self, other: &mut Self) {
        self.tree.swap(&mut other.tree);
    }

    /// Returns a cursor to the first key, or the end cursor if the multiset is empty.
    pub fn begin(&self) -> Cursor {
        self.tree.cursor(self.tree.min())
    }

    /// Returns the end cursor of the multiset.
    pub fn end(&self) -> Cursor {
        self.tree.cursor(None)
    }

    /// Returns the key a cursor points at. See `RedBlackSet::get`.
    pub fn get(&self, cursor: Cursor) -> Result<&T> {
        self.tree.get(cursor)
    }

    /// Returns a cursor to the next key in iteration order. See `RedBlackSet::successor`.
    pub fn successor(&self, cursor: Cursor) -> Result<Cursor> {
        self.tree.successor_cursor(cursor)
    }

    /// Returns a cursor to the previous key in iteration order. See `RedBlackSet::predecessor`.
    pub fn predecessor(&self, cursor: Cursor) -> Result<Cursor> {
        self.tree.predecessor_cursor(cursor)
    }

    /// Removes exactly the occurrence a cursor points at. Other occurrences of the key and
    /// every other cursor are unaffected.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackMultiSet;
    ///
    /// let mut multiset: RedBlackMultiSet<u32> = vec![1, 2, 3].into_iter().collect();
    /// assert_eq!(multiset.erase(multiset.begin()), Ok(1));
    /// assert_eq!(multiset.len(), 2);
    /// assert_eq!(multiset.get(multiset.begin()), Ok(&2));
    /// ```
    pub fn erase(&mut self, cursor: Cursor) -> Result<T> {
        self.tree.erase(cursor)
    }

    /// Returns the minimum key. Returns `None` if the multiset is empty.
    pub fn min(&self) -> Option<&T> {
        self.tree.min().map(|node| self.tree.key(node))
    }

    /// Returns the maximum key. Returns `None` if the multiset is empty.
    pub fn max(&self) -> Option<&T> {
        self.tree.max().map(|node| self.tree.key(node))
    }

    /// Returns an in-order iterator over the keys, yielding every occurrence.
    pub fn iter(&self) -> RedBlackIter<'_, T, C> {
        RedBlackIter::new(&self.tree, self.tree.min(), None, self.tree.len())
    }

    /// Returns an iterator over the keys in `[first, last)`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidCursor` if either cursor does not belong to the multiset, or if
    /// `last` comes before `first`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::red_black_tree::RedBlackMultiSet;
    /// use ordered_collections::Error;
    ///
    /// let multiset: RedBlackMultiSet<u32> = vec![1, 2, 2, 3].into_iter().collect();
    /// let (first, last) = multiset.equal_range(&2);
    /// assert_eq!(multiset.iter_range(first, last).unwrap().len(), 2);
    /// assert!(multiset.iter_range(last, first).err() == Some(Error::InvalidCursor));
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

impl<T, C> IntoIterator for RedBlackMultiSet<T, C> {
    type IntoIter = RedBlackIntoIter<T, C>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        RedBlackIntoIter::new(self.tree)
    }
}

impl<'a, T, C> IntoIterator for &'a RedBlackMultiSet<T, C>
where
    T: 'a,
{
    type IntoIter = RedBlackIter<'a, T, C>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Default for RedBlackMultiSet<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for RedBlackMultiSet<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut multiset = RedBlackMultiSet::new();
        multiset.extend(iter);
        multiset
    }
}

impl<T, C> Extend<T> for RedBlackMultiSet<T, C>
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

impl<T, C> PartialEq for RedBlackMultiSet<T, C>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T, C> Eq for RedBlackMultiSet<T, C> where T: Eq {}

impl<T, C> Debug for RedBlackMultiSet<T, C>
where
    T: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
