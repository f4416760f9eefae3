use crate::arena::{Handle, TypedArena};
use crate::cursor::{self, Cursor, Position};
use crate::error::{Error, Result};
use crate::linked_list::node::Node;
use compare::{natural, Compare};
use log::{debug, trace};
use std::cmp::Ordering;
use std::fmt::{self, Debug};
use std::iter::FromIterator;
use std::mem;

/// A doubly linked list.
///
/// Every node stores a link to both its neighbours, so values can be inserted and erased at any
/// cursor in `O(1)` time. Cursors stay valid until the value they point at is erased, and follow
/// their values when nodes are spliced or merged into another list.
///
/// # Examples
///
/// ```
/// use ordered_collections::linked_list::LinkedList;
///
/// let mut list = LinkedList::new();
/// list.push_back(2);
/// list.push_front(1);
/// list.push_back(3);
///
/// assert_eq!(list.front(), Some(&1));
/// assert_eq!(list.back(), Some(&3));
/// assert_eq!(list.len(), 3);
///
/// assert_eq!(list.pop_front(), Some(1));
/// assert_eq!(list.pop_back(), Some(3));
/// ```
pub struct LinkedList<T> {
    id: usize,
    nodes: TypedArena<Node<T>>,
    head: Option<Handle>,
    tail: Option<Handle>,
}

impl<T> LinkedList<T> {
    /// Constructs a new, empty `LinkedList<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::linked_list::LinkedList;
    ///
    /// let list: LinkedList<u32> = LinkedList::new();
    /// assert!(list.is_empty());
    /// ```
    pub fn new() -> Self {
        LinkedList {
            id: cursor::next_container_id(),
            nodes: TypedArena::new(),
            head: None,
            tail: None,
        }
    }

    /// Constructs a list holding `size` default values.
    ///
    /// # Errors
    ///
    /// Returns `Error::LimitExceeded` if `size` is negative or greater than `max_size()`. No
    /// value is allocated in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::Error;
    /// use ordered_collections::linked_list::LinkedList;
    ///
    /// let list: LinkedList<u32> = LinkedList::with_size(4).unwrap();
    /// assert_eq!(list.iter().collect::<Vec<&u32>>(), vec![&0, &0, &0, &0]);
    ///
    /// let err = LinkedList::<u32>::with_size(-1).unwrap_err();
    /// assert_eq!(err, Error::LimitExceeded);
    /// assert_eq!(err.to_string(), "Limit of the container is exceeded");
    /// ```
    pub fn with_size(size: isize) -> Result<Self>
    where
        T: Default,
    {
        if size < 0 || size as usize > Self::size_limit() {
            debug!("rejected list construction with size {}", size);
            return Err(Error::LimitExceeded);
        }
        let mut list = LinkedList::new();
        list.nodes = TypedArena::with_capacity(size as usize);
        for _ in 0..size {
            list.push_back(T::default());
        }
        Ok(list)
    }

    fn size_limit() -> usize {
        isize::max_value() as usize / mem::size_of::<Node<T>>()
    }

    /// Returns the theoretical upper bound on the number of values the list can hold.
    pub fn max_size(&self) -> usize {
        Self::size_limit()
    }

    /// Returns the number of values in the list.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns a reference to the first value, or `None` if the list is empty.
    pub fn front(&self) -> Option<&T> {
        self.head.map(|node| &self.nodes[node].value)
    }

    /// Returns a reference to the last value, or `None` if the list is empty.
    pub fn back(&self) -> Option<&T> {
        self.tail.map(|node| &self.nodes[node].value)
    }

    /// Returns a mutable reference to the first value, or `None` if the list is empty.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        match self.head {
            Some(node) => Some(&mut self.nodes[node].value),
            None => None,
        }
    }

    /// Returns a mutable reference to the last value, or `None` if the list is empty.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        match self.tail {
            Some(node) => Some(&mut self.nodes[node].value),
            None => None,
        }
    }

    /// Inserts a value at the front of the list.
    pub fn push_front(&mut self, value: T) {
        let head = self.head;
        self.link_before(head, value);
    }

    /// Inserts a value at the back of the list.
    pub fn push_back(&mut self, value: T) {
        self.link_before(None, value);
    }

    /// Removes the first value and returns it, or `None` if the list is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.map(|node| self.unlink(node))
    }

    /// Removes the last value and returns it, or `None` if the list is empty.
    pub fn pop_back(&mut self) -> Option<T> {
        self.tail.map(|node| self.unlink(node))
    }

    /// Returns a cursor to the first value, or the end cursor if the list is empty.
    pub fn begin(&self) -> Cursor {
        Cursor::new(self.id, self.head)
    }

    /// Returns the end cursor of the list, one past the last value.
    pub fn end(&self) -> Cursor {
        Cursor::new(self.id, None)
    }

    fn resolve(&self, cursor: Cursor) -> Result<Option<Handle>> {
        match cursor.position() {
            Position::Node(node) if self.nodes.contains(node) => Ok(Some(node)),
            Position::End(id) if id == self.id => Ok(None),
            _ => Err(Error::InvalidCursor),
        }
    }

    /// Returns the value a cursor points at.
    ///
    /// # Errors
    ///
    /// Returns `Error::EndOfContainer` for the end cursor and `Error::InvalidCursor` for a
    /// cursor of another container or of an erased value.
    pub fn get(&self, cursor: Cursor) -> Result<&T> {
        self.resolve(cursor)?
            .map(|node| &self.nodes[node].value)
            .ok_or(Error::EndOfContainer)
    }

    /// Returns a mutable reference to the value a cursor points at. Fails like `get`.
    pub fn get_mut(&mut self, cursor: Cursor) -> Result<&mut T> {
        match self.resolve(cursor)? {
            Some(node) => Ok(&mut self.nodes[node].value),
            None => Err(Error::EndOfContainer),
        }
    }

    /// Returns a cursor to the next value. The successor of the last value is the end cursor.
    ///
    /// # Errors
    ///
    /// Returns `Error::EndOfContainer` if `cursor` is the end cursor.
    pub fn successor(&self, cursor: Cursor) -> Result<Cursor> {
        match self.resolve(cursor)? {
            Some(node) => Ok(Cursor::new(self.id, self.nodes[node].next)),
            None => Err(Error::EndOfContainer),
        }
    }

    /// Returns a cursor to the previous value. The predecessor of the end cursor is the last
    /// value.
    ///
    /// # Errors
    ///
    /// Returns `Error::BeginningOfContainer` if `cursor` points at the first value, or is the
    /// end cursor of an empty list.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::linked_list::LinkedList;
    ///
    /// let mut list: LinkedList<u32> = vec![1, 9999, 20000].into_iter().collect();
    /// let last = list.predecessor(list.end()).unwrap();
    /// assert_eq!(list.erase(last), Ok(20000));
    /// assert_eq!(list.iter().collect::<Vec<&u32>>(), vec![&1, &9999]);
    /// ```
    pub fn predecessor(&self, cursor: Cursor) -> Result<Cursor> {
        let prev = match self.resolve(cursor)? {
            Some(node) => self.nodes[node].prev,
            None => self.tail,
        };
        prev.map(|node| Cursor::new(self.id, Some(node)))
            .ok_or(Error::BeginningOfContainer)
    }

    /// Inserts a value before the value a cursor points at, or at the back for the end cursor.
    /// Returns a cursor to the inserted value.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidCursor` for a cursor of another container or of an erased value.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::linked_list::LinkedList;
    ///
    /// let mut list: LinkedList<u32> = vec![1, 9999, 20000].into_iter().collect();
    /// let cursor = list.insert(list.begin(), 5).unwrap();
    /// assert_eq!(cursor, list.begin());
    /// list.insert(list.end(), 6).unwrap();
    /// assert_eq!(list.iter().collect::<Vec<&u32>>(), vec![&5, &1, &9999, &20000, &6]);
    /// ```
    pub fn insert(&mut self, cursor: Cursor, value: T) -> Result<Cursor> {
        let next = self.resolve(cursor)?;
        let node = self.link_before(next, value);
        Ok(Cursor::new(self.id, Some(node)))
    }

    /// Removes the value a cursor points at and returns it.
    ///
    /// # Errors
    ///
    /// Returns `Error::EndOfContainer` for the end cursor, which is the only cursor of an empty
    /// list, and `Error::InvalidCursor` for a cursor of another container or of an erased value.
    /// The list is left unchanged on error.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::Error;
    /// use ordered_collections::linked_list::LinkedList;
    ///
    /// let mut list: LinkedList<u32> = vec![1, 9999, 20000].into_iter().collect();
    /// assert_eq!(list.erase(list.begin()), Ok(1));
    /// assert_eq!(list.erase(list.end()), Err(Error::EndOfContainer));
    /// assert_eq!(list.len(), 2);
    /// ```
    pub fn erase(&mut self, cursor: Cursor) -> Result<T> {
        match self.resolve(cursor)? {
            Some(node) => Ok(self.unlink(node)),
            None => {
                debug!("rejected erase of the end cursor of list {}", self.id);
                Err(Error::EndOfContainer)
            },
        }
    }

    /// Clears the list, removing all values.
    pub fn clear(&mut self) {
        trace!("clearing list {} holding {} values", self.id, self.len());
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }

    /// Exchanges the contents of two lists in constant time. Cursors to values follow their
    /// values into the other list, while each list keeps its own end cursor.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.nodes, &mut other.nodes);
        mem::swap(&mut self.head, &mut other.head);
        mem::swap(&mut self.tail, &mut other.tail);
    }

    /// Merges two sorted lists into `self` according to the natural order of `T`, leaving
    /// `other` empty. See `merge_by`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::linked_list::LinkedList;
    ///
    /// let mut list: LinkedList<u32> = vec![1, 9999, 20000].into_iter().collect();
    /// let mut other: LinkedList<u32> = vec![500, 15000, 30000].into_iter().collect();
    /// list.merge(&mut other);
    ///
    /// assert_eq!(
    ///     list.iter().collect::<Vec<&u32>>(),
    ///     vec![&1, &500, &9999, &15000, &20000, &30000],
    /// );
    /// assert!(other.is_empty());
    /// ```
    pub fn merge(&mut self, other: &mut Self)
    where
        T: Ord,
    {
        self.merge_by(other, natural());
    }

    /// Merges two lists sorted by `cmp` into `self`, leaving `other` empty. Values of `self` come
    /// before equal values of `other`. If either list is unsorted the values are still all moved,
    /// interleaved in an unspecified way.
    ///
    /// Nodes are relinked rather than copied, so cursors to values of `other` stay valid and now
    /// point into `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::linked_list::LinkedList;
    ///
    /// let mut list: LinkedList<u32> = vec![3, 1].into_iter().collect();
    /// let mut other: LinkedList<u32> = vec![4, 2].into_iter().collect();
    /// let two = other.predecessor(other.end()).unwrap();
    /// list.merge_by(&mut other, |a: &u32, b: &u32| b.cmp(a));
    ///
    /// assert_eq!(list.iter().collect::<Vec<&u32>>(), vec![&4, &3, &2, &1]);
    /// assert_eq!(list.get(two), Ok(&2));
    /// ```
    pub fn merge_by<C>(&mut self, other: &mut Self, cmp: C)
    where
        C: Compare<T>,
    {
        let moved = other.len();
        let mut curr = self.head;
        while let Some(first) = other.head {
            while let Some(node) = curr {
                if cmp.compare(&self.nodes[node].value, &other.nodes[first].value)
                    == Ordering::Greater
                {
                    break;
                }
                curr = self.nodes[node].next;
            }
            self.transfer(curr, other, first, first);
        }
        trace!("merged {} values into list {}", moved, self.id);
    }

    /// Moves every value of `other` before the value a cursor points at, leaving `other` empty.
    /// The nodes of `other` are relinked as one chain, so cursors to them stay valid and now point
    /// into `self`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidCursor` if the cursor does not belong to `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::linked_list::LinkedList;
    ///
    /// let mut list: LinkedList<u32> = vec![1, 9999, 20000].into_iter().collect();
    /// let mut other: LinkedList<u32> = vec![500, 15000, 30000].into_iter().collect();
    /// let moved = other.begin();
    /// list.splice(list.begin(), &mut other).unwrap();
    ///
    /// assert_eq!(
    ///     list.iter().collect::<Vec<&u32>>(),
    ///     vec![&500, &15000, &30000, &1, &9999, &20000],
    /// );
    /// assert_eq!(list.get(moved), Ok(&500));
    /// assert!(other.is_empty());
    /// ```
    pub fn splice(&mut self, cursor: Cursor, other: &mut Self) -> Result<()> {
        let next = self.resolve(cursor)?;
        let moved = other.len();
        if self.is_empty() {
            self.swap(other);
        } else if let (Some(first), Some(last)) = (other.head, other.tail) {
            self.transfer(next, other, first, last);
        }
        trace!("spliced {} values into list {}", moved, self.id);
        Ok(())
    }

    /// Moves the values of `other` in `[first, last)` before the value `cursor` points at. Cursors
    /// to moved values stay valid and now point into `self`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidCursor` if `cursor` does not belong to `self`, if `first` or
    /// `last` do not belong to `other`, or if `last` does not follow `first`. Neither list is
    /// modified on error.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::linked_list::LinkedList;
    ///
    /// let mut list: LinkedList<u32> = vec![1, 2].into_iter().collect();
    /// let mut other: LinkedList<u32> = vec![7, 8, 9].into_iter().collect();
    /// let first = other.successor(other.begin()).unwrap();
    /// let last = other.end();
    /// list.splice_range(list.end(), &mut other, first, last).unwrap();
    ///
    /// assert_eq!(list.iter().collect::<Vec<&u32>>(), vec![&1, &2, &8, &9]);
    /// assert_eq!(other.iter().collect::<Vec<&u32>>(), vec![&7]);
    /// ```
    pub fn splice_range(
        &mut self,
        cursor: Cursor,
        other: &mut Self,
        first: Cursor,
        last: Cursor,
    ) -> Result<()> {
        let next = self.resolve(cursor)?;
        let first = other.resolve(first)?;
        let last = other.resolve(last)?;

        let mut moved = 0;
        let mut range_last = None;
        let mut curr = first;
        while curr != last {
            match curr {
                Some(node) => {
                    range_last = Some(node);
                    curr = other.nodes[node].next;
                },
                None => return Err(Error::InvalidCursor),
            }
            moved += 1;
        }

        if let (Some(first), Some(range_last)) = (first, range_last) {
            self.transfer(next, other, first, range_last);
        }
        trace!("spliced {} values into list {}", moved, self.id);
        Ok(())
    }

    /// Removes every value that is equal to the value before it, and returns how many values
    /// were removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::linked_list::LinkedList;
    ///
    /// let mut list: LinkedList<u32> = vec![1, 1, 2, 1, 3, 3, 3].into_iter().collect();
    /// assert_eq!(list.unique(), 3);
    /// assert_eq!(list.iter().collect::<Vec<&u32>>(), vec![&1, &2, &1, &3]);
    /// ```
    pub fn unique(&mut self) -> usize
    where
        T: PartialEq,
    {
        let mut removed = 0;
        let mut curr = self.head;
        while let Some(node) = curr {
            let next = self.nodes[node].next;
            match next {
                Some(next) if self.nodes[node].value == self.nodes[next].value => {
                    self.unlink(next);
                    removed += 1;
                },
                next => curr = next,
            }
        }
        removed
    }

    /// Reverses the order of the values in place. Cursors keep pointing at the same values.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::linked_list::LinkedList;
    ///
    /// let mut list: LinkedList<u32> = vec![1, 2, 3].into_iter().collect();
    /// list.reverse();
    /// assert_eq!(list.iter().collect::<Vec<&u32>>(), vec![&3, &2, &1]);
    /// ```
    pub fn reverse(&mut self) {
        let mut curr = self.head;
        while let Some(node) = curr {
            let entry = &mut self.nodes[node];
            mem::swap(&mut entry.prev, &mut entry.next);
            curr = entry.prev;
        }
        mem::swap(&mut self.head, &mut self.tail);
    }

    /// Returns an iterator over the list, front to back.
    pub fn iter(&self) -> LinkedListIter<'_, T> {
        LinkedListIter {
            list: self,
            front: self.head,
            back: self.tail,
            len: self.len(),
        }
    }

    fn link_before(&mut self, next: Option<Handle>, value: T) -> Handle {
        let node = self.nodes.allocate(Node::new(value, None, None));
        self.paste(next, node, node);
        node
    }

    fn unlink(&mut self, node: Handle) -> T {
        self.cut(node, node);
        self.nodes.free(node).value
    }

    // Links the chain `first..=last`, already owned by `self`, before `next`.
    fn paste(&mut self, next: Option<Handle>, first: Handle, last: Handle) {
        let prev = match next {
            Some(next) => self.nodes[next].prev,
            None => self.tail,
        };
        self.nodes[first].prev = prev;
        self.nodes[last].next = next;
        match prev {
            Some(prev) => self.nodes[prev].next = Some(first),
            None => self.head = Some(first),
        }
        match next {
            Some(next) => self.nodes[next].prev = Some(last),
            None => self.tail = Some(last),
        }
    }

    // Unlinks the chain `first..=last` from its neighbours. Links inside the chain are kept.
    fn cut(&mut self, first: Handle, last: Handle) {
        let prev = self.nodes[first].prev;
        let next = self.nodes[last].next;
        match prev {
            Some(prev) => self.nodes[prev].next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.nodes[next].prev = prev,
            None => self.tail = prev,
        }
    }

    // Moves the chain `first..=last` of `other` before `next` without reallocating its nodes.
    fn transfer(&mut self, next: Option<Handle>, other: &mut Self, first: Handle, last: Handle) {
        other.cut(first, last);
        let mut curr = first;
        loop {
            let following = other.nodes[curr].next;
            self.nodes.adopt(&mut other.nodes, curr);
            if curr == last {
                break;
            }
            curr = following.expect("Expected chain to reach its last node.");
        }
        self.paste(next, first, last);
    }
}

impl<T> Clone for LinkedList<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> PartialEq for LinkedList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T> Eq for LinkedList<T> where T: Eq {}

impl<T> Debug for LinkedList<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type IntoIter = LinkedListIntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        LinkedListIntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T>
where
    T: 'a,
{
    type IntoIter = LinkedListIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `LinkedList<T>`.
///
/// This iterator yields the values of the list front to back.
pub struct LinkedListIntoIter<T> {
    list: LinkedList<T>,
}

impl<T> Iterator for LinkedListIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> DoubleEndedIterator for LinkedListIntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back()
    }
}

impl<T> ExactSizeIterator for LinkedListIntoIter<T> {}

/// An iterator for `LinkedList<T>`.
///
/// This iterator yields immutable references to the values of the list front to back.
pub struct LinkedListIter<'a, T> {
    list: &'a LinkedList<T>,
    front: Option<Handle>,
    back: Option<Handle>,
    len: usize,
}

impl<'a, T> Iterator for LinkedListIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let node = &self.list.nodes[self.front?];
        self.front = node.next;
        self.len -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> DoubleEndedIterator for LinkedListIter<'a, T>
where
    T: 'a,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let node = &self.list.nodes[self.back?];
        self.back = node.prev;
        self.len -= 1;
        Some(&node.value)
    }
}

impl<'a, T> ExactSizeIterator for LinkedListIter<'a, T> where T: 'a {}

#[cfg(test)]
mod tests {
    use super::LinkedList;
    use crate::error::Error;

    fn values(list: &LinkedList<i32>) -> Vec<i32> {
        list.iter().cloned().collect()
    }

    #[test]
    fn test_len_empty() {
        let list: LinkedList<u32> = LinkedList::new();
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
        assert_eq!(list.begin(), list.end());
    }

    #[test]
    fn test_with_size() {
        let list: LinkedList<i32> = LinkedList::with_size(1_000_000).unwrap();
        assert_eq!(list.len(), 1_000_000);
        assert!(list.iter().all(|value| *value == 0));
    }

    #[test]
    fn test_with_size_limit() {
        assert_eq!(
            LinkedList::<i32>::with_size(-1).unwrap_err(),
            Error::LimitExceeded,
        );
        assert_eq!(
            LinkedList::<i32>::with_size(isize::max_value()).unwrap_err(),
            Error::LimitExceeded,
        );
    }

    #[test]
    fn test_push_pop() {
        let mut list = LinkedList::new();
        list.push_back(2);
        list.push_front(1);
        list.push_back(3);
        assert_eq!(values(&list), vec![1, 2, 3]);
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_back(), Some(3));
        assert_eq!(list.pop_back(), Some(2));
        assert_eq!(list.pop_back(), None);
        assert_eq!(list.pop_front(), None);
    }

    #[test]
    fn test_front_back_mut() {
        let mut list: LinkedList<i32> = vec![1, 2, 3].into_iter().collect();
        *list.front_mut().unwrap() = 99;
        *list.back_mut().unwrap() += 1;
        assert_eq!(values(&list), vec![99, 2, 4]);
    }

    #[test]
    fn test_insert_into_empty() {
        let mut list = LinkedList::new();
        list.insert(list.begin(), 5).unwrap();
        let mut other = LinkedList::new();
        other.insert(other.end(), 5).unwrap();
        assert_eq!(list, other);
        assert_eq!(values(&list), vec![5]);
    }

    #[test]
    fn test_insert_into_sized() {
        let mut list: LinkedList<i32> = LinkedList::with_size(4).unwrap();
        list.insert(list.begin(), 5).unwrap();
        list.insert(list.end(), 5).unwrap();
        assert_eq!(values(&list), vec![5, 0, 0, 0, 0, 5]);
    }

    #[test]
    fn test_erase_errors() {
        let mut list: LinkedList<i32> = LinkedList::new();
        assert_eq!(list.erase(list.end()), Err(Error::EndOfContainer));
        assert_eq!(list.erase(list.begin()), Err(Error::EndOfContainer));

        let mut list: LinkedList<i32> = vec![1, 9999, 20000].into_iter().collect();
        let other: LinkedList<i32> = vec![1].into_iter().collect();
        assert_eq!(list.erase(list.end()), Err(Error::EndOfContainer));
        assert_eq!(list.erase(other.begin()), Err(Error::InvalidCursor));
        assert_eq!(values(&list), vec![1, 9999, 20000]);
    }

    #[test]
    fn test_erase_last_of_sized() {
        let mut list: LinkedList<i32> = LinkedList::with_size(5).unwrap();
        let last = list.predecessor(list.end()).unwrap();
        assert_eq!(list.erase(last), Ok(0));
        assert_eq!(list.len(), 4);
        assert_eq!(list.get(last), Err(Error::InvalidCursor));
    }

    #[test]
    fn test_cursor_navigation() {
        let list: LinkedList<i32> = vec![500, 15000, 30000].into_iter().collect();
        let second = list.successor(list.begin()).unwrap();
        assert_eq!(list.get(second), Ok(&15000));
        assert_eq!(list.predecessor(second), Ok(list.begin()));
        assert_eq!(list.predecessor(list.begin()), Err(Error::BeginningOfContainer));
        assert_eq!(list.successor(list.end()), Err(Error::EndOfContainer));
        assert_eq!(list.get(list.end()), Err(Error::EndOfContainer));
    }

    #[test]
    fn test_get_mut() {
        let mut list: LinkedList<i32> = vec![1, 2].into_iter().collect();
        let cursor = list.begin();
        *list.get_mut(cursor).unwrap() = 7;
        assert_eq!(values(&list), vec![7, 2]);
    }

    #[test]
    fn test_merge_unsorted() {
        let mut list: LinkedList<i32> = vec![1, 20000, 666].into_iter().collect();
        let mut other: LinkedList<i32> = vec![15000, 154, 124, 30000].into_iter().collect();
        list.merge(&mut other);
        assert_eq!(values(&list), vec![1, 15000, 154, 124, 20000, 666, 30000]);
        assert!(other.is_empty());
    }

    #[test]
    fn test_merge_empty() {
        let mut list: LinkedList<i32> = LinkedList::new();
        let mut other: LinkedList<i32> = vec![15000, 154].into_iter().collect();
        list.merge(&mut other);
        assert_eq!(values(&list), vec![15000, 154]);

        let mut empty = LinkedList::new();
        list.merge(&mut empty);
        assert_eq!(values(&list), vec![15000, 154]);

        let mut first: LinkedList<i32> = LinkedList::new();
        let mut second = LinkedList::new();
        first.merge(&mut second);
        assert!(first.is_empty());
    }

    #[test]
    fn test_merge_is_stable() {
        let by_first = |a: &(i32, char), b: &(i32, char)| a.0.cmp(&b.0);
        let mut list: LinkedList<(i32, char)> = vec![(1, 'a'), (2, 'c')].into_iter().collect();
        let mut other: LinkedList<(i32, char)> = vec![(1, 'b'), (2, 'd')].into_iter().collect();
        list.merge_by(&mut other, by_first);
        assert_eq!(list.iter().map(|pair| pair.1).collect::<String>(), "abcd");
    }

    #[test]
    fn test_splice_empty() {
        let mut list: LinkedList<i32> = vec![1, 9999, 20000].into_iter().collect();
        let mut other = LinkedList::new();
        list.splice(list.begin(), &mut other).unwrap();
        assert_eq!(values(&list), vec![1, 9999, 20000]);

        let mut list: LinkedList<i32> = LinkedList::new();
        let mut other: LinkedList<i32> = vec![500, 15000, 30000].into_iter().collect();
        list.splice(list.begin(), &mut other).unwrap();
        assert_eq!(values(&list), vec![500, 15000, 30000]);
        assert!(other.is_empty());
    }

    #[test]
    fn test_splice_range_rejects_backwards_range() {
        let mut list: LinkedList<i32> = vec![1].into_iter().collect();
        let mut other: LinkedList<i32> = vec![7, 8, 9].into_iter().collect();
        let first = other.predecessor(other.end()).unwrap();
        let last = other.begin();
        assert_eq!(
            list.splice_range(list.end(), &mut other, first, last),
            Err(Error::InvalidCursor),
        );
        assert_eq!(values(&list), vec![1]);
        assert_eq!(values(&other), vec![7, 8, 9]);
    }

    #[test]
    fn test_unique() {
        let mut list: LinkedList<i32> = LinkedList::new();
        assert_eq!(list.unique(), 0);
        list.extend(vec![4, 4, 4, 4]);
        assert_eq!(list.unique(), 3);
        assert_eq!(values(&list), vec![4]);
    }

    #[test]
    fn test_reverse_keeps_cursors() {
        let mut list: LinkedList<i32> = vec![1, 2, 3, 4, 5].into_iter().collect();
        let first = list.begin();
        list.reverse();
        assert_eq!(values(&list), vec![5, 4, 3, 2, 1]);
        assert_eq!(list.get(first), Ok(&1));
        assert_eq!(list.successor(first), Ok(list.end()));

        let mut empty: LinkedList<i32> = LinkedList::new();
        empty.reverse();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_swap() {
        let mut list: LinkedList<i32> = vec![1, 5, 8, 100].into_iter().collect();
        let mut other = LinkedList::new();
        let cursor = list.begin();
        let end = list.end();
        list.swap(&mut other);
        assert!(list.is_empty());
        assert_eq!(values(&other), vec![1, 5, 8, 100]);
        assert_eq!(other.get(cursor), Ok(&1));
        assert_eq!(list.get(cursor), Err(Error::InvalidCursor));
        assert_eq!(list.get(end), Err(Error::EndOfContainer));
        assert_eq!(other.get(end), Err(Error::InvalidCursor));
        let last = other.predecessor(other.end()).unwrap();
        assert_eq!(other.get(last), Ok(&100));
    }

    #[test]
    fn test_splice_moves_nodes() {
        let mut list: LinkedList<i32> = vec![1, 2].into_iter().collect();
        let mut other: LinkedList<i32> = vec![7, 8].into_iter().collect();
        let seven = other.begin();
        let eight = other.successor(seven).unwrap();
        list.splice(list.end(), &mut other).unwrap();

        assert_eq!(values(&list), vec![1, 2, 7, 8]);
        assert_eq!(list.get(seven), Ok(&7));
        assert_eq!(other.get(seven), Err(Error::InvalidCursor));
        assert_eq!(list.successor(seven), Ok(eight));
        assert_eq!(list.successor(eight), Ok(list.end()));
        assert_eq!(list.predecessor(list.end()), Ok(eight));
        assert_eq!(list.erase(eight), Ok(8));
        assert_eq!(values(&list), vec![1, 2, 7]);

        other.push_back(3);
        assert_eq!(values(&other), vec![3]);
    }

    #[test]
    fn test_splice_into_empty_keeps_cursors() {
        let mut list: LinkedList<i32> = LinkedList::new();
        let mut other: LinkedList<i32> = vec![7, 8].into_iter().collect();
        let eight = other.successor(other.begin()).unwrap();
        let end = list.end();
        list.splice(end, &mut other).unwrap();

        assert_eq!(values(&list), vec![7, 8]);
        assert_eq!(list.get(eight), Ok(&8));
        assert_eq!(list.successor(eight), Ok(end));
        assert!(other.is_empty());
        assert_eq!(other.get(eight), Err(Error::InvalidCursor));
    }

    #[test]
    fn test_splice_range_moves_nodes() {
        let mut list: LinkedList<i32> = vec![1, 2].into_iter().collect();
        let mut other: LinkedList<i32> = (10..15).collect();
        let eleven = other.successor(other.begin()).unwrap();
        let twelve = other.successor(eleven).unwrap();
        let thirteen = other.successor(twelve).unwrap();
        list.splice_range(list.begin(), &mut other, eleven, thirteen).unwrap();

        assert_eq!(values(&list), vec![11, 12, 1, 2]);
        assert_eq!(values(&other), vec![10, 13, 14]);
        assert_eq!(list.get(twelve), Ok(&12));
        assert_eq!(list.predecessor(eleven), Err(Error::BeginningOfContainer));
        assert_eq!(other.get(thirteen), Ok(&13));
        assert_eq!(other.predecessor(thirteen), Ok(other.begin()));

        list.splice_range(list.end(), &mut other, thirteen, thirteen).unwrap();
        assert_eq!(values(&other), vec![10, 13, 14]);
    }

    #[test]
    fn test_merge_moves_nodes() {
        let mut list: LinkedList<i32> = vec![1, 4].into_iter().collect();
        let mut other: LinkedList<i32> = vec![2, 3, 5].into_iter().collect();
        let three = other.successor(other.begin()).unwrap();
        let five = other.predecessor(other.end()).unwrap();
        list.merge(&mut other);

        assert_eq!(values(&list), vec![1, 2, 3, 4, 5]);
        assert_eq!(list.get(three), Ok(&3));
        assert_eq!(list.get(list.successor(three).unwrap()), Ok(&4));
        assert_eq!(list.predecessor(list.end()), Ok(five));
        assert_eq!(other.get(five), Err(Error::InvalidCursor));
    }

    #[test]
    fn test_clone_and_take() {
        let mut list: LinkedList<i32> = vec![1, 2, 3].into_iter().collect();
        let copy = list.clone();
        assert_eq!(copy.get(list.begin()), Err(Error::InvalidCursor));
        let moved = std::mem::take(&mut list);
        assert!(list.is_empty());
        assert_eq!(moved, copy);
        assert_eq!(format!("{:?}", moved), "[1, 2, 3]");
    }

    #[test]
    fn test_clear() {
        let mut list: LinkedList<i32> = vec![1, 2, 3, 4].into_iter().collect();
        list.clear();
        assert!(list.is_empty());
        list.push_back(1);
        assert_eq!(values(&list), vec![1]);
    }

    #[test]
    fn test_iter_double_ended() {
        let list: LinkedList<i32> = (0..5).collect();
        let mut iter = list.iter();
        assert_eq!(iter.len(), 5);
        assert_eq!(iter.next(), Some(&0));
        assert_eq!(iter.next_back(), Some(&4));
        assert_eq!(iter.next_back(), Some(&3));
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn test_into_iter() {
        let list: LinkedList<i32> = (0..4).collect();
        assert_eq!(list.into_iter().rev().collect::<Vec<i32>>(), vec![3, 2, 1, 0]);
    }
}
