use crate::arena::Handle;
use crate::red_black_tree::tree::Tree;

/// An iterator over the keys of a `RedBlackSet<T, C>` or `RedBlackMultiSet<T, C>`.
///
/// This iterator traverses the keys in-order and yields immutable references. It can be driven
/// from both ends.
pub struct RedBlackIter<'a, T, C> {
    tree: &'a Tree<T, C>,
    front: Option<Handle>,
    // exclusive; `None` is one past the maximum
    back: Option<Handle>,
    len: usize,
}

impl<'a, T, C> RedBlackIter<'a, T, C> {
    pub(crate) fn new(
        tree: &'a Tree<T, C>,
        front: Option<Handle>,
        back: Option<Handle>,
        len: usize,
    ) -> Self {
        RedBlackIter {
            tree,
            front,
            back,
            len,
        }
    }
}

impl<'a, T, C> Iterator for RedBlackIter<'a, T, C>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let node = self.front?;
        self.front = self.tree.successor(node);
        self.len -= 1;
        Some(self.tree.key(node))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T, C> DoubleEndedIterator for RedBlackIter<'a, T, C>
where
    T: 'a,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let node = match self.back {
            None => self.tree.max(),
            Some(back) => self.tree.predecessor(back),
        }?;
        self.back = Some(node);
        self.len -= 1;
        Some(self.tree.key(node))
    }
}

impl<'a, T, C> ExactSizeIterator for RedBlackIter<'a, T, C> where T: 'a {}

impl<'a, T, C> Clone for RedBlackIter<'a, T, C> {
    fn clone(&self) -> Self {
        RedBlackIter {
            tree: self.tree,
            front: self.front,
            back: self.back,
            len: self.len,
        }
    }
}

/// An owning iterator for `RedBlackSet<T, C>` or `RedBlackMultiSet<T, C>`.
///
/// This iterator traverses the keys in-order and yields owned keys.
pub struct RedBlackIntoIter<T, C> {
    tree: Tree<T, C>,
}

impl<T, C> RedBlackIntoIter<T, C> {
    pub(crate) fn new(tree: Tree<T, C>) -> Self {
        RedBlackIntoIter { tree }
    }
}

impl<T, C> Iterator for RedBlackIntoIter<T, C> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.tree.min().map(|node| self.tree.remove(node))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.tree.len(), Some(self.tree.len()))
    }
}

impl<T, C> DoubleEndedIterator for RedBlackIntoIter<T, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.tree.max().map(|node| self.tree.remove(node))
    }
}

impl<T, C> ExactSizeIterator for RedBlackIntoIter<T, C> {}

#[cfg(test)]
mod tests {
    use super::{RedBlackIntoIter, RedBlackIter};
    use crate::red_black_tree::tree::tests::check_invariants;
    use crate::red_black_tree::tree::Tree;
    use compare::natural;
    use rand::{Rng, SeedableRng, XorShiftRng};

    #[test]
    fn test_into_iter_next_back_drain() {
        let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
        let mut tree = Tree::new(natural());
        for _ in 0..300 {
            tree.insert(rng.gen_range(0u32, 50), false);
        }
        let mut expected = check_invariants(&tree, false);

        let mut iter = RedBlackIntoIter::new(tree);
        while !expected.is_empty() {
            if rng.gen_range(0, 4) == 0 {
                assert_eq!(iter.next(), Some(expected.remove(0)));
            } else {
                assert_eq!(iter.next_back(), expected.pop());
            }
            assert_eq!(iter.len(), expected.len());
            assert_eq!(check_invariants(&iter.tree, false), expected);
        }
        assert_eq!(iter.next_back(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_iter_counts_down_from_both_ends() {
        let mut tree = Tree::new(natural());
        for key in 0..6 {
            tree.insert(key, true);
        }
        let mut iter = RedBlackIter::new(&tree, tree.min(), None, tree.len());
        assert_eq!(iter.size_hint(), (6, Some(6)));
        assert_eq!(iter.next_back(), Some(&5));
        assert_eq!(iter.next(), Some(&0));
        assert_eq!(iter.len(), 4);
        let copy = iter.clone();
        assert_eq!(iter.by_ref().rev().collect::<Vec<&i32>>(), vec![&4, &3, &2, &1]);
        assert_eq!(iter.len(), 0);
        assert_eq!(copy.len(), 4);
    }
}
