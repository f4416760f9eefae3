//! Self-balancing binary search tree that uses a color bit to ensure that the tree remains
//! approximately balanced during insertions and deletions.
//!
//! The tree backs an ordered set of unique keys and an ordered multiset. Both are addressed by
//! cursors that survive unrelated insertions and erasures.

mod iter;
mod multiset;
mod node;
mod set;
mod tree;

pub use self::iter::{RedBlackIntoIter, RedBlackIter};
pub use self::multiset::RedBlackMultiSet;
pub use self::set::RedBlackSet;
