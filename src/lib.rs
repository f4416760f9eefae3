//! Ordered collections built on a red black tree, and a doubly linked list.
//!
//! Every container hands out `Cursor`s: stable positions that can be dereferenced, stepped
//! forwards and backwards, and passed back to the container to erase or insert. Cursor misuse,
//! such as stepping past the end, is reported as an `Error` instead of undefined behavior.
//!
//! # Examples
//!
//! ```
//! use ordered_collections::Error;
//! use ordered_collections::red_black_tree::RedBlackSet;
//!
//! let mut set: RedBlackSet<u32> = vec![45, 48, 52, 53, 54].into_iter().collect();
//! let (cursor, inserted) = set.insert(50);
//! assert!(inserted);
//! assert_eq!(set.get(set.successor(cursor).unwrap()), Ok(&52));
//! assert_eq!(set.successor(set.end()), Err(Error::EndOfContainer));
//! ```

pub mod arena;
mod cursor;
pub mod error;
pub mod linked_list;
pub mod red_black_tree;
mod serialize;

pub use crate::cursor::Cursor;
pub use crate::error::{Error, Result};
