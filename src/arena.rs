//! Object store that hands out process-wide unique handles.

use std::collections::HashMap;
use std::ops::{Index, IndexMut};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_HANDLE: AtomicU64 = AtomicU64::new(0);

/// A handle to an object allocated in a `TypedArena<T>`.
///
/// Handles are unique across every arena of the process and are never reused, so a handle to a
/// freed object is rejected instead of aliasing a newer one. A handle keeps referring to its
/// object when the object is moved to another arena with `TypedArena::adopt`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Handle(u64);

impl Handle {
    fn next() -> Self {
        Handle(NEXT_HANDLE.fetch_add(1, Ordering::Relaxed))
    }
}

/// An allocator that exclusively owns objects of a single type and addresses them through
/// `Handle`s.
///
/// All objects are dropped when the arena is dropped or cleared.
///
/// # Examples
///
/// ```
/// use ordered_collections::arena::TypedArena;
///
/// let mut arena = TypedArena::new();
///
/// let x = arena.allocate(1);
/// assert_eq!(arena[x], 1);
///
/// arena[x] += 1;
/// assert_eq!(arena[x], 2);
///
/// assert_eq!(arena.free(x), 2);
/// assert_eq!(arena.get(x), None);
/// ```
pub struct TypedArena<T> {
    objects: HashMap<Handle, T>,
}

impl<T> TypedArena<T> {
    /// Constructs a new, empty `TypedArena<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::arena::TypedArena;
    ///
    /// let arena: TypedArena<u32> = TypedArena::new();
    /// assert!(arena.is_empty());
    /// ```
    pub fn new() -> Self {
        TypedArena {
            objects: HashMap::new(),
        }
    }

    /// Constructs a new, empty `TypedArena<T>` with room for `capacity` objects before it
    /// reallocates.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::arena::TypedArena;
    ///
    /// let arena: TypedArena<u32> = TypedArena::with_capacity(1024);
    /// assert_eq!(arena.len(), 0);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        TypedArena {
            objects: HashMap::with_capacity(capacity),
        }
    }

    /// Allocates an object in the arena and returns its handle.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new();
    /// let x = arena.allocate(0);
    /// assert!(arena.contains(x));
    /// ```
    pub fn allocate(&mut self, value: T) -> Handle {
        let handle = Handle::next();
        self.objects.insert(handle, value);
        handle
    }

    /// Deallocates an object in the arena and returns it.
    ///
    /// # Panics
    ///
    /// Panics if the handle does not refer to a live object of this arena.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new();
    /// let x = arena.allocate(0);
    /// assert_eq!(arena.free(x), 0);
    /// ```
    pub fn free(&mut self, handle: Handle) -> T {
        match self.objects.remove(&handle) {
            Some(value) => value,
            None => panic!("Error: attempting to free an invalid or vacant block."),
        }
    }

    /// Moves the object behind `handle` out of `other` and into this arena. The handle keeps
    /// referring to the object.
    ///
    /// # Panics
    ///
    /// Panics if the handle does not refer to a live object of `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new();
    /// let mut other = TypedArena::new();
    /// let x = other.allocate(String::from("moved"));
    ///
    /// arena.adopt(&mut other, x);
    /// assert_eq!(arena[x], "moved");
    /// assert!(!other.contains(x));
    /// ```
    pub fn adopt(&mut self, other: &mut TypedArena<T>, handle: Handle) {
        let value = other.free(handle);
        self.objects.insert(handle, value);
    }

    /// Returns `true` if the handle refers to a live object in this arena.
    pub fn contains(&self, handle: Handle) -> bool {
        self.objects.contains_key(&handle)
    }

    /// Returns an immutable reference to an object in the arena. Returns `None` if the handle
    /// does not refer to a live object of this arena.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new();
    /// let x = arena.allocate(0);
    /// assert_eq!(arena.get(x), Some(&0));
    /// ```
    pub fn get(&self, handle: Handle) -> Option<&T> {
        self.objects.get(&handle)
    }

    /// Returns a mutable reference to an object in the arena. Returns `None` if the handle does
    /// not refer to a live object of this arena.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new();
    /// let x = arena.allocate(0);
    /// *arena.get_mut(x).unwrap() = 1;
    /// assert_eq!(arena.get(x), Some(&1));
    /// ```
    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut T> {
        self.objects.get_mut(&handle)
    }

    /// Returns the number of live objects in the arena.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns `true` if the arena holds no live objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Drops every object in the arena. Handles issued before the call are no longer valid.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new();
    /// let x = arena.allocate(0);
    /// arena.clear();
    /// assert!(arena.is_empty());
    /// assert_eq!(arena.get(x), None);
    /// ```
    pub fn clear(&mut self) {
        self.objects.clear();
    }
}

impl<T> Default for TypedArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<Handle> for TypedArena<T> {
    type Output = T;

    fn index(&self, handle: Handle) -> &Self::Output {
        self.get(handle).expect("Error: handle does not refer to a live object.")
    }
}

impl<T> IndexMut<Handle> for TypedArena<T> {
    fn index_mut(&mut self, handle: Handle) -> &mut Self::Output {
        self.get_mut(handle)
            .expect("Error: handle does not refer to a live object.")
    }
}
