use std::fmt::{Debug, Formatter};
use std::iter;
use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;

use crate::error::OutOfRange;
use crate::list::cursor::{Cursor, CursorMut};
use crate::list::node::{new_ghost, release_ghost, Node};
use crate::{IntoIter, Iter, IterMut};

pub mod cursor;
pub mod iterator;

mod node;
mod traits;

/// The `List` is a doubly-linked list with owned nodes, implemented as a cyclic
/// list around a ghost (sentinel) node.
///
/// Appending takes constant time. Accessing, inserting or removing at an index
/// walks from the nearer end of the list, so it takes *O*(min(*i*, *n* - *i*))
/// time and is constant at both ends.
///
/// The `List` contains:
/// - a pointer `ghost` that points to the ghost node, whose `next` is the first
///   element and whose `prev` is the last element (both are the ghost itself
///   when the list is empty);
/// - a length field `len` counting the elements, the ghost node excluded.
///
/// Operations that may fail part-way (copying, padded insertion) build their
/// result in a separate list first and commit it with [`List::swap`] or
/// [`List::append`], which never fail. A panic in `T::clone` or `T::default`
/// therefore leaves the list as it was.
pub struct List<T> {
    ghost: NonNull<Node<T>>,
    /// the number of elements, the ghost node excluded
    pub(crate) len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

/// Nodes fragment detached from a list, used when splicing a whole list into
/// another one.
///
/// When detached from a list, reading of `front.prev` and `back.next`
/// is invalid.
pub(crate) struct DetachedNodes<T> {
    pub(crate) front: NonNull<Node<T>>,
    pub(crate) back: NonNull<Node<T>>,
    pub(crate) len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

// private methods
impl<T> List<T> {
    pub(crate) fn ghost_node(&self) -> NonNull<Node<T>> {
        self.ghost
    }
    pub(crate) fn front_node(&self) -> NonNull<Node<T>> {
        // SAFETY: `ghost.next` is always valid (either `ghost` itself, or the first element
        // in the list).
        unsafe { Node::next_of(self.ghost) }
    }
    pub(crate) fn back_node(&self) -> NonNull<Node<T>> {
        // SAFETY: `ghost.prev` is always valid (either `ghost` itself, or the last element
        // in the list).
        unsafe { Node::prev_of(self.ghost) }
    }

    /// Locate the node at `at`, walking from the nearer end of the list.
    ///
    /// By convention, the ghost node is at `len`.
    fn node_at(&self, at: usize) -> NonNull<Node<T>> {
        debug_assert!(at <= self.len, "node index past the ghost node");
        // SAFETY: the walk stays inside the cyclic chain and never takes more
        // steps than there are nodes between the ghost and the target.
        unsafe {
            if at <= self.len / 2 {
                let mut node = self.front_node();
                for _ in 0..at {
                    node = Node::next_of(node);
                }
                node
            } else {
                let mut node = self.ghost_node();
                for _ in at..self.len {
                    node = Node::prev_of(node);
                }
                node
            }
        }
    }

    fn out_of_range(&self, index: usize) -> OutOfRange {
        debug_event!(index, len = self.len, "index out of range");
        OutOfRange::new(index, self.len)
    }

    fn range_check(&self, index: usize) -> Result<(), OutOfRange> {
        if index >= self.len {
            return Err(self.out_of_range(index));
        }
        Ok(())
    }

    /// Attach a new node holding `element` right before `next`.
    ///
    /// It is unsafe because it does not check whether `next` belongs to the list.
    unsafe fn insert_before(&mut self, next: NonNull<Node<T>>, element: T) -> NonNull<Node<T>> {
        let prev = Node::prev_of(next);
        #[cfg(debug_assertions)]
        node::assert_adjacent(prev, next);
        let inserted = Node::new_between(element, prev, next);
        self.len += 1;
        #[cfg(debug_assertions)]
        {
            node::assert_adjacent(prev, inserted);
            node::assert_adjacent(inserted, next);
        }
        inserted
    }

    /// Detach a single node `node` from the list, free it and return its element.
    ///
    /// It is unsafe because it does not check whether `node` is a non-ghost node
    /// of the list.
    ///
    /// If the `node` does not belong to the list, this function call will make
    /// the list ill-formed.
    unsafe fn detach_node(&mut self, node: NonNull<Node<T>>) -> T {
        self.len -= 1;
        Node::unlink(node)
    }

    /// Attach a range of detached nodes to the list, between `prev` and `next`.
    ///
    /// It is unsafe because it does not check whether `prev` and `next` belongs
    /// to the list, or whether the `prev` and `next` is adjacent (only in
    /// `#[cfg(debug_assertions)]`).
    ///
    /// If the `prev` and `next` does not belong to the list, or they are not
    /// adjacent nodes, this function call will make the list ill-formed.
    unsafe fn attach_nodes(
        &mut self,
        prev: NonNull<Node<T>>,
        next: NonNull<Node<T>>,
        detached: DetachedNodes<T>,
    ) {
        #[cfg(debug_assertions)]
        node::assert_adjacent(prev, next);
        Node::link(prev, detached.front);
        Node::link(detached.back, next);
        self.len += detached.len;
        #[cfg(debug_assertions)]
        {
            node::assert_adjacent(prev, detached.front);
            node::assert_adjacent(detached.back, next);
        }
    }

    /// Detach all nodes from the list, and return the detached nodes, or return
    /// `None` if the list is empty.
    ///
    /// It is safe because `self.front_node()..=self.back_node()` is a valid range.
    fn detach_all_nodes(&mut self) -> Option<DetachedNodes<T>> {
        if self.is_empty() {
            return None;
        }
        let detached = DetachedNodes {
            front: self.front_node(),
            back: self.back_node(),
            len: mem::take(&mut self.len),
            _marker: PhantomData,
        };
        // SAFETY: the ghost node is always valid.
        unsafe { Node::link(self.ghost, self.ghost) };
        Some(detached)
    }
}

impl<T> List<T> {
    /// Create an empty `List`
    ///
    /// Only the ghost node is allocated; no element is constructed, so `T`
    /// does not need to implement `Default`.
    ///
    /// # Examples
    /// ```
    /// use sentinel_list::List;
    /// let list: List<u32> = List::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            ghost: new_ghost(),
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Returns `true` if the `List` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.is_empty());
    ///
    /// list.add("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.front_node() == self.ghost_node()
    }

    /// Returns the number of elements in the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.add(2);
    /// assert_eq!(list.len(), 1);
    ///
    /// list.add_at(0, 1);
    /// assert_eq!(list.len(), 2);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes all elements from the `List`, one by one from the front.
    ///
    /// The ghost node is kept, so the list is back in the state of
    /// [`List::new`]. Clearing an empty list does nothing.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2]);
    /// assert_eq!(list.len(), 2);
    ///
    /// list.clear();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.front(), None);
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Provides a reference to the front element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.add(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.begin().current()
    }

    /// Provides a reference to the back element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.back(), None);
    ///
    /// list.add(1);
    /// list.add(2);
    /// assert_eq!(list.back(), Some(&2));
    /// ```
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.iter().next_back()
    }

    /// Appends an element to the back of the list.
    ///
    /// The new node is linked between the last element and the ghost node.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::new();
    /// list.add(1);
    /// list.add(3);
    /// assert_eq!(list.get(0), Ok(&1));
    /// assert_eq!(list.get(1), Ok(&3));
    /// ```
    pub fn add(&mut self, value: T) {
        // SAFETY: the ghost node belongs to the list.
        unsafe { self.insert_before(self.ghost_node(), value) };
    }

    /// Inserts `value` at `index`, shifting the elements at and after `index`
    /// one position towards the back.
    ///
    /// If `index` is past the end of the list, the gap is filled with
    /// `T::default()` first, so that `value` ends up at `index`. The padding
    /// and `value` are built in a separate list and spliced in at once: if
    /// `T::default` panics, the list is left unchanged.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(min(*index*, *n* - *index*)) time
    /// for `index <= len`, and in *O*(*index* - *n*) time otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::new();
    /// list.add_at(2, "c");
    /// assert_eq!(list.len(), 3);
    /// assert_eq!(list.get(0), Ok(&""));
    /// assert_eq!(list.get(2), Ok(&"c"));
    ///
    /// list.add_at(1, "b");
    /// assert_eq!(Vec::from_iter(list), vec!["", "b", "", "c"]);
    /// ```
    pub fn add_at(&mut self, index: usize, value: T)
    where
        T: Default,
    {
        if index == self.len {
            return self.add(value);
        }
        if index < self.len {
            let next = self.node_at(index);
            // SAFETY: `next` is a node of the list.
            unsafe { self.insert_before(next, value) };
            return;
        }
        trace_event!(from = self.len, to = index, "padding list with default elements");
        let mut padded: List<T> = iter::repeat_with(T::default)
            .take(index - self.len)
            .collect();
        padded.add(value);
        self.append(&mut padded);
    }

    /// Inserts `value` at `index`, or returns an error if `index > len`.
    ///
    /// Unlike [`List::add_at`], this never pads the list, so `T` does not need
    /// to implement `Default`. On error the list is unchanged and `value` is
    /// dropped.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(min(*index*, *n* - *index*)) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    ///
    /// assert!(list.insert(2, 4).is_ok());
    /// assert!(list.insert(4, 5).is_ok());
    /// assert_eq!(list.insert(9, 6).unwrap_err().index(), 9);
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 4, 3, 5]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), OutOfRange> {
        if index > self.len {
            return Err(self.out_of_range(index));
        }
        let next = self.node_at(index);
        // SAFETY: `next` is a node of the list (possibly the ghost node).
        unsafe { self.insert_before(next, value) };
        Ok(())
    }

    /// Returns a reference to the element at `index`, or an error if
    /// `index >= len`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(min(*index*, *n* - *index*)) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// assert_eq!(list.get(1), Ok(&2));
    /// assert_eq!(list.get(3).unwrap_err().index(), 3);
    /// ```
    pub fn get(&self, index: usize) -> Result<&T, OutOfRange> {
        self.range_check(index)?;
        // SAFETY: `index < len`, so the node is not the ghost node and holds
        // a valid element.
        Ok(unsafe { &(*self.node_at(index).as_ptr()).element })
    }

    /// Returns a mutable reference to the element at `index`, or an error if
    /// `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// *list.get_mut(0).unwrap() = 10;
    /// assert_eq!(list.front(), Some(&10));
    /// assert!(list.get_mut(3).is_err());
    /// ```
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, OutOfRange> {
        self.range_check(index)?;
        // SAFETY: `index < len`, so the node is not the ghost node and holds
        // a valid element. The returned borrow is tied to `&mut self`.
        Ok(unsafe { &mut (*self.node_at(index).as_ptr()).element })
    }

    /// Overwrites the element at `index` with `value` and returns the previous
    /// element, or returns an error if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// assert_eq!(list.set(1, 20), Ok(2));
    /// assert_eq!(list.get(1), Ok(&20));
    /// assert!(list.set(3, 40).is_err());
    /// ```
    pub fn set(&mut self, index: usize, value: T) -> Result<T, OutOfRange> {
        self.get_mut(index).map(|element| mem::replace(element, value))
    }

    /// Removes the element at `index` and returns it, or returns an error if
    /// `index >= len`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(min(*index*, *n* - *index*)) time,
    /// so removing the first or the last element takes *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 3, 4, 7, 99]);
    /// assert_eq!(list.remove(2), Ok(4));
    /// assert_eq!(Vec::from_iter(list.iter().copied()), vec![1, 3, 7, 99]);
    /// assert!(list.remove(4).is_err());
    /// ```
    pub fn remove(&mut self, index: usize) -> Result<T, OutOfRange> {
        self.range_check(index)?;
        let node = self.node_at(index);
        // SAFETY: `index < len`, so `node` is a non-ghost node of the list.
        Ok(unsafe { self.detach_node(node) })
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_front(), None);
    ///
    /// list.add(1);
    /// list.add(3);
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), Some(3));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the list is not empty, so the front node is not the ghost node.
        Some(unsafe { self.detach_node(self.front_node()) })
    }

    /// Removes the last element and returns it, or `None` if the list is
    /// empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_back(), None);
    /// list.add(1);
    /// list.add(3);
    /// assert_eq!(list.pop_back(), Some(3));
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the list is not empty, so the back node is not the ghost node.
        Some(unsafe { self.detach_node(self.back_node()) })
    }

    /// Exchanges the contents of two lists.
    ///
    /// Only the ghost pointers and lengths are swapped; no node is touched.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time and never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut a = List::from_iter([1, 2]);
    /// let mut b = List::from_iter([3]);
    /// a.swap(&mut b);
    /// assert_eq!(a, List::from_iter([3]));
    /// assert_eq!(b, List::from_iter([1, 2]));
    /// ```
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.ghost, &mut other.ghost);
        mem::swap(&mut self.len, &mut other.len);
    }

    /// Moves all elements from `other` to the end of the list.
    ///
    /// This reuses all the nodes from `other` and moves them into `self`. After
    /// this operation, `other` becomes empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list1 = List::new();
    /// list1.add('a');
    ///
    /// let mut list2 = List::new();
    /// list2.add('b');
    /// list2.add('c');
    ///
    /// list1.append(&mut list2);
    ///
    /// let mut iter = list1.iter();
    /// assert_eq!(iter.next(), Some(&'a'));
    /// assert_eq!(iter.next(), Some(&'b'));
    /// assert_eq!(iter.next(), Some(&'c'));
    /// assert!(iter.next().is_none());
    ///
    /// assert!(list2.is_empty());
    /// ```
    pub fn append(&mut self, other: &mut Self) {
        if let Some(detached) = other.detach_all_nodes() {
            // `self.back_node()` and `self.ghost_node()` are valid
            // nodes in the list and they are adjacent, so it is safe.
            unsafe { self.attach_nodes(self.back_node(), self.ghost_node(), detached) }
        }
    }

    /// Provides a cursor at the first element, or at the ghost node if the
    /// list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// let cursor = list.begin();
    /// assert_eq!(cursor.current(), Some(&1));
    ///
    /// let empty: List<i32> = List::new();
    /// assert_eq!(empty.begin(), empty.end());
    /// ```
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.front_node())
    }

    /// Provides a cursor at the ghost node, one past the last element.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.end();
    /// assert_eq!(cursor.current(), None);
    /// cursor.move_prev();
    /// assert_eq!(cursor.current(), Some(&3));
    /// ```
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.ghost_node())
    }

    /// Provides a cursor with mutable access to the elements, at the first
    /// element (or the ghost node if the list is empty).
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.begin_mut();
    /// while let Some(x) = cursor.current_mut() {
    ///     *x *= 10;
    ///     cursor.move_next();
    /// }
    /// assert_eq!(Vec::from_iter(list), vec![10, 20, 30]);
    /// ```
    pub fn begin_mut(&mut self) -> CursorMut<'_, T> {
        let front = self.front_node();
        CursorMut::new(self, front)
    }

    /// Provides a cursor with mutable access to the elements, at the ghost
    /// node.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.end_mut();
    /// cursor.move_prev();
    /// if let Some(x) = cursor.current_mut() {
    ///     *x = 5;
    /// }
    /// assert_eq!(list.back(), Some(&5));
    /// ```
    pub fn end_mut(&mut self) -> CursorMut<'_, T> {
        let ghost = self.ghost_node();
        CursorMut::new(self, ghost)
    }

    /// Provides a forward iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.add(0);
    /// list.add(1);
    /// list.add(2);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Provides a forward iterator with mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.add(0);
    /// list.add(1);
    /// list.add(2);
    ///
    /// for element in list.iter_mut() {
    ///     *element += 10;
    /// }
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&10));
    /// assert_eq!(iter.next(), Some(&11));
    /// assert_eq!(iter.next(), Some(&12));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
        // SAFETY: the ghost node was allocated by `new_ghost` and the list
        // is never used again.
        unsafe { release_ghost(self.ghost) };
    }
}

unsafe impl<T: Send> Send for List<T> {}

unsafe impl<T: Sync> Sync for List<T> {}

// Ensure that `List` and its read-only views are covariant in their type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: List<&'static str>) -> List<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn c<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
    fn d<'i, 'a>(x: Cursor<'i, &'static str>) -> Cursor<'i, &'a str> {
        x
    }
}
