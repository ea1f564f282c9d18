//! This crate provides a doubly-linked list with owned nodes, implemented as a
//! cyclic list around a ghost (sentinel) node.
//!
//! The [`List`] appends in constant time and addresses its elements by
//! position. Accessing, inserting or removing at an index walks from the
//! nearer end of the list, so it is cheap at both ends and *O*(*n*) in the
//! middle.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use sentinel_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::new();
//! list.add(1);
//! list.add(3);
//! list.add_at(1, 2); // becomes [1, 2, 3]
//! assert_eq!(list.get(1), Ok(&2));
//!
//! list.add_at(5, 6); // pads with defaults: [1, 2, 3, 0, 0, 6]
//! assert_eq!(list.len(), 6);
//!
//! assert_eq!(list.remove(3), Ok(0));
//! assert_eq!(list.set(3, 5), Ok(0));
//! assert_eq!(list, List::from_iter([1, 2, 3, 5, 6]));
//!
//! // out of range accesses are reported, not panicked on
//! let err = list.get(5).unwrap_err();
//! assert_eq!(err.index(), 5);
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//!          ┌─────────────────────────────────────────────────────────────────────┐
//!          ↓                                                     (Ghost) Node N  │
//!    ╔═══════════╗           ╔═══════════╗                        ┌───────────┐  │
//!    ║   next    ║ ────────→ ║   next    ║ ────────→ ┄┄ ────────→ │   next    │ ─┘
//!    ╟───────────╢           ╟───────────╢     Node 2, 3, ...     ├───────────┤
//! ┌─ ║   prev    ║ ←──────── ║   prev    ║ ←──────── ┄┄ ←──────── │   prev    │
//! │  ╟───────────╢           ╟───────────╢                        ├───────────┤
//! │  ║ payload T ║           ║ payload T ║                        ┊ uninit T  ┊
//! │  ╚═══════════╝           ╚═══════════╝                        └╌╌╌╌╌╌╌╌╌╌╌┘
//! │      Node 0                  Node 1                               ↑   ↑
//! └───────────────────────────────────────────────────────────────────┘   │
//! ╔═══════════╗                                                           │
//! ║   ghost   ║ ──────────────────────────────────────────────────────────┘
//! ╟───────────╢
//! ║    len    ║
//! ╚═══════════╝
//!     List
//! ```
//! The `List` contains:
//! - a pointer `ghost` that points to the ghost node;
//! - a length field `len` counting the elements.
//!
//! Each node of the list `List<T>` is allocated on heap, which contains:
//! - the `next` pointer that points to the next element (or the ghost node if it
//!   is the last element in the list);
//! - the `prev` pointer that points to the previous element (or the ghost node if
//!   it is the first element in the list);
//! - the actual payload `T`. The payload slot of the ghost node is never
//!   initialized, so creating a list never constructs a `T`.
//!
//! Initially, there is a ghost node in an empty list, of which the `next` and `prev`
//! pointer point to itself.
//!
//! As elements are inserted into the list, `ghost.next` points to the first element,
//! and `ghost.prev` points to the last element of the list.
//!
//! In convention, in a list with length *n*, the nodes are indexed by 0, 1, ...,
//! *n* - 1, and the ghost node is always indexed by *n*. (In an empty list, the
//! ghost nodes is indexed by 0, which is equal to its length 0).
//!
//! # Failure Safety
//!
//! Operations that run user code part-way through ([`Clone::clone_from`] and
//! padded [`List::add_at`]) build their result in a separate list and commit it
//! with an operation that cannot fail. If `T::clone` or `T::default` panics,
//! the list is left exactly as it was.
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] and [`IterMut`] iterators. These are
//! double-ended iterators and iterate the list like an array (fused and non-cyclic).
//! [`IterMut`] provides mutability of the elements (but not the linked structure of
//! the list).
//!
//! ## Examples
//!
//! ```
//! use sentinel_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), Some(&3));
//! assert_eq!(iter.next(), None);
//! assert_eq!(iter.next(), None); // Fused and non-cyclic
//!
//! list.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(Vec::from_iter(list), vec![2, 4, 6]);
//! ```
//!
//! # Cursors
//!
//! Beside iteration, the cursors [`Cursor`] and [`CursorMut`] walk a list the
//! way a bidirectional position does: [`List::begin`] is the first element and
//! [`List::end`] is the ghost node. In a list with length *n*, there are *n* + 1
//! valid locations for the cursor.
//!
//! Cursors are cyclic: moving forward from the ghost node lands on the first
//! element again.
//!
//! ## Examples
//!
//! ```
//! use sentinel_list::List;
//! use std::iter::FromIterator;
//!
//! let list = List::from_iter([1, 2, 3]);
//! let mut cursor = list.begin();
//! let mut sum = 0;
//! while cursor != list.end() {
//!     sum += cursor.current().unwrap();
//!     cursor.move_next();
//! }
//! assert_eq!(sum, 6);
//!
//! cursor.move_next(); // wraps through the ghost node
//! assert_eq!(cursor, list.begin());
//! ```
//!
//! # Logging
//!
//! With the default `tracing` feature, the crate emits `debug` events for out
//! of range accesses and `trace` events for padding and copy commits. No
//! subscriber is installed by the crate.
//!
//! [`List`]: crate::List
//! [`Iter`]: crate::Iter
//! [`IterMut`]: crate::IterMut
//! [`Cursor`]: crate::Cursor
//! [`CursorMut`]: crate::CursorMut

#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($($arg:tt)+) => {
        tracing::trace!($($arg)+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($($arg:tt)+) => {};
}

#[cfg(feature = "tracing")]
macro_rules! debug_event {
    ($($arg:tt)+) => {
        tracing::debug!($($arg)+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! debug_event {
    ($($arg:tt)+) => {};
}

#[doc(inline)]
pub use error::OutOfRange;
#[doc(inline)]
pub use list::cursor::{Cursor, CursorMut};
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::List;

mod error;
pub mod list;
