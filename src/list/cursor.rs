use crate::list::node::Node;
use crate::list::List;
use std::fmt;
use std::fmt::Formatter;
use std::ptr::NonNull;

/// A read-only position in a `List`.
///
/// A `Cursor` is the bidirectional counterpart of an iterator: it points at
/// one node and can step to the next or the previous one. In a list with
/// length *n*, there are *n* + 1 positions: the *n* elements and the ghost
/// node, which is the position returned by [`List::end`].
///
/// Cursors are only handed out by [`List::begin`] and [`List::end`]. They
/// borrow the list, so the list cannot be modified while a cursor is alive.
///
/// `Cursor` is `Copy`: keep a copy before moving to get the old position
/// back.
///
/// # Examples
///
/// Here is a simple example showing how the cursors work. (The ghost node of the
/// list is denoted by `#`).
/// ```
/// use sentinel_list::List;
/// use std::iter::FromIterator;
///
/// // Create a list: [ A B C D #]
/// let list = List::from_iter(['A', 'B', 'C', 'D']);
///
/// // Create a cursor at start: [|A B C D #]
/// let mut cursor = list.begin();
/// assert_eq!(cursor.current(), Some(&'A'));
///
/// // Move cursor forward: [ A|B C D #]
/// let old = cursor;
/// cursor.move_next();
/// assert_eq!(cursor.current(), Some(&'B'));
/// assert_ne!(cursor, old);
///
/// // Walk to the end: [ A B C D|#]
/// let mut count = 1;
/// while cursor != list.end() {
///     cursor.move_next();
///     count += 1;
/// }
/// assert_eq!(count, 4);
/// assert_eq!(cursor.current(), None);
///
/// // Move cursor backward: [ A B C|D #]
/// cursor.move_prev();
/// assert_eq!(cursor.current(), Some(&'D'));
/// ```
pub struct Cursor<'a, T: 'a> {
    pub(crate) current: NonNull<Node<T>>,
    pub(crate) list: &'a List<T>,
}

impl<'a, T: 'a> Clone for Cursor<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T: 'a> Copy for Cursor<'a, T> {}

/// Compare cursors by the node they point to.
///
/// # Examples
/// ```
/// use sentinel_list::List;
/// use std::iter::FromIterator;
///
/// let list = List::from_iter([1, 2, 3]);
/// let cursor1 = list.begin();
/// let mut cursor2 = cursor1;
/// assert_eq!(cursor1, cursor2);
///
/// cursor2.move_next();
/// assert_ne!(cursor1, cursor2);
///
/// cursor2.move_prev();
/// assert_eq!(cursor1, cursor2);
///
/// // Cursors of different lists never point to the same node.
/// let another_list = List::from_iter([1, 2, 3]);
/// assert_ne!(cursor1, another_list.begin());
/// ```
impl<'a, T: 'a> PartialEq for Cursor<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
    }
}

impl<'a, T: 'a> Eq for Cursor<'a, T> {}

/// A position in a `List` with mutable access to the element under it.
///
/// `CursorMut` moves like [`Cursor`], and additionally hands out `&mut T`
/// for the element it points at. It never changes the linking structure of
/// the list.
///
/// Since it borrows the list mutably, only one `CursorMut` can exist at a
/// time. Use [`CursorMut::is_end`] to detect the ghost node, or
/// [`CursorMut::as_cursor`] to compare with another position.
///
/// # Examples
///
/// ```compile_fail
/// use sentinel_list::List;
/// use std::iter::FromIterator;
///
/// let mut list = List::from_iter([1, 2, 3]);
/// let mut cursor = list.begin_mut();
/// println!("{:?}", list.back());
/// println!("{:?}", cursor.current());
/// ```
pub struct CursorMut<'a, T: 'a> {
    pub(crate) current: NonNull<Node<T>>,
    pub(crate) list: &'a mut List<T>,
}

macro_rules! impl_cursor {
    ($CURSOR:ident) => {
        impl<'a, T: 'a> $CURSOR<'a, T> {
            /// Returns `true` if the cursor is at the ghost node, i.e. one
            /// past the last element.
            ///
            /// This operation should compute in *O*(*1*) time.
            pub fn is_end(&self) -> bool {
                self.current == self.list.ghost_node()
            }

            /// Move the cursor to the next node.
            ///
            /// There is no bounds check: moving forward from the ghost node
            /// wraps around to the first element.
            ///
            /// This operation should compute in *O*(*1*) time.
            pub fn move_next(&mut self) {
                // SAFETY: `current.next` is always valid since it is a cyclic list.
                self.current = unsafe { Node::next_of(self.current) };
            }

            /// Move the cursor to the previous node.
            ///
            /// There is no bounds check: moving backward from the first
            /// element lands on the ghost node.
            ///
            /// This operation should compute in *O*(*1*) time.
            pub fn move_prev(&mut self) {
                // SAFETY: `current.prev` is always valid since it is a cyclic list.
                self.current = unsafe { Node::prev_of(self.current) };
            }
        }

        impl<'a, T: fmt::Debug + 'a> fmt::Debug for $CURSOR<'a, T> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($CURSOR))
                    .field("list", &self.list)
                    .field("current", &self.current())
                    .finish()
            }
        }
    };
}

impl_cursor!(CursorMut);
impl_cursor!(Cursor);

impl<'a, T: 'a> Cursor<'a, T> {
    pub(crate) fn new(list: &'a List<T>, current: NonNull<Node<T>>) -> Self {
        Self { current, list }
    }

    /// Return an immutable reference to the element at the cursor,
    /// or return `None` if it is located at the ghost node.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// assert_eq!(list.begin().current(), Some(&1));
    /// assert_eq!(list.end().current(), None);
    /// ```
    pub fn current(&self) -> Option<&'a T> {
        if self.is_end() {
            return None;
        }
        // SAFETY: it is safe because non-ghost nodes must hold a
        // valid element.
        unsafe { Some(&(*self.current.as_ptr()).element) }
    }
}

impl<'a, T: 'a> CursorMut<'a, T> {
    pub(crate) fn new(list: &'a mut List<T>, current: NonNull<Node<T>>) -> Self {
        Self { current, list }
    }

    /// Return an immutable reference to the element at the cursor,
    /// or return `None` if it is located at the ghost node.
    pub fn current(&self) -> Option<&T> {
        if self.is_end() {
            return None;
        }
        // SAFETY: it is safe because non-ghost nodes must hold a
        // valid element.
        unsafe { Some(&(*self.current.as_ptr()).element) }
    }

    /// Return a mutable reference to the element at the cursor,
    /// or return `None` if it is located at the ghost node.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    ///
    /// let mut cursor = list.begin_mut();
    /// *cursor.current_mut().unwrap() *= 5;
    /// assert_eq!(cursor.current(), Some(&5));
    ///
    /// // Cannot mutate the ghost node.
    /// assert!(list.end_mut().current_mut().is_none());
    /// ```
    pub fn current_mut(&mut self) -> Option<&mut T> {
        if self.is_end() {
            return None;
        }
        // SAFETY: it is safe because non-ghost nodes must hold a valid
        // element, and the borrow is tied to `&mut self`.
        unsafe { Some(&mut (*self.current.as_ptr()).element) }
    }

    /// Re-borrow the mutable cursor as a short-lived immutable one at the
    /// same position.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2]);
    /// let mut cursor = list.begin_mut();
    /// cursor.move_next();
    /// cursor.move_next();
    /// assert!(cursor.as_cursor() == cursor.view().end());
    /// ```
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self.list, self.current)
    }

    /// Convert the mutable cursor to an immutable one.
    pub fn into_cursor(self) -> Cursor<'a, T> {
        Cursor::new(self.list, self.current)
    }

    /// Temporarily view the list via an immutable reference.
    pub fn view(&self) -> &List<T> {
        self.list
    }
}

impl<'a, T: 'a> From<CursorMut<'a, T>> for Cursor<'a, T> {
    fn from(cursor: CursorMut<'a, T>) -> Self {
        cursor.into_cursor()
    }
}

unsafe impl<T: Sync> Send for Cursor<'_, T> {}

unsafe impl<T: Sync> Sync for Cursor<'_, T> {}

unsafe impl<T: Send> Send for CursorMut<'_, T> {}

unsafe impl<T: Sync> Sync for CursorMut<'_, T> {}

#[cfg(test)]
mod tests {
    use crate::List;
    use std::iter::FromIterator;

    const DATA: [i32; 10] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];

    #[test]
    fn cursor_begin_and_dereference() {
        let list = List::from_iter(DATA);
        let i = list.begin();
        let j = list.begin();
        assert!(i == j);
        assert!(!(i != j));
        assert_eq!(i.current(), j.current());
        assert_eq!(i.current(), Some(&0));
    }

    #[test]
    fn cursor_increment_decrement() {
        let list = List::from_iter(DATA);
        let mut i = list.begin();
        let j = list.begin();

        // post-increment: the copy keeps the old position
        let old = i;
        i.move_next();
        assert!(old == j);
        assert!(i != j);
        i.move_prev();
        assert!(i == j);
    }

    #[test]
    fn cursor_walks_every_element_once() {
        fn visit<T: Clone>(list: &List<T>) -> Vec<T> {
            let mut visited = Vec::new();
            let mut cursor = list.begin();
            while cursor != list.end() {
                visited.extend(cursor.current().cloned());
                cursor.move_next();
            }
            visited
        }
        for len in 0..DATA.len() {
            let list = List::from_iter(DATA[..len].iter().copied());
            let visited = visit(&list);
            assert_eq!(visited.len(), len);
            for (i, item) in visited.iter().enumerate() {
                assert_eq!(list.get(i), Ok(item));
            }
        }
    }

    #[test]
    fn cursor_walks_backward_from_end() {
        let list = List::from_iter(DATA);
        let mut cursor = list.end();
        let mut visited = Vec::new();
        loop {
            cursor.move_prev();
            match cursor.current() {
                Some(item) => visited.push(*item),
                None => break,
            }
        }
        assert!(cursor.is_end());
        visited.reverse();
        assert_eq!(visited, DATA.to_vec());
    }

    #[test]
    fn cursor_wraps_through_ghost_node() {
        let list = List::from_iter([1, 2]);
        let mut cursor = list.end();
        cursor.move_next();
        assert_eq!(cursor, list.begin());
        cursor.move_prev();
        assert!(cursor.is_end());

        let empty = List::<i32>::new();
        let mut cursor = empty.begin();
        assert!(cursor.is_end());
        cursor.move_next();
        assert_eq!(cursor, empty.end());
    }

    #[test]
    fn cursor_arrows() {
        let list = List::from_iter(
            ["the", "quick", "brown", "fox", "jumped", "over", "the", "lazy", "dog"]
                .iter()
                .map(|s| s.to_string()),
        );
        let lengths = [3, 5, 5, 3, 6, 4, 3, 4, 3];
        let mut cursor = list.begin();
        let mut index = 0;
        while let Some(word) = cursor.current() {
            assert_eq!(word.len(), lengths[index]);
            index += 1;
            cursor.move_next();
        }
        assert_eq!(index, lengths.len());
    }

    #[test]
    fn cursor_mut_overwrites_elements() {
        let mut list = List::from_iter(vec![0; DATA.len()]);
        let mut cursor = list.begin_mut();
        for value in DATA.iter() {
            *cursor.current_mut().unwrap() = *value;
            cursor.move_next();
        }
        assert!(cursor.is_end());
        assert!(cursor.current_mut().is_none());
        assert_eq!(Vec::from_iter(list), DATA.to_vec());
    }

    #[test]
    fn cursor_mut_from_end() {
        let mut list = List::from_iter([1, 2, 3]);
        let mut cursor = list.end_mut();
        assert!(cursor.is_end());
        cursor.move_prev();
        *cursor.current_mut().unwrap() += 10;
        assert_eq!(cursor.current(), Some(&13));

        let cursor = cursor.into_cursor();
        assert_eq!(cursor.current(), Some(&13));
        assert_eq!(list.back(), Some(&13));
    }
}
