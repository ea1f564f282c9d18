use crate::list::node::Node;
use crate::list::List;
use std::fmt;
use std::iter::{FromIterator, FusedIterator};
use std::marker::PhantomData;
use std::ptr::NonNull;

/// An iterator over the elements of a `List`.
///
/// It uses a pair of nodes `start..end` to represent a half-open subrange
/// of the list, where `start` is inclusive and `end` is not.
///
/// Though the `Iter` does not hold a reference from the list,
/// it actually *borrows* (immutably) from the list, so a phantom
/// marker of `&'a List<T>` is added to protect the list from being
/// written.
///
/// # Examples
///
/// ```compile_fail
/// use sentinel_list::List;
/// use std::iter::FromIterator;
///
/// let mut list = List::from_iter([1, 2, 3]);
/// let mut iter = list.iter();
///
/// // Won't compile, because list is already borrowed immutably.
/// list.add(4);
/// println!("{:?}", iter.next());
/// ```
pub struct Iter<'a, T: 'a> {
    start: NonNull<Node<T>>,
    end: NonNull<Node<T>>,
    len: usize,
    _marker: PhantomData<&'a List<T>>,
}

impl<'a, T: 'a> Iter<'a, T> {
    pub(crate) fn new(list: &'a List<T>) -> Self {
        Self {
            start: list.front_node(),
            end: list.ghost_node(),
            len: list.len(),
            _marker: PhantomData,
        }
    }
}

impl<'a, T: 'a> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            start: self.start,
            end: self.end,
            len: self.len,
            _marker: PhantomData,
        }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.len).finish()
    }
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    /// Return `*start` and reset the iterating range to `(start.next)..end`,
    /// or return `None` if `start..end` is already empty.
    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let current = self.start.as_ptr();
        self.len -= 1;
        // SAFETY: `start..end` is always a valid range of a list,
        // and it is not empty here, so `start` is not the ghost node.
        unsafe {
            self.start = (*current).next;
            Some(&(*current).element)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<'a, T: 'a> DoubleEndedIterator for Iter<'a, T> {
    /// Reset the iterating range to `start..(end.prev)` and return `*end`,
    /// or return `None` if `start..end` is already empty.
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: `start..end` is always a valid range of a list,
        // and it is not empty here, so `end.prev` is not the ghost node.
        unsafe {
            self.end = Node::prev_of(self.end);
            Some(&(*self.end.as_ptr()).element)
        }
    }
}

impl<'a, T: 'a> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: 'a> FusedIterator for Iter<'a, T> {}

/// A mutable iterator over the elements of a `List`.
///
/// `start..end` denotes a subrange of the list.
///
/// Though the `IterMut` does not hold a reference from the list,
/// it actually *borrows* (mutably) from the list, so a phantom
/// marker of `&'a mut List<T>` is added to protect the list from
/// being read.
///
/// # Examples
///
/// `List` is not readable after an `IterMut` is created.
/// ```compile_fail
/// use sentinel_list::List;
/// use std::iter::FromIterator;
///
/// let mut list = List::from_iter([1, 2, 3]);
/// let mut iter = list.iter_mut();
/// println!("{:?}", list.back());
/// println!("{:?}", iter.next());
/// ```
pub struct IterMut<'a, T: 'a> {
    start: NonNull<Node<T>>,
    end: NonNull<Node<T>>,
    len: usize,
    _marker: PhantomData<&'a mut List<T>>,
}

impl<'a, T: 'a> IterMut<'a, T> {
    pub(crate) fn new(list: &'a mut List<T>) -> Self {
        Self {
            start: list.front_node(),
            end: list.ghost_node(),
            len: list.len(),
            _marker: PhantomData,
        }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for IterMut<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IterMut").field(&self.len).finish()
    }
}

impl<'a, T: 'a> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let current = self.start.as_ptr();
        self.len -= 1;
        // SAFETY: `start..end` is always a valid range of a list,
        // and it is not empty here. Every node is yielded at most once,
        // and only its `element` is borrowed.
        unsafe {
            self.start = (*current).next;
            Some(&mut (*current).element)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<'a, T: 'a> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: `start..end` is always a valid range of a list,
        // and it is not empty here. Every node is yielded at most once,
        // and only its `element` is borrowed.
        unsafe {
            self.end = Node::prev_of(self.end);
            Some(&mut (*self.end.as_ptr()).element)
        }
    }
}

impl<'a, T: 'a> ExactSizeIterator for IterMut<'a, T> {}

impl<'a, T: 'a> FusedIterator for IterMut<'a, T> {}

/// An owning iterator over the elements of a `List`.
///
/// It drains the list it owns from either end. Elements not yet yielded are
/// dropped together with the iterator, and so is the ghost node.
///
/// # Examples
///
/// ```
/// use sentinel_list::List;
/// use std::iter::FromIterator;
///
/// let list = List::from_iter(["a", "b", "c"]);
/// let mut drain = list.into_iter();
/// assert_eq!(drain.next_back(), Some("c"));
/// assert_eq!(drain.len(), 2);
/// assert_eq!(drain.collect::<String>(), "ab");
/// ```
pub struct IntoIter<T> {
    remaining: List<T>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.remaining).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.remaining.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining.len, Some(self.remaining.len))
    }

    fn count(self) -> usize {
        self.remaining.len
    }

    fn last(mut self) -> Option<T> {
        self.remaining.pop_back()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.remaining.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Consumes the list into an owning iterator, front to back.
    fn into_iter(self) -> IntoIter<T> {
        IntoIter { remaining: self }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        Iter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a mut List<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        IterMut::new(self)
    }
}

/// Builds a list by appending every item in order.
impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        for item in iter {
            list.add(item);
        }
        list
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for List<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for &item in iter {
            self.add(item);
        }
    }
}

unsafe impl<T: Sync> Send for Iter<'_, T> {}

unsafe impl<T: Sync> Sync for Iter<'_, T> {}

unsafe impl<T: Send> Send for IterMut<'_, T> {}

unsafe impl<T: Sync> Sync for IterMut<'_, T> {}

#[cfg(test)]
mod tests {
    use crate::List;
    use std::iter::FromIterator;

    #[test]
    fn iter_interleaves_both_ends_over_padded_list() {
        let mut list = List::new();
        list.add(1);
        list.add_at(5, 6); // [1, 0, 0, 0, 0, 6]

        let mut iter = list.iter();
        assert_eq!(iter.len(), 6);
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&6));
        assert_eq!(iter.len(), 4);

        let rest = iter.clone();
        assert_eq!(iter.by_ref().filter(|&&x| x == 0).count(), 4);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
        assert_eq!(iter.len(), 0);

        // a clone keeps its own position
        assert_eq!(rest.len(), 4);
        assert_eq!(rest.rev().count(), 4);
    }

    #[test]
    fn iter_meets_in_the_middle() {
        for len in 0..6 {
            let list = List::from_iter(0..len);
            let mut iter = list.iter();
            let mut front = Vec::new();
            let mut back = Vec::new();
            loop {
                match iter.next() {
                    Some(&x) => front.push(x),
                    None => break,
                }
                match iter.next_back() {
                    Some(&x) => back.push(x),
                    None => break,
                }
            }
            assert_eq!(iter.len(), 0);
            back.reverse();
            front.extend(back);
            assert_eq!(front, Vec::from_iter(0..len));
        }
    }

    #[test]
    fn iter_mut_writes_through_both_ends() {
        let mut list = List::from_iter(0..5);
        {
            let mut iter = list.iter_mut();
            *iter.next().unwrap() += 10;
            *iter.next_back().unwrap() += 40;
            assert_eq!(iter.len(), 3);
            for x in iter.rev() {
                *x *= -1;
            }
        }
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![10, -1, -2, -3, 44]);

        for x in &mut list {
            *x = 0;
        }
        assert!(list.iter().all(|&x| x == 0));
        assert_eq!(list.iter_mut().last(), Some(&mut 0));
    }

    #[test]
    fn iter_matches_indexed_access() {
        let words = ["the", "quick", "brown", "fox", "jumped", "over", "the", "lazy", "dog"];
        let list = List::from_iter(words.iter().map(|s| s.to_string()));
        assert_eq!(list.iter().len(), words.len());
        for (i, word) in list.iter().enumerate() {
            assert_eq!(list.get(i), Ok(word));
            assert_eq!(word, words[i]);
        }
    }

    #[test]
    fn into_iter_drains_both_ends() {
        let list = List::from_iter(0..5);
        let mut iter = list.into_iter();
        assert_eq!(iter.len(), 5);
        assert_eq!(iter.next(), Some(0));
        assert_eq!(iter.next_back(), Some(4));
        assert_eq!(Vec::from_iter(iter), vec![1, 2, 3]);
    }

    #[test]
    fn extend_by_reference() {
        let mut list = List::from_iter([1, 2]);
        list.extend(&[3, 4]);
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![1, 2, 3, 4]);
    }
}
