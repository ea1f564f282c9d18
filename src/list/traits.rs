use crate::list::List;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut};

/// Lists are equal when they have the same length and pairwise equal
/// elements. Lengths are compared first; the element walk stops at the first
/// mismatch.
impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for List<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    /// Replaces the contents of `self` with a copy of `source`.
    ///
    /// The copy is built in full before `self` is touched, and then swapped
    /// in. If `T::clone` panics, `self` is left as it was.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let a = List::from_iter([1, 2, 3]);
    /// let mut b = List::from_iter([4, 5]);
    /// b.clone_from(&a);
    /// assert_eq!(a, b);
    /// ```
    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap(&mut copy);
        trace_event!(len = self.len, "committed list copy");
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for elt in self {
            elt.hash(state);
        }
    }
}

/// Panics if `index` is out of range, like [`Vec`] does.
///
/// Use [`List::get`] for a checked access.
impl<T> Index<usize> for List<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(element) => element,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T> IndexMut<usize> for List<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(element) => element,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T> List<T> {
    /// Returns `true` if the `List` contains an element equal to the given value.
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
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }
}

#[cfg(test)]
mod tests {
    use crate::List;
    use std::cell::Cell;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};
    use std::iter::FromIterator;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn equality_compares_size_first() {
        let a = List::from_iter([1, 3, 4, 7, 99]);
        let mut b = a.clone();
        assert_eq!(a, b);

        assert_eq!(b.remove(2), Ok(4));
        assert_eq!(Vec::from_iter(b.iter().copied()), vec![1, 3, 7, 99]);
        assert_ne!(a, b);

        let prefix = List::from_iter([1, 3, 4]);
        assert_ne!(a, prefix);
        assert_ne!(prefix, a);
        assert_eq!(List::<i32>::new(), List::new());
    }

    #[test]
    fn equality_stops_at_first_mismatch() {
        thread_local! {
            static COMPARED: Cell<usize> = Cell::new(0);
        }

        #[derive(Debug)]
        struct Counted(i32);

        impl PartialEq for Counted {
            fn eq(&self, other: &Self) -> bool {
                COMPARED.with(|c| c.set(c.get() + 1));
                self.0 == other.0
            }
        }

        let a = List::from_iter((0..10).map(Counted));
        let b = List::from_iter((0..10).map(|i| Counted(if i == 1 { -1 } else { i })));
        assert_ne!(a, b);
        assert_eq!(COMPARED.with(Cell::get), 2);

        let c = List::from_iter((0..3).map(Counted));
        COMPARED.with(|c| c.set(0));
        assert_ne!(a, c);
        assert_eq!(COMPARED.with(Cell::get), 0);
    }

    #[test]
    fn ordering_is_lexicographic() {
        let a = List::from_iter([1, 2, 3]);
        let b = List::from_iter([1, 2, 4]);
        let c = List::from_iter([1, 2]);
        assert!(a < b);
        assert!(c < a);
        assert_eq!(a.cmp(&a.clone()), std::cmp::Ordering::Equal);
    }

    #[test]
    fn clone_is_independent() {
        let mut source = List::new();
        for i in 1..=5 {
            source.add(i);
        }
        let mut copy = source.clone();
        assert_eq!(copy.len(), 5);
        assert_eq!(source, copy);

        *copy.get_mut(0).unwrap() = 100;
        copy.add(6);
        assert_eq!(Vec::from_iter(source.iter().copied()), vec![1, 2, 3, 4, 5]);
        assert_ne!(source, copy);
    }

    #[test]
    fn clone_from_chains() {
        let a = List::from_iter(["a".to_string(), "b".to_string()]);
        let mut b = List::new();
        let mut c = List::from_iter(["x".to_string()]);
        let mut d = List::from_iter(vec!["y".to_string(); 7]);

        b.clone_from(&a);
        c.clone_from(&b);
        d.clone_from(&c);
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(c, d);
        assert_eq!(d.len(), 2);
    }

    #[test]
    fn clone_from_equal_list_keeps_contents() {
        let a = List::from_iter(0..4);
        let mut b = a.clone();
        b.clone_from(&a);
        assert_eq!(b.len(), 4);
        assert_eq!(a, b);
    }

    #[test]
    fn clone_from_panicking_clone_keeps_target() {
        thread_local! {
            static BUDGET: Cell<usize> = Cell::new(usize::MAX);
            static LIVE: Cell<usize> = Cell::new(0);
        }

        #[derive(Debug, PartialEq, Eq)]
        struct Fragile(u32);

        impl Fragile {
            fn new(value: u32) -> Self {
                LIVE.with(|live| live.set(live.get() + 1));
                Fragile(value)
            }
        }

        impl Clone for Fragile {
            fn clone(&self) -> Self {
                BUDGET.with(|budget| {
                    if budget.get() == 0 {
                        panic!("no more clones");
                    }
                    budget.set(budget.get() - 1);
                });
                Fragile::new(self.0)
            }
        }

        impl Drop for Fragile {
            fn drop(&mut self) {
                LIVE.with(|live| live.set(live.get() - 1));
            }
        }

        let source = List::from_iter((0..6).map(Fragile::new));
        let mut target = List::from_iter([Fragile::new(10), Fragile::new(11)]);
        assert_eq!(LIVE.with(Cell::get), 8);

        BUDGET.with(|budget| budget.set(3));
        let result = catch_unwind(AssertUnwindSafe(|| target.clone_from(&source)));
        assert!(result.is_err());
        // the three clones made before the panic went down with the partial copy
        assert_eq!(LIVE.with(Cell::get), source.len() + target.len());
        assert_eq!(target.len(), 2);
        assert_eq!(Vec::from_iter(target.iter().map(|f| f.0)), vec![10, 11]);
        assert_eq!(source.len(), 6);

        BUDGET.with(|budget| budget.set(usize::MAX));
        target.clone_from(&source);
        assert_eq!(target, source);
        assert_eq!(LIVE.with(Cell::get), 12);

        drop(source);
        drop(target);
        assert_eq!(LIVE.with(Cell::get), 0);
    }

    #[test]
    fn hash_follows_equality() {
        let a = List::from_iter([1, 2, 3]);
        assert_eq!(hash_of(&a), hash_of(&a.clone()));
        assert_ne!(hash_of(&a), hash_of(&List::from_iter([1, 2])));
    }

    #[test]
    fn index_reads_and_writes() {
        let mut list = List::from_iter([1, 2, 3]);
        list[1] = 20;
        assert_eq!(list[0], 1);
        assert_eq!(list[1], 20);
        assert_eq!(list[2], 3);
        assert!(list.contains(&20));
        assert!(!list.contains(&2));
    }

    #[test]
    #[should_panic(expected = "index 3 out of range for list of length 3")]
    fn index_out_of_range_panics() {
        let list = List::from_iter([1, 2, 3]);
        let _ = &list[3];
    }
}
