use std::fmt;

/// Error returned when an index does not address an element of a [`List`].
///
/// The offending index is kept as the diagnostic payload, together with the
/// length of the list at the time of the failed access.
///
/// # Examples
///
/// ```
/// use sentinel_list::List;
/// use std::iter::FromIterator;
///
/// let list = List::from_iter([1, 2, 3]);
/// let err = list.get(7).unwrap_err();
/// assert_eq!(err.index(), 7);
/// assert_eq!(err.len(), 3);
/// assert_eq!(err.to_string(), "index 7 out of range for list of length 3");
/// ```
///
/// [`List`]: crate::List
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OutOfRange {
    index: usize,
    len: usize,
}

impl OutOfRange {
    pub(crate) fn new(index: usize, len: usize) -> Self {
        Self { index, len }
    }

    /// The index that was out of range.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The length of the list when the access failed.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.len
    }
}

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "index {} out of range for list of length {}",
            self.index, self.len
        )
    }
}

impl std::error::Error for OutOfRange {}
