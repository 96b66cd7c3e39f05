use core::{error::Error, fmt};

/// The error returned when an index is outside of the live range of a [`GrowList`].
///
/// It remembers the offending index and the length of the list at the time of the access.
/// Both show up in its [`Display`](fmt::Display) message.
///
/// # Examples
/// ```
/// # use grow_list::GrowList;
/// let list = GrowList::from([1, 3, 7]);
/// let error = list.get(5).unwrap_err();
///
/// assert_eq!(error.index(), 5);
/// assert_eq!(error.len(), 3);
/// assert_eq!(
///     error.to_string(),
///     "illegal bounds access, list size: 3 tried to access index address: 5",
/// );
/// ```
///
/// [`GrowList`]: crate::GrowList
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundsError {
    index: usize,
    len: usize,
}

impl BoundsError {
    #[inline(always)]
    pub(crate) const fn new(index: usize, len: usize) -> Self {
        Self { index, len }
    }

    /// Returns the index that was accessed.
    #[must_use]
    #[inline(always)]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the length the list had when it was accessed.
    #[must_use]
    #[inline(always)]
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize {
        self.len
    }
}

impl fmt::Display for BoundsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "illegal bounds access, list size: {} tried to access index address: {}",
            self.len, self.index
        )
    }
}

impl Error for BoundsError {}
