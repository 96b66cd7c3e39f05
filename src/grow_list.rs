use core::{
    fmt::{self, Debug, Display},
    hash::Hash,
    ops::{Index, IndexMut},
    ptr, slice,
};

#[cfg(feature = "panic-on-alloc")]
use alloc::{string::String, vec::Vec};

#[cfg(feature = "panic-on-alloc")]
use crate::infallible;
use crate::{
    AllocError, BoundsError, error_behavior::ErrorBehavior, exact_size_iterator_bad_len, raw_buffer::RawBuffer,
};

#[cfg(feature = "panic-on-alloc")]
mod operators;

/// The capacity a list grows to when it has to grow without an allocation.
///
/// After that, every growth doubles the capacity.
pub const INITIAL_CAPACITY: usize = 10;

/// A growable list backed by a single, exclusively owned buffer.
///
/// The list keeps track of its length, the number of live elements, and its capacity, the
/// number of slots in its buffer. Appending or prepending to a full list moves its elements
/// into a new buffer with twice the capacity (or [`INITIAL_CAPACITY`] for a list without a buffer).
///
/// Elements are only reachable through [`get`], [`get_mut`] and the [`Index`] operators,
/// which all check the index against the length.
///
/// # Examples
/// ```
/// # use grow_list::GrowList;
/// let mut list = GrowList::new();
/// list.append(3).append(7).prepend(1);
///
/// assert_eq!(list, [1, 3, 7]);
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.capacity(), 10);
/// assert!(list.get(5).is_err());
///
/// let more = list.concatenate(&GrowList::from([9]));
/// assert_eq!(more, [1, 3, 7, 9]);
/// assert_eq!(more.capacity(), 4);
/// assert_eq!(list.len(), 3);
/// ```
///
/// [`get`]: Self::get
/// [`get_mut`]: Self::get_mut
pub struct GrowList<T> {
    buffer: RawBuffer<T>,
    len: usize,
}

unsafe impl<T: Send> Send for GrowList<T> {}
unsafe impl<T: Sync> Sync for GrowList<T> {}

impl<T> GrowList<T> {
    /// Constructs a new empty `GrowList<T>`.
    ///
    /// The list will not allocate until elements are pushed onto it.
    ///
    /// # Examples
    /// ```
    /// # use grow_list::GrowList;
    /// let list = GrowList::<i32>::new();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.capacity(), 0);
    /// ```
    #[must_use]
    #[inline(always)]
    pub const fn new() -> Self {
        Self {
            buffer: RawBuffer::new(),
            len: 0,
        }
    }

    /// Constructs a list by cloning the elements of `slice`.
    ///
    /// The capacity of the list is exactly the length of `slice`.
    ///
    /// # Panics
    /// Panics if the allocation fails.
    ///
    /// # Examples
    /// ```
    /// # use grow_list::GrowList;
    /// let list = GrowList::from_slice(&["a", "b"]);
    /// assert_eq!(list, ["a", "b"]);
    /// assert_eq!(list.capacity(), 2);
    /// ```
    #[must_use]
    #[inline(always)]
    #[cfg(feature = "panic-on-alloc")]
    pub fn from_slice(slice: &[T]) -> Self
    where
        T: Clone,
    {
        infallible(Self::generic_from_slice(slice))
    }

    /// Constructs a list by cloning the elements of `slice`.
    ///
    /// The capacity of the list is exactly the length of `slice`.
    ///
    /// # Errors
    /// Errors if the allocation fails.
    ///
    /// # Examples
    /// ```
    /// # use grow_list::GrowList;
    /// let list = GrowList::try_from_slice(&["a", "b"])?;
    /// assert_eq!(list, ["a", "b"]);
    /// # Ok::<(), grow_list::AllocError>(())
    /// ```
    #[inline(always)]
    pub fn try_from_slice(slice: &[T]) -> Result<Self, AllocError>
    where
        T: Clone,
    {
        Self::generic_from_slice(slice)
    }

    #[inline]
    pub(crate) fn generic_from_slice<E: ErrorBehavior>(slice: &[T]) -> Result<Self, E>
    where
        T: Clone,
    {
        Self::generic_from_exact_iter(slice.iter().cloned())
    }

    /// Moves the values of an exact size iterator into a list with no spare capacity.
    pub(crate) fn generic_from_exact_iter<E: ErrorBehavior>(iter: impl ExactSizeIterator<Item = T>) -> Result<Self, E> {
        let mut list = Self::generic_with_capacity(iter.len())?;

        for value in iter {
            if list.is_full() {
                exact_size_iterator_bad_len();
            }

            unsafe { list.push_unchecked(value) };
        }

        Ok(list)
    }

    #[inline]
    fn generic_with_capacity<E: ErrorBehavior>(capacity: usize) -> Result<Self, E> {
        Ok(Self {
            buffer: RawBuffer::generic_with_capacity(capacity)?,
            len: 0,
        })
    }

    /// Returns the number of elements in the list.
    #[must_use]
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the total number of elements the list can hold without reallocating.
    ///
    /// # Examples
    /// ```
    /// # use grow_list::GrowList;
    /// let mut list = GrowList::new();
    /// assert_eq!(list.capacity(), 0);
    ///
    /// list.append(1);
    /// assert_eq!(list.capacity(), 10);
    /// ```
    #[must_use]
    #[inline(always)]
    pub const fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Returns `true` if the list contains no elements.
    #[must_use]
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    const fn is_full(&self) -> bool {
        self.len == self.buffer.capacity()
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    /// Errors if `index` is not less than the length of the list.
    ///
    /// # Examples
    /// ```
    /// # use grow_list::GrowList;
    /// let list = GrowList::from([10, 40, 30]);
    /// assert_eq!(list.get(1), Ok(&40));
    ///
    /// let error = list.get(3).unwrap_err();
    /// assert_eq!((error.index(), error.len()), (3, 3));
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T, BoundsError> {
        self.check_index(index)?;
        Ok(unsafe { &*self.buffer.as_ptr().add(index) })
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    /// Errors if `index` is not less than the length of the list.
    ///
    /// # Examples
    /// ```
    /// # use grow_list::GrowList;
    /// let mut list = GrowList::from([1, 2, 3]);
    ///
    /// if let Ok(element) = list.get_mut(1) {
    ///     *element = 42;
    /// }
    ///
    /// assert_eq!(list, [1, 42, 3]);
    /// assert!(list.get_mut(7).is_err());
    /// ```
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, BoundsError> {
        self.check_index(index)?;
        Ok(unsafe { &mut *self.buffer.as_mut_ptr().add(index) })
    }

    #[inline(always)]
    fn check_index(&self, index: usize) -> Result<(), BoundsError> {
        if index < self.len {
            Ok(())
        } else {
            Err(BoundsError::new(index, self.len))
        }
    }

    /// Appends an element to the back of the list.
    ///
    /// Returns the list so calls can be chained.
    ///
    /// # Panics
    /// Panics if the allocation fails.
    ///
    /// # Examples
    /// ```
    /// # use grow_list::GrowList;
    /// let mut list = GrowList::from([1, 2]);
    /// list.append(3).append(4);
    /// assert_eq!(list, [1, 2, 3, 4]);
    /// assert_eq!(list.capacity(), 4);
    /// ```
    #[inline(always)]
    #[cfg(feature = "panic-on-alloc")]
    pub fn append(&mut self, value: T) -> &mut Self {
        infallible(self.generic_append(value))
    }

    /// Appends an element to the back of the list.
    ///
    /// Returns the list so calls can be chained.
    ///
    /// # Errors
    /// Errors if the allocation fails.
    ///
    /// # Examples
    /// ```
    /// # use grow_list::GrowList;
    /// let mut list = GrowList::new();
    /// list.try_append(1)?.try_append(2)?;
    /// assert_eq!(list, [1, 2]);
    /// # Ok::<(), grow_list::AllocError>(())
    /// ```
    #[inline(always)]
    pub fn try_append(&mut self, value: T) -> Result<&mut Self, AllocError> {
        self.generic_append(value)
    }

    #[inline]
    pub(crate) fn generic_append<E: ErrorBehavior>(&mut self, value: T) -> Result<&mut Self, E> {
        self.generic_grow_if_needed()?;
        unsafe { self.push_unchecked(value) };
        Ok(self)
    }

    /// Inserts an element at the front of the list, shifting all other elements one slot back.
    ///
    /// Returns the list so calls can be chained.
    ///
    /// This is *O*(*n*) in the length of the list.
    ///
    /// # Panics
    /// Panics if the allocation fails.
    ///
    /// # Examples
    /// ```
    /// # use grow_list::GrowList;
    /// let mut list = GrowList::from([3, 7]);
    /// list.prepend(1).prepend(0);
    /// assert_eq!(list, [0, 1, 3, 7]);
    /// ```
    #[inline(always)]
    #[cfg(feature = "panic-on-alloc")]
    pub fn prepend(&mut self, value: T) -> &mut Self {
        infallible(self.generic_prepend(value))
    }

    /// Inserts an element at the front of the list, shifting all other elements one slot back.
    ///
    /// Returns the list so calls can be chained.
    ///
    /// This is *O*(*n*) in the length of the list.
    ///
    /// # Errors
    /// Errors if the allocation fails.
    ///
    /// # Examples
    /// ```
    /// # use grow_list::GrowList;
    /// let mut list = GrowList::new();
    /// list.try_prepend(2)?.try_prepend(1)?;
    /// assert_eq!(list, [1, 2]);
    /// # Ok::<(), grow_list::AllocError>(())
    /// ```
    #[inline(always)]
    pub fn try_prepend(&mut self, value: T) -> Result<&mut Self, AllocError> {
        self.generic_prepend(value)
    }

    #[inline]
    pub(crate) fn generic_prepend<E: ErrorBehavior>(&mut self, value: T) -> Result<&mut Self, E> {
        self.generic_grow_if_needed()?;

        unsafe {
            let start = self.buffer.as_mut_ptr();

            // The growth check guarantees a free slot at `len`.
            // For an empty list this copies nothing.
            ptr::copy(start, start.add(1), self.len);
            start.write(value);
        }

        self.len += 1;
        Ok(self)
    }

    /// Returns a new list with the elements of `self` followed by the elements of `other`.
    ///
    /// Neither list is changed. The capacity of the new list is exactly its length.
    ///
    /// # Panics
    /// Panics if the allocation fails.
    ///
    /// # Examples
    /// ```
    /// # use grow_list::GrowList;
    /// let a = GrowList::from([1, 3, 7]);
    /// let b = GrowList::from([9]);
    /// let c = a.concatenate(&b);
    ///
    /// assert_eq!(c, [1, 3, 7, 9]);
    /// assert_eq!(c.capacity(), 4);
    /// assert_eq!(a, [1, 3, 7]);
    /// assert_eq!(b, [9]);
    /// ```
    #[must_use]
    #[inline(always)]
    #[cfg(feature = "panic-on-alloc")]
    pub fn concatenate(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        infallible(self.generic_concatenate(other))
    }

    /// Returns a new list with the elements of `self` followed by the elements of `other`.
    ///
    /// Neither list is changed. The capacity of the new list is exactly its length.
    ///
    /// # Errors
    /// Errors if the allocation fails.
    ///
    /// # Examples
    /// ```
    /// # use grow_list::GrowList;
    /// let a = GrowList::try_from_slice(&[1, 2])?;
    /// let b = GrowList::try_from_slice(&[3])?;
    /// assert_eq!(a.try_concatenate(&b)?, [1, 2, 3]);
    /// # Ok::<(), grow_list::AllocError>(())
    /// ```
    #[inline(always)]
    pub fn try_concatenate(&self, other: &Self) -> Result<Self, AllocError>
    where
        T: Clone,
    {
        self.generic_concatenate(other)
    }

    pub(crate) fn generic_concatenate<E: ErrorBehavior>(&self, other: &Self) -> Result<Self, E>
    where
        T: Clone,
    {
        let Some(len) = self.len.checked_add(other.len) else {
            return Err(E::capacity_overflow());
        };

        let mut list = Self::generic_with_capacity(len)?;

        for value in self.as_slice().iter().chain(other.as_slice()) {
            unsafe { list.push_unchecked(value.clone()) };
        }

        Ok(list)
    }

    /// Clones the list into a new buffer of the same capacity.
    ///
    /// # Errors
    /// Errors if the allocation fails.
    ///
    /// # Examples
    /// ```
    /// # use grow_list::GrowList;
    /// let mut list = GrowList::new();
    /// list.try_append(5)?;
    ///
    /// let copy = list.try_clone()?;
    /// assert_eq!(copy, [5]);
    /// assert_eq!(copy.capacity(), 10);
    /// # Ok::<(), grow_list::AllocError>(())
    /// ```
    #[inline(always)]
    pub fn try_clone(&self) -> Result<Self, AllocError>
    where
        T: Clone,
    {
        self.generic_clone()
    }

    pub(crate) fn generic_clone<E: ErrorBehavior>(&self) -> Result<Self, E>
    where
        T: Clone,
    {
        let mut list = Self::generic_with_capacity(self.capacity())?;

        for value in self.as_slice() {
            unsafe { list.push_unchecked(value.clone()) };
        }

        Ok(list)
    }

    /// Renders the list as
    /// `<list> size: {len} allocationSize: {capacity} [ v0, v1, ..., vN ]`.
    ///
    /// This is the same text the [`Display`] implementation writes.
    ///
    /// # Examples
    /// ```
    /// # use grow_list::GrowList;
    /// let mut list = GrowList::new();
    /// assert_eq!(list.render(), "<list> size: 0 allocationSize: 0 [ ]");
    ///
    /// list.append(3).append(7);
    /// assert_eq!(list.render(), "<list> size: 2 allocationSize: 10 [ 3, 7 ]");
    /// ```
    #[must_use]
    #[cfg(feature = "panic-on-alloc")]
    pub fn render(&self) -> String
    where
        T: Display,
    {
        use alloc::string::ToString;
        self.to_string()
    }

    /// Grows the buffer if there is no room for one more element.
    #[inline(always)]
    fn generic_grow_if_needed<E: ErrorBehavior>(&mut self) -> Result<(), E> {
        if self.is_full() {
            self.generic_grow_cold()?;
        }

        Ok(())
    }

    #[cold]
    #[inline(never)]
    fn generic_grow_cold<E: ErrorBehavior>(&mut self) -> Result<(), E> {
        let new_capacity = if self.capacity() == 0 {
            INITIAL_CAPACITY
        } else {
            match self.capacity().checked_mul(2) {
                Some(new_capacity) => new_capacity,
                None => return Err(E::capacity_overflow()),
            }
        };

        let mut new_buffer = RawBuffer::<T>::generic_with_capacity(new_capacity)?;

        unsafe {
            ptr::copy_nonoverlapping(self.buffer.as_ptr(), new_buffer.as_mut_ptr(), self.len);
        }

        // The elements were moved, dropping the old buffer only releases its memory.
        self.buffer = new_buffer;
        Ok(())
    }

    /// # Safety
    ///
    /// The list must not be full.
    #[inline(always)]
    unsafe fn push_unchecked(&mut self, value: T) {
        debug_assert!(!self.is_full());

        unsafe { self.buffer.as_mut_ptr().add(self.len).write(value) };
        self.len += 1;
    }

    #[inline(always)]
    pub(crate) fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.buffer.as_ptr(), self.len) }
    }
}

impl<T> Drop for GrowList<T> {
    fn drop(&mut self) {
        unsafe {
            let live = ptr::slice_from_raw_parts_mut(self.buffer.as_mut_ptr(), self.len);
            ptr::drop_in_place(live);
        }
    }
}

impl<T> Default for GrowList<T> {
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "panic-on-alloc")]
impl<T: Clone> Clone for GrowList<T> {
    fn clone(&self) -> Self {
        infallible(self.generic_clone())
    }
}

impl<T: Display> Display for GrowList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<list> size: {} allocationSize: {} [ ", self.len, self.capacity())?;

        let last = self.len.wrapping_sub(1);

        for (index, value) in self.as_slice().iter().enumerate() {
            if index == last {
                write!(f, "{value} ")?;
            } else {
                write!(f, "{value}, ")?;
            }
        }

        f.write_str("]")
    }
}

impl<T: Debug> Debug for GrowList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: Hash> Hash for GrowList<T> {
    #[inline(always)]
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T> Index<usize> for GrowList<T> {
    type Output = T;

    #[inline]
    #[track_caller]
    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Ok(value) => value,
            Err(error) => index_out_of_bounds(error),
        }
    }
}

impl<T> IndexMut<usize> for GrowList<T> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(error) => index_out_of_bounds(error),
        }
    }
}

#[cold]
#[inline(never)]
#[track_caller]
fn index_out_of_bounds(error: BoundsError) -> ! {
    panic!("{error}")
}

#[cfg(feature = "panic-on-alloc")]
impl<T: Clone> From<&[T]> for GrowList<T> {
    #[inline]
    fn from(slice: &[T]) -> Self {
        Self::from_slice(slice)
    }
}

#[cfg(feature = "panic-on-alloc")]
impl<T: Clone> From<&mut [T]> for GrowList<T> {
    #[inline]
    fn from(slice: &mut [T]) -> Self {
        Self::from_slice(slice)
    }
}

#[cfg(feature = "panic-on-alloc")]
impl<T, const N: usize> From<[T; N]> for GrowList<T> {
    #[inline]
    fn from(array: [T; N]) -> Self {
        infallible(Self::generic_from_exact_iter(array.into_iter()))
    }
}

#[cfg(feature = "panic-on-alloc")]
impl<T> From<Vec<T>> for GrowList<T> {
    #[inline]
    fn from(vec: Vec<T>) -> Self {
        infallible(Self::generic_from_exact_iter(vec.into_iter()))
    }
}

/// Returns [`ErrorKind::OutOfMemory`](std::io::ErrorKind::OutOfMemory) when appending fails.
#[cfg(feature = "std")]
impl std::io::Write for GrowList<u8> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        for &byte in buf {
            if self.try_append(byte).is_err() {
                return Err(std::io::ErrorKind::OutOfMemory.into());
            }
        }

        Ok(buf.len())
    }

    #[inline(always)]
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
