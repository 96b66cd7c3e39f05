use core::{marker::PhantomData, ptr::NonNull};

use allocator_api2::alloc::{Allocator, Global, Layout};

use crate::{error_behavior::ErrorBehavior, SizedTypeProperties};

/// An owned allocation with room for `capacity` values of `T`.
///
/// The slots are uninitialized as far as this type is concerned. Dropping a `RawBuffer`
/// releases the allocation but never drops a `T`, keeping track of initialized slots is
/// the owner's job.
pub(crate) struct RawBuffer<T> {
    ptr: NonNull<T>,
    capacity: usize,

    /// Marks ownership over `T` for drop check.
    marker: PhantomData<T>,
}

impl<T> RawBuffer<T> {
    /// A buffer without an allocation.
    #[inline(always)]
    pub(crate) const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            capacity: 0,
            marker: PhantomData,
        }
    }

    /// Allocates room for exactly `capacity` values.
    ///
    /// A `capacity` of zero does not allocate.
    pub(crate) fn generic_with_capacity<E: ErrorBehavior>(capacity: usize) -> Result<Self, E> {
        if capacity == 0 {
            return Ok(Self::new());
        }

        let layout = match Layout::array::<T>(capacity) {
            Ok(layout) => layout,
            Err(_) => return Err(E::capacity_overflow()),
        };

        let ptr = match Global.allocate(layout) {
            Ok(ptr) => ptr.cast::<T>(),
            Err(_) => return Err(E::allocation(layout)),
        };

        Ok(Self {
            ptr,
            capacity,
            marker: PhantomData,
        })
    }

    #[inline(always)]
    pub(crate) const fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline(always)]
    pub(crate) const fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    #[inline(always)]
    pub(crate) fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }
}

impl<T> Drop for RawBuffer<T> {
    fn drop(&mut self) {
        if self.capacity == 0 {
            return;
        }

        unsafe {
            // Same layout as in `generic_with_capacity`, which already checked that it is valid.
            let layout = Layout::from_size_align_unchecked(T::SIZE * self.capacity, T::ALIGN);
            Global.deallocate(self.ptr.cast(), layout);
        }
    }
}
