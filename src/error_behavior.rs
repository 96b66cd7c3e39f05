#[cfg(feature = "panic-on-alloc")]
use core::convert::Infallible;

use allocator_api2::alloc::{AllocError, Layout};

#[cfg(feature = "panic-on-alloc")]
use crate::{capacity_overflow, handle_alloc_error};

/// Decides what happens when an allocation fails.
///
/// Every allocating operation is written once as a `generic_*` function over `E: ErrorBehavior`.
/// The panicking methods use `Infallible`, the `try_*` methods use [`AllocError`].
pub(crate) trait ErrorBehavior: Sized {
    fn allocation(layout: Layout) -> Self;
    fn capacity_overflow() -> Self;
}

#[cfg(feature = "panic-on-alloc")]
impl ErrorBehavior for Infallible {
    #[inline(always)]
    fn allocation(layout: Layout) -> Self {
        handle_alloc_error(layout)
    }

    #[inline(always)]
    fn capacity_overflow() -> Self {
        capacity_overflow()
    }
}

impl ErrorBehavior for AllocError {
    #[inline(always)]
    fn allocation(_: Layout) -> Self {
        Self
    }

    #[inline(always)]
    fn capacity_overflow() -> Self {
        Self
    }
}
