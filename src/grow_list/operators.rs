//! Operator spellings of [`append`], [`prepend`] and [`concatenate`].
//!
//! - `&mut list >> value` and `list >>= value` append,
//! - `&mut list << value` and `list <<= value` prepend,
//! - `&a + &b` and `a + &b` concatenate.
//!
//! ```
//! # use grow_list::GrowList;
//! let mut list = GrowList::new();
//! let chained = &mut list >> 3 >> 7 << 1;
//! assert_eq!(*chained, [1, 3, 7]);
//!
//! list <<= 0;
//! list >>= 8;
//! assert_eq!(list, [0, 1, 3, 7, 8]);
//!
//! let joined = &list + &GrowList::from([9]);
//! assert_eq!(joined, [0, 1, 3, 7, 8, 9]);
//! ```
//!
//! [`append`]: GrowList::append
//! [`prepend`]: GrowList::prepend
//! [`concatenate`]: GrowList::concatenate

use core::ops::{Add, Shl, ShlAssign, Shr, ShrAssign};

use super::GrowList;

impl<'a, T> Shr<T> for &'a mut GrowList<T> {
    type Output = &'a mut GrowList<T>;

    #[inline(always)]
    fn shr(self, value: T) -> Self::Output {
        self.append(value)
    }
}

impl<T> ShrAssign<T> for GrowList<T> {
    #[inline(always)]
    fn shr_assign(&mut self, value: T) {
        self.append(value);
    }
}

impl<'a, T> Shl<T> for &'a mut GrowList<T> {
    type Output = &'a mut GrowList<T>;

    #[inline(always)]
    fn shl(self, value: T) -> Self::Output {
        self.prepend(value)
    }
}

impl<T> ShlAssign<T> for GrowList<T> {
    #[inline(always)]
    fn shl_assign(&mut self, value: T) {
        self.prepend(value);
    }
}

impl<T: Clone> Add<&GrowList<T>> for &GrowList<T> {
    type Output = GrowList<T>;

    #[inline(always)]
    fn add(self, other: &GrowList<T>) -> Self::Output {
        self.concatenate(other)
    }
}

impl<T: Clone> Add<&GrowList<T>> for GrowList<T> {
    type Output = GrowList<T>;

    #[inline(always)]
    fn add(self, other: &GrowList<T>) -> Self::Output {
        self.concatenate(other)
    }
}
