use crate::GrowList;

/// The live elements of either side of a comparison.
trait Live {
    type Item;

    fn live(&self) -> &[Self::Item];
}

impl<T> Live for GrowList<T> {
    type Item = T;

    #[inline(always)]
    fn live(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> Live for [T] {
    type Item = T;

    #[inline(always)]
    fn live(&self) -> &[T] {
        self
    }
}

impl<T, const N: usize> Live for [T; N] {
    type Item = T;

    #[inline(always)]
    fn live(&self) -> &[T] {
        self
    }
}

impl<L: Live + ?Sized> Live for &L {
    type Item = L::Item;

    #[inline(always)]
    fn live(&self) -> &[L::Item] {
        L::live(self)
    }
}

impl<L: Live + ?Sized> Live for &mut L {
    type Item = L::Item;

    #[inline(always)]
    fn live(&self) -> &[L::Item] {
        L::live(self)
    }
}

// Slice comparison checks the lengths first, then the elements in order, and stops at
// the first mismatch. Capacity never takes part.
macro_rules! impl_slice_eq {
    ([$($vars:tt)*] $lhs:ty, $rhs:ty) => {
        impl<T, U, $($vars)*> PartialEq<$rhs> for $lhs
        where
            T: PartialEq<U>,
        {
            #[inline]
            fn eq(&self, other: &$rhs) -> bool { self.live() == other.live() }
            #[inline]
            fn ne(&self, other: &$rhs) -> bool { self.live() != other.live() }
        }
    }
}

impl_slice_eq! { [] GrowList<T>, GrowList<U> }
impl_slice_eq! { [] GrowList<T>, [U] }
impl_slice_eq! { [] GrowList<T>, &[U] }
impl_slice_eq! { [] GrowList<T>, &mut [U] }
impl_slice_eq! { [] [T], GrowList<U> }
impl_slice_eq! { [] &[T], GrowList<U> }
impl_slice_eq! { [] &mut [T], GrowList<U> }
impl_slice_eq! { [const N: usize] GrowList<T>, [U; N] }
impl_slice_eq! { [const N: usize] GrowList<T>, &[U; N] }
impl_slice_eq! { [const N: usize] [T; N], GrowList<U> }

impl<T: Eq> Eq for GrowList<T> {}
