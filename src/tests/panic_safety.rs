use core::mem::ManuallyDrop;

use crate::GrowList;

macro_rules! zst_or_not {
    (
        $(
            $name:ident
        )*
    ) => {
        $(
            mod $name {
                #[test]
                #[cfg_attr(not(panic = "unwind"), ignore = "test requires unwinding support")]
                fn non_zst() {
                    super::$name::<i32>();
                }

                #[test]
                #[cfg_attr(not(panic = "unwind"), ignore = "test requires unwinding support")]
                fn zst() {
                    super::$name::<()>();
                }
            }
        )*
    };
}

zst_or_not! {
    clone

    clone_with_slack

    from_slice

    concatenate

    drop_while_growing
}

fn five<T: Testable>() -> [Wrap<T>; 5] {
    core::array::from_fn(|_| Wrap(T::default()))
}

fn clone<T: Testable>() {
    // 3 clones and the 5 originals
    cfg().max_clones(3).expected_drops(8).run(|| {
        let original = GrowList::from(five::<T>());
        let _copy = original.clone();
    });
}

fn clone_with_slack<T: Testable>() {
    cfg().max_clones(2).expected_drops(5).run(|| {
        let mut original = GrowList::new();
        original.append(Wrap(T::default())).append(Wrap(T::default())).append(Wrap(T::default()));
        assert_eq!(original.capacity(), 10);
        let _copy = original.clone();
    });
}

fn from_slice<T: Testable>() {
    let original = ManuallyDrop::new(five::<T>());

    cfg().max_clones(3).expected_drops(3).run(|| {
        let _list = GrowList::from_slice(&*original);
    });
}

fn concatenate<T: Testable>() {
    // 4 clones and the 3 + 3 originals
    cfg().max_clones(4).expected_drops(10).run(|| {
        let a = GrowList::from([Wrap(T::default()), Wrap(T::default()), Wrap(T::default())]);
        let b = GrowList::from([Wrap(T::default()), Wrap(T::default()), Wrap(T::default())]);
        let _joined = a.concatenate(&b);
    });
}

fn drop_while_growing<T: Testable>() {
    cfg().expected_drops(25).expected_msg("whoops").run(|| {
        let mut list = GrowList::new();

        for i in 0..25 {
            if i % 2 == 0 {
                list.append(Wrap(T::default()));
            } else {
                list.prepend(Wrap(T::default()));
            }
        }

        assert_eq!(list.len(), 25);
        panic!("whoops");
    });
}

use helper::{Testable, Wrap, cfg};

mod helper {
    use core::{
        cell::Cell,
        panic::{AssertUnwindSafe, RefUnwindSafe, UnwindSafe},
    };
    use std::string::String;

    pub(super) trait Testable: Clone + Default + UnwindSafe + RefUnwindSafe {}

    impl Testable for i32 {}
    impl Testable for () {}

    thread_local! {
        static MAX_CLONES: Cell<usize> = const { Cell::new(0) };
        static CLONES: Cell<usize> = const { Cell::new(0) };
        static DROPS: Cell<usize> = const { Cell::new(0) };
    }

    #[derive(Default)]
    pub(super) struct Cfg {
        max_clones: Option<usize>,
        expected_drops: usize,
        msg: Option<&'static str>,
    }

    impl Cfg {
        pub(super) fn max_clones(mut self, amount: usize) -> Self {
            self.max_clones = Some(amount);
            self
        }

        pub(super) fn expected_drops(mut self, amount: usize) -> Self {
            self.expected_drops = amount;
            self
        }

        pub(super) fn expected_msg(mut self, msg: &'static str) -> Self {
            self.msg = Some(msg);
            self
        }

        pub(super) fn run(self, f: impl FnOnce()) {
            let Self {
                max_clones,
                expected_drops,
                msg,
            } = self;

            let msg = msg.unwrap_or("too many clones");

            MAX_CLONES.set(max_clones.unwrap_or(usize::MAX));

            let panic = catch(AssertUnwindSafe(f)).unwrap_err();
            assert_eq!(panic, msg);
            assert_eq!(DROPS.get(), expected_drops);

            MAX_CLONES.set(0);
            CLONES.set(0);
            DROPS.set(0);
        }
    }

    pub(super) fn cfg() -> Cfg {
        Cfg::default()
    }

    #[derive(Debug)]
    pub(super) struct Wrap<T>(pub(super) T);

    impl<T: UnwindSafe> UnwindSafe for Wrap<T> {}
    impl<T: RefUnwindSafe> RefUnwindSafe for Wrap<T> {}

    impl<T: Clone> Clone for Wrap<T> {
        fn clone(&self) -> Self {
            let count = CLONES.get();

            if count >= MAX_CLONES.get() {
                panic!("too many clones");
            } else {
                CLONES.set(count + 1);
                Wrap(self.0.clone())
            }
        }
    }

    impl<T> Drop for Wrap<T> {
        fn drop(&mut self) {
            DROPS.set(DROPS.get() + 1);
        }
    }

    fn catch<F: FnOnce() -> R + UnwindSafe, R>(f: F) -> Result<R, String> {
        match std::panic::catch_unwind(f) {
            Ok(r) => Ok(r),
            Err(err) => {
                if let Some(&err) = err.downcast_ref::<&str>() {
                    return Err(err.into());
                }

                if let Some(err) = err.downcast_ref::<String>() {
                    return Err(err.into());
                }

                Err("panicked".into())
            }
        }
    }
}
