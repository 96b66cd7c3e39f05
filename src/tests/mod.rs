#![cfg(feature = "panic-on-alloc")]

mod panic_safety;

use std::{rc::Rc, string::String};

/// Values that count how many of them are still alive.
fn counted(values: &[i32]) -> (Rc<()>, std::vec::Vec<(i32, Rc<()>)>) {
    let counter = Rc::new(());
    let values = values.iter().map(|&value| (value, Rc::clone(&counter))).collect();
    (counter, values)
}

fn number_strings() -> impl Iterator<Item = String> {
    (0..).map(|i: i32| i.to_string())
}
