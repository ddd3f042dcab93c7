//! Minimal end-to-end example: add quantities with different tick sizes.

use scaled::{ratio, Milliseconds, Quantity, Second, Seconds};

fn main() {
    let a = Quantity::<i32, ratio!(1 / 1000)>::new(42);
    let b = Quantity::<i32, ratio!(2 / 3)>::new(77);
    let sum = a + b;
    assert_eq!(sum.value(), 154_126);
    println!("{a} + {b} = {sum}");

    let timeout = Seconds::new(2) + Milliseconds::new(250);
    assert_eq!(timeout.value(), 2_250);
    println!("timeout: {timeout} ({} whole seconds)", timeout.cast::<Second>());
}
