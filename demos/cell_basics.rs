//! Basic cell example

use vane::Cell;

fn main() {
    println!("=== Basic Cell Example ===\n");

    // Create a cell with an initial value
    let count = Cell::new(0);

    // Subscribe: fires once immediately, then on every change
    let subscription = count.subscribe(|n| {
        println!("Count is now: {n}");
    });

    println!("Setting count to 5...");
    count.set(5);

    println!("Updating count by adding 3...");
    count.update(|n| *n += 3);

    println!("Unsubscribing, further changes are silent...");
    subscription.unsubscribe();
    count.set(100);

    println!("Final value: {}", count.get());
}
