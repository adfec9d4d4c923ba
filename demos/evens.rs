//! Even numbers are an infinite set, but any window onto them is finite. Here we look at a few of
//! them, and at their image under squaring.

use fsets::prelude::*;

fn main() -> Result<()> {
    let evens = Set::pred(|x| x % 2 == 0);
    let window = Window::new(0, 20);

    println!("Evens in {window}: {}", evens.render(window)?);
    println!(
        "All multiples of 4 are even: {}",
        Set::pred(|x| x % 4 == 0).forall(|x| x % 2 == 0, Window::default())?
    );
    println!(
        "Some even number is 7: {}",
        evens.exists(|x| x == 7, Window::default())?
    );

    let squares = evens.map(|x| x * x, window);
    println!("Squares of evens, up to 100: {}", squares.render(Window::new(0, 100))?);

    Ok(())
}
