//! Comparing separator modes on the same input.
//!
//! ```bash
//! cargo run --example split_modes
//! ```

use strseg::{Comparison, Splitter};

fn main() -> strseg::Result<()> {
    let text = "red AND green and blue And yellow";

    for comparison in [Comparison::Ordinal, Comparison::OrdinalIgnoreCase] {
        let splitter = Splitter::new(" AND ")?.with_comparison(comparison);
        let segments = splitter.split(text);
        let parts: Vec<&str> = segments.parts().collect();
        println!("{:<20} {} -> {:?}", comparison.as_str(), segments.count(), parts);
    }

    match Splitter::new("") {
        Ok(_) => println!("empty separator accepted"),
        Err(err) => println!("empty separator rejected: {err}"),
    }

    Ok(())
}
