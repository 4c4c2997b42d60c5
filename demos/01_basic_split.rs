//! Basic Splitting
//!
//! The minimal example: split a line without copying it.
//!
//! ```bash
//! cargo run --example 01_basic_split
//! ```

use strseg::StringSegments;

fn main() {
    let line = "2024-01-15,INFO,server started,port=8080";

    let segments = StringSegments::split(line, ',');

    println!("Line: {} bytes", line.len());
    println!("Segments: {}\n", segments.count());

    for (segment, span) in segments.iter().zip(segments.spans()) {
        let Some(span) = span else { continue };
        println!(
            "[{:>2}..{:>2}] running={:>2} \"{}\"",
            span.start,
            span.end,
            segment.running_index(),
            segment
        );
    }

    // Every segment borrows `line`; nothing was copied.
    println!("\nThird field: {}", segments[2]);
}
