//! BWT + FM-Index Demo
//!
//! Transforms a text, inverts it back, and counts patterns in O(pattern_length).
//!
//! ```bash
//! RUST_LOG=alice_bwt=debug cargo run --example bwt_demo
//! ```

use alice_bwt::{bwt, BwtIndex, Result};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== ALICE-BWT Demo ===\n");

    let text = b"Tomorrow_and_tomorrow_and_tomorrow";
    println!("Text ({} bytes):", text.len());
    println!("  \"{}\"", String::from_utf8_lossy(text));

    let index = BwtIndex::build(text)?;
    println!("\nBWT: \"{}\"", bwt::display(index.bwt()));

    println!("\n--- First Column ---\n");
    for (c, rows) in index.first_column().iter() {
        let shown = if c == bwt::SENTINEL { '$' } else { c as char };
        println!("  '{}' -> rows {:?}", shown, rows);
    }

    println!("\n--- Counts ---\n");
    for query in ["tomorrow", "and", "_", "orr", "Tom", "yesterday"] {
        let count = index.count(query.as_bytes())?;
        let scanned = index.count_scan(query.as_bytes())?;
        println!("  \"{}\" -> {} (scan: {})", query, count, scanned);
    }

    println!("\n--- Inverse ---\n");
    let recovered = index.invert()?;
    println!("  \"{}\"", String::from_utf8_lossy(&recovered));
    println!("  round trip ok: {}", recovered == text);

    Ok(())
}
