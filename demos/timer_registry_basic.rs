//! Simplified example demonstrating key `wall_time_tracker` types working
//! together.
//!
//! This example shows how to use the main types in the package:
//! - `Registry`: hands out timers keyed by name
//! - `Timer`: accumulates elapsed-time samples with derived statistics
//! - `ScopedTimer`: records one sample per scope
//!
//! Run with: `cargo run --example timer_registry_basic`.

use std::collections::HashMap;
use std::fmt::Write;
use std::hint::black_box;

use wall_time_tracker::Registry;

fn main() {
    println!("=== Wall-Clock Time Tracking Example ===");
    println!();

    // Create a registry - each registry tracks its timers independently.
    let registry = Registry::new();
    println!("✓ Created timer registry");
    println!();

    // Track string formatting with scope guards.
    for i in 0..10 {
        let timer = registry.named_timer("string_formatting");
        let _scope = timer.scope();

        let mut result = String::new();
        for j in 0..5000 {
            write!(
                result,
                "String number {i}-{j} with some content that is longer to force more work. "
            )
            .expect("writing to a String cannot fail");
        }
        let processed = result.chars().rev().collect::<String>();
        black_box(processed);
    }
    println!("✓ Timed string formatting (10 samples)");

    // Track hashmap creation with the closure form.
    let hashmap_timer = registry.named_timer("hashmap_creation");
    for i in 0..10 {
        hashmap_timer.time(|| {
            let mut map = HashMap::new();
            for j in 0..1000 {
                map.insert(format!("key{i}-{j}"), format!("value{i}-{j}"));
            }
            black_box(map);
        });
    }
    println!("✓ Timed hashmap creation (10 samples)");

    // An anonymous scope never shows up in the summary.
    let scope = registry.scoped_timer();
    black_box(vec![0_u8; 1024]);
    let elapsed = scope.finish();
    println!("✓ Anonymous scope took {elapsed:?} (not registered)");
    println!();

    // Inspect one timer directly.
    println!(
        "string_formatting: count={}, total={:?}, min={:?}, max={:?}",
        registry.named_timer("string_formatting").count(),
        registry.named_timer("string_formatting").total(),
        registry.named_timer("string_formatting").min().ok(),
        registry.named_timer("string_formatting").max().ok(),
    );
    println!();

    // Print the full summary in registration order.
    println!("Summary:");
    registry.print_summary();
}
