//! Example demonstrating the callable-wrapping form of `wall_time_tracker`.
//!
//! Wrapping bundles a closure with a registered timer so that every
//! invocation is timed, while the return value passes through unchanged.
//!
//! Run with: `cargo run --example wrapped_functions`.
#![expect(
    clippy::arithmetic_side_effects,
    reason = "this is example code that does not need production-level safety"
)]

use std::hint::black_box;

use wall_time_tracker::Registry;

fn main() {
    let registry = Registry::new();

    // A pure function taking one argument.
    let mut checksum = registry.wrap("checksum", |data: &[u8]| {
        data.iter()
            .fold(0_u32, |acc, byte| acc.rotate_left(3) ^ u32::from(*byte))
    });

    let payload = vec![0xAB_u8; 64 * 1024];
    for _ in 0..20 {
        let digest = checksum.call_with(payload.as_slice());
        black_box(digest);
    }

    // A zero-argument closure capturing its own state.
    let mut counter = 0_u64;
    {
        let mut tick = registry.wrap("tick", || {
            counter += 1;
        });
        for _ in 0..5 {
            tick.call::<()>();
        }

        // Statistics are reachable straight from the wrapper.
        println!(
            "tick: {} calls, {:?} total",
            tick.timer().count(),
            tick.timer().total()
        );
    }
    println!("counter reached {counter}");
    println!();

    registry.print_summary();
}
