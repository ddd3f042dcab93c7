//! Example demonstrating the serde_with_unit helper module.
//!
//! This shows how to use #[serde(with = "scaled::serde_with_unit")] to keep the tick size next to the value in
//! serialized data on a per-field basis.
//!
//! Run with: cargo run --example serde_with_unit --features serde

#[cfg(feature = "serde")]
fn main() {
    use scaled::{ratio, Milliseconds, Quantity, Seconds};
    use serde::{Deserialize, Serialize};

    println!("=== Using serde_with_unit Helper ===\n");

    #[derive(Serialize, Deserialize, Debug)]
    struct PlaybackState {
        // Written as {"value": .., "num": .., "den": ..}
        #[serde(with = "scaled::serde_with_unit")]
        position: Quantity<i64, ratio!(1 / 48_000)>,

        // Written as the bare value
        buffered: Milliseconds<i64>,

        #[serde(with = "scaled::serde_with_unit")]
        timeout: Seconds<u32>,
    }

    let state = PlaybackState {
        position: Quantity::new(96_000),
        buffered: Milliseconds::new(250),
        timeout: Seconds::new(30),
    };

    let json = serde_json::to_string_pretty(&state).unwrap();
    println!("Serialized:\n{}\n", json);

    let restored: PlaybackState = serde_json::from_str(&json).unwrap();
    println!("Deserialized: position {}, buffered {}, timeout {}\n", restored.position, restored.buffered, restored.timeout);

    // An equivalent, unreduced ratio is accepted.
    let unreduced = r#"{"position": {"value": 1, "num": 2, "den": 96000}, "buffered": 0, "timeout": {"value": 1}}"#;
    match serde_json::from_str::<PlaybackState>(unreduced) {
        Ok(state) => println!("✓ accepted 2/96000 as 1/48000: {}", state.position),
        Err(err) => println!("✗ unexpected error: {err}"),
    }

    // A different tick size is rejected.
    let mismatched = r#"{"position": {"value": 1, "num": 1, "den": 44100}, "buffered": 0, "timeout": {"value": 1}}"#;
    match serde_json::from_str::<PlaybackState>(mismatched) {
        Ok(_) => println!("✗ mismatched tick was accepted"),
        Err(err) => println!("✓ rejected mismatched tick: {err}"),
    }
}

#[cfg(not(feature = "serde"))]
fn main() {
    println!("This example requires the 'serde' feature.");
    println!("Run with: cargo run --example serde_with_unit --features serde");
}
