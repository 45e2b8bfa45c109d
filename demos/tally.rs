//! Draw from a fixed distribution many times and print how often each value came up.
//!
//! Usage: `cargo run --example tally [DRAWS]` (default 100000).
//! Set `RUST_LOG=debug` to see the sampler's construction log.

use probgen::WeightedSampler;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let draws: usize = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => 100_000,
    };

    let values = [-1, 0, 1, 2, 3];
    let probabilities = [0.01, 0.3, 0.58, 0.1, 0.01];
    let mut sampler = WeightedSampler::new(values, probabilities)?;

    println!("Results:");
    for (value, count) in sampler.tally(draws) {
        println!("{value} occurred {count} times");
    }

    Ok(())
}
