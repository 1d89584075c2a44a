//! Times GridEngine::step across board sizes

use std::time::Instant;

use pctlife::domain::{GridEngine, PARALLEL_THRESHOLD};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn benchmark_step(size: usize, iterations: u32) -> f64 {
    let mut engine = GridEngine::new(size);
    engine.randomize_with(&mut StdRng::seed_from_u64(size as u64));

    let start = Instant::now();
    for _ in 0..iterations {
        engine.step();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== GridEngine step benchmark ===\n");
    println!("Parallel interior sums from {PARALLEL_THRESHOLD} cells wide\n");

    let sizes = [32, 128, 256, 512, 1024, 2048, 4096];
    let iterations = 20;

    println!("{:>10} {:>12} {:>16}", "Size", "ms/gen", "Mcells/sec");
    println!("{:-<40}", "");

    for size in sizes {
        let ms = benchmark_step(size, iterations);
        let cells = ((size + 2) * (size + 2)) as f64;
        println!(
            "{:>10} {:>12.3} {:>16.1}",
            format!("{}x{}", size, size),
            ms,
            cells / (ms / 1000.0) / 1_000_000.0
        );
    }
}
