//! Performance benchmark comparing the in-place and parallel mark phases

use std::time::Instant;
use two_phase_life::domain::{Grid, UpdateMode, DEFAULT_ALIVE_PROBABILITY};

fn benchmark_mode(size: usize, iterations: u32, mode: UpdateMode) -> f64 {
    let mut grid = Grid::new(size, size);
    grid.set_random_grid_seeded(size as u64, DEFAULT_ALIVE_PROBABILITY);

    let start = Instant::now();
    for _ in 0..iterations {
        grid.advance_generation_with(mode);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Two-Phase Life Benchmark ===\n");

    let sizes = [50, 100, 250, 500, 1000, 2000];
    let iterations = 10;

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "InPlace", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let in_place_ms = benchmark_mode(size, iterations, UpdateMode::InPlace);
        let parallel_ms = benchmark_mode(size, iterations, UpdateMode::Parallel);

        println!(
            "{:>10} {:>12.2} {:>12.2} {:>9.1}x",
            format!("{}x{}", size, size),
            in_place_ms,
            parallel_ms,
            in_place_ms / parallel_ms
        );
    }

    // Both modes must land on the same grid
    let mut a = Grid::new(300, 300);
    a.set_random_grid_seeded(1, DEFAULT_ALIVE_PROBABILITY);
    let mut b = a.clone();
    for _ in 0..20 {
        a.advance_generation_with(UpdateMode::InPlace);
        b.advance_generation_with(UpdateMode::Parallel);
    }
    println!("\nModes agree after 20 generations: {}", a == b);
}
