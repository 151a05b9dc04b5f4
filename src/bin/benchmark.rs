//! Performance benchmark comparing the serial and parallel advance

use std::time::Instant;
use expanding_life::{Algorithm, Direction, Grid, LifeError, Simulation, SimulationConfig};
use rand::{SeedableRng, rngs::StdRng};

fn benchmark_advance(algorithm: Algorithm, size: usize, iterations: u32) -> f64 {
    let mut rng = StdRng::seed_from_u64(size as u64);
    let mut grid = Grid::with_rng(size, size, 0.3, &mut rng);

    let start = Instant::now();
    for _ in 0..iterations {
        grid = algorithm.evolve(&grid);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn benchmark_pan_growth(size: usize, steps: usize) -> Result<f64, LifeError> {
    let config = SimulationConfig::default()
        .with_size(size, size)
        .with_viewport(size, size);
    let mut sim = Simulation::new(config)?;

    let start = Instant::now();
    for _ in 0..steps {
        sim.pan(Direction::Left, 1)?;
        sim.pan(Direction::Up, 1)?;
    }
    Ok(start.elapsed().as_secs_f64() * 1000.0 / steps as f64)
}

fn main() {
    println!("=== Game of Life Performance Benchmark ===\n");

    let sizes = [100, 500, 1000, 2000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let serial_ms = benchmark_advance(Algorithm::Serial, size, iterations);
        let parallel_ms = benchmark_advance(Algorithm::Parallel, size, iterations);
        println!(
            "{:>10} {:>12.2} {:>12.2} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    println!("\n=== Pan growth (left + up by one cell) ===\n");
    for size in [100, 500, 1000] {
        let label = format!("{}x{}", size, size);
        match benchmark_pan_growth(size, 50) {
            Ok(ms) => println!("{:>10} {:>12.3} ms/step", label, ms),
            Err(err) => println!("{:>10} {:>12}", label, err),
        }
    }
}
