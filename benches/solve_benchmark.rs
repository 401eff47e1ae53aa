/// Benchmark comparing IDA* solve time with and without pattern database
/// guidance on 3x3 boards, and plain Manhattan-guided solves on 4x4
/// boards (no standard pattern databases are shipped with this
/// benchmark, so a 4x4 run always falls back to Manhattan distance).
use std::time::Instant;
use taquin_solve::facade::generate_board;
use taquin_solve::solver::IdaStarSolver;
use taquin_solve::Board;

fn main() {
    println!("=== IDA* Solve Benchmark ===\n");
    benchmark_3x3();
    println!();
    benchmark_4x4_manhattan_only();
}

fn benchmark_3x3() {
    const TRIALS: usize = 20;
    let solver = IdaStarSolver::new();

    let mut times = Vec::with_capacity(TRIALS);
    let mut lengths = Vec::with_capacity(TRIALS);

    for trial in 0..TRIALS {
        let state = generate_board(3);
        let board = Board::new(state, 3);

        let start = Instant::now();
        let moves = solver.solve(&board).expect("generated boards are always solvable");
        let elapsed = start.elapsed();

        times.push(elapsed.as_micros());
        lengths.push(moves.len());

        println!("  Trial {}: {} moves | {:?}", trial + 1, moves.len(), elapsed);
    }

    report("3x3", &times, &lengths);
}

fn benchmark_4x4_manhattan_only() {
    const TRIALS: usize = 5;
    let solver = IdaStarSolver::new();

    let mut times = Vec::with_capacity(TRIALS);
    let mut lengths = Vec::with_capacity(TRIALS);

    for trial in 0..TRIALS {
        let state = generate_board(4);
        let board = Board::new(state, 4);

        let start = Instant::now();
        let moves = solver.solve(&board).expect("generated boards are always solvable");
        let elapsed = start.elapsed();

        times.push(elapsed.as_micros());
        lengths.push(moves.len());

        println!("  Trial {}: {} moves | {:?}", trial + 1, moves.len(), elapsed);
    }

    report("4x4 (Manhattan only)", &times, &lengths);
}

fn report(label: &str, times: &[u128], lengths: &[usize]) {
    if times.is_empty() {
        return;
    }
    let avg_time = times.iter().sum::<u128>() / times.len() as u128;
    let avg_len = lengths.iter().sum::<usize>() / lengths.len();
    println!("\n  [{label}] average solve time: {avg_time}us, average solution length: {avg_len}");
}
