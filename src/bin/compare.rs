//! Times the manual transform-reduce against sequential and rayon
//! reductions on one random vector and prints a latency table.
use fork_reduce::{
    hardware_parallelism, random_vector, time_string, transform_reduce, Comparator,
};
use rayon::prelude::*;
use std::io;

const LENGTH: usize = 100_000;
const RUNS: usize = 10;

// values span the whole i32 range so the sum has to wrap
fn double(value: i32) -> i32 {
    value.wrapping_mul(2)
}

fn plus(left: i32, right: i32) -> i32 {
    left.wrapping_add(right)
}

fn main() {
    let values = random_vector(LENGTH);
    let max_budget = hardware_parallelism();

    let comparator = Comparator::new()
        .runs_number(RUNS)
        .attach_algorithm("sequential fold", || {
            values.iter().map(|&v| double(v)).fold(0, plus)
        })
        .attach_algorithm("rayon par_iter", || {
            values.par_iter().map(|&v| double(v)).reduce(|| 0, plus)
        })
        .attach_algorithm("rayon par_chunks", || {
            values
                .par_chunks(values.len() / max_budget + 1)
                .map(|chunk| chunk.iter().map(|&v| double(v)).fold(0, plus))
                .reduce(|| 0, plus)
        })
        .attach_budget_sweep("manual", 1..=max_budget, |budget| {
            transform_reduce(&values, 0, plus, double, budget).expect("reduction failed")
        });

    let stdout = io::stdout();
    comparator
        .write_table(&mut stdout.lock())
        .expect("writing table failed");
    let (label, median) = comparator.best().expect("no algorithm attached");
    println!(
        "best median time: {} with {}, MAX_K = {}",
        time_string(median),
        label,
        max_budget
    );
    comparator
        .save_json("compare_log.json")
        .expect("saving json log failed");
    println!("generated compare_log.json");
}
