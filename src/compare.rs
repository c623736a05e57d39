//! `Comparator` structure for easy latency comparisons of reduction
//! strategies.
use crate::measure::measure;
use crate::stats::{time_string, Nanos, Stats};
use itertools::izip;
use serde::de::DeserializeOwned;
use serde_derive::{Deserialize, Serialize};
use std::fmt::Display;
use std::fs::File;
use std::io::{self, ErrorKind, Write};
use std::iter::repeat_with;
use std::path::Path;
use std::time::Duration;

/// This struct implements a pseudo builder pattern for multi-way
/// latency comparisons of reduction strategies.
///
/// Every attached algorithm is measured `runs_number` times; its run
/// durations are kept sorted and its first result is remembered so the
/// table can show that all strategies agree on the value.
pub struct Comparator<T> {
    labels: Vec<String>,
    durations: Vec<Vec<Duration>>,
    results: Vec<T>,
    runs_number: usize,
}

impl<T: Copy> Comparator<T> {
    /// Creates an empty comparator measuring 100 runs per algorithm.
    pub fn new() -> Self {
        Comparator {
            labels: Vec::new(),
            durations: Vec::new(),
            results: Vec::new(),
            runs_number: 100,
        }
    }

    /// PRECONDITION: call that BEFORE attaching algorithms
    ///
    /// At least one run always happens, whatever `runs_wanted` says.
    pub fn runs_number(mut self, runs_wanted: usize) -> Self {
        self.runs_number = runs_wanted.max(1);
        self
    }

    fn record_experiments<A: Fn() -> T>(&self, algorithm: A) -> (Vec<Duration>, T) {
        let runs: Vec<(T, Duration)> = repeat_with(|| measure(&algorithm))
            .take(self.runs_number)
            .collect();
        let result = runs[0].0;
        let mut durations: Vec<Duration> = runs.into_iter().map(|(_, d)| d).collect();
        durations.sort_unstable();
        (durations, result)
    }

    /// Use this method for attaching an algorithm to the comparator.
    /// The algorithm will be taken as a closure and run as is.
    pub fn attach_algorithm<A, STR>(mut self, label: STR, algorithm: A) -> Self
    where
        A: Fn() -> T,
        STR: Into<String>,
    {
        let (durations, result) = self.record_experiments(algorithm);
        self.durations.push(durations);
        self.results.push(result);
        self.labels.push(label.into());
        self
    }

    /// Attaches the same algorithm once per thread budget, labelled
    /// `"{label} K={budget}"`. This is how a manual reduction gets
    /// swept from one worker up to the hardware thread count.
    pub fn attach_budget_sweep<A, I, STR>(mut self, label: STR, budgets: I, algorithm: A) -> Self
    where
        A: Fn(usize) -> T,
        I: IntoIterator<Item = usize>,
        STR: Into<String>,
    {
        let label = label.into();
        for budget in budgets {
            self = self.attach_algorithm(format!("{} K={}", label, budget), || algorithm(budget));
        }
        self
    }

    /// Label and median run time of the fastest attached algorithm, or
    /// `None` when nothing has been attached yet.
    pub fn best(&self) -> Option<(&str, Nanos)> {
        izip!(self.labels.iter(), self.durations.iter())
            .map(|(label, durations)| (label.as_str(), Stats::from_sorted(durations).median))
            .min_by_key(|&(_, median)| median)
    }

    /// Writes an aligned text table with one line per attached
    /// algorithm: its best, median and mean run times plus its result.
    pub fn write_table<W: Write>(&self, out: &mut W) -> io::Result<()>
    where
        T: Display,
    {
        let width = self
            .labels
            .iter()
            .map(String::len)
            .chain(Some("algorithm".len()))
            .max()
            .unwrap_or(0);
        writeln!(
            out,
            "{:<width$}  {:>10}  {:>10}  {:>10}  result",
            "algorithm",
            "best",
            "median",
            "mean",
            width = width
        )?;
        for (label, durations, result) in
            izip!(self.labels.iter(), self.durations.iter(), self.results.iter())
        {
            let stats = Stats::from_sorted(durations);
            writeln!(
                out,
                "{:<width$}  {:>10}  {:>10}  {:>10}  {}",
                label,
                time_string(stats.best),
                time_string(stats.median),
                time_string(stats.mean),
                result,
                width = width
            )?;
        }
        Ok(())
    }

    /// This method should be called in the end to save all measured
    /// runs to a json file.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> io::Result<()>
    where
        T: serde::Serialize,
    {
        let log = ComparisonLog {
            runs_number: self.runs_number,
            algorithms: izip!(self.labels.iter(), self.durations.iter(), self.results.iter())
                .map(|(label, durations, result)| AlgorithmLog {
                    label: label.clone(),
                    durations: durations.iter().map(|d| d.as_nanos() as Nanos).collect(),
                    result: *result,
                })
                .collect(),
        };
        let file = File::create(path)?;
        serde_json::to_writer(file, &log).map_err(|_| io::Error::from(ErrorKind::InvalidData))
    }
}

impl<T: Copy> Default for Comparator<T> {
    fn default() -> Self {
        Comparator::new()
    }
}

/// All measurements of one comparison, as written to the json log.
#[derive(Debug, Serialize, Deserialize)]
pub struct ComparisonLog<T> {
    /// How many times each algorithm was run.
    pub runs_number: usize,
    /// One entry per attached algorithm, in attachment order.
    pub algorithms: Vec<AlgorithmLog<T>>,
}

/// The measured runs of a single algorithm.
#[derive(Debug, Serialize, Deserialize)]
pub struct AlgorithmLog<T> {
    /// Algorithm name as shown in the table.
    pub label: String,
    /// Run times in nanoseconds, sorted ascending.
    pub durations: Vec<Nanos>,
    /// Scalar computed by the first run.
    pub result: T,
}

impl<T: DeserializeOwned> ComparisonLog<T> {
    /// Load a comparison back from a json file.
    pub fn load<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::open(path)?;
        serde_json::from_reader(file).map_err(|_| ErrorKind::InvalidData.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nanos(values: &[u64]) -> Vec<Duration> {
        values.iter().map(|&n| Duration::from_nanos(n)).collect()
    }

    #[test]
    fn durations_are_recorded_sorted() {
        let comparator = Comparator::new()
            .runs_number(5)
            .attach_algorithm("count", || (0..1000).sum::<u64>());
        let durations = &comparator.durations[0];
        assert_eq!(durations.len(), 5);
        assert!(durations.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(comparator.results[0], 499_500);
    }

    #[test]
    fn sweep_labels_carry_the_budget() {
        let comparator = Comparator::new()
            .runs_number(1)
            .attach_budget_sweep("manual", 1..=3, |budget| budget);
        assert_eq!(
            comparator.labels,
            vec!["manual K=1", "manual K=2", "manual K=3"]
        );
        assert_eq!(comparator.results, vec![1, 2, 3]);
    }

    #[test]
    fn at_least_one_run_always_happens() {
        let comparator = Comparator::new().runs_number(0).attach_algorithm("one", || 1);
        assert_eq!(comparator.durations[0].len(), 1);
    }

    #[test]
    fn best_takes_the_smallest_median() {
        let comparator = Comparator {
            labels: vec!["slow".to_string(), "fast".to_string()],
            durations: vec![nanos(&[50, 60, 70]), nanos(&[10, 20, 90])],
            results: vec![1, 1],
            runs_number: 3,
        };
        assert_eq!(comparator.best(), Some(("fast", 20)));
    }

    #[test]
    fn empty_comparator_has_no_best() {
        let comparator: Comparator<i32> = Comparator::new();
        assert!(comparator.best().is_none());
    }

    #[test]
    fn table_lists_every_algorithm() {
        let comparator = Comparator::new()
            .runs_number(2)
            .attach_algorithm("first", || 1)
            .attach_algorithm("second one", || 2);
        let mut table = Vec::new();
        comparator.write_table(&mut table).unwrap();
        let table = String::from_utf8(table).unwrap();
        assert!(table.contains("algorithm"));
        assert!(table.contains("first"));
        assert!(table.contains("second one"));
    }

    #[test]
    fn json_log_round_trips() {
        let comparator = Comparator::new()
            .runs_number(3)
            .attach_algorithm("sum", || 42i32);
        let path = std::env::temp_dir().join("fork_reduce_comparison_log_test.json");
        comparator.save_json(&path).unwrap();
        let log: ComparisonLog<i32> = ComparisonLog::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(log.runs_number, 3);
        assert_eq!(log.algorithms.len(), 1);
        assert_eq!(log.algorithms[0].label, "sum");
        assert_eq!(log.algorithms[0].durations.len(), 3);
        assert_eq!(log.algorithms[0].result, 42);
    }
}
