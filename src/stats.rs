//! Summary statistics over measured run times.
use std::time::Duration;

/// Nanosecond count, the unit every summary is expressed in.
pub type Nanos = u64;

/// Summary of the measured runs of one algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    /// Fastest run.
    pub best: Nanos,
    /// Middle run of the sorted series.
    pub median: Nanos,
    /// Arithmetic mean across all runs.
    pub mean: Nanos,
}

impl Stats {
    /// Summarizes a series of run times.
    ///
    /// PRECONDITION: `durations` is sorted ascending and non-empty.
    pub(crate) fn from_sorted(durations: &[Duration]) -> Self {
        debug_assert!(!durations.is_empty());
        debug_assert!(durations.windows(2).all(|w| w[0] <= w[1]));
        let nanos: Vec<Nanos> = durations.iter().map(|d| d.as_nanos() as Nanos).collect();
        Stats {
            best: nanos[0],
            median: nanos[nanos.len() / 2],
            mean: nanos.iter().sum::<Nanos>() / nanos.len() as Nanos,
        }
    }
}

/// Turns a nanosecond count into a short human readable time.
pub fn time_string(nano: Nanos) -> String {
    match nano {
        n if n < 1_000 => format!("{}ns", n),
        n if n < 1_000_000 => format!("{:.2}us", (n as f64 / 1_000.0)),
        n if n < 1_000_000_000 => format!("{:.2}ms", (n as f64 / 1_000_000.0)),
        n if n < 60_000_000_000 => format!("{:.2}s", (n as f64 / 1_000_000_000.0)),
        n => format!(
            "{}m{:.0}s",
            n / 60_000_000_000,
            (n % 60_000_000_000) as f64 / 1_000_000_000.0
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn durations(nanos: &[u64]) -> Vec<Duration> {
        nanos.iter().map(|&n| Duration::from_nanos(n)).collect()
    }

    #[test]
    fn summary_of_a_skewed_series() {
        let stats = Stats::from_sorted(&durations(&[1, 2, 3, 4, 100]));
        assert_eq!(stats.best, 1);
        assert_eq!(stats.median, 3);
        assert_eq!(stats.mean, 22);
    }

    #[test]
    fn single_run_is_its_own_summary() {
        let stats = Stats::from_sorted(&durations(&[7]));
        assert_eq!(stats.best, 7);
        assert_eq!(stats.median, 7);
        assert_eq!(stats.mean, 7);
    }

    #[test]
    fn even_series_takes_the_upper_middle() {
        let stats = Stats::from_sorted(&durations(&[10, 20, 30, 40]));
        assert_eq!(stats.median, 30);
    }

    #[test]
    fn readable_times() {
        assert_eq!(time_string(432), "432ns");
        assert_eq!(time_string(1_500), "1.50us");
        assert_eq!(time_string(2_000_000), "2.00ms");
        assert_eq!(time_string(3_140_000_000), "3.14s");
        assert_eq!(time_string(90_000_000_000), "1m30s");
    }
}
