//! Process workloads for demos and experiments.
//!
//! - [`sample_processes`]: the classic four-process teaching example.
//! - [`bernoulli_workload`]: reproducible random arrivals from a seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::models::ProcessDescriptor;

/// The four-process teaching example.
///
/// | Process | Arrival | Burst | Priority |
/// |---------|---------|-------|----------|
/// | P1 | 0 | 5 | 2 |
/// | P2 | 1 | 3 | 1 |
/// | P3 | 2 | 8 | 3 |
/// | P4 | 3 | 6 | 4 |
pub fn sample_processes() -> Vec<ProcessDescriptor> {
    vec![
        ProcessDescriptor::new("P1", 0, 5).with_priority(2),
        ProcessDescriptor::new("P2", 1, 3).with_priority(1),
        ProcessDescriptor::new("P3", 2, 8).with_priority(3),
        ProcessDescriptor::new("P4", 3, 6).with_priority(4),
    ]
}

/// Parameters for [`bernoulli_workload`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadConfig {
    /// Number of ticks during which processes may arrive.
    pub horizon: i64,
    /// Probability that a process arrives at a given tick.
    pub p_arrival: f64,
    /// Probability that an arriving process is short.
    pub p_short: f64,
    /// Burst of a short process.
    pub short_burst: i64,
    /// Burst of a long process.
    pub long_burst: i64,
    /// Inclusive priority range.
    pub priority_range: (i64, i64),
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            horizon: 20,
            p_arrival: 0.3,
            p_short: 0.5,
            short_burst: 2,
            long_burst: 6,
            priority_range: (1, 5),
        }
    }
}

impl WorkloadConfig {
    /// Sets the arrival horizon.
    pub fn with_horizon(mut self, horizon: i64) -> Self {
        self.horizon = horizon;
        self
    }

    /// Sets the per-tick arrival probability.
    pub fn with_arrival_probability(mut self, p: f64) -> Self {
        self.p_arrival = p;
        self
    }

    /// Sets the short/long mix and the two burst lengths.
    pub fn with_bursts(mut self, p_short: f64, short_burst: i64, long_burst: i64) -> Self {
        self.p_short = p_short;
        self.short_burst = short_burst;
        self.long_burst = long_burst;
        self
    }

    /// Sets the inclusive priority range.
    pub fn with_priority_range(mut self, low: i64, high: i64) -> Self {
        self.priority_range = (low, high);
        self
    }
}

/// Generates a workload with Bernoulli arrivals.
///
/// At each tick in `[0, horizon)` a process arrives with probability
/// `p_arrival`. It is short with probability `p_short`. Ids are `P1..Pn`
/// in arrival order. The same seed always yields the same workload.
pub fn bernoulli_workload(config: &WorkloadConfig, seed: u64) -> Vec<ProcessDescriptor> {
    let mut rng = StdRng::seed_from_u64(seed);
    let (low, high) = if config.priority_range.0 <= config.priority_range.1 {
        config.priority_range
    } else {
        (config.priority_range.1, config.priority_range.0)
    };

    let mut processes = Vec::new();
    for tick in 0..config.horizon.max(0) {
        if rng.random::<f64>() < config.p_arrival {
            let burst = if rng.random::<f64>() < config.p_short {
                config.short_burst
            } else {
                config.long_burst
            };
            let priority = rng.random_range(low..=high);
            let id = format!("P{}", processes.len() + 1);
            processes.push(ProcessDescriptor::new(id, tick, burst.max(0)).with_priority(priority));
        }
    }
    processes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::{simulate_processes, Policy};

    #[test]
    fn test_sample_processes() {
        let ps = sample_processes();
        assert_eq!(ps.len(), 4);
        assert_eq!(ps[3], ProcessDescriptor::new("P4", 3, 6).with_priority(4));
    }

    #[test]
    fn test_sample_fcfs() {
        let r = simulate_processes(&sample_processes(), Policy::Fcfs, 2).unwrap();
        assert_eq!(r.makespan(), 22);
        // waits: 0, 4, 6, 13
        assert!((r.averages.unwrap().waiting - 5.75).abs() < 1e-10);
    }

    #[test]
    fn test_workload_reproducible() {
        let config = WorkloadConfig::default().with_horizon(50);
        assert_eq!(bernoulli_workload(&config, 7), bernoulli_workload(&config, 7));
    }

    #[test]
    fn test_workload_shape() {
        let config = WorkloadConfig::default()
            .with_horizon(100)
            .with_arrival_probability(0.5)
            .with_bursts(0.5, 1, 4)
            .with_priority_range(3, 0);
        let ps = bernoulli_workload(&config, 42);

        assert!(!ps.is_empty());
        for (i, p) in ps.iter().enumerate() {
            assert_eq!(p.id, format!("P{}", i + 1));
            assert!((0..100).contains(&p.arrival));
            assert!(p.burst == 1 || p.burst == 4);
            assert!((0..=3).contains(&p.priority));
        }
        assert!(ps.windows(2).all(|w| w[0].arrival < w[1].arrival));
    }

    #[test]
    fn test_workload_edge_probabilities() {
        let never = WorkloadConfig::default().with_arrival_probability(0.0);
        assert!(bernoulli_workload(&never, 1).is_empty());

        let always = WorkloadConfig::default().with_horizon(10).with_arrival_probability(1.0);
        assert_eq!(bernoulli_workload(&always, 1).len(), 10);
    }

    #[test]
    fn test_workload_simulates_under_all_policies() {
        let ps = bernoulli_workload(&WorkloadConfig::default().with_horizon(40), 3);
        for policy in Policy::ALL {
            let r = simulate_processes(&ps, policy, 3).unwrap();
            assert_eq!(r.metrics.len(), ps.len());
        }
    }
}
