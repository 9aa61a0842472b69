//! Single-CPU scheduling simulator for the U-Engine ecosystem.
//!
//! Given a set of processes (arrival, burst, priority) and a policy,
//! computes the Gantt timeline and per-process performance metrics.
//! Each run is a pure batch computation over a fixed snapshot of input.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `ProcessDescriptor`, `RawProcess`,
//!   `GanttSegment`, `Timeline`, `ProcessMetrics`, `SimulationResult`
//! - **`validation`**: Input normalization (positional ids, duplicate ids,
//!   numeric coercion)
//! - **`dispatching`**: Selection rules and tie-breaking rule chains
//! - **`scheduler`**: FCFS, SJF, SRTF, Round Robin, preemptive Priority,
//!   metrics and KPIs
//! - **`simulation`**: Policy selection and the `simulate` entry point
//! - **`workload`**: Sample and seeded random process sets
//!
//! # Example
//!
//! ```
//! use u_cpusim::simulation::{simulate_processes, Policy};
//! use u_cpusim::workload::sample_processes;
//!
//! let result = simulate_processes(&sample_processes(), Policy::Srtf, 2).unwrap();
//! assert_eq!(result.dispatch_order(), vec!["P1", "P2", "P4", "P3"]);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod dispatching;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod simulation;
pub mod validation;
pub mod workload;

pub use error::{ConfigError, SimulationError};
pub use simulation::{simulate, simulate_processes, Policy, SimulationRequest};
