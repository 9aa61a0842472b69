//! Selection rules and rule chains for picking the next process.
//!
//! Every scheduler in this crate is the same state machine
//! (`Unarrived → Ready → Running → Finished`) with a different selection
//! rule and run length. This module provides the selection half.
//!
//! # Usage
//!
//! ```
//! use u_cpusim::dispatching::RuleChain;
//! use u_cpusim::dispatching::rules;
//!
//! // SJF: shortest burst, then earliest arrival, then id
//! let chain = RuleChain::new()
//!     .with_rule(rules::ShortestBurst)
//!     .with_rule(rules::EarliestArrival);
//! assert_eq!(chain.rule_names(), vec!["SB", "EA"]);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

mod engine;
pub mod rules;

pub use engine::RuleChain;

use crate::models::RuntimeProcessState;
use std::fmt::Debug;

/// Key returned by a selection rule.
///
/// Lower keys = selected first. Keys are integers so comparisons are exact.
pub type RuleKey = i64;

/// A rule that ranks ready processes.
///
/// # Key Convention
/// **Lower key = higher priority.** Rules should return smaller values
/// for processes that should get the CPU first.
pub trait SelectionRule: Send + Sync + Debug {
    /// Rule name (e.g., "SR", "PRI").
    fn name(&self) -> &'static str;

    /// Ranks a process in its current runtime state.
    fn key(&self, process: &RuntimeProcessState) -> RuleKey;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
