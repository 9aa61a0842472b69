//! Rule chain for multi-level selection.
//!
//! Applies selection rules in sequence: a later rule is consulted only
//! when every earlier rule ties. Processes that tie on every rule are
//! ordered by id, so selection never depends on input order.
//!
//! # Reference
//! Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

use std::cmp::Ordering;
use std::sync::Arc;

use super::{RuleKey, SelectionRule};
use crate::models::RuntimeProcessState;

/// A sequence of selection rules, with process id as the final key.
///
/// # Example
/// ```
/// use u_cpusim::dispatching::RuleChain;
/// use u_cpusim::dispatching::rules;
/// use u_cpusim::models::{ProcessDescriptor, RuntimeProcessState};
///
/// let procs: Vec<RuntimeProcessState> = [
///     ProcessDescriptor::new("B", 0, 4),
///     ProcessDescriptor::new("A", 0, 4),
///     ProcessDescriptor::new("C", 0, 9),
/// ]
/// .iter()
/// .map(RuntimeProcessState::from)
/// .collect();
///
/// let chain = RuleChain::new().with_rule(rules::ShortestBurst);
/// // B and A tie on burst; the id tie-breaker picks A
/// assert_eq!(chain.select(&procs, 0..procs.len()), Some(1));
/// ```
#[derive(Clone, Default)]
pub struct RuleChain {
    rules: Vec<Arc<dyn SelectionRule>>,
}

impl RuleChain {
    /// Creates an empty chain that breaks ties by id.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule.
    pub fn with_rule<R: SelectionRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Names of the rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Keys of a process under each rule.
    pub fn keys(&self, process: &RuntimeProcessState) -> Vec<RuleKey> {
        self.rules.iter().map(|r| r.key(process)).collect()
    }

    /// Compares two processes. `Less` means `a` should run first.
    pub fn compare(&self, a: &RuntimeProcessState, b: &RuntimeProcessState) -> Ordering {
        for rule in &self.rules {
            match rule.key(a).cmp(&rule.key(b)) {
                Ordering::Equal => continue,
                other => return other,
            }
        }

        // Lexicographic
        a.id.cmp(&b.id)
    }

    /// Picks the best process among `candidates` (indices into `processes`).
    ///
    /// Returns `None` if there are no candidates.
    pub fn select<I>(&self, processes: &[RuntimeProcessState], candidates: I) -> Option<usize>
    where
        I: IntoIterator<Item = usize>,
    {
        candidates
            .into_iter()
            .min_by(|&a, &b| self.compare(&processes[a], &processes[b]))
    }

    /// Returns all indices of `processes`, best first.
    pub fn sort_indices(&self, processes: &[RuntimeProcessState]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..processes.len()).collect();
        indices.sort_by(|&a, &b| self.compare(&processes[a], &processes[b]));
        indices
    }
}

impl std::fmt::Debug for RuleChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleChain")
            .field("rules", &self.rule_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules;
    use crate::models::ProcessDescriptor;

    fn states(specs: &[(&str, i64, i64, i64)]) -> Vec<RuntimeProcessState> {
        specs
            .iter()
            .map(|&(id, arrival, burst, priority)| {
                RuntimeProcessState::from(
                    &ProcessDescriptor::new(id, arrival, burst).with_priority(priority),
                )
            })
            .collect()
    }

    #[test]
    fn test_single_rule_ordering() {
        let procs = states(&[("long", 0, 9, 0), ("short", 0, 1, 0), ("mid", 0, 4, 0)]);
        let chain = RuleChain::new().with_rule(rules::ShortestBurst);

        let order = chain.sort_indices(&procs);
        assert_eq!(procs[order[0]].id, "short");
        assert_eq!(procs[order[1]].id, "mid");
        assert_eq!(procs[order[2]].id, "long");
    }

    #[test]
    fn test_secondary_rule_on_tie() {
        let procs = states(&[("A", 3, 2, 0), ("B", 1, 2, 0)]);
        let chain = RuleChain::new()
            .with_rule(rules::ShortestBurst)
            .with_rule(rules::EarliestArrival);

        // Equal burst → earlier arrival wins
        assert_eq!(chain.select(&procs, 0..2), Some(1));
    }

    #[test]
    fn test_id_tie_breaker() {
        let procs = states(&[("P2", 0, 3, 0), ("P10", 0, 3, 0)]);
        let chain = RuleChain::new().with_rule(rules::EarliestArrival);

        // Lexicographic: "P10" < "P2"
        assert_eq!(chain.select(&procs, 0..2), Some(1));
    }

    #[test]
    fn test_full_tie_ignores_input_order() {
        let forward = states(&[("Z", 0, 3, 0), ("A", 0, 3, 0)]);
        let reversed = states(&[("A", 0, 3, 0), ("Z", 0, 3, 0)]);
        let chain = RuleChain::new().with_rule(rules::EarliestArrival);

        assert_eq!(forward[chain.select(&forward, 0..2).unwrap()].id, "A");
        assert_eq!(reversed[chain.select(&reversed, 0..2).unwrap()].id, "A");
        assert_eq!(chain.sort_indices(&forward), vec![1, 0]);
    }

    #[test]
    fn test_select_restricted_candidates() {
        let procs = states(&[("A", 0, 1, 0), ("B", 0, 5, 0), ("C", 0, 3, 0)]);
        let chain = RuleChain::new().with_rule(rules::ShortestBurst);
        assert_eq!(chain.select(&procs, [1, 2]), Some(2));
        assert_eq!(chain.select(&procs, std::iter::empty()), None);
    }

    #[test]
    fn test_keys() {
        let procs = states(&[("A", 2, 7, 4)]);
        let chain = RuleChain::new()
            .with_rule(rules::HighestPriority)
            .with_rule(rules::EarliestArrival);
        assert_eq!(chain.keys(&procs[0]), vec![4, 2]);
        assert_eq!(chain.rule_names(), vec!["PRI", "EA"]);
    }

    #[test]
    fn test_debug_lists_rules() {
        let chain = RuleChain::new().with_rule(rules::ShortestRemaining);
        let dbg = format!("{chain:?}");
        assert!(dbg.contains("SR"));
    }
}
