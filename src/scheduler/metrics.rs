//! Per-process performance metrics.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Completion | Latest segment end of the process |
//! | Turnaround | completion − arrival |
//! | Waiting | turnaround − burst |
//! | Response | first segment start − arrival |
//!
//! Zero-burst processes never get a segment; by convention their
//! completion is their arrival and every derived figure is 0.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2

use std::collections::HashMap;

use tracing::warn;

use crate::models::{Averages, GanttSegment, ProcessDescriptor, ProcessMetrics};

#[derive(Debug, Clone, Copy)]
struct Span {
    first_start: i64,
    completion: i64,
}

/// Computes the metrics table and its averages.
///
/// Rows follow the order of `processes`. Averages are `None` when
/// `processes` is empty.
pub fn calculate_metrics(
    segments: &[GanttSegment],
    processes: &[ProcessDescriptor],
) -> (Vec<ProcessMetrics>, Option<Averages>) {
    let mut spans: HashMap<&str, Span> = HashMap::new();
    for s in segments {
        spans
            .entry(s.pid.as_str())
            .and_modify(|span| {
                span.first_start = span.first_start.min(s.start);
                span.completion = span.completion.max(s.end);
            })
            .or_insert(Span {
                first_start: s.start,
                completion: s.end,
            });
    }

    let table: Vec<ProcessMetrics> = processes
        .iter()
        .map(|p| {
            let span = spans.get(p.id.as_str()).copied().unwrap_or_else(|| {
                // Unreachable for schedulers honoring the contract
                debug_assert!(p.burst == 0, "process {} never scheduled", p.id);
                if p.burst > 0 {
                    warn!(pid = %p.id, "process missing from timeline, using arrival + burst");
                }
                Span {
                    first_start: p.arrival,
                    completion: p.arrival + p.burst,
                }
            });

            let turnaround = span.completion - p.arrival;
            ProcessMetrics {
                pid: p.id.clone(),
                arrival: p.arrival,
                burst: p.burst,
                completion: span.completion,
                turnaround,
                waiting: turnaround - p.burst,
                response: span.first_start - p.arrival,
            }
        })
        .collect();

    let averages = averages(&table);
    (table, averages)
}

fn averages(table: &[ProcessMetrics]) -> Option<Averages> {
    if table.is_empty() {
        return None;
    }
    let n = table.len() as f64;
    let mean = |f: fn(&ProcessMetrics) -> i64| table.iter().map(|m| f(m) as f64).sum::<f64>() / n;

    Some(Averages {
        waiting: mean(|m| m.waiting),
        turnaround: mean(|m| m.turnaround),
        response: mean(|m| m.response),
    })
}
