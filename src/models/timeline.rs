//! Gantt timeline model.
//!
//! A timeline is the ordered list of intervals during which a process
//! occupies the CPU. Tick-based schedulers produce many adjoining runs of
//! the same process; [`Timeline::record`] coalesces them as they arrive.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

use serde::{Deserialize, Serialize};

/// A contiguous interval `[start, end)` on the CPU.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GanttSegment {
    /// Process occupying the CPU.
    pub pid: String,
    /// Start time (inclusive).
    pub start: i64,
    /// End time (exclusive). Always greater than `start`.
    pub end: i64,
}

impl GanttSegment {
    /// Creates a new segment.
    pub fn new(pid: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            pid: pid.into(),
            start,
            end,
        }
    }

    /// Length of the interval.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }

    /// Whether this segment shares any instant with `other`.
    #[inline]
    pub fn overlaps(&self, other: &GanttSegment) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Builder for an ordered, merged list of segments.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    segments: Vec<GanttSegment>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `pid` ran during `[start, end)`.
    ///
    /// Empty intervals are dropped. The interval is merged into the last
    /// segment iff it belongs to the same process and starts exactly
    /// where that segment ends.
    pub fn record(&mut self, pid: &str, start: i64, end: i64) {
        if end <= start {
            return;
        }
        if let Some(last) = self.segments.last_mut() {
            if last.pid == pid && last.end == start {
                last.end = end;
                return;
            }
        }
        self.segments.push(GanttSegment::new(pid, start, end));
    }

    /// Number of segments recorded so far.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// End of the last segment, or 0.
    pub fn end_time(&self) -> i64 {
        self.segments.last().map(|s| s.end).unwrap_or(0)
    }

    /// Consumes the timeline and returns its segments.
    pub fn into_segments(self) -> Vec<GanttSegment> {
        self.segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_duration() {
        let s = GanttSegment::new("P1", 3, 8);
        assert_eq!(s.duration(), 5);
    }

    #[test]
    fn test_segment_overlap() {
        let a = GanttSegment::new("P1", 0, 5);
        let b = GanttSegment::new("P2", 5, 8);
        let c = GanttSegment::new("P3", 4, 6);
        assert!(!a.overlaps(&b)); // Half-open intervals touch but don't overlap
        assert!(a.overlaps(&c));
        assert!(b.overlaps(&c));
    }

    #[test]
    fn test_merge_contiguous_same_pid() {
        let mut t = Timeline::new();
        t.record("P1", 0, 1);
        t.record("P1", 1, 2);
        t.record("P1", 2, 4);
        assert_eq!(t.into_segments(), vec![GanttSegment::new("P1", 0, 4)]);
    }

    #[test]
    fn test_no_merge_across_gap() {
        let mut t = Timeline::new();
        t.record("P1", 0, 2);
        t.record("P1", 3, 4); // Idle instant between
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn test_no_merge_different_pid() {
        let mut t = Timeline::new();
        t.record("P1", 0, 2);
        t.record("P2", 2, 3);
        t.record("P1", 3, 4);
        let segs = t.into_segments();
        assert_eq!(segs.len(), 3);
        assert_eq!(segs[2], GanttSegment::new("P1", 3, 4));
    }

    #[test]
    fn test_empty_interval_dropped() {
        let mut t = Timeline::new();
        t.record("P1", 4, 4);
        assert!(t.is_empty());
        assert_eq!(t.end_time(), 0);
    }
}
