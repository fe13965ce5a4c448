// SPDX-License-Identifier: MPL-2.0
//! Infinite-load gate: decides when scrolling should append another batch.
//!
//! Triggering is scroll-driven and can fire faster than a batch settles, so
//! the gate tracks an explicit in-flight flag. With the synchronous item
//! source a request settles immediately; with a real asynchronous source the
//! same flag de-duplicates overlapping triggers.

/// Lifecycle phase of the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No items yet.
    Empty,
    /// Below the ceiling; more batches may arrive.
    Partial,
    /// At or above the ceiling; load-more is permanently a no-op.
    Complete,
}

/// Whether an item already exists at `index`.
#[must_use]
pub fn is_item_loaded(loaded: usize, index: usize) -> bool {
    index < loaded
}

/// Gate that turns visible-range reports into load-more decisions.
#[derive(Debug, Clone)]
pub struct LoadGate {
    item_ceiling: usize,
    threshold_rows: usize,
    in_flight: bool,
    request_count: u64,
}

impl LoadGate {
    /// Creates a gate for the given ceiling and lookahead threshold.
    #[must_use]
    pub fn new(item_ceiling: usize, threshold_rows: usize) -> Self {
        Self {
            item_ceiling,
            threshold_rows,
            in_flight: false,
            request_count: 0,
        }
    }

    /// Maximum total item count.
    #[must_use]
    pub fn item_ceiling(&self) -> usize {
        self.item_ceiling
    }

    /// Lifecycle phase for `loaded` items.
    #[must_use]
    pub fn phase(&self, loaded: usize) -> Phase {
        if loaded == 0 {
            Phase::Empty
        } else if loaded < self.item_ceiling {
            Phase::Partial
        } else {
            Phase::Complete
        }
    }

    /// Row count reported to the loader: the loaded count, plus one trailing
    /// placeholder row while more items can still arrive.
    #[must_use]
    pub fn row_count(&self, loaded: usize) -> usize {
        if loaded >= self.item_ceiling {
            loaded
        } else {
            loaded + 1
        }
    }

    /// Whether the visible range justifies a load-more request.
    ///
    /// True when scrolling has come within `threshold_rows` of the first
    /// unloaded row, no request is in flight, and the ceiling is not reached.
    /// `last_visible` is `None` when nothing is placed yet (the empty
    /// gallery), which also triggers the initial fill.
    #[must_use]
    pub fn should_load(&self, loaded: usize, last_visible: Option<usize>) -> bool {
        if self.in_flight || loaded >= self.item_ceiling {
            return false;
        }
        match last_visible {
            None => true,
            Some(index) => index + self.threshold_rows + 1 >= loaded,
        }
    }

    /// Marks a request as started and returns its ordinal (1-based) for
    /// logging.
    pub fn begin(&mut self) -> u64 {
        self.in_flight = true;
        self.request_count += 1;
        self.request_count
    }

    /// Marks the in-flight request as settled.
    pub fn settle(&mut self) {
        self.in_flight = false;
    }

    /// Whether a request is currently in flight.
    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Total requests started so far.
    #[must_use]
    pub fn request_count(&self) -> u64 {
        self.request_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_item_loaded_matches_prefix() {
        assert!(!is_item_loaded(0, 0));
        assert!(is_item_loaded(50, 0));
        assert!(is_item_loaded(50, 49));
        assert!(!is_item_loaded(50, 50));
        assert!(!is_item_loaded(50, 1000));
    }

    #[test]
    fn row_count_adds_placeholder_until_ceiling() {
        let gate = LoadGate::new(1000, 5);
        assert_eq!(gate.row_count(0), 1);
        assert_eq!(gate.row_count(50), 51);
        assert_eq!(gate.row_count(999), 1000);
        assert_eq!(gate.row_count(1000), 1000);
        assert_eq!(gate.row_count(1050), 1050);
    }

    #[test]
    fn phases_progress_and_never_regress_past_ceiling() {
        let gate = LoadGate::new(1000, 5);
        assert_eq!(gate.phase(0), Phase::Empty);
        assert_eq!(gate.phase(50), Phase::Partial);
        assert_eq!(gate.phase(999), Phase::Partial);
        assert_eq!(gate.phase(1000), Phase::Complete);
        assert_eq!(gate.phase(1050), Phase::Complete);
    }

    #[test]
    fn should_load_respects_threshold() {
        let gate = LoadGate::new(1000, 5);
        // Last visible row 44 of 50 loaded: 44 + 5 + 1 == 50, inside lookahead.
        assert!(gate.should_load(50, Some(44)));
        // Row 43 is one row too early.
        assert!(!gate.should_load(50, Some(43)));
        // Nothing placed yet: trigger the initial fill.
        assert!(gate.should_load(0, None));
    }

    #[test]
    fn should_load_is_false_at_ceiling() {
        let gate = LoadGate::new(1000, 5);
        assert!(!gate.should_load(1000, Some(999)));
        assert!(!gate.should_load(1000, None));
    }

    #[test]
    fn in_flight_suppresses_duplicate_triggers() {
        let mut gate = LoadGate::new(1000, 5);
        assert!(gate.should_load(50, Some(49)));
        let ordinal = gate.begin();
        assert_eq!(ordinal, 1);
        assert!(gate.is_in_flight());
        // Redundant scroll trigger while the request is outstanding.
        assert!(!gate.should_load(50, Some(49)));
        gate.settle();
        assert!(gate.should_load(50, Some(49)));
        assert_eq!(gate.begin(), 2);
    }
}
