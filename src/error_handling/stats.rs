//! Processing statistics tracking.
//!
//! This module provides thread-safe counters for emitted records, skips and
//! invalid input lines during a batch run.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::SkipReason;
use crate::assemble::Outcome;

/// Thread-safe processing statistics tracker.
///
/// Tracks outcomes using atomic counters, so a host may share one instance
/// across worker threads behind an `Arc`. Every [`SkipReason`] is initialized
/// to zero on creation.
pub struct ProcessingStats {
    emitted: AtomicUsize,
    skips: HashMap<SkipReason, AtomicUsize>,
    invalid_input: AtomicUsize,
}

impl ProcessingStats {
    pub fn new() -> Self {
        let mut skips = HashMap::new();
        for reason in SkipReason::iter() {
            skips.insert(reason, AtomicUsize::new(0));
        }

        ProcessingStats {
            emitted: AtomicUsize::new(0),
            skips,
            invalid_input: AtomicUsize::new(0),
        }
    }

    /// Records the outcome of one transform call.
    pub fn record(&self, outcome: &Outcome) {
        match outcome {
            Outcome::Emit(_) => self.increment_emitted(),
            Outcome::Skip(reason) => self.increment_skip(*reason),
        }
    }

    pub fn increment_emitted(&self) {
        self.emitted.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment a skip counter.
    ///
    /// Every variant is inserted by `new()`, so a miss means the map and the
    /// enum disagree; that is logged rather than panicking mid-batch.
    pub fn increment_skip(&self, reason: SkipReason) {
        if let Some(counter) = self.skips.get(&reason) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment skip counter for {:?} which is not in the map. \
                 This indicates a bug in ProcessingStats initialization.",
                reason
            );
        }
    }

    pub fn increment_invalid_input(&self) {
        self.invalid_input.fetch_add(1, Ordering::Relaxed);
    }

    pub fn emitted(&self) -> usize {
        self.emitted.load(Ordering::SeqCst)
    }

    /// Get the count for a skip reason.
    pub fn get_skip_count(&self, reason: SkipReason) -> usize {
        self.skips
            .get(&reason)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    pub fn total_skipped(&self) -> usize {
        self.skips.values().map(|c| c.load(Ordering::SeqCst)).sum()
    }

    pub fn invalid_input(&self) -> usize {
        self.invalid_input.load(Ordering::SeqCst)
    }

    /// Total records seen, valid or not.
    pub fn total(&self) -> usize {
        self.emitted() + self.total_skipped() + self.invalid_input()
    }

    /// Logs a one-line summary plus one line per non-zero skip reason.
    pub fn log_summary(&self) {
        log::info!(
            "Processed {} record(s): {} emitted, {} skipped, {} invalid",
            self.total(),
            self.emitted(),
            self.total_skipped(),
            self.invalid_input()
        );
        for reason in SkipReason::iter() {
            let count = self.get_skip_count(reason);
            if count > 0 {
                log::info!("   {}: {}", reason, count);
            }
        }
    }
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}
