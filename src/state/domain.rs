//! Subdomain availability check state
//!
//! Debounce and stale-response bookkeeping for the remote availability
//! probe. The machine is driven by injected `Instant`s so the app loop
//! decides when time passes; nothing here performs I/O.

use std::time::{Duration, Instant};

/// Input quiescence required before a probe is issued
pub const DEBOUNCE: Duration = Duration::from_millis(500);

/// Minimum label length worth probing
pub const MIN_PROBE_LEN: usize = 3;

/// Availability status of the current subdomain label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DomainStatus {
    #[default]
    Idle,
    Checking,
    Available,
    Unavailable,
}

/// A probe the app must issue against the remote service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Probe {
    pub seq: u64,
    pub label: String,
}

/// Result of a finished probe, as seen by the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    Available,
    Unavailable,
    /// Transport or protocol failure; absorbed, drops back to Idle
    Failed,
}

#[derive(Debug, Clone)]
struct Pending {
    label: String,
    due: Instant,
}

/// Debounced availability checker.
///
/// Each issued probe carries a sequence number; only the result of the
/// most recently issued probe may be applied, and any edit invalidates
/// the in-flight probe outright. Out-of-order responses therefore can
/// never overwrite state for a newer label.
#[derive(Debug, Clone, Default)]
pub struct DomainCheck {
    status: DomainStatus,
    pending: Option<Pending>,
    next_seq: u64,
    live: Option<u64>,
}

impl DomainCheck {
    pub fn status(&self) -> DomainStatus {
        self.status
    }

    /// Record an edit of the subdomain label.
    ///
    /// Any in-flight probe becomes stale. Labels shorter than
    /// [`MIN_PROBE_LEN`] reset to Idle without scheduling a probe; longer
    /// ones (re)start the debounce window.
    pub fn input_changed(&mut self, label: &str, now: Instant) {
        self.live = None;
        if label.len() < MIN_PROBE_LEN {
            self.pending = None;
            self.status = DomainStatus::Idle;
        } else {
            self.pending = Some(Pending {
                label: label.to_string(),
                due: now + DEBOUNCE,
            });
        }
    }

    /// Yield the probe to issue, if the debounce window has elapsed.
    ///
    /// Issuing moves the status to Checking and hands out the next
    /// sequence number; each scheduled probe is yielded at most once.
    pub fn due_probe(&mut self, now: Instant) -> Option<Probe> {
        if !self.pending.as_ref().is_some_and(|p| p.due <= now) {
            return None;
        }
        let pending = self.pending.take()?;
        self.next_seq += 1;
        self.live = Some(self.next_seq);
        self.status = DomainStatus::Checking;
        Some(Probe {
            seq: self.next_seq,
            label: pending.label,
        })
    }

    /// Apply a probe result. Returns false when the result is stale
    /// (superseded by a newer edit or probe) and was ignored.
    pub fn apply(&mut self, seq: u64, outcome: ProbeOutcome) -> bool {
        if self.live != Some(seq) {
            return false;
        }
        self.live = None;
        self.status = match outcome {
            ProbeOutcome::Available => DomainStatus::Available,
            ProbeOutcome::Unavailable => DomainStatus::Unavailable,
            ProbeOutcome::Failed => DomainStatus::Idle,
        };
        true
    }

    /// Forget everything; used when the form is reset
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
