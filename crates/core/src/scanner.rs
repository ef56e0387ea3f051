//! Scan validation: the verdict policy and the scanner session state machine.
//!
//! The flow is `scanning -> decoded -> valid | invalid -> scanning`. Decoding
//! a payload suspends capture (the camera is released); only an explicit
//! "scan again" re-acquires it. Device failures never move the session out of
//! `scanning` -- they are reported and the camera keeps trying.

use crate::types::Timestamp;

/// Outcome of validating a looked-up ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanVerdict {
    Valid,
    Expired,
    NotFound,
}

impl ScanVerdict {
    pub fn is_valid(self) -> bool {
        matches!(self, ScanVerdict::Valid)
    }

    /// User-facing status line for the scanner display.
    pub fn message(self) -> &'static str {
        match self {
            ScanVerdict::Valid => "Valid ticket",
            ScanVerdict::Expired => "Ticket has expired",
            ScanVerdict::NotFound => "Ticket not found",
        }
    }
}

/// Decide the verdict for a lookup result.
///
/// `purchase_date` is `None` when no ticket matched the decoded code; lookup
/// errors are treated the same way by callers.
///
/// Expiry compares the purchase timestamp against `now`, matching the
/// shipped behavior.
// TODO: expiry should almost certainly compare the event date instead of the
// purchase date; pending a product decision, the purchase-date comparison
// stays and is pinned by `test_expiry_uses_purchase_date`.
pub fn evaluate(purchase_date: Option<Timestamp>, now: Timestamp) -> ScanVerdict {
    match purchase_date {
        None => ScanVerdict::NotFound,
        Some(purchased) if purchased < now => ScanVerdict::Expired,
        Some(_) => ScanVerdict::Valid,
    }
}

/// The scanner's display phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScannerPhase {
    /// Camera active, waiting for a decodable frame.
    Scanning,
    /// A payload was captured; lookup is in flight.
    Decoded(String),
    /// Terminal display state until the user scans again.
    Valid,
    /// Terminal display state until the user scans again.
    Invalid(ScanVerdict),
}

/// One scanner session: phase plus the capture-device lifecycle.
///
/// The capture flag models the camera handle; every transition that leaves
/// `Scanning` must release it, and only [`ScannerSession::scan_again`]
/// re-acquires it.
#[derive(Debug)]
pub struct ScannerSession {
    phase: ScannerPhase,
    capturing: bool,
}

impl ScannerSession {
    /// Start a session with the camera acquired.
    pub fn new() -> Self {
        Self {
            phase: ScannerPhase::Scanning,
            capturing: true,
        }
    }

    pub fn phase(&self) -> &ScannerPhase {
        &self.phase
    }

    /// Whether the capture device is currently held.
    pub fn is_capturing(&self) -> bool {
        self.capturing
    }

    /// Feed a decoded payload. Returns `true` when the session moved to
    /// `Decoded`; empty payloads and payloads arriving outside `Scanning`
    /// are ignored.
    pub fn on_decode(&mut self, text: &str) -> bool {
        if self.phase != ScannerPhase::Scanning || text.is_empty() {
            return false;
        }
        self.phase = ScannerPhase::Decoded(text.to_string());
        self.capturing = false;
        true
    }

    /// A device acquisition or frame error. The session stays in `Scanning`
    /// so the next frame can still succeed.
    pub fn on_device_error(&mut self) {
        debug_assert_eq!(self.phase, ScannerPhase::Scanning);
    }

    /// Apply the lookup verdict to a `Decoded` session.
    pub fn resolve(&mut self, verdict: ScanVerdict) {
        if !matches!(self.phase, ScannerPhase::Decoded(_)) {
            return;
        }
        self.phase = if verdict.is_valid() {
            ScannerPhase::Valid
        } else {
            ScannerPhase::Invalid(verdict)
        };
    }

    /// Explicit user action from a terminal state: back to `Scanning` with
    /// the camera re-acquired.
    pub fn scan_again(&mut self) {
        if matches!(self.phase, ScannerPhase::Valid | ScannerPhase::Invalid(_)) {
            self.phase = ScannerPhase::Scanning;
            self.capturing = true;
        }
    }

    /// Tear the session down, releasing the device regardless of phase.
    pub fn shutdown(&mut self) {
        self.capturing = false;
    }
}

impl Default for ScannerSession {
    fn default() -> Self {
        Self::new()
    }
}
