//! Single-slot delayed callback.
//!
//! The engine has no event loop of its own. It records at most one pending
//! timer; the host waits `delay` and hands the token back through
//! `CropMoveHandler::on_timer`. Scheduling replaces the pending timer, so a
//! token from an earlier schedule no longer fires.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Identifies one scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerToken(pub u64);

/// What a timer does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerKind {
    /// Repeat the bounds-hit event while the box is pinned during a body drag.
    AutoPan,
    /// Ask the viewport to zoom out while a resize drags outside it.
    ZoomOut,
}

/// A timer waiting to be fired by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTimer {
    pub token: TimerToken,
    pub kind: TimerKind,
    pub delay: Duration,
}

#[derive(Debug, Default)]
pub(crate) struct TimerSlot {
    next_token: u64,
    pending: Option<PendingTimer>,
}

impl TimerSlot {
    /// Schedule `kind`, replacing whatever was pending.
    pub(crate) fn schedule(&mut self, kind: TimerKind, delay: Duration) -> TimerToken {
        self.next_token += 1;
        let token = TimerToken(self.next_token);
        self.pending = Some(PendingTimer { token, kind, delay });
        token
    }

    pub(crate) fn clear(&mut self) {
        self.pending = None;
    }

    /// Clear the pending timer only if it is of `kind`.
    pub(crate) fn clear_kind(&mut self, kind: TimerKind) {
        if self.is_armed(kind) {
            self.pending = None;
        }
    }

    pub(crate) fn is_armed(&self, kind: TimerKind) -> bool {
        self.pending.is_some_and(|p| p.kind == kind)
    }

    pub(crate) fn pending(&self) -> Option<PendingTimer> {
        self.pending
    }

    /// Consume the pending timer if `token` is current.
    pub(crate) fn fire(&mut self, token: TimerToken) -> Option<TimerKind> {
        match self.pending {
            Some(p) if p.token == token => {
                self.pending = None;
                Some(p.kind)
            }
            _ => None,
        }
    }
}
