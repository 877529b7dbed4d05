//! Derives the single visible notification from the store's
//! mutation-outcome signals.
//!
//! `profile_updated` and `order_canceled` are edge-triggered: only a
//! false-to-true transition between evaluations raises a notification, so a
//! steady flag can never re-open something the user dismissed. `auth_error`
//! is level-triggered and re-asserts on every evaluation until the store
//! clears it.

use std::time::{Duration, Instant};

use shared::store::MutationSignals;
use tracing::debug;

pub const AUTO_DISMISS: Duration = Duration::from_millis(6000);

pub const ORDER_CANCELED_MESSAGE: &str = "Order canceled successfully";
pub const GENERIC_SUCCESS_MESSAGE: &str = "Success";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
}

#[derive(Debug)]
struct VisibleNotification {
    notification: Notification,
    expires_at: Instant,
}

#[derive(Debug, Default)]
pub struct NotificationCoordinator {
    visible: Option<VisibleNotification>,
    profile_updated_seen: bool,
    order_canceled_seen: bool,
}

impl NotificationCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-evaluate against a fresh signal snapshot. Raising a notification
    /// replaces the current one and re-arms the auto-dismiss deadline, so a
    /// stale deadline can never hide a newer notification.
    ///
    /// Priority when several signals are up at once: auth error, then order
    /// cancellation, then profile update.
    pub fn evaluate(&mut self, signals: &MutationSignals, now: Instant) {
        let profile_edge = signals.profile_updated && !self.profile_updated_seen;
        let order_edge = signals.order_canceled && !self.order_canceled_seen;
        self.profile_updated_seen = signals.profile_updated;
        self.order_canceled_seen = signals.order_canceled;

        if signals.auth_error.is_none() && !profile_edge && !order_edge {
            return;
        }

        let notification = if let Some(error) = &signals.auth_error {
            Notification {
                severity: Severity::Error,
                message: error.clone(),
            }
        } else if signals.order_canceled {
            Notification {
                severity: Severity::Success,
                message: ORDER_CANCELED_MESSAGE.to_string(),
            }
        } else {
            Notification {
                severity: Severity::Success,
                message: GENERIC_SUCCESS_MESSAGE.to_string(),
            }
        };

        debug!(severity = ?notification.severity, message = %notification.message, "notification raised");
        self.visible = Some(VisibleNotification {
            notification,
            expires_at: now + AUTO_DISMISS,
        });
    }

    /// Hide the notification. Source signals stay untouched; clearing them
    /// is the store's job.
    pub fn dismiss(&mut self) {
        if self.visible.take().is_some() {
            debug!("notification dismissed");
        }
    }

    /// Hide the notification once its auto-dismiss deadline has passed.
    /// Earlier ticks are no-ops.
    pub fn on_tick(&mut self, now: Instant) {
        let expired = self
            .visible
            .as_ref()
            .map_or(false, |v| v.expires_at <= now);
        if expired {
            debug!("notification auto-dismissed");
            self.visible = None;
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.visible.as_ref().map(|v| &v.notification)
    }
}
