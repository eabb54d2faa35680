//! Transient notification surface
//!
//! Holds at most one notification at a time. A new notification replaces
//! the current one; notifications expire after a fixed TTL or when
//! dismissed.

use chrono::{DateTime, Utc};
use log::debug;
use std::sync::RwLock;

use crate::models::{Notification, NotificationKind};

/// How long a notification stays visible
pub const DEFAULT_TTL_SECS: u64 = 6;

/// Receiver of user-facing messages
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str, kind: NotificationKind);
}

/// Check whether a notification shown at `shown_at` has outlived its TTL.
///
/// Pure so it can be tested without a clock.
pub fn notification_expired(shown_at: DateTime<Utc>, now: DateTime<Utc>, ttl_secs: u64) -> bool {
    (now - shown_at).num_milliseconds() >= (ttl_secs as i64).saturating_mul(1000)
}

/// In-memory notification surface with auto-dismiss
pub struct NotificationCenter {
    current: RwLock<Option<Notification>>,
    ttl_secs: u64,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_TTL_SECS)
    }

    pub fn with_ttl(ttl_secs: u64) -> Self {
        Self {
            current: RwLock::new(None),
            ttl_secs,
        }
    }

    /// Display a notification, replacing any current one
    pub fn show(&self, notification: Notification) {
        debug!("Notification ({}): {}", notification.kind, notification.message);
        if let Ok(mut guard) = self.current.write() {
            *guard = Some(notification);
        }
    }

    /// The visible notification, if any and not yet expired
    pub fn current(&self) -> Option<Notification> {
        self.current_at(Utc::now())
    }

    /// The notification visible at `now`
    pub fn current_at(&self, now: DateTime<Utc>) -> Option<Notification> {
        let guard = self.current.read().ok()?;
        guard
            .as_ref()
            .filter(|n| !notification_expired(n.shown_at, now, self.ttl_secs))
            .cloned()
    }

    /// Dismiss the current notification early
    pub fn dismiss(&self) {
        if let Ok(mut guard) = self.current.write() {
            *guard = None;
        }
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for NotificationCenter {
    fn notify(&self, message: &str, kind: NotificationKind) {
        self.show(Notification::new(message, kind));
    }
}
