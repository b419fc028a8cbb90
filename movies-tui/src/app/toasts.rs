use std::collections::VecDeque;
use std::time::{Duration, Instant};

use super::search::{Notification, NotificationKind};

const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone)]
pub struct Toast {
    pub notification: Notification,
    pub expires_at: Instant,
}

/// Short-lived notifications, newest last.
#[derive(Debug)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    info_ttl: Duration,
    error_ttl: Duration,
}

impl ToastQueue {
    pub fn new(info_ttl: Duration, error_ttl: Duration) -> Self {
        Self {
            toasts: VecDeque::new(),
            info_ttl,
            error_ttl,
        }
    }

    pub fn push(&mut self, notification: Notification, now: Instant) {
        let ttl = match notification.kind {
            NotificationKind::Info => self.info_ttl,
            NotificationKind::Error => self.error_ttl,
        };
        self.toasts.push_back(Toast {
            notification,
            expires_at: now + ttl,
        });
        while self.toasts.len() > MAX_VISIBLE {
            self.toasts.pop_front();
        }
    }

    /// Drop expired toasts.
    pub fn prune(&mut self, now: Instant) {
        self.toasts.retain(|t| t.expires_at > now);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
