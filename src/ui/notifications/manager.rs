// SPDX-License-Identifier: MPL-2.0
//! Toast queue: a few visible at once, the rest wait their turn.

use super::notification::{Notification, NotificationId, Severity};
use std::collections::VecDeque;
use std::time::Instant;

const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Dismiss(NotificationId),
    /// Periodic check for expired toasts.
    Tick,
}

#[derive(Debug, Default)]
pub struct Manager {
    /// Newest first.
    visible: VecDeque<Notification>,
    queue: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        match notification.severity() {
            Severity::Warning | Severity::Error => tracing::warn!(
                key = notification.message_key(),
                severity = ?notification.severity(),
                "user notification"
            ),
            Severity::Success => tracing::debug!(key = notification.message_key(), "user notification"),
        }

        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Returns `true` if a toast with `id` was visible or queued.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(position) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(position);
            self.promote_from_queue();
            return true;
        }

        if let Some(position) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(position);
            return true;
        }

        false
    }

    pub fn tick(&mut self, now: Instant) {
        let before = self.visible.len();
        self.visible.retain(|n| !n.is_expired_at(now));
        if self.visible.len() < before {
            self.promote_from_queue();
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick => self.tick(Instant::now()),
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// Drives whether the app keeps its toast timer subscription alive.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    fn promote_from_queue(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            match self.queue.pop_front() {
                Some(notification) => self.visible.push_back(notification),
                None => break,
            }
        }
    }
}
