//! # Notifications
//!
//! Every user-visible outcome is a [`Notification`]. The web layer pushes
//! them onto a [`ToastQueue`] and schedules each toast's dismissal.

use crate::error::ClaimError;
use shared::dto::claims::ClaimType;
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationLevel {
    pub fn css_class(&self) -> &'static str {
        match self {
            NotificationLevel::Info => "toast toast-info",
            NotificationLevel::Success => "toast toast-success",
            NotificationLevel::Warning => "toast toast-warning",
            NotificationLevel::Error => "toast toast-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Error, message)
    }

    /// Shown while the simulated encryption delay runs.
    pub fn claim_encrypting(claim_id: &str, claim_type: Option<ClaimType>) -> Self {
        match claim_type {
            Some(claim_type) => Self::info(format!(
                "Encrypting {} claim {}...",
                claim_type.short_label(),
                claim_id
            )),
            None => Self::info(format!("Encrypting claim {}...", claim_id)),
        }
    }

    pub fn claim_submitted(claim_id: &str) -> Self {
        Self::success(format!(
            "Claim {} submitted. Encrypted data is visible only to authorized adjusters.",
            claim_id
        ))
    }
}

impl From<&ClaimError> for Notification {
    fn from(err: &ClaimError) -> Self {
        match err {
            ClaimError::Cancelled => Notification::warning(err.to_string()),
            _ => Notification::error(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

/// Bounded queue of visible toasts, oldest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    next_id: u64,
    capacity: usize,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(crate::config::MAX_TOASTS)
    }
}

impl ToastQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            toasts: VecDeque::new(),
            next_id: 1,
            capacity: capacity.max(1),
        }
    }

    /// Queue a notification and return the id of its toast. The oldest toast
    /// is dropped when the queue is full.
    pub fn push(&mut self, notification: Notification) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        if self.toasts.len() == self.capacity {
            self.toasts.pop_front();
        }
        self.toasts.push_back(Toast { id, notification });
        id
    }

    /// Remove a toast. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        match self.toasts.iter().position(|toast| toast.id == id) {
            Some(index) => {
                self.toasts.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
