//! Browser-side effects: timers, spawned tasks and clipboard access

pub mod clipboard;
pub mod notifications;
pub mod submission;
