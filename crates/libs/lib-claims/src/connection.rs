//! Wallet connection flag.
//!
//! Purely a UI flag: connecting does not talk to any wallet provider.

use crate::notify::Notification;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConnectionState {
    connected: bool,
}

impl ConnectionState {
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Flip the flag and describe the new state.
    pub fn toggle(self) -> (Self, Notification) {
        let next = Self {
            connected: !self.connected,
        };
        log::info!("wallet connection toggled: connected={}", next.connected);

        let notification = if next.connected {
            Notification::success("Wallet connected")
        } else {
            Notification::info("Wallet disconnected")
        };
        (next, notification)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::NotificationLevel;

    #[test]
    fn test_starts_disconnected() {
        assert!(!ConnectionState::default().is_connected());
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let start = ConnectionState::default();
        let (connected, note) = start.toggle();
        assert!(connected.is_connected());
        assert_eq!(note.level, NotificationLevel::Success);

        let (back, note) = connected.toggle();
        assert_eq!(back, start);
        assert_eq!(note.message, "Wallet disconnected");
    }
}
