use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogKind {
    Error,
    Info,
}

/// A message box waiting to be dismissed.
pub struct Dialog {
    pub kind: DialogKind,
    pub message: String,
}

/// A short-lived notice that clears itself.
pub struct Toast {
    pub message: String,
    pub expires_at: Instant,
}

impl Toast {
    pub fn new(message: String, duration: Duration) -> Self {
        Self {
            message,
            expires_at: Instant::now() + duration,
        }
    }

    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.expires_at.checked_duration_since(now).filter(|d| !d.is_zero())
    }
}

/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    pub log_messages: Vec<String>,
    pub dialog: Option<Dialog>,
    pub toast: Option<Toast>,
    pub show_about: bool,
    pub show_preferences: bool,
    /// Files are being dragged over the window.
    pub drop_hover: bool,
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }

    pub fn show_error(&mut self, message: String) {
        self.add_log(format!("ERROR: {message}"));
        self.dialog = Some(Dialog {
            kind: DialogKind::Error,
            message,
        });
    }

    pub fn show_info(&mut self, message: String) {
        self.add_log(message.clone());
        self.dialog = Some(Dialog {
            kind: DialogKind::Info,
            message,
        });
    }

    pub fn show_toast(&mut self, message: String, duration: Duration) {
        self.add_log(message.clone());
        self.toast = Some(Toast::new(message, duration));
    }

    /// Drop the toast once it has expired; otherwise report how long is left.
    pub fn expire_toast(&mut self, now: Instant) -> Option<Duration> {
        let remaining = self.toast.as_ref().and_then(|t| t.remaining(now));
        if remaining.is_none() {
            self.toast = None;
        }
        remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_expires() {
        let mut ui = UIState::default();
        ui.show_toast("saved".into(), Duration::from_millis(50));
        let start = Instant::now();
        assert!(ui.expire_toast(start).is_some());
        assert!(ui.toast.is_some());
        assert!(ui.expire_toast(start + Duration::from_secs(1)).is_none());
        assert!(ui.toast.is_none());
        assert_eq!(ui.log_messages, vec!["saved".to_string()]);
    }

    #[test]
    fn test_error_dialog_is_logged() {
        let mut ui = UIState::default();
        ui.show_error("disk full".into());
        assert_eq!(ui.dialog.as_ref().map(|d| d.kind), Some(DialogKind::Error));
        assert_eq!(ui.log_messages, vec!["ERROR: disk full".to_string()]);
    }
}
