//! User-visible notices.

/// Surfaces a message to the user.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Blocking `window.alert`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowAlert;

impl Notifier for WindowAlert {
    fn notify(&self, message: &str) {
        match web_sys::window() {
            Some(w) => {
                let _ = w.alert_with_message(message);
            }
            None => log::warn!("no window to show notice: {}", message),
        }
    }
}

#[cfg(test)]
pub use recording::RecordingNotifier;
