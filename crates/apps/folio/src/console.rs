//! Terminal rendering of notifications

use portfolio::{NotificationKind, Notifier};

/// Prints notifications to the terminal; errors go to stderr
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str, kind: NotificationKind) {
        match kind {
            NotificationKind::Error => eprintln!("[{}] {}", kind, message),
            _ => println!("[{}] {}", kind, message),
        }
    }
}
