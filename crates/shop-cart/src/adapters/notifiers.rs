//! [`Notifier`] implementations.

use crate::ports::{Notification, Notifier};
use tokio::sync::mpsc;
use tracing::warn;

/// Writes every notification to the log. The default for the CLI.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        warn!(?notification, "{}", notification);
    }
}

/// Forwards notifications to an unbounded channel, for a UI task to display.
///
/// Never blocks. Notifications sent after the receiver is gone are dropped.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    sender: mpsc::UnboundedSender<Notification>,
}

impl ChannelNotifier {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, notification: Notification) {
        let _ = self.sender.send(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductId;

    #[test]
    fn test_channel_notifier_delivers_in_order() {
        let (notifier, mut receiver) = ChannelNotifier::new();
        notifier.notify(Notification::OutOfStock(ProductId(1)));
        notifier.notify(Notification::SaveFailed);

        assert_eq!(
            receiver.try_recv().unwrap(),
            Notification::OutOfStock(ProductId(1))
        );
        assert_eq!(receiver.try_recv().unwrap(), Notification::SaveFailed);
        assert!(receiver.try_recv().is_err());
    }

    #[test]
    fn test_channel_notifier_after_receiver_dropped() {
        let (notifier, receiver) = ChannelNotifier::new();
        drop(receiver);
        notifier.notify(Notification::SaveFailed);
    }
}
