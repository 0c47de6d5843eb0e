use tracing::info;

use crate::account::Account;

/// Receives post-transfer notices, once per affected account.
///
/// Fire-and-forget: the ledger never inspects an outcome, and a sink
/// that fails to deliver must deal with that itself. By the time a
/// notice goes out the balance change is already committed.
pub trait NotificationSink {
    fn notify(&self, account: &Account, message: &str);
}

/// Sink that writes every notice to the log.
#[derive(Debug, Default)]
pub struct TracingNotifier;

impl NotificationSink for TracingNotifier {
    fn notify(&self, account: &Account, message: &str) {
        info!(account = %account.id(), "{message}");
    }
}
