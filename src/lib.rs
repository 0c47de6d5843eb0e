/// Account state and creation-time validation.
pub mod account;

/// Transfer requests and their validation, executed by [`ledger`].
pub mod transfer;

/// In-memory account store. Owns every account record; balances are
/// only mutated through [`ledger`].
pub mod store;

/// The ledger service: business invariants and the atomic transfer
/// algorithm. This is the core of the crate.
pub mod ledger;

/// Post-transfer notification seam. The ledger only ever sees the
/// [`notifier::NotificationSink`] trait; delivery is someone else's job.
pub mod notifier;

/// CSV batch driver bootstrapping the ledger inside the binary.
/// Ideally this would be its own crate, but it is also used by the
/// integration tests so it lives here.
pub mod bin_utils;
