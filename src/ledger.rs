use rust_decimal::{Decimal, prelude::Zero};
use thiserror::Error;
use tracing::debug;

use crate::{
    account::{Account, AccountError, AccountId},
    notifier::NotificationSink,
    store::{AccountStore, StoreError},
    transfer::{TransferError, TransferRequest},
};

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error(transparent)]
    AccountErr(#[from] AccountError),
    #[error(transparent)]
    StoreErr(#[from] StoreError),
    #[error(transparent)]
    TransferErr(#[from] TransferError),
    #[error("Account id {id} does not exist")]
    AccountNotFound { id: AccountId },
    #[error("Account id {id} does not have sufficient balance")]
    InsufficientBalance { id: AccountId },
}

/// The ledger service. Owns the injected [`AccountStore`] and enforces
/// every business invariant; it is the only place balances are mutated.
///
/// All methods take `&self`, so concurrent callers share one service
/// behind an `Arc`.
pub struct LedgerService<N> {
    store: AccountStore,
    notifier: N,
}

impl<N> LedgerService<N>
where
    N: NotificationSink,
{
    pub fn new(store: AccountStore, notifier: N) -> Self {
        Self { store, notifier }
    }

    pub fn create_account(
        &self,
        id: impl Into<AccountId>,
        opening_balance: Decimal,
    ) -> Result<(), LedgerError> {
        let account = Account::new(id, opening_balance)?;
        self.store.create_account(account)?;
        Ok(())
    }

    pub fn get_account(&self, id: &str) -> Option<Account> {
        self.store.get_account(id)
    }

    /// Snapshot of every account, in no particular order.
    pub fn accounts(&self) -> Vec<Account> {
        self.store.accounts()
    }

    /// Reset hook for tests, not part of the serving path.
    pub fn clear_accounts(&self) {
        self.store.clear_accounts()
    }

    /// Moves `request.amount` between the two named accounts, atomically
    /// with respect to any other transfer touching either of them.
    ///
    /// A rejected transfer leaves both balances exactly as they were; on
    /// success both parties are notified after the commit.
    pub fn transfer(&self, request: TransferRequest) -> Result<(), LedgerError> {
        request.validate()?;

        // Read-check-write happens under a single write guard, so no
        // concurrent transfer can interleave and the balance check can
        // never run against a stale value. Readers see either the pre-
        // or the post-transfer balances, nothing in between.
        let (from, to) = {
            let mut accounts = self.store.write();

            let mut from = match accounts.get(&request.from_id) {
                Some(acc) => acc.clone(),
                None => {
                    return Err(LedgerError::AccountNotFound {
                        id: request.from_id,
                    });
                }
            };
            let mut to = match accounts.get(&request.to_id) {
                Some(acc) => acc.clone(),
                None => return Err(LedgerError::AccountNotFound { id: request.to_id }),
            };

            let new_from_balance = from.balance() - request.amount;
            if new_from_balance < Decimal::zero() {
                return Err(LedgerError::InsufficientBalance {
                    id: request.from_id,
                });
            }

            from.set_balance(new_from_balance);
            to.set_balance(to.balance() + request.amount);
            accounts.insert(from.id().to_owned(), from.clone());
            accounts.insert(to.id().to_owned(), to.clone());
            (from, to)
        };

        debug!(
            from = %from.id(),
            to = %to.id(),
            amount = %request.amount,
            "transfer committed"
        );

        // The guard is released; a slow sink cannot block other transfers.
        self.notifier.notify(
            &from,
            &format!(
                "Amount {} transferred to account {}",
                request.amount,
                to.id()
            ),
        );
        self.notifier.notify(
            &to,
            &format!(
                "Amount {} credited from account {}",
                request.amount,
                from.id()
            ),
        );
        Ok(())
    }
}
