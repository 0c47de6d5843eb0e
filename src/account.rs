use rust_decimal::{Decimal, prelude::Zero};
use thiserror::Error;

pub type AccountId = String;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountError {
    #[error("Account id must not be empty")]
    EmptyAccountId,
    #[error("Opening balance must not be negative, got {balance}")]
    NegativeOpeningBalance { balance: Decimal },
}

/// A single account record. The balance is only ever mutated by the
/// ledger's transfer path, while holding the store's write guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    id: AccountId,
    balance: Decimal,
}

impl Account {
    pub fn new(id: impl Into<AccountId>, balance: Decimal) -> Result<Self, AccountError> {
        let id = id.into();
        if id.is_empty() {
            return Err(AccountError::EmptyAccountId);
        }
        if balance < Decimal::zero() {
            return Err(AccountError::NegativeOpeningBalance { balance });
        }
        Ok(Self { id, balance })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub(crate) fn set_balance(&mut self, balance: Decimal) {
        self.balance = balance;
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::prelude::FromPrimitive;

    use super::*;

    #[test]
    fn create_account() {
        let acc = Account::new("Id-123", Decimal::from_u32(1000).unwrap()).unwrap();
        assert_eq!(acc.id(), "Id-123");
        assert_eq!(acc.balance(), Decimal::from_u32(1000).unwrap());
    }

    #[test]
    fn reject_empty_id() {
        let err = Account::new("", Decimal::from_u32(1000).unwrap()).unwrap_err();
        assert_eq!(err, AccountError::EmptyAccountId);
    }

    #[test]
    fn reject_negative_opening_balance() {
        let balance = Decimal::from_i32(-1000).unwrap();
        let err = Account::new("Id-123", balance).unwrap_err();
        assert_eq!(err, AccountError::NegativeOpeningBalance { balance });
        // zero is fine
        Account::new("Id-123", Decimal::zero()).unwrap();
    }
}
