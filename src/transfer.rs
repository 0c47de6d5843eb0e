use rust_decimal::{Decimal, prelude::Zero};
use thiserror::Error;

use crate::account::AccountId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransferError {
    #[error("From account and to account must not be the same")]
    SameAccount,
    #[error("Transfer amount must be positive, got {amount}")]
    InvalidAmount { amount: Decimal },
}

/// A request to move `amount` from one account to another. Ephemeral,
/// never stored by the ledger.
#[derive(Debug, Clone)]
pub struct TransferRequest {
    pub from_id: AccountId,
    pub to_id: AccountId,
    pub amount: Decimal,
}

impl TransferRequest {
    /// Checks the request in isolation, before any store access.
    pub fn validate(&self) -> Result<(), TransferError> {
        if self.from_id == self.to_id {
            return Err(TransferError::SameAccount);
        }
        if self.amount <= Decimal::zero() {
            return Err(TransferError::InvalidAmount {
                amount: self.amount,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::prelude::FromPrimitive;

    use super::*;

    fn request(from: &str, to: &str, amount: Decimal) -> TransferRequest {
        TransferRequest {
            from_id: from.to_owned(),
            to_id: to.to_owned(),
            amount,
        }
    }

    #[test]
    fn valid_request() {
        request("Id-123", "Id-223", Decimal::from_u32(100).unwrap())
            .validate()
            .unwrap();
    }

    #[test]
    fn reject_same_account() {
        let err = request("Id-123", "Id-123", Decimal::from_u32(100).unwrap())
            .validate()
            .unwrap_err();
        assert_eq!(err, TransferError::SameAccount);
    }

    #[test]
    fn reject_non_positive_amount() {
        let err = request("Id-123", "Id-223", Decimal::zero())
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            TransferError::InvalidAmount {
                amount: Decimal::zero()
            }
        );

        let negative = Decimal::from_i32(-5).unwrap();
        let err = request("Id-123", "Id-223", negative).validate().unwrap_err();
        assert_eq!(err, TransferError::InvalidAmount { amount: negative });
    }
}
