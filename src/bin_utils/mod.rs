//! This module could be a separate crate on its own, to bootstrap [`crate::ledger`]
//! within a binary, but for simplicity purposes it lives in the library so the
//! integration tests can drive it too.
//!
//! It stands in for the request/response boundary: each CSV row becomes one
//! ledger call, and every rejected operation is reported through the
//! injectable error printer without aborting the batch.

use std::io::{Read, Write};

use anyhow::Result;
use csv_parser::{CsvOperationParser, OperationKind};
use csv_printer::{BalanceRow, print_balances};
use tracing::info;

use crate::{
    ledger::{LedgerError, LedgerService},
    notifier::TracingNotifier,
    store::AccountStore,
    transfer::TransferRequest,
};

pub mod csv_parser;
pub mod csv_printer;

pub struct Service<'w, R, W: 'w> {
    pub input: R,
    pub output: &'w mut W,
    pub error_printer: Box<dyn FnMut(u64, LedgerError)>,
}

impl<'w, R, W> Service<'w, R, W>
where
    R: Read,
    W: Write + 'w,
{
    pub fn run(mut self) -> Result<()> {
        let parser = CsvOperationParser::new(self.input);

        let ledger = LedgerService::new(AccountStore::new(), TracingNotifier);

        for (line, row) in parser {
            let result = match row.op {
                OperationKind::Create => {
                    info!(account = %row.account, balance = %row.amount, "creating account");
                    ledger.create_account(row.account, row.amount)
                }
                OperationKind::Transfer => {
                    info!(from = %row.account, to = %row.to, amount = %row.amount, "transfer money");
                    ledger.transfer(TransferRequest {
                        from_id: row.account,
                        to_id: row.to,
                        amount: row.amount,
                    })
                }
            };
            if let Err(err) = result {
                (self.error_printer)(line, err);
            }
        }

        let mut accounts = ledger.accounts();
        accounts.sort_by(|a, b| a.id().cmp(b.id()));
        print_balances(
            self.output,
            accounts.into_iter().map(|acc| BalanceRow {
                account: acc.id().to_owned(),
                balance: acc.balance(),
            }),
        )
    }
}
