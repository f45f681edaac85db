use clap::Parser;
use sarvodaya_lib::{Ledger, Receipt, Response, Store};

#[derive(Debug, Parser)]
pub struct Balance {
    /// The account to look up
    account_no: String,
}

impl Balance {
    pub fn run(self, ledger: &Ledger<impl Store>) -> Response {
        ledger
            .balance(&self.account_no)
            .map(|balance| Receipt {
                message: format!("Acc No: {}", self.account_no),
                new_balance: Some(balance),
            })
            .into()
    }
}
