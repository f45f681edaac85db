use clap::Parser;
use sarvodaya_lib::{Ledger, Store};

use crate::{app::format_currency, Error};

#[derive(Debug, Default, Parser, Clone, Copy)]
pub struct List;

impl List {
    pub fn run(self, ledger: &Ledger<impl Store>, currency: &str) -> Result<(), Error> {
        let mut empty = true;
        for account in ledger.accounts() {
            empty = false;
            println!(
                "{}\t{}\t{}\t{}",
                account.account_no(),
                account.name(),
                account.category(),
                format_currency(currency, account.balance())
            );
        }

        if empty {
            println!("no accounts ...");
        }

        Ok(())
    }
}
