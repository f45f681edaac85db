use clap::Parser;
use sarvodaya_lib::{Ledger, Response, Store};

#[derive(Debug, Parser)]
pub struct Accrue {
    /// The account to credit
    account_no: String,

    /// How many consecutive interest postings to make
    #[clap(long, short, default_value = "1")]
    times: u32,
}

impl Accrue {
    pub fn run(self, ledger: &mut Ledger<impl Store>) -> Response {
        ledger.accrue(&self.account_no, self.times).into()
    }
}
