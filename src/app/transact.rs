use clap::Parser;
use rust_decimal::Decimal;
use sarvodaya_lib::{Ledger, Response, Store, Transaction};

#[derive(Debug, Parser)]
pub struct Args {
    /// The account to operate on
    account_no: String,

    /// The amount of money to move
    #[clap(allow_hyphen_values = true)]
    amount: Decimal,
}

impl From<Args> for Transaction {
    fn from(args: Args) -> Self {
        Self {
            account_no: args.account_no,
            amount: args.amount,
        }
    }
}

#[derive(Debug, Parser)]
pub struct Deposit {
    #[clap(flatten)]
    args: Args,
}

impl Deposit {
    pub fn run(self, ledger: &mut Ledger<impl Store>) -> Response {
        ledger.deposit(&self.args.into()).into()
    }
}

#[derive(Debug, Parser)]
pub struct Withdraw {
    #[clap(flatten)]
    args: Args,
}

impl Withdraw {
    pub fn run(self, ledger: &mut Ledger<impl Store>) -> Response {
        ledger.withdraw(&self.args.into()).into()
    }
}
