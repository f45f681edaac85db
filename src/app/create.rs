use clap::Parser;
use rust_decimal::Decimal;
use sarvodaya_lib::{CreateAccount, Ledger, Response, Store};

#[derive(Debug, Parser)]
pub struct Create {
    /// Name of the account holder
    #[clap(long)]
    name: String,

    /// The new account number
    #[clap(long)]
    account_no: String,

    /// The opening balance
    #[clap(long, allow_hyphen_values = true)]
    balance: Decimal,

    /// Account category: 1/basic, 2/savings or 3/nri
    #[clap(long, short, default_value = "1")]
    category: String,
}

impl Create {
    pub fn run(self, ledger: &mut Ledger<impl Store>) -> Response {
        ledger
            .create(CreateAccount {
                name: self.name,
                account_no: self.account_no,
                balance: self.balance,
                acc_type: self.category,
            })
            .into()
    }
}
