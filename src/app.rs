use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use sarvodaya_lib::{Ledger, Response, YamlStore};
use tracing::Level;

use crate::{
    config::{self, Config},
    Error,
};

mod accrue;
mod balance;
mod create;
mod list;
mod show;
mod transact;

/// Sarvodaya Bank account ledger
#[derive(Debug, Parser)]
#[clap(version, about)]
pub struct App {
    /// Increase logging verbosity (-v, -vv, -vvv)
    #[clap(long, short, global = true, parse(from_occurrences))]
    verbose: u8,

    /// The ledger file to operate on. Overrides the configured store
    #[clap(long, global = true)]
    store: Option<PathBuf>,

    /// Print the raw response as YAML
    #[clap(long, global = true)]
    yaml: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Open a new account
    Create(create::Create),

    /// Pay money into an account
    Deposit(transact::Deposit),

    /// Take money out of an account
    Withdraw(transact::Withdraw),

    /// Show the balance of an account
    Balance(balance::Balance),

    /// Post interest to an account
    Accrue(accrue::Accrue),

    /// List all accounts
    List(list::List),

    /// Show the current configuration
    Config(show::Show),
}

impl App {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }

    pub fn run(self) -> Result<(), Error> {
        let config = config::load()?;

        let path = match self.store {
            Some(path) => path,
            None => config.store_path()?,
        };

        let response = match self.command {
            Command::Config(show) => return show.run(&config, &path),
            Command::List(list) => return list.run(&open(&path, &config)?, &config.currency),
            Command::Create(op) => op.run(&mut open(&path, &config)?),
            Command::Deposit(op) => op.run(&mut open(&path, &config)?),
            Command::Withdraw(op) => op.run(&mut open(&path, &config)?),
            Command::Balance(op) => op.run(&open(&path, &config)?),
            Command::Accrue(op) => op.run(&mut open(&path, &config)?),
        };

        report(&response, self.yaml, &config.currency)
    }
}

/// Print the response, and turn a rejected operation into an error so the
/// process exits with a failure status
fn report(response: &Response, yaml: bool, currency: &str) -> Result<(), Error> {
    if yaml {
        print!("{}", serde_yaml::to_string(response)?);
    } else {
        println!("{}", summary(response, currency));
    }

    match response {
        Response::Success { .. } => Ok(()),
        Response::Failure { error, .. } => Err(Error::Rejected(error.clone())),
    }
}

fn open(path: &Path, config: &Config) -> Result<Ledger<YamlStore>, Error> {
    tracing::event!(Level::DEBUG, path = %path.display(), "opening ledger");
    let store = YamlStore::open(path)?;
    Ok(Ledger::with_policy(store, config.interest))
}

fn summary(response: &Response, currency: &str) -> String {
    match response {
        Response::Success {
            message,
            new_balance: Some(balance),
            ..
        } => format!("{}\nBalance: {}", message, format_currency(currency, *balance)),
        Response::Success { message, .. } => message.clone(),
        Response::Failure { error, .. } => format!("Error: {}", error),
    }
}

fn format_currency(code: &str, amount: Decimal) -> String {
    match rusty_money::iso::find(code) {
        Some(currency) => rusty_money::Money::from_decimal(amount, currency).to_string(),
        None => format!("{:.2} {}", amount, code),
    }
}
