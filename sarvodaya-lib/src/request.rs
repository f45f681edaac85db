//! Payloads exchanged with the request layer

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::Error;

fn default_acc_type() -> String {
    "1".to_string()
}

/// A request to open a new account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAccount {
    /// Name of the account holder. Must not be blank.
    pub name: String,

    /// The account number. Must not be blank, and must not be in use.
    pub account_no: String,

    /// The opening balance
    pub balance: Decimal,

    /// The category code, `"1"` (basic), `"2"` (savings) or `"3"` (NRI).
    /// Defaults to basic.
    #[serde(default = "default_acc_type")]
    pub acc_type: String,
}

/// A deposit into, or withdrawal from, an existing account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// The account to operate on
    pub account_no: String,

    /// The amount to move. Must be strictly positive.
    pub amount: Decimal,
}

/// Acknowledgement of a successful ledger operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// A human readable summary
    pub message: String,

    /// The balance of the account after the operation, if it moved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_balance: Option<Decimal>,
}

/// The outcome of a request, as returned to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Response {
    /// The operation succeeded
    Success {
        /// Always `true`
        success: bool,
        /// A human readable summary
        message: String,
        /// The balance of the account after the operation, if it moved
        #[serde(default, skip_serializing_if = "Option::is_none")]
        new_balance: Option<Decimal>,
    },

    /// The operation was rejected. Nothing was changed.
    Failure {
        /// Always `false`
        success: bool,
        /// Why the operation failed
        error: String,
    },
}

impl Response {
    /// Whether the operation succeeded
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

impl From<Receipt> for Response {
    fn from(receipt: Receipt) -> Self {
        Self::Success {
            success: true,
            message: receipt.message,
            new_balance: receipt.new_balance,
        }
    }
}

impl From<Error> for Response {
    fn from(error: Error) -> Self {
        Self::Failure {
            success: false,
            error: error.to_string(),
        }
    }
}

impl From<Result<Receipt, Error>> for Response {
    fn from(result: Result<Receipt, Error>) -> Self {
        match result {
            Ok(receipt) => receipt.into(),
            Err(error) => error.into(),
        }
    }
}
