//! An account ledger for a small retail bank.
//!
//! The [`Ledger`] tracks a set of [`Account`]s, each of which belongs to a
//! [`Category`]. The category decides the interest rate credited to the
//! account and how far a withdrawal may draw it down. Every mutation is
//! written through to a [`Store`] before it is acknowledged.

#![deny(
    clippy::all,
    missing_debug_implementations,
    missing_copy_implementations,
    missing_docs
)]
#![warn(clippy::pedantic)]

mod account;
pub use account::Account;
mod category;
pub use category::Category;
mod error;
pub use error::{Error, StoreError};
pub mod interest;
mod ledger;
pub use ledger::{InterestPolicy, Ledger};
pub mod operation;
#[doc(inline)]
pub use operation::Operation;
pub mod request;
#[doc(inline)]
pub use request::{CreateAccount, Receipt, Response, Transaction};
pub mod store;
#[doc(inline)]
pub use store::{MemoryStore, Store, YamlStore};
