//! Banking module (in-memory accounts and transfers).
//!
//! Accounts are pure domain logic; the bank owns every account and is the only
//! way to mutate one.

pub mod account;
pub mod bank;

pub use account::{Account, format_amount};
pub use bank::Bank;
