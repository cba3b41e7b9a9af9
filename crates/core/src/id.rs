//! Strongly-typed identifiers used across the domain.

use serde::{Deserialize, Serialize};

/// Account number.
///
/// Assigned sequentially starting at 1; never reused or renumbered.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(u64);

impl AccountId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Number given to the first account ever opened.
    pub const fn first() -> Self {
        Self(1)
    }

    /// Number for the account opened after `existing` others.
    ///
    /// A `Vec` holds at most `isize::MAX` elements, so `existing + 1` always
    /// fits and every account gets a distinct number.
    pub const fn next_after(existing: usize) -> Self {
        Self(existing as u64 + 1)
    }

    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for AccountId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for AccountId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<AccountId> for u64 {
    fn from(value: AccountId) -> Self {
        value.0
    }
}
