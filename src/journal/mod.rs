//! Collection ledger and the fish journal built from it.

pub mod ledger;
pub mod persistence;

pub use ledger::*;
pub use persistence::LedgerSaveManager;
