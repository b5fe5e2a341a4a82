//! In-memory bank ledger: customers, typed accounts and the operations over
//! them, driven by a CSV operation stream and persisted as a JSON snapshot.

pub mod account;
pub mod customer;
pub mod entry;
pub mod error;
pub mod ledger;
pub mod processor;
pub mod snapshot;
