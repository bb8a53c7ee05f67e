//! Application layer.
//!
//! This module defines the `VendingMachine`, which ties the ledger and the
//! catalog together and is the entry point for every customer action.

pub mod machine;
