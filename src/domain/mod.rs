//! Domain model: money, products, slots and the two stateful components,
//! the [`ledger::Ledger`] and the [`catalog::Catalog`].

pub mod catalog;
pub mod code;
pub mod coin;
pub mod ledger;
pub mod money;
pub mod ports;
pub mod product;
pub mod slot;
pub mod stock;
