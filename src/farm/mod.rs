//! Farm ledger module
//!
//! Flat bookkeeping collections behind the authenticated routes: animals,
//! animal trades, milk transactions, and fodder purchases/consumptions.
//! Every operation is a validated insert or a collection scan.

pub mod model;
mod service;

pub use model::*;
pub use service::FarmService;
