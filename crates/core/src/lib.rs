//! Domain logic for the anken dashboard.
//!
//! Everything here is free of I/O and internal dependencies so the store,
//! the HTTP layer and any future tooling can share it.

pub mod error;
pub mod pricing;
pub mod schedule;
pub mod search;
pub mod status;
pub mod types;
pub mod validation;
