//! Record storage for the anken dashboard.
//!
//! [`MemStore`] owns every project, account and contact. Reads and writes go
//! through the zero-sized repositories in [`repositories`], which take
//! `&MemStore` as their first argument.

pub mod models;
pub mod repositories;
pub mod seed;
mod store;

pub use store::MemStore;
