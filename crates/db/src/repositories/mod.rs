//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&MemStore` as the first argument. Every method takes the store
//! lock exactly once, so each call is atomic with respect to the others.

pub mod account_repo;
pub mod anken_repo;
pub mod contact_repo;

pub use account_repo::AccountRepo;
pub use anken_repo::AnkenRepo;
pub use contact_repo::ContactRepo;
