//! Record models and the DTOs accepted by the repositories.

pub mod account;
pub mod anken;
pub mod contact;
pub mod stats;
