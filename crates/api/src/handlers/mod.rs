pub mod account;
pub mod anken;
pub mod contact;
pub mod stats;
