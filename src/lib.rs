//! Bank account records with a single lifecycle rule: blocked accounts are frozen.
//!
//! [`service::AccountService`] owns the rules, [`storage`] provides the
//! in-memory and SQLite stores it runs on.

pub mod cli;
pub mod import;
pub mod models;
pub mod service;
pub mod storage;
pub mod types;
