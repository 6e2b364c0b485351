//! spendlog - monthly spending ledger for the terminal
//!
//! Record one entry per account per month (starting balance, current balance
//! and outstanding credit) and review them on a dashboard that filters,
//! sorts, paginates and summarizes the ledger.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Paths, settings and remembered dashboard filters
//! - `error`: Custom error types
//! - `models`: Accounts, ledger entries, money and months
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `engine`: Filter, sort, metrics and pagination for the dashboard
//! - `audit`: Audit logging system
//! - `display`: Terminal formatting
//! - `export`: CSV, JSON and YAML export
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use spendlog::config::{paths::SpendlogPaths, settings::Settings};
//!
//! let paths = SpendlogPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{SpendlogError, SpendlogResult};
