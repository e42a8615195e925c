//! Types module
//!
//! Contains the data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `network`: the named ledger networks
//! - `operator`: the paying identity and its parsers
//! - `request`: gateway requests and receipts
//! - `report`: what gets printed after an operation
//! - `error`: error types for the CLI

pub mod error;
pub mod network;
pub mod operator;
pub mod report;
pub mod request;

pub use error::CliError;
pub use network::Network;
pub use operator::{parse_account_id, parse_private_key, Operator};
pub use report::{AccountBalanceReport, AccountCreatedReport, Report, TopicCreatedReport};
pub use request::{AccountCreateRequest, LedgerReceipt, TopicCreateRequest};
