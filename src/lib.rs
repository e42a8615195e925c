//! Ledger CLI Library
//! # Overview
//!
//! This library backs a small command-line tool that issues a few operations
//! against a Hedera network. Transaction construction, signing, submission and
//! receipt polling all happen inside the Hedera SDK; this crate parses flags,
//! runs one call chain per invocation and prints the outcome.
//!
//! # Architecture
//!
//! - [`cli`] - CLI argument parsing (subcommands and shared operator flags)
//! - [`types`] - Networks, operator identity, requests, reports and errors
//! - [`ledger`] - The `LedgerGateway` seam and its Hedera implementation
//! - [`operations`] - One `Operation` per subcommand plus the factory
//! - [`output`] - Text and JSON rendering of reports
//!
//! # Operations
//!
//! - **create-account**: create an account keyed by a fresh Ed25519 key
//! - **create-topic**: create a consensus topic with fresh admin and submit keys
//! - **account-balance**: query the hbar balance of an account

pub mod cli;
pub mod ledger;
pub mod operations;
pub mod output;
pub mod types;

pub use ledger::{HederaGateway, LedgerGateway};
pub use operations::{create_operation, execute_command, Operation};
pub use output::write_report;
pub use types::{
    AccountCreateRequest, CliError, LedgerReceipt, Network, Operator, Report, TopicCreateRequest,
};
