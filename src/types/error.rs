//! Error types for the ledger CLI
//!
//! This module defines every error that can abort a command. Errors carry
//! string context rather than the SDK's error values so they stay cheap to
//! clone and compare, and so messages read well on the command line.
//!
//! # Error Categories
//!
//! - **Input Errors**: malformed account ids or private keys
//! - **Ledger Errors**: submission, receipt retrieval, non-success statuses
//! - **Output Errors**: writing or serializing the report

use thiserror::Error;

/// Main error type for the ledger CLI
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CliError {
    /// Account id could not be parsed (expected `shard.realm.num`)
    #[error("Invalid account id '{value}': {message}")]
    InvalidAccountId {
        /// The text that was supplied
        value: String,
        /// Parser message from the SDK
        message: String,
    },

    /// Private key could not be parsed
    ///
    /// The key text itself is never included in the message.
    #[error("Invalid operator private key: {message}")]
    InvalidPrivateKey {
        /// Parser message from the SDK
        message: String,
    },

    /// The async runtime backing the network client could not start
    #[error("Failed to start runtime: {message}")]
    Runtime { message: String },

    /// Building or executing a transaction or query failed
    #[error("Failed to execute {operation}: {message}")]
    Submit {
        /// Operation that failed (e.g. "create account")
        operation: String,
        /// Error reported by the SDK
        message: String,
    },

    /// The receipt of a submitted transaction could not be fetched
    #[error("Failed to get receipt of {operation} transaction: {message}")]
    Receipt { operation: String, message: String },

    /// The network processed the transaction but did not report success
    #[error("Unable to {operation} (receipt shows non-Success status {status})")]
    UnexpectedStatus {
        /// Operation that failed
        operation: String,
        /// Status name from the receipt
        status: String,
    },

    /// A successful receipt is missing the id the operation created
    #[error("Receipt of {operation} has no {field}")]
    MissingReceiptField { operation: String, field: String },

    /// I/O error while writing output
    #[error("I/O error: {message}")]
    Io { message: String },

    /// Report could not be serialized
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io {
            message: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(error: serde_json::Error) -> Self {
        CliError::Serialization {
            message: error.to_string(),
        }
    }
}

impl CliError {
    /// Create an InvalidAccountId error
    pub fn invalid_account_id(value: &str, message: impl ToString) -> Self {
        CliError::InvalidAccountId {
            value: value.to_string(),
            message: message.to_string(),
        }
    }

    /// Create an InvalidPrivateKey error
    pub fn invalid_private_key(message: impl ToString) -> Self {
        CliError::InvalidPrivateKey {
            message: message.to_string(),
        }
    }

    /// Create a Submit error
    pub fn submit(operation: &str, message: impl ToString) -> Self {
        CliError::Submit {
            operation: operation.to_string(),
            message: message.to_string(),
        }
    }

    /// Create a Receipt error
    pub fn receipt(operation: &str, message: impl ToString) -> Self {
        CliError::Receipt {
            operation: operation.to_string(),
            message: message.to_string(),
        }
    }

    pub fn unexpected_status(operation: &str, status: impl ToString) -> Self {
        CliError::UnexpectedStatus {
            operation: operation.to_string(),
            status: status.to_string(),
        }
    }

    pub fn missing_receipt_field(operation: &str, field: &str) -> Self {
        CliError::MissingReceiptField {
            operation: operation.to_string(),
            field: field.to_string(),
        }
    }
}
