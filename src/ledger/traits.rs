//! Gateway trait between the CLI and the ledger client
//!
//! Operations only ever talk to the network through this trait, so they can
//! be exercised against a mock without a live network.

use crate::types::{AccountCreateRequest, CliError, LedgerReceipt, TopicCreateRequest};
use hedera::{AccountId, Hbar};

/// Blocking access to the handful of ledger calls the CLI makes
///
/// Each method performs one complete call chain (build, execute and, for
/// transactions, fetch the receipt). Implementations must not validate the
/// receipt status themselves; callers decide what a non-success status means.
#[cfg_attr(test, mockall::automock)]
pub trait LedgerGateway {
    /// Account that pays for and signs submitted transactions
    fn operator_account_id(&self) -> AccountId;

    /// Submit an account-create transaction and return its receipt
    fn create_account(&self, request: &AccountCreateRequest) -> Result<LedgerReceipt, CliError>;

    /// Submit a topic-create transaction and return its receipt
    fn create_topic(&self, request: &TopicCreateRequest) -> Result<LedgerReceipt, CliError>;

    /// Query the hbar balance of an account
    fn account_balance(&self, account_id: AccountId) -> Result<Hbar, CliError>;
}
