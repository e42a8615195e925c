//! Requests sent through the ledger gateway and the receipts that come back
//!
//! These are plain carriers: the SDK owns every type inside them and enforces
//! whatever rules apply to them.

use hedera::{AccountId, Hbar, PrivateKey, PublicKey, Status, TopicId, TransactionId};

/// Parameters of an account-create transaction
#[derive(Debug, Clone)]
pub struct AccountCreateRequest {
    /// Key that will control the new account
    pub public_key: PublicKey,
    /// Balance transferred from the operator into the new account
    pub initial_balance: Hbar,
}

/// Parameters of a topic-create transaction
#[derive(Debug, Clone)]
pub struct TopicCreateRequest {
    pub memo: String,
    /// Admin key; it must co-sign the creating transaction
    pub admin_key: PrivateKey,
    pub submit_key: PublicKey,
    pub auto_renew_account_id: AccountId,
    pub max_transaction_fee: Hbar,
}

/// The parts of a network receipt this tool looks at
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerReceipt {
    pub transaction_id: TransactionId,
    pub status: Status,
    /// Set when the transaction created an account
    pub account_id: Option<AccountId>,
    /// Set when the transaction created a topic
    pub topic_id: Option<TopicId>,
}

impl LedgerReceipt {
    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }
}
