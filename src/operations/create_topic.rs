//! `create-topic`
//!
//! Generates an admin key and a submit key, creates a consensus topic guarded
//! by them and prints the topic id with both private keys. The operator
//! account becomes the topic's auto-renew account.

use crate::ledger::LedgerGateway;
use crate::operations::{ensure_success, Operation};
use crate::types::{CliError, Report, TopicCreateRequest, TopicCreatedReport};
use hedera::{Hbar, PrivateKey};
use log::info;

const OPERATION: &str = "create hedera topic";

#[derive(Debug, Clone)]
pub struct CreateTopicOperation {
    memo: String,
    max_transaction_fee: Hbar,
}

impl CreateTopicOperation {
    pub fn new(memo: String, max_transaction_fee: Hbar) -> Self {
        Self {
            memo,
            max_transaction_fee,
        }
    }

    /// Create the topic for already generated admin and submit keys
    pub fn execute_with_keys(
        &self,
        gateway: &dyn LedgerGateway,
        admin_key: PrivateKey,
        submit_key: PrivateKey,
    ) -> Result<Report, CliError> {
        let request = TopicCreateRequest {
            memo: self.memo.clone(),
            admin_key: admin_key.clone(),
            submit_key: submit_key.public_key(),
            auto_renew_account_id: gateway.operator_account_id(),
            max_transaction_fee: self.max_transaction_fee,
        };

        let receipt = gateway.create_topic(&request)?;
        ensure_success(&receipt, OPERATION)?;

        let topic_id = receipt
            .topic_id
            .ok_or_else(|| CliError::missing_receipt_field(OPERATION, "topic id"))?;
        info!("Created topic {}", topic_id);

        Ok(Report::TopicCreated(TopicCreatedReport {
            topic_id: topic_id.to_string(),
            topic_submit_key: submit_key.to_string(),
            topic_admin_key: admin_key.to_string(),
        }))
    }
}

impl Operation for CreateTopicOperation {
    fn name(&self) -> &'static str {
        "create-topic"
    }

    fn execute(&self, gateway: &dyn LedgerGateway) -> Result<Report, CliError> {
        self.execute_with_keys(
            gateway,
            PrivateKey::generate_ed25519(),
            PrivateKey::generate_ed25519(),
        )
    }
}
