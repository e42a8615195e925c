//! `create-account`
//!
//! Generates a new Ed25519 key pair, creates an account controlled by its
//! public key and prints the new account id together with the key pair.
//!
//! The last output line is `Transaction ID: <id>`. Earlier versions of this
//! tool printed a `Details:` line with the raw receipt there instead.

use crate::ledger::LedgerGateway;
use crate::operations::{ensure_success, Operation};
use crate::types::{AccountCreateRequest, AccountCreatedReport, CliError, Report};
use hedera::{Hbar, PrivateKey};
use log::info;

const OPERATION: &str = "create hedera account";

/// Creates one account funded with `initial_balance` from the operator
#[derive(Debug, Clone)]
pub struct CreateAccountOperation {
    initial_balance: Hbar,
}

impl CreateAccountOperation {
    pub fn new(initial_balance: Hbar) -> Self {
        Self { initial_balance }
    }

    /// Create the account for an already generated key
    ///
    /// Split out from `execute` so the key can be fixed in tests.
    pub fn execute_with_key(
        &self,
        gateway: &dyn LedgerGateway,
        private_key: PrivateKey,
    ) -> Result<Report, CliError> {
        let request = AccountCreateRequest {
            public_key: private_key.public_key(),
            initial_balance: self.initial_balance,
        };

        let receipt = gateway.create_account(&request)?;
        ensure_success(&receipt, OPERATION)?;

        let account_id = receipt
            .account_id
            .ok_or_else(|| CliError::missing_receipt_field(OPERATION, "account id"))?;
        info!("Created account {}", account_id);

        Ok(Report::AccountCreated(AccountCreatedReport {
            account_id: account_id.to_string(),
            private_key: private_key.to_string(),
            public_key: private_key.public_key().to_string(),
            status: format!("{:?}", receipt.status),
            transaction_id: receipt.transaction_id.to_string(),
        }))
    }
}

impl Operation for CreateAccountOperation {
    fn name(&self) -> &'static str {
        "create-account"
    }

    fn execute(&self, gateway: &dyn LedgerGateway) -> Result<Report, CliError> {
        self.execute_with_key(gateway, PrivateKey::generate_ed25519())
    }
}
