//! Hedera-backed ledger gateway
//!
//! Wraps a `hedera::Client` configured for one of the named networks and
//! authenticated as the operator.
//!
//! # Runtime
//!
//! The SDK is async. The gateway owns a current-thread tokio runtime and
//! blocks on every call, so the CLI keeps a single sequential call chain:
//! parse flags, build one client, run one operation, print, exit.

use crate::ledger::LedgerGateway;
use crate::types::{
    AccountCreateRequest, CliError, LedgerReceipt, Network, Operator, TopicCreateRequest,
};
use hedera::{
    AccountBalanceQuery, AccountCreateTransaction, AccountId, Client, Hbar, TopicCreateTransaction,
    TransactionResponse,
};
use log::{debug, info};
use tokio::runtime::Runtime;

/// Ledger gateway talking to a live Hedera network
pub struct HederaGateway {
    runtime: Runtime,
    client: Client,
    operator_account_id: AccountId,
}

impl HederaGateway {
    /// Build a client for `network` and set `operator` as the paying account
    ///
    /// No network traffic happens here; connections are opened lazily on the
    /// first call.
    ///
    /// # Arguments
    ///
    /// * `network` - Which public Hedera network the client targets
    /// * `operator` - Account and key that pay for and sign transactions
    ///
    /// # Returns
    ///
    /// A gateway owning its runtime and client, ready for blocking calls
    ///
    /// # Errors
    ///
    /// Returns `CliError::Runtime` if the tokio runtime cannot be created.
    pub fn connect(network: Network, operator: &Operator) -> Result<Self, CliError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| CliError::Runtime {
                message: e.to_string(),
            })?;

        // The client spawns its channels on the ambient runtime
        let client = {
            let _guard = runtime.enter();
            match network {
                Network::Mainnet => Client::for_mainnet(),
                Network::Testnet => Client::for_testnet(),
                Network::Previewnet => Client::for_previewnet(),
            }
        };
        client.set_operator(operator.account_id, operator.private_key.clone());

        info!(
            "Using {} with operator account {}",
            network, operator.account_id
        );

        Ok(Self {
            runtime,
            client,
            operator_account_id: operator.account_id,
        })
    }

    /// Fetch the receipt for `response`, leaving status checks to the caller
    async fn receipt(
        &self,
        operation: &str,
        response: TransactionResponse,
    ) -> Result<LedgerReceipt, CliError> {
        debug!(
            "Waiting for receipt of {} transaction {}",
            operation, response.transaction_id
        );

        let receipt = response
            .get_receipt_query()
            .validate_status(false)
            .execute(&self.client)
            .await
            .map_err(|e| CliError::receipt(operation, e))?;

        info!(
            "{} transaction {} reached status {:?}",
            operation, response.transaction_id, receipt.status
        );

        Ok(LedgerReceipt {
            transaction_id: response.transaction_id,
            status: receipt.status,
            account_id: receipt.account_id,
            topic_id: receipt.topic_id,
        })
    }
}

impl LedgerGateway for HederaGateway {
    fn operator_account_id(&self) -> AccountId {
        self.operator_account_id
    }

    fn create_account(&self, request: &AccountCreateRequest) -> Result<LedgerReceipt, CliError> {
        const OPERATION: &str = "create account";

        self.runtime.block_on(async {
            let response = AccountCreateTransaction::new()
                .key(request.public_key.clone())
                .initial_balance(request.initial_balance)
                .execute(&self.client)
                .await
                .map_err(|e| CliError::submit(OPERATION, e))?;

            self.receipt(OPERATION, response).await
        })
    }

    fn create_topic(&self, request: &TopicCreateRequest) -> Result<LedgerReceipt, CliError> {
        const OPERATION: &str = "create topic";

        self.runtime.block_on(async {
            let response = TopicCreateTransaction::new()
                .max_transaction_fee(request.max_transaction_fee)
                .topic_memo(request.memo.as_str())
                .admin_key(request.admin_key.public_key())
                .submit_key(request.submit_key.clone())
                .auto_renew_account_id(request.auto_renew_account_id)
                .sign(request.admin_key.clone())
                .execute(&self.client)
                .await
                .map_err(|e| CliError::submit(OPERATION, e))?;

            self.receipt(OPERATION, response).await
        })
    }

    fn account_balance(&self, account_id: AccountId) -> Result<Hbar, CliError> {
        debug!("Querying balance of {}", account_id);

        self.runtime.block_on(async {
            let balance = AccountBalanceQuery::new()
                .account_id(account_id)
                .execute(&self.client)
                .await
                .map_err(|e| CliError::submit("account balance query", e))?;

            Ok(balance.hbars)
        })
    }
}
