//! `account-balance`

use crate::ledger::LedgerGateway;
use crate::operations::Operation;
use crate::types::{AccountBalanceReport, CliError, Report};
use hedera::AccountId;

/// Queries the hbar balance of one account
///
/// Without an explicit account the operator's own balance is queried.
#[derive(Debug, Clone)]
pub struct AccountBalanceOperation {
    account_id: Option<AccountId>,
}

impl AccountBalanceOperation {
    pub fn new(account_id: Option<AccountId>) -> Self {
        Self { account_id }
    }
}

impl Operation for AccountBalanceOperation {
    fn name(&self) -> &'static str {
        "account-balance"
    }

    fn execute(&self, gateway: &dyn LedgerGateway) -> Result<Report, CliError> {
        let account_id = self
            .account_id
            .unwrap_or_else(|| gateway.operator_account_id());
        let balance = gateway.account_balance(account_id)?;

        Ok(Report::AccountBalance(AccountBalanceReport {
            account_id: account_id.to_string(),
            balance: balance.to_string(),
            tinybars: balance.to_tinybars(),
        }))
    }
}
