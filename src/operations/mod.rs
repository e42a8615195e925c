//! Ledger operations
//!
//! Every subcommand maps to one `Operation`. An operation prepares its
//! request (generating keys where needed), runs exactly one call chain
//! through the `LedgerGateway`, checks the outcome and turns it into a
//! `Report`. The factory picks the implementation at runtime from the parsed
//! subcommand, the same way for every command.

use crate::cli::{Command, OutputFormat};
use crate::ledger::LedgerGateway;
use crate::output::write_report;
use crate::types::{parse_account_id, CliError, LedgerReceipt, Report};
use hedera::Hbar;
use log::debug;
use std::io::Write;

pub mod account_balance;
pub mod create_account;
pub mod create_topic;

pub use account_balance::AccountBalanceOperation;
pub use create_account::CreateAccountOperation;
pub use create_topic::CreateTopicOperation;

/// One ledger operation the CLI can run
pub trait Operation {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Run the operation against `gateway` and describe the outcome
    ///
    /// # Errors
    ///
    /// Any gateway error is returned unchanged. A receipt whose status is not
    /// `Success`, or that lacks the id the operation created, is an error too.
    fn execute(&self, gateway: &dyn LedgerGateway) -> Result<Report, CliError>;
}

/// Create the operation for a parsed subcommand
///
/// Selects the `Operation` implementation at runtime from the subcommand and
/// converts its flags into ledger values (tinybar amounts, account ids).
///
/// # Arguments
///
/// * `command` - The parsed subcommand with its flags
///
/// # Returns
///
/// A boxed trait object ready to run against any `LedgerGateway`
///
/// # Errors
///
/// Returns `CliError::InvalidAccountId` if the subcommand names an account
/// that does not parse.
pub fn create_operation(command: &Command) -> Result<Box<dyn Operation>, CliError> {
    let operation: Box<dyn Operation> = match command {
        Command::CreateAccount(args) => Box::new(CreateAccountOperation::new(
            Hbar::from_tinybars(args.initial_balance),
        )),
        Command::CreateTopic(args) => Box::new(CreateTopicOperation::new(
            args.memo.clone(),
            Hbar::from_tinybars(args.max_fee),
        )),
        Command::AccountBalance(args) => {
            let account_id = args
                .account_id
                .as_deref()
                .map(parse_account_id)
                .transpose()?;
            Box::new(AccountBalanceOperation::new(account_id))
        }
    };
    Ok(operation)
}

/// Run `command` through `gateway` and write the report to `output`
///
/// This is everything `main` does once the gateway exists. Nothing is
/// written when the operation fails.
///
/// # Arguments
///
/// * `command` - The parsed subcommand
/// * `gateway` - Ledger access used for the single call chain
/// * `format` - Text or JSON rendering of the report
/// * `output` - Writer receiving the report, normally stdout
///
/// # Returns
///
/// * `Ok(())` once the report has been written and flushed
/// * `Err(CliError)` from parsing, the gateway, the status check or the writer
pub fn execute_command(
    command: &Command,
    gateway: &dyn LedgerGateway,
    format: OutputFormat,
    output: &mut dyn Write,
) -> Result<(), CliError> {
    let operation = create_operation(command)?;
    debug!("Running {}", operation.name());

    let report = operation.execute(gateway)?;
    write_report(&report, format, output)
}

/// Fail unless the receipt reports `Success`
pub(crate) fn ensure_success(receipt: &LedgerReceipt, operation: &str) -> Result<(), CliError> {
    if receipt.is_success() {
        Ok(())
    } else {
        Err(CliError::unexpected_status(
            operation,
            format!("{:?}", receipt.status),
        ))
    }
}
