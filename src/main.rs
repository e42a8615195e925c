//! Ledger CLI
//!
//! Command-line interface for issuing account and topic operations against a
//! Hedera network.
//!
//! # Usage
//!
//! ```bash
//! ledger-cli create-account --operator-account 0.0.1234 --operator-private-key <KEY>
//! ledger-cli create-topic --network previewnet --memo "audit log" \
//!     --operator-account 0.0.1234 --operator-private-key <KEY>
//! ledger-cli account-balance --account-id 0.0.5678 --format json \
//!     --operator-account 0.0.1234 --operator-private-key <KEY>
//! ```
//!
//! The operator flags can also come from `HEDERA_NETWORK`,
//! `HEDERA_OPERATOR_ACCOUNT` and `HEDERA_OPERATOR_PRIVATE_KEY`. Set `RUST_LOG`
//! to see what the tool sends.
//!
//! Reports go to stdout. Errors go to stderr as `Error: <message>`, so stdout
//! never mixes a report with a failure.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (bad account id or key, rejected transaction, network failure, etc.)
//! - 2: Invalid command line

use env_logger::Env;
use ledger_cli::cli::{self, CliArgs};
use ledger_cli::types::Operator;
use ledger_cli::{execute_command, CliError, HederaGateway};
use std::process;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = cli::parse_args();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &CliArgs) -> Result<(), CliError> {
    let operator_args = args.command.operator();
    let operator = Operator::parse(
        &operator_args.operator_account,
        &operator_args.operator_private_key,
    )?;

    let gateway = HederaGateway::connect(operator_args.network, &operator)?;

    let mut output = std::io::stdout();
    execute_command(&args.command, &gateway, args.format, &mut output)
}
