//! End-to-end command tests
//!
//! These tests run complete command lines through `execute_command`:
//! 1. Parse argv with the real clap definitions
//! 2. Run the selected operation against an in-memory gateway
//! 3. Check what reached the gateway and what was printed
//!
//! No test talks to a real network.

#[cfg(test)]
mod tests {
    use clap::Parser;
    use hedera::{AccountId, Hbar, Status, TopicId, TransactionId};
    use ledger_cli::cli::{CliArgs, OutputFormat};
    use ledger_cli::{
        execute_command, AccountCreateRequest, CliError, LedgerGateway, LedgerReceipt,
        TopicCreateRequest,
    };
    use rstest::rstest;
    use std::cell::RefCell;

    const OPERATOR: &str = "0.0.1001";

    /// Gateway that records every request and answers with canned receipts
    struct RecordingGateway {
        status: Status,
        balance: Hbar,
        accounts: RefCell<Vec<AccountCreateRequest>>,
        topics: RefCell<Vec<TopicCreateRequest>>,
        balances: RefCell<Vec<AccountId>>,
    }

    impl RecordingGateway {
        fn new(status: Status) -> Self {
            Self {
                status,
                balance: Hbar::from_tinybars(123_456_789),
                accounts: RefCell::new(Vec::new()),
                topics: RefCell::new(Vec::new()),
                balances: RefCell::new(Vec::new()),
            }
        }

        fn receipt(&self) -> LedgerReceipt {
            LedgerReceipt {
                transaction_id: TransactionId::generate(self.operator_account_id()),
                status: self.status,
                account_id: None,
                topic_id: None,
            }
        }
    }

    impl LedgerGateway for RecordingGateway {
        fn operator_account_id(&self) -> AccountId {
            OPERATOR.parse().unwrap()
        }

        fn create_account(
            &self,
            request: &AccountCreateRequest,
        ) -> Result<LedgerReceipt, CliError> {
            self.accounts.borrow_mut().push(request.clone());
            Ok(LedgerReceipt {
                account_id: Some("0.0.5005".parse().unwrap()),
                ..self.receipt()
            })
        }

        fn create_topic(&self, request: &TopicCreateRequest) -> Result<LedgerReceipt, CliError> {
            self.topics.borrow_mut().push(request.clone());
            Ok(LedgerReceipt {
                topic_id: Some("0.0.6006".parse::<TopicId>().unwrap()),
                ..self.receipt()
            })
        }

        fn account_balance(&self, account_id: AccountId) -> Result<Hbar, CliError> {
            self.balances.borrow_mut().push(account_id);
            Ok(self.balance)
        }
    }

    /// Run a command line against `gateway` and return the printed output
    fn run(gateway: &RecordingGateway, args: &[&str]) -> Result<String, CliError> {
        let mut argv = vec!["ledger-cli"];
        argv.extend_from_slice(args);
        argv.extend_from_slice(&[
            "--operator-account",
            OPERATOR,
            "--operator-private-key",
            "not-used-by-the-recording-gateway",
        ]);
        let parsed = CliArgs::try_parse_from(argv).expect("command line should parse");

        let mut output = Vec::new();
        execute_command(&parsed.command, gateway, parsed.format, &mut output)?;
        Ok(String::from_utf8(output).expect("output should be UTF-8"))
    }

    #[test]
    fn test_create_account_end_to_end() {
        let gateway = RecordingGateway::new(Status::Success);

        let output = run(&gateway, &["create-account", "--initial-balance", "10"]).unwrap();

        let requests = gateway.accounts.borrow();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].initial_balance, Hbar::from_tinybars(10));

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "Account created.");
        assert_eq!(lines[1], "Account ID: 0.0.5005");
        assert_eq!(
            lines[3],
            format!("Public Key: {}", requests[0].public_key),
            "printed public key must be the one sent to the network"
        );
        assert_eq!(lines[4], "Status: Success");
    }

    #[test]
    fn test_create_topic_end_to_end() {
        let gateway = RecordingGateway::new(Status::Success);

        let output = run(&gateway, &["create-topic", "--memo", "release notes"]).unwrap();

        let requests = gateway.topics.borrow();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].memo, "release notes");
        assert_eq!(
            requests[0].auto_renew_account_id,
            OPERATOR.parse::<AccountId>().unwrap()
        );
        assert_eq!(requests[0].max_transaction_fee, Hbar::from_tinybars(100_000_000));

        assert!(output.starts_with("Topic created.\nTopic ID: 0.0.6006\n"));
        assert!(output.contains(&format!(
            "Topic Admin Key: {}",
            requests[0].admin_key
        )));
    }

    #[rstest]
    #[case::operator_default(&["account-balance"], OPERATOR)]
    #[case::explicit_account(&["account-balance", "--account-id", "0.0.77"], "0.0.77")]
    fn test_account_balance_end_to_end(#[case] args: &[&str], #[case] queried: &str) {
        let gateway = RecordingGateway::new(Status::Success);

        let output = run(&gateway, args).unwrap();

        assert_eq!(
            *gateway.balances.borrow(),
            vec![queried.parse::<AccountId>().unwrap()]
        );
        assert!(output.starts_with(&format!("Account ID: {}\n", queried)));
    }

    #[test]
    fn test_json_output() {
        let gateway = RecordingGateway::new(Status::Success);

        let output = run(&gateway, &["account-balance", "--format", "json"]).unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["accountId"], OPERATOR);
        assert_eq!(value["tinybars"], 123_456_789);
    }

    #[rstest]
    #[case::account(&["create-account"], "create hedera account")]
    #[case::topic(&["create-topic"], "create hedera topic")]
    fn test_rejected_transaction_is_an_error(#[case] args: &[&str], #[case] operation: &str) {
        let gateway = RecordingGateway::new(Status::InsufficientPayerBalance);

        let error = run(&gateway, args).unwrap_err();

        assert_eq!(
            error.to_string(),
            format!(
                "Unable to {} (receipt shows non-Success status InsufficientPayerBalance)",
                operation
            )
        );
    }

    #[test]
    fn test_invalid_account_id_never_reaches_gateway() {
        let gateway = RecordingGateway::new(Status::Success);

        let error = run(&gateway, &["account-balance", "--account-id", "alice"]).unwrap_err();

        assert!(matches!(error, CliError::InvalidAccountId { .. }));
        assert!(gateway.balances.borrow().is_empty());
    }

    #[test]
    fn test_format_flag_defaults_to_text() {
        let parsed = CliArgs::try_parse_from([
            "ledger-cli",
            "account-balance",
            "--operator-account",
            OPERATOR,
            "--operator-private-key",
            "k",
        ])
        .unwrap();
        assert_eq!(parsed.format, OutputFormat::Text);
    }
}
