use crate::types::Network;
use clap::{Args, Parser, Subcommand, ValueEnum};

/// Default fee ceiling for topic creation: 1 hbar
pub const DEFAULT_TOPIC_MAX_FEE_TINYBARS: i64 = 100_000_000;

/// Issue account and topic operations against a Hedera network
#[derive(Parser, Debug)]
#[command(name = "ledger-cli")]
#[command(about = "Create accounts and topics or query balances on a Hedera network", long_about = None)]
pub struct CliArgs {
    /// How the result is printed
    #[arg(
        long = "format",
        value_name = "FORMAT",
        default_value = "text",
        global = true,
        help = "Output format: 'text' for humans or 'json' for scripts"
    )]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new account keyed by a freshly generated Ed25519 key
    CreateAccount(CreateAccountArgs),
    /// Create a consensus topic with fresh admin and submit keys
    CreateTopic(CreateTopicArgs),
    /// Print the hbar balance of an account
    AccountBalance(AccountBalanceArgs),
}

/// Flags shared by every subcommand
#[derive(Args, Debug, Clone)]
pub struct OperatorArgs {
    /// Network the command is sent to
    #[arg(
        long = "network",
        value_name = "NETWORK",
        env = "HEDERA_NETWORK",
        default_value = "testnet",
        help = "Hedera network: 'mainnet', 'testnet' or 'previewnet'"
    )]
    pub network: Network,

    /// Account that pays for the operation
    #[arg(
        long = "operator-account",
        value_name = "ACCOUNT_ID",
        env = "HEDERA_OPERATOR_ACCOUNT",
        help = "The operator account id (e.g. 0.0.1234)"
    )]
    pub operator_account: String,

    /// Private key of the operator account
    #[arg(
        long = "operator-private-key",
        value_name = "KEY",
        env = "HEDERA_OPERATOR_PRIVATE_KEY",
        hide_env_values = true,
        help = "The operator's Ed25519 private key (hex or DER)"
    )]
    pub operator_private_key: String,
}

#[derive(Args, Debug, Clone)]
pub struct CreateAccountArgs {
    #[command(flatten)]
    pub operator: OperatorArgs,

    /// Starting balance of the new account
    #[arg(
        long = "initial-balance",
        value_name = "TINYBARS",
        default_value_t = 0,
        value_parser = clap::value_parser!(i64).range(0..),
        help = "Initial balance in tinybars, paid by the operator"
    )]
    pub initial_balance: i64,
}

#[derive(Args, Debug, Clone)]
pub struct CreateTopicArgs {
    #[command(flatten)]
    pub operator: OperatorArgs,

    #[arg(
        long = "memo",
        value_name = "MEMO",
        default_value = "test topic",
        help = "The memo of the topic to be created"
    )]
    pub memo: String,

    #[arg(
        long = "max-fee",
        value_name = "TINYBARS",
        default_value_t = DEFAULT_TOPIC_MAX_FEE_TINYBARS,
        value_parser = clap::value_parser!(i64).range(1..),
        help = "Maximum transaction fee in tinybars"
    )]
    pub max_fee: i64,
}

#[derive(Args, Debug, Clone)]
pub struct AccountBalanceArgs {
    #[command(flatten)]
    pub operator: OperatorArgs,

    #[arg(
        long = "account-id",
        value_name = "ACCOUNT_ID",
        help = "Account to query (default: the operator account)"
    )]
    pub account_id: Option<String>,
}

/// Output formats for reports
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Command {
    /// Operator flags of whichever subcommand was chosen
    pub fn operator(&self) -> &OperatorArgs {
        match self {
            Command::CreateAccount(args) => &args.operator,
            Command::CreateTopic(args) => &args.operator,
            Command::AccountBalance(args) => &args.operator,
        }
    }
}
