// CLI module
// Command-line interface and argument parsing

mod args;

pub use args::{
    AccountBalanceArgs, CliArgs, Command, CreateAccountArgs, CreateTopicArgs, OperatorArgs,
    OutputFormat, DEFAULT_TOPIC_MAX_FEE_TINYBARS,
};

use clap::Parser;

/// Parse command-line arguments using clap
///
/// On invalid arguments, a missing subcommand or `--help`, clap prints the
/// error or help text and exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
