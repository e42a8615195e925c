//! Reports printed after a successful operation
//!
//! Each report keeps its values as display strings. The text layout mirrors
//! what operators of the tool already script against; the JSON form uses the
//! same field names in camelCase, except `topicID`, which keeps the spelling
//! existing topic tooling expects.

use serde::Serialize;
use std::fmt;

const SEPARATOR: &str = "--------------";

/// Result of `create-account`
///
/// Contains the freshly generated private key. It is shown exactly once and
/// is not stored anywhere else.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountCreatedReport {
    pub account_id: String,
    pub private_key: String,
    pub public_key: String,
    pub status: String,
    pub transaction_id: String,
}

/// Result of `create-topic`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicCreatedReport {
    #[serde(rename = "topicID")]
    pub topic_id: String,
    pub topic_submit_key: String,
    pub topic_admin_key: String,
}

/// Result of `account-balance`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountBalanceReport {
    pub account_id: String,
    pub balance: String,
    pub tinybars: i64,
}

/// Any report an operation can produce
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Report {
    AccountCreated(AccountCreatedReport),
    TopicCreated(TopicCreatedReport),
    AccountBalance(AccountBalanceReport),
}

impl fmt::Display for AccountCreatedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Account created.")?;
        writeln!(f, "Account ID: {}", self.account_id)?;
        writeln!(f, "Private Key: {}", self.private_key)?;
        writeln!(f, "Public Key: {}", self.public_key)?;
        writeln!(f, "Status: {}", self.status)?;
        writeln!(f, "Transaction ID: {}", self.transaction_id)
    }
}

impl fmt::Display for TopicCreatedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Topic created.")?;
        writeln!(f, "Topic ID: {}", self.topic_id)?;
        writeln!(f, "{SEPARATOR}")?;
        writeln!(f, "Topic Submit Key: {}", self.topic_submit_key)?;
        writeln!(f, "{SEPARATOR}")?;
        writeln!(f, "Topic Admin Key: {}", self.topic_admin_key)?;
        writeln!(f, "{SEPARATOR}")
    }
}

impl fmt::Display for AccountBalanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Account ID: {}", self.account_id)?;
        writeln!(f, "Balance: {}", self.balance)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::AccountCreated(report) => fmt::Display::fmt(report, f),
            Report::TopicCreated(report) => fmt::Display::fmt(report, f),
            Report::AccountBalance(report) => fmt::Display::fmt(report, f),
        }
    }
}
