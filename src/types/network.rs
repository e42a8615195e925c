//! Named ledger networks
//!
//! The CLI talks to one of three public Hedera networks. Unknown names are
//! rejected when the flags are parsed.

use clap::ValueEnum;
use std::fmt;

/// Ledger network selected with `--network`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Network {
    /// Production network, operations cost real hbar
    Mainnet,
    /// Public test network
    #[default]
    Testnet,
    /// Network running pre-release software
    Previewnet,
}

impl Network {
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::Previewnet => "previewnet",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
