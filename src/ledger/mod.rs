//! Ledger access module
//!
//! - `traits` - the `LedgerGateway` seam used by every operation
//! - `hedera_gateway` - the implementation backed by the Hedera SDK client

pub mod hedera_gateway;
pub mod traits;

pub use hedera_gateway::HederaGateway;
pub use traits::LedgerGateway;

#[cfg(test)]
pub use traits::MockLedgerGateway;
