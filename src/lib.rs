pub mod amount;
pub mod client;
pub mod error;
pub mod metrics;
pub mod types;

pub use client::{UltraClient, UltraConfig};
pub use error::UltraError;
pub use types::{
    AggregatorSource, BalanceResponse, ExecutionOutcome, Quote, Router, RouterResponse, Severity,
    ShieldResponse, SwapMode, SwapQuoteParams, TokenBalance, Warning,
};
