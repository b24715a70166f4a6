use std::collections::HashMap;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde::{Deserialize, Serialize};
use solana_sdk::transaction::VersionedTransaction;

use crate::error::UltraError;

/// Aggregation sources the quote endpoint routes through. Closed set,
/// extended only when the upstream API deploys a new router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregatorSource {
    Metis,
    Jupiterz,
    Hashflow,
    Dflow,
}

impl std::fmt::Display for AggregatorSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Metis => write!(f, "metis"),
            Self::Jupiterz => write!(f, "jupiterz"),
            Self::Hashflow => write!(f, "hashflow"),
            Self::Dflow => write!(f, "dflow"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwapMode {
    ExactIn,
    ExactOut,
}

/// Query parameters for a quote request. `amount` is in the input token's
/// raw units; no decimal scaling is ever applied to it. Absent optional
/// fields are omitted from the query string entirely.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapQuoteParams {
    pub input_mint: String,
    pub output_mint: String,
    pub amount: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swap_mode: Option<SwapMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral_account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral_fee: Option<u16>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapInfo {
    pub input_mint: String,
    pub in_amount: String,
    pub output_mint: String,
    pub out_amount: String,
    pub amm_key: String,
    pub label: String,
    pub fee_amount: String,
    pub fee_mint: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutePlanStep {
    pub swap_info: SwapInfo,
    pub percent: f64,
}

/// A swap quote. Immutable once received; a new quote replaces the old one
/// when parameters change. All raw amounts are decimal-digit strings.
/// `request_id` must be echoed verbatim on execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub input_mint: String,
    pub in_amount: String,
    pub output_mint: String,
    pub out_amount: String,
    pub other_amount_threshold: String,
    pub price_impact_pct: String,
    pub route_plan: Vec<RoutePlanStep>,
    pub context_slot: u64,
    /// Unsigned transaction, base64. Absent when the route requires
    /// multiple steps or no taker was supplied.
    pub transaction: Option<String>,
    #[serde(default)]
    pub swap_type: String,
    pub gasless: bool,
    pub request_id: String,
    #[serde(default)]
    pub prioritization_fee_lamports: Option<u64>,
    pub fee_bps: i64,
    pub router: AggregatorSource,
}

impl Quote {
    /// Decodes the quote's unsigned transaction payload, if present.
    pub fn unsigned_transaction(&self) -> Result<Option<VersionedTransaction>, UltraError> {
        let Some(encoded) = &self.transaction else {
            return Ok(None);
        };
        let bytes = BASE64
            .decode(encoded)
            .map_err(|e| UltraError::MalformedResponse(e.to_string()))?;
        let transaction: VersionedTransaction =
            bincode::deserialize(&bytes).map_err(|e| UltraError::MalformedResponse(e.to_string()))?;
        Ok(Some(transaction))
    }
}

/// Serializes a signed transaction into the base64 form `submit` expects.
pub fn encode_signed_transaction(
    transaction: &VersionedTransaction,
) -> Result<String, UltraError> {
    let bytes =
        bincode::serialize(transaction).map_err(|e| UltraError::InvalidArgument(e.to_string()))?;
    Ok(BASE64.encode(bytes))
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteRequest {
    pub signed_transaction: String,
    pub request_id: String,
}

/// Terminal outcome of a submitted transaction. `Failed` is a business-level
/// failure reported over a successful transport call; transport failures
/// surface as `UltraError::Upstream` instead and never produce an outcome.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "status")]
pub enum ExecutionOutcome {
    #[serde(rename_all = "camelCase")]
    Success {
        signature: String,
        slot: String,
        input_amount_result: String,
        output_amount_result: String,
    },
    #[serde(rename_all = "camelCase")]
    Failed {
        #[serde(default)]
        signature: String,
        #[serde(default)]
        slot: String,
        code: i64,
        message: String,
        error: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenBalance {
    pub amount: String,
    pub ui_amount: f64,
    pub slot: u64,
    pub is_frozen: bool,
}

pub type BalanceResponse = HashMap<String, TokenBalance>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warning {
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
    pub severity: Severity,
}

/// Risk warnings keyed by mint address. An empty list means no known risk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShieldResponse {
    pub warnings: HashMap<String, Vec<Warning>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Router {
    pub id: AggregatorSource,
    pub name: String,
    pub icon: String,
}

pub type RouterResponse = Vec<Router>;
