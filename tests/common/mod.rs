use serde_json::{json, Value};

use ultra_swap::{SwapQuoteParams, UltraClient, UltraConfig};

pub const SOL_MINT: &str = "So11111111111111111111111111111111111111112";
pub const USDC_MINT: &str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";
pub const REQUEST_ID: &str = "3e5f9c2a-1b8d-4e6f-9a01-7c4d2b8e5f1a";

pub fn test_client(server: &mockito::Server) -> UltraClient {
    UltraClient::new(UltraConfig {
        base_url: server.url(),
    })
}

pub fn quote_params() -> SwapQuoteParams {
    SwapQuoteParams {
        input_mint: SOL_MINT.to_string(),
        output_mint: USDC_MINT.to_string(),
        amount: 1_000_000_000,
        taker: None,
        swap_mode: None,
        referral_account: None,
        referral_fee: None,
    }
}

pub fn quote_json() -> Value {
    json!({
        "inputMint": SOL_MINT,
        "inAmount": "1000000000",
        "outputMint": USDC_MINT,
        "outAmount": "150000000",
        "otherAmountThreshold": "149250000",
        "priceImpactPct": "0.015",
        "routePlan": [{
            "swapInfo": {
                "inputMint": SOL_MINT,
                "inAmount": "1000000000",
                "outputMint": USDC_MINT,
                "outAmount": "150000000",
                "ammKey": "FpCMFDFGYotvufJ7HrFHsWEiiQCGbkLCtwHiDnh7o28Q",
                "label": "Meteora DLMM",
                "feeAmount": "1500",
                "feeMint": USDC_MINT
            },
            "percent": 100.0
        }],
        "contextSlot": 299_881_231_u64,
        "transaction": null,
        "swapType": "ultra",
        "gasless": false,
        "requestId": REQUEST_ID,
        "prioritizationFeeLamports": 150_000_u64,
        "feeBps": 50,
        "router": "metis"
    })
}

pub fn routers_json() -> Value {
    json!([
        { "id": "metis", "name": "Metis", "icon": "https://static.jup.ag/routers/metis.svg" },
        { "id": "jupiterz", "name": "JupiterZ", "icon": "https://static.jup.ag/routers/jupiterz.svg" },
        { "id": "hashflow", "name": "Hashflow", "icon": "https://static.jup.ag/routers/hashflow.svg" },
        { "id": "dflow", "name": "DFlow", "icon": "https://static.jup.ag/routers/dflow.svg" }
    ])
}
