use futures::future::AbortHandle;
use mockito::Matcher;
use serde_json::json;

use ultra_swap::{Severity, TokenBalance, UltraError};

use crate::common::{test_client, SOL_MINT, USDC_MINT};

#[tokio::test]
async fn balances_pass_through_unmodified() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/balances/addr")
        .with_status(200)
        .with_body(
            json!({
                "MINT1": { "amount": "1000000", "uiAmount": 1.0, "slot": 5, "isFrozen": false }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = test_client(&server);
    let balances = client.get_balances("addr", None).await.unwrap();

    assert_eq!(balances.len(), 1);
    assert_eq!(
        balances["MINT1"],
        TokenBalance {
            amount: "1000000".to_string(),
            ui_amount: 1.0,
            slot: 5,
            is_frozen: false,
        }
    );
}

#[tokio::test]
async fn failed_balance_fetch_is_an_error_not_an_empty_set() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/balances/addr")
        .with_status(503)
        .with_body("backend down")
        .create_async()
        .await;

    let client = test_client(&server);
    let err = client.get_balances("addr", None).await.unwrap_err();
    assert!(matches!(err, UltraError::Upstream { status: 503, .. }));
}

#[tokio::test]
async fn cancelled_balance_fetch_yields_cancelled() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/balances/addr")
        .expect(0)
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let (handle, registration) = AbortHandle::new_pair();
    handle.abort();

    let client = test_client(&server);
    let err = client
        .get_balances("addr", Some(registration))
        .await
        .unwrap_err();

    assert!(matches!(err, UltraError::Cancelled));
    mock.assert_async().await;
}

#[tokio::test]
async fn shield_joins_mints_and_parses_warnings() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/shield")
        .match_query(Matcher::UrlEncoded(
            "mints".into(),
            format!("{SOL_MINT},{USDC_MINT}"),
        ))
        .with_status(200)
        .with_body(
            json!({
                "warnings": {
                    SOL_MINT: [],
                    USDC_MINT: [
                        {
                            "type": "HAS_FREEZE_AUTHORITY",
                            "message": "The authority can freeze token accounts",
                            "severity": "warning"
                        },
                        {
                            "type": "HAS_MINT_AUTHORITY",
                            "message": "The authority can mint new tokens",
                            "severity": "critical"
                        }
                    ]
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = test_client(&server);
    let shield = client
        .get_shield(&[SOL_MINT, USDC_MINT], None)
        .await
        .unwrap();

    // Empty list means no known risk, distinct from a missing entry.
    assert!(shield.warnings[SOL_MINT].is_empty());
    let usdc = &shield.warnings[USDC_MINT];
    assert_eq!(usdc.len(), 2);
    assert_eq!(usdc[0].kind, "HAS_FREEZE_AUTHORITY");
    assert_eq!(usdc[0].severity, Severity::Warning);
    assert_eq!(usdc[1].severity, Severity::Critical);

    mock.assert_async().await;
}
