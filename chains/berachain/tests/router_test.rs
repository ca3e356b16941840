use bera_project::config::SwapConfig;
use bera_project::error::ActivityError;
use bera_project::services::{build_batch_steps, RouteClient};
use ethers::types::{Address, U256};
use httpmock::prelude::*;
use serde_json::json;

fn swap_config(url: &str) -> SwapConfig {
    SwapConfig {
        router_url: url.to_string(),
        origin: Some("https://bex.example".to_string()),
        slippage_bps: 5_000,
    }
}

#[tokio::test]
async fn fetch_route_sends_given_in_query() {
    let server = MockServer::start_async().await;
    let asset_in = Address::repeat_byte(0x11);
    let asset_out = Address::repeat_byte(0x22);

    let route = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/dex/route")
                .query_param("quoteAsset", format!("{:?}", asset_out))
                .query_param("baseAsset", format!("{:?}", asset_in))
                .query_param("amount", "1000")
                .query_param("swap_type", "given_in")
                .header("origin", "https://bex.example");
            then.status(200).json_body(json!({
                "steps": [
                    {
                        "pool": "0x3333333333333333333333333333333333333333",
                        "assetIn": format!("{:?}", asset_in),
                        "amountIn": "1000",
                        "assetOut": "0x4444444444444444444444444444444444444444",
                        "amountOut": "990"
                    },
                    {
                        "pool": "0x5555555555555555555555555555555555555555",
                        "assetIn": "0x4444444444444444444444444444444444444444",
                        "amountIn": "990",
                        "assetOut": format!("{:?}", asset_out),
                        "amountOut": "980"
                    }
                ]
            }));
        })
        .await;

    let client = RouteClient::new(&swap_config(&server.base_url())).unwrap();
    let steps = client
        .fetch_route(asset_in, asset_out, U256::from(1_000))
        .await
        .unwrap();
    route.assert_hits_async(1).await;

    assert_eq!(steps.len(), 2);
    let batch = build_batch_steps(&steps, true, 5_000).unwrap();
    assert_eq!(batch[0].asset_in, Address::zero());
    assert_eq!(batch[0].amount_out, U256::zero());
    assert_eq!(batch[1].amount_out, U256::from(490));
    assert_eq!(batch[1].asset_out, asset_out);
}

#[tokio::test]
async fn router_error_status_is_route_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/dex/route");
            then.status(503);
        })
        .await;

    let client = RouteClient::new(&swap_config(&server.base_url())).unwrap();
    let err = client
        .fetch_route(Address::zero(), Address::repeat_byte(1), U256::one())
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ActivityError>(),
        Some(ActivityError::Route { .. })
    ));
}

#[tokio::test]
async fn empty_route_is_route_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/dex/route");
            then.status(200).json_body(json!({ "steps": [] }));
        })
        .await;

    let client = RouteClient::new(&swap_config(&server.base_url())).unwrap();
    let err = client
        .fetch_route(Address::zero(), Address::repeat_byte(1), U256::one())
        .await
        .unwrap_err();

    assert_eq!(
        err.downcast_ref::<ActivityError>(),
        Some(&ActivityError::Route {
            reason: "router returned no steps".into()
        })
    );
}
