mod common;

use bera_project::client::hash_hex;
use bera_project::contracts::{ApproveCall, BatchSwapCall, MintCall};
use bera_project::error::ActivityError;
use common::{call_result, mined, recording_client, test_config, test_wallet};
use ethers::abi::AbiDecode;
use ethers::prelude::*;
use httpmock::prelude::*;
use serde_json::json;

const GAS_PRICE: u64 = 1_000_000_000;

fn gas_limit_in_range(tx: &TransactionRequest) -> bool {
    let gas = tx.gas.unwrap_or_default().as_u64();
    (500_001..=510_000).contains(&gas)
}

#[tokio::test]
async fn honey_mint_signs_and_sends_one_legacy_call() {
    let (client, node) = recording_client(&test_config());
    let wallet = test_wallet(&client);
    let book = *client.contracts();
    let hash = H256::repeat_byte(0xab);

    // answered last-pushed-first
    node.push(hash);
    node.push(U256::from(7));
    node.push(U256::from(GAS_PRICE));
    node.push(call_result(U256::MAX));
    node.push(call_result(U256::from(1_000)));

    let sent = client.honey_mint(&wallet, U256::from(400)).await.unwrap();

    assert_eq!(hash_hex(sent), format!("0x{}", "ab".repeat(32)));
    assert_eq!(
        node.methods(),
        vec![
            "eth_call",
            "eth_call",
            "eth_gasPrice",
            "eth_getTransactionCount",
            "eth_sendRawTransaction",
        ]
    );

    let txs = node.sent_transactions();
    assert_eq!(txs.len(), 1);
    let tx = &txs[0];
    assert_eq!(tx.from, Some(wallet.address()));
    assert_eq!(tx.to, Some(NameOrAddress::Address(book.honey_router)));
    assert_eq!(tx.chain_id, Some(U64::from(80085)));
    assert_eq!(tx.nonce, Some(U256::from(7)));
    assert_eq!(tx.gas_price, Some(U256::from(1_150_000_000u64)));
    assert_eq!(tx.value.unwrap_or_default(), U256::zero());
    assert!(gas_limit_in_range(tx), "gas {:?}", tx.gas);

    let call = MintCall::decode(tx.data.clone().unwrap_or_default()).unwrap();
    assert_eq!(call.to, wallet.address());
    assert_eq!(call.collateral, book.usdc);
    assert_eq!(call.amount, U256::from(400));
}

#[tokio::test]
async fn native_swap_sends_the_amount_as_value() {
    let server = MockServer::start_async().await;
    let mut config = test_config();
    config.swap.router_url = server.base_url();
    let (client, node) = recording_client(&config);
    let wallet = test_wallet(&client);
    let book = *client.contracts();

    server
        .mock_async(|when, then| {
            when.method(GET).path("/dex/route");
            then.status(200).json_body(json!({
                "steps": [{
                    "pool": format!("{:?}", book.usdc_pool),
                    "assetIn": format!("{:?}", book.wbera),
                    "amountIn": "1000",
                    "assetOut": format!("{:?}", book.usdc),
                    "amountOut": "500"
                }]
            }));
        })
        .await;

    node.push(H256::repeat_byte(0x11));
    node.push(U256::from(3));
    node.push(U256::from(GAS_PRICE));
    node.push(U256::from(10_000));

    let amount_in = U256::from(1_000);
    client
        .bex_swap(&wallet, book.wbera, book.usdc, amount_in)
        .await
        .unwrap();

    assert_eq!(
        node.methods(),
        vec![
            "eth_getBalance",
            "eth_gasPrice",
            "eth_getTransactionCount",
            "eth_sendRawTransaction",
        ]
    );

    let txs = node.sent_transactions();
    assert_eq!(txs.len(), 1);
    let tx = &txs[0];
    assert_eq!(tx.to, Some(NameOrAddress::Address(book.bex_vault)));
    assert_eq!(tx.value, Some(amount_in));
    assert_eq!(tx.gas_price, Some(U256::from(1_200_000_000u64)));
    assert_eq!(tx.nonce, Some(U256::from(3)));

    let call = BatchSwapCall::decode(tx.data.clone().unwrap_or_default()).unwrap();
    assert_eq!(call.kind, 0);
    assert_eq!(call.deadline, U256::from(99_999_999u64));
    assert_eq!(call.swaps.len(), 1);
    assert_eq!(call.swaps[0].asset_in, Address::zero());
    assert_eq!(call.swaps[0].amount_in, amount_in);
    assert_eq!(call.swaps[0].amount_out, U256::from(250));
}

#[tokio::test]
async fn low_allowance_sends_one_max_approval_before_the_call() {
    let (client, node) = recording_client(&test_config());
    let wallet = test_wallet(&client);
    let book = *client.contracts();
    let approval = H256::repeat_byte(0xaa);
    let mint = H256::repeat_byte(0xcd);
    let (approval_tx, approval_receipt) = mined(approval, true);

    node.push(mint);
    node.push(U256::from(8));
    node.push(U256::from(GAS_PRICE));
    node.push(approval_receipt);
    node.push(approval_tx);
    node.push(approval);
    node.push(U256::from(7));
    node.push(U256::from(GAS_PRICE));
    node.push(call_result(U256::zero()));
    node.push(call_result(U256::from(1_000)));

    let sent = client.honey_mint(&wallet, U256::from(400)).await.unwrap();
    assert_eq!(sent, mint);

    let methods = node.methods();
    assert!(methods.contains(&"eth_getTransactionByHash".to_string()));
    assert!(methods.contains(&"eth_getTransactionReceipt".to_string()));

    let txs = node.sent_transactions();
    assert_eq!(txs.len(), 2);

    assert_eq!(txs[0].to, Some(NameOrAddress::Address(book.usdc)));
    assert_eq!(txs[0].nonce, Some(U256::from(7)));
    let approve = ApproveCall::decode(txs[0].data.clone().unwrap_or_default()).unwrap();
    assert_eq!(approve.spender, book.honey_router);
    assert_eq!(approve.amount, U256::MAX);

    assert_eq!(txs[1].to, Some(NameOrAddress::Address(book.honey_router)));
    assert_eq!(txs[1].nonce, Some(U256::from(8)));
}

#[tokio::test]
async fn reverted_approval_stops_before_the_call() {
    let (client, node) = recording_client(&test_config());
    let wallet = test_wallet(&client);
    let book = *client.contracts();
    let approval = H256::repeat_byte(0xaa);
    let (approval_tx, approval_receipt) = mined(approval, false);

    node.push(approval_receipt);
    node.push(approval_tx);
    node.push(approval);
    node.push(U256::from(7));
    node.push(U256::from(GAS_PRICE));
    node.push(call_result(U256::zero()));
    node.push(call_result(U256::from(1_000)));

    let err = client
        .honey_mint(&wallet, U256::from(400))
        .await
        .unwrap_err();

    match err.downcast_ref::<ActivityError>() {
        Some(ActivityError::Approval {
            token,
            spender,
            reason,
        }) => {
            assert_eq!(*token, book.usdc);
            assert_eq!(*spender, book.honey_router);
            assert!(reason.contains("reverted"), "{}", reason);
        }
        other => panic!("expected approval failure, got {:?}", other),
    }
    assert_eq!(node.sent_transactions().len(), 1);
}
