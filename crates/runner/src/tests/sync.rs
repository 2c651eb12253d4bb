use std::{sync::Arc, time::Duration};

use gw_config::SyncConfig;
use gw_types::{bytes::Bytes, prelude::*};

use crate::{
    sync_l1::SyncEngine,
    testing_tools::{
        build_tx, deposit_output, Fixture, MockChainService, MockL1, CANCEL_TIMEOUT, CKB,
    },
    types::{L1ActionContext, DEFAULT_AGGREGATOR_ID},
};

fn sync_engine(
    fixture: &Fixture,
    l1: &Arc<MockL1>,
    chain_service: &Arc<MockChainService>,
) -> SyncEngine {
    SyncEngine::new(
        l1.clone(),
        chain_service.clone(),
        fixture.scanner(),
        &fixture.rollup_context,
        SyncConfig {
            max_retries: 2,
            retry_base_ms: 1,
            poll_interval_ms: 1,
        },
        l1.tip_number(),
    )
}

#[tokio::test]
async fn test_sync_rollup_tx_with_deposits() {
    let fixture = Fixture::new();
    let l1 = Arc::new(MockL1::default());
    let chain_service = Arc::new(MockChainService::default());
    let rollup_cell = l1.commit_cells(vec![(fixture.rollup_output(1000 * CKB), Bytes::new())]);
    let deposits = l1.commit_cells(vec![
        deposit_output(&fixture, 400 * CKB, None, CANCEL_TIMEOUT),
        deposit_output(
            &fixture,
            400 * CKB,
            Some((fixture.sudt_script([0x11; 32]), 77)),
            CANCEL_TIMEOUT,
        ),
    ]);
    let mut engine = sync_engine(&fixture, &l1, &chain_service);

    // an unrelated tx, then the rollup tx consuming the deposits
    l1.push_block(vec![build_tx(vec![], vec![])]);
    let inputs = std::iter::once(rollup_cell[0].out_point.clone())
        .chain(deposits.iter().map(|cell| cell.out_point.clone()))
        .collect();
    let rollup_tx = build_tx(
        inputs,
        vec![(fixture.rollup_output(1000 * CKB), Bytes::from(vec![1u8]))],
    );
    let block = l1.push_block(vec![rollup_tx.clone()]);
    l1.push_empty_block();

    engine.sync_to_tip().await.unwrap();
    assert_eq!(engine.last_synced_block_number(), l1.tip_number());

    let synced = chain_service.synced.lock().unwrap();
    assert_eq!(synced.len(), 1);
    let param = &synced[0];
    assert!(param.reverts.is_empty());
    assert_eq!(param.next_block_context.aggregator_id, DEFAULT_AGGREGATOR_ID);
    assert_eq!(param.updates.len(), 1);
    let update = &param.updates[0];
    assert_eq!(update.header_info.number, block.number());
    assert_eq!(&update.header_info.block_hash, block.hash().as_slice());
    assert_eq!(update.transaction.as_slice(), rollup_tx.data().as_slice());
    match &update.context {
        L1ActionContext::SubmitTxs {
            deposition_requests,
        } => {
            assert_eq!(deposition_requests.len(), 2);
            assert!(deposition_requests[0].is_native());
            assert_eq!(deposition_requests[0].amount, 400 * CKB as u128);
            assert_eq!(deposition_requests[1].amount, 77);
        }
        other => panic!("unexpected context {:?}", other),
    }
}

#[tokio::test]
async fn test_unresolved_input_fails_sync() {
    let fixture = Fixture::new();
    let l1 = Arc::new(MockL1::default());
    let chain_service = Arc::new(MockChainService::default());
    let mut engine = sync_engine(&fixture, &l1, &chain_service);

    // the input of `build_tx` spends a cell nobody created
    l1.push_block(vec![build_tx(
        vec![],
        vec![(fixture.rollup_output(1000 * CKB), Bytes::new())],
    )]);
    assert!(engine.sync_to_tip().await.is_err());
    assert!(chain_service.synced.lock().unwrap().is_empty());
    assert_eq!(engine.last_synced_block_number(), l1.tip_number() - 1);
}

#[tokio::test]
async fn test_wait_for_indexer() {
    let fixture = Fixture::new();
    let l1 = Arc::new(MockL1::default());
    let chain_service = Arc::new(MockChainService::default());
    l1.push_empty_block();
    l1.push_empty_block();
    l1.set_indexer_tip(1);
    let engine = sync_engine(&fixture, &l1, &chain_service);

    let waiting = tokio::time::timeout(Duration::from_millis(50), engine.wait_for_indexer(2)).await;
    assert!(waiting.is_err());

    l1.set_indexer_tip(2);
    tokio::time::timeout(Duration::from_secs(5), engine.wait_for_indexer(2))
        .await
        .unwrap()
        .unwrap();
}
