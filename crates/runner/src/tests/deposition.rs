use gw_rpc_client::traits::L1Client;
use gw_types::{
    bytes::Bytes,
    godwoken::{pack_lock_args, zero_script, DepositionLockArgs},
    offchain::CellInfo,
    packed::CellOutput,
    prelude::*,
};

use crate::{
    deposition::DepositionError,
    testing_tools::{
        deposit_cell, deposit_entry, deposit_output, deposition_lock_args, layer2_lock,
        next_out_point, Fixture, MockL1, CANCEL_TIMEOUT, CKB,
    },
};

const TOKEN: [u8; 32] = [0x11; 32];

#[test]
fn test_native_deposit_request() {
    let fixture = Fixture::new();
    let entry = deposit_entry(&fixture, 40_000_000_000, None);
    assert!(entry.request.is_native());
    assert_eq!(entry.request.sudt_script.as_slice(), zero_script().as_slice());
    assert_eq!(entry.request.amount, 40_000_000_000);
    assert_eq!(entry.request.layer2_lock.as_slice(), layer2_lock().as_slice());
    assert_eq!(entry.lock_args, deposition_lock_args(CANCEL_TIMEOUT));
}

#[test]
fn test_sudt_deposit_request() {
    let fixture = Fixture::new();
    let sudt_script = fixture.sudt_script(TOKEN);
    let entry = deposit_entry(&fixture, 400 * CKB, Some((sudt_script.clone(), 1234)));
    assert!(!entry.request.is_native());
    assert_eq!(entry.request.sudt_script.as_slice(), sudt_script.as_slice());
    assert_eq!(entry.request.amount, 1234);
}

#[test]
fn test_sudt_deposit_without_amount() {
    let fixture = Fixture::new();
    let mut cell = deposit_cell(
        &fixture,
        400 * CKB,
        Some((fixture.sudt_script(TOKEN), 1)),
        CANCEL_TIMEOUT,
    );
    cell.data = Bytes::from(vec![1u8; 4]);
    let err = fixture.scanner().try_extract(&cell, None).unwrap_err();
    assert!(matches!(
        err,
        DepositionError::InvalidSudtAmount { actual: 4, .. }
    ));
}

#[test]
fn test_ignore_other_cells() {
    let fixture = Fixture::new();
    let scanner = fixture.scanner();

    // other lock
    let cell = CellInfo {
        out_point: next_out_point(),
        output: CellOutput::new_builder()
            .capacity((400 * CKB).pack())
            .build(),
        data: Bytes::new(),
    };
    assert!(scanner.try_extract(&cell, None).unwrap().is_none());

    // other rollup
    let args = pack_lock_args(&[0x99u8; 32], &deposition_lock_args(CANCEL_TIMEOUT));
    let cell = CellInfo {
        out_point: next_out_point(),
        output: CellOutput::new_builder()
            .capacity((400 * CKB).pack())
            .lock(fixture.deployment.deposition_lock.to_script(args))
            .build(),
        data: Bytes::new(),
    };
    assert!(scanner.try_extract(&cell, None).unwrap().is_none());
}

#[test]
fn test_invalid_lock_args() {
    let fixture = Fixture::new();
    let mut args = fixture.rollup_context.rollup_type_hash.to_vec();
    args.extend_from_slice(&[0xffu8; 7]);
    let cell = CellInfo {
        out_point: next_out_point(),
        output: CellOutput::new_builder()
            .capacity((400 * CKB).pack())
            .lock(
                fixture
                    .deployment
                    .deposition_lock
                    .to_script(Bytes::from(args)),
            )
            .build(),
        data: Bytes::new(),
    };
    let err = fixture.scanner().try_extract(&cell, None).unwrap_err();
    assert!(matches!(err, DepositionError::InvalidLockArgs { .. }));
}

#[tokio::test]
async fn test_query_valid_deposits() {
    let fixture = Fixture::new();
    let l1 = MockL1::default();
    let timed_out = deposition_lock_args(1);
    let invalid_since = DepositionLockArgs {
        cancel_timeout: 0x1f00_0000_0000_0000,
        ..deposition_lock_args(0)
    };
    let cells = l1.commit_cells(vec![
        deposit_output(&fixture, 400 * CKB, None, CANCEL_TIMEOUT),
        // absolute block 1 has passed
        (
            deposit_output(&fixture, 400 * CKB, None, CANCEL_TIMEOUT)
                .0
                .as_builder()
                .lock(fixture.deposition_lock(&timed_out))
                .build(),
            Bytes::new(),
        ),
        (
            deposit_output(&fixture, 400 * CKB, None, CANCEL_TIMEOUT)
                .0
                .as_builder()
                .lock(fixture.deposition_lock(&invalid_since))
                .build(),
            Bytes::new(),
        ),
        // too small to pay for a custodian cell
        deposit_output(&fixture, 100 * CKB, None, CANCEL_TIMEOUT),
        deposit_output(&fixture, 500 * CKB, None, CANCEL_TIMEOUT),
    ]);
    l1.push_empty_block();

    let tip = l1.get_tip_header().await.unwrap();
    let entries = fixture
        .scanner()
        .query_valid_deposits(&l1, &tip, 20, 400 * CKB)
        .await
        .unwrap();
    let out_points: Vec<_> = entries
        .iter()
        .map(|entry| entry.cell.out_point.clone())
        .collect();
    assert_eq!(
        out_points,
        vec![cells[0].out_point.clone(), cells[4].out_point.clone()]
    );
    assert_eq!(entries[1].request.amount, 500 * CKB as u128);

    let entries = fixture
        .scanner()
        .query_valid_deposits(&l1, &tip, 1, 400 * CKB)
        .await
        .unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(
        entries[0].cell.out_point.as_slice(),
        cells[0].out_point.as_slice()
    );
}

#[tokio::test]
async fn test_relative_timeout_elapses() {
    let fixture = Fixture::new();
    let l1 = MockL1::default();
    let cancel_timeout = (1 << 63) | 3;
    l1.commit_cells(vec![deposit_output(&fixture, 400 * CKB, None, cancel_timeout)]);

    let tip = l1.get_tip_header().await.unwrap();
    let entries = fixture
        .scanner()
        .query_valid_deposits(&l1, &tip, 20, 400 * CKB)
        .await
        .unwrap();
    assert_eq!(entries.len(), 1);

    for _ in 0..3 {
        l1.push_empty_block();
    }
    let tip = l1.get_tip_header().await.unwrap();
    let entries = fixture
        .scanner()
        .query_valid_deposits(&l1, &tip, 20, 400 * CKB)
        .await
        .unwrap();
    assert!(entries.is_empty());
}
