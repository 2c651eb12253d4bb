use gw_types::{
    bytes::Bytes,
    core::{DepType, ScriptHashType, TransactionBuilder},
    offchain::CellInfo,
    packed::{CellDep, CellInput, CellOutput, OutPoint, OutPointVec, Script},
    prelude::*,
};

use crate::{
    block_producer::{resolve_type_dep, BlockProducerError},
    testing_tools::{deposit_output, next_out_point, Fixture, MockL1, CANCEL_TIMEOUT, CKB},
};

const SUDT_CODE: &[u8] = b"sudt binary";

fn code_cell_output() -> (CellOutput, Bytes) {
    let output = CellOutput::new_builder()
        .capacity((1000 * CKB).pack())
        .build();
    (output, Bytes::from_static(SUDT_CODE))
}

fn data_sudt_script() -> Script {
    Script::new_builder()
        .code_hash(ckb_hash::blake2b_256(SUDT_CODE).pack())
        .hash_type(ScriptHashType::Data.into())
        .args(Bytes::from(vec![0x11u8; 32]).pack())
        .build()
}

/// Commit a deposit of `sudt_script` created by a tx with `cell_deps`.
fn commit_deposit(
    l1: &MockL1,
    fixture: &Fixture,
    cell_deps: Vec<CellDep>,
    sudt_script: Script,
) -> CellInfo {
    let (output, data) = deposit_output(fixture, 400 * CKB, Some((sudt_script, 10)), CANCEL_TIMEOUT);
    let tx = TransactionBuilder::default()
        .cell_deps(cell_deps)
        .input(CellInput::new(next_out_point(), 0))
        .output(output.clone())
        .output_data(data.pack())
        .build();
    l1.push_block(vec![tx.clone()]);
    CellInfo {
        out_point: OutPoint::new_builder()
            .tx_hash(tx.hash())
            .index(0u32.pack())
            .build(),
        output,
        data,
    }
}

fn code_dep(out_point: OutPoint) -> CellDep {
    CellDep::new_builder()
        .out_point(out_point)
        .dep_type(DepType::Code.into())
        .build()
}

#[tokio::test]
async fn test_resolve_code_dep_by_data_hash() {
    let fixture = Fixture::new();
    let l1 = MockL1::default();
    let other = l1.commit_cells(vec![(
        CellOutput::new_builder().capacity((100 * CKB).pack()).build(),
        Bytes::from_static(b"other"),
    )]);
    let code = l1.commit_cells(vec![code_cell_output()]);
    let sudt_script = data_sudt_script();
    let deps = vec![
        code_dep(other[0].out_point.clone()),
        code_dep(code[0].out_point.clone()),
    ];
    let deposit = commit_deposit(&l1, &fixture, deps.clone(), sudt_script.clone());

    let dep = resolve_type_dep(&l1, &deposit, &sudt_script).await.unwrap();
    assert_eq!(dep.as_slice(), deps[1].as_slice());
}

#[tokio::test]
async fn test_resolve_dep_group_by_type_hash() {
    let fixture = Fixture::new();
    let l1 = MockL1::default();
    let type_id = Script::new_builder()
        .code_hash([0x21u8; 32].pack())
        .hash_type(ScriptHashType::Type.into())
        .args(Bytes::from(vec![0x22u8; 32]).pack())
        .build();
    let code = l1.commit_cells(vec![(
        code_cell_output()
            .0
            .as_builder()
            .type_(Some(type_id.clone()).pack())
            .build(),
        Bytes::from_static(SUDT_CODE),
    )]);
    let group_data = OutPointVec::new_builder()
        .push(next_out_point())
        .push(code[0].out_point.clone())
        .build();
    let group = l1.commit_cells(vec![(
        CellOutput::new_builder()
            .capacity((100 * CKB).pack())
            .build(),
        group_data.as_bytes(),
    )]);
    let dep = CellDep::new_builder()
        .out_point(group[0].out_point.clone())
        .dep_type(DepType::DepGroup.into())
        .build();

    let sudt_script = Script::new_builder()
        .code_hash(type_id.calc_script_hash())
        .hash_type(ScriptHashType::Type.into())
        .args(Bytes::from(vec![0x11u8; 32]).pack())
        .build();
    let deposit = commit_deposit(&l1, &fixture, vec![dep.clone()], sudt_script.clone());

    let resolved = resolve_type_dep(&l1, &deposit, &sudt_script).await.unwrap();
    assert_eq!(resolved.as_slice(), dep.as_slice());
}

#[tokio::test]
async fn test_type_dep_not_found() {
    let fixture = Fixture::new();
    let l1 = MockL1::default();
    let other = l1.commit_cells(vec![(
        CellOutput::new_builder().capacity((100 * CKB).pack()).build(),
        Bytes::from_static(b"other"),
    )]);
    let sudt_script = data_sudt_script();
    let deposit = commit_deposit(
        &l1,
        &fixture,
        // a dead cell dep is skipped
        vec![code_dep(next_out_point()), code_dep(other[0].out_point.clone())],
        sudt_script.clone(),
    );

    let err = resolve_type_dep(&l1, &deposit, &sudt_script)
        .await
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<BlockProducerError>(),
        Some(BlockProducerError::TypeDepNotFound { .. })
    ));
}
