use std::sync::{atomic::Ordering, Arc};

use gw_config::{BlockProducerConfig, SyncConfig};
use gw_types::{
    bytes::Bytes,
    core::{DepType, ScriptHashType, TransactionBuilder},
    godwoken::L2Block,
    packed::{CellDep, CellInput, CellOutput, Script, Transaction, WitnessArgs},
    prelude::*,
};

use crate::{
    block_producer::{BlockProducer, BlockProducerError},
    custodian::minimal_capacity,
    signer::TransactionSigner,
    sync_l1::SyncEngine,
    testing_tools::{
        block_with_withdrawals, custodian_output, deposit_output, next_out_point, test_wallet,
        withdrawal_request, Fixture, MockAggregator, MockChainService, MockL1, CANCEL_TIMEOUT,
        CKB,
    },
    types::CycleOutcome,
    withdrawal::WithdrawalError,
};

const TOKEN: [u8; 32] = [0x11; 32];

struct Harness {
    fixture: Fixture,
    l1: Arc<MockL1>,
    chain_service: Arc<MockChainService>,
    aggregator: Arc<MockAggregator>,
}

impl Harness {
    /// A chain with the rollup cell and a payment cell of the wallet.
    fn new(block: L2Block) -> Self {
        let fixture = Fixture::new();
        let l1 = Arc::new(MockL1::default());
        l1.commit_cells(vec![
            (fixture.rollup_output(1000 * CKB), Bytes::from(vec![0u8; 8])),
            (
                CellOutput::new_builder()
                    .capacity((10_000 * CKB).pack())
                    .lock(test_wallet().lock_script().clone())
                    .build(),
                Bytes::new(),
            ),
        ]);
        Harness {
            fixture,
            l1,
            chain_service: Arc::new(MockChainService::with_block(block)),
            aggregator: Arc::new(MockAggregator::default()),
        }
    }

    async fn run_cycle(&self) -> anyhow::Result<CycleOutcome> {
        let config = BlockProducerConfig {
            fee_rate: 1000,
            ..Default::default()
        };
        let signer = TransactionSigner::new(
            self.l1.clone(),
            self.aggregator.clone(),
            test_wallet(),
            config.fee_rate,
        );
        let producer = BlockProducer::new(
            self.l1.clone(),
            self.chain_service.clone(),
            self.aggregator.clone(),
            signer,
            self.fixture.deployment.clone(),
            self.fixture.rollup_context.clone(),
            config,
        );
        let mut sync = SyncEngine::new(
            self.l1.clone(),
            self.chain_service.clone(),
            self.fixture.scanner(),
            &self.fixture.rollup_context,
            SyncConfig::default(),
            self.l1.tip_number(),
        );
        producer.produce_next_block(&mut sync, 1_600_000_000_000).await
    }

    fn sent_tx(&self) -> Transaction {
        let mut sent = self.l1.sent_transactions();
        assert_eq!(sent.len(), 1);
        sent.remove(0)
    }
}

fn output_data(tx: &Transaction, index: usize) -> Bytes {
    tx.raw().outputs_data().get(index).unwrap().raw_data()
}

fn token_amount(data: &Bytes) -> u128 {
    let mut buf = [0u8; 16];
    buf.copy_from_slice(&data[..16]);
    u128::from_le_bytes(buf)
}

fn has_dep(tx: &Transaction, dep: CellDep) -> bool {
    tx.raw()
        .cell_deps()
        .into_iter()
        .any(|d| d.as_slice() == dep.as_slice())
}

#[tokio::test]
async fn test_block_with_deposits() {
    let harness = Harness::new(block_with_withdrawals(1, vec![]));
    let fixture = &harness.fixture;
    let deposits = harness.l1.commit_cells(vec![
        deposit_output(fixture, 400 * CKB, None, CANCEL_TIMEOUT),
        deposit_output(fixture, 600 * CKB, None, CANCEL_TIMEOUT),
    ]);

    let outcome = harness.run_cycle().await.unwrap();
    let tx = harness.sent_tx();
    assert_eq!(outcome, CycleOutcome::Submitted(tx.calc_tx_hash().unpack()));

    let params = harness.chain_service.produce_params.lock().unwrap();
    assert_eq!(params[0].aggregator_id, 0);
    let amounts: Vec<u128> = params[0]
        .deposition_requests
        .iter()
        .map(|request| request.amount)
        .collect();
    assert_eq!(amounts, vec![400 * CKB as u128, 600 * CKB as u128]);

    // rollup cell, deposits, then the fee payment
    let inputs: Vec<_> = tx.raw().inputs().into_iter().collect();
    assert_eq!(inputs.len(), 4);
    let rollup_output = tx.raw().outputs().get(0).unwrap();
    assert_eq!(
        rollup_output.type_().to_opt().unwrap().as_slice(),
        fixture.rollup_context.rollup_type_script.as_slice()
    );
    assert_eq!(
        inputs[1].previous_output().as_slice(),
        deposits[0].out_point.as_slice()
    );
    assert_eq!(
        inputs[2].previous_output().as_slice(),
        deposits[1].out_point.as_slice()
    );

    // rollup output carries the new global state, the witness the block
    assert_eq!(output_data(&tx, 0), harness.chain_service.global_state);
    let witness = WitnessArgs::from_slice(&tx.witnesses().get(0).unwrap().raw_data()).unwrap();
    let block = harness.chain_service.block.lock().unwrap().clone();
    assert_eq!(
        witness.output_type().to_opt().unwrap().raw_data(),
        block.as_bytes()
    );
    // deposit inputs are unlocked by the rollup cell and carry no witness data
    assert!(tx.witnesses().get(1).unwrap().raw_data().is_empty());
    assert!(tx.witnesses().get(2).unwrap().raw_data().is_empty());

    // custodians keep the deposited capacity
    for (index, deposit) in deposits.iter().enumerate() {
        let output = tx.raw().outputs().get(index + 1).unwrap();
        assert!(fixture.deployment.custodian_lock.matches(&output.lock()));
        assert_eq!(
            output.capacity().as_slice(),
            deposit.output.capacity().as_slice()
        );
    }
    assert!(has_dep(&tx, fixture.deployment.deposition_lock_dep.clone().into()));
    assert!(has_dep(&tx, fixture.deployment.state_validator_type_dep.clone().into()));
}

#[tokio::test]
async fn test_sudt_withdrawals() {
    let block = block_with_withdrawals(
        200,
        vec![
            withdrawal_request(400 * CKB, Some((TOKEN, 100))),
            withdrawal_request(400 * CKB, Some((TOKEN, 50))),
        ],
    );
    let harness = Harness::new(block);
    let fixture = &harness.fixture;
    let custodians = harness.l1.commit_cells(vec![
        custodian_output(fixture, 200 * CKB, Some((TOKEN, 80))),
        custodian_output(fixture, 200 * CKB, Some((TOKEN, 90))),
        custodian_output(fixture, 200 * CKB, Some((TOKEN, 10))),
        custodian_output(fixture, 1000 * CKB, None),
    ]);

    let outcome = harness.run_cycle().await.unwrap();
    assert!(matches!(outcome, CycleOutcome::Submitted(_)));
    let tx = harness.sent_tx();

    let inputs: Vec<_> = tx
        .raw()
        .inputs()
        .into_iter()
        .map(|input| input.previous_output())
        .collect();
    // rollup, three custodians, payment
    assert_eq!(inputs.len(), 5);
    for (input, custodian) in inputs[1..4]
        .iter()
        .zip([&custodians[0], &custodians[1], &custodians[3]])
    {
        assert_eq!(input.as_slice(), custodian.out_point.as_slice());
    }

    // rollup, two withdrawals, sudt change, ckb change, fee change
    let outputs = tx.raw().outputs();
    assert_eq!(outputs.len(), 6);
    assert!(fixture
        .deployment
        .withdrawal_lock
        .matches(&outputs.get(1).unwrap().lock()));
    assert_eq!(token_amount(&output_data(&tx, 1)), 100);
    assert_eq!(token_amount(&output_data(&tx, 2)), 50);
    assert_eq!(token_amount(&output_data(&tx, 3)), 20);
    let sudt_change = outputs.get(3).unwrap();
    let capacity: u64 = sudt_change.capacity().unpack();
    assert_eq!(
        capacity,
        minimal_capacity(&sudt_change, &output_data(&tx, 3)).unwrap()
    );
    assert!(has_dep(&tx, fixture.deployment.custodian_lock_dep.clone().into()));
    assert!(has_dep(&tx, fixture.deployment.sudt_type_dep.clone().into()));
    assert!(!has_dep(&tx, fixture.deployment.deposition_lock_dep.clone().into()));
}

#[tokio::test]
async fn test_insufficient_capacity_aborts_cycle() {
    let block = block_with_withdrawals(
        200,
        vec![
            withdrawal_request(400 * CKB, None),
            withdrawal_request(400 * CKB, None),
        ],
    );
    let harness = Harness::new(block);
    harness.l1.commit_cells(vec![
        custodian_output(&harness.fixture, 300 * CKB, None),
        custodian_output(&harness.fixture, 300 * CKB, None),
    ]);

    let err = harness.run_cycle().await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<WithdrawalError>(),
        Some(WithdrawalError::InsufficientCapacity { .. })
    ));
    assert!(harness.l1.sent_transactions().is_empty());
}

#[tokio::test]
async fn test_withdrawals_before_finality() {
    // no custodian is finalized while the block number is below the window
    let block = block_with_withdrawals(50, vec![withdrawal_request(400 * CKB, None)]);
    let harness = Harness::new(block);
    harness
        .l1
        .commit_cells(vec![custodian_output(&harness.fixture, 1000 * CKB, None)]);

    let err = harness.run_cycle().await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<WithdrawalError>(),
        Some(WithdrawalError::NoValidCustodian { withdrawals: 1 })
    ));
}

#[tokio::test]
async fn test_sudt_deposit_brings_type_dep() {
    let harness = Harness::new(block_with_withdrawals(1, vec![]));
    let code = harness.l1.commit_cells(vec![(
        CellOutput::new_builder()
            .capacity((1000 * CKB).pack())
            .build(),
        Bytes::from_static(b"sudt binary"),
    )]);
    let sudt_script = Script::new_builder()
        .code_hash(ckb_hash::blake2b_256(b"sudt binary").pack())
        .hash_type(ScriptHashType::Data.into())
        .args(Bytes::from(vec![0x11u8; 32]).pack())
        .build();
    let dep = CellDep::new_builder()
        .out_point(code[0].out_point.clone())
        .dep_type(DepType::Code.into())
        .build();
    let (output, data) = deposit_output(
        &harness.fixture,
        400 * CKB,
        Some((sudt_script, 10)),
        CANCEL_TIMEOUT,
    );
    let deposit_tx = TransactionBuilder::default()
        .cell_dep(dep.clone())
        .input(CellInput::new(next_out_point(), 0))
        .output(output)
        .output_data(data.pack())
        .build();
    harness.l1.push_block(vec![deposit_tx]);

    harness.run_cycle().await.unwrap();
    let tx = harness.sent_tx();
    assert!(has_dep(&tx, dep));
    let params = harness.chain_service.produce_params.lock().unwrap();
    assert_eq!(params[0].deposition_requests[0].amount, 10);
}

#[tokio::test]
async fn test_rollup_cell_count() {
    let harness = Harness::new(block_with_withdrawals(1, vec![]));
    harness.l1.commit_cells(vec![(
        harness.fixture.rollup_output(1000 * CKB),
        Bytes::new(),
    )]);

    let err = harness.run_cycle().await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<BlockProducerError>(),
        Some(BlockProducerError::RollupCellCount { count: 2 })
    ));
    assert!(harness.chain_service.produce_params.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_not_eligible() {
    let mut harness = Harness::new(block_with_withdrawals(1, vec![]));
    harness.aggregator = Arc::new(MockAggregator {
        refuse: true,
        ..Default::default()
    });

    let outcome = harness.run_cycle().await.unwrap();
    assert_eq!(outcome, CycleOutcome::NotEligible);
    assert!(harness.chain_service.produce_params.lock().unwrap().is_empty());
    assert!(harness.l1.sent_transactions().is_empty());
}

#[tokio::test]
async fn test_submission_failure_cancels_issuance() {
    let harness = Harness::new(block_with_withdrawals(1, vec![]));
    harness.l1.set_fail_send(true);

    let outcome = harness.run_cycle().await.unwrap();
    assert_eq!(outcome, CycleOutcome::SubmissionFailed);
    assert_eq!(harness.aggregator.cancelled.load(Ordering::SeqCst), 1);
}
