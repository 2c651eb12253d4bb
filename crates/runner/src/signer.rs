use std::sync::Arc;

use anyhow::Result;
use gw_rpc_client::traits::L1Client;
use gw_types::prelude::*;
use gw_utils::{fee::fill_tx_fee, transaction_skeleton::TransactionSkeleton, wallet::Wallet};
use tracing::instrument;

use crate::{traits::AggregatorLock, types::CycleOutcome};

/// Pays the fee, signs and submits settlement transactions.
pub struct TransactionSigner {
    client: Arc<dyn L1Client>,
    aggregator: Arc<dyn AggregatorLock>,
    wallet: Wallet,
    fee_rate: u64,
}

impl TransactionSigner {
    pub fn new(
        client: Arc<dyn L1Client>,
        aggregator: Arc<dyn AggregatorLock>,
        wallet: Wallet,
        fee_rate: u64,
    ) -> Self {
        TransactionSigner {
            client,
            aggregator,
            wallet,
            fee_rate,
        }
    }

    pub fn wallet(&self) -> &Wallet {
        &self.wallet
    }

    /// A rejected submission is reported as [`CycleOutcome::SubmissionFailed`]
    /// after cancelling the issuance, any earlier failure is an error.
    #[instrument(skip_all)]
    pub async fn sign_and_submit(&self, mut tx_skeleton: TransactionSkeleton) -> Result<CycleOutcome> {
        fill_tx_fee(
            &mut tx_skeleton,
            self.client.as_ref(),
            self.wallet.lock_script().to_owned(),
            self.fee_rate,
        )
        .await?;
        let tx = self.wallet.sign_tx_skeleton(&tx_skeleton, self.fee_rate)?;
        log::debug!(
            "submit tx: inputs {} outputs {} size {}",
            tx.raw().inputs().len(),
            tx.raw().outputs().len(),
            tx.as_slice().len()
        );

        match self.client.send_transaction(tx).await {
            Ok(tx_hash) => {
                log::info!("submitted block tx {}", tx_hash);
                Ok(CycleOutcome::Submitted(tx_hash))
            }
            Err(err) => {
                log::error!("failed to submit block tx: {:#}", err);
                if let Err(err) = self.aggregator.cancel_issuance().await {
                    log::error!("failed to cancel issuance: {:#}", err);
                }
                Ok(CycleOutcome::SubmissionFailed)
            }
        }
    }
}
