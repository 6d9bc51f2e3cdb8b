use async_trait::async_trait;
use shared_types::{Wallet, WalletId};
use tracing::debug;

use crate::domain::NetworkError;
use crate::ports::NetworkApi;
use crate::service::Network;

#[async_trait]
impl NetworkApi for Network {
    async fn push(&self, wallet: &Wallet) {
        // Failures are already logged per attempt; the report is not part of
        // the caller contract.
        let _report = self.push_report(wallet).await;
    }

    async fn pull(&self, id: WalletId) -> Result<Wallet, NetworkError> {
        debug!("[ledger-01] Pull of wallet {} refused: merge is undefined", id);
        Err(NetworkError::Unsupported {
            operation: "pull",
            id,
        })
    }
}
