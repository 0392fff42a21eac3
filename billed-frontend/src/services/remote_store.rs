use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::{Attachment, BillDraft, BillRecord, SelectedFile};

/// Backing service for bill records and their proof files.
///
/// Each call is independent; idempotency is the store's concern.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Every bill visible to the connected user, in store order.
    async fn list(&self) -> Result<Vec<BillRecord>, StoreError>;

    /// Upload a proof file on behalf of `email`.
    async fn create_attachment(
        &self,
        file: SelectedFile,
        email: &str,
    ) -> Result<Attachment, StoreError>;

    /// Create or update the record described by `draft`.
    async fn commit(&self, draft: &BillDraft) -> Result<BillRecord, StoreError>;
}
