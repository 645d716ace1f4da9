//! The bill store seam
//!
//! The remote persistence service is opaque to this crate: two asynchronous
//! one-shot operations, each resolving to a value or a typed failure. No
//! retry state, no cancellation: once a call is dispatched it runs to
//! completion, and a caller that navigated away simply discards the result.

use async_trait::async_trait;

use crate::core::bill::{Bill, BillPayload, CreateReceipt};
use crate::core::error::StoreError;

/// Asynchronous access to the remote bill store.
///
/// `create` covers both mutations of the pipeline: pushing a freshly
/// accepted receipt file (minimal payload, answers with the hosted file URL
/// and record key) and submitting the full normalized record.
#[async_trait]
pub trait BillStore: Send + Sync {
    /// Fetch the caller's bill summaries, in store order.
    async fn list(&self) -> Result<Vec<Bill>, StoreError>;

    /// Persist a bill payload. The response is handed back to the caller
    /// unchanged.
    async fn create(&self, payload: BillPayload) -> Result<CreateReceipt, StoreError>;
}
