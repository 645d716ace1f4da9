//! In-memory implementation of BillStore for testing and development
//!
//! Preserves insertion order: `list` answers the bills exactly as they were
//! created or seeded, which is the order the list page must render them in.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use indexmap::IndexMap;
use uuid::Uuid;

use crate::core::bill::{Bill, BillPayload, CreateReceipt};
use crate::core::error::StoreError;
use crate::core::store::BillStore;

/// In-memory bill store. Uses RwLock for thread-safe access and an ordered
/// map so listing order matches creation order.
#[derive(Clone, Default)]
pub struct InMemoryBillStore {
    bills: Arc<RwLock<IndexMap<String, Bill>>>,
}

impl InMemoryBillStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with the given bills, listed in the given order.
    pub fn with_bills(bills: Vec<Bill>) -> Self {
        let store = Self::new();
        {
            let mut map = store
                .bills
                .write()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            for bill in bills {
                map.insert(bill.id.clone(), bill);
            }
        }
        store
    }

    /// Where the store pretends to host an uploaded receipt file.
    fn hosted_url(file_name: &str) -> String {
        format!("https://localhost:3456/images/{file_name}")
    }
}

#[async_trait]
impl BillStore for InMemoryBillStore {
    async fn list(&self) -> Result<Vec<Bill>, StoreError> {
        let bills = self
            .bills
            .read()
            .map_err(|e| StoreError::Transport(format!("Failed to acquire read lock: {e}")))?;

        Ok(bills.values().cloned().collect())
    }

    async fn create(&self, payload: BillPayload) -> Result<CreateReceipt, StoreError> {
        let key = Uuid::new_v4().to_string();
        let file_name = payload.file_name.clone();
        let file_url = payload.file_url.clone().unwrap_or_else(|| {
            Self::hosted_url(file_name.as_deref().unwrap_or_default())
        });

        let bill = Bill {
            id: key.clone(),
            name: payload.name,
            date: payload.date,
            expense_type: payload.expense_type.map(|t| t.label().to_string()),
            amount: payload.amount,
            vat: payload.vat,
            pct: payload.pct,
            commentary: payload.commentary,
            file_name,
            file_url: Some(file_url.clone()),
            status: payload.status.unwrap_or_default(),
            email: Some(payload.email),
        };

        let mut bills = self
            .bills
            .write()
            .map_err(|e| StoreError::Transport(format!("Failed to acquire write lock: {e}")))?;

        bills.insert(key.clone(), bill);

        Ok(CreateReceipt { file_url, key })
    }
}
