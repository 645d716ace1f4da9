//! # Billed client core
//!
//! Client-side core of the employee expense-reporting app: everything between
//! the rendered pages and the remote bill store.
//!
//! ## What lives here
//!
//! - **Receipt gatekeeping**: only jpg/jpeg/png receipt files get past the
//!   file input, with the fixed inline message on rejection
//! - **Form normalization**: raw form capture becomes a typed, validated
//!   bill record
//! - **Store access**: one async seam ([`core::store::BillStore`]) with
//!   `list` and `create`, failures typed and surfaced verbatim
//! - **Page controllers**: the new-bill submission state machine and the
//!   bills list projection, decoupled from any UI binding
//!
//! The UI layer stays a thin adapter: it forwards events into controller
//! methods and renders the view state they expose.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use billed::prelude::*;
//!
//! let store = Arc::new(InMemoryBillStore::new());
//! let controller = NewBillController::new(
//!     store,
//!     Arc::new(router),
//!     SessionContext::employee("employee@test.tld"),
//! );
//!
//! controller.attach_receipt("facture.png").await?;
//! match controller.submit(&form).await? {
//!     Submission::Created(receipt) => println!("créée : {}", receipt.key),
//!     Submission::Blocked => {}
//! }
//! ```

pub mod config;
pub mod controllers;
pub mod core;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Types ===
    pub use crate::core::{
        bill::{Bill, BillForm, BillPayload, BillStatus, CreateReceipt, ExpenseType},
        error::{BilledError, StoreError, ValidationError},
        navigation::{LayoutIcon, NavigationGateway, Route},
        session::SessionContext,
        store::BillStore,
        validation::{check_receipt_file, FileCheck},
    };

    // === Controllers ===
    pub use crate::controllers::{
        BillRow, BillsController, BillsView, NewBillController, NewBillState, Receipt,
        ReceiptPreview, Submission,
    };

    // === Storage ===
    #[cfg(feature = "http")]
    pub use crate::storage::HttpBillStore;
    pub use crate::storage::InMemoryBillStore;

    // === Config ===
    pub use crate::config::ClientConfig;

    // === External dependencies ===
    pub use async_trait::async_trait;
}
