//! Input validation for the bill submission pipeline
//!
//! Two layers, both pure and synchronous:
//!
//! - [`receipt`]: the file-type gatekeeper run on every file pick. Only image
//!   formats pass; everything else rejects with the fixed inline message.
//! - [`validators`]: per-field normalizers applied when a raw [`BillForm`]
//!   becomes a [`BillPayload`] at submit time.
//!
//! [`BillForm`]: crate::core::bill::BillForm
//! [`BillPayload`]: crate::core::bill::BillPayload

pub mod receipt;
pub mod validators;

pub use receipt::{check_receipt_file, FileCheck, ACCEPTED_EXTENSIONS, ACCEPTED_FORMATS_MESSAGE};
