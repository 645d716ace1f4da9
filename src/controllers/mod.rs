//! Page controllers
//!
//! One controller per employee-facing page. Each exposes explicit handler
//! methods the UI adapter calls in place of raw DOM events, and holds the
//! page's state between calls.

pub mod bills;
pub mod new_bill;

pub use bills::{BillRow, BillsController, BillsView, ReceiptPreview};
pub use new_bill::{NewBillController, NewBillState, Receipt, Submission};
