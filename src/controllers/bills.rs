//! Bills list page
//!
//! One `list` call per page entry, then pure projection: each summary
//! becomes a display-ready [`BillRow`] in store order, a failure becomes the
//! banner text verbatim. The receipt preview is presentation only: the
//! image URL already sits in the row, so the eye icon never triggers a
//! network call.

use std::sync::{Arc, PoisonError, RwLock};

use crate::core::bill::Bill;
use crate::core::format::{format_date, format_status};
use crate::core::navigation::{NavigationGateway, Route};
use crate::core::store::BillStore;

/// Display-ready projection of one bill summary. Missing fields become
/// empty cells, never errors.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BillRow {
    pub id: String,
    pub expense_type: String,
    pub name: String,
    /// Short French date ("22 Mar. 23"), or the raw stored string when the
    /// store returned something unparseable
    pub date: String,
    pub amount: String,
    pub status: String,
    pub commentary: String,
    pub file_url: Option<String>,
}

impl BillRow {
    fn from_bill(bill: &Bill) -> Self {
        Self {
            id: bill.id.clone(),
            expense_type: bill.expense_type.clone().unwrap_or_default(),
            name: bill.name.clone().unwrap_or_default(),
            date: bill.date.as_deref().map(format_date).unwrap_or_default(),
            amount: bill.amount.map(format_amount).unwrap_or_default(),
            status: format_status(bill.status).to_string(),
            commentary: bill.commentary.clone().unwrap_or_default(),
            file_url: bill.file_url.clone(),
        }
    }
}

fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{amount:.0}")
    } else {
        format!("{amount}")
    }
}

/// What the page shows in place of the table.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum BillsView {
    /// Nothing fetched yet
    #[default]
    Pristine,
    /// One row per summary, in store order
    Loaded(Vec<BillRow>),
    /// The fetch failed; the banner shows this text verbatim
    Failed { message: String },
}

/// Modal content for the eye-icon preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptPreview {
    pub image_url: String,
    pub bill_name: String,
}

/// Fetches and projects the caller's bills for the list page.
pub struct BillsController<S, N> {
    store: Arc<S>,
    navigation: Arc<N>,
    view: RwLock<BillsView>,
}

impl<S, N> BillsController<S, N>
where
    S: BillStore,
    N: NavigationGateway,
{
    pub fn new(store: Arc<S>, navigation: Arc<N>) -> Self {
        Self {
            store,
            navigation,
            view: RwLock::new(BillsView::Pristine),
        }
    }

    /// Fetch the bills once and project them into the view state.
    ///
    /// Issues exactly one `list` call. The caller invokes this once per page
    /// entry; a response arriving for a page that was navigated away from is
    /// the caller's to discard.
    pub async fn load(&self) -> BillsView {
        tracing::debug!("récupération des notes de frais");
        let view = match self.store.list().await {
            Ok(bills) => {
                tracing::debug!(count = bills.len(), "notes de frais reçues");
                BillsView::Loaded(bills.iter().map(BillRow::from_bill).collect())
            }
            Err(e) => {
                tracing::error!(error = %e, "échec de la récupération des notes de frais");
                BillsView::Failed {
                    message: e.to_string(),
                }
            }
        };
        *self
            .view
            .write()
            .unwrap_or_else(PoisonError::into_inner) = view.clone();
        view
    }

    /// Current view state.
    pub fn view(&self) -> BillsView {
        self.view
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Preview the receipt of the row at `index`. Pure presentation: the
    /// image URL is already held by the row, no store call is made. `None`
    /// when the view holds no rows, the index is out of range, or the row
    /// has no receipt.
    pub fn preview_receipt(&self, index: usize) -> Option<ReceiptPreview> {
        match &*self.view.read().unwrap_or_else(PoisonError::into_inner) {
            BillsView::Loaded(rows) => {
                let row = rows.get(index)?;
                row.file_url.as_ref().map(|url| ReceiptPreview {
                    image_url: url.clone(),
                    bill_name: row.name.clone(),
                })
            }
            _ => None,
        }
    }

    /// Navigate to the new-bill form.
    pub fn open_new_bill(&self) {
        tracing::debug!("ouverture du formulaire de nouvelle note de frais");
        self.navigation.on_navigate(Route::NewBill);
    }
}
