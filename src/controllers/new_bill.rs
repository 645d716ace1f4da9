//! New bill submission pipeline
//!
//! The controller owns the state between the UI's events: which receipt file
//! was accepted and uploaded, what inline validity text the file input must
//! show, and where the submission stands. The UI adapter stays a thin layer:
//! it forwards the picked filename to [`NewBillController::attach_receipt`],
//! mirrors [`NewBillController::validation_message`] into the input's native
//! validity channel, and hands the captured form to
//! [`NewBillController::submit`].
//!
//! Submission is guarded twice, silently both times: no accepted receipt
//! means no store call at all, and a second submit while a create is in
//! flight is ignored rather than queued.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::core::bill::{BillForm, BillPayload, CreateReceipt};
use crate::core::error::BilledError;
use crate::core::navigation::{NavigationGateway, Route};
use crate::core::session::SessionContext;
use crate::core::store::BillStore;
use crate::core::validation::{check_receipt_file, FileCheck};

/// The accepted receipt as held by the controller: the picked filename plus
/// what the store answered when the file was pushed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub file_name: String,
    pub file_url: String,
    pub key: String,
}

/// Where the submission pipeline stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NewBillState {
    #[default]
    Idle,
    /// Last file pick was rejected; the inline message is showing
    FileRejected,
    /// A receipt was accepted and uploaded; the form may be submitted
    FileAccepted,
    /// A create call is in flight
    Submitting,
    /// The record was created and navigation to the bills list was requested
    Succeeded,
    /// The store refused the record; the form is kept for resubmission
    Failed { message: String },
}

/// Outcome of a submit attempt that did not error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// The store accepted the record, answered with this receipt
    Created(CreateReceipt),
    /// A guard blocked the attempt; nothing was sent
    Blocked,
}

struct FormSlots {
    state: NewBillState,
    receipt: Option<Receipt>,
    validation_message: Option<&'static str>,
}

/// Orchestrates receipt validation, upload, form submission and post-submit
/// navigation for the new-bill page.
pub struct NewBillController<S, N> {
    store: Arc<S>,
    navigation: Arc<N>,
    session: SessionContext,
    slots: RwLock<FormSlots>,
    in_flight: AtomicBool,
}

impl<S, N> NewBillController<S, N>
where
    S: BillStore,
    N: NavigationGateway,
{
    pub fn new(store: Arc<S>, navigation: Arc<N>, session: SessionContext) -> Self {
        Self {
            store,
            navigation,
            session,
            slots: RwLock::new(FormSlots {
                state: NewBillState::Idle,
                receipt: None,
                validation_message: None,
            }),
            in_flight: AtomicBool::new(false),
        }
    }

    /// Handle a file pick from the form's file input.
    ///
    /// A rejected pick stores the fixed inline message and leaves any
    /// previously accepted receipt untouched. An accepted pick clears the
    /// message and pushes the file to the store; the answered URL and key
    /// become the controller's held receipt. An upload failure is reported
    /// and returned, leaving the previous receipt in place.
    pub async fn attach_receipt(&self, filename: &str) -> Result<FileCheck, BilledError> {
        let check = check_receipt_file(filename);
        match &check {
            FileCheck::Rejected { message } => {
                tracing::warn!(file = filename, "justificatif refusé");
                let mut slots = self.write_slots();
                slots.validation_message = Some(*message);
                slots.state = NewBillState::FileRejected;
                Ok(check)
            }
            FileCheck::Accepted { .. } => {
                self.write_slots().validation_message = None;
                let email = self.session.email().unwrap_or_default().to_string();
                let uploaded = self
                    .store
                    .create(BillPayload::upload(filename, &email))
                    .await;
                match uploaded {
                    Ok(receipt) => {
                        tracing::debug!(file = filename, key = %receipt.key, "justificatif téléversé");
                        let mut slots = self.write_slots();
                        slots.receipt = Some(Receipt {
                            file_name: filename.to_string(),
                            file_url: receipt.file_url,
                            key: receipt.key,
                        });
                        slots.state = NewBillState::FileAccepted;
                        Ok(check)
                    }
                    Err(e) => {
                        tracing::error!(error = %e, file = filename, "échec du téléversement du justificatif");
                        Err(e.into())
                    }
                }
            }
        }
    }

    /// Submit the captured form.
    ///
    /// Blocked (silently, no error surface) when no accepted receipt is held
    /// or while an earlier create is still in flight. Otherwise the form is
    /// normalized, sent to the store exactly once, and on success the
    /// controller requests exactly one navigation to the bills list. A store
    /// failure keeps the form and receipt so the user can resubmit.
    pub async fn submit(&self, form: &BillForm) -> Result<Submission, BilledError> {
        let Some(receipt) = self.receipt() else {
            tracing::debug!("soumission ignorée : aucun justificatif accepté");
            return Ok(Submission::Blocked);
        };
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!("soumission ignorée : une création est déjà en cours");
            return Ok(Submission::Blocked);
        }

        let email = self.session.email().unwrap_or_default();
        let payload = match form.to_payload(&receipt.file_name, &receipt.file_url, email) {
            Ok(payload) => payload,
            Err(e) => {
                self.in_flight.store(false, Ordering::Release);
                return Err(e.into());
            }
        };

        self.write_slots().state = NewBillState::Submitting;
        let created = self.store.create(payload).await;
        self.in_flight.store(false, Ordering::Release);

        match created {
            Ok(created) => {
                tracing::info!(key = %created.key, "note de frais créée");
                self.write_slots().state = NewBillState::Succeeded;
                self.navigation.on_navigate(Route::Bills);
                Ok(Submission::Created(created))
            }
            Err(e) => {
                tracing::error!(error = %e, "échec de la création de la note de frais");
                self.write_slots().state = NewBillState::Failed {
                    message: e.to_string(),
                };
                Err(e.into())
            }
        }
    }

    /// Current pipeline state.
    pub fn state(&self) -> NewBillState {
        self.read_slots().state.clone()
    }

    /// The accepted receipt, if an upload has succeeded.
    pub fn receipt(&self) -> Option<Receipt> {
        self.read_slots().receipt.clone()
    }

    /// Text the UI must set as the file input's native validity message.
    /// `None` means the message must be cleared.
    pub fn validation_message(&self) -> Option<&'static str> {
        self.read_slots().validation_message
    }

    fn read_slots(&self) -> RwLockReadGuard<'_, FormSlots> {
        self.slots.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_slots(&self) -> RwLockWriteGuard<'_, FormSlots> {
        self.slots.write().unwrap_or_else(PoisonError::into_inner)
    }
}
