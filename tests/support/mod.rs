//! Shared test harness for the controller and store tests
//!
//! Provides the classic four-bill fixture set, a recording navigation
//! gateway, and a few `BillStore` doubles:
//!
//! - [`StubStore`]: always succeeds, counts calls, remembers created payloads
//! - [`FailingStore`]: every call fails with the configured error
//! - [`ScriptedStore`]: `create` answers a scripted sequence of results
//! - [`GatedStore`]: `create` blocks until a permit is released, for
//!   in-flight guard testing

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use billed::prelude::*;

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn employee_session() -> SessionContext {
    SessionContext::employee("employee@test.tld")
}

/// A form capture mirroring the canonical valid submission.
pub fn valid_form() -> BillForm {
    BillForm {
        name: "Nouvelle facture".to_string(),
        date: "2023-03-22".to_string(),
        expense_type: "Hôtel et logement".to_string(),
        amount: "150".to_string(),
        vat: "30".to_string(),
        pct: "20".to_string(),
        commentary: String::new(),
    }
}

/// The receipt the mocked store answers on `create`.
pub fn stub_receipt() -> CreateReceipt {
    CreateReceipt {
        file_url: "https://localhost:3456/images/test.jpg".to_string(),
        key: "1234".to_string(),
    }
}

fn bill(
    id: &str,
    name: &str,
    date: &str,
    expense_type: &str,
    amount: f64,
    vat: &str,
    status: BillStatus,
    file_url: Option<&str>,
) -> Bill {
    Bill {
        id: id.to_string(),
        name: Some(name.to_string()),
        date: Some(date.to_string()),
        expense_type: Some(expense_type.to_string()),
        amount: Some(amount),
        vat: (!vat.is_empty()).then(|| vat.to_string()),
        pct: Some(20),
        commentary: None,
        file_name: None,
        file_url: file_url.map(str::to_string),
        status,
        email: Some("a@a".to_string()),
    }
}

/// Four bill summaries, one per corner of the fixture space.
pub fn fixture_bills() -> Vec<Bill> {
    vec![
        bill(
            "47qAXb6fIm2zOKkLzMro",
            "encore",
            "2004-04-04",
            "Hôtel et logement",
            400.0,
            "80",
            BillStatus::Pending,
            Some("https://test.storage.tld/images/encore.jpg"),
        ),
        bill(
            "BeKy5Mo4jkmdfPGYpTxZ",
            "test1",
            "2001-01-01",
            "Transports",
            100.0,
            "",
            BillStatus::Refused,
            None,
        ),
        bill(
            "UIUZtnPQvnbFnB0ozvJh",
            "test3",
            "2003-03-03",
            "Services en ligne",
            300.0,
            "60",
            BillStatus::Accepted,
            Some("https://test.storage.tld/images/test3.png"),
        ),
        bill(
            "qcCK3SzECmaZAGRrHjaC",
            "test2",
            "2002-02-02",
            "Restaurants et bars",
            200.0,
            "40",
            BillStatus::Refused,
            Some("https://test.storage.tld/images/test2.jpg"),
        ),
    ]
}

// ---------------------------------------------------------------------------
// RecordingGateway — captures navigation requests
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct RecordingGateway {
    routes: Mutex<Vec<Route>>,
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().unwrap().clone()
    }

    /// The icon the routing shell would currently highlight: the one of the
    /// last navigated route.
    pub fn active_icon(&self) -> Option<LayoutIcon> {
        self.routes.lock().unwrap().last().map(Route::layout_icon)
    }
}

impl NavigationGateway for RecordingGateway {
    fn on_navigate(&self, route: Route) {
        self.routes.lock().unwrap().push(route);
    }
}

// ---------------------------------------------------------------------------
// StubStore — always succeeds, observes traffic
// ---------------------------------------------------------------------------

pub struct StubStore {
    bills: Vec<Bill>,
    receipt: CreateReceipt,
    list_calls: AtomicUsize,
    create_calls: AtomicUsize,
    created: Mutex<Vec<BillPayload>>,
}

impl StubStore {
    pub fn new() -> Self {
        Self::with_bills(fixture_bills())
    }

    pub fn with_bills(bills: Vec<Bill>) -> Self {
        Self {
            bills,
            receipt: stub_receipt(),
            list_calls: AtomicUsize::new(0),
            create_calls: AtomicUsize::new(0),
            created: Mutex::new(Vec::new()),
        }
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn created_payloads(&self) -> Vec<BillPayload> {
        self.created.lock().unwrap().clone()
    }
}

#[async_trait]
impl BillStore for StubStore {
    async fn list(&self) -> Result<Vec<Bill>, StoreError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.bills.clone())
    }

    async fn create(&self, payload: BillPayload) -> Result<CreateReceipt, StoreError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.created.lock().unwrap().push(payload);
        Ok(self.receipt.clone())
    }
}

// ---------------------------------------------------------------------------
// FailingStore — every call fails with the configured error
// ---------------------------------------------------------------------------

pub struct FailingStore {
    error: StoreError,
}

impl FailingStore {
    pub fn new(error: StoreError) -> Self {
        Self { error }
    }

    pub fn api(status: u16) -> Self {
        Self::new(StoreError::Api { status })
    }
}

#[async_trait]
impl BillStore for FailingStore {
    async fn list(&self) -> Result<Vec<Bill>, StoreError> {
        Err(self.error.clone())
    }

    async fn create(&self, _payload: BillPayload) -> Result<CreateReceipt, StoreError> {
        Err(self.error.clone())
    }
}

// ---------------------------------------------------------------------------
// ScriptedStore — create answers a fixed sequence
// ---------------------------------------------------------------------------

pub struct ScriptedStore {
    responses: Mutex<std::collections::VecDeque<Result<CreateReceipt, StoreError>>>,
    create_calls: AtomicUsize,
}

impl ScriptedStore {
    pub fn new(responses: Vec<Result<CreateReceipt, StoreError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            create_calls: AtomicUsize::new(0),
        }
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BillStore for ScriptedStore {
    async fn list(&self) -> Result<Vec<Bill>, StoreError> {
        Ok(Vec::new())
    }

    async fn create(&self, _payload: BillPayload) -> Result<CreateReceipt, StoreError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(StoreError::Transport("script épuisé".to_string())))
    }
}

// ---------------------------------------------------------------------------
// GatedStore — create blocks until a permit is released
// ---------------------------------------------------------------------------

pub struct GatedStore {
    gate: tokio::sync::Semaphore,
    create_calls: AtomicUsize,
}

impl GatedStore {
    pub fn new() -> Self {
        Self {
            gate: tokio::sync::Semaphore::new(0),
            create_calls: AtomicUsize::new(0),
        }
    }

    /// Let one pending (or future) create call through.
    pub fn release(&self) {
        self.gate.add_permits(1);
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BillStore for GatedStore {
    async fn list(&self) -> Result<Vec<Bill>, StoreError> {
        Ok(Vec::new())
    }

    async fn create(&self, _payload: BillPayload) -> Result<CreateReceipt, StoreError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        let permit = self
            .gate
            .acquire()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;
        permit.forget();
        Ok(stub_receipt())
    }
}
