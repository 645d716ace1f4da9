//! Bill entity and the shapes it takes across the submission pipeline
//!
//! A bill exists in three forms:
//!
//! - [`BillForm`]: the raw form capture, every field exactly as the user
//!   typed it. Owned by the UI adapter, handed to the controller on submit.
//! - [`BillPayload`]: the normalized record sent to the store. Produced from
//!   a [`BillForm`] by the validators, or minimally by
//!   [`BillPayload::upload`] when pushing a receipt file ahead of the form.
//! - [`Bill`]: a summary as the store returns it from `list`. Tolerant by
//!   construction: a summary with missing or degenerate fields must still
//!   produce a row, so everything the store may omit is optional here.
//!
//! Wire field names are camelCase (`fileUrl`, `fileName`), matching the
//! store's JSON contract.

use serde::{Deserialize, Serialize};

use crate::core::error::ValidationError;
use crate::core::validation::validators;

/// Lifecycle status of a bill. Assigned `Pending` at creation and mutated
/// only by the store's back office, never by this client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    #[default]
    Pending,
    Accepted,
    Refused,
}

/// The fixed expense category catalogue offered by the form's select menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpenseType {
    #[serde(rename = "Transports")]
    Transports,
    #[serde(rename = "Restaurants et bars")]
    RestaurantsEtBars,
    #[serde(rename = "Hôtel et logement")]
    HotelEtLogement,
    #[serde(rename = "Services en ligne")]
    ServicesEnLigne,
    #[serde(rename = "IT et électronique")]
    ItEtElectronique,
    #[serde(rename = "Equipement et matériel")]
    EquipementEtMateriel,
    #[serde(rename = "Fournitures de bureau")]
    FournituresDeBureau,
}

impl ExpenseType {
    /// Every category, in the order the form's select menu lists them.
    pub const ALL: [ExpenseType; 7] = [
        ExpenseType::Transports,
        ExpenseType::RestaurantsEtBars,
        ExpenseType::HotelEtLogement,
        ExpenseType::ServicesEnLigne,
        ExpenseType::ItEtElectronique,
        ExpenseType::EquipementEtMateriel,
        ExpenseType::FournituresDeBureau,
    ];

    /// The French label shown in the select menu and stored on the wire.
    pub fn label(&self) -> &'static str {
        match self {
            ExpenseType::Transports => "Transports",
            ExpenseType::RestaurantsEtBars => "Restaurants et bars",
            ExpenseType::HotelEtLogement => "Hôtel et logement",
            ExpenseType::ServicesEnLigne => "Services en ligne",
            ExpenseType::ItEtElectronique => "IT et électronique",
            ExpenseType::EquipementEtMateriel => "Equipement et matériel",
            ExpenseType::FournituresDeBureau => "Fournitures de bureau",
        }
    }

    /// Resolve a select-menu label back to its category.
    pub fn from_label(label: &str) -> Option<ExpenseType> {
        Self::ALL.iter().copied().find(|t| t.label() == label)
    }
}

impl std::fmt::Display for ExpenseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A bill summary as returned by the store's `list` operation.
///
/// Keys are opaque store-assigned strings. Every field the store may omit is
/// optional: a degenerate summary still renders as a row of empty cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(rename = "type", default)]
    pub expense_type: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub vat: Option<String>,
    #[serde(default)]
    pub pct: Option<u32>,
    #[serde(default)]
    pub commentary: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub status: BillStatus,
    #[serde(default)]
    pub email: Option<String>,
}

/// Raw form capture. Every field holds exactly what the UI inputs hold at
/// submit time; normalization happens in [`BillForm::to_payload`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BillForm {
    pub name: String,
    pub date: String,
    pub expense_type: String,
    pub amount: String,
    pub vat: String,
    pub pct: String,
    pub commentary: String,
}

impl BillForm {
    /// Normalize the raw capture into the record sent to the store.
    ///
    /// Field rules: name and date are required (date as ISO `AAAA-MM-JJ`),
    /// the type must be one of the catalogue labels, amount must parse when
    /// present, the VAT amount stays textual but must read as a number, and
    /// the VAT percentage falls back to 20 instead of erroring. The receipt
    /// pieces come from the controller's accepted upload, the email from the
    /// session.
    pub fn to_payload(
        &self,
        file_name: &str,
        file_url: &str,
        email: &str,
    ) -> Result<BillPayload, ValidationError> {
        Ok(BillPayload {
            email: email.to_string(),
            name: Some(validators::required("name", &self.name)?.to_string()),
            date: Some(validators::iso_date("date", &self.date)?),
            expense_type: Some(validators::in_catalogue("type", &self.expense_type)?),
            amount: validators::numeric("amount", &self.amount)?,
            vat: validators::numeric_text("vat", &self.vat)?,
            pct: Some(validators::integer_or(DEFAULT_VAT_PCT, &self.pct)),
            commentary: validators::optional_text(&self.commentary),
            file_name: Some(file_name.to_string()),
            file_url: Some(file_url.to_string()),
            status: Some(BillStatus::Pending),
        })
    }
}

/// VAT percentage applied when the field is left empty or unreadable.
pub const DEFAULT_VAT_PCT: u32 = 20;

/// A normalized bill record accepted by the store's `create` operation.
///
/// Two shapes travel through the same operation: the minimal upload payload
/// (receipt file + owner, nothing else) and the full record assembled at
/// submit time. Absent fields are skipped on the wire rather than sent null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillPayload {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub expense_type: Option<ExpenseType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pct: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commentary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<BillStatus>,
}

impl BillPayload {
    /// Minimal payload pushing a freshly accepted receipt file to the store.
    /// The store answers with the hosted file URL and the record key.
    pub fn upload(file_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
            date: None,
            expense_type: None,
            amount: None,
            vat: None,
            pct: None,
            commentary: None,
            file_name: Some(file_name.into()),
            file_url: None,
            status: None,
        }
    }
}

/// Successful `create` response: where the receipt file now lives and the
/// key of the stored record. Handed back to the caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReceipt {
    pub file_url: String,
    pub key: String,
}
