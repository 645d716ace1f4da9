//! Typed error handling for the billed client core
//!
//! Errors are split by recovery strategy rather than by origin:
//!
//! - [`ValidationError`]: input problems detected before any network call.
//!   Recovered locally: they block a submission and are surfaced inline,
//!   never escalated to a page-level error view.
//! - [`StoreError`]: the remote store rejected or never answered a call.
//!   Surfaced to the user verbatim (`Display` is the exact on-page text,
//!   e.g. "Erreur 404") and never retried automatically.
//!
//! [`BilledError`] is the umbrella type returned at the controller seam, so
//! callers can match on the category:
//!
//! ```rust,ignore
//! match controller.submit(&form).await {
//!     Ok(Submission::Created(receipt)) => { /* navigated to the bills list */ }
//!     Ok(Submission::Blocked) => { /* guard: ignore silently */ }
//!     Err(BilledError::Validation(e)) => show_inline(e.to_string()),
//!     Err(BilledError::Store(e)) => report(e.to_string()),
//! }
//! ```

use thiserror::Error;

/// Umbrella error type returned by the controllers.
#[derive(Debug, Error)]
pub enum BilledError {
    /// Input validation failed before reaching the store
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The remote store rejected or failed a call
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors raised while normalizing user input.
///
/// The `Display` text is the user-facing message, in French like the rest of
/// the form surface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The chosen receipt file is not one of the accepted image formats
    #[error("{}", crate::core::validation::ACCEPTED_FORMATS_MESSAGE)]
    UnsupportedFile,

    /// A required form field is missing or empty
    #[error("Le champ '{field}' est requis")]
    MissingField { field: &'static str },

    /// A form field holds a value that cannot be normalized
    #[error("Le champ '{field}' est invalide : {reason}")]
    InvalidField { field: &'static str, reason: String },
}

/// Failures of the remote bill store.
///
/// `Display` carries the human-readable reason exactly as it must appear on
/// the page; the UI never rewrites or generalizes it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The store answered with a non-success status
    #[error("Erreur {status}")]
    Api { status: u16 },

    /// The call never completed (connection, timeout, poisoned state)
    #[error("{0}")]
    Transport(String),

    /// The store answered but the payload could not be decoded
    #[error("{0}")]
    Decode(String),
}
