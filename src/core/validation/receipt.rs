//! Receipt file gatekeeping
//!
//! The form only ever uploads receipt images. The check runs on the filename
//! alone (the extension after the last dot, compared case-insensitively) and
//! is idempotent: no hidden state, same answer for the same name every time.

/// Extensions the store accepts for receipt uploads.
pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// The fixed inline message shown on the file input when a pick is rejected.
pub const ACCEPTED_FORMATS_MESSAGE: &str = "Formats acceptés : jpg, jpeg et png";

/// Outcome of a receipt file check.
///
/// On rejection the message must land verbatim in the file input's native
/// validity text; on acceptance that text must be cleared so an earlier
/// rejection does not linger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileCheck {
    Accepted { extension: String },
    Rejected { message: &'static str },
}

impl FileCheck {
    pub fn is_accepted(&self) -> bool {
        matches!(self, FileCheck::Accepted { .. })
    }

    /// The inline message to surface, `None` when the pick was accepted.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            FileCheck::Accepted { .. } => None,
            FileCheck::Rejected { message } => Some(message),
        }
    }
}

/// Check a picked filename against the accepted receipt formats.
///
/// A name without any dot, or ending in a dot, has no extension and is
/// rejected like any non-image format.
pub fn check_receipt_file(filename: &str) -> FileCheck {
    match filename.rsplit_once('.') {
        Some((_, extension)) => {
            let extension = extension.to_lowercase();
            if ACCEPTED_EXTENSIONS.contains(&extension.as_str()) {
                FileCheck::Accepted { extension }
            } else {
                FileCheck::Rejected {
                    message: ACCEPTED_FORMATS_MESSAGE,
                }
            }
        }
        None => FileCheck::Rejected {
            message: ACCEPTED_FORMATS_MESSAGE,
        },
    }
}
