//! Caller identity for store operations
//!
//! The routing shell authenticates the user and persists the session; this
//! crate only ever reads it. The context is injected at controller
//! construction instead of being read from ambient storage, so tests can
//! supply any identity without touching shared state.

/// Identity of the authenticated caller, as persisted by the session layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionContext {
    /// An employee submitting and consulting their own bills
    Employee { email: String, status: String },

    /// A back-office administrator (consumes the admin dashboard, not the
    /// employee pipeline)
    Admin { email: String, status: String },

    /// No authenticated session
    Anonymous,
}

impl SessionContext {
    /// Convenience constructor for the common employee case.
    pub fn employee(email: impl Into<String>) -> Self {
        SessionContext::Employee {
            email: email.into(),
            status: "connected".to_string(),
        }
    }

    /// The session's email, `None` for anonymous callers.
    pub fn email(&self) -> Option<&str> {
        match self {
            SessionContext::Employee { email, .. } | SessionContext::Admin { email, .. } => {
                Some(email)
            }
            SessionContext::Anonymous => None,
        }
    }

    /// The persisted user type label.
    pub fn user_type(&self) -> &'static str {
        match self {
            SessionContext::Employee { .. } => "Employee",
            SessionContext::Admin { .. } => "Admin",
            SessionContext::Anonymous => "Anonymous",
        }
    }

    pub fn is_connected(&self) -> bool {
        match self {
            SessionContext::Employee { status, .. } | SessionContext::Admin { status, .. } => {
                status == "connected"
            }
            SessionContext::Anonymous => false,
        }
    }
}
