//! Reason details delivered with an unregistration.

use serde::{Deserialize, Serialize};

/// Why IMS became unregistered.
///
/// The simulator passes this through untouched; the codes are whatever
/// the test driver supplies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImsReasonInfo {
    code: i32,
    extra_code: i32,
    extra_message: Option<String>,
}

impl ImsReasonInfo {
    /// Creates reason info with a primary and extra code.
    #[must_use]
    pub const fn new(code: i32, extra_code: i32) -> Self {
        Self {
            code,
            extra_code,
            extra_message: None,
        }
    }

    /// Attaches a free-form diagnostic message.
    #[must_use]
    pub fn with_extra_message(mut self, message: impl Into<String>) -> Self {
        self.extra_message = Some(message.into());
        self
    }

    /// Returns the primary reason code.
    #[must_use]
    pub const fn code(&self) -> i32 {
        self.code
    }

    /// Returns the extra reason code.
    #[must_use]
    pub const fn extra_code(&self) -> i32 {
        self.extra_code
    }

    /// Returns the diagnostic message, if any.
    #[must_use]
    pub fn extra_message(&self) -> Option<&str> {
        self.extra_message.as_deref()
    }
}
