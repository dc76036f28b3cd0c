//! Errors surfaced synchronously by the simulator.

use thiserror::Error;

/// Result type for simulator operations.
pub type ImsResult<T> = Result<T, ImsError>;

/// Platform error codes attached to [`ImsError::Unsupported`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImsErrorCode {
    /// No specific reason.
    Unspecified,
    /// The IMS service is temporarily unavailable.
    ServiceUnavailable,
    /// The device does not support the requested IMS operation.
    UnsupportedOperation,
}

impl ImsErrorCode {
    /// Returns the platform integer code.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Unspecified => 0,
            Self::ServiceUnavailable => 1,
            Self::UnsupportedOperation => 2,
        }
    }
}

/// Errors returned by simulator operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ImsError {
    /// IMS is not available on the simulated device.
    #[error("{message} (code {})", .code.code())]
    Unsupported {
        /// Platform error code.
        code: ImsErrorCode,
        /// Human-readable description.
        message: String,
    },

    /// The caller queried state that has not been set up yet.
    #[error("precondition failed: {0}")]
    Precondition(&'static str),
}

impl ImsError {
    /// Builds the error raised when IMS is unavailable on the device.
    #[must_use]
    pub fn not_available_on_device() -> Self {
        Self::Unsupported {
            code: ImsErrorCode::UnsupportedOperation,
            message: "IMS not available on device.".to_owned(),
        }
    }
}
