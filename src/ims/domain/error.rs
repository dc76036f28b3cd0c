//! Error types for IMS domain value parsing.

use thiserror::Error;

/// Errors returned while converting platform codes into domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ImsDomainError {
    /// The integer code does not name a registration technology.
    #[error("unknown registration technology code: {0}")]
    UnknownRegistrationTech(i32),

    /// The string does not name a registration technology.
    #[error("unknown registration technology: {0}")]
    UnknownRegistrationTechName(String),

    /// The bit value does not name a single MmTel capability.
    #[error("unknown MmTel capability bit: {0:#x}")]
    UnknownCapability(u32),
}
