//! IMS registration technology.

use super::ImsDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Network technology the IMS registration is held over.
///
/// [`RegistrationTech::None`] is the distinguished "not registered" value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationTech {
    /// IMS is not registered.
    #[default]
    None,
    /// Registered over LTE.
    Lte,
    /// Registered over Wi-Fi (IWLAN).
    Iwlan,
    /// Registered over the data connection of another SIM.
    CrossSim,
    /// Registered over 5G NR.
    Nr,
}

impl RegistrationTech {
    /// Returns the platform integer code.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::None => -1,
            Self::Lte => 0,
            Self::Iwlan => 1,
            Self::CrossSim => 2,
            Self::Nr => 3,
        }
    }

    /// Returns the canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Lte => "lte",
            Self::Iwlan => "iwlan",
            Self::CrossSim => "cross_sim",
            Self::Nr => "nr",
        }
    }

    /// Returns whether this value denotes an active registration.
    #[must_use]
    pub const fn is_registered(self) -> bool {
        !matches!(self, Self::None)
    }
}

impl fmt::Display for RegistrationTech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<i32> for RegistrationTech {
    type Error = ImsDomainError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            -1 => Ok(Self::None),
            0 => Ok(Self::Lte),
            1 => Ok(Self::Iwlan),
            2 => Ok(Self::CrossSim),
            3 => Ok(Self::Nr),
            _ => Err(ImsDomainError::UnknownRegistrationTech(code)),
        }
    }
}

impl TryFrom<&str> for RegistrationTech {
    type Error = ImsDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "none" => Ok(Self::None),
            "lte" => Ok(Self::Lte),
            "iwlan" => Ok(Self::Iwlan),
            "cross_sim" => Ok(Self::CrossSim),
            "nr" => Ok(Self::Nr),
            _ => Err(ImsDomainError::UnknownRegistrationTechName(value.to_owned())),
        }
    }
}
