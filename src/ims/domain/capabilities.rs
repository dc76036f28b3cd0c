//! MmTel capability flags and snapshots.

use super::ImsDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single MmTel capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MmTelCapability {
    /// Voice calling over IMS.
    Voice,
    /// Video calling over IMS.
    Video,
    /// Supplementary service configuration over XCAP (Ut).
    Ut,
    /// SMS over IMS.
    Sms,
}

impl MmTelCapability {
    /// Every known capability, in bit order.
    pub const ALL: [Self; 4] = [Self::Voice, Self::Video, Self::Ut, Self::Sms];

    /// Returns the platform bit for this capability.
    #[must_use]
    pub const fn bit(self) -> u32 {
        match self {
            Self::Voice => 1 << 0,
            Self::Video => 1 << 1,
            Self::Ut => 1 << 2,
            Self::Sms => 1 << 3,
        }
    }

    /// Returns the canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Voice => "voice",
            Self::Video => "video",
            Self::Ut => "ut",
            Self::Sms => "sms",
        }
    }
}

impl fmt::Display for MmTelCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<u32> for MmTelCapability {
    type Error = ImsDomainError;

    fn try_from(bit: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|capability| capability.bit() == bit)
            .ok_or(ImsDomainError::UnknownCapability(bit))
    }
}

/// Snapshot of the MmTel capabilities currently available.
///
/// Serialised as the platform bit mask. Bits that do not correspond to a
/// known [`MmTelCapability`] are dropped on construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct MmTelCapabilities {
    mask: u32,
}

impl MmTelCapabilities {
    const KNOWN_MASK: u32 = 0b1111;

    /// Creates a snapshot with no capabilities.
    #[must_use]
    pub const fn empty() -> Self {
        Self { mask: 0 }
    }

    /// Creates a snapshot from a platform bit mask.
    #[must_use]
    pub const fn from_mask(mask: u32) -> Self {
        Self {
            mask: mask & Self::KNOWN_MASK,
        }
    }

    /// Creates a snapshot asserting each of `capabilities`.
    #[must_use]
    pub fn from_capabilities(capabilities: impl IntoIterator<Item = MmTelCapability>) -> Self {
        let mut snapshot = Self::empty();
        snapshot.add_capabilities(capabilities);
        snapshot
    }

    /// Asserts the given capabilities.
    pub fn add_capabilities(&mut self, capabilities: impl IntoIterator<Item = MmTelCapability>) {
        for capability in capabilities {
            self.mask |= capability.bit();
        }
    }

    /// Clears the given capabilities.
    pub fn remove_capabilities(&mut self, capabilities: impl IntoIterator<Item = MmTelCapability>) {
        for capability in capabilities {
            self.mask &= !capability.bit();
        }
    }

    /// Returns whether `capability` is asserted.
    #[must_use]
    pub const fn is_capable(&self, capability: MmTelCapability) -> bool {
        self.mask & capability.bit() != 0
    }

    /// Returns the platform bit mask.
    #[must_use]
    pub const fn mask(&self) -> u32 {
        self.mask
    }

    /// Returns whether no capability is asserted.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.mask == 0
    }

    /// Iterates over the asserted capabilities in bit order.
    pub fn iter(&self) -> impl Iterator<Item = MmTelCapability> + '_ {
        MmTelCapability::ALL
            .into_iter()
            .filter(move |capability| self.is_capable(*capability))
    }
}

impl From<u32> for MmTelCapabilities {
    fn from(mask: u32) -> Self {
        Self::from_mask(mask)
    }
}

impl From<MmTelCapabilities> for u32 {
    fn from(capabilities: MmTelCapabilities) -> Self {
        capabilities.mask
    }
}

impl FromIterator<MmTelCapability> for MmTelCapabilities {
    fn from_iter<T: IntoIterator<Item = MmTelCapability>>(iter: T) -> Self {
        Self::from_capabilities(iter)
    }
}
